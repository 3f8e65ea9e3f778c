//! テイラー級数の項計算
//!
//! sin(x) = x - x³/3! + x⁵/5! - x⁷/7! + ...
//!
//! 項インデックス n (0始まり) は次数 k = 2n+1 に対応する。
//! べき乗・階乗ルーチンは使わず、四則演算のみで計算する。

use crate::core::TermStrategy;
use std::ops::Range;

/// n番目の項をインデックスのみから計算
///
/// x/1 · x/2 · … · x/k の逐次積で x^k/k! を求めるため、
/// 階乗のオーバーフローが起きない。途中で0にアンダーフローした時点で打ち切る。
pub fn direct_term(x: f64, n: usize) -> f64 {
    let k = 2 * n + 1;
    let mut magnitude = 1.0_f64;
    for i in 1..=k {
        magnitude *= x / i as f64;
        if magnitude == 0.0 {
            break;
        }
    }

    if n % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// 直前の項 (n-1) から n番目の項を求める漸化式
///
/// term_k = -term_{k-2} · x² / ((k-1)·k)
#[inline]
pub fn next_term(previous: f64, x: f64, n: usize) -> f64 {
    let k = (2 * n + 1) as f64;
    -previous * (x * x) / ((k - 1.0) * k)
}

/// 連続したインデックス範囲の部分和を計算
///
/// 戻り値は (部分和, 加算した項数)
pub fn chunk_sum(x: f64, range: Range<usize>, strategy: TermStrategy) -> (f64, usize) {
    let terms = range.len();
    if terms == 0 {
        return (0.0, 0);
    }

    let sum = match strategy {
        TermStrategy::Direct => range.fold(0.0, |acc, n| acc + direct_term(x, n)),
        TermStrategy::Chunked => {
            // チャンク境界で漸化式を再開する
            let mut term = direct_term(x, range.start);
            let mut sum = term;
            for n in (range.start + 1)..range.end {
                term = next_term(term, x, n);
                sum += term;
            }
            sum
        }
    };

    (sum, terms)
}

/// 単一スレッドの漸化式による参照実装
pub fn sequential_sum(x: f64, iterations: usize) -> f64 {
    if iterations == 0 {
        return 0.0;
    }

    let mut term = x;
    let mut sum = x;
    for n in 1..iterations {
        term = next_term(term, x, n);
        sum += term;
    }
    sum
}
