// 級数評価に関連するデータ型定義

use super::error::{SeriesError, SeriesResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 級数評価の入力（一度だけ構築され、評価器に消費される）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRequest {
    x: f64,
    thread_count: usize,
    iterations: usize,
}

impl SeriesRequest {
    /// 検証付きでリクエストを作成
    pub fn new(x: f64, thread_count: usize, iterations: usize) -> SeriesResult<Self> {
        if !x.is_finite() {
            return Err(SeriesError::validation("x", format!("有限の実数である必要があります: {x}")));
        }
        if thread_count == 0 {
            return Err(SeriesError::validation("threads", "1以上である必要があります"));
        }
        if thread_count > max_thread_count() {
            return Err(SeriesError::validation(
                "threads",
                format!("{}以下である必要があります: {thread_count}", max_thread_count()),
            ));
        }
        if iterations == 0 {
            return Err(SeriesError::validation("iterations", "1以上である必要があります"));
        }

        Ok(Self {
            x,
            thread_count,
            iterations,
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// 項の計算方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TermStrategy {
    /// 各項をインデックスから独立に計算
    #[default]
    Direct,
    /// チャンク先頭のみ直接計算し、チャンク内は漸化式で進める
    Chunked,
}

impl TermStrategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Chunked => "chunked",
        }
    }
}

impl fmt::Display for TermStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// スレッドプールが保持できるワーカー数の上限
///
/// これを超える要求は切り詰めずに入力エラーとする。
pub fn max_thread_count() -> usize {
    rayon::max_num_threads()
}

/// 要求スレッド数の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadPolicy {
    /// 要求された数をそのまま使用
    #[default]
    Exact,
    /// ハードウェアの論理CPU数を上限とする
    ClampToHardware,
}

impl ThreadPolicy {
    /// 実際に使用するスレッド数を決定
    pub fn resolve(&self, requested: usize) -> usize {
        match self {
            Self::Exact => requested,
            Self::ClampToHardware => requested.min(num_cpus::get().max(1)),
        }
    }
}

/// 設定プリセット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigPreset {
    /// 直接計算・スレッド数厳守
    #[default]
    Default,
    /// チャンク漸化式・ハードウェア上限
    Fast,
    /// 進捗報告なし（テスト・ベンチマーク用）
    Testing,
}

impl FromStr for ConfigPreset {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "fast" | "high_performance" => Ok(Self::Fast),
            "testing" => Ok(Self::Testing),
            other => Err(SeriesError::configuration(format!("未知のプリセット: {other}"))),
        }
    }
}

/// 単一ワーカーが所有する部分和
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialSum {
    pub worker: usize,
    pub start: usize,
    pub end: usize,
    pub sum: f64,
    pub terms: usize,
}

/// 評価全体の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesOutcome {
    pub x: f64,
    pub approximation: f64,
    pub reference: f64,
    pub absolute_error: f64,
    pub term_count: usize,
    pub epsilon: f64,
    pub threads: usize,
    pub strategy: TermStrategy,
    pub partials: Vec<PartialSum>,
    pub elapsed_ms: u64,
}
