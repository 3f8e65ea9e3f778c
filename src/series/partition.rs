// インデックス範囲のワーカー分割

use std::ops::Range;

/// 0..len を parts 個の連続した互いに素な範囲に分割
///
/// 各範囲の長さの差は高々1。parts が len より大きい場合は末尾が空範囲になる。
/// parts == 0 の場合は空のVecを返す。
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    if parts == 0 {
        return Vec::new();
    }

    let base = len / parts;
    let remainder = len % parts;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for part in 0..parts {
        let size = base + usize::from(part < remainder);
        ranges.push(start..start + size);
        start += size;
    }

    ranges
}
