//! テイラー級数による sin(x) の並列近似
//!
//! 項計算を固定数のワーカースレッドに分配し、各ワーカーの部分和を
//! join 後に結合する。参照値 `f64::sin` との絶対誤差も報告する。

pub mod cli;
pub mod core;
pub mod engine;
pub mod series;
pub mod services;

pub use crate::core::{
    SeriesError, SeriesOutcome, SeriesRequest, SeriesResult, TermStrategy, ThreadPolicy,
};
pub use crate::engine::{evaluate_sin, SeriesEngine};
pub use crate::series::{sequential_sum, ParallelSeriesEvaluator};
