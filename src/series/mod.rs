// 級数評価の数値コア
// 項計算・範囲分割・fork-join 集約

pub mod evaluator;
pub mod partition;
pub mod terms;

// 公開API
pub use evaluator::{ParallelSeriesEvaluator, Reduction};
pub use partition::partition;
pub use terms::{chunk_sum, direct_term, next_term, sequential_sum};
