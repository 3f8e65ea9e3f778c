// 評価結果の永続化機能
// JSONレポート出力、テスト用メモリ保存

pub mod implementations;

// 公開API
pub use implementations::{
    EvaluationReport, JsonReportPersistence, MemoryReportPersistence, NoOpReportPersistence,
};
