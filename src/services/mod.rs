// サービス層 - 機能別の具象実装
// 各サービスは core のトレイトを実装し、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod persistence;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::DefaultEvaluationConfig;
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
pub use persistence::{
    EvaluationReport, JsonReportPersistence, MemoryReportPersistence, NoOpReportPersistence,
};
