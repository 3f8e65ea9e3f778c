// 設定管理機能
// デフォルト設定とプリセット

pub mod implementations;

// 公開API
pub use implementations::DefaultEvaluationConfig;
