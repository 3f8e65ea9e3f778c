// 進捗監視機能
// 評価開始、ワーカー部分和、完了の通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
