// 高レベル公開API
// SeriesEngine を簡単に使用できるようにするための便利な関数

use super::SeriesEngine;
use crate::{
    core::{SeriesOutcome, SeriesRequest, SeriesResult},
    services::{
        ConsoleProgressReporter, DefaultEvaluationConfig, NoOpProgressReporter,
        NoOpReportPersistence,
    },
};

/// SeriesEngine作成のヘルパー関数
///
/// デフォルト設定・コンソール進捗・保存なし
pub fn create_default_series_engine(
) -> SeriesEngine<DefaultEvaluationConfig, ConsoleProgressReporter, NoOpReportPersistence> {
    SeriesEngine::new(
        DefaultEvaluationConfig::default(),
        ConsoleProgressReporter::new(),
        NoOpReportPersistence::new(),
    )
}

/// SeriesEngine作成のヘルパー関数（静音版）
///
/// テストやライブラリ利用向け
pub fn create_quiet_series_engine(
) -> SeriesEngine<DefaultEvaluationConfig, NoOpProgressReporter, NoOpReportPersistence> {
    SeriesEngine::new(
        DefaultEvaluationConfig::default().with_progress_reporting(false),
        NoOpProgressReporter::new(),
        NoOpReportPersistence::new(),
    )
}

/// 1回限りの評価（静音エンジンを内部で作成）
pub async fn evaluate_sin(x: f64, threads: usize, iterations: usize) -> SeriesResult<SeriesOutcome> {
    let request = SeriesRequest::new(x, threads, iterations)?;
    create_quiet_series_engine().evaluate(request).await
}
