// SeriesEngine - 依存性注入による級数評価エンジン
// 設定・進捗報告・永続化をコンストラクタで注入する

use crate::{
    core::{
        EvaluationConfig, ProgressReporter, ReportPersistence, SeriesError, SeriesOutcome,
        SeriesRequest, SeriesResult,
    },
    series::ParallelSeriesEvaluator,
};
use std::sync::Arc;
use std::time::Instant;

/// 級数評価エンジン
///
/// CPUバウンドな fork-join 計算は `spawn_blocking` 上の rayon プールで実行し、
/// 非同期ランタイムのワーカーを占有しない。
pub struct SeriesEngine<C, R, P> {
    config: Arc<C>,
    reporter: Arc<R>,
    persistence: Arc<P>,
}

impl<C, R, P> SeriesEngine<C, R, P>
where
    C: EvaluationConfig,
    R: ProgressReporter,
    P: ReportPersistence,
{
    /// 新しい評価エンジンを作成
    pub fn new(config: C, reporter: R, persistence: P) -> Self {
        Self {
            config: Arc::new(config),
            reporter: Arc::new(reporter),
            persistence: Arc::new(persistence),
        }
    }

    /// リクエストを評価し、結果を報告・永続化する
    pub async fn evaluate(&self, request: SeriesRequest) -> SeriesResult<SeriesOutcome> {
        let x = request.x();
        let iterations = request.iterations();
        let strategy = self.config.strategy();
        let threads = self.config.thread_policy().resolve(request.thread_count());

        if threads != request.thread_count() {
            tracing::info!(
                requested = request.thread_count(),
                effective = threads,
                "スレッド数をハードウェア上限に制限"
            );
        }
        tracing::info!(x, threads, iterations, strategy = %strategy, "評価開始");

        let progress = self.config.enable_progress_reporting();
        if progress {
            self.reporter.report_started(iterations, threads).await;
        }

        let started = Instant::now();
        let reduction = tokio::task::spawn_blocking(move || {
            let evaluator = ParallelSeriesEvaluator::new(threads, strategy)?;
            Ok::<_, SeriesError>(evaluator.evaluate(x, iterations))
        })
        .await
        .map_err(SeriesError::task)??;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let reference = x.sin();
        let outcome = SeriesOutcome {
            x,
            approximation: reduction.sum,
            reference,
            absolute_error: (reduction.sum - reference).abs(),
            term_count: reduction.term_count,
            epsilon: f64::EPSILON,
            threads,
            strategy,
            partials: reduction.partials,
            elapsed_ms,
        };

        if progress {
            for partial in &outcome.partials {
                self.reporter.report_partial(partial).await;
            }
            self.reporter.report_completed(&outcome).await;
        }

        self.persistence
            .store_outcome(&outcome)
            .await
            .map_err(SeriesError::persistence)?;
        self.persistence
            .finalize()
            .await
            .map_err(SeriesError::persistence)?;

        Ok(outcome)
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 永続化への参照を取得
    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}
