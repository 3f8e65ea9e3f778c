// コアトレイト定義
// 級数評価システムの抽象化インターフェース

use super::types::{PartialSum, SeriesOutcome, TermStrategy, ThreadPolicy};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// 評価設定を抽象化するトレイト
#[automock]
pub trait EvaluationConfig: Send + Sync {
    /// 項の計算方式を取得
    fn strategy(&self) -> TermStrategy;

    /// スレッド数の扱いを取得
    fn thread_policy(&self) -> ThreadPolicy;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

/// 進捗報告の抽象化トレイト
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 評価開始時の報告
    async fn report_started(&self, iterations: usize, threads: usize);

    /// ワーカーの部分和確定時の報告
    async fn report_partial(&self, partial: &PartialSum);

    /// 評価完了時の報告
    async fn report_completed(&self, outcome: &SeriesOutcome);
}

/// 評価結果の永続化抽象化トレイト
#[automock]
#[async_trait]
pub trait ReportPersistence: Send + Sync {
    /// 評価結果の保存
    async fn store_outcome(&self, outcome: &SeriesOutcome) -> Result<()>;

    /// 永続化の完了処理
    async fn finalize(&self) -> Result<()>;
}
