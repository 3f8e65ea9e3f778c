// 進捗監視の具象実装
// 結果レポートは標準出力、進捗は標準エラー出力に分離する

use crate::core::{PartialSum, ProgressReporter, SeriesOutcome};
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

fn started_line(iterations: usize, threads: usize) -> String {
    format!("🚀 Evaluating {iterations} terms on {threads} threads...")
}

fn partial_line(partial: &PartialSum) -> String {
    format!(
        "📊 Worker {}: terms {}..{} ({} terms), partial sum = {:e}",
        partial.worker, partial.start, partial.end, partial.terms, partial.sum
    )
}

fn completed_line(outcome: &SeriesOutcome) -> String {
    format!(
        "✅ Completed! Terms: {}, Threads: {}, Elapsed: {}ms",
        outcome.term_count, outcome.threads, outcome.elapsed_ms
    )
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, iterations: usize, threads: usize) {
        if !self.quiet {
            eprintln!("{}", started_line(iterations, threads));
        }
    }

    async fn report_partial(&self, partial: &PartialSum) {
        if !self.quiet {
            eprintln!("{}", partial_line(partial));
        }
    }

    async fn report_completed(&self, outcome: &SeriesOutcome) {
        if !self.quiet {
            eprintln!("{}", completed_line(outcome));
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _iterations: usize, _threads: usize) {
        // 何もしない
    }

    async fn report_partial(&self, _partial: &PartialSum) {
        // 何もしない
    }

    async fn report_completed(&self, _outcome: &SeriesOutcome) {
        // 何もしない
    }
}
