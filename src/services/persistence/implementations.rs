// 評価結果永続化の具象実装

use crate::core::{ReportPersistence, SeriesOutcome};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;

/// JSON形式で保存する評価レポート（1回の評価単位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub generated_at: String,
    pub outcome: SeriesOutcome,
}

impl EvaluationReport {
    pub fn new(outcome: SeriesOutcome) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            outcome,
        }
    }
}

/// JSONファイルへの永続化実装
///
/// store_outcome でメモリに蓄積し、finalize でファイル全体を書き出す。
#[derive(Debug, Clone)]
pub struct JsonReportPersistence {
    file_path: PathBuf,
    reports: Arc<AsyncMutex<Vec<EvaluationReport>>>,
}

impl JsonReportPersistence {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            reports: Arc::new(AsyncMutex::new(Vec::new())),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// 保存済みレポートファイルを読み込む
    pub async fn load<P: AsRef<Path>>(file_path: P) -> Result<Vec<EvaluationReport>> {
        let path = file_path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("レポート読み込み失敗: {}", path.display()))?;
        let reports = serde_json::from_str(&content)
            .with_context(|| format!("レポート解析失敗: {}", path.display()))?;
        Ok(reports)
    }
}

#[async_trait]
impl ReportPersistence for JsonReportPersistence {
    async fn store_outcome(&self, outcome: &SeriesOutcome) -> Result<()> {
        self.reports
            .lock()
            .await
            .push(EvaluationReport::new(outcome.clone()));
        Ok(())
    }

    async fn finalize(&self) -> Result<()> {
        let reports = self.reports.lock().await;
        let json = serde_json::to_string_pretty(&*reports)?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("出力ディレクトリ作成失敗: {}", parent.display())
                })?;
            }
        }

        tokio::fs::write(&self.file_path, json)
            .await
            .with_context(|| format!("レポート書き込み失敗: {}", self.file_path.display()))?;
        tracing::debug!(path = %self.file_path.display(), count = reports.len(), "レポートを書き出し");
        Ok(())
    }
}

/// メモリ内保存の永続化実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MemoryReportPersistence {
    outcomes: Arc<Mutex<Vec<SeriesOutcome>>>,
    finalized: Arc<Mutex<bool>>,
}

impl MemoryReportPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用：保存された結果を取得
    pub fn get_stored_outcomes(&self) -> Vec<SeriesOutcome> {
        self.outcomes.lock().unwrap().clone()
    }

    /// テスト用：完了状態を確認
    pub fn is_finalized(&self) -> bool {
        *self.finalized.lock().unwrap()
    }
}

#[async_trait]
impl ReportPersistence for MemoryReportPersistence {
    async fn store_outcome(&self, outcome: &SeriesOutcome) -> Result<()> {
        self.outcomes.lock().unwrap().push(outcome.clone());
        Ok(())
    }

    async fn finalize(&self) -> Result<()> {
        *self.finalized.lock().unwrap() = true;
        Ok(())
    }
}

/// 何も保存しない永続化実装（--output 未指定時）
#[derive(Debug, Clone, Default)]
pub struct NoOpReportPersistence;

impl NoOpReportPersistence {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportPersistence for NoOpReportPersistence {
    async fn store_outcome(&self, _outcome: &SeriesOutcome) -> Result<()> {
        Ok(())
    }

    async fn finalize(&self) -> Result<()> {
        Ok(())
    }
}
