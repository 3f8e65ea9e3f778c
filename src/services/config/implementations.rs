// 設定管理の具象実装

use crate::core::{ConfigPreset, EvaluationConfig, TermStrategy, ThreadPolicy};

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultEvaluationConfig {
    strategy: TermStrategy,
    thread_policy: ThreadPolicy,
    enable_progress: bool,
}

impl DefaultEvaluationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// プリセットから設定を作成
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Fast => Self::default()
                .with_strategy(TermStrategy::Chunked)
                .with_thread_policy(ThreadPolicy::ClampToHardware),
            ConfigPreset::Testing => Self::default().with_progress_reporting(false),
        }
    }

    pub fn with_strategy(mut self, strategy: TermStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_thread_policy(mut self, thread_policy: ThreadPolicy) -> Self {
        self.thread_policy = thread_policy;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultEvaluationConfig {
    fn default() -> Self {
        Self {
            strategy: TermStrategy::Direct,
            thread_policy: ThreadPolicy::Exact,
            enable_progress: true,
        }
    }
}

impl EvaluationConfig for DefaultEvaluationConfig {
    fn strategy(&self) -> TermStrategy {
        self.strategy
    }

    fn thread_policy(&self) -> ThreadPolicy {
        self.thread_policy
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
