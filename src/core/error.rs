// Custom error types for series evaluation
// 級数評価専用のカスタムエラー型定義

use thiserror::Error;

/// 級数評価固有のエラー型
#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("使用方法エラー: {message}")]
    UsageError { message: String },

    #[error("引数解析エラー: {field}={value:?} - {reason}")]
    ParseError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("スレッドプールエラー: {message}")]
    ThreadPoolError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("永続化エラー: {source}")]
    PersistenceError {
        #[source]
        source: anyhow::Error,
    },
}

/// 級数評価の結果型
pub type SeriesResult<T> = Result<T, SeriesError>;

impl SeriesError {
    /// 使用方法エラーの作成
    pub fn usage(message: impl Into<String>) -> Self {
        Self::UsageError {
            message: message.into(),
        }
    }

    /// 引数解析エラーの作成
    pub fn parse(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ParseError {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// スレッドプールエラーの作成
    pub fn thread_pool(message: impl Into<String>) -> Self {
        Self::ThreadPoolError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 永続化エラーの作成
    pub fn persistence(source: anyhow::Error) -> Self {
        Self::PersistenceError { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UsageError { .. } | Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::PersistenceError { .. } => ErrorSeverity::High,
            Self::ThreadPoolError { .. } | Self::TaskError { .. } => ErrorSeverity::Critical,
        }
    }

    /// プロセス終了コード
    ///
    /// 入力起因のエラーは1、それ以外は2
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UsageError { .. }
            | Self::ParseError { .. }
            | Self::ValidationError { .. }
            | Self::ConfigurationError { .. } => 1,
            _ => 2,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 入力の誤り
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - 実行基盤の障害
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
