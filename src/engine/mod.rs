// エンジン層 - 評価のオーケストレーション
// サービス層と数値コアを組み合わせて高レベルな処理を提供

pub mod api;
pub mod series_engine;

// 公開API - 主要エンジンクラス
pub use api::{create_default_series_engine, create_quiet_series_engine, evaluate_sin};
pub use series_engine::SeriesEngine;
