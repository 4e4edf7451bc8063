//! # Mix Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod constraint;
pub mod event;
pub mod mix;
pub mod objective;
pub mod tin;

// Re-export 主要類型
pub use config::{PlannerConfig, TastingsPerGuest};
pub use constraint::{MixConstraints, ShareCap, UnitCap, DEFAULT_BOUND_MARGIN};
pub use event::EventDuration;
pub use mix::{MixCombination, OptimizationResult, RankedMix, UnitCounts};
pub use objective::Objective;
pub use tin::{TinCatalog, TinKind, TinSpec};

use rust_decimal::Decimal;

/// 組合計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MixError {
    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("無法載入配置檔 {path}: {source}")]
    ConfigLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MixError>;

/// 將浮點數轉為 Decimal，拒絕 NaN 與無限值
pub fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(MixError::InvalidInput(format!(
            "{} 必須是有限數值，收到 {}",
            field, value
        )));
    }

    Decimal::try_from(value)
        .map_err(|e| MixError::InvalidInput(format!("{} 無法轉換為 Decimal: {}", field, e)))
}
