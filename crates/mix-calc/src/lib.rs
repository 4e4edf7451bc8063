//! # Mix Calculation Engine
//!
//! 需求計算與多時長活動規劃

pub mod planner;
pub mod requirement;

// Re-export 主要類型
pub use planner::EventPlanner;
pub use requirement::RequirementCalculator;

use chrono::{DateTime, Utc};
use mix_core::{EventDuration, OptimizationResult, PlannerConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 活動規劃結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPlan {
    /// 規劃ID
    pub plan_id: Uuid,

    /// 產生時間
    pub generated_at: DateTime<Utc>,

    /// 輸入回顯
    pub inputs: PlannerConfig,

    /// 各時長結果（依時長順序）
    pub durations: Vec<DurationPlan>,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl EventPlan {
    /// 創建空的規劃結果
    pub fn empty(inputs: PlannerConfig) -> Self {
        Self {
            plan_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            inputs,
            durations: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanWarning) {
        self.warnings.push(warning);
    }

    /// 取得指定時長的結果
    pub fn duration(&self, duration: EventDuration) -> Option<&DurationPlan> {
        self.durations.iter().find(|d| d.duration == duration)
    }

    /// 是否所有時長皆可行
    pub fn all_feasible(&self) -> bool {
        self.durations.iter().all(|d| d.result.is_feasible())
    }
}

/// 單一時長的規劃結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationPlan {
    /// 活動時長
    pub duration: EventDuration,

    /// 每位賓客品嚐次數
    pub tastings_per_guest: Decimal,

    /// 需求克數
    pub required_grams: u64,

    /// 優化結果
    pub result: OptimizationResult,
}

/// 規劃警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWarning {
    pub duration: EventDuration,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(duration: EventDuration, message: String, severity: WarningSeverity) -> Self {
        Self {
            duration,
            message,
            severity,
        }
    }

    pub fn info(duration: EventDuration, message: String) -> Self {
        Self::new(duration, message, WarningSeverity::Info)
    }

    pub fn warning(duration: EventDuration, message: String) -> Self {
        Self::new(duration, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Info,
    Warning,
}
