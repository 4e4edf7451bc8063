//! # Tin Mix
//!
//! 活動罐裝組合規劃：需求計算、組合優化與報表輸出

pub mod logging;

pub use mix_calc::{
    DurationPlan, EventPlan, EventPlanner, PlanWarning, RequirementCalculator, WarningSeverity,
};
pub use mix_core::{
    decimal_from_f64, EventDuration, MixCombination, MixConstraints, MixError, Objective,
    OptimizationResult, PlannerConfig, RankedMix, Result, ShareCap, TastingsPerGuest, TinCatalog, TinKind,
    TinSpec, UnitCap, UnitCounts,
};
pub use mix_optimizer::MixOptimizer;
pub use mix_report::{EmailDraft, JsonReport, MailtoLink, ReportSink, TextSummary};

/// 以配置執行完整規劃
pub fn plan_event(config: PlannerConfig) -> Result<EventPlan> {
    EventPlanner::new(config).plan()
}
