//! 活動規劃器

use mix_core::{EventDuration, OptimizationResult, PlannerConfig, Result, TinKind, UnitCap};
use mix_optimizer::{MixOptimizer, SearchBounds};
use rayon::prelude::*;

use crate::{DurationPlan, EventPlan, PlanWarning, RequirementCalculator};

/// 活動規劃器
///
/// 依配置計算每個時長的需求，並對每個時長獨立執行組合優化。
pub struct EventPlanner {
    /// 規劃配置
    config: PlannerConfig,
}

impl EventPlanner {
    /// 創建新的規劃器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 主規劃入口
    pub fn plan(&self) -> Result<EventPlan> {
        self.config.validate()?;

        tracing::info!(
            "開始活動規劃：賓客 {} 位，每次品嚐 {} g，目標模式 {}",
            self.config.guests,
            self.config.grams_per_tasting,
            self.config.objective
        );

        let start_time = std::time::Instant::now();
        let optimizer = self.optimizer();

        // 各時長互不相依，可平行計算；collect 保持時長順序
        let durations = EventDuration::ALL
            .par_iter()
            .map(|&duration| self.plan_duration_with(&optimizer, duration))
            .collect::<Result<Vec<_>>>()?;

        let mut plan = EventPlan::empty(self.config.clone());
        for duration_plan in &durations {
            for warning in self.inspect(&optimizer, duration_plan) {
                plan.add_warning(warning);
            }
        }
        plan.durations = durations;
        plan.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "活動規劃完成（{}），耗時 {:?}，警告 {} 筆",
            plan.plan_id,
            start_time.elapsed(),
            plan.warnings.len()
        );

        Ok(plan)
    }

    /// 單一時長規劃
    pub fn plan_duration(&self, duration: EventDuration) -> Result<DurationPlan> {
        self.config.validate()?;
        self.plan_duration_with(&self.optimizer(), duration)
    }

    fn plan_duration_with(
        &self,
        optimizer: &MixOptimizer,
        duration: EventDuration,
    ) -> Result<DurationPlan> {
        let tastings_per_guest = self.config.tastings_per_guest.for_duration(duration);
        let required_grams = RequirementCalculator::required_grams(
            self.config.guests,
            tastings_per_guest,
            self.config.grams_per_tasting,
        )?;

        tracing::debug!("時長 {}：需求 {} g", duration, required_grams);

        let result = optimizer.optimize(required_grams)?;

        Ok(DurationPlan {
            duration,
            tastings_per_guest,
            required_grams,
            result,
        })
    }

    /// 建立優化器（所有時長共用同一組參數）
    fn optimizer(&self) -> MixOptimizer {
        MixOptimizer::new(
            self.config.tins,
            self.config.constraints(),
            self.config.objective,
            self.config.service_penalty,
            self.config.top_k,
        )
    }

    /// 檢查結果並產生警告
    ///
    /// 最佳組合觸及推導上限時，真正的最佳解可能落在枚舉範圍之外。
    fn inspect(&self, optimizer: &MixOptimizer, plan: &DurationPlan) -> Vec<PlanWarning> {
        let ranked = match &plan.result {
            OptimizationResult::Feasible(ranked) => ranked,
            OptimizationResult::Infeasible { reason, .. } => {
                return vec![PlanWarning::warning(plan.duration, reason.clone())];
            }
        };

        let bounds =
            SearchBounds::derive(plan.required_grams, optimizer.catalog(), optimizer.constraints());

        TinKind::FREE_CHOICE
            .into_iter()
            .filter(|&kind| optimizer.constraints().cap(kind) == UnitCap::Unbounded)
            .filter_map(|kind| bounds.get(kind).map(|bound| (kind, bound)))
            .filter(|&(kind, bound)| ranked.best.counts.get(kind) == bound)
            .map(|(kind, bound)| {
                PlanWarning::info(
                    plan.duration,
                    format!("最佳組合的 {} 罐數達到枚舉上限 {}", kind, bound),
                )
            })
            .collect()
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
