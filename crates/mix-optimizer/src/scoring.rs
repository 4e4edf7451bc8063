//! 目標模式評分

use mix_core::{MixCombination, Objective};
use rust_decimal::Decimal;

/// 字典序排序鍵（越小越好）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoreKey(pub Decimal, pub Decimal, pub Decimal);

/// 依目標模式計算排序鍵
pub fn objective_key(objective: Objective, mix: &MixCombination, service_penalty: Decimal) -> ScoreKey {
    let units = Decimal::from(mix.total_units);
    let overage = Decimal::from(mix.overage);

    let cost = if objective.uses_service_penalty() {
        mix.total_cost
            .saturating_add(service_penalty.saturating_mul(units))
    } else {
        mix.total_cost
    };

    match objective {
        Objective::FewestUnits => ScoreKey(units, cost, overage),
        Objective::Balanced | Objective::Cheapest => ScoreKey(cost, overage, units),
    }
}

/// 替代組合的排序鍵：不論目標模式，一律最少罐數優先
pub fn alternative_key(mix: &MixCombination) -> (u64, Decimal, u64) {
    (mix.total_units, mix.total_cost, mix.overage)
}
