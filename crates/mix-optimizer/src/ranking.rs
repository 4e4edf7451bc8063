//! 最佳組合與替代組合排名

use mix_core::{MixCombination, Objective, UnitCounts};
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::scoring::{alternative_key, objective_key};

/// 選出最佳組合
///
/// 同分時保留枚舉順序中的第一個。
pub fn select_best(
    survivors: &[MixCombination],
    objective: Objective,
    service_penalty: Decimal,
) -> Option<MixCombination> {
    survivors
        .iter()
        .min_by_key(|mix| objective_key(objective, mix, service_penalty))
        .copied()
}

/// 替代組合：依 (罐數, 成本, 超量) 穩定排序，以罐數四元組去重，截取前 top_k 筆
///
/// 成本無條件進位至整數。
pub fn rank_alternatives(survivors: &[MixCombination], top_k: usize) -> Vec<MixCombination> {
    let mut sorted = survivors.to_vec();
    sorted.sort_by_key(alternative_key);

    let mut seen: HashSet<UnitCounts> = HashSet::new();
    sorted
        .into_iter()
        .filter(|mix| seen.insert(mix.counts))
        .take(top_k)
        .map(MixCombination::with_rounded_cost)
        .collect()
}
