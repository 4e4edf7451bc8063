//! 組合優化器

use mix_core::{
    MixConstraints, MixError, Objective, OptimizationResult, RankedMix, Result, TinCatalog,
};
use rust_decimal::Decimal;

use crate::enumeration::CombinationEnumerator;
use crate::ranking::{rank_alternatives, select_best};

/// 無可行組合時的訊息
pub const INFEASIBLE_MESSAGE: &str = "No feasible mix under current caps/limits.";

/// 組合優化器
///
/// 無內部可變狀態，每次 `optimize` 皆為獨立的純計算。
#[derive(Debug, Clone)]
pub struct MixOptimizer {
    /// 罐裝規格
    catalog: TinCatalog,

    /// 組合約束
    constraints: MixConstraints,

    /// 目標模式
    objective: Objective,

    /// 每罐服務懲罰
    service_penalty: Decimal,

    /// 替代組合數量
    top_k: usize,
}

impl MixOptimizer {
    /// 創建新的優化器
    pub fn new(
        catalog: TinCatalog,
        constraints: MixConstraints,
        objective: Objective,
        service_penalty: Decimal,
        top_k: usize,
    ) -> Self {
        Self {
            catalog,
            constraints,
            objective,
            service_penalty,
            top_k,
        }
    }

    /// 驗證參數
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.constraints.validate()?;

        if self.service_penalty < Decimal::ZERO {
            return Err(MixError::InvalidConfig(format!(
                "服務懲罰不可為負數: {}",
                self.service_penalty
            )));
        }
        if self.top_k == 0 {
            return Err(MixError::InvalidConfig("替代組合數量必須至少為 1".to_string()));
        }
        Ok(())
    }

    /// 主優化入口
    ///
    /// 配置錯誤、枚舉範圍過大或克數溢位返回 `Err`；
    /// 沒有組合通過約束時返回 `OptimizationResult::Infeasible`。
    pub fn optimize(&self, required_grams: u64) -> Result<OptimizationResult> {
        self.validate()?;

        let enumerator = CombinationEnumerator::new(&self.catalog, &self.constraints);
        let (survivors, stats) = enumerator.enumerate(required_grams)?;

        tracing::debug!(
            "需求 {} g：枚舉 {} 點，通過 {} 筆（補足上限排除 {}，比例上限排除 {}）",
            required_grams,
            stats.visited,
            survivors.len(),
            stats.rejected_by_fill_cap,
            stats.rejected_by_share_cap
        );

        let Some(best) = select_best(&survivors, self.objective, self.service_penalty) else {
            tracing::warn!("需求 {} g 無可行組合", required_grams);
            return Ok(OptimizationResult::infeasible(
                required_grams,
                INFEASIBLE_MESSAGE.to_string(),
            ));
        };

        let alternatives = rank_alternatives(&survivors, self.top_k);

        Ok(OptimizationResult::feasible(RankedMix {
            required_grams,
            best,
            alternatives,
        }))
    }

    /// 獲取規格表引用
    pub fn catalog(&self) -> &TinCatalog {
        &self.catalog
    }

    /// 獲取約束引用
    pub fn constraints(&self) -> &MixConstraints {
        &self.constraints
    }
}
