//! 組合結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MixError, Result, TinCatalog, TinKind};

/// 四種罐裝的罐數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UnitCounts {
    pub grams_250: u64,
    pub oz_8: u64,
    pub oz_7: u64,
    pub grams_125: u64,
}

impl UnitCounts {
    /// 創建罐數四元組
    pub fn new(grams_250: u64, oz_8: u64, oz_7: u64, grams_125: u64) -> Self {
        Self {
            grams_250,
            oz_8,
            oz_7,
            grams_125,
        }
    }

    /// 取得指定種類的罐數
    pub fn get(&self, kind: TinKind) -> u64 {
        match kind {
            TinKind::Grams250 => self.grams_250,
            TinKind::Oz8 => self.oz_8,
            TinKind::Oz7 => self.oz_7,
            TinKind::Grams125 => self.grams_125,
        }
    }

    /// 總罐數
    pub fn total(&self) -> u64 {
        self.grams_250 + self.oz_8 + self.oz_7 + self.grams_125
    }

    /// 指定種類貢獻的克數
    pub fn grams_of(&self, kind: TinKind, catalog: &TinCatalog) -> Result<u64> {
        self.get(kind)
            .checked_mul(catalog.get(kind).grams_per_unit)
            .ok_or_else(|| {
                MixError::CalculationError(format!("{} × {} 的克數溢位", self.get(kind), kind))
            })
    }

    /// 總克數
    pub fn total_grams(&self, catalog: &TinCatalog) -> Result<u64> {
        TinKind::ALL.iter().try_fold(0u64, |sum, &kind| {
            sum.checked_add(self.grams_of(kind, catalog)?)
                .ok_or_else(|| MixError::CalculationError(format!("{:?} 的總克數溢位", self)))
        })
    }

    /// 總成本（未捨入）
    pub fn total_cost(&self, catalog: &TinCatalog) -> Result<Decimal> {
        TinKind::ALL.iter().try_fold(Decimal::ZERO, |sum, &kind| {
            Decimal::from(self.get(kind))
                .checked_mul(catalog.get(kind).price_per_unit)
                .and_then(|cost| sum.checked_add(cost))
                .ok_or_else(|| MixError::CalculationError(format!("{:?} 的總成本溢位", self)))
        })
    }
}

/// 一組候選購買組合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixCombination {
    /// 各種類罐數
    pub counts: UnitCounts,

    /// 購買總克數
    pub purchased_grams: u64,

    /// 超量克數（購買 - 需求）
    pub overage: u64,

    /// 總罐數
    pub total_units: u64,

    /// 總成本
    pub total_cost: Decimal,
}

impl MixCombination {
    /// 由罐數計算衍生欄位
    ///
    /// 購買克數不足需求時返回 `Ok(None)`；克數或成本溢位時返回 `CalculationError`。
    pub fn evaluate(
        counts: UnitCounts,
        catalog: &TinCatalog,
        required_grams: u64,
    ) -> Result<Option<Self>> {
        let purchased_grams = counts.total_grams(catalog)?;
        let Some(overage) = purchased_grams.checked_sub(required_grams) else {
            return Ok(None);
        };

        Ok(Some(Self {
            counts,
            purchased_grams,
            overage,
            // 每罐至少 1 g，罐數總和不超過總克數
            total_units: counts.total(),
            total_cost: counts.total_cost(catalog)?,
        }))
    }

    /// 零需求時的空組合
    pub fn empty() -> Self {
        Self {
            counts: UnitCounts::default(),
            purchased_grams: 0,
            overage: 0,
            total_units: 0,
            total_cost: Decimal::ZERO,
        }
    }

    /// 成本無條件進位至整數（供排名表顯示）
    pub fn with_rounded_cost(mut self) -> Self {
        self.total_cost = self.total_cost.ceil();
        self
    }

    /// 每位賓客成本（賓客數至少以 1 計）
    pub fn cost_per_guest(&self, guests: u32) -> Decimal {
        self.total_cost / Decimal::from(guests.max(1))
    }

    /// 組合摘要，例如 "1 × 250 g, 0 × 8 oz, 0 × 7 oz, 1 × 125 g"
    pub fn mix_summary(&self) -> String {
        TinKind::ALL
            .iter()
            .map(|kind| format!("{} × {}", self.counts.get(*kind), kind.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// 單一需求的排名結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMix {
    /// 需求克數
    pub required_grams: u64,

    /// 依目標模式選出的最佳組合（成本未捨入）
    pub best: MixCombination,

    /// 替代組合（最少罐數優先，成本已進位）
    pub alternatives: Vec<MixCombination>,
}

/// 優化結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizationResult {
    /// 可行
    Feasible(RankedMix),

    /// 不可行：在目前的上限與比例限制下沒有任何組合
    Infeasible { required_grams: u64, reason: String },
}

impl OptimizationResult {
    /// 創建可行的優化結果
    pub fn feasible(ranked: RankedMix) -> Self {
        OptimizationResult::Feasible(ranked)
    }

    /// 創建不可行的優化結果
    pub fn infeasible(required_grams: u64, reason: String) -> Self {
        OptimizationResult::Infeasible {
            required_grams,
            reason,
        }
    }

    /// 是否可行
    pub fn is_feasible(&self) -> bool {
        matches!(self, OptimizationResult::Feasible(_))
    }

    /// 取得排名結果
    pub fn ranked(&self) -> Option<&RankedMix> {
        match self {
            OptimizationResult::Feasible(ranked) => Some(ranked),
            OptimizationResult::Infeasible { .. } => None,
        }
    }

    /// 需求克數
    pub fn required_grams(&self) -> u64 {
        match self {
            OptimizationResult::Feasible(ranked) => ranked.required_grams,
            OptimizationResult::Infeasible { required_grams, .. } => *required_grams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TinSpec;
    use rust_decimal_macros::dec;

    #[test]
    fn test_evaluate_combination() {
        let catalog = TinCatalog::default();
        let mix = MixCombination::evaluate(UnitCounts::new(1, 0, 0, 1), &catalog, 270)
            .unwrap()
            .unwrap();

        assert_eq!(mix.purchased_grams, 375);
        assert_eq!(mix.overage, 105);
        assert_eq!(mix.total_units, 2);
        assert_eq!(mix.total_cost, dec!(472.57));
    }

    #[test]
    fn test_evaluate_short_combination() {
        let catalog = TinCatalog::default();
        assert!(MixCombination::evaluate(UnitCounts::new(1, 0, 0, 0), &catalog, 270)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_grams_overflow_is_calculation_error() {
        let catalog =
            TinCatalog::default().with_spec(TinKind::Oz8, TinSpec::new(u64::MAX / 4, dec!(1)));

        assert_eq!(
            UnitCounts::new(0, 4, 0, 0).grams_of(TinKind::Oz8, &catalog).unwrap(),
            u64::MAX / 4 * 4
        );
        assert!(matches!(
            UnitCounts::new(0, 5, 0, 0).grams_of(TinKind::Oz8, &catalog),
            Err(MixError::CalculationError(_))
        ));
        // 單項不溢位，加總溢位
        assert!(matches!(
            MixCombination::evaluate(UnitCounts::new(1, 4, 0, 0), &catalog, 270),
            Err(MixError::CalculationError(_))
        ));
    }

    #[test]
    fn test_cost_overflow_is_calculation_error() {
        let catalog =
            TinCatalog::default().with_spec(TinKind::Oz7, TinSpec::new(198, Decimal::MAX));

        assert!(matches!(
            UnitCounts::new(0, 0, 2, 0).total_cost(&catalog),
            Err(MixError::CalculationError(_))
        ));
    }

    #[test]
    fn test_rounded_cost_is_idempotent() {
        let catalog = TinCatalog::default();
        let mix = MixCombination::evaluate(UnitCounts::new(0, 0, 0, 3), &catalog, 300)
            .unwrap()
            .unwrap();

        let rounded = mix.with_rounded_cost();
        assert_eq!(rounded.total_cost, dec!(383));
        assert_eq!(rounded.with_rounded_cost().total_cost, rounded.total_cost);
    }

    #[test]
    fn test_mix_summary_and_cost_per_guest() {
        let catalog = TinCatalog::default();
        let mix = MixCombination::evaluate(UnitCounts::new(2, 0, 1, 0), &catalog, 600)
            .unwrap()
            .unwrap();

        assert_eq!(mix.mix_summary(), "2 × 250 g, 0 × 8 oz, 1 × 7 oz, 0 × 125 g");
        assert_eq!(mix.cost_per_guest(0), dec!(963));
        assert_eq!(mix.cost_per_guest(3), dec!(321));
    }

    #[test]
    fn test_infeasible_result() {
        let result = OptimizationResult::infeasible(500, "no mix".to_string());

        assert!(!result.is_feasible());
        assert!(result.ranked().is_none());
        assert_eq!(result.required_grams(), 500);
    }
}
