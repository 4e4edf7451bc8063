//! 需求克數計算

use mix_core::{MixError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 需求計算器
pub struct RequirementCalculator;

impl RequirementCalculator {
    /// 計算需求克數
    ///
    /// `guests × tastings_per_guest × grams_per_tasting`，無條件進位，絕不低估。
    pub fn required_grams(
        guests: u32,
        tastings_per_guest: Decimal,
        grams_per_tasting: Decimal,
    ) -> Result<u64> {
        if guests == 0 {
            return Err(MixError::InvalidInput("賓客數必須至少為 1".to_string()));
        }
        if tastings_per_guest <= Decimal::ZERO {
            return Err(MixError::InvalidInput(format!(
                "每位賓客品嚐次數必須大於 0: {}",
                tastings_per_guest
            )));
        }
        if grams_per_tasting <= Decimal::ZERO {
            return Err(MixError::InvalidInput(format!(
                "每次品嚐克數必須大於 0: {}",
                grams_per_tasting
            )));
        }

        let total = Decimal::from(guests)
            .checked_mul(tastings_per_guest)
            .and_then(|grams| grams.checked_mul(grams_per_tasting))
            .ok_or_else(|| MixError::CalculationError("需求克數溢位".to_string()))?;

        total
            .ceil()
            .to_u64()
            .ok_or_else(|| MixError::CalculationError(format!("需求克數超出範圍: {}", total)))
    }
}
