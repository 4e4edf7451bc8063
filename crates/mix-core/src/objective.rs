//! 目標模式

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::MixError;

/// 最佳組合的排序目標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// 最少罐數（建議）：罐數 → 成本 → 超量
    #[default]
    FewestUnits,

    /// 平衡：成本 + 每罐服務懲罰 → 超量 → 罐數
    Balanced,

    /// 最低成本：成本 → 超量 → 罐數
    Cheapest,
}

impl Objective {
    /// 顯示標籤（與表單選項一致）
    pub fn label(&self) -> &'static str {
        match self {
            Objective::FewestUnits => "Fewest tins (recommended)",
            Objective::Balanced => "Balanced mix (cost + per-tin penalty)",
            Objective::Cheapest => "Cheapest only",
        }
    }

    /// 服務懲罰是否影響此模式
    pub fn uses_service_penalty(&self) -> bool {
        *self == Objective::Balanced
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Objective {
    type Err = MixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        match normalized.to_ascii_lowercase().as_str() {
            "fewest" | "fewest_units" | "fewest tins (recommended)" => Ok(Objective::FewestUnits),
            "balanced" | "balanced mix (cost + per-tin penalty)" => Ok(Objective::Balanced),
            "cheapest" | "cheapest only" => Ok(Objective::Cheapest),
            _ => Err(MixError::InvalidConfig(format!("未知的目標模式: {}", normalized))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Fewest tins (recommended)", Objective::FewestUnits)]
    #[case("Balanced mix (cost + per-tin penalty)", Objective::Balanced)]
    #[case("Cheapest only", Objective::Cheapest)]
    #[case("fewest", Objective::FewestUnits)]
    #[case(" Balanced ", Objective::Balanced)]
    #[case("CHEAPEST", Objective::Cheapest)]
    fn test_parse_objective(#[case] input: &str, #[case] expected: Objective) {
        assert_eq!(input.parse::<Objective>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_objective() {
        assert!(matches!(
            "most caviar".parse::<Objective>(),
            Err(MixError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_label_round_trip() {
        for objective in [Objective::FewestUnits, Objective::Balanced, Objective::Cheapest] {
            assert_eq!(objective.label().parse::<Objective>().unwrap(), objective);
        }
    }
}
