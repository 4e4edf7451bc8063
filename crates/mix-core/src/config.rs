//! 規劃配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    EventDuration, MixConstraints, MixError, Objective, Result, ShareCap, TinCatalog, TinKind,
    UnitCap, DEFAULT_BOUND_MARGIN,
};

/// 各時長的每位賓客品嚐次數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TastingsPerGuest {
    pub one_hour: Decimal,
    pub two_hour: Decimal,
    pub three_hour: Decimal,
}

impl TastingsPerGuest {
    /// 取得指定時長的品嚐次數
    pub fn for_duration(&self, duration: EventDuration) -> Decimal {
        match duration {
            EventDuration::OneHour => self.one_hour,
            EventDuration::TwoHour => self.two_hour,
            EventDuration::ThreeHour => self.three_hour,
        }
    }
}

impl Default for TastingsPerGuest {
    fn default() -> Self {
        Self {
            one_hour: Decimal::new(200, 2),
            two_hour: Decimal::new(275, 2),
            three_hour: Decimal::new(350, 2),
        }
    }
}

/// 活動規劃配置
///
/// 取代表單狀態，明確傳入需求計算與組合優化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 品牌名稱（報表用）
    pub brand_name: String,

    /// 賓客數
    pub guests: u32,

    /// 每次品嚐克數
    pub grams_per_tasting: Decimal,

    /// 每位賓客品嚐次數
    pub tastings_per_guest: TastingsPerGuest,

    /// 罐裝規格
    pub tins: TinCatalog,

    /// 目標模式
    pub objective: Objective,

    /// 每罐服務懲罰（僅用於平衡模式）
    pub service_penalty: Decimal,

    /// 是否啟用比例上限
    pub share_cap_enabled: bool,

    /// 比例上限的受限種類
    pub share_cap_kind: TinKind,

    /// 比例上限百分比（0-100）
    pub share_cap_percent: Decimal,

    /// 250 g 罐上限（0 = 無上限）
    pub cap_250: u64,

    /// 8 oz 罐上限（0 = 無上限）
    pub cap_8: u64,

    /// 125 g 罐上限（0 = 無上限）
    pub cap_125: u64,

    /// 推導枚舉上限時的餘量
    pub bound_margin: u64,

    /// 替代組合顯示數量
    pub top_k: usize,
}

impl PlannerConfig {
    /// 創建預設配置並指定賓客數
    pub fn new(guests: u32) -> Self {
        Self {
            guests,
            ..Self::default()
        }
    }

    /// 建構器模式：設置品牌名稱
    pub fn with_brand_name(mut self, brand_name: String) -> Self {
        self.brand_name = brand_name;
        self
    }

    /// 建構器模式：設置每次品嚐克數
    pub fn with_grams_per_tasting(mut self, grams: Decimal) -> Self {
        self.grams_per_tasting = grams;
        self
    }

    /// 建構器模式：設置品嚐次數
    pub fn with_tastings_per_guest(mut self, tastings: TastingsPerGuest) -> Self {
        self.tastings_per_guest = tastings;
        self
    }

    /// 建構器模式：設置罐裝規格
    pub fn with_tins(mut self, tins: TinCatalog) -> Self {
        self.tins = tins;
        self
    }

    /// 建構器模式：設置目標模式
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// 建構器模式：設置服務懲罰
    pub fn with_service_penalty(mut self, penalty: Decimal) -> Self {
        self.service_penalty = penalty;
        self
    }

    /// 建構器模式：設置比例上限
    ///
    /// # 參數
    /// * `percent` - None 表示停用
    pub fn with_share_cap(mut self, percent: Option<Decimal>) -> Self {
        match percent {
            Some(percent) => {
                self.share_cap_enabled = true;
                self.share_cap_percent = percent;
            }
            None => self.share_cap_enabled = false,
        }
        self
    }

    /// 建構器模式：設置三種自由選擇罐的上限（0 = 無上限）
    pub fn with_caps(mut self, cap_250: u64, cap_8: u64, cap_125: u64) -> Self {
        self.cap_250 = cap_250;
        self.cap_8 = cap_8;
        self.cap_125 = cap_125;
        self
    }

    /// 建構器模式：設置替代組合數量
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// 轉換為組合約束
    pub fn constraints(&self) -> MixConstraints {
        let mut constraints = MixConstraints::new()
            .with_cap(TinKind::Grams250, UnitCap::from_input(self.cap_250))
            .with_cap(TinKind::Oz8, UnitCap::from_input(self.cap_8))
            .with_cap(TinKind::Grams125, UnitCap::from_input(self.cap_125))
            .with_bound_margin(self.bound_margin);

        if self.share_cap_enabled {
            constraints = constraints
                .with_share_cap(ShareCap::new(self.share_cap_kind, self.share_cap_percent));
        }

        constraints
    }

    /// 驗證配置（在優化前快速失敗）
    pub fn validate(&self) -> Result<()> {
        if self.guests == 0 {
            return Err(MixError::InvalidConfig("賓客數必須至少為 1".to_string()));
        }
        if self.grams_per_tasting <= Decimal::ZERO {
            return Err(MixError::InvalidConfig(format!(
                "每次品嚐克數必須大於 0: {}",
                self.grams_per_tasting
            )));
        }
        for duration in EventDuration::ALL {
            let tastings = self.tastings_per_guest.for_duration(duration);
            if tastings <= Decimal::ZERO {
                return Err(MixError::InvalidConfig(format!(
                    "{} 的品嚐次數必須大於 0: {}",
                    duration, tastings
                )));
            }
        }
        if self.service_penalty < Decimal::ZERO {
            return Err(MixError::InvalidConfig(format!(
                "服務懲罰不可為負數: {}",
                self.service_penalty
            )));
        }
        if self.top_k == 0 {
            return Err(MixError::InvalidConfig("替代組合數量必須至少為 1".to_string()));
        }

        self.tins.validate()?;
        self.constraints().validate()
    }

    /// 從 JSON 字串解析
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 從 JSON 檔案載入
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MixError::ConfigLoad {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            brand_name: "La Pearle' Caviar".to_string(),
            guests: 90,
            grams_per_tasting: Decimal::new(30, 1),
            tastings_per_guest: TastingsPerGuest::default(),
            tins: TinCatalog::default(),
            objective: Objective::FewestUnits,
            service_penalty: Decimal::new(80, 1),
            share_cap_enabled: true,
            share_cap_kind: TinKind::Grams125,
            share_cap_percent: Decimal::from(60),
            cap_250: 0,
            cap_8: 0,
            cap_125: 0,
            bound_margin: DEFAULT_BOUND_MARGIN,
            top_k: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.guests, 90);
        assert_eq!(config.grams_per_tasting, dec!(3.0));
        assert_eq!(config.tastings_per_guest.for_duration(EventDuration::TwoHour), dec!(2.75));
        assert_eq!(config.objective, Objective::FewestUnits);
        assert_eq!(config.top_k, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = PlannerConfig::new(40)
            .with_objective(Objective::Cheapest)
            .with_share_cap(None)
            .with_caps(2, 0, 5)
            .with_top_k(3);

        assert_eq!(config.guests, 40);
        assert!(!config.share_cap_enabled);

        let constraints = config.constraints();
        assert_eq!(constraints.cap(TinKind::Grams250), UnitCap::AtMost(2));
        assert_eq!(constraints.cap(TinKind::Oz8), UnitCap::Unbounded);
        assert_eq!(constraints.cap(TinKind::Grams125), UnitCap::AtMost(5));
        assert_eq!(constraints.cap(TinKind::Oz7), UnitCap::Unbounded);
        assert!(constraints.share_cap.is_none());
    }

    #[test]
    fn test_share_cap_constraint() {
        let constraints = PlannerConfig::default()
            .with_share_cap(Some(dec!(20)))
            .constraints();

        let share_cap = constraints.share_cap.unwrap();
        assert_eq!(share_cap.kind, TinKind::Grams125);
        assert_eq!(share_cap.max_percent, dec!(20));
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert!(PlannerConfig::new(0).validate().is_err());
        assert!(PlannerConfig::default().with_top_k(0).validate().is_err());
        assert!(PlannerConfig::default()
            .with_service_penalty(dec!(-1))
            .validate()
            .is_err());
        assert!(PlannerConfig::default()
            .with_grams_per_tasting(Decimal::ZERO)
            .validate()
            .is_err());
        assert!(PlannerConfig::default()
            .with_share_cap(Some(dec!(120)))
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json() {
        let config = PlannerConfig::from_json_str(
            r#"{ "guests": 120, "objective": "cheapest", "share_cap_enabled": false }"#,
        )
        .unwrap();

        assert_eq!(config.guests, 120);
        assert_eq!(config.objective, Objective::Cheapest);
        assert!(!config.share_cap_enabled);
        // 未指定的欄位使用預設值
        assert_eq!(config.tins, TinCatalog::default());
        assert_eq!(config.top_k, 10);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlannerConfig::load("/nonexistent/planner.json").unwrap_err();
        assert!(matches!(err, MixError::ConfigLoad { .. }));
    }
}
