//! 罐裝規格模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MixError, Result};

/// 罐裝種類（固定四種）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TinKind {
    /// 250 g 罐
    Grams250,
    /// 8 oz 罐
    Oz8,
    /// 7 oz 罐（補足用）
    Oz7,
    /// 125 g 罐
    Grams125,
}

impl TinKind {
    /// 所有種類，依輸出欄位順序
    pub const ALL: [TinKind; 4] = [
        TinKind::Grams250,
        TinKind::Oz8,
        TinKind::Oz7,
        TinKind::Grams125,
    ];

    /// 自由選擇種類，依枚舉巢狀順序（最外層在前）
    pub const FREE_CHOICE: [TinKind; 3] = [TinKind::Grams250, TinKind::Oz8, TinKind::Grams125];

    /// 補足種類：數量由剩餘需求推導，不獨立枚舉
    pub const FILL: TinKind = TinKind::Oz7;

    /// 顯示標籤
    pub fn label(&self) -> &'static str {
        match self {
            TinKind::Grams250 => "250 g",
            TinKind::Oz8 => "8 oz",
            TinKind::Oz7 => "7 oz",
            TinKind::Grams125 => "125 g",
        }
    }

    /// 在四元組中的位置
    pub fn index(&self) -> usize {
        match self {
            TinKind::Grams250 => 0,
            TinKind::Oz8 => 1,
            TinKind::Oz7 => 2,
            TinKind::Grams125 => 3,
        }
    }
}

impl std::fmt::Display for TinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 單一罐裝規格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TinSpec {
    /// 每罐克數
    pub grams_per_unit: u64,

    /// 每罐價格
    pub price_per_unit: Decimal,
}

impl TinSpec {
    /// 創建新的罐裝規格
    pub fn new(grams_per_unit: u64, price_per_unit: Decimal) -> Self {
        Self {
            grams_per_unit,
            price_per_unit,
        }
    }

    /// 驗證規格
    pub fn validate(&self, kind: TinKind) -> Result<()> {
        if self.grams_per_unit == 0 {
            return Err(MixError::InvalidConfig(format!(
                "{} 的每罐克數必須大於 0",
                kind
            )));
        }
        if self.price_per_unit < Decimal::ZERO {
            return Err(MixError::InvalidConfig(format!(
                "{} 的價格不可為負數: {}",
                kind, self.price_per_unit
            )));
        }
        Ok(())
    }
}

/// 四種罐裝的規格表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TinCatalog {
    pub grams_250: TinSpec,
    pub oz_8: TinSpec,
    pub oz_7: TinSpec,
    pub grams_125: TinSpec,
}

impl TinCatalog {
    /// 創建規格表
    pub fn new(grams_250: TinSpec, oz_8: TinSpec, oz_7: TinSpec, grams_125: TinSpec) -> Self {
        Self {
            grams_250,
            oz_8,
            oz_7,
            grams_125,
        }
    }

    /// 取得指定種類的規格
    pub fn get(&self, kind: TinKind) -> &TinSpec {
        match kind {
            TinKind::Grams250 => &self.grams_250,
            TinKind::Oz8 => &self.oz_8,
            TinKind::Oz7 => &self.oz_7,
            TinKind::Grams125 => &self.grams_125,
        }
    }

    /// 取得指定種類的可變規格
    pub fn get_mut(&mut self, kind: TinKind) -> &mut TinSpec {
        match kind {
            TinKind::Grams250 => &mut self.grams_250,
            TinKind::Oz8 => &mut self.oz_8,
            TinKind::Oz7 => &mut self.oz_7,
            TinKind::Grams125 => &mut self.grams_125,
        }
    }

    /// 建構器模式：替換單一種類的規格
    pub fn with_spec(mut self, kind: TinKind, spec: TinSpec) -> Self {
        *self.get_mut(kind) = spec;
        self
    }

    /// 驗證所有規格
    pub fn validate(&self) -> Result<()> {
        for kind in TinKind::ALL {
            self.get(kind).validate(kind)?;
        }
        Ok(())
    }
}

impl Default for TinCatalog {
    fn default() -> Self {
        Self::new(
            TinSpec::new(250, Decimal::new(34500, 2)),
            TinSpec::new(227, Decimal::new(31200, 2)),
            TinSpec::new(198, Decimal::new(27300, 2)),
            TinSpec::new(125, Decimal::new(12757, 2)),
        )
    }
}
