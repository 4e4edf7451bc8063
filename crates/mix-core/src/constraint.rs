//! 組合約束模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MixError, Result, TinKind};

/// 推導枚舉上限時的預設餘量（罐數）
pub const DEFAULT_BOUND_MARGIN: u64 = 8;

/// 單一種類的罐數上限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCap {
    /// 無上限（枚舉範圍由需求推導）
    #[default]
    Unbounded,
    /// 最多 n 罐（n = 0 表示不允許此種類）
    AtMost(u64),
}

impl UnitCap {
    /// 由表單輸入轉換：0 代表無上限
    pub fn from_input(value: u64) -> Self {
        if value == 0 {
            UnitCap::Unbounded
        } else {
            UnitCap::AtMost(value)
        }
    }

    /// 檢查罐數是否在上限內
    pub fn admits(&self, count: u64) -> bool {
        match self {
            UnitCap::Unbounded => true,
            UnitCap::AtMost(max) => count <= *max,
        }
    }
}

/// 單一種類佔總克數比例的上限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCap {
    /// 受限種類
    pub kind: TinKind,

    /// 最大百分比（0-100）
    pub max_percent: Decimal,
}

impl ShareCap {
    /// 創建比例上限
    pub fn new(kind: TinKind, max_percent: Decimal) -> Self {
        Self { kind, max_percent }
    }

    /// 檢查比例是否在上限內
    ///
    /// 以 `kind_grams * 100 <= max_percent * purchased_grams` 比較，避免除法誤差。
    /// 購買克數為 0 時不受限。
    pub fn admits(&self, kind_grams: u64, purchased_grams: u64) -> bool {
        if purchased_grams == 0 {
            return true;
        }
        Decimal::from(kind_grams) * Decimal::ONE_HUNDRED
            <= self.max_percent * Decimal::from(purchased_grams)
    }

    /// 驗證百分比範圍
    pub fn validate(&self) -> Result<()> {
        if self.max_percent < Decimal::ZERO || self.max_percent > Decimal::ONE_HUNDRED {
            return Err(MixError::InvalidConfig(format!(
                "{} 比例上限必須介於 0 與 100 之間: {}",
                self.kind, self.max_percent
            )));
        }
        Ok(())
    }
}

/// 組合約束
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixConstraints {
    /// 各種類罐數上限（依 `TinKind::index` 排列）
    pub caps: [UnitCap; 4],

    /// 比例上限（可選）
    pub share_cap: Option<ShareCap>,

    /// 推導枚舉上限時的餘量
    pub bound_margin: u64,
}

impl MixConstraints {
    /// 創建無約束配置
    pub fn new() -> Self {
        Self {
            caps: [UnitCap::Unbounded; 4],
            share_cap: None,
            bound_margin: DEFAULT_BOUND_MARGIN,
        }
    }

    /// 建構器模式：設置單一種類的上限
    pub fn with_cap(mut self, kind: TinKind, cap: UnitCap) -> Self {
        self.caps[kind.index()] = cap;
        self
    }

    /// 建構器模式：設置比例上限
    pub fn with_share_cap(mut self, share_cap: ShareCap) -> Self {
        self.share_cap = Some(share_cap);
        self
    }

    /// 建構器模式：設置枚舉餘量
    pub fn with_bound_margin(mut self, margin: u64) -> Self {
        self.bound_margin = margin;
        self
    }

    /// 取得指定種類的上限
    pub fn cap(&self, kind: TinKind) -> UnitCap {
        self.caps[kind.index()]
    }

    /// 自由選擇種類的枚舉上限（含）
    ///
    /// 有上限時直接使用；否則為 `ceil(required / grams_per_unit) + bound_margin`。
    pub fn enumeration_bound(&self, kind: TinKind, required_grams: u64, grams_per_unit: u64) -> u64 {
        match self.cap(kind) {
            UnitCap::AtMost(max) => max,
            UnitCap::Unbounded => required_grams
                .div_ceil(grams_per_unit)
                .saturating_add(self.bound_margin),
        }
    }

    /// 驗證約束
    pub fn validate(&self) -> Result<()> {
        if let Some(share_cap) = &self.share_cap {
            share_cap.validate()?;
        }
        Ok(())
    }
}

impl Default for MixConstraints {
    fn default() -> Self {
        Self::new()
    }
}
