//! 組合枚舉

use mix_core::{
    MixCombination, MixConstraints, MixError, Result, TinCatalog, TinKind, UnitCounts,
};

/// 單次需求允許的最大枚舉點數
///
/// 預設表單（945 g）約 2,500 點；超過此值的需求需先設定罐數上限。
pub const MAX_SEARCH_SPACE: u64 = 5_000_000;

/// 三種自由選擇罐的枚舉上限（含）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    pub grams_250: u64,
    pub oz_8: u64,
    pub grams_125: u64,
}

impl SearchBounds {
    /// 依需求與約束推導枚舉上限
    pub fn derive(required_grams: u64, catalog: &TinCatalog, constraints: &MixConstraints) -> Self {
        let [grams_250, oz_8, grams_125] = TinKind::FREE_CHOICE.map(|kind| {
            constraints.enumeration_bound(kind, required_grams, catalog.get(kind).grams_per_unit)
        });

        Self {
            grams_250,
            oz_8,
            grams_125,
        }
    }

    /// 取得指定自由選擇種類的上限；補足罐返回 None
    pub fn get(&self, kind: TinKind) -> Option<u64> {
        match kind {
            TinKind::Grams250 => Some(self.grams_250),
            TinKind::Oz8 => Some(self.oz_8),
            TinKind::Grams125 => Some(self.grams_125),
            TinKind::Oz7 => None,
        }
    }

    /// 笛卡兒積大小；超出 u64 時返回 None
    pub fn search_space(&self) -> Option<u64> {
        [self.grams_250, self.oz_8, self.grams_125]
            .iter()
            .try_fold(1u64, |size, &bound| size.checked_mul(bound.checked_add(1)?))
    }
}

/// 枚舉統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    /// 枚舉點數
    pub visited: u64,
    /// 因補足罐上限被排除
    pub rejected_by_fill_cap: u64,
    /// 因比例上限被排除
    pub rejected_by_share_cap: u64,
}

/// 組合枚舉器
pub struct CombinationEnumerator<'a> {
    catalog: &'a TinCatalog,
    constraints: &'a MixConstraints,
}

impl<'a> CombinationEnumerator<'a> {
    /// 創建枚舉器
    pub fn new(catalog: &'a TinCatalog, constraints: &'a MixConstraints) -> Self {
        Self {
            catalog,
            constraints,
        }
    }

    /// 枚舉所有滿足約束的組合
    ///
    /// 巢狀順序固定為 250 g → 8 oz → 125 g，補足罐數量由剩餘需求推導。
    /// 返回順序即枚舉順序，排名時同分者以此順序為準。
    /// 枚舉點數超過 [`MAX_SEARCH_SPACE`] 或克數溢位時返回 `CalculationError`。
    pub fn enumerate(&self, required_grams: u64) -> Result<(Vec<MixCombination>, EnumerationStats)> {
        let bounds = SearchBounds::derive(required_grams, self.catalog, self.constraints);
        let search_space = bounds
            .search_space()
            .filter(|&size| size <= MAX_SEARCH_SPACE)
            .ok_or_else(|| {
                MixError::CalculationError(format!(
                    "需求 {} g 的枚舉範圍過大（250 g ≤ {}, 8 oz ≤ {}, 125 g ≤ {}，上限 {} 點），請設定罐數上限",
                    required_grams, bounds.grams_250, bounds.oz_8, bounds.grams_125, MAX_SEARCH_SPACE
                ))
            })?;
        tracing::debug!(
            "枚舉上限: 250 g ≤ {}, 8 oz ≤ {}, 125 g ≤ {}（共 {} 點）",
            bounds.grams_250,
            bounds.oz_8,
            bounds.grams_125,
            search_space
        );

        let grams_250 = self.catalog.get(TinKind::Grams250).grams_per_unit;
        let grams_8 = self.catalog.get(TinKind::Oz8).grams_per_unit;
        let grams_125 = self.catalog.get(TinKind::Grams125).grams_per_unit;
        let fill_grams = self.catalog.get(TinKind::FILL).grams_per_unit;
        let fill_cap = self.constraints.cap(TinKind::FILL);

        let overflow =
            || MixError::CalculationError(format!("需求 {} g 的枚舉克數溢位", required_grams));

        let mut survivors = Vec::new();
        let mut stats = EnumerationStats::default();

        for x250 in 0..=bounds.grams_250 {
            let g250 = x250.checked_mul(grams_250).ok_or_else(overflow)?;
            for x8 in 0..=bounds.oz_8 {
                let g250_8 = x8
                    .checked_mul(grams_8)
                    .and_then(|g| g.checked_add(g250))
                    .ok_or_else(overflow)?;
                for x125 in 0..=bounds.grams_125 {
                    stats.visited += 1;

                    let grams_so_far = x125
                        .checked_mul(grams_125)
                        .and_then(|g| g.checked_add(g250_8))
                        .ok_or_else(overflow)?;
                    let x7 = required_grams.saturating_sub(grams_so_far).div_ceil(fill_grams);

                    if !fill_cap.admits(x7) {
                        stats.rejected_by_fill_cap += 1;
                        continue;
                    }

                    let counts = UnitCounts::new(x250, x8, x7, x125);
                    let Some(mix) = MixCombination::evaluate(counts, self.catalog, required_grams)?
                    else {
                        continue;
                    };

                    if let Some(share_cap) = &self.constraints.share_cap {
                        let kind_grams = counts.grams_of(share_cap.kind, self.catalog)?;
                        if !share_cap.admits(kind_grams, mix.purchased_grams) {
                            stats.rejected_by_share_cap += 1;
                            continue;
                        }
                    }

                    survivors.push(mix);
                }
            }
        }

        Ok((survivors, stats))
    }
}
