//! 純文字摘要表

use chrono::Datelike;
use mix_calc::{DurationPlan, EventPlan};
use mix_core::{MixCombination, OptimizationResult, Result};
use std::fmt::Write;

use crate::{format, ReportSink};

const RULE: &str = "------------------------------------------------------------";

/// 活動摘要表
#[derive(Debug, Clone)]
pub struct TextSummary {
    /// 是否附上替代組合表
    pub include_alternatives: bool,
}

impl TextSummary {
    /// 創建摘要表
    pub fn new() -> Self {
        Self {
            include_alternatives: true,
        }
    }

    /// 建構器模式：設置是否附上替代組合表
    pub fn with_alternatives(mut self, include: bool) -> Self {
        self.include_alternatives = include;
        self
    }

    /// 最佳組合的指標列
    pub fn metric_rows(best: &MixCombination, required_grams: u64, guests: u32) -> Vec<(&'static str, String)> {
        vec![
            ("Required grams", format::grams(required_grams)),
            ("Optimal mix", best.mix_summary()),
            ("Total grams purchased", format::grams(best.purchased_grams)),
            ("Overage (g)", format::grams(best.overage)),
            ("Total tins", best.total_units.to_string()),
            ("Total cost", format::money(best.total_cost)),
            ("Cost per guest", format::money(best.cost_per_guest(guests))),
        ]
    }

    fn write_block(&self, out: &mut String, plan: &DurationPlan, guests: u32) -> std::fmt::Result {
        writeln!(out, "{}", plan.duration.title())?;

        let ranked = match &plan.result {
            OptimizationResult::Feasible(ranked) => ranked,
            OptimizationResult::Infeasible { reason, .. } => {
                writeln!(out, "  {}", reason)?;
                return writeln!(out);
            }
        };

        for (label, value) in Self::metric_rows(&ranked.best, ranked.required_grams, guests) {
            writeln!(out, "  {:<24}{}", format!("{}:", label), value)?;
        }

        if self.include_alternatives && !ranked.alternatives.is_empty() {
            writeln!(out)?;
            writeln!(out, "  Top mixes (fewest tins first)")?;
            writeln!(
                out,
                "  {:>5} {:>5} {:>5} {:>5} {:>12} {:>12} {:>10} {:>15}",
                "250 g", "8 oz", "7 oz", "125 g", "Total grams", "Overage (g)", "Total tins", "Total cost ($)"
            )?;
            for mix in &ranked.alternatives {
                writeln!(
                    out,
                    "  {:>5} {:>5} {:>5} {:>5} {:>12} {:>12} {:>10} {:>15}",
                    mix.counts.grams_250,
                    mix.counts.oz_8,
                    mix.counts.oz_7,
                    mix.counts.grams_125,
                    format::grams(mix.purchased_grams),
                    format::grams(mix.overage),
                    mix.total_units,
                    mix.total_cost.to_string()
                )?;
            }
        }

        writeln!(out)
    }

    fn write_summary(&self, out: &mut String, plan: &EventPlan) -> std::fmt::Result {
        let inputs = &plan.inputs;
        let tastings = &inputs.tastings_per_guest;

        writeln!(out, "Caviar Event Summary")?;
        writeln!(out, "{}", plan.generated_at.format("%B %d, %Y"))?;
        writeln!(out, "Prepared by {}", inputs.brand_name)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Event Inputs")?;
        writeln!(out, "  Guests: {}", inputs.guests)?;
        writeln!(out, "  Grams per tasting: {}", inputs.grams_per_tasting)?;
        writeln!(
            out,
            "  Tastings per guest (1h/2h/3h): {} / {} / {}",
            tastings.one_hour, tastings.two_hour, tastings.three_hour
        )?;
        writeln!(out, "  Objective: {}", inputs.objective)?;
        if inputs.objective.uses_service_penalty() {
            writeln!(out, "  Service penalty per tin: {}", format::money(inputs.service_penalty))?;
        }
        writeln!(out)?;

        for duration_plan in &plan.durations {
            self.write_block(out, duration_plan, inputs.guests)?;
        }

        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "© {} {}. All rights reserved.",
            plan.generated_at.year(),
            inputs.brand_name
        )
    }
}

impl Default for TextSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for TextSummary {
    fn render(&self, plan: &EventPlan) -> Result<String> {
        let mut out = String::new();
        self.write_summary(&mut out, plan)
            .map_err(|e| mix_core::MixError::Other(format!("摘要輸出失敗: {}", e)))?;
        Ok(out)
    }
}
