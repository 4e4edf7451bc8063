//! 郵件草稿

use mix_calc::EventPlan;
use mix_core::{OptimizationResult, Result};
use url::form_urlencoded;

use crate::{format, ReportSink};

/// 預填郵件的主旨與內文
#[derive(Debug, Clone, Default)]
pub struct EmailDraft;

impl EmailDraft {
    /// 郵件主旨
    pub fn subject(plan: &EventPlan) -> String {
        format!("{} • Caviar Event Calculator Results", plan.inputs.brand_name)
    }

    /// 郵件內文
    pub fn body(plan: &EventPlan) -> String {
        let mut lines = vec![
            "Caviar Event Calculator Results".to_string(),
            String::new(),
            format!("Guests: {}", plan.inputs.guests),
            format!("Grams per tasting: {}", plan.inputs.grams_per_tasting),
        ];

        for duration_plan in &plan.durations {
            lines.push(String::new());
            lines.push(format!("[{}]", duration_plan.duration.short_label()));
            lines.push(format!("Required grams: {}", duration_plan.result.required_grams()));

            match &duration_plan.result {
                OptimizationResult::Feasible(ranked) => {
                    let best = &ranked.best;
                    lines.push(format!(
                        "Optimal mix: {} x 250 g, {} x 8 oz, {} x 7 oz, {} x 125 g",
                        best.counts.grams_250,
                        best.counts.oz_8,
                        best.counts.oz_7,
                        best.counts.grams_125
                    ));
                    lines.push(format!("Total grams purchased: {}", best.purchased_grams));
                    lines.push(format!("Overage (g): {}", best.overage));
                    lines.push(format!("Total tins: {}", best.total_units));
                    lines.push(format!("Total cost: {}", format::plain_money(best.total_cost)));
                }
                OptimizationResult::Infeasible { reason, .. } => lines.push(reason.clone()),
            }
        }

        lines.join("\n") + "\n"
    }
}

impl ReportSink for EmailDraft {
    fn render(&self, plan: &EventPlan) -> Result<String> {
        Ok(format!("Subject: {}\n\n{}", Self::subject(plan), Self::body(plan)))
    }
}

/// 百分比編碼；form 編碼以 '+' 表示空白，mailto 需為 %20
fn encode_component(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// 以 `mailto:` 連結輸出郵件草稿
#[derive(Debug, Clone, Default)]
pub struct MailtoLink;

impl MailtoLink {
    /// 產生 `mailto:?subject=…&body=…`
    pub fn link(plan: &EventPlan) -> String {
        format!(
            "mailto:?subject={}&body={}",
            encode_component(&EmailDraft::subject(plan)),
            encode_component(&EmailDraft::body(plan))
        )
    }
}

impl ReportSink for MailtoLink {
    fn render(&self, plan: &EventPlan) -> Result<String> {
        Ok(Self::link(plan) + "\n")
    }
}
