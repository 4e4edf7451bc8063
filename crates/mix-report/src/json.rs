//! JSON 輸出

use mix_calc::EventPlan;
use mix_core::Result;

use crate::ReportSink;

/// 規劃結果的 JSON 輸出
#[derive(Debug, Clone)]
pub struct JsonReport {
    /// 是否縮排
    pub pretty: bool,
}

impl JsonReport {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportSink for JsonReport {
    fn render(&self, plan: &EventPlan) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(plan)?
        } else {
            serde_json::to_string(plan)?
        };
        Ok(json)
    }
}
