//! # Mix Report
//!
//! 報表輸出（摘要、郵件草稿、mailto 連結、JSON）
//!
//! 報表只讀取規劃結果，不修改任何優化輸出；核心計算不依賴本模組。

pub mod email;
pub mod format;
pub mod json;
pub mod text;

// Re-export 主要類型
pub use email::{EmailDraft, MailtoLink};
pub use json::JsonReport;
pub use text::TextSummary;

use mix_calc::EventPlan;
use mix_core::Result;

/// 報表輸出介面
pub trait ReportSink {
    /// 將規劃結果渲染為文字
    fn render(&self, plan: &EventPlan) -> Result<String>;
}
