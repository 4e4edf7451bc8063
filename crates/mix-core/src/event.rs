//! 活動時長

use serde::{Deserialize, Serialize};

/// 活動時長
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventDuration {
    OneHour,
    TwoHour,
    ThreeHour,
}

impl EventDuration {
    /// 所有時長，依輸出順序
    pub const ALL: [EventDuration; 3] = [
        EventDuration::OneHour,
        EventDuration::TwoHour,
        EventDuration::ThreeHour,
    ];

    /// 區塊標題
    pub fn title(&self) -> &'static str {
        match self {
            EventDuration::OneHour => "One-Hour Event",
            EventDuration::TwoHour => "Two-Hour Event",
            EventDuration::ThreeHour => "Three-Hour Event",
        }
    }

    /// 簡短標籤（用於郵件內文）
    pub fn short_label(&self) -> &'static str {
        match self {
            EventDuration::OneHour => "One-Hour",
            EventDuration::TwoHour => "Two-Hour",
            EventDuration::ThreeHour => "Three-Hour",
        }
    }

    /// 時數
    pub fn hours(&self) -> u32 {
        match self {
            EventDuration::OneHour => 1,
            EventDuration::TwoHour => 2,
            EventDuration::ThreeHour => 3,
        }
    }
}

impl std::fmt::Display for EventDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.hours())
    }
}
