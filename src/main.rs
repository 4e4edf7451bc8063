use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use tin_mix::{
    decimal_from_f64, logging, EmailDraft, EventPlanner, JsonReport, MailtoLink, Objective,
    PlannerConfig, ReportSink, TextSummary, WarningSeverity,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Email,
    Mailto,
    Json,
}

/// 計算一小時、兩小時、三小時活動的罐裝組合
#[derive(Debug, Parser)]
#[command(name = "tin-mix", version)]
struct Cli {
    /// JSON 配置檔（未指定時使用預設值）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 賓客數
    #[arg(long)]
    guests: Option<u32>,

    /// 每次品嚐克數
    #[arg(long)]
    grams_per_tasting: Option<f64>,

    /// 目標模式：fewest、balanced、cheapest
    #[arg(long)]
    objective: Option<Objective>,

    /// 每罐服務懲罰（僅平衡模式）
    #[arg(long)]
    service_penalty: Option<f64>,

    /// 125 g 罐佔總克數的最大百分比
    #[arg(long, conflicts_with = "no_share_cap")]
    share_cap: Option<f64>,

    /// 停用比例上限
    #[arg(long)]
    no_share_cap: bool,

    /// 250 g 罐上限（0 = 無上限）
    #[arg(long)]
    cap_250: Option<u64>,

    /// 8 oz 罐上限（0 = 無上限）
    #[arg(long)]
    cap_8: Option<u64>,

    /// 125 g 罐上限（0 = 無上限）
    #[arg(long)]
    cap_125: Option<u64>,

    /// 替代組合顯示數量
    #[arg(long)]
    top_k: Option<usize>,

    /// 輸出格式
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// 摘要不附替代組合表
    #[arg(long)]
    no_alternatives: bool,
}

impl Cli {
    /// 載入配置並套用命令列覆寫
    fn planner_config(&self) -> anyhow::Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::load(path)
                .with_context(|| format!("讀取配置失敗: {}", path.display()))?,
            None => PlannerConfig::default(),
        };

        if let Some(guests) = self.guests {
            config.guests = guests;
        }
        if let Some(grams) = self.grams_per_tasting {
            config.grams_per_tasting = decimal_from_f64("grams_per_tasting", grams)?;
        }
        if let Some(objective) = self.objective {
            config.objective = objective;
        }
        if let Some(penalty) = self.service_penalty {
            config.service_penalty = decimal_from_f64("service_penalty", penalty)?;
        }
        if self.no_share_cap {
            config = config.with_share_cap(None);
        } else if let Some(percent) = self.share_cap {
            config = config.with_share_cap(Some(decimal_from_f64("share_cap", percent)?));
        }
        if let Some(cap) = self.cap_250 {
            config.cap_250 = cap;
        }
        if let Some(cap) = self.cap_8 {
            config.cap_8 = cap;
        }
        if let Some(cap) = self.cap_125 {
            config.cap_125 = cap;
        }
        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = cli.planner_config()?;
    let plan = EventPlanner::new(config)
        .plan()
        .context("活動規劃失敗")?;

    for warning in &plan.warnings {
        match warning.severity {
            WarningSeverity::Info => tracing::info!("{}: {}", warning.duration, warning.message),
            WarningSeverity::Warning => tracing::warn!("{}: {}", warning.duration, warning.message),
        }
    }

    let sink: Box<dyn ReportSink> = match cli.format {
        OutputFormat::Text => Box::new(TextSummary::new().with_alternatives(!cli.no_alternatives)),
        OutputFormat::Email => Box::new(EmailDraft),
        OutputFormat::Mailto => Box::new(MailtoLink),
        OutputFormat::Json => Box::new(JsonReport::default()),
    };

    print!("{}", sink.render(&plan).context("報表輸出失敗")?);
    Ok(())
}
