//! 三小時活動的規劃範例
//!
//! 執行：`cargo run --example three_hour_event`

use tin_mix::{
    decimal_from_f64, logging, EventDuration, EventPlanner, Objective, PlannerConfig, ReportSink,
    TastingsPerGuest, TextSummary,
};

fn main() -> anyhow::Result<()> {
    logging::init();

    // 120 位賓客，每次 2.5 g，三小時品嚐 4 次，平衡模式，最多 4 罐 250 g
    let tastings = TastingsPerGuest {
        three_hour: decimal_from_f64("three_hour", 4.0)?,
        ..TastingsPerGuest::default()
    };
    let config = PlannerConfig::new(120)
        .with_grams_per_tasting(decimal_from_f64("grams_per_tasting", 2.5)?)
        .with_tastings_per_guest(tastings)
        .with_objective(Objective::Balanced)
        .with_caps(4, 0, 0);

    let planner = EventPlanner::new(config);
    let three_hour = planner.plan_duration(EventDuration::ThreeHour)?;

    match three_hour.result.ranked() {
        Some(ranked) => println!(
            "{}: {} g → {}（{} 罐）",
            three_hour.duration.title(),
            ranked.required_grams,
            ranked.best.mix_summary(),
            ranked.best.total_units
        ),
        None => println!("{}: 無可行組合", three_hour.duration.title()),
    }

    let plan = planner.plan()?;
    print!("{}", TextSummary::new().render(&plan)?);

    Ok(())
}
