//! 集成測試

use rstest::rstest;
use rust_decimal_macros::dec;
use tin_mix::*;

fn assert_share_cap(plan: &EventPlan) {
    let config = &plan.inputs;
    for duration_plan in &plan.durations {
        let Some(ranked) = duration_plan.result.ranked() else {
            continue;
        };
        for mix in std::iter::once(&ranked.best).chain(ranked.alternatives.iter()) {
            let grams = mix.counts.grams_of(config.share_cap_kind, &config.tins).unwrap();
            assert!(
                grams * 100 <= 60 * mix.purchased_grams,
                "{:?} 超過比例上限",
                mix.counts
            );
        }
    }
}

#[test]
fn test_default_event_plan() {
    logging::init_test();

    // 預設表單：90 位賓客、每次 3 g、品嚐 2.0 / 2.75 / 3.5 次、125 g 最多 60%
    let plan = plan_event(PlannerConfig::default()).unwrap();

    for duration_plan in &plan.durations {
        let ranked = duration_plan.result.ranked().unwrap();
        println!(
            "{}: {} g → {} ({} 罐, {})",
            duration_plan.duration,
            ranked.required_grams,
            ranked.best.mix_summary(),
            ranked.best.total_units,
            ranked.best.total_cost
        );

        assert!(ranked.best.purchased_grams >= ranked.required_grams);
        assert_eq!(ranked.alternatives.len(), 10);
        // 最少罐數模式下，最佳組合即替代組合第一筆
        assert_eq!(ranked.alternatives[0].counts, ranked.best.counts);
        assert_eq!(ranked.alternatives[0].total_cost, ranked.best.total_cost.ceil());
    }

    assert_share_cap(&plan);
}

#[test]
fn test_270_gram_scenario() {
    // 90 位賓客 × 2.0 次 × 1.5 g = 270 g，無比例上限
    let config = PlannerConfig::default()
        .with_grams_per_tasting(dec!(1.5))
        .with_share_cap(None);
    let plan = plan_event(config).unwrap();

    let one_hour = plan.duration(EventDuration::OneHour).unwrap();
    assert_eq!(one_hour.required_grams, 270);

    let ranked = one_hour.result.ranked().unwrap();
    assert_eq!(ranked.best.total_units, 2);
    assert!(ranked.best.purchased_grams >= 270);

    // 只用單一自由選擇種類時，罐數不會更少
    for kind in [TinKind::Grams250, TinKind::Oz8, TinKind::Grams125] {
        let grams = plan.inputs.tins.get(kind).grams_per_unit;
        assert!(270u64.div_ceil(grams) >= ranked.best.total_units);
    }
}

#[rstest]
#[case(Objective::Cheapest)]
#[case(Objective::Balanced)]
fn test_alternatives_independent_of_objective(#[case] objective: Objective) {
    let fewest = plan_event(PlannerConfig::default()).unwrap();
    let other = plan_event(PlannerConfig::default().with_objective(objective)).unwrap();

    for duration in EventDuration::ALL {
        let ranked = |plan: &EventPlan| {
            plan.duration(duration)
                .and_then(|d| d.result.ranked())
                .cloned()
                .unwrap()
        };

        assert_eq!(ranked(&fewest).alternatives, ranked(&other).alternatives);
        // 最少罐數模式的罐數最少，其他模式的最佳組合成本不會更高
        assert!(ranked(&other).best.total_cost <= ranked(&fewest).best.total_cost);
    }
}

#[test]
fn test_infeasible_duration_does_not_affect_others() {
    logging::init_test();

    // 7 oz 比例上限 0%，其他三種各最多 1 罐（602 g）
    let mut config = PlannerConfig::default()
        .with_share_cap(Some(dec!(0)))
        .with_caps(1, 1, 1);
    config.share_cap_kind = TinKind::Oz7;

    let plan = plan_event(config).unwrap();

    assert!(plan.duration(EventDuration::OneHour).unwrap().result.is_feasible());
    assert!(!plan.duration(EventDuration::TwoHour).unwrap().result.is_feasible());
    assert!(!plan.duration(EventDuration::ThreeHour).unwrap().result.is_feasible());
    assert!(!plan.all_feasible());
    assert_eq!(
        plan.warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Warning)
            .count(),
        2
    );

    let text = TextSummary::new().render(&plan).unwrap();
    assert!(text.contains("Two-Hour Event\n  No feasible mix under current caps/limits."));
    assert!(text.contains("One-Hour Event\n  Required grams:"));
}

#[test]
fn test_invalid_config_rejected() {
    let config = PlannerConfig::default().with_tins(
        TinCatalog::default().with_spec(TinKind::Oz7, TinSpec::new(0, dec!(273))),
    );

    assert!(matches!(plan_event(config), Err(MixError::InvalidConfig(_))));
}

#[rstest]
#[case(2.5, 8.0, Some(60.0))]
#[case(1.5, 12.5, None)]
fn test_numeric_overrides(
    #[case] grams: f64,
    #[case] penalty: f64,
    #[case] share_cap: Option<f64>,
) {
    let share_cap = share_cap
        .map(|percent| decimal_from_f64("share_cap", percent))
        .transpose()
        .unwrap();
    let config = PlannerConfig::default()
        .with_grams_per_tasting(decimal_from_f64("grams_per_tasting", grams).unwrap())
        .with_service_penalty(decimal_from_f64("service_penalty", penalty).unwrap())
        .with_share_cap(share_cap);

    assert_eq!(config.share_cap_enabled, share_cap.is_some());
    let plan = plan_event(config).unwrap();
    assert!(plan.all_feasible());
    if share_cap.is_some() {
        assert_share_cap(&plan);
    }
}

#[test]
fn test_non_finite_override_rejected() {
    assert!(matches!(
        decimal_from_f64("grams_per_tasting", f64::NAN),
        Err(MixError::InvalidInput(_))
    ));
}

#[test]
fn test_oversized_event_is_calculation_error() {
    // 100,000 位賓客且無罐數上限，枚舉範圍過大
    let config = PlannerConfig::new(100_000);
    assert!(matches!(plan_event(config), Err(MixError::CalculationError(_))));

    // 設定上限後由 7 oz 補足
    let capped = PlannerConfig::new(100_000).with_caps(10, 10, 10).with_share_cap(None);
    let plan = plan_event(capped).unwrap();
    assert!(plan.all_feasible());
}

#[test]
fn test_config_json_round_trip() {
    let config = PlannerConfig::new(120)
        .with_objective(Objective::Balanced)
        .with_service_penalty(dec!(12.5))
        .with_caps(4, 0, 6)
        .with_top_k(5);

    let json = serde_json::to_string(&config).unwrap();
    let parsed = PlannerConfig::from_json_str(&json).unwrap();
    assert_eq!(parsed, config);

    // 同一配置重複規劃，結果一致
    let first = plan_event(parsed.clone()).unwrap();
    let second = plan_event(parsed).unwrap();
    assert_eq!(first.durations, second.durations);
    assert_ne!(first.plan_id, second.plan_id);
}

#[test]
fn test_reports_render() {
    let plan = plan_event(PlannerConfig::default()).unwrap();

    let sinks: Vec<Box<dyn ReportSink>> = vec![
        Box::new(TextSummary::default()),
        Box::new(EmailDraft),
        Box::new(MailtoLink),
        Box::new(JsonReport::default()),
    ];

    for sink in sinks {
        let rendered = sink.render(&plan).unwrap();
        assert!(!rendered.is_empty());
    }
}
