//! Runs the bundled sample scenario end to end

use std::path::Path;

use stickytab_cli::{Scenario, ScenarioRunner};
use stickytab_layout::{ScrollConfig, StickyConfig};

fn profile() -> Scenario {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/profile.toml");
    Scenario::from_path(&path).unwrap()
}

#[test]
fn test_profile_scenario_runs() {
    let scenario = profile();
    let report = ScenarioRunner::new(&scenario, StickyConfig::default())
        .unwrap()
        .run(&scenario)
        .unwrap();

    assert_eq!(report.steps.len(), scenario.steps.len());
    // header 170 + hero 80 + tab bar 60
    assert_eq!(report.initial.compound_height, 310.0);

    let pinned = &report.steps[0];
    assert_eq!(pinned.true_offset, 200.0);
    assert!(pinned.frames.pinned);

    let flicked = &report.steps[2];
    assert!(flicked.true_offset > 230.0);
    assert!(!flicked.animating);

    // Paging to the short tab leaves the header where it was
    let paged = &report.steps[3];
    assert_eq!(paged.selected_index, Some(2));
    assert_eq!(paged.frames.header, flicked.frames.header);

    // Pulled past the top, the surface springs back to rest at zero
    let rested = &report.steps[5];
    assert!(rested.true_offset.abs() < 0.5);
    assert!(!rested.frames.pinned);

    let resized = &report.steps[7];
    assert_eq!(resized.compound_height, 350.0);

    let removed = report.final_state();
    assert_eq!(removed.tab_count, 2);
}

#[test]
fn test_json_report_without_bounce() {
    let scenario = profile();
    let no_bounce = StickyConfig {
        scroll: ScrollConfig::no_bounce(),
        ..StickyConfig::default()
    };
    let report = ScenarioRunner::new(&scenario, no_bounce)
        .unwrap()
        .run(&scenario)
        .unwrap();

    let mut out = Vec::new();
    report.write_to_writer(&mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["steps"].as_array().map(Vec::len), Some(9));
    assert_eq!(value["viewport"]["width"], 320.0);

    // Without bounce the pull-down clamps at the top instead of stretching
    assert_eq!(value["steps"][4]["true_offset"], 0.0);
    assert_eq!(value["steps"][4]["frames"]["stretch"], 0.0);
}
