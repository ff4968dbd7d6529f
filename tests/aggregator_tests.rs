use std::path::PathBuf;

use veritime::aggregator::{aggregate_dataset, aggregate_module, median};
use veritime::parser::{FunctionRecord, ModuleRecords, PhaseTimes, StatsMode};
use veritime::utils::error::StatsError;

fn extended(cfg: f64, stack: f64, heap: f64, call: f64) -> FunctionRecord {
    FunctionRecord::Extended {
        phases: PhaseTimes {
            cfg,
            stack,
            heap,
            call,
        },
    }
}

fn module(path: &str, records: Vec<FunctionRecord>) -> ModuleRecords {
    ModuleRecords {
        path: PathBuf::from(path),
        records,
    }
}

#[test]
fn test_median_rules() {
    assert_eq!(median(&[]), None);
    assert_eq!(median(&[7.5]), Some(7.5));
    assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
    assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
}

#[test]
fn test_average_times_count_equals_sum() {
    let records = vec![
        extended(0.1, 0.2, 0.3, 0.4),
        extended(1.5, 0.0, 2.25, 0.75),
        extended(0.0, 0.0, 0.0, 3.3),
    ];
    let stats = aggregate_module(&module("m.json", records), StatsMode::Extended).unwrap();

    assert!((stats.average * stats.num_funcs as f64 - stats.total).abs() < 1e-9);
}

#[test]
fn test_two_module_scenario_per_module_stats() {
    let a = module(
        "a.json",
        vec![extended(1.0, 1.0, 1.0, 1.0), extended(2.0, 2.0, 2.0, 2.0)],
    );
    let b = module("b.json", vec![extended(5.0, 5.0, 5.0, 5.0)]);

    let stats = aggregate_dataset(&[a, b], StatsMode::Extended).unwrap();

    assert_eq!(stats[0].name, "a");
    assert_eq!(stats[0].average, 6.0);
    assert_eq!(stats[0].median, 6.0);
    assert_eq!(stats[0].max, 8.0);
    assert_eq!(stats[0].min, 4.0);
    assert_eq!(stats[0].num_funcs, 2);
    assert_eq!(stats[0].total, 12.0);

    assert_eq!(stats[1].average, 20.0);
    assert_eq!(stats[1].median, 20.0);
    assert_eq!(stats[1].max, 20.0);
    assert_eq!(stats[1].min, 20.0);
    assert_eq!(stats[1].num_funcs, 1);
    assert_eq!(stats[1].total, 20.0);
}

#[test]
fn test_top_share_is_zero_below_one_hundred_functions() {
    let records: Vec<FunctionRecord> = (0..99).map(|i| extended(i as f64, 0.0, 0.0, 0.0)).collect();
    let stats = aggregate_module(&module("m.json", records), StatsMode::Extended).unwrap();

    let tail = stats.tail.unwrap();
    assert_eq!(tail.top_share, 0.0);
}

#[test]
fn test_top_share_takes_floor_of_count_over_one_hundred() {
    // 199 functions of 1s plus one of 100s: floor(200/100) = 2, so the top
    // set is the 100s function and one 1s function.
    let mut records: Vec<FunctionRecord> = (0..199).map(|_| extended(1.0, 0.0, 0.0, 0.0)).collect();
    records.push(extended(100.0, 0.0, 0.0, 0.0));

    let stats = aggregate_module(&module("m.json", records), StatsMode::Extended).unwrap();

    let tail = stats.tail.unwrap();
    let expected = 101.0 / 299.0;
    assert!((tail.top_share - expected).abs() < 1e-12);
}

#[test]
fn test_phase_shares_sum_to_one() {
    let records = vec![
        extended(0.5, 1.0, 0.25, 0.75),
        extended(2.0, 0.1, 0.4, 1.5),
        extended(0.0, 3.0, 0.0, 0.2),
    ];
    let stats = aggregate_module(&module("m.json", records), StatsMode::Extended).unwrap();

    let tail = stats.tail.unwrap();
    let share_sum = tail.cfg_share + tail.stack_share + tail.heap_share + tail.call_share;
    assert!((share_sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_basic_mode_has_no_tail() {
    let records = vec![FunctionRecord::Basic {
        time: 3.0,
        blocks: 12.0,
    }];
    let stats = aggregate_module(&module("m.json", records), StatsMode::Basic).unwrap();

    assert_eq!(stats.total, 3.0);
    assert!(stats.tail.is_none());
}

#[test]
fn test_empty_module_rejected() {
    let result = aggregate_module(&module("empty.json", vec![]), StatsMode::Extended);
    assert!(matches!(result, Err(StatsError::EmptyModule(_))));
}

#[test]
fn test_module_name_strips_directories_and_extensions() {
    let records = vec![extended(1.0, 0.0, 0.0, 0.0)];
    let stats = aggregate_module(
        &module("results/wasm/spidermonkey.so.json", records),
        StatsMode::Extended,
    )
    .unwrap();

    assert_eq!(stats.name, "spidermonkey");
}

#[test]
fn test_dataset_order_preserved() {
    let modules: Vec<ModuleRecords> = ["z.json", "a.json", "m.json"]
        .iter()
        .map(|p| module(p, vec![extended(1.0, 0.0, 0.0, 0.0)]))
        .collect();

    let stats = aggregate_dataset(&modules, StatsMode::Extended).unwrap();
    let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, vec!["z", "a", "m"]);
}
