use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use veritime::aggregator::{aggregate_dataset, summarize};
use veritime::parser::{load_dataset, StatsMode};
use veritime::utils::error::{LoadError, StatsError};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_end_to_end_two_module_scenario() {
    let a = write_temp(r#"[["f0", 0, 1, 1, 1, 1], ["f1", 0, 2, 2, 2, 2]]"#);
    let b = write_temp(r#"[["f0", 0, 5, 5, 5, 5]]"#);
    let paths = vec![a.path().to_path_buf(), b.path().to_path_buf()];

    let dataset = load_dataset(&paths, StatsMode::Extended).unwrap();
    let stats = aggregate_dataset(&dataset, StatsMode::Extended).unwrap();

    assert_eq!(stats[0].average, 6.0);
    assert_eq!(stats[0].median, 6.0);
    assert_eq!(stats[0].max, 8.0);
    assert_eq!(stats[0].min, 4.0);
    assert_eq!(stats[0].num_funcs, 2);
    assert_eq!(stats[0].total, 12.0);
    assert_eq!(stats[1].total, 20.0);

    let summary = summarize(&stats).unwrap();
    assert_eq!(summary.median_function_time, 13.0);
}

#[test]
fn test_dataset_follows_argument_order() {
    let a = write_temp(r#"[["f0", 0, 1, 1, 1, 1]]"#);
    let b = write_temp(r#"[["f0", 0, 2, 2, 2, 2]]"#);

    let forward = vec![a.path().to_path_buf(), b.path().to_path_buf()];
    let reverse = vec![b.path().to_path_buf(), a.path().to_path_buf()];

    let first = load_dataset(&forward, StatsMode::Extended).unwrap();
    let second = load_dataset(&reverse, StatsMode::Extended).unwrap();

    assert_eq!(first[0].records, second[1].records);
    assert_eq!(first[1].records, second[0].records);
}

#[test]
fn test_identifier_field_may_be_string_or_number() {
    let file = write_temp(r#"[["f0", 0, 1, 1, 1, 1], [42, null, 2, 2, 2, 2]]"#);
    let dataset = load_dataset(&[file.path()], StatsMode::Extended).unwrap();

    assert_eq!(dataset[0].records.len(), 2);
}

#[test]
fn test_malformed_json_rejected() {
    let file = write_temp("not json at all");
    let result = load_dataset(&[file.path()], StatsMode::Extended);

    assert!(matches!(result, Err(LoadError::InvalidJson { .. })));
}

#[test]
fn test_missing_file_rejected() {
    let missing = PathBuf::from("does/not/exist.json");
    let result = load_dataset(&[missing], StatsMode::Extended);

    assert!(matches!(result, Err(LoadError::ReadFailed { .. })));
}

#[test]
fn test_non_numeric_duration_rejected() {
    let file = write_temp(r#"[["f0", 0, "fast", 1, 1, 1]]"#);
    let result = load_dataset(&[file.path()], StatsMode::Extended);

    assert!(matches!(result, Err(LoadError::InvalidRow(_))));
}

#[test]
fn test_empty_module_file_fails_at_aggregation() {
    let file = write_temp("[]");
    let dataset = load_dataset(&[file.path()], StatsMode::Extended).unwrap();
    let result = aggregate_dataset(&dataset, StatsMode::Extended);

    assert!(matches!(result, Err(StatsError::EmptyModule(_))));
}
