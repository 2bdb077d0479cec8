use std::fs;
use std::path::{Path, PathBuf};
use timeline_metrics::commands::{execute_run, resolve_filter, validate_args, RunArgs};
use timeline_metrics::output::read_results;
use timeline_metrics::utils::config::FilterSpec;

const SNAPSHOT: &str = r#"{
    "process": "browser",
    "counters": { "gpu.mem": [10, 20, 30] },
    "threads": [
        { "name": "IOThread", "events": [
            { "name": "DispatchFetchEvent", "kind": "async", "duration": 5 },
            { "name": "DispatchFetchEvent", "kind": "async", "duration": 15 }
        ] },
        { "name": "CompositorThread", "events": [
            { "name": "Draw", "kind": "sync", "duration": 3, "self_time": 1 }
        ] }
    ],
    "page_results": { "fetch.latency": { "units": "ms", "value": 7.5 } }
}"#;

fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("snapshot.json");
    fs::write(&path, SNAPSHOT).unwrap();
    path
}

#[test]
fn test_validate_args_valid() {
    let dir = tempfile::tempdir().unwrap();
    let args = RunArgs {
        snapshot: write_snapshot(dir.path()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_missing_snapshot() {
    let args = RunArgs {
        snapshot: PathBuf::from("/definitely/not/here.json"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_empty_snapshot_path() {
    let args = RunArgs {
        snapshot: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_output_is_directory() {
    let dir = tempfile::tempdir().unwrap();
    let args = RunArgs {
        snapshot: write_snapshot(dir.path()),
        output: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_run_writes_results() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out/results.json");
    let args = RunArgs {
        snapshot: write_snapshot(dir.path()),
        output: Some(output.clone()),
        filter: FilterSpec {
            thread_pattern: Some("IO.*".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let results = execute_run(&args).unwrap();
    let loaded = read_results(&output).unwrap();

    assert_eq!(loaded, results);
    assert_eq!(loaded.process.as_deref(), Some("browser"));

    let names: Vec<&str> = loaded.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "fetch_latency",
            "gpu_mem",
            "gpu_mem_avg",
            "IOThread|DispatchFetchEvent",
            "IOThread|DispatchFetchEvent_max",
            "IOThread|DispatchFetchEvent_avg",
        ]
    );
}

#[test]
fn test_execute_run_without_page_results() {
    let dir = tempfile::tempdir().unwrap();
    let args = RunArgs {
        snapshot: write_snapshot(dir.path()),
        output: Some(dir.path().join("results.json")),
        page_results: false,
        ..Default::default()
    };

    let results = execute_run(&args).unwrap();

    assert!(results.records.iter().all(|r| r.name != "fetch_latency"));
    assert!(results
        .records
        .iter()
        .any(|r| r.name == "CompositorThread|Draw"));
}

#[test]
fn test_execute_run_invalid_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{ "counters": { "empty": [] } }"#,
    )
    .unwrap();
    let output = dir.path().join("results.json");
    let args = RunArgs {
        snapshot: path,
        output: Some(output.clone()),
        ..Default::default()
    };

    assert!(execute_run(&args).is_err());
    assert!(!output.exists());
}

#[test]
fn test_resolve_filter_cli_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let filter_path = dir.path().join("filter.toml");
    fs::write(
        &filter_path,
        "preset = \"service_worker\"\nthread_pattern = \"Renderer\"\n",
    )
    .unwrap();

    let args = RunArgs {
        filter_file: Some(filter_path),
        filter: FilterSpec {
            thread_pattern: Some("IOThread".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let filter = resolve_filter(&args).unwrap();
    assert_eq!(filter.thread_pattern().as_str(), "IOThread");
    assert!(filter.event_pattern().is_match("DispatchFetchEvent"));
}

#[test]
fn test_resolve_filter_bad_regex() {
    let args = RunArgs {
        filter: FilterSpec {
            event_pattern: Some("(".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(resolve_filter(&args).is_err());
}
