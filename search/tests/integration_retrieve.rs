use ir_core::RetrievalError;
use search::{load_index, load_queries, run, Args, LoadedIndex};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("index.json"),
        r#"{
            "cat": { "1": 2, "2": 1 },
            "dog": { "2": 3 },
            "fish": { "3": 1 }
        }"#,
    )
    .unwrap();
    fs::write(
        dir.join("queries.json"),
        r#"{
            "q2": { "dog": 1 },
            "q1": { "cat": 1 },
            "q3": { "zebra": 4 }
        }"#,
    )
    .unwrap();
}

fn args(dir: &Path, weighting: &str, scores: bool) -> Args {
    Args {
        index: dir.join("index.json"),
        queries: dir.join("queries.json"),
        weighting: weighting.to_string(),
        top_k: 10,
        output: Some(dir.join("results.txt")),
        scores,
    }
}

#[test]
fn loads_json_fixtures() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    let LoadedIndex::Numeric(index) = load_index(&dir.path().join("index.json")).unwrap() else {
        panic!("integer document ids should load as numbers");
    };
    assert_eq!(index.len(), 3);
    assert_eq!(index["cat"][&1u32], 2);
    let queries = load_queries(&dir.path().join("queries.json")).unwrap();
    assert_eq!(queries.keys().collect::<Vec<_>>(), vec!["q1", "q2", "q3"]);
}

#[test]
fn writes_ranked_lines_per_query() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    run(&args(dir.path(), "tf", false)).unwrap();
    let out = fs::read_to_string(dir.path().join("results.txt")).unwrap();
    assert_eq!(out, "q1 1\nq1 2\nq2 2\n");
}

#[test]
fn writes_similarities_when_asked() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    run(&args(dir.path(), "binary", true)).unwrap();
    let out = fs::read_to_string(dir.path().join("results.txt")).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "q1 1 1.000000");
    assert_eq!(lines[1], "q1 2 0.707107");
}

#[test]
fn rejects_unknown_weighting() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    let err = run(&args(dir.path(), "lsi", false)).unwrap_err();
    let cause = err.downcast_ref::<RetrievalError>().unwrap();
    assert!(matches!(cause, RetrievalError::Configuration { .. }));
    assert!(!dir.path().join("results.txt").exists());
}

#[test]
fn missing_index_file_names_the_path() {
    let dir = tempdir().unwrap();
    let err = load_index(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn numeric_ids_tie_in_numeric_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.json"), r#"{ "cat": { "10": 1, "9": 1, "100": 1 } }"#).unwrap();
    fs::write(dir.path().join("queries.json"), r#"{ "q": { "cat": 1 } }"#).unwrap();
    run(&args(dir.path(), "tf", true)).unwrap();
    let out = fs::read_to_string(dir.path().join("results.txt")).unwrap();
    assert_eq!(out, "q 9 1.000000\nq 10 1.000000\nq 100 1.000000\n");
}

#[test]
fn non_numeric_ids_load_as_text() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.json"), r#"{ "cat": { "doc-b": 1, "doc-a": 1 } }"#).unwrap();
    fs::write(dir.path().join("queries.json"), r#"{ "q": { "cat": 1 } }"#).unwrap();
    assert!(matches!(load_index(&dir.path().join("index.json")).unwrap(), LoadedIndex::Text(_)));
    run(&args(dir.path(), "binary", false)).unwrap();
    let out = fs::read_to_string(dir.path().join("results.txt")).unwrap();
    assert_eq!(out, "q doc-a\nq doc-b\n");
}
