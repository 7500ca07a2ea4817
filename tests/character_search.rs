mod common;

use common::*;
use serde_json::{Value, json};
use std::fs;
use swapi_explorer::{Config, characters};
use tempfile::tempdir;

#[test]
fn search_saves_first_match_under_underscored_name() {
    let dir = tempdir().unwrap();
    let api = FakeApi::new().route(
        &search_url("Luke%20Skywalker"),
        results(vec![luke()], None),
    );
    let mut ex = explorer(&api, dir.path());

    let found = ex.search_character("Luke Skywalker").unwrap().unwrap();
    assert_eq!(found.name(), "Luke Skywalker");

    let saved = dir.path().join("Luke_Skywalker.json");
    let v: Value = serde_json::from_str(&fs::read_to_string(&saved).unwrap()).unwrap();
    assert_eq!(v, luke(), "full record is persisted");

    let out = output(ex);
    assert!(out.contains("\nFound: Luke Skywalker\n"), "{out}");
    assert!(out.contains(&format!("Saved to {}", saved.display())), "{out}");
}

#[test]
fn saved_record_keeps_api_field_order() {
    let dir = tempdir().unwrap();
    let api = FakeApi::new().route(&search_url("luke"), results(vec![luke()], None));
    let mut ex = explorer(&api, dir.path());
    ex.search_character("luke").unwrap();

    let txt = fs::read_to_string(dir.path().join("Luke_Skywalker.json")).unwrap();
    let name_at = txt.find("\"name\"").unwrap();
    let url_at = txt.find("\"url\"").unwrap();
    assert!(name_at < url_at);
}

#[test]
fn several_matches_take_the_first() {
    let dir = tempdir().unwrap();
    let api = FakeApi::new().route(
        &search_url("a"),
        results(vec![leia(), luke()], None),
    );
    let found = characters::search(&api, &config(dir.path()), "a")
        .unwrap()
        .unwrap();
    assert_eq!(found.name(), "Leia Organa");
}

#[test]
fn no_match_returns_none_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("data");
    let api = FakeApi::new().route(&search_url("Jar%20Jar%20Bonks"), results(vec![], None));
    let mut ex = explorer(&api, &out_dir);

    assert!(ex.search_character("Jar Jar Bonks").unwrap().is_none());
    assert!(!out_dir.exists(), "no output directory without a match");
    assert!(output(ex).contains("Character not found."));
}

#[test]
fn missing_results_field_counts_as_no_match() {
    let dir = tempdir().unwrap();
    let api = FakeApi::new().route(&search_url("x"), json!({"count": 0}));
    let got = characters::search(&api, &config(dir.path()), "x").unwrap();
    assert!(got.is_none());
}

#[test]
fn request_failure_is_reported_not_raised() {
    let dir = tempdir().unwrap();
    let api = FakeApi::new().fail(&search_url("Yoda"), 500);
    let mut ex = explorer(&api, dir.path());

    assert!(ex.search_character("Yoda").unwrap().is_none());
    let out = output(ex);
    assert!(out.contains("Request failed:"), "{out}");
    assert!(out.contains("HTTP 500"), "{out}");
}

#[test]
fn unwritable_output_is_not_fatal() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("data");
    fs::write(&blocker, "a file, not a directory").unwrap();
    let api = FakeApi::new().route(&search_url("luke"), results(vec![luke()], None));
    let mut ex = swapi_explorer::Explorer::new(
        &api,
        Config {
            output_dir: blocker,
            ..config(dir.path())
        },
        Vec::new(),
    );

    let found = ex.search_character("luke").unwrap();
    assert!(found.is_some(), "the match is still returned");
    assert!(output(ex).contains("Error saving file:"));
}

#[test]
fn repeated_search_overwrites_previous_file() {
    let dir = tempdir().unwrap();
    let saved = dir.path().join("Luke_Skywalker.json");

    let long = FakeApi::new().route(&search_url("luke"), results(vec![luke()], None));
    explorer(&long, dir.path()).search_character("luke").unwrap();
    let first_len = fs::metadata(&saved).unwrap().len();

    let short_record = json!({"name": "Luke Skywalker"});
    let short = FakeApi::new().route(
        &search_url("luke"),
        results(vec![short_record.clone()], None),
    );
    explorer(&short, dir.path()).search_character("luke").unwrap();

    let txt = fs::read_to_string(&saved).unwrap();
    assert!((txt.len() as u64) < first_len);
    let v: Value = serde_json::from_str(&txt).unwrap();
    assert_eq!(v, short_record);
}
