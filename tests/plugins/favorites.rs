use ideapod::core::store::Store;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn ideapod(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ideapod"))
        .env("IDEAPOD_HOME", home)
        .env_remove("COLORFGBG")
        .args(args)
        .output()
        .expect("failed to execute ideapod")
}

fn run_json(home: &Path, args: &[&str]) -> Value {
    let output = ideapod(home, args);
    assert!(
        output.status.success(),
        "ideapod {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn save(home: &Path, sentence: &str) -> Value {
    run_json(home, &["favorites", "save", sentence, "--format", "json"])
}

fn listed_field(home: &Path, field: &str) -> Vec<String> {
    let list = run_json(
        home,
        &["favorites", "list", "--sort", "oldest", "--format", "json"],
    );
    list["items"]
        .as_array()
        .expect("items is an array")
        .iter()
        .map(|item| {
            item[field]
                .as_str()
                .unwrap_or_else(|| panic!("{} missing on {}", field, item))
                .to_string()
        })
        .collect()
}

#[test]
fn test_save_is_a_toggle_on_the_sentence() {
    let tmp = tempdir().unwrap();
    let idea = "a game about tides";

    let saved = save(tmp.path(), idea);
    assert_eq!(saved["saved"], true);
    assert_eq!(saved["record"]["name"], "Idea 1");
    assert_eq!(saved["record"]["idea"], idea);

    let list = run_json(tmp.path(), &["favorites", "list", "--format", "json"]);
    assert_eq!(list["count"], 1);
    assert_eq!(list["items"][0]["display_name"], "Idea 1");

    let removed = save(tmp.path(), idea);
    assert_eq!(removed["saved"], false);
    let list = run_json(tmp.path(), &["favorites", "list", "--format", "json"]);
    assert_eq!(list["count"], 0);
}

#[test]
fn test_save_defaults_to_the_current_idea() {
    let tmp = tempdir().unwrap();
    let rolled = run_json(tmp.path(), &["generate", "--format", "json"]);
    let saved = run_json(tmp.path(), &["favorites", "save", "--format", "json"]);
    assert_eq!(saved["record"]["idea"], rolled["sentence"]);
}

#[test]
fn test_save_with_nothing_to_save_fails() {
    let tmp = tempdir().unwrap();
    let output = ideapod(tmp.path(), &["favorites", "save"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("nothing to save"), "stderr: {}", err);
}

#[test]
fn test_rename_and_remove_act_on_the_filtered_view() {
    let tmp = tempdir().unwrap();
    save(tmp.path(), "first idea");
    save(tmp.path(), "second idea");
    save(tmp.path(), "third idea");

    // Row 1 of the "idea 2" search is the record named "Idea 2".
    let renamed = run_json(
        tmp.path(),
        &[
            "favorites", "rename", "1", "Boss Run", "--search", "idea 2", "--format", "json",
        ],
    );
    assert_eq!(renamed["index"], 1);
    assert_eq!(renamed["record"]["name"], "Boss Run");
    assert_eq!(
        listed_field(tmp.path(), "display_name"),
        vec!["Idea 1", "Boss Run", "Idea 3"]
    );

    let removed = run_json(
        tmp.path(),
        &["favorites", "remove", "1", "--search", "boss", "--format", "json"],
    );
    assert_eq!(removed["index"], 1);
    assert_eq!(removed["record"]["idea"], "second idea");
    assert_eq!(
        listed_field(tmp.path(), "idea"),
        vec!["first idea", "third idea"]
    );
}

#[test]
fn test_rename_with_whitespace_only_clears_the_name() {
    let tmp = tempdir().unwrap();
    save(tmp.path(), "solo idea");
    let cleared = run_json(
        tmp.path(),
        &["favorites", "rename", "1", "   ", "--format", "json"],
    );
    assert_eq!(cleared["record"]["name"], Value::Null);
    // Display falls back to the positional label.
    assert_eq!(listed_field(tmp.path(), "display_name"), vec!["Idea 1"]);
}

#[test]
fn test_row_out_of_view_fails_with_the_view_size() {
    let tmp = tempdir().unwrap();
    save(tmp.path(), "only one");
    let output = ideapod(tmp.path(), &["favorites", "remove", "5"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("no row 5"), "stderr: {}", err);
}

#[test]
fn test_undo_restores_the_removal_at_its_original_position() {
    let tmp = tempdir().unwrap();
    save(tmp.path(), "first idea");
    save(tmp.path(), "second idea");
    save(tmp.path(), "third idea");

    run_json(
        tmp.path(),
        &["favorites", "remove", "2", "--sort", "oldest", "--format", "json"],
    );
    assert_eq!(
        listed_field(tmp.path(), "idea"),
        vec!["first idea", "third idea"]
    );

    let undone = run_json(tmp.path(), &["favorites", "undo", "--format", "json"]);
    assert_eq!(undone["restored"], true);
    assert_eq!(undone["index"], 1);
    assert_eq!(
        listed_field(tmp.path(), "idea"),
        vec!["first idea", "second idea", "third idea"]
    );
}

#[test]
fn test_undo_with_nothing_pending_stays_soft() {
    let tmp = tempdir().unwrap();
    let undone = run_json(tmp.path(), &["favorites", "undo", "--format", "json"]);
    assert_eq!(undone["restored"], false);
    assert_eq!(undone["outcome"], "empty");
}

#[test]
fn test_export_writes_a_pretty_json_file() {
    let tmp = tempdir().unwrap();
    save(tmp.path(), "a game about silt");
    save(tmp.path(), "a game about kelp");

    let out = tmp.path().join("shelf.json");
    let exported = run_json(
        tmp.path(),
        &[
            "favorites", "export", "--out", out.to_str().unwrap(), "--format", "json",
        ],
    );
    assert_eq!(exported["exported"], 2);

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("[\n"), "export should be pretty-printed");
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_export_with_no_favorites_writes_nothing() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("shelf.json");
    let exported = run_json(
        tmp.path(),
        &[
            "favorites", "export", "--out", out.to_str().unwrap(), "--format", "json",
        ],
    );
    assert_eq!(exported["exported"], 0);
    assert!(!out.exists());
}

#[test]
fn test_legacy_documents_upgrade_on_first_list() {
    let tmp = tempdir().unwrap();
    let store = Store::at(tmp.path());
    fs::create_dir_all(store.data_dir()).unwrap();
    fs::write(
        store.doc_path("favorites.json"),
        r#"["plain one","plain two"]"#,
    )
    .unwrap();

    let list = run_json(tmp.path(), &["favorites", "list", "--format", "json"]);
    assert_eq!(list["count"], 2);
    assert_eq!(list["items"][0]["name"], Value::Null);
    assert_eq!(list["items"][0]["display_name"], "Idea 1");
    assert_eq!(list["items"][1]["display_name"], "Idea 2");

    // The document was upgraded in place to the object form.
    let raw = fs::read_to_string(store.doc_path("favorites.json")).unwrap();
    assert!(raw.contains(r#""idea":"plain one""#), "raw: {}", raw);
}
