//! End-to-end runs of the shell against a real data file.

use std::io::Write;

use stockbook_cli::{CapturedOutput, OutputFormat, Renderer, ScriptedInput, Session, ShellConfig};
use stockbook_infra::{FileItemStore, ItemStore, LoadPolicy};
use stockbook_inventory::{Category, SearchCriteria, filter};

fn answers(groups: &[&[&str]]) -> ScriptedInput {
    ScriptedInput::new(groups.iter().flat_map(|g| g.iter().copied()))
}

const LAPTOP: &[&str] = &["1", "0", "E1", "Laptop Pro", "2024-01-10", "365", "5", "999.99"];
const MILK: &[&str] = &["2", "2", "G1", "Milk", "2024-02-01", "10", "100", "1.50"];

#[test]
fn two_runs_accumulate_in_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.txt");
    let config = ShellConfig::default().with_data_file(&path);

    let first = Session::from_config(FileItemStore::new(&path), &config).run(
        &mut answers(&[&["1"], LAPTOP, &["", "", ""]]),
        &mut CapturedOutput::new(),
    );
    assert_eq!(first.loaded.len(), 1);

    let mut out = CapturedOutput::new();
    let second = Session::from_config(FileItemStore::new(&path), &config).run(
        &mut answers(&[&["1"], MILK, &["1", "", "LAPTOP"]]),
        &mut out,
    );

    assert_eq!(second.loaded.len(), 2);
    assert_eq!(second.loaded[0].code, "E1");
    assert_eq!(second.loaded[1].code, "G1");
    assert_eq!(second.matches, vec![second.loaded[0].clone()]);
    assert!(out.contains(
        "1 | Electronics | E1 | Laptop Pro | 2024-01-10 | 365 days | 5 | $999.99"
    ));

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        raw,
        "1;Electronics;E1;Laptop Pro;2024-01-10;365;5;999.99\n\
         2;Groceries;G1;Milk;2024-02-01;10;100;1.50\n"
    );
}

#[test]
fn stored_entries_search_like_the_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileItemStore::new(dir.path().join("products.txt"));

    let report = Session::new(&store, Renderer::default()).run(
        &mut answers(&[&["2"], LAPTOP, MILK, &["", "", ""]]),
        &mut CapturedOutput::new(),
    );
    assert_eq!(report.matches, report.loaded);

    let loaded = store.load_all().unwrap().into_result().unwrap();
    assert_eq!(
        filter(&loaded, &SearchCriteria::new().with_warehouse(1)),
        vec![loaded[0].clone()]
    );
    assert_eq!(
        filter(&loaded, &SearchCriteria::new().with_category(Category::Groceries)),
        vec![loaded[1].clone()]
    );
}

#[test]
fn hand_edited_corrupt_line_truncates_the_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.txt");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "1;Electronics;E1;Laptop Pro;2024-01-10;365;5;999.99").unwrap();
        writeln!(file, "2;Groceries;G1;Milk").unwrap();
        writeln!(file, "3;Furniture;F1;Desk;2024-03-01;0;2;150").unwrap();
    }

    let mut out = CapturedOutput::new();
    let aborting = Session::new(FileItemStore::new(&path), Renderer::default())
        .run(&mut answers(&[&["0"], &["", "", ""]]), &mut out);
    assert_eq!(aborting.loaded.len(), 1);
    assert_eq!(aborting.store_errors, 1);
    assert!(out.contains("line 2 is malformed"));

    let skipping = Session::new(
        FileItemStore::new(&path).with_policy(LoadPolicy::SkipInvalid),
        Renderer::default(),
    )
    .run(&mut answers(&[&["0"], &["", "", ""]]), &mut CapturedOutput::new());
    assert_eq!(skipping.loaded.len(), 2);
    assert_eq!(skipping.loaded[1].category, Category::Furniture);
}

#[test]
fn json_output_prints_one_object_per_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ShellConfig::default().with_data_file(dir.path().join("products.txt"));
    config.output = OutputFormat::Json;

    let mut out = CapturedOutput::new();
    Session::from_config(FileItemStore::new(&config.data_file), &config).run(
        &mut answers(&[&["1"], MILK, &["", "", ""]]),
        &mut out,
    );

    let objects: Vec<serde_json::Value> = out
        .lines()
        .iter()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    // Once in the full listing, once in the search results.
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0]["name"], "Milk");
    assert_eq!(objects[0]["date_added"], "2024-02-01");
}
