use geneview::{Dataset, SetCollection, stats, storage};
use std::fs;
use tempfile::tempdir;

fn sample() -> SetCollection<String> {
    let to_vec = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    SetCollection::new()
        .with_set("treated", to_vec(&["TP53", "EGFR", "MYC"]))
        .unwrap()
        .with_set("control", to_vec(&["EGFR", "KRAS"]))
        .unwrap()
}

#[test]
fn save_csv_and_json() {
    let rows = stats::petal_summary(&sample()).unwrap();
    let dir = tempdir().unwrap();

    let csv_path = dir.path().join("petals.csv");
    storage::save_csv(&rows, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("logic,sets,size,percentage"));
    assert_eq!(csv_txt.lines().count(), 1 + rows.len());
    assert!(csv_txt.contains("11,treated&control,1,25.0"));

    let json_path = dir.path().join("petals.json");
    storage::save_json(&rows, &json_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["logic"], "01");
    assert_eq!(arr[0]["sets"], "control");
    assert_eq!(arr[0]["size"], 1);
}

//test if the CSV file is safe and won't include executable formulas
//set names come from user input, so a name like "=cmd" must not become a formula
#[test]
fn csv_cells_are_prefixed_to_avoid_formulas() {
    let sets = SetCollection::new()
        .with_set("=HYPERLINK(\"x\")", [1, 2])
        .unwrap()
        .with_set("@risk", [2, 3])
        .unwrap();
    let rows = stats::petal_summary(&sets).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("unsafe.csv");
    storage::save_csv(&rows, &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let cells: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap()[1].to_string())
        .collect();
    assert!(cells.iter().all(|c| c.starts_with('\'')), "{cells:?}");
    assert!(cells.contains(&"'@risk".to_string()));
}

#[test]
fn set_files_feed_a_dataset() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "TP53\nEGFR\n# comment\n\nTP53\n").unwrap();
    fs::write(&b, "EGFR\nKRAS\n").unwrap();

    let mut sets = SetCollection::new();
    sets.insert("a", storage::read_set_file(&a).unwrap()).unwrap();
    sets.insert("b", storage::read_set_file(&b).unwrap()).unwrap();
    let labels = Dataset::from(sets).petal_labels("{size}").unwrap();
    assert_eq!(labels.get("10"), Some("1"));
    assert_eq!(labels.get("11"), Some("1"));
    assert_eq!(labels.get("01"), Some("1"));
}

#[test]
fn json_documents_are_classified() {
    let dir = tempdir().unwrap();
    let raw = dir.path().join("raw.json");
    fs::write(&raw, r#"{"B": ["x", "y"], "A": ["y", "z"]}"#).unwrap();
    let ds = storage::load_dataset_json(&raw, None).unwrap();
    assert_eq!(ds.names(), vec!["B", "A"]);

    let labels = dir.path().join("labels.json");
    fs::write(&labels, r#"{"01": "a", "10": "b", "11": "c"}"#).unwrap();
    let names = vec!["L".to_string(), "R".to_string()];
    let ds = storage::load_dataset_json(&labels, Some(&names)).unwrap();
    assert!(matches!(ds, Dataset::PrecomputedLabels { .. }));

    let err = storage::load_dataset_json(&labels, None).unwrap_err();
    assert!(format!("{err:#}").contains("explicit ordered list"));
}

#[test]
fn broken_json_names_the_file() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("broken.json");
    fs::write(&p, "{not json").unwrap();
    let err = storage::load_dataset_json(&p, None).unwrap_err();
    assert!(format!("{err}").contains("broken.json"));
}
