use kira_ngscost::factors::RiskFactorTable;
use kira_ngscost::schema::categories::{Backbone, Positioning, Region};
use kira_ngscost::session::{
    JsonFileStore, MemoryStore, SessionSnapshot, SessionStore, export_json, import_json,
};
use kira_ngscost::{WorkflowInputs, evaluate};
use serde_json::Value;
use tempfile::TempDir;

fn snapshot(inputs: &WorkflowInputs) -> SessionSnapshot {
    let out = evaluate(inputs, &RiskFactorTable::default()).unwrap();
    SessionSnapshot::from_scenario(inputs, &out)
}

#[test]
fn export_import_roundtrip_is_exact() {
    let inputs = WorkflowInputs {
        backbone: Backbone::Exome,
        positioning: Positioning::Reflex,
        region: Region::Midwest,
        flowcell_cost: 6335.17,
        reporting: "tumor-normal".to_string(),
        ..WorkflowInputs::default()
    };
    let snap = snapshot(&inputs);
    let json = export_json(&snap).unwrap();
    let back = import_json(&json).unwrap();
    assert_eq!(back, snap);
    assert_eq!(
        back.cost_per_sample.unwrap().to_bits(),
        snap.cost_per_sample.unwrap().to_bits()
    );
    assert_eq!(back.risk_score.to_bits(), snap.risk_score.to_bits());
}

#[test]
fn export_uses_exact_field_names() {
    let snap = snapshot(&WorkflowInputs::default());
    let value: Value = serde_json::from_str(&export_json(&snap).unwrap()).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "backbone",
            "batchSize",
            "costPerSample",
            "payback",
            "positioning",
            "profit",
            "region",
            "reimbursement",
            "reporting",
            "riskScore",
            "roi",
        ]
    );
    assert_eq!(obj["positioning"], "First-line");
    assert_eq!(obj["batchSize"], 24);
}

#[test]
fn undefined_values_export_as_null() {
    let inputs = WorkflowInputs {
        panel_size_gb: 400.0,
        ..WorkflowInputs::default()
    };
    let snap = snapshot(&inputs);
    let value: Value = serde_json::from_str(&export_json(&snap).unwrap()).unwrap();
    assert!(value["costPerSample"].is_null());
    assert!(value["roi"].is_null());
    assert!(value["payback"].is_null());
    assert_eq!(import_json(&export_json(&snap).unwrap()).unwrap(), snap);
}

#[test]
fn memory_store_save_load() {
    let mut store = MemoryStore::new();
    let a = snapshot(&WorkflowInputs::default());
    let b = snapshot(&WorkflowInputs {
        region: Region::West,
        ..WorkflowInputs::default()
    });
    store.save("2024-01-02 10:00:00", b.clone()).unwrap();
    store.save("2024-01-01 09:00:00", a.clone()).unwrap();
    assert_eq!(
        store.keys().unwrap(),
        vec!["2024-01-01 09:00:00", "2024-01-02 10:00:00"]
    );
    assert_eq!(store.load("2024-01-01 09:00:00").unwrap(), Some(a));
    assert_eq!(store.load("missing").unwrap(), None);
}

#[test]
fn json_file_store_persists_across_instances() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sessions").join("store.json");
    let snap = snapshot(&WorkflowInputs::default());

    let mut store = JsonFileStore::new(&path);
    assert!(store.keys().unwrap().is_empty());
    store.save("2024-05-01 12:00:00", snap.clone()).unwrap();

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.keys().unwrap(), vec!["2024-05-01 12:00:00"]);
    assert_eq!(reopened.load("2024-05-01 12:00:00").unwrap(), Some(snap));
}

#[test]
fn failed_save_keeps_existing_sessions() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sessions.json");
    let snap = snapshot(&WorkflowInputs::default());

    let mut store = JsonFileStore::new(&path);
    store.save("2024-05-01 12:00:00", snap.clone()).unwrap();
    assert!(!tmp.path().join("sessions.tmp").exists());

    // A directory in the way of the staging file makes the next save fail.
    std::fs::create_dir(tmp.path().join("sessions.tmp")).unwrap();
    assert!(store.save("2024-05-02 12:00:00", snap.clone()).is_err());

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.keys().unwrap(), vec!["2024-05-01 12:00:00"]);
    assert_eq!(reopened.load("2024-05-01 12:00:00").unwrap(), Some(snap));
}
