//! End-to-end genesis merge over real files.
//!
//! These tests drive `GenesisMerger::run` the way the `fixgen merge`
//! command does: partition files and a template on disk in, one genesis
//! file out.

use fixgen_genesis::{
    merge_accounts, GenesisError, GenesisMerger, MergeJob, MergeOptions, Partition,
};
use fixgen_types::AccountRecord;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

const TEN_POW_27: &str = "1000000000000000000000000000";

/// Writes `partitions` as `accounts{i}.json` and returns their paths.
fn write_partitions(dir: &Path, partitions: &[Vec<&str>]) -> Vec<PathBuf> {
    partitions
        .iter()
        .enumerate()
        .map(|(i, addresses)| {
            let path = dir.join(format!("accounts{}.json", i + 1));
            let records: Vec<Value> = addresses
                .iter()
                .enumerate()
                .map(|(j, a)| {
                    json!({"index": j + 1, "address": a, "privateKey": "0x00", "mnemonic": "x"})
                })
                .collect();
            std::fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
            path
        })
        .collect()
}

fn read_output(path: &Path) -> (String, Value) {
    let text = std::fs::read_to_string(path).unwrap();
    let value = serde_json::from_str(&text).unwrap();
    (text, value)
}

#[test]
fn test_merge_five_partitions() {
    let dir = tempfile::tempdir().unwrap();
    let partitions = write_partitions(
        dir.path(),
        &[
            vec!["0xA1", "0xA2"],
            vec!["0xB1"],
            vec![],
            vec!["0xD1", "0xD2", "0xD3"],
            vec!["0xE1"],
        ],
    );
    let template = dir.path().join("example-genesis.json");
    std::fs::write(
        &template,
        r#"{"chainId": 4005, "config": {"blockPeriod": 1}, "accounts": [{"name": "faucet", "address": "0xF", "balance": 7}]}"#,
    )
    .unwrap();
    let output = dir.path().join("genesis.json");

    let report = GenesisMerger::default()
        .run(&MergeJob {
            partitions,
            template,
            output: output.clone(),
        })
        .unwrap();

    assert_eq!(report.appended, 7);
    assert_eq!(report.preexisting, 1);
    assert_eq!(report.partitions, 5);

    let (text, genesis) = read_output(&output);
    assert_eq!(genesis["chainId"], json!(4005));
    assert_eq!(genesis["config"], json!({"blockPeriod": 1}));

    let accounts = genesis["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 8);
    assert_eq!(accounts[0]["name"], "faucet");

    let appended: Vec<(&str, &str)> = accounts[1..]
        .iter()
        .map(|e| (e["name"].as_str().unwrap(), e["address"].as_str().unwrap()))
        .collect();
    assert_eq!(
        appended,
        vec![
            ("acc0001", "0xA1"),
            ("acc0002", "0xA2"),
            ("acc0003", "0xB1"),
            ("acc0004", "0xD1"),
            ("acc0005", "0xD2"),
            ("acc0006", "0xD3"),
            ("acc0007", "0xE1"),
        ]
    );

    for entry in &accounts[1..] {
        assert_eq!(entry["balance"].to_string(), TEN_POW_27);
        assert_eq!(entry.as_object().unwrap().len(), 3);
    }
    assert_eq!(text.matches(&format!("\"balance\": {TEN_POW_27}")).count(), 7);
}

#[test]
fn test_rerun_on_own_output_doubles_range() {
    let dir = tempfile::tempdir().unwrap();
    let partitions = write_partitions(dir.path(), &[vec!["0x1", "0x2"], vec!["0x3"]]);
    let template = dir.path().join("example-genesis.json");
    std::fs::write(&template, r#"{"chainId": 9}"#).unwrap();
    let first = dir.path().join("genesis.json");
    let second = dir.path().join("genesis2.json");

    let merger = GenesisMerger::default();
    merger
        .run(&MergeJob {
            partitions: partitions.clone(),
            template,
            output: first.clone(),
        })
        .unwrap();
    let report = merger
        .run(&MergeJob {
            partitions,
            template: first,
            output: second.clone(),
        })
        .unwrap();

    assert_eq!(report.preexisting, 3);
    assert_eq!(report.appended, 3);

    let (_, genesis) = read_output(&second);
    let names: Vec<&str> = genesis["accounts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["acc0001", "acc0002", "acc0003", "acc0001", "acc0002", "acc0003"]
    );
}

#[test]
fn test_empty_input_yields_empty_accounts() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("example-genesis.json");
    std::fs::write(&template, r#"{"chainId": 9}"#).unwrap();
    let output = dir.path().join("genesis.json");

    let report = GenesisMerger::default()
        .run(&MergeJob {
            partitions: Vec::new(),
            template,
            output: output.clone(),
        })
        .unwrap();

    assert_eq!(report.appended, 0);
    let (_, genesis) = read_output(&output);
    assert_eq!(genesis, json!({"chainId": 9, "accounts": []}));
}

#[test]
fn test_failed_merge_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut partitions = write_partitions(dir.path(), &[vec!["0x1"]]);
    partitions.push(dir.path().join("accounts2.json"));
    let template = dir.path().join("example-genesis.json");
    std::fs::write(&template, "{}").unwrap();
    let output = dir.path().join("genesis.json");
    std::fs::write(&output, "previous").unwrap();

    let err = GenesisMerger::default()
        .run(&MergeJob {
            partitions,
            template,
            output: output.clone(),
        })
        .unwrap_err();

    assert!(matches!(err, GenesisError::PartitionReadFailure { .. }));
    assert!(err.to_string().contains("accounts2.json"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_invalid_template_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let partitions = write_partitions(dir.path(), &[vec!["0x1"]]);
    let template = dir.path().join("example-genesis.json");
    std::fs::write(&template, "[1, 2, 3]").unwrap();

    let err = GenesisMerger::default()
        .run(&MergeJob {
            partitions,
            template,
            output: dir.path().join("genesis.json"),
        })
        .unwrap_err();

    assert!(matches!(err, GenesisError::InvalidGenesisTemplate(_)));
    assert!(!dir.path().join("genesis.json").exists());
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("example-genesis.json");
    std::fs::write(&template, "{}").unwrap();
    let output = dir.path().join("missing-dir").join("genesis.json");

    let err = GenesisMerger::default()
        .run(&MergeJob {
            partitions: Vec::new(),
            template,
            output,
        })
        .unwrap_err();

    assert!(matches!(err, GenesisError::OutputWriteFailure { .. }));
}

#[test]
fn test_extra_fields_of_any_type_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let partition = dir.path().join("accounts1.json");
    std::fs::write(
        &partition,
        r#"[
            {"address": "0xA1", "index": "1"},
            {"address": "0xA2", "privateKey": 12},
            {"address": "0xA3", "mnemonic": {"phrase": "word word", "locale": "en"}},
            {"address": "0xA4", "mnemonic": "word word", "mnemonicPhrase": "word word"}
        ]"#,
    )
    .unwrap();
    let template = dir.path().join("example-genesis.json");
    std::fs::write(&template, r#"{"chainId": 9}"#).unwrap();
    let output = dir.path().join("genesis.json");

    let report = GenesisMerger::default()
        .run(&MergeJob {
            partitions: vec![partition],
            template,
            output: output.clone(),
        })
        .unwrap();
    assert_eq!(report.appended, 4);

    let (_, genesis) = read_output(&output);
    let entries: Vec<Value> = genesis["accounts"].as_array().unwrap().clone();
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry["name"], format!("acc{:04}", i + 1));
        assert_eq!(entry["address"], format!("0xA{}", i + 1));
        assert_eq!(entry.as_object().unwrap().len(), 3);
    }
}

#[test]
fn test_strict_mode_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let partition = dir.path().join("accounts1.json");
    std::fs::write(&partition, r#"[{"address": "0x1"}, {"index": 2}]"#).unwrap();
    let template = dir.path().join("example-genesis.json");
    std::fs::write(&template, "{}").unwrap();
    let output = dir.path().join("genesis.json");

    let job = MergeJob {
        partitions: vec![partition],
        template,
        output: output.clone(),
    };

    let strict = GenesisMerger::new(MergeOptions {
        strict: true,
        ..MergeOptions::default()
    });
    assert!(matches!(
        strict.run(&job),
        Err(GenesisError::MalformedRecord { position: 2, .. })
    ));
    assert!(!output.exists());

    let report = GenesisMerger::default().run(&job).unwrap();
    assert_eq!(report.appended, 2);
    let (_, genesis) = read_output(&output);
    assert!(genesis["accounts"][1].get("address").is_none());
}

proptest! {
    #[test]
    fn prop_names_are_sequential_and_addresses_faithful(
        sizes in prop::collection::vec(0usize..20, 0..8)
    ) {
        let partitions: Vec<Partition> = sizes
            .iter()
            .enumerate()
            .map(|(p, &n)| {
                let records = (0..n)
                    .map(|r| AccountRecord::with_address(format!("0x{p:02x}{r:04x}")))
                    .collect();
                Partition::new(format!("accounts{}.json", p + 1), records)
            })
            .collect();
        let expected_addresses: Vec<String> = partitions
            .iter()
            .flat_map(|p| p.records.iter().map(|r| r.address.clone().unwrap()))
            .collect();

        let outcome =
            merge_accounts(json!({"chainId": 1}), &partitions, &MergeOptions::default()).unwrap();
        let accounts = outcome.document["accounts"].as_array().unwrap();

        prop_assert_eq!(accounts.len(), expected_addresses.len());
        prop_assert_eq!(outcome.appended as usize, expected_addresses.len());

        for (i, (entry, address)) in accounts.iter().zip(&expected_addresses).enumerate() {
            prop_assert_eq!(entry["name"].as_str().unwrap(), format!("acc{:04}", i + 1));
            prop_assert_eq!(entry["address"].as_str().unwrap(), address.as_str());
            prop_assert_eq!(entry["balance"].to_string(), TEN_POW_27);
        }
        prop_assert_eq!(&outcome.document["chainId"], &json!(1));
    }
}
