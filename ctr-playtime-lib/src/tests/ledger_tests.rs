use super::*;
use tempfile::TempDir;

fn catalog() -> Vec<GameRecord> {
    vec![
        GameRecord::new("CTR-P-AAAE", "Alpha", "/roms/a.3ds"),
        GameRecord::new("CTR-P-BBBE", "Beta", "/roms/b.3ds"),
    ]
}

fn ledger_path(tmp: &TempDir) -> PathBuf {
    tmp.path().join(LEDGER_FILE_NAME)
}

#[test]
fn test_initialize_seeds_zeroed_entries() {
    let tmp = TempDir::new().unwrap();
    let path = ledger_path(&tmp);
    let ledger = PlaytimeLedger::load_or_initialize(&path, &catalog()).unwrap();

    assert!(path.exists());
    assert_eq!(ledger.len(), 2);
    let alpha = ledger.entry("CTR-P-AAAE").unwrap();
    assert_eq!(alpha.name, "Alpha");
    assert_eq!(alpha.time_played, 0);
    assert_eq!(alpha.last_time_played, None);
}

#[test]
fn test_initialize_writes_expected_json() {
    let tmp = TempDir::new().unwrap();
    let path = ledger_path(&tmp);
    PlaytimeLedger::load_or_initialize(&path, &catalog()[..1]).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let expected = "{\n    \"CTR-P-AAAE\": {\n        \"name\": \"Alpha\",\n        \"time_played\": 0,\n        \"last_time_played\": null\n    }\n}";
    assert_eq!(written, expected);
}

#[test]
fn test_initialize_does_not_reset_existing() {
    let tmp = TempDir::new().unwrap();
    let path = ledger_path(&tmp);
    let mut ledger = PlaytimeLedger::load_or_initialize(&path, &catalog()).unwrap();
    ledger.accumulate("CTR-P-AAAE", 30, 1_700_000_000).unwrap();

    let reloaded = PlaytimeLedger::load_or_initialize(&path, &catalog()).unwrap();
    assert_eq!(reloaded.entry("CTR-P-AAAE").unwrap().time_played, 30);
}

#[test]
fn test_existing_ledger_is_not_reconciled() {
    let tmp = TempDir::new().unwrap();
    let path = ledger_path(&tmp);
    PlaytimeLedger::load_or_initialize(&path, &catalog()).unwrap();

    let new_catalog = vec![GameRecord::new("CTR-P-CCCE", "Gamma", "/roms/c.3ds")];
    let ledger = PlaytimeLedger::load_or_initialize(&path, &new_catalog).unwrap();
    assert!(ledger.entry("CTR-P-CCCE").is_none());
    assert!(ledger.entry("CTR-P-AAAE").is_some());
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_require_entry() {
    let tmp = TempDir::new().unwrap();
    let ledger = PlaytimeLedger::load_or_initialize(ledger_path(&tmp), &catalog()).unwrap();

    assert_eq!(ledger.require_entry("CTR-P-BBBE").unwrap().name, "Beta");
    match ledger.require_entry("CTR-P-CCCE") {
        Err(LedgerError::UnknownGameId(id)) => assert_eq!(id, "CTR-P-CCCE"),
        other => panic!("expected UnknownGameId, got {:?}", other),
    }
}

#[test]
fn test_accumulate_is_additive() {
    let tmp = TempDir::new().unwrap();
    let path = ledger_path(&tmp);
    let mut ledger = PlaytimeLedger::load_or_initialize(&path, &catalog()).unwrap();

    ledger.accumulate("CTR-P-AAAE", 10, 1_000).unwrap();
    let entry = ledger.accumulate("CTR-P-AAAE", 5, 2_000).unwrap();
    assert_eq!(entry.time_played, 15);
    assert_eq!(entry.last_time_played, Some(2_000));

    let on_disk = PlaytimeLedger::load(&path).unwrap();
    assert_eq!(on_disk.entry("CTR-P-AAAE").unwrap(), entry);
    assert_eq!(on_disk.entry("CTR-P-BBBE").unwrap().time_played, 0);
}

#[test]
fn test_accumulate_rereads_the_file() {
    let tmp = TempDir::new().unwrap();
    let path = ledger_path(&tmp);
    let mut first = PlaytimeLedger::load_or_initialize(&path, &catalog()).unwrap();
    let mut second = PlaytimeLedger::load(&path).unwrap();

    first.accumulate("CTR-P-AAAE", 10, 1_000).unwrap();
    second.accumulate("CTR-P-AAAE", 7, 2_000).unwrap();

    let on_disk = PlaytimeLedger::load(&path).unwrap();
    assert_eq!(on_disk.entry("CTR-P-AAAE").unwrap().time_played, 17);
    assert_eq!(second.snapshot()["CTR-P-AAAE"].time_played, 17);
}

#[test]
fn test_accumulate_unknown_game() {
    let tmp = TempDir::new().unwrap();
    let path = ledger_path(&tmp);
    let mut ledger = PlaytimeLedger::load_or_initialize(&path, &catalog()).unwrap();

    let err = ledger.accumulate("CTR-P-ZZZE", 10, 1_000).unwrap_err();
    assert!(matches!(err, LedgerError::UnknownGameId(id) if id == "CTR-P-ZZZE"));
    // Nothing was written
    assert_eq!(PlaytimeLedger::load(&path).unwrap().snapshot(), ledger.snapshot());
}

#[test]
fn test_accumulate_after_file_removed() {
    let tmp = TempDir::new().unwrap();
    let path = ledger_path(&tmp);
    let mut ledger = PlaytimeLedger::load_or_initialize(&path, &catalog()).unwrap();
    std::fs::remove_file(&path).unwrap();

    let err = ledger.accumulate("CTR-P-AAAE", 10, 1_000).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));
}

#[test]
fn test_load_missing_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = PlaytimeLedger::load(ledger_path(&tmp)).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));
}

#[test]
fn test_malformed_ledger_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = ledger_path(&tmp);
    std::fs::write(&path, "{ \"CTR-P-AAAE\": { \"name\": 3 } }").unwrap();

    let err = PlaytimeLedger::load_or_initialize(&path, &catalog()).unwrap_err();
    assert!(matches!(err, LedgerError::Parse { .. }));
    // The bad file is left alone
    assert!(std::fs::read_to_string(&path).unwrap().contains("\"name\": 3"));
}

#[test]
fn test_duplicate_program_ids_last_writer_wins() {
    let tmp = TempDir::new().unwrap();
    let records = vec![
        GameRecord::new("CTR-P-AAAE", "Alpha (Rev 0)", "/roms/a0.3ds"),
        GameRecord::new("CTR-P-AAAE", "Alpha (Rev 1)", "/roms/a1.3ds"),
    ];
    let ledger = PlaytimeLedger::load_or_initialize(ledger_path(&tmp), &records).unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.entry("CTR-P-AAAE").unwrap().name, "Alpha (Rev 1)");
}

#[test]
fn test_empty_catalog_creates_empty_ledger() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join(LEDGER_FILE_NAME);
    let ledger = PlaytimeLedger::load_or_initialize(&path, &[]).unwrap();
    assert!(ledger.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn test_snapshot_carries_game_ids() {
    let tmp = TempDir::new().unwrap();
    let ledger = PlaytimeLedger::load_or_initialize(ledger_path(&tmp), &catalog()).unwrap();
    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.len(), 2);
    for (id, entry) in &snapshot {
        assert_eq!(id, &entry.game_id);
    }
}

#[test]
fn test_shared_ledger_serializes_updates() {
    let tmp = TempDir::new().unwrap();
    let shared = PlaytimeLedger::load_or_initialize(ledger_path(&tmp), &catalog())
        .unwrap()
        .into_shared();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                shared
                    .lock()
                    .unwrap()
                    .accumulate("CTR-P-BBBE", 1, 1_000 + i)
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let ledger = shared.lock().unwrap();
    assert_eq!(ledger.entry("CTR-P-BBBE").unwrap().time_played, 8);
}
