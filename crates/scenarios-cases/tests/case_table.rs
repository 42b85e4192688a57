use anyhow::Result;
use scenarios::{LabeledValue, wrap, wrap_labeled};
use scenarios_cases::{CaseConfig, CaseError, CaseTable, DUPLICATES_ENV, DuplicatePolicy};
use scenarios_test_support::assert::assert_label;
use scenarios_test_support::fixtures::{PLAYER_NAMES, Player, players, players_and_stages};
use scenarios_test_support::init_tracing;
use serde_json::json;

fn config(duplicates: DuplicatePolicy, allow_empty_labels: bool) -> CaseConfig {
    CaseConfig {
        duplicates,
        allow_empty_labels,
    }
}

#[test]
fn roster_builds_one_row_per_player() -> Result<()> {
    init_tracing();
    let table = CaseTable::from_values(players())?;

    let names: Vec<&str> = table.names().collect();
    assert_eq!(names, ["\"ryu\"", "\"m. bison\"", "\"rose\"", "\"fei long\""]);
    for (row, expected) in table.iter().zip(PLAYER_NAMES) {
        assert_eq!(row.data.name, expected);
    }
    Ok(())
}

#[test]
fn combined_sources_name_rows_by_both_labels() -> Result<()> {
    init_tracing();
    let table = CaseTable::from_values(players_and_stages())?;

    assert_eq!(table.len(), PLAYER_NAMES.len());
    let first = &table.rows()[0];
    assert_eq!(first.name, "\"(ryu, suzaku castle)\"");
    assert_eq!(first.data.1.country, "japan");
    assert_eq!(
        table.rows()[3].name,
        "\"(fei long, kowloon market)\""
    );
    Ok(())
}

#[test]
fn repeated_rosters_get_occurrence_suffixes() -> Result<()> {
    init_tracing();
    let table = CaseTable::from_values(players().chain(players()).take(6))?;

    let names: Vec<&str> = table.names().collect();
    assert_eq!(
        names,
        [
            "\"ryu\"",
            "\"m. bison\"",
            "\"rose\"",
            "\"fei long\"",
            "\"ryu #2\"",
            "\"m. bison #2\"",
        ]
    );
    assert_eq!(table.rows()[4].data, Player::new("ryu"));
    assert_eq!(table.rows()[4].index, 4);
    Ok(())
}

#[test]
fn rejecting_duplicates_reports_both_positions() {
    init_tracing();
    let err = CaseTable::build(
        players().chain(players()),
        &config(DuplicatePolicy::Reject, true),
    )
    .unwrap_err();

    match err {
        CaseError::DuplicateName {
            name,
            first,
            duplicate,
        } => {
            assert_eq!(name, "\"ryu\"");
            assert_eq!(first, 0);
            assert_eq!(duplicate, 4);
        }
        other => panic!("expected duplicate name error, got {other:?}"),
    }
}

#[test]
fn allowing_duplicates_keeps_names_verbatim() -> Result<()> {
    init_tracing();
    let table = CaseTable::build(
        [wrap(3), wrap_labeled(4, "3"), wrap(3)],
        &config(DuplicatePolicy::Allow, true),
    )?;

    assert!(table.names().all(|name| name == "\"3\""));
    let data: Vec<i32> = table.into_iter().map(|row| row.into_data()).collect();
    assert_eq!(data, [3, 4, 3]);
    Ok(())
}

#[test]
fn empty_labels_follow_configuration() -> Result<()> {
    init_tracing();
    let values = || [wrap_labeled("x".to_string(), "x"), wrap(String::new())];

    let table = CaseTable::from_values(values())?;
    assert_eq!(table.rows()[1].name, "\"\"");

    let err = CaseTable::build(values(), &config(DuplicatePolicy::Suffix, false)).unwrap_err();
    assert!(matches!(err, CaseError::EmptyLabel { index: 1 }));
    Ok(())
}

#[test]
fn suffixed_values_render_like_appended_labels() {
    let value: LabeledValue<&str> = wrap("ken").with_appended_label("#2");
    assert_label(&value, "ken #2");
}

#[test]
fn tables_serialise_rows_in_order() -> Result<()> {
    init_tracing();
    let table = CaseTable::from_values(players().take(2))?;

    let document: serde_json::Value = serde_json::from_str(&table.to_json()?)?;
    assert_eq!(
        document,
        json!([
            { "index": 0, "name": "\"ryu\"", "data": { "name": "ryu" } },
            { "index": 1, "name": "\"m. bison\"", "data": { "name": "m. bison" } },
        ])
    );
    assert!(table.to_json_pretty()?.contains('\n'));
    Ok(())
}

#[test]
fn configuration_sources_drive_the_build() -> Result<()> {
    init_tracing();
    let from_json = CaseConfig::from_json_str(r#"{ "duplicates": "reject" }"#)?;
    assert!(CaseTable::build(players().chain(players()), &from_json).is_err());

    let from_lookup =
        CaseConfig::from_lookup(|key: &str| (key == DUPLICATES_ENV).then(|| "allow".to_string()))?;
    let table = CaseTable::build(players().chain(players()), &from_lookup)?;
    assert_eq!(table.len(), PLAYER_NAMES.len() * 2);
    Ok(())
}
