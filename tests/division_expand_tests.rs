use surveydash::core::{REGION_COLUMN, SurveyTable, expand, states_for};

fn table_with_regions(regions: &[&str]) -> SurveyTable {
    let mut csv = String::from("RespondentID,Location (Census Region),Answer\n");
    for (index, region) in regions.iter().enumerate() {
        csv.push_str(&format!("{index},{region},Yes\n"));
    }
    SurveyTable::from_csv_reader(csv.as_bytes()).expect("decode table")
}

#[test]
fn state_counts_match_division_row_counts() {
    let table = table_with_regions(&["Pacific", "Pacific", "Pacific", "Mountain"]);
    let rows = expand(&table, REGION_COLUMN).expect("expand");

    for row in &rows {
        let expected = match row.division.as_str() {
            "Pacific" => 3,
            "Mountain" => 1,
            other => panic!("unexpected division {other}"),
        };
        assert_eq!(row.count, expected, "state {}", row.state);
    }
}

#[test]
fn emitted_states_match_static_mapping_exactly() {
    let table = table_with_regions(&["New England", "New England"]);
    let rows = expand(&table, REGION_COLUMN).expect("expand");

    let mut emitted: Vec<&str> = rows.iter().map(|row| row.state.as_str()).collect();
    emitted.sort_unstable();
    let mut expected: Vec<&str> = states_for("New England").expect("mapping").to_vec();
    expected.sort_unstable();
    assert_eq!(emitted, expected);
}

#[test]
fn per_division_counts_sum_to_table_row_count() {
    let table = table_with_regions(&["Pacific", "Mountain", "Mountain", "New England", "Pacific"]);
    let rows = expand(&table, REGION_COLUMN).expect("expand");

    // One count per distinct division; states within a division share it.
    let mut divisions: Vec<(&str, u64)> = rows
        .iter()
        .map(|row| (row.division.as_str(), row.count))
        .collect();
    divisions.sort_unstable();
    divisions.dedup();
    let total: u64 = divisions.iter().map(|(_, count)| count).sum();
    assert_eq!(total, table.row_count() as u64);
}

#[test]
fn unknown_division_is_a_named_error() {
    let table = table_with_regions(&["Pacific", "Antarctica"]);
    let err = expand(&table, REGION_COLUMN).expect_err("unmapped region must fail");
    let message = format!("{err}");
    assert!(message.contains("unknown census division"), "{message}");
    assert!(message.contains("Antarctica"), "{message}");
}

#[test]
fn missing_region_cells_are_excluded_from_aggregates() {
    let csv = "\
RespondentID,Location (Census Region),Answer
1,Pacific,Yes
2,,Yes
3,Pacific,No
";
    let table = SurveyTable::from_csv_reader(csv.as_bytes()).expect("decode table");
    let rows = expand(&table, REGION_COLUMN).expect("expand");
    assert!(rows.iter().all(|row| row.division == "Pacific"));
    assert!(rows.iter().all(|row| row.count == 2));
}

#[test]
fn expand_rejects_unknown_region_column() {
    let table = table_with_regions(&["Pacific"]);
    let err = expand(&table, "No Such Column").expect_err("bad column must fail");
    assert!(format!("{err}").contains("unknown column"));
}
