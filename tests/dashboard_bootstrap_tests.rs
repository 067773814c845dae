use surveydash::Dashboard;
use surveydash::core::SurveyTable;
use surveydash::spec::ColorField;

fn wide_table() -> SurveyTable {
    let columns = "RespondentID,Location (Census Region),V1,V2,V3,V4,V5,V6,V7,V8,V9,V10";
    let csv = format!("{columns}\n1,Pacific,a,a,a,a,a,a,a,a,a,a\n2,Mountain,b,b,b,b,b,b,b,b,b,b\n");
    SurveyTable::from_csv_reader(csv.as_bytes()).expect("decode table")
}

#[test]
fn bootstrap_builds_both_map_templates() {
    let dashboard = Dashboard::bootstrap(wide_table()).expect("bootstrap");

    let regions = dashboard.regions_map();
    assert_eq!(regions.color_field, ColorField::Division);
    assert_eq!(regions.color_continuous_scale, None);

    let counts = dashboard.counts_map();
    assert_eq!(counts.color_field, ColorField::Count);
    assert_eq!(counts.color_continuous_scale.as_deref(), Some("Cividis"));

    // Pacific (5 states) + Mountain (8 states).
    assert_eq!(regions.rows.len(), 13);
    assert_eq!(counts.rows, regions.rows);
}

#[test]
fn default_selection_is_first_and_ninth_variable() {
    let dashboard = Dashboard::bootstrap(wide_table()).expect("bootstrap");
    let (first, second) = dashboard.default_selection();
    assert_eq!(first, "V1");
    assert_eq!(second, "V9");
}

#[test]
fn default_selection_falls_back_to_last_variable_on_narrow_tables() {
    let csv = "RespondentID,Location (Census Region),V1,V2\n1,Pacific,a,b\n";
    let table = SurveyTable::from_csv_reader(csv.as_bytes()).expect("decode table");
    let dashboard = Dashboard::bootstrap(table).expect("bootstrap");

    let (first, second) = dashboard.default_selection();
    assert_eq!(first, "V1");
    assert_eq!(second, "V2");
}

#[test]
fn dropdown_windows_overlap_by_one_column() {
    let dashboard = Dashboard::bootstrap(wide_table()).expect("bootstrap");

    assert_eq!(
        dashboard.first_variable_options(),
        ["V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8"]
    );
    assert_eq!(dashboard.second_variable_options(), ["V8", "V9", "V10"]);
}

#[test]
fn bootstrap_rejects_tables_without_selectable_variables() {
    let csv = "RespondentID,Location (Census Region)\n1,Pacific\n";
    let table = SurveyTable::from_csv_reader(csv.as_bytes()).expect("decode table");
    let err = Dashboard::bootstrap(table).expect_err("narrow table must fail");
    assert!(format!("{err}").contains("no selectable variables"));
}

#[test]
fn bootstrap_propagates_unknown_divisions() {
    let csv = "RespondentID,Location (Census Region),V1\n1,Atlantis,a\n";
    let table = SurveyTable::from_csv_reader(csv.as_bytes()).expect("decode table");
    let err = Dashboard::bootstrap(table).expect_err("unmapped region must fail");
    assert!(format!("{err}").contains("unknown census division"));
}

#[test]
fn grid_is_built_once_at_bootstrap() {
    let dashboard = Dashboard::bootstrap(wide_table()).expect("bootstrap");
    assert_eq!(dashboard.grid().column_defs.len(), 12);
    assert_eq!(dashboard.grid().row_data.len(), 2);
}
