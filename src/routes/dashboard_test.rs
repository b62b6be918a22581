use super::*;

#[test]
fn dashboard_shows_all_four_stat_cards() {
    let markup = dashboard_screen().into_string();
    for stat in &DASHBOARD_STATS {
        assert!(markup.contains(stat.title), "missing {}", stat.title);
        assert!(markup.contains(stat.value), "missing value for {}", stat.title);
        assert!(markup.contains(stat.change), "missing change for {}", stat.title);
    }
    assert!(markup.contains("from last month"));
}

#[test]
fn dashboard_includes_both_charts_and_a_timestamp() {
    let markup = dashboard_screen().into_string();
    assert!(markup.contains("Student Growth"));
    assert!(markup.contains("Activity Trend"));
    assert!(markup.contains("Last updated: "));
}
