use super::*;

#[test]
fn defaults_match_the_settings_screen() {
    let settings = SyncSettings::default();
    assert_eq!(settings.sync_time_display(), "02:00");
    assert_eq!(settings.frequency, SyncFrequency::Daily);
    assert!(settings.reminders_enabled);
    assert_eq!(settings.inactivity_days, 7);
}

#[test]
fn frequency_values_and_labels() {
    let cases = [
        (SyncFrequency::Hourly, "hourly", "Every Hour"),
        (SyncFrequency::Daily, "daily", "Daily"),
        (SyncFrequency::Weekly, "weekly", "Weekly"),
    ];
    for (frequency, value, label) in cases {
        assert_eq!(frequency.value(), value);
        assert_eq!(frequency.label(), label);
        assert_eq!(value.parse::<SyncFrequency>().unwrap(), frequency);
    }
}

#[test]
fn unknown_frequency_is_rejected() {
    let err = "fortnightly".parse::<SyncFrequency>().unwrap_err();
    assert!(matches!(err, LadderError::UnknownFrequency { original } if original == "fortnightly"));
}

#[test]
fn sync_time_parses_the_time_input_format() {
    let time = SyncSettings::parse_sync_time("23:59").unwrap();
    assert_eq!(time, Time::constant(23, 59, 0, 0));

    assert!(SyncSettings::parse_sync_time("late o'clock").is_err());
}

#[test]
fn inactivity_days_clamp_to_the_input_bounds() {
    assert_eq!(SyncSettings::parse_inactivity_days("7").unwrap(), 7);
    assert_eq!(SyncSettings::parse_inactivity_days("0").unwrap(), 1);
    assert_eq!(SyncSettings::parse_inactivity_days("45").unwrap(), 30);
    assert!(SyncSettings::parse_inactivity_days("soon").is_err());
}
