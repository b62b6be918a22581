use super::*;

fn make_new(name: &str, email: &str, handle: &str, current: u32, max: u32) -> NewStudent {
    NewStudent {
        name: name.into(),
        email: email.into(),
        phone: "+1000000000".into(),
        codeforces_handle: handle.into(),
        current_rating: current,
        max_rating: max,
        reminder_enabled: true,
    }
}

fn noon() -> DateTime {
    date(2024, 7, 1).at(12, 0, 0, 0)
}

// =============================================================
// Seeding + add
// =============================================================

#[test]
fn seeded_roster_has_sample_students() {
    let roster = Roster::seeded();
    assert_eq!(roster.len(), 3);
    let ids: Vec<_> = roster.students().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(roster.get("1").unwrap().name, "John Doe");
    assert_eq!(roster.get("2").unwrap().current_rating, 1823);
    assert!(!roster.get("3").unwrap().reminder_enabled);
}

#[test]
fn add_appends_with_fresh_id_and_defaults() {
    let mut roster = Roster::seeded();
    let before: Vec<_> = roster.students().to_vec();

    let added = roster.add(
        make_new("Ada Lovelace", "ada@example.com", "ada_l", 1500, 1700),
        noon(),
    );

    assert_eq!(added.id, "4");
    assert_eq!(added.email_reminders, 0);
    assert!(added.reminder_enabled);
    assert_eq!(added.last_updated, noon());
    assert_eq!(roster.len(), 4);
    // existing records untouched, new one at the end
    assert_eq!(&roster.students()[..3], &before[..]);
    assert_eq!(roster.students()[3], added);
}

#[test]
fn ids_stay_sequential_across_adds() {
    let mut roster = Roster::default();
    let a = roster.add(make_new("A", "a@example.com", "a", 0, 0), noon());
    let b = roster.add(make_new("B", "b@example.com", "b", 0, 0), noon());
    assert_eq!(a.id, "1");
    assert_eq!(b.id, "2");
}

#[test]
fn removal_never_recycles_ids() {
    let mut roster = Roster::seeded();
    roster.remove("3").unwrap();
    let added = roster.add(make_new("A", "a@example.com", "a", 0, 0), noon());
    assert_eq!(added.id, "4");

    roster.remove("4").unwrap();
    let again = roster.add(make_new("B", "b@example.com", "b", 0, 0), noon());
    assert_eq!(again.id, "5");
}

// =============================================================
// Update
// =============================================================

#[test]
fn update_patches_only_given_fields() {
    let mut roster = Roster::seeded();
    let later = date(2024, 8, 1).at(8, 0, 0, 0);

    let updated = roster
        .update(
            "1",
            StudentPatch {
                current_rating: Some(1600),
                ..StudentPatch::default()
            },
            later,
        )
        .unwrap();

    assert_eq!(updated.current_rating, 1600);
    assert_eq!(updated.name, "John Doe");
    assert_eq!(updated.max_rating, 1652);
    assert_eq!(updated.last_updated, later);
    assert_eq!(roster.get("1").unwrap(), &updated);
}

#[test]
fn update_missing_id_fails() {
    let mut roster = Roster::seeded();
    let err = roster
        .update("99", StudentPatch::default(), noon())
        .unwrap_err();
    assert!(matches!(err, LadderError::MissingStudent { id } if id == "99"));
}

#[test]
fn update_rejects_rating_inversion_and_keeps_record() {
    let mut roster = Roster::seeded();
    let before = roster.get("1").unwrap().clone();

    let err = roster
        .update(
            "1",
            StudentPatch {
                max_rating: Some(1000),
                ..StudentPatch::default()
            },
            noon(),
        )
        .unwrap_err();

    assert!(matches!(err, LadderError::RatingsOutOfOrder { .. }));
    // nothing committed, timestamp included
    assert_eq!(roster.get("1").unwrap(), &before);
}

#[test]
fn update_can_raise_both_ratings_together() {
    let mut roster = Roster::seeded();
    let updated = roster
        .update(
            "3",
            StudentPatch {
                current_rating: Some(1500),
                max_rating: Some(1500),
                ..StudentPatch::default()
            },
            noon(),
        )
        .unwrap();
    assert_eq!(updated.current_rating, 1500);
    assert_eq!(updated.max_rating, 1500);
}

// =============================================================
// Remove
// =============================================================

#[test]
fn remove_returns_the_student() {
    let mut roster = Roster::seeded();
    let removed = roster.remove("2").unwrap();
    assert_eq!(removed.name, "Jane Smith");
    assert_eq!(roster.len(), 2);
    assert!(roster.get("2").is_none());
}

#[test]
fn remove_missing_id_fails() {
    let mut roster = Roster::seeded();
    let err = roster.remove("99").unwrap_err();
    assert!(matches!(err, LadderError::MissingStudent { id } if id == "99"));
    assert_eq!(roster.len(), 3);
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_is_case_insensitive_over_all_three_fields() {
    let roster = Roster::seeded();

    let by_name: Vec<_> = roster.search("JANE").iter().map(|s| s.id.clone()).collect();
    assert_eq!(by_name, ["2"]);

    let by_email: Vec<_> = roster
        .search("mike.johnson@")
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(by_email, ["3"]);

    let by_handle: Vec<_> = roster
        .search("JOHNDOE123")
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(by_handle, ["1"]);
}

#[test]
fn empty_term_matches_everyone() {
    let roster = Roster::seeded();
    assert_eq!(roster.search("").len(), 3);
}

#[test]
fn unmatched_term_matches_no_one() {
    let roster = Roster::seeded();
    assert!(roster.search("zzzz").is_empty());
}

#[test]
fn search_never_mutates_the_store() {
    let roster = Roster::seeded();
    let before: Vec<_> = roster.students().to_vec();
    let _ = roster.search("john");
    let _ = roster.search("");
    assert_eq!(roster.students(), &before[..]);
}

#[test]
fn search_on_a_single_record_store() {
    let mut roster = Roster::default();
    roster.add(
        make_new("John Doe", "john.doe@example.com", "johndoe123", 1547, 1652),
        noon(),
    );

    assert!(roster.search("jane").is_empty());
    let hits = roster.search("john");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "John Doe");
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_round_the_mean_and_count_todays_updates() {
    let roster = Roster::seeded();

    // (1547 + 1823 + 1234) / 3 = 1534.67, rounds to 1535
    let on_the_15th = roster.stats(date(2024, 6, 15));
    assert_eq!(on_the_15th.total, 3);
    assert_eq!(on_the_15th.mean_rating, 1535);
    assert_eq!(on_the_15th.active_today, 2);

    let on_the_14th = roster.stats(date(2024, 6, 14));
    assert_eq!(on_the_14th.active_today, 1);

    let much_later = roster.stats(date(2025, 1, 1));
    assert_eq!(much_later.active_today, 0);
}

#[test]
fn empty_roster_stats_are_all_zero() {
    let roster = Roster::default();
    let stats = roster.stats(date(2024, 6, 15));
    assert_eq!(
        stats,
        RosterStats {
            total: 0,
            mean_rating: 0,
            active_today: 0
        }
    );
    assert!(roster.is_empty());
}
