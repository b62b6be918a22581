use super::*;
use crate::{config::RuntimeConfiguration, data::student::NewStudent};
use axum::body::to_bytes;
use jiff::civil::date;

fn make_state() -> LadderState {
    LadderState::new(&RuntimeConfiguration::new().unwrap())
}

fn csv_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8(bytes.to_vec())
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect()
}

// =============================================================
// File contents
// =============================================================

#[tokio::test]
async fn header_line_is_the_exact_contract() {
    let state = make_state();
    let lines = csv_lines(&roster_csv(&*state.roster().await).unwrap());

    assert_eq!(lines[0], EXPORT_HEADERS.join(","));
}

#[tokio::test]
async fn one_row_per_student_in_store_order() {
    let state = make_state();
    let lines = csv_lines(&roster_csv(&*state.roster().await).unwrap());

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        "John Doe,john.doe@example.com,+1234567890,johndoe123,1547,1652,2024-06-15 14:30:00"
    );
    assert!(lines[2].starts_with("Jane Smith,"));
    assert!(lines[3].starts_with("Mike Johnson,"));
}

#[tokio::test]
async fn fields_with_commas_get_quoted() {
    let state = make_state();
    state.roster_mut().await.add(
        NewStudent {
            name: "Doe, Janet".into(),
            email: "janet@example.com".into(),
            phone: "+1999".into(),
            codeforces_handle: "jd".into(),
            current_rating: 1000,
            max_rating: 1100,
            reminder_enabled: true,
        },
        date(2024, 7, 1).at(8, 0, 0, 0),
    );

    let lines = csv_lines(&roster_csv(&*state.roster().await).unwrap());
    assert_eq!(
        lines[4],
        "\"Doe, Janet\",janet@example.com,+1999,jd,1000,1100,2024-07-01 08:00:00"
    );
}

#[tokio::test]
async fn an_empty_roster_still_exports_the_header() {
    let state = make_state();
    {
        let mut roster = state.roster_mut().await;
        for id in ["1", "2", "3"] {
            roster.remove(id).unwrap();
        }
    }

    let lines = csv_lines(&roster_csv(&*state.roster().await).unwrap());
    assert_eq!(lines, vec![EXPORT_HEADERS.join(",")]);
}

// =============================================================
// Download response
// =============================================================

#[tokio::test]
async fn download_carries_csv_headers_and_the_file() {
    let state = make_state();
    let response = get_students_csv(State(state)).await.unwrap().into_response();

    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"students.csv\""
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.starts_with(b"Name,Email,Phone"));
}
