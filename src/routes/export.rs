use crate::{
    data::{roster::Roster, student::Student},
    error::{CsvIntoInnerSnafu, CsvSnafu, LadderResult},
    state::LadderState,
};
use axum::{extract::State, http::header, response::IntoResponse};
use serde::Serialize;
use snafu::ResultExt;

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

pub const EXPORT_HEADERS: [&str; 7] = [
    "Name",
    "Email",
    "Phone",
    "Codeforces Handle",
    "Current Rating",
    "Max Rating",
    "Last Updated",
];

///column order and header spelling are the file's contract - the renames must stay
///in step with [`EXPORT_HEADERS`]
#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Phone")]
    phone: &'a str,
    #[serde(rename = "Codeforces Handle")]
    codeforces_handle: &'a str,
    #[serde(rename = "Current Rating")]
    current_rating: u32,
    #[serde(rename = "Max Rating")]
    max_rating: u32,
    #[serde(rename = "Last Updated")]
    last_updated: String,
}

impl<'a> From<&'a Student> for ExportRow<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            name: &student.name,
            email: &student.email,
            phone: &student.phone,
            codeforces_handle: &student.codeforces_handle,
            current_rating: student.current_rating,
            max_rating: student.max_rating,
            last_updated: student.last_updated_display(),
        }
    }
}

pub fn roster_csv(roster: &Roster) -> LadderResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(vec![]);

    if roster.is_empty() {
        //serde only emits the header row alongside a first record
        writer.write_record(EXPORT_HEADERS).context(CsvSnafu)?;
    }
    for student in roster.students() {
        writer
            .serialize(ExportRow::from(student))
            .context(CsvSnafu)?;
    }

    writer.into_inner().context(CsvIntoInnerSnafu)
}

///always the whole roster, regardless of any search filter on screen
pub async fn get_students_csv(
    State(state): State<LadderState>,
) -> LadderResult<impl IntoResponse> {
    let bytes = roster_csv(&*state.roster().await)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"students.csv\"",
            ),
        ],
        bytes,
    ))
}
