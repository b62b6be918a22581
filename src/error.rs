use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type LadderResult<T> = Result<T, LadderError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum LadderError {
    #[snafu(display("Unable to parse number {:?}", original))]
    ParseNumber {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to parse time-of-day {:?}", original))]
    ParseTime {
        source: jiff::Error,
        original: String,
    },
    #[snafu(display("Unknown sync frequency {:?}", original))]
    UnknownFrequency { original: String },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: String },
    #[snafu(display("Max rating {} would be below current rating {}", max_rating, current_rating))]
    RatingsOutOfOrder {
        current_rating: u32,
        max_rating: u32,
    },
    #[snafu(display("Error with CSVs"))]
    Csv { source: csv::Error },
    #[snafu(display("Error writing out CSV bytes"))]
    CsvIntoInner {
        source: csv::IntoInnerError<csv::Writer<Vec<u8>>>,
    },
}

impl IntoResponse for LadderError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Ladder Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::ParseNumber { .. }
            | Self::ParseTime { .. }
            | Self::UnknownFrequency { .. }
            | Self::RatingsOutOfOrder { .. } => BI,
            Self::MissingStudent { .. } => NF,
            Self::Csv { .. } | Self::CsvIntoInner { .. } => ISE,
        };

        error!(?self, "Error!");
        (status_code, basic_error(self.to_string())).into_response()
    }
}
