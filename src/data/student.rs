use jiff::civil::DateTime;
use maud::{Markup, Render, html};
use serde::Deserialize;

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

///how `last_updated` gets displayed and exported
pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub codeforces_handle: String,
    pub current_rating: u32,
    pub max_rating: u32,
    pub last_updated: DateTime,
    pub email_reminders: u32,
    pub reminder_enabled: bool,
}

impl Student {
    pub fn last_updated_display(&self) -> String {
        self.last_updated.strftime(LAST_UPDATED_FORMAT).to_string()
    }
}

///a validated student ready for the roster, which fills in the id, timestamp and
///reminder counter itself
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub codeforces_handle: String,
    pub current_rating: u32,
    pub max_rating: u32,
    pub reminder_enabled: bool,
}

///sparse update - `None` fields keep their stored value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub codeforces_handle: Option<String>,
    pub current_rating: Option<u32>,
    pub max_rating: Option<u32>,
    pub email_reminders: Option<u32>,
    pub reminder_enabled: Option<bool>,
}

///raw form input for the add/edit dialogs - ratings stay strings because the inputs
///are free text, and empty or junk coerces to zero during validation
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub codeforces_handle: String,
    pub current_rating: String,
    pub max_rating: String,
}

///a fresh add dialog shows zeroes in the rating boxes, not blanks
impl Default for StudentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            codeforces_handle: String::new(),
            current_rating: "0".into(),
            max_rating: "0".into(),
        }
    }
}

impl StudentDraft {
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone(),
            codeforces_handle: student.codeforces_handle.clone(),
            current_rating: student.current_rating.to_string(),
            max_rating: student.max_rating.to_string(),
        }
    }

    ///runs every check and collects every failure, so a fully blank form reports all
    ///the missing fields at once rather than just the first
    ///
    ///whitespace-only text counts as missing, but whatever the user typed gets stored
    ///verbatim once validation passes
    pub fn validate(&self) -> Result<NewStudent, StudentFormErrors> {
        let current_rating = parse_rating(&self.current_rating);
        let max_rating = parse_rating(&self.max_rating);

        let errors = StudentFormErrors {
            name: self.name.trim().is_empty().then_some("Name is required"),
            email: if self.email.trim().is_empty() {
                Some("Email is required")
            } else if !self.email.contains('@') {
                Some("Valid email is required")
            } else {
                None
            },
            phone: self.phone.trim().is_empty().then_some("Phone is required"),
            codeforces_handle: self
                .codeforces_handle
                .trim()
                .is_empty()
                .then_some("Codeforces handle is required"),
            current_rating: (current_rating < 0).then_some("Rating must be positive"),
            max_rating: (max_rating < current_rating)
                .then_some("Max rating must be >= current rating"),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewStudent {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            codeforces_handle: self.codeforces_handle.clone(),
            current_rating: u32::try_from(current_rating).unwrap_or(u32::MAX),
            max_rating: u32::try_from(max_rating).unwrap_or(u32::MAX),
            reminder_enabled: true,
        })
    }
}

///empty or unparseable text becomes 0, but a typed negative number survives so the
///positivity check can reject it
fn parse_rating(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

///one message slot per field so the dialog can render each complaint next to its input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StudentFormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub codeforces_handle: Option<&'static str>,
    pub current_rating: Option<&'static str>,
    pub max_rating: Option<&'static str>,
}

impl StudentFormErrors {
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.codeforces_handle.is_none()
            && self.current_rating.is_none()
            && self.max_rating.is_none()
    }
}

///display colour bucket for a rating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingBand {
    Red,
    Purple,
    Blue,
    Green,
    Gray,
}

impl RatingBand {
    pub const fn for_rating(rating: u32) -> Self {
        match rating {
            1900.. => Self::Red,
            1600.. => Self::Purple,
            1400.. => Self::Blue,
            1200.. => Self::Green,
            _ => Self::Gray,
        }
    }

    pub const fn text_classes(self) -> &'static str {
        match self {
            Self::Red => "text-red-600 dark:text-red-400",
            Self::Purple => "text-purple-600 dark:text-purple-400",
            Self::Blue => "text-blue-600 dark:text-blue-400",
            Self::Green => "text-green-600 dark:text-green-400",
            Self::Gray => "text-gray-600 dark:text-gray-400",
        }
    }
}

///a rating rendered in its band colour
pub struct ColouredRating(pub u32);

impl Render for ColouredRating {
    fn render(&self) -> Markup {
        html! {
            span class={"font-semibold " (RatingBand::for_rating(self.0).text_classes())} {
                (self.0)
            }
        }
    }
}
