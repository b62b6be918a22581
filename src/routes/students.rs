#![allow(clippy::unused_async)]

use crate::{
    data::{
        IdForm,
        roster::Roster,
        student::{ColouredRating, Student, StudentDraft, StudentFormErrors, StudentPatch},
    },
    error::{LadderError, LadderResult},
    maud_conveniences::{card, form_submit_button, simple_form_element, subtitle, supertitle, table},
    routes::sse::SseEvent,
    state::LadderState,
};
use axum::extract::{Form, Query, State};
use jiff::Zoned;
use maud::{Markup, html};
use serde::Deserialize;

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

#[derive(Deserialize)]
pub struct SearchForm {
    pub search: Option<String>,
}

///edit dialog submission - the id rides along as a hidden input
#[derive(Deserialize)]
pub struct EditStudentForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub codeforces_handle: String,
    pub current_rating: String,
    pub max_rating: String,
}

const STUDENT_COLUMNS: [&str; 7] = [
    "Name",
    "Contact",
    "Codeforces Handle",
    "Current Rating",
    "Max Rating",
    "Last Updated",
    "Actions",
];

///the whole students tab - everything inside #students_table refetches itself whenever
///the roster changes, pulling the current search text back in via hx-include
pub fn students_screen(roster: &Roster) -> Markup {
    html! {
        div class="space-y-6" {
            div class="flex items-start justify-between" {
                div {
                    (supertitle("Students"))
                    (subtitle("Manage student profiles and track their progress"))
                }
                a href="/students.csv" class="px-4 py-2 rounded-lg bg-gradient-to-r from-green-500 to-green-600 hover:from-green-600 hover:to-green-700 text-white font-medium transition-all" {
                    "Export CSV"
                }
            }
            (card(html! {
                div class="flex items-center justify-between gap-4 mb-6" {
                    input type="search" id="student_search" name="search" placeholder="Search students..." hx-get="/internal/students/get_table" hx-trigger="input changed delay:500ms, keyup[key=='Enter']" hx-target="#students_table" class="flex-1 max-w-sm px-3 py-2 rounded-lg border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-700 text-slate-800 dark:text-slate-100 placeholder-slate-400 focus:outline-none focus:ring-2 focus:ring-blue-500";
                    button hx-get="/internal/students/add_form" hx-target="#dialog_holder" class="px-4 py-2 rounded-lg bg-gradient-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 text-white font-medium transition-all" {
                        "Add Student"
                    }
                }
                div id="dialog_holder" {}
                div id="students_table" hx-get="/internal/students/get_table" hx-trigger="sse:roster" hx-include="#student_search" {
                    (students_table(roster, ""))
                }
            }))
        }
    }
}

///stats row plus the table itself, filtered by the search term
fn students_table(roster: &Roster, search: &str) -> Markup {
    let stats = roster.stats(Zoned::now().date());
    let rows = roster.search(search).into_iter().map(student_row).collect();

    html! {
        div class="flex flex-wrap gap-6 mb-4 text-sm text-slate-600 dark:text-slate-400" {
            span {
                span class="font-semibold text-slate-800 dark:text-slate-100" {(stats.total)}
                " students"
            }
            span {
                span class="font-semibold text-slate-800 dark:text-slate-100" {(stats.mean_rating)}
                " average rating"
            }
            span {
                span class="font-semibold text-slate-800 dark:text-slate-100" {(stats.active_today)}
                " active today"
            }
        }
        (table(STUDENT_COLUMNS, rows))
    }
}

fn student_row(student: &Student) -> [Markup; 7] {
    let hx_vals = html! {"{\"id\": \"" (student.id) "\"}"};

    [
        html! {
            span class="font-medium text-slate-800 dark:text-slate-100" {(student.name)}
        },
        html! {
            div class="text-sm text-slate-600 dark:text-slate-300" {(student.email)}
            div class="text-sm text-slate-500 dark:text-slate-400" {(student.phone)}
        },
        html! {
            code class="bg-slate-100 dark:bg-slate-700 px-2 py-1 rounded text-sm" {(student.codeforces_handle)}
        },
        html! {(ColouredRating(student.current_rating))},
        html! {(ColouredRating(student.max_rating))},
        html! {
            div class="text-sm" {(student.last_updated.strftime("%Y-%m-%d"))}
            div class="text-xs text-slate-500 dark:text-slate-400" {(student.last_updated.strftime("%H:%M:%S"))}
        },
        html! {
            div class="flex gap-2" {
                button hx-post="/select_student" hx-vals=(hx_vals) hx-target="#content" hx-swap="outerHTML" class="px-2 py-1 rounded border border-slate-300 dark:border-slate-600 text-sm hover:bg-blue-50 dark:hover:bg-blue-900/20 transition-colors" {
                    "View"
                }
                button hx-get="/internal/students/edit_form" hx-vals=(hx_vals) hx-target="#dialog_holder" class="px-2 py-1 rounded border border-slate-300 dark:border-slate-600 text-sm hover:bg-yellow-50 dark:hover:bg-yellow-900/20 transition-colors" {
                    "Edit"
                }
                button hx-delete="/students" hx-vals=(hx_vals) hx-swap="none" class="px-2 py-1 rounded border border-slate-300 dark:border-slate-600 text-sm text-red-600 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors" {
                    "Delete"
                }
            }
        },
    ]
}

///add and edit share one dialog - novalidate keeps the browser out of the way so the
///per-field messages always come from the same place
fn student_dialog(draft: &StudentDraft, errors: StudentFormErrors, editing: Option<&str>) -> Markup {
    let title_text = if editing.is_some() {
        "Edit Student"
    } else {
        "Add New Student"
    };
    let submit_label = if editing.is_some() {
        "Save Changes"
    } else {
        "Add Student"
    };

    html! {
        div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50" {
            div class="bg-white dark:bg-slate-800 rounded-xl shadow-2xl p-6 w-full max-w-md max-h-screen overflow-y-auto" {
                h2 class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent mb-4" {(title_text)}
                form novalidate hx-post=[editing.is_none().then_some("/students")] hx-put=[editing.map(|_| "/students")] hx-target="#dialog_holder" class="space-y-4" {
                    @if let Some(id) = editing {
                        input type="hidden" name="id" value=(id);
                    }
                    (simple_form_element("name", "Full Name", None, Some("Enter student's full name"), &draft.name, errors.name))
                    (simple_form_element("email", "Email", Some("email"), Some("student@example.com"), &draft.email, errors.email))
                    (simple_form_element("phone", "Phone Number", Some("tel"), Some("+1234567890"), &draft.phone, errors.phone))
                    (simple_form_element("codeforces_handle", "Codeforces Handle", None, Some("username"), &draft.codeforces_handle, errors.codeforces_handle))
                    div class="grid grid-cols-2 gap-4" {
                        (simple_form_element("current_rating", "Current Rating", Some("number"), Some("1200"), &draft.current_rating, errors.current_rating))
                        (simple_form_element("max_rating", "Max Rating", Some("number"), Some("1400"), &draft.max_rating, errors.max_rating))
                    }
                    div class="flex justify-end gap-2 pt-2" {
                        button type="button" onclick="document.getElementById('dialog_holder').innerHTML=''" class="px-4 py-2 rounded-lg border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-700 font-medium transition-all" {
                            "Cancel"
                        }
                        (form_submit_button(Some(submit_label)))
                    }
                }
            }
        }
    }
}

pub async fn internal_get_students_table(
    State(state): State<LadderState>,
    Query(SearchForm { search }): Query<SearchForm>,
) -> Markup {
    let roster = state.roster().await;
    students_table(&roster, search.as_deref().unwrap_or_default())
}

pub async fn internal_get_add_form() -> Markup {
    student_dialog(&StudentDraft::default(), StudentFormErrors::default(), None)
}

pub async fn internal_get_edit_form(
    State(state): State<LadderState>,
    Query(IdForm { id }): Query<IdForm>,
) -> LadderResult<Markup> {
    let roster = state.roster().await;
    let Some(student) = roster.get(&id) else {
        return Err(LadderError::MissingStudent { id });
    };

    Ok(student_dialog(
        &StudentDraft::from_student(student),
        StudentFormErrors::default(),
        Some(&student.id),
    ))
}

///a valid draft joins the roster and the dialog closes, an invalid one gets re-rendered
///with every complaint and whatever was typed still in place
pub async fn post_new_student(
    State(state): State<LadderState>,
    Form(draft): Form<StudentDraft>,
) -> Markup {
    match draft.validate() {
        Ok(new_student) => {
            state
                .roster_mut()
                .await
                .add(new_student, Zoned::now().datetime());
            state.send_sse_event(SseEvent::Roster);
            html! {}
        }
        Err(errors) => student_dialog(&draft, errors, None),
    }
}

pub async fn put_update_student(
    State(state): State<LadderState>,
    Form(form): Form<EditStudentForm>,
) -> LadderResult<Markup> {
    let EditStudentForm {
        id,
        name,
        email,
        phone,
        codeforces_handle,
        current_rating,
        max_rating,
    } = form;
    let draft = StudentDraft {
        name,
        email,
        phone,
        codeforces_handle,
        current_rating,
        max_rating,
    };

    match draft.validate() {
        Ok(new_student) => {
            let patch = StudentPatch {
                name: Some(new_student.name),
                email: Some(new_student.email),
                phone: Some(new_student.phone),
                codeforces_handle: Some(new_student.codeforces_handle),
                current_rating: Some(new_student.current_rating),
                max_rating: Some(new_student.max_rating),
                email_reminders: None,
                reminder_enabled: None,
            };
            state
                .roster_mut()
                .await
                .update(&id, patch, Zoned::now().datetime())?;
            state.send_sse_event(SseEvent::Roster);
            Ok(html! {})
        }
        Err(errors) => Ok(student_dialog(&draft, errors, Some(&id))),
    }
}

pub async fn delete_student(
    State(state): State<LadderState>,
    Query(IdForm { id }): Query<IdForm>,
) -> LadderResult<Markup> {
    state.roster_mut().await.remove(&id)?;

    //a profile left open on the removed student would dangle
    {
        let mut ui = state.ui_mut().await;
        if ui.selected_student.as_deref() == Some(id.as_str()) {
            ui.selected_student = None;
        }
    }

    state.send_sse_event(SseEvent::Roster);
    Ok(html! {})
}
