use crate::{
    charts::{self, AVG_PER_DAY, PROBLEMS_SOLVED},
    data::{
        IdForm,
        student::{ColouredRating, Student},
    },
    error::{LadderError, LadderResult},
    maud_conveniences::{card, stat_card, subsubtitle},
    routes::index,
    state::LadderState,
};
use axum::extract::{Form, Query, State};
use maud::{Markup, html};

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

///one student in detail - the wrapper refetches its body whenever the roster changes,
///so edits made elsewhere show up without a reload
pub fn profile_screen(student: &Student) -> Markup {
    html! {
        div hx-get="/internal/profile" hx-vals={"{\"id\": \"" (student.id) "\"}"} hx-trigger="sse:roster" {
            (profile_body(student))
        }
    }
}

fn profile_body(student: &Student) -> Markup {
    html! {
        div class="space-y-6" {
            div class="flex items-center gap-4" {
                button hx-post="/deselect_student" hx-target="#content" hx-swap="outerHTML" class="px-4 py-2 rounded-lg border border-slate-300 dark:border-slate-600 text-sm font-medium hover:bg-slate-100 dark:hover:bg-slate-700 transition-colors" {
                    "Back to Students"
                }
                div {
                    h1 class="text-3xl font-bold text-slate-800 dark:text-slate-100" {(student.name)}
                    p class="text-slate-600 dark:text-slate-400 mt-1" {
                        "@" (student.codeforces_handle) " • " (student.email)
                    }
                }
            }
            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6" {
                (stat_card("Current Rating", html! {(ColouredRating(student.current_rating))}, None))
                (stat_card("Max Rating", html! {(ColouredRating(student.max_rating))}, None))
                (stat_card("Problems Solved", html! {(PROBLEMS_SOLVED)}, None))
                (stat_card("Avg/Day", html! {(AVG_PER_DAY)}, None))
            }
            (details_card(student))
            div class="grid grid-cols-1 lg:grid-cols-2 gap-6" {
                (charts::contest_history_chart())
                (charts::problems_by_rating_chart())
            }
            (charts::submission_heatmap())
        }
    }
}

fn details_card(student: &Student) -> Markup {
    card(html! {
        (subsubtitle("Details"))
        div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-sm" {
            div {
                p class="text-slate-500 dark:text-slate-400" {"Phone"}
                p class="font-medium mt-1" {(student.phone)}
            }
            div {
                p class="text-slate-500 dark:text-slate-400" {"Email Reminders Sent"}
                p class="font-medium mt-1" {(student.email_reminders)}
            }
            div {
                p class="text-slate-500 dark:text-slate-400" {"Reminders"}
                @if student.reminder_enabled {
                    p class="font-medium mt-1 text-green-600 dark:text-green-400" {"Enabled"}
                } @else {
                    p class="font-medium mt-1 text-slate-500 dark:text-slate-400" {"Disabled"}
                }
            }
            div {
                p class="text-slate-500 dark:text-slate-400" {"Last Updated"}
                p class="font-medium mt-1" {(student.last_updated_display())}
            }
        }
    })
}

pub async fn post_select_student(
    State(state): State<LadderState>,
    Form(IdForm { id }): Form<IdForm>,
) -> LadderResult<Markup> {
    if state.roster().await.get(&id).is_none() {
        return Err(LadderError::MissingStudent { id });
    }

    state.ui_mut().await.selected_student = Some(id);
    Ok(index::content(&state).await)
}

pub async fn post_deselect_student(State(state): State<LadderState>) -> Markup {
    state.ui_mut().await.selected_student = None;
    index::content(&state).await
}

pub async fn internal_get_profile(
    State(state): State<LadderState>,
    Query(IdForm { id }): Query<IdForm>,
) -> LadderResult<Markup> {
    let roster = state.roster().await;
    let Some(student) = roster.get(&id) else {
        return Err(LadderError::MissingStudent { id });
    };

    Ok(profile_body(student))
}
