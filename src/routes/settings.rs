use crate::{
    data::{
        roster::Roster,
        settings::{MAX_INACTIVITY_DAYS, MIN_INACTIVITY_DAYS, SyncFrequency, SyncSettings},
        student::LAST_UPDATED_FORMAT,
    },
    error::LadderResult,
    maud_conveniences::{card, form_element, form_submit_button, subsubtitle, subtitle, supertitle},
    state::LadderState,
};
use axum::extract::{Form, State};
use maud::{Markup, html};
use serde::Deserialize;

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

const SETTINGS_INPUT_CLASSES: &str = "w-full px-3 py-2 rounded-lg border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-700 text-slate-800 dark:text-slate-100 focus:outline-none focus:ring-2 focus:ring-blue-500";

#[derive(Deserialize)]
pub struct ScheduleForm {
    pub sync_time: String,
    pub frequency: String,
}

///the checkbox only turns up in the body when it's ticked
#[derive(Deserialize)]
pub struct PreferencesForm {
    pub reminders_enabled: Option<String>,
    pub inactivity_days: String,
}

pub fn settings_screen(settings: &SyncSettings, roster: &Roster) -> Markup {
    html! {
        div class="space-y-6 max-w-4xl" {
            div {
                (supertitle("Settings"))
                (subtitle("Configure system preferences and automation settings"))
            }
            (schedule_card(settings))
            (preferences_card(settings))
            (data_card(roster))
        }
    }
}

///each card is its own form and swaps only itself on save
fn schedule_card(settings: &SyncSettings) -> Markup {
    html! {
        div id="schedule_card" {
            (card(html! {
                (subsubtitle("Data Sync Schedule"))
                form hx-post="/settings/schedule" hx-target="#schedule_card" class="space-y-4" {
                    (form_element("sync_time", "Sync Time", html! {
                        input type="time" id="sync_time" name="sync_time" value=(settings.sync_time_display()) class=(SETTINGS_INPUT_CLASSES);
                        p class="text-sm text-slate-500 dark:text-slate-400" {"Daily time when Codeforces data should be synced"}
                    }))
                    (form_element("frequency", "Sync Frequency", html! {
                        select id="frequency" name="frequency" class=(SETTINGS_INPUT_CLASSES) {
                            @for frequency in SyncFrequency::ALL {
                                option value=(frequency.value()) selected[frequency == settings.frequency] {(frequency.label())}
                            }
                        }
                    }))
                    (form_submit_button(Some("Save Schedule")))
                }
            }))
        }
    }
}

fn preferences_card(settings: &SyncSettings) -> Markup {
    html! {
        div id="preferences_card" {
            (card(html! {
                (subsubtitle("Email Notifications"))
                form hx-post="/settings/preferences" hx-target="#preferences_card" class="space-y-4" {
                    div class="flex items-center justify-between" {
                        div {
                            p class="text-sm font-medium text-slate-700 dark:text-slate-300" {"Enable Email Reminders"}
                            p class="text-sm text-slate-500 dark:text-slate-400" {"Send automatic reminders to inactive students"}
                        }
                        input type="checkbox" name="reminders_enabled" checked[settings.reminders_enabled] class="w-5 h-5 accent-blue-500";
                    }
                    (form_element("inactivity_days", "Inactivity Threshold (days)", html! {
                        input type="number" id="inactivity_days" name="inactivity_days" value=(settings.inactivity_days) min=(MIN_INACTIVITY_DAYS) max=(MAX_INACTIVITY_DAYS) class=(SETTINGS_INPUT_CLASSES);
                        p class="text-sm text-slate-500 dark:text-slate-400" {"Send reminder after this many days of inactivity"}
                    }))
                    (form_submit_button(Some("Save Preferences")))
                }
            }))
        }
    }
}

///status numbers here are real, so the card refetches itself on roster changes
fn data_card(roster: &Roster) -> Markup {
    html! {
        div id="data_card" hx-get="/internal/settings/data_status" hx-trigger="sse:roster" {
            (data_card_body(roster))
        }
    }
}

fn data_card_body(roster: &Roster) -> Markup {
    let last_sync = roster
        .students()
        .iter()
        .map(|student| student.last_updated)
        .max()
        .map_or_else(
            || "Never".to_string(),
            |newest| newest.strftime(LAST_UPDATED_FORMAT).to_string(),
        );

    card(html! {
        (subsubtitle("Data Management"))
        div class="space-y-3 text-sm" {
            div class="flex items-center justify-between" {
                span class="text-slate-500 dark:text-slate-400" {"Database Status"}
                span class="flex items-center gap-2 font-medium" {
                    span class="w-2 h-2 rounded-full bg-green-500" {}
                    "Connected"
                }
            }
            div class="flex items-center justify-between" {
                span class="text-slate-500 dark:text-slate-400" {"Last Sync"}
                span class="font-medium" {(last_sync)}
            }
            div class="flex items-center justify-between" {
                span class="text-slate-500 dark:text-slate-400" {"Total Records"}
                span class="font-medium" {(roster.len()) " entries"}
            }
        }
    })
}

pub async fn post_save_schedule(
    State(state): State<LadderState>,
    Form(ScheduleForm {
        sync_time,
        frequency,
    }): Form<ScheduleForm>,
) -> LadderResult<Markup> {
    let sync_time = SyncSettings::parse_sync_time(&sync_time)?;
    let frequency = frequency.parse::<SyncFrequency>()?;

    let updated = {
        let mut settings = state.settings_mut().await;
        settings.sync_time = sync_time;
        settings.frequency = frequency;
        *settings
    };

    Ok(schedule_card(&updated))
}

pub async fn post_save_preferences(
    State(state): State<LadderState>,
    Form(PreferencesForm {
        reminders_enabled,
        inactivity_days,
    }): Form<PreferencesForm>,
) -> LadderResult<Markup> {
    let inactivity_days = SyncSettings::parse_inactivity_days(&inactivity_days)?;

    let updated = {
        let mut settings = state.settings_mut().await;
        settings.reminders_enabled = reminders_enabled.is_some();
        settings.inactivity_days = inactivity_days;
        *settings
    };

    Ok(preferences_card(&updated))
}

pub async fn internal_get_data_status(State(state): State<LadderState>) -> Markup {
    data_card_body(&*state.roster().await)
}
