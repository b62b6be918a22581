use crate::{
    config::RuntimeConfiguration,
    data::{roster::Roster, settings::SyncSettings},
    routes::sse::SseEvent,
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;
use tokio::sync::{
    RwLock, RwLockReadGuard, RwLockWriteGuard,
    broadcast::{Receiver, Sender, channel},
};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

///which screen the sidebar points at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Students,
    Settings,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Students, Self::Settings];

    ///anything unrecognised lands on the dashboard
    pub fn from_name(name: &str) -> Self {
        match name {
            "students" => Self::Students,
            "settings" => Self::Settings,
            _ => Self::Dashboard,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Students => "students",
            Self::Settings => "settings",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Students => "Students",
            Self::Settings => "Settings",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    ///the toggle names the mode you'd switch into, not the current one
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

///shell state - an open profile wins over whichever tab is lit, and clearing the
///selection falls back to the tab as it was
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
    pub selected_student: Option<String>,
    pub theme: Theme,
}

#[derive(Clone, Debug)]
pub struct LadderState {
    roster: Arc<RwLock<Roster>>,
    ui: Arc<RwLock<UiState>>,
    settings: Arc<RwLock<SyncSettings>>,
    sse_events_sender: Sender<SseEvent>,
}

impl LadderState {
    pub fn new(config: &RuntimeConfiguration) -> Self {
        let (tx, _rx) = channel(1);

        Self {
            roster: Arc::new(RwLock::new(Roster::seeded())),
            ui: Arc::new(RwLock::new(UiState::default())),
            settings: Arc::new(RwLock::new(config.initial_settings())),
            sse_events_sender: tx,
        }
    }

    pub async fn roster(&self) -> RwLockReadGuard<'_, Roster> {
        self.roster.read().await
    }

    pub async fn roster_mut(&self) -> RwLockWriteGuard<'_, Roster> {
        self.roster.write().await
    }

    pub async fn ui(&self) -> RwLockReadGuard<'_, UiState> {
        self.ui.read().await
    }

    pub async fn ui_mut(&self) -> RwLockWriteGuard<'_, UiState> {
        self.ui.write().await
    }

    pub async fn settings(&self) -> RwLockReadGuard<'_, SyncSettings> {
        self.settings.read().await
    }

    pub async fn settings_mut(&self) -> RwLockWriteGuard<'_, SyncSettings> {
        self.settings.write().await
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, theme: Theme, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html class=[matches!(theme, Theme::Dark).then_some("dark")] {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://unpkg.com/htmx-ext-sse@2.2.3" integrity="sha384-Y4gc0CK6Kg+hmulDc6rZPJu0tqvk7EWlih0Oh+2OkAi1ZDlCbBDCQEE2uVk472Ky" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    //tailwind only looks at prefers-color-scheme unless told otherwise
                    style type="text/tailwindcss" { "@custom-variant dark (&:where(.dark, .dark *));" }
                    title { "Progress Manager" }
                }
                body hx-ext="sse" sse-connect="/sse_feed" class="min-h-screen bg-gradient-to-br from-slate-50 via-blue-50 to-indigo-100 dark:from-slate-900 dark:via-slate-800 dark:to-indigo-900 text-slate-800 dark:text-slate-100" {
                    (markup)
                }
            }
        }
    }

    pub fn subscribe_to_sse_feed(&self) -> Receiver<SseEvent> {
        self.sse_events_sender.subscribe()
    }

    pub fn send_sse_event(&self, event: SseEvent) {
        let _ = self.sse_events_sender.send(event);
    }
}
