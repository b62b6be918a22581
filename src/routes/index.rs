use crate::{
    routes::{dashboard, profile, settings, students},
    state::{LadderState, Tab, Theme},
};
use axum::extract::{Form, State};
use maud::{Markup, html};
use serde::Deserialize;

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

#[derive(Deserialize)]
pub struct TabForm {
    pub tab: String,
}

pub async fn get_index(State(state): State<LadderState>) -> Markup {
    let theme = state.ui().await.theme;
    state.render(theme, shell(&state).await)
}

///a sidebar tab click closes any open profile on its way through
pub async fn post_set_tab(
    State(state): State<LadderState>,
    Form(TabForm { tab }): Form<TabForm>,
) -> Markup {
    {
        let mut ui = state.ui_mut().await;
        ui.active_tab = Tab::from_name(&tab);
        ui.selected_student = None;
    }

    shell(&state).await
}

///server state flips here, the button's own script flips the html class in the browser
pub async fn post_toggle_theme(State(state): State<LadderState>) -> Markup {
    {
        let mut ui = state.ui_mut().await;
        ui.theme = ui.theme.toggled();
    }

    shell(&state).await
}

///everything inside <body> - swapped wholesale when the tab or theme changes
pub async fn shell(state: &LadderState) -> Markup {
    let (active_tab, theme) = {
        let ui = state.ui().await;
        (ui.active_tab, ui.theme)
    };

    html! {
        div id="shell" class="flex h-screen" {
            (sidebar(active_tab, theme))
            main class="flex-1 overflow-hidden" {
                (content(state).await)
            }
        }
    }
}

///the scrollable pane to the right of the sidebar - an open profile wins over
///whichever tab is lit, and a selection pointing at a removed student falls back
pub async fn content(state: &LadderState) -> Markup {
    let (active_tab, selected) = {
        let ui = state.ui().await;
        (ui.active_tab, ui.selected_student.clone())
    };

    let open_profile = match selected {
        Some(id) => state.roster().await.get(&id).map(profile::profile_screen),
        None => None,
    };

    let inner = match open_profile {
        Some(markup) => markup,
        None => match active_tab {
            Tab::Dashboard => dashboard::dashboard_screen(),
            Tab::Students => students::students_screen(&*state.roster().await),
            Tab::Settings => {
                let settings = *state.settings().await;
                settings::settings_screen(&settings, &*state.roster().await)
            }
        },
    };

    html! {
        div id="content" class="h-full overflow-y-auto p-6" {
            (inner)
        }
    }
}

fn sidebar(active_tab: Tab, theme: Theme) -> Markup {
    html! {
        aside class="w-64 bg-white/80 dark:bg-slate-800/80 backdrop-blur-md border-r border-slate-200 dark:border-slate-700 flex flex-col" {
            div class="p-6" {
                h1 class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent" {
                    "Progress Manager"
                }
                p class="text-sm text-slate-500 dark:text-slate-400 mt-1" {"Competitive Programming"}
            }
            nav class="flex-1 px-4 space-y-2" {
                @for tab in Tab::ALL {
                    @let classes = if tab == active_tab {
                        "w-full text-left px-4 py-3 rounded-lg font-medium transition-all bg-gradient-to-r from-blue-500 to-purple-500 text-white shadow-lg"
                    } else {
                        "w-full text-left px-4 py-3 rounded-lg font-medium transition-all text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-700"
                    };
                    button hx-post="/tab" hx-vals={"{\"tab\": \"" (tab.name()) "\"}"} hx-target="#shell" hx-swap="outerHTML" class=(classes) {
                        (tab.label())
                    }
                }
            }
            div class="p-4 border-t border-slate-200 dark:border-slate-700" {
                button hx-post="/theme" hx-target="#shell" hx-swap="outerHTML" onclick="document.documentElement.classList.toggle('dark')" class="w-full text-left px-4 py-3 rounded-lg font-medium text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-700 transition-all" {
                    (theme.toggle_label())
                }
            }
        }
    }
}
