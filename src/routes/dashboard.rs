use crate::{
    charts::{self, DASHBOARD_STATS},
    maud_conveniences::{stat_card, subtitle, supertitle},
};
use jiff::Zoned;
use maud::{Markup, html};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

///the overview tab - the cards and charts are illustrative, only the timestamp is real
pub fn dashboard_screen() -> Markup {
    let now = Zoned::now().strftime("%Y-%m-%d %H:%M:%S").to_string();

    html! {
        div class="space-y-6" {
            div {
                (supertitle("Dashboard"))
                (subtitle("Overview of student progress and system metrics"))
                p class="text-sm text-slate-500 dark:text-slate-400 mt-1" {"Last updated: " (now)}
            }
            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6" {
                @for stat in &DASHBOARD_STATS {
                    (stat_card(stat.title, html! {(stat.value)}, Some(html! {(stat.change) " from last month"})))
                }
            }
            div class="grid grid-cols-1 lg:grid-cols-2 gap-6" {
                (charts::student_growth_chart())
                (charts::activity_trend_chart())
            }
        }
    }
}
