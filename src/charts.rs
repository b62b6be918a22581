//! Illustrative chart data and the markup that draws it.
//!
//! Everything in here is fixed demo content - none of it is derived from the
//! roster. Live numbers come from [`crate::data::roster::Roster::stats`] and
//! are rendered by the routes directly.

use crate::maud_conveniences::{card, subsubtitle};
use maud::{Markup, html};
use rand::{Rng, rng};

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

pub struct MonthStat {
    pub month: &'static str,
    pub students: u32,
    pub active: u32,
}

pub const MONTHLY_TOTALS: [MonthStat; 6] = [
    MonthStat {
        month: "Jan",
        students: 45,
        active: 38,
    },
    MonthStat {
        month: "Feb",
        students: 52,
        active: 44,
    },
    MonthStat {
        month: "Mar",
        students: 48,
        active: 41,
    },
    MonthStat {
        month: "Apr",
        students: 61,
        active: 55,
    },
    MonthStat {
        month: "May",
        students: 58,
        active: 52,
    },
    MonthStat {
        month: "Jun",
        students: 65,
        active: 59,
    },
];

pub struct DashboardStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const DASHBOARD_STATS: [DashboardStat; 4] = [
    DashboardStat {
        title: "Total Students",
        value: "234",
        change: "+12%",
    },
    DashboardStat {
        title: "Active This Week",
        value: "187",
        change: "+8%",
    },
    DashboardStat {
        title: "Inactive (7+ days)",
        value: "23",
        change: "-5%",
    },
    DashboardStat {
        title: "Emails Sent",
        value: "156",
        change: "+15%",
    },
];

pub struct ContestRow {
    pub date: &'static str,
    pub rating: u32,
    pub change: i32,
}

pub const CONTEST_HISTORY: [ContestRow; 5] = [
    ContestRow {
        date: "2024-06-01",
        rating: 1500,
        change: 45,
    },
    ContestRow {
        date: "2024-06-03",
        rating: 1520,
        change: 20,
    },
    ContestRow {
        date: "2024-06-08",
        rating: 1547,
        change: 27,
    },
    ContestRow {
        date: "2024-06-12",
        rating: 1532,
        change: -15,
    },
    ContestRow {
        date: "2024-06-15",
        rating: 1547,
        change: 15,
    },
];

pub struct ProblemBucket {
    pub rating: &'static str,
    pub count: u32,
}

pub const PROBLEM_BUCKETS: [ProblemBucket; 5] = [
    ProblemBucket {
        rating: "800-999",
        count: 45,
    },
    ProblemBucket {
        rating: "1000-1199",
        count: 38,
    },
    ProblemBucket {
        rating: "1200-1399",
        count: 25,
    },
    ProblemBucket {
        rating: "1400-1599",
        count: 12,
    },
    ProblemBucket {
        rating: "1600+",
        count: 6,
    },
];

pub const PROBLEMS_SOLVED: &str = "126";
pub const AVG_PER_DAY: &str = "2.3";

pub const HEATMAP_CELLS: usize = 49;

///one fake submission count per cell of the 7x7 grid, rolled fresh on every render
pub fn heatmap_counts() -> Vec<u8> {
    let mut rng = rng();
    (0..HEATMAP_CELLS).map(|_| rng.random_range(0..8)).collect()
}

pub const fn heatmap_classes(count: u8) -> &'static str {
    match count {
        0 => "bg-slate-100 dark:bg-slate-800",
        1..=2 => "bg-green-200 dark:bg-green-900",
        3..=4 => "bg-green-400 dark:bg-green-700",
        5..=6 => "bg-green-600 dark:bg-green-500",
        _ => "bg-green-800 dark:bg-green-400",
    }
}

fn period_select(name: &str, options: [&str; 3], selected: &str) -> Markup {
    html! {
        select name=(name) class="w-32 px-3 py-2 rounded-lg border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-700 text-sm text-slate-800 dark:text-slate-100" {
            @for option in options {
                option value=(option) selected[option == selected] {(option) " days"}
            }
        }
    }
}

pub fn student_growth_chart() -> Markup {
    card(html! {
        (subsubtitle("Student Growth"))
        div class="flex items-end justify-between gap-2 h-56" {
            @for month in &MONTHLY_TOTALS {
                div class="flex-1 flex flex-col items-center gap-1" {
                    div class="flex items-end justify-center gap-1 h-48" {
                        div class="w-3 bg-blue-500 rounded-t" style={"height:" (month.students * 3) "px"} title={(month.students) " students"} {}
                        div class="w-3 bg-emerald-500 rounded-t" style={"height:" (month.active * 3) "px"} title={(month.active) " active"} {}
                    }
                    span class="text-xs text-slate-500 dark:text-slate-400" {(month.month)}
                }
            }
        }
        div class="flex justify-center gap-6 mt-4 text-sm text-slate-600 dark:text-slate-400" {
            span class="flex items-center gap-2" { div class="w-3 h-3 rounded-sm bg-blue-500" {} "Students" }
            span class="flex items-center gap-2" { div class="w-3 h-3 rounded-sm bg-emerald-500" {} "Active" }
        }
    })
}

pub fn activity_trend_chart() -> Markup {
    let points = MONTHLY_TOTALS
        .iter()
        .enumerate()
        .map(|(i, month)| format!("{},{}", i * 50 + 25, 150 - month.active * 2))
        .collect::<Vec<_>>()
        .join(" ");

    card(html! {
        (subsubtitle("Activity Trend"))
        svg viewBox="0 0 300 160" class="w-full h-56" {
            polyline points=(points) fill="none" stroke="#8b5cf6" stroke-width="3" {}
            @for (i, month) in MONTHLY_TOTALS.iter().enumerate() {
                circle cx=((i * 50 + 25)) cy=((150 - month.active * 2)) r="4" fill="#8b5cf6" {
                    title {(month.active) " active in " (month.month)}
                }
            }
        }
        div class="flex justify-between text-xs text-slate-500 dark:text-slate-400 mt-2" {
            @for month in &MONTHLY_TOTALS {
                span {(month.month)}
            }
        }
    })
}

pub fn contest_history_chart() -> Markup {
    //ratings sit around 1500, so drop a 1490 baseline to spread them out
    let points = CONTEST_HISTORY
        .iter()
        .enumerate()
        .map(|(i, row)| format!("{},{}", i * 60 + 30, 150 - (row.rating - 1490) * 2))
        .collect::<Vec<_>>()
        .join(" ");

    card(html! {
        div class="flex items-center justify-between mb-4" {
            h3 class="text-lg font-semibold text-slate-800 dark:text-slate-100" {"Contest History"}
            (period_select("contest_period", ["30", "90", "365"], "90"))
        }
        svg viewBox="0 0 300 160" class="w-full h-56" {
            polyline points=(points) fill="none" stroke="#3b82f6" stroke-width="3" {}
            @for (i, row) in CONTEST_HISTORY.iter().enumerate() {
                circle cx=((i * 60 + 30)) cy=((150 - (row.rating - 1490) * 2)) r="4" fill="#3b82f6" {
                    title {
                        (row.rating)
                        " ("
                        @if row.change >= 0 { "+" }
                        (row.change)
                        ")"
                    }
                }
            }
        }
        div class="flex justify-between text-xs text-slate-500 dark:text-slate-400 mt-2" {
            @for row in &CONTEST_HISTORY {
                span {(&row.date[5..])}
            }
        }
    })
}

pub fn problems_by_rating_chart() -> Markup {
    card(html! {
        div class="flex items-center justify-between mb-4" {
            h3 class="text-lg font-semibold text-slate-800 dark:text-slate-100" {"Problems by Rating"}
            (period_select("problems_period", ["7", "30", "90"], "30"))
        }
        div class="flex items-end justify-between gap-3 h-56" {
            @for bucket in &PROBLEM_BUCKETS {
                div class="flex-1 flex flex-col items-center gap-1" {
                    span class="text-xs font-medium text-slate-600 dark:text-slate-300" {(bucket.count)}
                    div class="w-full max-w-12 bg-green-500 rounded-t" style={"height:" (bucket.count * 4) "px"} {}
                    span class="text-xs text-slate-500 dark:text-slate-400" {(bucket.rating)}
                }
            }
        }
    })
}

pub fn submission_heatmap() -> Markup {
    card(html! {
        (subsubtitle("Submission Heatmap"))
        div class="grid grid-cols-7 gap-1 max-w-md" {
            @for count in heatmap_counts() {
                div class={"w-4 h-4 rounded-sm " (heatmap_classes(count))} title={(count) " submissions"} {}
            }
        }
        div class="flex items-center gap-2 mt-4 text-sm text-slate-600 dark:text-slate-400" {
            span {"Less"}
            div class="flex gap-1" {
                @for step in [0_u8, 2, 4, 6, 8] {
                    div class={"w-3 h-3 rounded-sm " (heatmap_classes(step))} {}
                }
            }
            span {"More"}
        }
    })
}
