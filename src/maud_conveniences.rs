use maud::{Markup, Render, html};

const INPUT_CLASSES: &str = "w-full px-3 py-2 rounded-lg border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-700 text-slate-800 dark:text-slate-100 placeholder-slate-400 focus:outline-none focus:ring-2 focus:ring-blue-500";

pub fn supertitle(s: impl Render) -> Markup {
    html! {
        h1 class="text-3xl font-bold text-slate-800 dark:text-slate-100" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        p class="text-slate-600 dark:text-slate-400 mt-1" {(s)}
    }
}

pub fn subsubtitle(s: impl Render) -> Markup {
    html! {
        h3 class="text-lg font-semibold text-slate-800 dark:text-slate-100 mb-4" {(s)}
    }
}

///the frosted glass panel everything sits in
pub fn card(inner: Markup) -> Markup {
    html! {
        div class="bg-white/80 dark:bg-slate-800/80 backdrop-blur-md rounded-xl p-6 shadow-lg border border-slate-200 dark:border-slate-700" {
            (inner)
        }
    }
}

pub fn stat_card(label: &'static str, value: Markup, note: Option<Markup>) -> Markup {
    card(html! {
        p class="text-sm font-medium text-slate-600 dark:text-slate-400" {(label)}
        p class="text-2xl font-bold text-slate-800 dark:text-slate-100 mt-1" {(value)}
        @if let Some(note) = note {
            p class="text-sm text-green-600 dark:text-green-400 mt-1" {(note)}
        }
    })
}

pub fn table<const N: usize>(titles: [&'static str; N], rows: Vec<[Markup; N]>) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="w-full" {
                thead class="bg-slate-50 dark:bg-slate-700/50" {
                    tr {
                        @for title in titles {
                            th class="px-6 py-4 text-left text-sm font-semibold text-slate-600 dark:text-slate-300" {(title)}
                        }
                    }
                }
                tbody class="divide-y divide-slate-200 dark:divide-slate-700" {
                    @for row in rows {
                        tr class="hover:bg-slate-50 dark:hover:bg-slate-700/50 transition-colors" {
                            @for col in row {
                                td class="px-6 py-4" {(col)}
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn form_element(id: &str, label: &str, inner: Markup) -> Markup {
    html! {
        div class="space-y-2" {
            label for=(id) class="block text-sm font-medium text-slate-700 dark:text-slate-300" {(label)}
            (inner)
        }
    }
}

///text input with its complaint rendered underneath - typing into the box removes
///just that complaint, matching the one-error-per-field dialog behaviour
pub fn simple_form_element(
    id: &str,
    label: &str,
    input_type: Option<&str>,
    placeholder: Option<&str>,
    value: &str,
    error: Option<&str>,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            input
                type=(input_type.unwrap_or("text"))
                id=(id)
                name=(id)
                value=(value)
                placeholder=[placeholder]
                min=[(input_type == Some("number")).then_some("0")]
                oninput={"document.getElementById('" (id) "_error')?.remove()"}
                class=(INPUT_CLASSES);
            @if let Some(error) = error {
                p id={(id) "_error"} class="text-sm text-red-500" {(error)}
            }
        },
    )
}

pub fn form_submit_button(text: Option<&str>) -> Markup {
    html! {
        button type="submit" class="px-4 py-2 rounded-lg bg-gradient-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 text-white font-medium transition-all" {
            (text.unwrap_or("Submit"))
        }
    }
}
