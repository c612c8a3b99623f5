use crate::{api::LeaveStatus, utils::table::page_count};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text",
        }
    }
}

pub fn button_class(variant: ButtonVariant) -> String {
    format!(
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {}",
        variant.classes()
    )
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 rounded-full text-xs font-semibold {}", status.badge_class())>
            {status.as_str()}
        </span>
    }
}

#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="w-full sm:w-72 border border-border rounded-md px-3 py-2 text-sm bg-surface-elevated text-fg"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

pub const STATUS_TABS: [Option<LeaveStatus>; 4] = [
    None,
    Some(LeaveStatus::Pending),
    Some(LeaveStatus::Approved),
    Some(LeaveStatus::NotApproved),
];

pub fn status_tab_label(tab: Option<LeaveStatus>) -> &'static str {
    tab.map(LeaveStatus::as_str).unwrap_or("All")
}

/// All / Pending / Approved / Not Approved filter row.
#[component]
pub fn StatusTabs(
    #[prop(into)] selected: Signal<Option<LeaveStatus>>,
    on_select: Callback<Option<LeaveStatus>>,
) -> impl IntoView {
    view! {
        <div class="flex gap-1 border-b border-border" role="tablist">
            {STATUS_TABS
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || (selected.get() == tab).to_string()
                            class=move || {
                                if selected.get() == tab {
                                    "px-4 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-action-primary-bg"
                                } else {
                                    "px-4 py-2 text-sm text-fg-muted hover:text-fg"
                                }
                            }
                            on:click=move |_| on_select.call(tab)
                        >
                            {status_tab_label(tab)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn page_summary(page: usize, total: usize, per_page: usize) -> String {
    if total == 0 {
        return "No records".to_string();
    }
    let first = page * per_page + 1;
    let last = ((page + 1) * per_page).min(total);
    format!("Showing {}-{} of {}", first, last, total)
}

/// Previous/next controls over zero-based pages.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    per_page: usize,
    on_change: Callback<usize>,
) -> impl IntoView {
    let pages = move || page_count(total.get(), per_page);
    let at_first = move || page.get() == 0;
    let at_last = move || page.get() + 1 >= pages();
    view! {
        <div class="flex items-center justify-between mt-4 text-sm text-fg-muted">
            <span>{move || page_summary(page.get(), total.get(), per_page)}</span>
            <div class="flex gap-2">
                <button
                    type="button"
                    class="px-3 py-1 rounded border border-border disabled:opacity-50"
                    disabled=at_first
                    on:click=move |_| on_change.call(page.get_untracked().saturating_sub(1))
                >
                    "Previous"
                </button>
                <span class="px-2 py-1">
                    {move || format!("Page {} of {}", page.get() + 1, pages().max(1))}
                </span>
                <button
                    type="button"
                    class="px-3 py-1 rounded border border-border disabled:opacity-50"
                    disabled=at_last
                    on:click=move |_| on_change.call(page.get_untracked() + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

/// Rows-per-page picker placed beside [`Pagination`].
#[component]
pub fn RowsPerPage(
    #[prop(into)] value: Signal<usize>,
    options: &'static [usize],
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <label class="inline-flex items-center gap-2 text-sm text-fg-muted">
            "Rows per page"
            <select
                class="border border-border rounded-md px-2 py-1"
                on:change=move |ev| {
                    if let Ok(rows) = event_target_value(&ev).parse::<usize>() {
                        on_change.call(rows);
                    }
                }
            >
                {options
                    .iter()
                    .map(|&rows| view! {
                        <option value=rows.to_string() selected=move || value.get() == rows>
                            {rows}
                        </option>
                    })
                    .collect_view()}
            </select>
        </label>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn status_badge_uses_status_label_and_color() {
        let html = render_to_string(|| view! { <StatusBadge status=LeaveStatus::NotApproved /> });
        assert!(html.contains("Not Approved"));
        assert!(html.contains("bg-status-error-bg"));
    }

    #[test]
    fn status_tabs_mark_the_selected_tab() {
        let html = render_to_string(|| {
            view! {
                <StatusTabs
                    selected=Signal::derive(|| Some(LeaveStatus::Approved))
                    on_select=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("aria-selected=\"true\""));
        assert!(html.contains("Pending"));
        assert!(html.contains("All"));
    }

    #[test]
    fn pagination_renders_page_position() {
        let html = render_to_string(|| {
            view! {
                <Pagination
                    page=Signal::derive(|| 1)
                    total=Signal::derive(|| 12)
                    per_page=5
                    on_change=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Page 2 of 3"));
        assert!(html.contains("Showing 6-10 of 12"));
    }

    #[test]
    fn rows_per_page_marks_current_choice() {
        let html = render_to_string(|| {
            view! {
                <RowsPerPage
                    value=Signal::derive(|| 25)
                    options=&[10, 25, 50, 100]
                    on_change=Callback::new(|_| {})
                />
            }
        });
        assert_eq!(html.matches("<option").count(), 4);
        assert_eq!(html.matches("selected").count(), 1);
        assert!(html.contains("Rows per page"));
    }
}
