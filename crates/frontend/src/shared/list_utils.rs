//! Search and sort helpers shared by the record lists
use leptos::prelude::*;
use std::cmp::Ordering;

/// Default minimum query length before a search filters anything
pub const DEFAULT_SEARCH_MIN_CHARS: usize = 3;

/// Items that can be matched against a search query
pub trait Searchable {
    /// `filter` is already lowercased and trimmed
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Items that can be ordered by a named field
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// True when the query is long enough to be applied
pub fn is_filter_active(filter: &str, min_chars: usize) -> bool {
    filter.trim().chars().count() >= min_chars.max(1)
}

/// Keep the items matching the query; short queries keep everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str, min_chars: usize) -> Vec<T> {
    if !is_filter_active(filter, min_chars) {
        return items;
    }
    let needle = filter.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Stable sort by one field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current: Option<(&str, bool)>, field: &str) -> &'static str {
    match current {
        Some((current_field, ascending)) if current_field == field => {
            if ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// Next sort state after a click on `field`: ascending, then descending,
/// then unsorted (stored order).
pub fn next_sort(
    current: Option<(&'static str, bool)>,
    field: &'static str,
) -> Option<(&'static str, bool)> {
    match current {
        Some((f, true)) if f == field => Some((field, false)),
        Some((f, false)) if f == field => None,
        _ => Some((field, true)),
    }
}

/// Highlight every occurrence of the query in `text` (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str, min_chars: usize) -> AnyView {
    if !is_filter_active(filter, min_chars) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();

    // Byte offsets only line up when lowercasing keeps lengths
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="search-match">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] min_chars: Option<usize>,
) -> impl IntoView {
    let min_chars = min_chars.unwrap_or(DEFAULT_SEARCH_MIN_CHARS);
    let placeholder = format!("Rechercher (min. {} caractères)...", min_chars);

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if is_filter_active(&value.get(), min_chars) {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Effacer"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str, i32);

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(filter)
        }
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.1.cmp(&other.1),
                _ => self.0.cmp(other.0),
            }
        }
    }

    #[test]
    fn test_short_query_keeps_everything() {
        let items = vec![Item("Alpha", 1), Item("Beta", 2)];
        assert_eq!(filter_list(items.clone(), "al", 3), items);
        assert_eq!(filter_list(items.clone(), "   ", 3), items);
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let items = vec![Item("Alpha", 1), Item("Beta", 2), Item("Alphabet", 3)];
        let found = filter_list(items, "  ALPH ", 3);
        assert_eq!(found, vec![Item("Alpha", 1), Item("Alphabet", 3)]);
    }

    #[test]
    fn test_sort_both_directions() {
        let mut items = vec![Item("b", 2), Item("a", 3), Item("c", 1)];
        sort_list(&mut items, "n", true);
        assert_eq!(items[0], Item("c", 1));
        sort_list(&mut items, "name", false);
        assert_eq!(items[0], Item("c", 1));
        assert_eq!(items[2], Item("a", 3));
    }

    #[test]
    fn test_sort_cycle() {
        let s = next_sort(None, "name");
        assert_eq!(s, Some(("name", true)));
        let s = next_sort(s, "name");
        assert_eq!(s, Some(("name", false)));
        assert_eq!(next_sort(s, "name"), None);
        assert_eq!(next_sort(s, "email"), Some(("email", true)));
        assert_eq!(get_sort_indicator(Some(("name", false)), "name"), " ▼");
        assert_eq!(get_sort_indicator(Some(("name", false)), "email"), " ⇅");
    }
}
