//! List helpers: search match highlighting and the search box
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Splits `text` into `(segment, is_match)` pairs for every case-insensitive,
/// non-overlapping occurrence of `filter`.
///
/// Falls back to a single unmatched segment when lowercasing changes the byte
/// length of any character of `text` (offsets would no longer line up).
pub fn match_segments<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    if filter.is_empty() {
        return vec![(text, false)];
    }

    if text.chars().any(|c| lowercase_len(c) != c.len_utf8()) {
        return vec![(text, false)];
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    let mut segments = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();

        if start > last_pos {
            segments.push((&text[last_pos..start], false));
        }
        segments.push((&text[start..end], true));

        last_pos = end;
    }

    if last_pos < text.len() || segments.is_empty() {
        segments.push((&text[last_pos..], false));
    }

    segments
}

fn lowercase_len(c: char) -> usize {
    c.to_lowercase().map(char::len_utf8).sum()
}

/// Renders `text` with every occurrence of `filter` highlighted (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = match_segments(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            let segment = segment.to_string();
            if is_match {
                view! { <mark class="search-highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}

/// Search box with a leading search icon and a clear button.
/// Every keystroke is forwarded immediately.
#[component]
pub fn SearchInput(
    /// Current filter text
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter text
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_is_one_plain_segment() {
        assert_eq!(match_segments("customers", ""), vec![("customers", false)]);
    }

    #[test]
    fn test_case_insensitive_matches_keep_original_case() {
        assert_eq!(
            match_segments("Customer_customers", "CUSTOMER"),
            vec![("Customer", true), ("_", false), ("customer", true), ("s", false)]
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_segments("orders", "xyz"), vec![("orders", false)]);
    }

    #[test]
    fn test_whole_text_match() {
        assert_eq!(match_segments("Orders", "orders"), vec![("Orders", true)]);
    }

    #[test]
    fn test_non_overlapping() {
        assert_eq!(
            match_segments("aaaa", "aa"),
            vec![("aa", true), ("aa", true)]
        );
    }

    #[test]
    fn test_offsetting_length_changes_fall_back() {
        // Kelvin sign shrinks by two bytes, each 'İ' grows by one: the total is unchanged
        let text = "\u{212A}x_İİ";
        assert_eq!(text.len(), text.to_lowercase().len());
        assert_eq!(match_segments(text, "x"), vec![(text, false)]);
    }

    #[test]
    fn test_multibyte_text_with_stable_lowercase_is_highlighted() {
        assert_eq!(
            match_segments("Straße_orders", "ORDERS"),
            vec![("Straße_", false), ("orders", true)]
        );
    }

    #[test]
    fn test_length_changing_lowercase_falls_back() {
        // 'İ' lowercases to two chars, so byte offsets would drift
        assert_eq!(match_segments("İstanbul_sales", "sales"), vec![("İstanbul_sales", false)]);
    }
}
