use anyhow::Result;
use formatx::formatx;

use super::list::{MovieList, ORDER_FIELD};
use super::templates;

pub const PAGE_TITLE: &str = "Sortable movies";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The list rows only; what `POST /sort/` returns for htmx to swap in.
pub fn render_fragment(list: &MovieList) -> Result<String> {
    list.items()
        .iter()
        .enumerate()
        .try_fold(String::new(), |acc, (index, title)| -> Result<String> {
            Ok(acc + &formatx!(templates::MOVIE_ITEM, ORDER_FIELD, index, escape_html(title))?)
        })
}

pub fn render_page(list: &MovieList) -> Result<String> {
    let fragment = render_fragment(list)?;
    Ok(formatx!(templates::INDEX_PAGE, PAGE_TITLE, PAGE_TITLE, fragment)?)
}
