use scraper::Html;

use super::clean_text::{clean_text, element_text};
use crate::static_selector;

/// Words the site appends to a dining commons name, stripped last to first.
const SUFFIXES: [&str; 2] = ["Menu", "DC"];

/// The location's display name, from the page `<title>`.
pub fn location_name(document: &Html) -> Option<String> {
    static_selector!(TITLE_SELECTOR <- "title");
    let title = document.select(&TITLE_SELECTOR).next()?;
    let name = name_from_title(&element_text(title));
    (!name.is_empty()).then_some(name)
}

/// `Segundo DC Menu | UC Davis Dining` -> `Segundo`
pub fn name_from_title(title: &str) -> String {
    let before_bar = title.split('|').next().unwrap_or_default();
    let mut name = clean_text(before_bar);
    for suffix in SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            name = stripped.trim().to_owned();
        }
    }
    name
}
