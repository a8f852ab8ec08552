use std::sync::OnceLock;

use regex::Regex;
use scraper::ElementRef;

/// Trims and collapses every run of whitespace (including newlines and
/// `&nbsp;`) into one space.
pub fn clean_text(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s.trim(), " ").into_owned()
}

/// All text nodes below `element`, cleaned.
pub fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_selector;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Tomato \n\t Street\u{a0}Grill "), "Tomato Street Grill");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("Lunch"), "Lunch");
    }

    #[test]
    fn test_element_text() {
        let html = scraper::Html::parse_fragment("<h5> Pasta <em>Bar</em>\n</h5>");
        static_selector!(H5 <- "h5");
        let h5 = html.select(&H5).next().unwrap();
        assert_eq!(element_text(h5), "Pasta Bar");
    }
}
