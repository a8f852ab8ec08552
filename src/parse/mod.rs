//! Turns a dining commons menu page into a [`Menu`].
//!
//! Parsing is tolerant: anything that is missing just leaves an empty list
//! behind, and a day whose date heading can't be read is logged and skipped.
mod clean_text;
mod daily_menu;
mod error;
mod static_selector;
mod title;

use scraper::Html;

use crate::{menu::Menu, static_selector};

/// Parses a whole menu page.
pub fn parse_menu(html: &str) -> Menu {
    let document = Html::parse_document(html);
    from_document(&document)
}

/// Collects the page title and every day container that has a readable date.
pub fn from_document(document: &Html) -> Menu {
    static_selector!(CONTAINER_SELECTOR <- ".menu_maincontainer");
    let mut menu = Menu {
        name: title::location_name(document),
        ..Menu::default()
    };
    for container in document.select(&CONTAINER_SELECTOR) {
        match daily_menu::from_html_element(container) {
            Ok((date, day)) => {
                menu.daily.insert(date, day);
            }
            Err(e) => log::warn!("Skipping day: {e}"),
        }
    }
    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;
    use std::fs;

    fn segundo() -> Menu {
        let html = fs::read_to_string("./src/parse/html_examples/segundo.html").unwrap();
        parse_menu(&html)
    }

    #[test]
    fn test_name() {
        assert_eq!(segundo().name.as_deref(), Some("Segundo"));
    }

    #[test]
    fn test_days() {
        let menu = segundo();
        // the third container has a broken date and is skipped
        assert_eq!(
            menu.daily.keys().copied().collect::<Vec<_>>(),
            vec![
                Date::from_ymd(2024, 4, 5).unwrap(),
                Date::from_ymd(2024, 4, 6).unwrap()
            ]
        );
    }

    #[test]
    fn test_document_order() {
        let menu = segundo();
        let friday = menu.day(&Date::from_ymd(2024, 4, 5).unwrap()).unwrap();
        let sections: Vec<_> = friday.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(sections, ["Breakfast", "Lunch", "Dinner"]);

        let lunch = &friday.sections[1];
        let stations: Vec<_> = lunch.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(stations, ["Tomato Street Grill", "Smoke Stack"]);
        let grill: Vec<_> = lunch.stations[0].menu.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(grill, ["Cheeseburger", "Garden Burger", "Seasoned Fries"]);

        // dinner has a station with no items
        assert!(friday.sections[2].stations[1].menu.is_empty());
    }

    #[test]
    fn test_weekend() {
        let menu = segundo();
        let saturday = menu.day(&Date::from_ymd(2024, 4, 6).unwrap()).unwrap();
        assert_eq!(saturday.sections.len(), 1);
        assert_eq!(saturday.sections[0].name, "Brunch");
        assert_eq!(saturday.item_count(), 2);
    }

    #[test]
    fn test_unrelated_page() {
        let menu = parse_menu("<html><head><title>Not Found</title></head><body></body></html>");
        assert_eq!(menu.name.as_deref(), Some("Not Found"));
        assert!(menu.daily.is_empty());
    }
}
