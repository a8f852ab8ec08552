use scraper::ElementRef;

use super::clean_text::element_text;
use super::error::{Error, Result};
use crate::{
    date::Date,
    menu::{DailyMenu, MenuItem, MenuSection, StationMenu},
    static_selector,
};

static_selector!(DATE_SELECTOR <- "h3");
static_selector!(SECTION_SELECTOR <- "h4");
static_selector!(STATION_SELECTOR <- "h5");
static_selector!(ITEM_SELECTOR <- ".nutrition");
static_selector!(ITEM_NAME_SELECTOR <- "span:not(.collapsible-heading-status)");

/// Parses one `.menu_maincontainer` block into the day it describes.
///
/// Everything below the date heading is optional; missing elements give empty
/// lists. Only an unreadable date fails.
pub fn from_html_element(container: ElementRef<'_>) -> Result<(Date, DailyMenu)> {
    let text: String = container
        .select(&DATE_SELECTOR)
        .map(element_text)
        .collect::<Vec<_>>()
        .join(" ");
    log::debug!("Found date {text:?}");
    let date = Date::from_heading(&text).map_err(|source| Error::Date { text, source })?;

    let sections = container
        .select(&SECTION_SELECTOR)
        .map(section_from_heading)
        .collect();
    Ok((date, DailyMenu { sections }))
}

/// ex. `<h4>Breakfast</h4>`; the stations are the `h5`s sharing its parent.
fn section_from_heading(heading: ElementRef<'_>) -> MenuSection {
    let name = element_text(heading);
    let stations = parent(heading)
        .map(|parent| {
            parent
                .select(&STATION_SELECTOR)
                .map(|station| station_from_heading(station, &name))
                .collect()
        })
        .unwrap_or_default();
    MenuSection { name, stations }
}

/// The station's items are in the element right after its heading.
fn station_from_heading(heading: ElementRef<'_>, section: &str) -> StationMenu {
    let name = element_text(heading);
    log::debug!("Station found {name:?}");
    let menu = heading
        .next_siblings()
        .find_map(ElementRef::wrap)
        .map(|list| {
            list.select(&ITEM_SELECTOR)
                .map(|nutrition| {
                    let item = item_name(nutrition);
                    log::trace!("Found a {section} menu item {item:?}");
                    MenuItem { name: item }
                })
                .collect()
        })
        .unwrap_or_default();
    StationMenu { name, menu }
}

/// The name is the text of the spans next to the nutrition block, minus the
/// expand/collapse indicator.
fn item_name(nutrition: ElementRef<'_>) -> String {
    parent(nutrition)
        .map(|item| {
            item.select(&ITEM_NAME_SELECTOR)
                .map(element_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

fn parent(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}
