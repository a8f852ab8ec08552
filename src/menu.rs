use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::Date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
}

/// A serving station, ex. `Tomato Street Grill`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationMenu {
    pub name: String,
    pub menu: Vec<MenuItem>,
}

/// A meal period, ex. `Breakfast`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    pub stations: Vec<StationMenu>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMenu {
    pub sections: Vec<MenuSection>,
}

/// Everything scraped from one dining commons page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    /// Taken from the page title, if there was one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub daily: BTreeMap<Date, DailyMenu>,
}

impl Menu {
    #[inline]
    #[must_use]
    pub fn day(&self, date: &Date) -> Option<&DailyMenu> {
        self.daily.get(date)
    }

    #[inline]
    #[must_use]
    pub fn has_day(&self, date: &Date) -> bool {
        self.daily.contains_key(date)
    }
}

impl DailyMenu {
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|section| &section.stations)
            .map(|station| station.menu.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2024, 4, 5).unwrap();
        let mut menu = Menu {
            name: Some("Segundo".into()),
            ..Menu::default()
        };
        menu.daily.insert(
            date,
            DailyMenu {
                sections: vec![MenuSection {
                    name: "Lunch".into(),
                    stations: vec![StationMenu {
                        name: "Grill".into(),
                        menu: vec![MenuItem {
                            name: "Burger".into(),
                        }],
                    }],
                }],
            },
        );
        let serialized = serde_json::to_string(&menu).unwrap();
        assert!(serialized.contains("\"2024-04-05\""));
        let deserialized: Menu = serde_json::from_str(&serialized).unwrap();
        assert_eq!(menu, deserialized);
        assert!(deserialized.has_day(&date));
        assert_eq!(deserialized.day(&date).unwrap().item_count(), 1);
    }

    #[test]
    fn test_missing_fields() {
        let menu: Menu = serde_json::from_str("{}").unwrap();
        assert_eq!(menu, Menu::default());
    }
}
