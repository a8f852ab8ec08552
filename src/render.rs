use std::fmt::{self, Write};

use crate::{date::Date, source::Snapshot};

/// Text layout options, handed to the renderer by whoever owns the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub indent: String,
    /// Wraps the selected section in the section bar.
    pub active: (char, char),
    pub rule: char,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            active: ('[', ']'),
            rule: '=',
        }
    }
}

/// One location's tab.
///
/// `snapshot` is `None` while the location is loading. `selected` picks a
/// single section (clamped to the first one when out of range); `None` lists
/// them all.
pub fn render_tab(
    out: &mut impl Write,
    fallback_name: &str,
    snapshot: Option<&Snapshot>,
    today: &Date,
    selected: Option<usize>,
    theme: &Theme,
) -> fmt::Result {
    let name = snapshot
        .and_then(Snapshot::menu)
        .and_then(|menu| menu.name.as_deref())
        .unwrap_or(fallback_name);
    writeln!(out, "{name}")?;
    writeln!(out, "{}", theme.rule.to_string().repeat(name.chars().count()))?;

    let Some(snapshot) = snapshot.filter(|s| s.is_settled()) else {
        return writeln!(out, "Loading...");
    };
    if let Some(e) = snapshot.error() {
        return writeln!(out, "Error: {e}");
    }
    let Some(day) = snapshot.today(today) else {
        return writeln!(out, "Today's menu was not fetched.");
    };
    if day.sections.is_empty() {
        return writeln!(out, "Nothing is being served today.");
    }

    let selected = selected.map(|i| if i < day.sections.len() { i } else { 0 });
    let bar: Vec<String> = day
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            if selected == Some(i) {
                format!("{}{}{}", theme.active.0, section.name, theme.active.1)
            } else {
                section.name.clone()
            }
        })
        .collect();
    writeln!(out, "{}", bar.join(" | "))?;

    let indent = &theme.indent;
    for (i, section) in day.sections.iter().enumerate() {
        if selected.is_some_and(|s| s != i) {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "{}", section.name)?;
        for station in &section.stations {
            writeln!(out, "{indent}{}", station.name)?;
            for item in &station.menu {
                writeln!(out, "{indent}{indent}{}", item.name)?;
            }
        }
    }
    Ok(())
}
