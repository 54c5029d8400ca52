//! Command palette entries

use nav_model::{NavSection, PaletteCommand};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// Palette key for an item: `section:item`, lowercased
///
/// Every whitespace run becomes one `-`, including leading and trailing runs.
#[must_use]
pub fn command_id(section: &str, item: &str) -> String {
    let id = format!("{section}:{item}").to_lowercase();
    WHITESPACE.replace_all(&id, "-").into_owned()
}

/// Flatten sections into palette commands, section then item order
#[must_use]
pub fn palette_commands(sections: &[NavSection]) -> Vec<PaletteCommand> {
    sections
        .iter()
        .flat_map(|section| {
            section.items.iter().map(|item| PaletteCommand {
                id: command_id(&section.label, &item.label),
                section: section.label.clone(),
                label: item.label.clone(),
                href: item.href.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_model::NavItem;

    #[test]
    fn ids_are_lowercase_and_hyphenated() {
        assert_eq!(command_id("Profile", "Basic Info"), "profile:basic-info");
        assert_eq!(command_id("OPENDECK", "Gigs"), "opendeck:gigs");
        assert_eq!(command_id("My  Section", " Two   Words "), "my-section:-two-words-");
        assert_eq!(command_id("Jobs", "Crew\tCalls"), "jobs:crew-calls");
    }

    #[test]
    fn flattens_in_order() {
        let sections = vec![
            NavSection {
                label: "Finance".into(),
                items: vec![
                    NavItem::new("Overview", "/finance"),
                    NavItem::new("Invoices", "/finance/invoices"),
                ],
            },
            NavSection {
                label: "Profile".into(),
                items: vec![NavItem::new("Basic Info", "/profile/basic")],
            },
        ];

        let commands = palette_commands(&sections);
        let ids: Vec<&str> = commands.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["finance:overview", "finance:invoices", "profile:basic-info"]);
        assert_eq!(commands[2].href, "/profile/basic");
        assert_eq!(commands[2].section, "Profile");
    }
}
