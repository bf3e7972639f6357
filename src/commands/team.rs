use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use pitwall::error::{PitwallError, Result};
use pitwall::preference::{PreferenceBridge, TeamBindings, SAVED_ACK};
use pitwall::store::KeyValueStore;
use pitwall::types::TEAMS;
use pitwall::view::{ImageSlot, OptionList, SelectControl, TextSlot};

use crate::output;

#[derive(Serialize)]
struct TeamEntry {
    key: &'static str,
    name: &'static str,
    logo: String,
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Logo")]
    logo: String,
}

impl From<&TeamEntry> for TeamRow {
    fn from(entry: &TeamEntry) -> Self {
        Self {
            key: entry.key.to_string(),
            name: entry.name.to_string(),
            logo: entry.logo.clone(),
        }
    }
}

pub fn list<S: KeyValueStore>(bridge: &PreferenceBridge<S>) {
    let entries: Vec<TeamEntry> = TEAMS
        .iter()
        .map(|team| TeamEntry {
            key: team.key,
            name: team.name,
            logo: bridge.logos().logo(team.key).unwrap_or_default().to_string(),
        })
        .collect();

    output::print_table(&entries, |entry| TeamRow::from(entry));
}

/// Save a team the way the profile page does: pick it in the team select.
///
/// Keys outside the select need an explicit `--name`.
pub fn set<S: KeyValueStore>(
    bridge: &mut PreferenceBridge<S>,
    key: &str,
    name: Option<String>,
) -> Result<()> {
    match name {
        Some(name) => bridge.save_team(key, &name)?,
        None => {
            let select = OptionList::teams();
            select.set_value(key);
            if select.value() != key {
                return Err(PitwallError::UnknownTeam(key.to_string()));
            }

            let bindings = TeamBindings {
                select: Some(select),
                ..TeamBindings::default()
            };
            bridge.save(&bindings)?;
        }
    }

    output::print_message(SAVED_ACK);
    Ok(())
}

pub fn show<S: KeyValueStore>(bridge: &PreferenceBridge<S>) {
    let name = TextSlot::new();
    let logo = ImageSlot::new();
    let bindings = TeamBindings {
        name: Some(name.clone()),
        logo: Some(logo.clone()),
        select: None,
    };

    let loaded = bridge.load(&bindings);

    output::print_item(&loaded, |_| {
        match name.text() {
            Some(name) => println!("{} {}", "Favorite team:".bold(), name),
            None => println!("{} {}", "Favorite team:".bold(), "not set".bright_black()),
        }
        match logo.src() {
            Some(src) => println!("{} {}", "Logo:".bold(), src),
            None => println!("{} {}", "Logo:".bold(), "hidden".bright_black()),
        }
    });
}

pub fn clear<S: KeyValueStore>(bridge: &mut PreferenceBridge<S>) -> Result<()> {
    bridge.clear()?;
    output::print_message("Favorite team cleared.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitwall::config::StorageKeys;
    use pitwall::store::MemoryStore;
    use pitwall::types::TeamLogos;

    fn bridge() -> PreferenceBridge<MemoryStore> {
        PreferenceBridge::new(
            MemoryStore::new(),
            StorageKeys::default(),
            TeamLogos::default(),
        )
    }

    #[test]
    fn test_set_known_team_takes_select_label() {
        let mut bridge = bridge();
        set(&mut bridge, "redbull", None).unwrap();

        let saved = bridge.saved();
        assert_eq!(saved.key.as_deref(), Some("redbull"));
        assert_eq!(saved.name.as_deref(), Some("Red Bull Racing"));
    }

    #[test]
    fn test_set_unknown_team_needs_a_name() {
        let mut bridge = bridge();
        let err = set(&mut bridge, "williams", None).unwrap_err();
        assert!(matches!(err, PitwallError::UnknownTeam(ref key) if key == "williams"));

        set(&mut bridge, "williams", Some("Williams".into())).unwrap();
        assert_eq!(bridge.saved().name.as_deref(), Some("Williams"));
    }
}
