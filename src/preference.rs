//! Favorite-team preference: saved from the profile page, shown on the
//! dashboard.

use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use crate::config::StorageKeys;
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::types::TeamLogos;
use crate::view::{ImageTarget, SelectControl, Text};

pub const SAVED_ACK: &str = "Saved! Your team logo will show on the dashboard.";

/// The two persisted slots as they were read. Empty strings count as unset.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteTeam {
    pub key: Option<String>,
    pub name: Option<String>,
}

/// What the load step put on the page.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedTeam {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub selected: Option<String>,
}

/// Team elements present on the current page.
#[derive(Clone, Default)]
pub struct TeamBindings {
    pub name: Option<Text>,
    pub logo: Option<Rc<dyn ImageTarget>>,
    pub select: Option<Rc<dyn SelectControl>>,
}

pub struct PreferenceBridge<S> {
    store: S,
    keys: StorageKeys,
    logos: TeamLogos,
}

impl<S: KeyValueStore> PreferenceBridge<S> {
    pub fn new(store: S, keys: StorageKeys, logos: TeamLogos) -> Self {
        Self { store, keys, logos }
    }

    pub fn logos(&self) -> &TeamLogos {
        &self.logos
    }

    pub fn saved(&self) -> FavoriteTeam {
        let read = |slot: &str| self.store.get(slot).filter(|v| !v.is_empty());
        FavoriteTeam {
            key: read(&self.keys.team_key),
            name: read(&self.keys.team_name),
        }
    }

    /// Persist the select control's current entry.
    ///
    /// Does nothing when the page has no team select. Whatever is selected is
    /// written as-is, the placeholder entry included.
    pub fn save(&mut self, bindings: &TeamBindings) -> Result<Option<(String, String)>> {
        let Some(select) = &bindings.select else {
            return Ok(None);
        };

        let key = select.value();
        let name = select.selected_label();
        self.save_team(&key, &name)?;
        Ok(Some((key, name)))
    }

    pub fn save_team(&mut self, key: &str, name: &str) -> Result<()> {
        self.store.set(&self.keys.team_key, key)?;
        self.store.set(&self.keys.team_name, name)?;
        debug!(key, name, "saved favorite team");
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.keys.team_key)?;
        self.store.remove(&self.keys.team_name)
    }

    /// Restore the saved team onto whichever team elements the page has.
    pub fn load(&self, bindings: &TeamBindings) -> LoadedTeam {
        let saved = self.saved();
        let mut loaded = LoadedTeam::default();

        if let (Some(target), Some(name)) = (&bindings.name, &saved.name) {
            target.set_text(name);
            loaded.name = Some(name.clone());
        }

        let logo = saved.key.as_deref().and_then(|key| self.logos.logo(key));
        if let (Some(target), Some(src)) = (&bindings.logo, logo) {
            target.show(src);
            loaded.logo = Some(src.to_string());
        }

        if let (Some(select), Some(key)) = (&bindings.select, &saved.key) {
            select.set_value(key);
            loaded.selected = Some(key.clone());
        }

        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::TEAMS;
    use crate::view::{ImageSlot, OptionList, TextSlot};

    fn bridge() -> PreferenceBridge<MemoryStore> {
        PreferenceBridge::new(
            MemoryStore::new(),
            StorageKeys::default(),
            TeamLogos::default(),
        )
    }

    fn dashboard() -> (TeamBindings, Rc<TextSlot>, Rc<ImageSlot>) {
        let name = TextSlot::new();
        let logo = ImageSlot::new();
        let bindings = TeamBindings {
            name: Some(name.clone()),
            logo: Some(logo.clone()),
            select: None,
        };
        (bindings, name, logo)
    }

    #[test]
    fn test_every_known_team_shows_its_logo() {
        for team in TEAMS {
            let mut bridge = bridge();
            bridge.save_team(team.key, team.name).unwrap();

            let (bindings, name, logo) = dashboard();
            bridge.load(&bindings);

            assert_eq!(logo.src(), bridge.logos().logo(team.key).map(String::from));
            assert!(logo.is_visible());
            assert_eq!(name.text().as_deref(), Some(team.name));
        }
    }

    #[test]
    fn test_unknown_team_keeps_logo_hidden_but_shows_name() {
        let mut bridge = bridge();
        bridge.save_team("williams", "Williams").unwrap();

        let (bindings, name, logo) = dashboard();
        let loaded = bridge.load(&bindings);

        assert!(!logo.is_visible());
        assert_eq!(name.text().as_deref(), Some("Williams"));
        assert_eq!(loaded.logo, None);
    }

    #[test]
    fn test_nothing_saved_touches_nothing() {
        let bridge = bridge();
        let (bindings, name, logo) = dashboard();
        let loaded = bridge.load(&bindings);

        assert_eq!(loaded, LoadedTeam::default());
        assert_eq!(name.text(), None);
        assert!(!logo.is_visible());
    }

    #[test]
    fn test_reload_preselects_saved_team() {
        let mut bridge = bridge();
        let select = OptionList::teams();
        let bindings = TeamBindings {
            select: Some(select.clone()),
            ..TeamBindings::default()
        };

        select.set_value("astonmartin");
        let saved = bridge.save(&bindings).unwrap();
        assert_eq!(
            saved,
            Some(("astonmartin".to_string(), "Aston Martin".to_string()))
        );

        // Fresh page view with the placeholder selected again
        let reloaded = OptionList::teams();
        let bindings = TeamBindings {
            select: Some(reloaded.clone()),
            ..TeamBindings::default()
        };
        bridge.load(&bindings);
        assert_eq!(reloaded.value(), "astonmartin");
    }

    #[test]
    fn test_save_without_select_is_a_no_op() {
        let mut bridge = bridge();
        assert_eq!(bridge.save(&TeamBindings::default()).unwrap(), None);
        assert_eq!(bridge.saved(), FavoriteTeam::default());
    }

    #[test]
    fn test_placeholder_selection_is_saved_as_is() {
        let mut bridge = bridge();
        let bindings = TeamBindings {
            select: Some(OptionList::teams()),
            ..TeamBindings::default()
        };

        bridge.save(&bindings).unwrap();
        assert_eq!(bridge.store.get("favoriteTeamKey").as_deref(), Some(""));
        assert_eq!(
            bridge.store.get("favoriteTeamName").as_deref(),
            Some("Choose a team")
        );

        // An empty key reads back as unset
        assert_eq!(bridge.saved().key, None);
    }

    #[test]
    fn test_missing_elements_are_skipped_individually() {
        let mut bridge = bridge();
        bridge.save_team("ferrari", "Ferrari").unwrap();

        let logo = ImageSlot::new();
        let bindings = TeamBindings {
            logo: Some(logo.clone()),
            ..TeamBindings::default()
        };
        let loaded = bridge.load(&bindings);

        assert!(logo.is_visible());
        assert_eq!(loaded.name, None);
    }

    #[test]
    fn test_clear_forgets_both_slots() {
        let mut bridge = bridge();
        bridge.save_team("mercedes", "Mercedes").unwrap();
        bridge.clear().unwrap();
        assert_eq!(bridge.saved(), FavoriteTeam::default());
    }
}
