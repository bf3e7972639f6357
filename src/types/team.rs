use std::collections::BTreeMap;

use serde::Serialize;

/// An entry of the favorite-team selection control.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub key: &'static str,
    pub name: &'static str,
}

/// Teams offered by the profile page, in display order.
pub const TEAMS: [Team; 5] = [
    Team { key: "ferrari", name: "Ferrari" },
    Team { key: "mercedes", name: "Mercedes" },
    Team { key: "redbull", name: "Red Bull Racing" },
    Team { key: "mclaren", name: "McLaren" },
    Team { key: "astonmartin", name: "Aston Martin" },
];

/// Team key to logo image path.
///
/// Built once and never mutated; callers hold it by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLogos {
    logos: BTreeMap<String, String>,
}

impl TeamLogos {
    pub fn new(logo_dir: &str) -> Self {
        let dir = logo_dir.trim_end_matches('/');
        let logos = TEAMS
            .iter()
            .map(|team| (team.key.to_string(), format!("{dir}/{}.png", team.key)))
            .collect();
        Self { logos }
    }

    pub fn logo(&self, key: &str) -> Option<&str> {
        self.logos.get(key).map(String::as_str)
    }
}

impl Default for TeamLogos {
    fn default() -> Self {
        Self::new(&crate::config::AssetConfig::default().logo_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_paths() {
        let logos = TeamLogos::default();
        assert_eq!(logos.logo("ferrari"), Some("../assets/img/teams/ferrari.png"));
        assert_eq!(
            logos.logo("astonmartin"),
            Some("../assets/img/teams/astonmartin.png")
        );
        assert_eq!(logos.logo("williams"), None);
        assert_eq!(logos.logo(""), None);
    }

    #[test]
    fn test_custom_logo_dir() {
        let logos = TeamLogos::new("/static/teams/");
        assert_eq!(logos.logo("mclaren"), Some("/static/teams/mclaren.png"));
    }

    #[test]
    fn test_every_team_has_a_logo() {
        let logos = TeamLogos::default();
        assert!(TEAMS.iter().all(|team| logos.logo(team.key).is_some()));
        assert_eq!(logos.logo("Ferrari"), None);
    }
}
