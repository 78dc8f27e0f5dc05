use crate::error::CoreError;
use crate::records::{
    PokemonEvolutions, PokemonFullInfo, PokemonGoInfo, RaidBossDetails, TeamOverview,
    TeamPokemonMoves,
};
use crate::view::View;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the database views the system can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    PokemonFullInfo,
    TeamPokemonMoves,
    PokemonEvolutions,
    RaidBossDetails,
    PokemonGoInfo,
    TeamOverview,
}

impl ViewKind {
    pub const ALL: [ViewKind; 6] = [
        ViewKind::PokemonFullInfo,
        ViewKind::TeamPokemonMoves,
        ViewKind::PokemonEvolutions,
        ViewKind::RaidBossDetails,
        ViewKind::PokemonGoInfo,
        ViewKind::TeamOverview,
    ];

    /// The kebab-case name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::PokemonFullInfo => "pokemon-full-info",
            ViewKind::TeamPokemonMoves => "team-pokemon-moves",
            ViewKind::PokemonEvolutions => "pokemon-evolutions",
            ViewKind::RaidBossDetails => "raid-boss-details",
            ViewKind::PokemonGoInfo => "pokemon-go-info",
            ViewKind::TeamOverview => "team-overview",
        }
    }

    pub fn view_name(&self) -> &'static str {
        match self {
            ViewKind::PokemonFullInfo => PokemonFullInfo::VIEW_NAME,
            ViewKind::TeamPokemonMoves => TeamPokemonMoves::VIEW_NAME,
            ViewKind::PokemonEvolutions => PokemonEvolutions::VIEW_NAME,
            ViewKind::RaidBossDetails => RaidBossDetails::VIEW_NAME,
            ViewKind::PokemonGoInfo => PokemonGoInfo::VIEW_NAME,
            ViewKind::TeamOverview => TeamOverview::VIEW_NAME,
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ViewKind::PokemonFullInfo => PokemonFullInfo::COLUMNS,
            ViewKind::TeamPokemonMoves => TeamPokemonMoves::COLUMNS,
            ViewKind::PokemonEvolutions => PokemonEvolutions::COLUMNS,
            ViewKind::RaidBossDetails => RaidBossDetails::COLUMNS,
            ViewKind::PokemonGoInfo => PokemonGoInfo::COLUMNS,
            ViewKind::TeamOverview => TeamOverview::COLUMNS,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = CoreError;

    /// Accepts either the kebab-case name or the database view name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ViewKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted || kind.view_name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = ViewKind::ALL.iter().map(ViewKind::as_str).collect();
                CoreError::UnknownView(wanted.to_string(), known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pokemon-full-info", ViewKind::PokemonFullInfo)]
    #[case("team-overview", ViewKind::TeamOverview)]
    #[case("view_pokemon_go_info", ViewKind::PokemonGoInfo)]
    #[case(" raid-boss-details ", ViewKind::RaidBossDetails)]
    fn parses_cli_and_view_names(#[case] input: &str, #[case] expected: ViewKind) {
        assert_eq!(input.parse::<ViewKind>().unwrap(), expected);
    }

    #[test]
    fn unknown_names_list_the_choices() {
        let err = "moves".parse::<ViewKind>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'moves'"));
        assert!(message.contains("team-pokemon-moves"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in ViewKind::ALL {
            assert_eq!(kind.to_string().parse::<ViewKind>().unwrap(), kind);
        }
    }
}
