use crate::view::View;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of `view_pokemon_full_info`: species, typing, base stats,
/// evolution neighbours and the learnable move list.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PokemonFullInfo {
    pub pokemon_id: i32,
    pub name: String,
    pub pokedex_number: i32,
    pub evolution: i32,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub base_hp: i32,
    pub base_attack: i32,
    pub base_defense: i32,
    pub base_special_attack: i32,
    pub base_special_defense: i32,
    pub base_speed: i32,
    pub total_stats: i32,
    pub previous_evolution: Option<String>,
    pub next_evolution: Option<String>,
    /// Free text as aggregated by the view.
    pub moves: String,
}

impl View for PokemonFullInfo {
    const VIEW_NAME: &'static str = "view_pokemon_full_info";
    const PRIMARY_KEY: &'static str = "pokemon_id";
    const COLUMNS: &'static [&'static str] = &[
        "pokemon_id",
        "name",
        "pokedex_number",
        "evolution",
        "primary_type",
        "secondary_type",
        "base_hp",
        "base_attack",
        "base_defense",
        "base_special_attack",
        "base_special_defense",
        "base_speed",
        "total_stats",
        "previous_evolution",
        "next_evolution",
        "moves",
    ];
}

/// A row of `view_team_pokemon_moves`: one team member and up to four moves.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct TeamPokemonMoves {
    pub team_pokemon_id: i32,
    pub team_name: String,
    pub pokemon_name: String,
    pub level: i32,
    pub move1: Option<String>,
    pub move2: Option<String>,
    pub move3: Option<String>,
    pub move4: Option<String>,
}

impl View for TeamPokemonMoves {
    const VIEW_NAME: &'static str = "view_team_pokemon_moves";
    const PRIMARY_KEY: &'static str = "team_pokemon_id";
    const COLUMNS: &'static [&'static str] = &[
        "team_pokemon_id",
        "team_name",
        "pokemon_name",
        "level",
        "move1",
        "move2",
        "move3",
        "move4",
    ];
}

/// A row of `view_pokemon_evolutions`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PokemonEvolutions {
    pub pokemon_id: i32,
    pub name: String,
    pub evolution: i32,
    pub previous_evolution: Option<String>,
    pub next_evolution: Option<String>,
}

impl View for PokemonEvolutions {
    const VIEW_NAME: &'static str = "view_pokemon_evolutions";
    const PRIMARY_KEY: &'static str = "pokemon_id";
    const COLUMNS: &'static [&'static str] = &[
        "pokemon_id",
        "name",
        "evolution",
        "previous_evolution",
        "next_evolution",
    ];
}

/// A row of `view_raid_boss_details`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct RaidBossDetails {
    pub raid_boss_id: i32,
    pub pokemon_name: String,
    pub raid_level: i32,
    pub cp: i32,
    /// Serialized as `YYYY-MM-DD`.
    pub appearance_date: Option<NaiveDate>,
    pub move_set: String,
}

impl View for RaidBossDetails {
    const VIEW_NAME: &'static str = "view_raid_boss_details";
    const PRIMARY_KEY: &'static str = "raid_boss_id";
    const COLUMNS: &'static [&'static str] = &[
        "raid_boss_id",
        "pokemon_name",
        "raid_level",
        "cp",
        "appearance_date",
        "move_set",
    ];
}

/// A row of `view_pokemon_go_info`. Not routed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PokemonGoInfo {
    pub pokemon_go_stats_id: i32,
    pub pokemon_name: String,
    pub cp: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub stamina: i32,
    pub fast_move: Option<String>,
    pub charged_move: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl View for PokemonGoInfo {
    const VIEW_NAME: &'static str = "view_pokemon_go_info";
    const PRIMARY_KEY: &'static str = "pokemon_go_stats_id";
    const COLUMNS: &'static [&'static str] = &[
        "pokemon_go_stats_id",
        "pokemon_name",
        "cp",
        "hp",
        "attack",
        "defense",
        "stamina",
        "fast_move",
        "charged_move",
        "created_at",
        "updated_at",
    ];
}

/// A row of `view_team_overview`. Not routed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct TeamOverview {
    pub team_id: i32,
    pub team_name: String,
    pub username: String,
    pub team_members: String,
}

impl View for TeamOverview {
    const VIEW_NAME: &'static str = "view_team_overview";
    const PRIMARY_KEY: &'static str = "team_id";
    const COLUMNS: &'static [&'static str] = &["team_id", "team_name", "username", "team_members"];
}
