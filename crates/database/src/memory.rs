use crate::DbError;
use crate::repository::single_row;
use crate::source::PokedexSource;
use async_trait::async_trait;
use core_types::{
    PokemonEvolutions, PokemonFullInfo, PokemonGoInfo, RaidBossDetails, TeamOverview,
    TeamPokemonMoves,
};

/// A [`PokedexSource`] that serves rows held in memory, in insertion order.
///
/// Used by the HTTP tests so the router can be exercised without PostgreSQL.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pokemon_full_info: Vec<PokemonFullInfo>,
    team_pokemon_moves: Vec<TeamPokemonMoves>,
    pokemon_evolutions: Vec<PokemonEvolutions>,
    raid_boss_details: Vec<RaidBossDetails>,
    pokemon_go_info: Vec<PokemonGoInfo>,
    team_overview: Vec<TeamOverview>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pokemon_full_info(mut self, rows: Vec<PokemonFullInfo>) -> Self {
        self.pokemon_full_info = rows;
        self
    }

    pub fn with_team_pokemon_moves(mut self, rows: Vec<TeamPokemonMoves>) -> Self {
        self.team_pokemon_moves = rows;
        self
    }

    pub fn with_pokemon_evolutions(mut self, rows: Vec<PokemonEvolutions>) -> Self {
        self.pokemon_evolutions = rows;
        self
    }

    pub fn with_raid_boss_details(mut self, rows: Vec<RaidBossDetails>) -> Self {
        self.raid_boss_details = rows;
        self
    }

    pub fn with_pokemon_go_info(mut self, rows: Vec<PokemonGoInfo>) -> Self {
        self.pokemon_go_info = rows;
        self
    }

    pub fn with_team_overview(mut self, rows: Vec<TeamOverview>) -> Self {
        self.team_overview = rows;
        self
    }
}

#[async_trait]
impl PokedexSource for InMemorySource {
    async fn list_pokemon_full_info(&self) -> Result<Vec<PokemonFullInfo>, DbError> {
        Ok(self.pokemon_full_info.clone())
    }

    async fn get_pokemon_full_info(&self, pokemon_id: i32) -> Result<PokemonFullInfo, DbError> {
        let matches = self
            .pokemon_full_info
            .iter()
            .filter(|row| row.pokemon_id == pokemon_id)
            .cloned()
            .collect();
        single_row(matches, pokemon_id)
    }

    async fn list_team_pokemon_moves(&self) -> Result<Vec<TeamPokemonMoves>, DbError> {
        Ok(self.team_pokemon_moves.clone())
    }

    async fn list_pokemon_evolutions(&self) -> Result<Vec<PokemonEvolutions>, DbError> {
        Ok(self.pokemon_evolutions.clone())
    }

    async fn list_raid_boss_details(&self) -> Result<Vec<RaidBossDetails>, DbError> {
        Ok(self.raid_boss_details.clone())
    }

    async fn list_pokemon_go_info(&self) -> Result<Vec<PokemonGoInfo>, DbError> {
        Ok(self.pokemon_go_info.clone())
    }

    async fn list_team_overview(&self) -> Result<Vec<TeamOverview>, DbError> {
        Ok(self.team_overview.clone())
    }
}
