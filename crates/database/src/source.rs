use crate::DbError;
use async_trait::async_trait;
use core_types::{
    PokemonEvolutions, PokemonFullInfo, PokemonGoInfo, RaidBossDetails, TeamOverview,
    TeamPokemonMoves,
};

/// A read-only source of view rows.
///
/// The web server only talks to this trait, so it does not care whether the
/// rows come from PostgreSQL ([`crate::DbRepository`]) or from memory
/// ([`crate::InMemorySource`]). Every `list_*` method returns the whole view
/// in the source's native order.
#[async_trait]
pub trait PokedexSource: Send + Sync {
    async fn list_pokemon_full_info(&self) -> Result<Vec<PokemonFullInfo>, DbError>;

    /// Fails with [`DbError::NotFound`] when no row has this `pokemon_id`
    /// and with [`DbError::MultipleRows`] when more than one does.
    async fn get_pokemon_full_info(&self, pokemon_id: i32) -> Result<PokemonFullInfo, DbError>;

    async fn list_team_pokemon_moves(&self) -> Result<Vec<TeamPokemonMoves>, DbError>;

    async fn list_pokemon_evolutions(&self) -> Result<Vec<PokemonEvolutions>, DbError>;

    async fn list_raid_boss_details(&self) -> Result<Vec<RaidBossDetails>, DbError>;

    async fn list_pokemon_go_info(&self) -> Result<Vec<PokemonGoInfo>, DbError>;

    async fn list_team_overview(&self) -> Result<Vec<TeamOverview>, DbError>;
}
