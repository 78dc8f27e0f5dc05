use crate::DbError;
use crate::source::PokedexSource;
use async_trait::async_trait;
use core_types::{
    PokemonEvolutions, PokemonFullInfo, PokemonGoInfo, RaidBossDetails, TeamOverview,
    TeamPokemonMoves, View,
};
use sqlx::FromRow;
use sqlx::postgres::{PgPool, PgRow};

/// The `DbRepository` reads the pre-built views through a shared connection
/// pool. Every call is a single SELECT with no transaction around it.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches every row of the view backing `V`.
    pub async fn fetch_all<V>(&self) -> Result<Vec<V>, DbError>
    where
        V: View + for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = V::select_all();
        let rows = sqlx::query_as::<_, V>(&sql).fetch_all(&self.pool).await?;
        tracing::debug!(view = V::VIEW_NAME, rows = rows.len(), "Fetched view.");
        Ok(rows)
    }

    /// Fetches the single row of `V` whose primary key equals `key`.
    ///
    /// Views carry no uniqueness constraint, so every match is fetched and
    /// more than one is an error rather than an arbitrary pick.
    pub async fn fetch_by_key<V>(&self, key: i32) -> Result<V, DbError>
    where
        V: View + for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = V::select_by_key();
        let rows = sqlx::query_as::<_, V>(&sql)
            .bind(key)
            .fetch_all(&self.pool)
            .await?;
        single_row(rows, key)
    }

    /// Closes the underlying pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Reduces the matches of a key lookup to exactly one row.
pub(crate) fn single_row<V: View>(mut rows: Vec<V>, key: i32) -> Result<V, DbError> {
    match rows.len() {
        0 => Err(DbError::NotFound),
        1 => Ok(rows.remove(0)),
        count => Err(DbError::MultipleRows {
            view: V::VIEW_NAME,
            key,
            count,
        }),
    }
}

#[async_trait]
impl PokedexSource for DbRepository {
    async fn list_pokemon_full_info(&self) -> Result<Vec<PokemonFullInfo>, DbError> {
        self.fetch_all().await
    }

    async fn get_pokemon_full_info(&self, pokemon_id: i32) -> Result<PokemonFullInfo, DbError> {
        self.fetch_by_key(pokemon_id).await
    }

    async fn list_team_pokemon_moves(&self) -> Result<Vec<TeamPokemonMoves>, DbError> {
        self.fetch_all().await
    }

    async fn list_pokemon_evolutions(&self) -> Result<Vec<PokemonEvolutions>, DbError> {
        self.fetch_all().await
    }

    async fn list_raid_boss_details(&self) -> Result<Vec<RaidBossDetails>, DbError> {
        self.fetch_all().await
    }

    async fn list_pokemon_go_info(&self) -> Result<Vec<PokemonGoInfo>, DbError> {
        self.fetch_all().await
    }

    async fn list_team_overview(&self) -> Result<Vec<TeamOverview>, DbError> {
        self.fetch_all().await
    }
}
