use crate::{AppState, error::AppError, extract::PokemonKey};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use core_types::{PokemonEvolutions, PokemonFullInfo, RaidBossDetails, TeamPokemonMoves};
use std::sync::Arc;

/// # GET / and GET /api/pokemon/
/// Lists every row of `view_pokemon_full_info`.
pub async fn list_pokemon(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PokemonFullInfo>>, AppError> {
    let rows = state.source.list_pokemon_full_info().await?;
    Ok(Json(rows))
}

/// # GET /api/pokemon/:pokemon_id/
pub async fn get_pokemon(
    key: PokemonKey,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PokemonFullInfo>, AppError> {
    let PokemonKey(pokemon_id) = key;
    let row = state.source.get_pokemon_full_info(pokemon_id).await?;
    Ok(Json(row))
}

/// # GET /api/team-pokemon-moves/
pub async fn list_team_pokemon_moves(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TeamPokemonMoves>>, AppError> {
    let rows = state.source.list_team_pokemon_moves().await?;
    Ok(Json(rows))
}

/// # GET /api/pokemon-evolutions/
pub async fn list_pokemon_evolutions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PokemonEvolutions>>, AppError> {
    let rows = state.source.list_pokemon_evolutions().await?;
    Ok(Json(rows))
}

/// # GET /api/raid-boss-details/
pub async fn list_raid_boss_details(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RaidBossDetails>>, AppError> {
    let rows = state.source.list_raid_boss_details().await?;
    Ok(Json(rows))
}

/// Redirects a slashless list path to its canonical form with `301`.
pub async fn append_slash(uri: Uri) -> Response {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]).into_response()
}

/// Same as [`append_slash`] for `/api/pokemon/:pokemon_id`, but only when the
/// id would match the detail route.
pub async fn append_slash_to_pokemon(_key: PokemonKey, uri: Uri) -> Response {
    append_slash(uri).await
}

/// Fallback for every unmatched path, `/admin/` included.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
