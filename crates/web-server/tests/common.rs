#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use configuration::CorsSettings;
use core_types::{PokemonEvolutions, PokemonFullInfo, RaidBossDetails, TeamPokemonMoves};
use database::InMemorySource;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;
use web_server::{AppState, build_router};

use failing::UnavailableSource;

pub fn pokemon(
    id: i32,
    name: &str,
    primary_type: &str,
    secondary_type: Option<&str>,
    previous: Option<&str>,
    next: Option<&str>,
) -> PokemonFullInfo {
    PokemonFullInfo {
        pokemon_id: id,
        name: name.to_string(),
        pokedex_number: id,
        evolution: 1,
        primary_type: primary_type.to_string(),
        secondary_type: secondary_type.map(str::to_string),
        base_hp: 45,
        base_attack: 49,
        base_defense: 49,
        base_special_attack: 65,
        base_special_defense: 65,
        base_speed: 45,
        total_stats: 318,
        previous_evolution: previous.map(str::to_string),
        next_evolution: next.map(str::to_string),
        moves: "Tackle, Growl".to_string(),
    }
}

pub fn sample_source() -> InMemorySource {
    InMemorySource::new()
        .with_pokemon_full_info(vec![
            pokemon(1, "Bulbasaur", "Grass", Some("Poison"), None, Some("Ivysaur")),
            pokemon(2, "Ivysaur", "Grass", Some("Poison"), Some("Bulbasaur"), Some("Venusaur")),
            pokemon(25, "Pikachu", "Electric", None, Some("Pichu"), Some("Raichu")),
        ])
        .with_team_pokemon_moves(vec![
            TeamPokemonMoves {
                team_pokemon_id: 10,
                team_name: "Kanto Classics".into(),
                pokemon_name: "Pikachu".into(),
                level: 42,
                move1: Some("Thunderbolt".into()),
                move2: Some("Quick Attack".into()),
                move3: None,
                move4: None,
            },
            TeamPokemonMoves {
                team_pokemon_id: 11,
                team_name: "Kanto Classics".into(),
                pokemon_name: "Bulbasaur".into(),
                level: 17,
                move1: None,
                move2: None,
                move3: None,
                move4: None,
            },
        ])
        .with_pokemon_evolutions(vec![PokemonEvolutions {
            pokemon_id: 1,
            name: "Bulbasaur".into(),
            evolution: 1,
            previous_evolution: None,
            next_evolution: Some("Ivysaur".into()),
        }])
        .with_raid_boss_details(vec![
            RaidBossDetails {
                raid_boss_id: 1,
                pokemon_name: "Mewtwo".into(),
                raid_level: 5,
                cp: 54148,
                appearance_date: NaiveDate::from_ymd_opt(2024, 7, 6),
                move_set: "Confusion, Psystrike".into(),
            },
            RaidBossDetails {
                raid_boss_id: 2,
                pokemon_name: "Snorlax".into(),
                raid_level: 3,
                cp: 20000,
                appearance_date: None,
                move_set: "Lick, Body Slam".into(),
            },
        ])
}

pub fn app_with(source: InMemorySource) -> Router {
    build_router(AppState::new(Arc::new(source)), &CorsSettings::default())
}

pub fn unavailable_app() -> Router {
    build_router(
        AppState::new(Arc::new(UnavailableSource)),
        &CorsSettings::default(),
    )
}

/// Sends a request through the router without binding a socket.
pub async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, body)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _headers, body) = send(app, "GET", uri).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

mod failing {
    use core_types::{
        PokemonEvolutions, PokemonFullInfo, PokemonGoInfo, RaidBossDetails, TeamOverview,
        TeamPokemonMoves,
    };
    use database::{DbError, PokedexSource, error::SqlxError};

    /// A source whose database is always unreachable.
    pub struct UnavailableSource;

    fn down<T>() -> Result<T, DbError> {
        Err(DbError::Unavailable(SqlxError::PoolTimedOut))
    }

    #[async_trait::async_trait]
    impl PokedexSource for UnavailableSource {
        async fn list_pokemon_full_info(&self) -> Result<Vec<PokemonFullInfo>, DbError> {
            down()
        }

        async fn get_pokemon_full_info(&self, _pokemon_id: i32) -> Result<PokemonFullInfo, DbError> {
            down()
        }

        async fn list_team_pokemon_moves(&self) -> Result<Vec<TeamPokemonMoves>, DbError> {
            down()
        }

        async fn list_pokemon_evolutions(&self) -> Result<Vec<PokemonEvolutions>, DbError> {
            down()
        }

        async fn list_raid_boss_details(&self) -> Result<Vec<RaidBossDetails>, DbError> {
            down()
        }

        async fn list_pokemon_go_info(&self) -> Result<Vec<PokemonGoInfo>, DbError> {
            down()
        }

        async fn list_team_overview(&self) -> Result<Vec<TeamOverview>, DbError> {
            down()
        }
    }
}
