use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The `{pokemon_id}` path segment.
///
/// Only plain digit strings that fit an `i32` are accepted. Anything else is a
/// routing miss (404), never a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PokemonKey(pub i32);

impl PokemonKey {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<i32>().ok().map(PokemonKey)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PokemonKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        PokemonKey::parse(&raw).ok_or(AppError::NotFound)
    }
}
