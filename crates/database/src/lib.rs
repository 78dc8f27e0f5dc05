//! # Pokeviews Database Crate
//!
//! This crate is the only place that talks to PostgreSQL. It reads the
//! pre-computed views (`view_pokemon_full_info`, `view_raid_boss_details`, ...)
//! that are maintained outside this service and never writes to them.
//!
//! ## Public API
//!
//! - `connect`: establishes the connection pool from `DATABASE_URL` and the
//!   pool settings.
//! - `PokedexSource`: the read-only trait the web server depends on.
//! - `DbRepository`: the PostgreSQL implementation of `PokedexSource`.
//! - `InMemorySource`: an in-memory implementation used for tests.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;
pub mod source;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_to, database_url};
pub use error::DbError;
pub use memory::InMemorySource;
pub use repository::DbRepository;
pub use source::PokedexSource;
