pub mod enums;
pub mod error;
pub mod records;
pub mod view;

// Re-export the core types to provide a clean public API.
pub use enums::ViewKind;
pub use error::CoreError;
pub use records::{
    PokemonEvolutions, PokemonFullInfo, PokemonGoInfo, RaidBossDetails, TeamOverview,
    TeamPokemonMoves,
};
pub use view::View;
