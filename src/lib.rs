// Dino Compare - Core Library
// Exposes all modules for use in the terminal UI, the web server, and tests

pub mod being;
pub mod catalog;
pub mod config;
pub mod error;
pub mod facts;
pub mod form;
pub mod page;
pub mod tile;

#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use being::{
    Being, Creature, Person,
    image_for, HUMAN_SPECIES, IMAGE_EXTENSION,
};
pub use catalog::{
    Catalog, RawCreature,
    load_catalog, parse_catalog,
};
pub use config::{Config, CONFIG_ENV_VAR};
pub use error::{CatalogError, ConfigError, PageError};
pub use facts::{
    FactGenerator, FactKind, FACT_GENERATORS, PIGEON,
    choose_fact, fact_for,
    height_fact, weight_fact, diet_fact, habitat_fact, era_fact, trivia_fact,
};
pub use form::{FormInput, parse_int_lenient, parse_number, total_height};
pub use page::{
    PageController, View, DIET_OPTIONS,
    compose_cards, compose_tiles, render_form_page, render_results_page,
};
pub use tile::{Card, Tile, DEFAULT_IMAGE_PREFIX, creature_tile, person_tile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
