/// Database configuration and connection management
pub mod database;

/// Sample product loading from the seed TOML file
pub mod seed;
