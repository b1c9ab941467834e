//! CLI subcommand implementations.

pub mod common;
pub mod echanges;
pub mod favoris;
pub mod messages;
pub mod pays;
pub mod produits;
pub mod roles;
pub mod statuts;
pub mod users;
