//! Library layer for the marketplace front-end: configuration, input
//! validation, user-facing error copy, and one service per REST resource.
//!
//! Wraps the `marketplace_api` crate, which owns the HTTP client and the
//! response normalizer.

pub mod config;
pub mod error;
pub mod services;
pub mod validation;

pub use marketplace_api;
pub use marketplace_api::types;
pub use marketplace_api::{
    Client, ErrorKind, FavoriQuery, ListQuery, MessageQuery, Page, Query, SortDirection,
    UserQuery,
};

pub use config::Config;
pub use error::MarketplaceError;
pub use services::{
    EchangeService, FavoriService, MessageService, PaysService, ProduitService, RoleService,
    StatutMatrimonialService, ToggleOutcome, UserService,
};
