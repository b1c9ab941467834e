//! One service per REST resource. Every service borrows a [`marketplace_api::Client`].

mod catalogue;
mod crud;
mod favoris;
mod messages;
mod reference;
mod roles;
mod users;

pub use catalogue::{EchangeService, ProduitService};
pub use crud::{Crud, Resource, Toggleable};
pub use favoris::{FavoriService, ToggleOutcome};
pub use messages::MessageService;
pub use reference::{PaysService, StatutMatrimonialService};
pub use roles::RoleService;
pub use users::UserService;
