use marketplace_api::endpoints;
use marketplace_api::types::{Role, RoleInput, Statut};

use super::crud::{Crud, Resource, Toggleable};

/// Roles: CRUD plus [`Crud::toggle_status`].
pub type RoleService<'c> = Crud<'c, Role>;

impl Resource for Role {
    type Input = RoleInput;
    const COLLECTION: &'static str = endpoints::ROLES;
    const LABEL: &'static str = "role";
}

impl Toggleable for Role {
    fn statut(&self) -> Statut {
        self.statut
    }
    fn input_with_statut(&self, statut: Statut) -> RoleInput {
        RoleInput {
            statut: Some(statut),
            ..RoleInput::from(self)
        }
    }
}
