use marketplace_api::types::{Statut, Utilisateur, UtilisateurInput};
use marketplace_api::{endpoints, Page, UserQuery};

use super::crud::{Crud, Resource, Toggleable};
use crate::error::MarketplaceError;

/// Users of every type. List with a [`UserQuery`] to filter by role or type.
pub type UserService<'c> = Crud<'c, Utilisateur>;

impl Resource for Utilisateur {
    type Input = UtilisateurInput;
    const COLLECTION: &'static str = endpoints::UTILISATEURS;
    const LABEL: &'static str = "utilisateur";
}

impl Toggleable for Utilisateur {
    fn statut(&self) -> Statut {
        self.statut
    }
    fn input_with_statut(&self, statut: Statut) -> UtilisateurInput {
        UtilisateurInput {
            statut: Some(statut),
            ..UtilisateurInput::from(self)
        }
    }
}

impl Crud<'_, Utilisateur> {
    /// Users holding the given role.
    pub async fn list_by_role(
        &self,
        role_uuid: &str,
        query: UserQuery,
    ) -> Result<Page<Utilisateur>, MarketplaceError> {
        let role_uuid = crate::validation::validate_uuid(role_uuid)?;
        self.list(&query.with_role(&role_uuid)).await
    }
}
