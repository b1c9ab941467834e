//! Products and the exchange proposals made on them.

use marketplace_api::endpoints;
use marketplace_api::types::{
    Echange, EchangeInput, Produit, ProduitInput, Statut, StatutEchange,
};

use super::crud::{Crud, Resource, Toggleable};
use crate::error::MarketplaceError;

pub type ProduitService<'c> = Crud<'c, Produit>;
pub type EchangeService<'c> = Crud<'c, Echange>;

impl Resource for Produit {
    type Input = ProduitInput;
    const COLLECTION: &'static str = endpoints::PRODUITS;
    const LABEL: &'static str = "produit";
}

impl Toggleable for Produit {
    fn statut(&self) -> Statut {
        self.statut
    }
    fn input_with_statut(&self, statut: Statut) -> ProduitInput {
        ProduitInput {
            libelle: self.libelle.clone(),
            description: self.description.clone(),
            prix: self.prix,
            quantite: self.quantite,
            statut: Some(statut),
        }
    }
}

impl Resource for Echange {
    type Input = EchangeInput;
    const COLLECTION: &'static str = endpoints::ECHANGES;
    const LABEL: &'static str = "echange";
}

impl Crud<'_, Echange> {
    pub async fn accept(&self, uuid: &str) -> Result<Echange, MarketplaceError> {
        self.set_statut(uuid, StatutEchange::Accepte).await
    }

    pub async fn refuse(&self, uuid: &str) -> Result<Echange, MarketplaceError> {
        self.set_statut(uuid, StatutEchange::Refuse).await
    }

    pub async fn cancel(&self, uuid: &str) -> Result<Echange, MarketplaceError> {
        self.set_statut(uuid, StatutEchange::Annule).await
    }

    /// Only pending exchanges can change status.
    async fn set_statut(
        &self,
        uuid: &str,
        statut: StatutEchange,
    ) -> Result<Echange, MarketplaceError> {
        let current = self.get(uuid).await?;
        if current.statut != StatutEchange::EnAttente {
            return Err(MarketplaceError::InvalidInput(format!(
                "exchange {} is already {}",
                current.uuid, current.statut
            )));
        }
        tracing::info!("Setting echange {} to {}", uuid, statut);
        let input = EchangeInput {
            statut: Some(statut),
            ..EchangeInput::from(&current)
        };
        self.update(uuid, &input).await
    }
}
