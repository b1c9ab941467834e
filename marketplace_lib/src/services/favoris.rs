//! Favorites, including the toggle used by the "heart" buttons.

use marketplace_api::types::{Favori, FavoriInput};
use marketplace_api::{endpoints, Client, FavoriQuery, Page, Query};
use serde::Serialize;

use super::crud::{logged, Crud, Resource};
use crate::error::MarketplaceError;
use crate::validation::{same_uuid, validate_uuid};

const FIND_PAGE_SIZE: u64 = 100;

impl Resource for Favori {
    type Input = FavoriInput;
    const COLLECTION: &'static str = endpoints::FAVORIS;
    const LABEL: &'static str = "favori";
}

/// Result of [`FavoriService::toggle_favori`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleOutcome {
    /// `true` when the favorite was created, `false` when it was removed.
    pub added: bool,
    /// The created favorite, or the one that was removed.
    pub favori: Favori,
}

pub struct FavoriService<'c> {
    crud: Crud<'c, Favori>,
}

impl<'c> FavoriService<'c> {
    pub fn new(client: &'c Client) -> Self {
        Self {
            crud: Crud::new(client),
        }
    }

    pub async fn list(&self, query: &FavoriQuery) -> Result<Page<Favori>, MarketplaceError> {
        self.crud.list(query).await
    }

    pub async fn get(&self, uuid: &str) -> Result<Favori, MarketplaceError> {
        self.crud.get(uuid).await
    }

    pub async fn delete(&self, uuid: &str) -> Result<(), MarketplaceError> {
        self.crud.delete(uuid).await
    }

    /// Looks up the favorite with the same `(utilisateur, type, element)` tuple.
    ///
    /// Results are narrowed client-side as well, since the server may ignore
    /// the filter parameters. Pages are walked until a match is found or the
    /// last page reported by the server has been read.
    pub async fn find(&self, input: &FavoriInput) -> Result<Option<Favori>, MarketplaceError> {
        let input = validated(input)?;
        let mut page_number = 1;
        loop {
            let query = FavoriQuery::for_input(&input)
                .with_page(page_number)
                .with_limit(FIND_PAGE_SIZE);
            let page = self.crud.list(&query).await?;
            let last = page.items.is_empty() || page_number >= page.pages;
            if let Some(found) = page.items.into_iter().find(|f| same_favori(f, &input)) {
                return Ok(Some(found));
            }
            if last {
                return Ok(None);
            }
            page_number += 1;
        }
    }

    pub async fn is_favori(&self, input: &FavoriInput) -> Result<bool, MarketplaceError> {
        Ok(self.find(input).await?.is_some())
    }

    /// Creates the favorite, or updates it if one with the same tuple exists.
    ///
    /// The lookup and the write are two separate requests. Two concurrent calls
    /// for the same tuple can both miss the lookup and create duplicates.
    pub async fn create_favori(&self, input: &FavoriInput) -> Result<Favori, MarketplaceError> {
        let input = validated(input)?;
        match self.find(&input).await? {
            Some(existing) => {
                tracing::debug!("Favori {} already exists, updating", existing.uuid);
                self.crud.update(&existing.uuid, &input).await
            }
            None => self.crud.create(&input).await,
        }
    }

    /// Removes the favorite if it exists, otherwise creates it.
    ///
    /// Subject to the same check-then-act race as [`Self::create_favori`].
    pub async fn toggle_favori(
        &self,
        input: &FavoriInput,
    ) -> Result<ToggleOutcome, MarketplaceError> {
        let input = validated(input)?;
        match self.find(&input).await? {
            Some(existing) => {
                let path = endpoints::item(Favori::COLLECTION, &existing.uuid);
                self.crud
                    .client()
                    .delete(&path)
                    .await
                    .map_err(|e| logged(Favori::LABEL, "delete", e))?;
                tracing::info!("Removed favori {}", existing.uuid);
                Ok(ToggleOutcome {
                    added: false,
                    favori: existing,
                })
            }
            None => {
                let favori = self.crud.create(&input).await?;
                tracing::info!("Added favori {}", favori.uuid);
                Ok(ToggleOutcome {
                    added: true,
                    favori,
                })
            }
        }
    }
}

fn same_favori(favori: &Favori, input: &FavoriInput) -> bool {
    favori.type_element == input.type_element
        && same_uuid(&favori.utilisateur_uuid, &input.utilisateur_uuid)
        && same_uuid(&favori.element_uuid, &input.element_uuid)
}

fn validated(input: &FavoriInput) -> Result<FavoriInput, MarketplaceError> {
    Ok(FavoriInput {
        utilisateur_uuid: validate_uuid(&input.utilisateur_uuid)?,
        type_element: input.type_element,
        element_uuid: validate_uuid(&input.element_uuid)?,
    })
}
