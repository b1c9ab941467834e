//! Generic list/get/create/update/delete facade shared by every resource.

use std::marker::PhantomData;

use marketplace_api::types::Statut;
use marketplace_api::{endpoints, Client, Page, Query};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::MarketplaceError;
use crate::validation::validate_uuid;

/// Describes one REST collection: its entity, request body and path.
pub trait Resource: DeserializeOwned {
    /// Body sent on create and update.
    type Input: Serialize + Sync;
    /// Collection path from [`marketplace_api::endpoints`].
    const COLLECTION: &'static str;
    /// Human-readable name used in log lines.
    const LABEL: &'static str;
}

/// Resources carrying an `actif`/`inactif` status that can be flipped.
pub trait Toggleable: Resource {
    fn statut(&self) -> Statut;
    /// Update body that keeps every field but replaces the status.
    fn input_with_statut(&self, statut: Statut) -> Self::Input;
}

/// CRUD service for a [`Resource`]. Errors are logged and returned unchanged.
pub struct Crud<'c, R> {
    client: &'c Client,
    _resource: PhantomData<fn() -> R>,
}

impl<'c, R: Resource> Crud<'c, R> {
    pub fn new(client: &'c Client) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub fn client(&self) -> &'c Client {
        self.client
    }

    /// Path of one entity after validating its UUID.
    pub(crate) fn item_path(uuid: &str) -> Result<String, MarketplaceError> {
        let uuid = validate_uuid(uuid)?;
        Ok(endpoints::item(R::COLLECTION, &uuid))
    }

    pub async fn list(&self, query: &(dyn Query + Sync)) -> Result<Page<R>, MarketplaceError> {
        let page = self
            .client
            .list::<R>(R::COLLECTION, query)
            .await
            .map_err(|e| logged(R::LABEL, "list", e))?;
        tracing::debug!(
            "Listed {} {} (page {}/{}, {} total)",
            page.items.len(),
            R::LABEL,
            page.page,
            page.pages,
            page.total
        );
        Ok(page)
    }

    pub async fn get(&self, uuid: &str) -> Result<R, MarketplaceError> {
        let path = Self::item_path(uuid)?;
        Ok(self
            .client
            .detail(&path)
            .await
            .map_err(|e| logged(R::LABEL, "get", e))?)
    }

    pub async fn create(&self, input: &R::Input) -> Result<R, MarketplaceError> {
        Ok(self
            .client
            .create(R::COLLECTION, input)
            .await
            .map_err(|e| logged(R::LABEL, "create", e))?)
    }

    pub async fn update(&self, uuid: &str, input: &R::Input) -> Result<R, MarketplaceError> {
        let path = Self::item_path(uuid)?;
        Ok(self
            .client
            .update(&path, input)
            .await
            .map_err(|e| logged(R::LABEL, "update", e))?)
    }

    pub async fn delete(&self, uuid: &str) -> Result<(), MarketplaceError> {
        let path = Self::item_path(uuid)?;
        Ok(self
            .client
            .delete(&path)
            .await
            .map_err(|e| logged(R::LABEL, "delete", e))?)
    }
}

impl<R: Toggleable> Crud<'_, R> {
    /// Reads the entity, flips `actif`⇄`inactif`, and writes it back.
    pub async fn toggle_status(&self, uuid: &str) -> Result<R, MarketplaceError> {
        let current = self.get(uuid).await?;
        let next = current.statut().toggled();
        tracing::info!("Setting {} {} to {}", R::LABEL, uuid, next);
        self.update(uuid, &current.input_with_statut(next)).await
    }
}

/// Logs a failed operation and hands the error back for propagation.
pub(crate) fn logged(label: &str, operation: &str, err: marketplace_api::Error) -> marketplace_api::Error {
    tracing::error!("{} {} failed: {}", label, operation, err);
    err
}
