//! Private messaging between users.

use marketplace_api::types::{Message, MessageInput};
use marketplace_api::{endpoints, normalize_list, Client, MessageQuery, Page, Query};
use serde_json::{json, Value};

use super::crud::logged;
use crate::error::MarketplaceError;
use crate::validation::{validate_message, validate_name, validate_uuid};

const LABEL: &str = "message";

pub struct MessageService<'c> {
    client: &'c Client,
}

impl<'c> MessageService<'c> {
    pub fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Messages received by the current user.
    pub async fn inbox(&self, query: &MessageQuery) -> Result<Page<Message>, MarketplaceError> {
        Ok(self
            .client
            .list(endpoints::MESSAGES_RECUS, query)
            .await
            .map_err(|e| logged(LABEL, "inbox", e))?)
    }

    /// Messages sent by the current user.
    pub async fn sent(&self, query: &MessageQuery) -> Result<Page<Message>, MarketplaceError> {
        Ok(self
            .client
            .list(endpoints::MESSAGES_ENVOYES, query)
            .await
            .map_err(|e| logged(LABEL, "sent", e))?)
    }

    pub async fn get(&self, uuid: &str) -> Result<Message, MarketplaceError> {
        let uuid = validate_uuid(uuid)?;
        Ok(self
            .client
            .detail(&endpoints::message(&uuid))
            .await
            .map_err(|e| logged(LABEL, "get", e))?)
    }

    pub async fn send(&self, input: &MessageInput) -> Result<Message, MarketplaceError> {
        let input = MessageInput {
            destinataire_uuid: validate_uuid(&input.destinataire_uuid)?,
            sujet: validate_name(&input.sujet)?,
            contenu: validate_message(&input.contenu)?,
        };
        let message: Message = self
            .client
            .create(endpoints::MESSAGE_ENVOYER, &input)
            .await
            .map_err(|e| logged(LABEL, "send", e))?;
        tracing::info!("Sent message {} to {}", message.uuid, message.destinataire_uuid);
        Ok(message)
    }

    /// Marks a received message as read. The response body is not inspected.
    pub async fn mark_as_read(&self, uuid: &str) -> Result<(), MarketplaceError> {
        let uuid = validate_uuid(uuid)?;
        self.client
            .put_raw(&endpoints::message_lu(&uuid), &json!({ "est_lu": true }))
            .await
            .map_err(|e| logged(LABEL, "mark_as_read", e))?;
        Ok(())
    }

    /// Number of unread messages in the inbox.
    pub async fn unread_count(&self) -> Result<u64, MarketplaceError> {
        let query = MessageQuery::default().unread_only().with_limit(1);
        let raw = self
            .client
            .get_raw(endpoints::MESSAGES_NON_LUS, Some(&query as &(dyn Query + Sync)))
            .await
            .map_err(|e| logged(LABEL, "unread_count", e))?;
        Ok(count_from(&raw).unwrap_or_else(|| {
            normalize_list::<Value>(&raw, query.page_request()).total
        }))
    }

    pub async fn delete(&self, uuid: &str) -> Result<(), MarketplaceError> {
        let uuid = validate_uuid(uuid)?;
        Ok(self
            .client
            .delete(&endpoints::message(&uuid))
            .await
            .map_err(|e| logged(LABEL, "delete", e))?)
    }
}

// The unread endpoint answers with a bare number, `{count}`, `{data: {count}}`,
// or a list of messages depending on the backend version.
fn count_from(raw: &Value) -> Option<u64> {
    let as_count = |v: &Value| v.as_u64();
    as_count(raw)
        .or_else(|| raw.get("count").and_then(as_count))
        .or_else(|| raw.get("data").and_then(as_count))
        .or_else(|| raw.get("data").and_then(|d| d.get("count")).and_then(as_count))
}
