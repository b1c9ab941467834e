//! Private messages between users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityUuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub uuid: EntityUuid,

    #[serde(default)]
    pub expediteur_uuid: Option<EntityUuid>,

    pub destinataire_uuid: EntityUuid,

    #[serde(default)]
    pub sujet: String,

    #[serde(alias = "message")]
    pub contenu: String,

    /// Whether the recipient has opened the message.
    #[serde(default, alias = "lu")]
    pub est_lu: bool,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /messagerie/envoyer`. The sender is taken from the session.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessageInput {
    pub destinataire_uuid: EntityUuid,
    pub sujet: String,
    pub contenu: String,
}
