//! Marital statuses, a reference list used on user profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityUuid, Statut};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatutMatrimonial {
    pub uuid: EntityUuid,

    #[serde(alias = "nom")]
    pub libelle: String,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub statut: Statut,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatutMatrimonialInput {
    pub libelle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<Statut>,
}
