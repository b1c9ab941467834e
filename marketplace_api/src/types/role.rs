//! Roles assigned to platform users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityUuid, Statut};

/// A role and the permission names it grants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Role {
    pub uuid: EntityUuid,

    #[serde(alias = "name", alias = "libelle")]
    pub nom: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub permissions: Vec<String>,

    #[serde(default, alias = "status")]
    pub statut: Statut,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoleInput {
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<Statut>,
}

impl From<&Role> for RoleInput {
    fn from(val: &Role) -> Self {
        RoleInput {
            nom: val.nom.clone(),
            description: val.description.clone(),
            permissions: val.permissions.clone(),
            statut: Some(val.statut),
        }
    }
}
