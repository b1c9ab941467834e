//! Countries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityUuid, Statut};

/// A country as returned by the `/pays` endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pays {
    pub uuid: EntityUuid,

    /// Display name, e.g. "Côte d'Ivoire".
    #[serde(alias = "libelle")]
    pub nom: String,

    /// ISO 3166 code, e.g. "CI".
    #[serde(default)]
    pub code: String,

    /// International dialing prefix, e.g. "+225".
    #[serde(default, alias = "indicatif_telephonique")]
    pub indicatif: Option<String>,

    #[serde(default)]
    pub statut: Statut,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of a create or update request for a country.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PaysInput {
    pub nom: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicatif: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<Statut>,
}

impl From<&Pays> for PaysInput {
    fn from(val: &Pays) -> Self {
        PaysInput {
            nom: val.nom.clone(),
            code: val.code.clone(),
            indicatif: val.indicatif.clone(),
            statut: Some(val.statut),
        }
    }
}
