//! Products listed by vendors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityUuid, Statut};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Produit {
    pub uuid: EntityUuid,

    #[serde(alias = "nom")]
    pub libelle: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Unit price in the platform currency.
    #[serde(default)]
    pub prix: Option<f64>,

    #[serde(default)]
    pub quantite: Option<i64>,

    #[serde(default)]
    pub vendeur_uuid: Option<EntityUuid>,

    #[serde(default)]
    pub statut: Statut,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProduitInput {
    pub libelle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prix: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantite: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<Statut>,
}
