//! Exchanges: a user proposing to trade for another user's product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityUuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Echange {
    pub uuid: EntityUuid,

    pub produit_uuid: EntityUuid,

    pub demandeur_uuid: EntityUuid,

    #[serde(default)]
    pub proprietaire_uuid: Option<EntityUuid>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, alias = "status")]
    pub statut: StatutEchange,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EchangeInput {
    pub produit_uuid: EntityUuid,
    pub demandeur_uuid: EntityUuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proprietaire_uuid: Option<EntityUuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<StatutEchange>,
}

impl From<&Echange> for EchangeInput {
    fn from(val: &Echange) -> Self {
        EchangeInput {
            produit_uuid: val.produit_uuid.clone(),
            demandeur_uuid: val.demandeur_uuid.clone(),
            proprietaire_uuid: val.proprietaire_uuid.clone(),
            message: val.message.clone(),
            statut: Some(val.statut),
        }
    }
}

/// Lifecycle of an exchange proposal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatutEchange {
    #[default]
    #[serde(rename = "en_attente", alias = "pending")]
    EnAttente,

    #[serde(rename = "accepte", alias = "accepted")]
    Accepte,

    #[serde(rename = "refuse", alias = "refused")]
    Refuse,

    #[serde(rename = "annule", alias = "cancelled")]
    Annule,

    #[serde(rename = "inconnu", other)]
    Inconnu,
}

impl std::fmt::Display for StatutEchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StatutEchange::EnAttente => "en_attente",
                StatutEchange::Accepte => "accepte",
                StatutEchange::Refuse => "refuse",
                StatutEchange::Annule => "annule",
                StatutEchange::Inconnu => "inconnu",
            }
        )
    }
}
