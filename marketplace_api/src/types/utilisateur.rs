//! Platform users across all roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityUuid, Statut};

/// A user account. Which pages a user sees depends on [`TypeUtilisateur`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Utilisateur {
    pub uuid: EntityUuid,

    pub nom: String,

    #[serde(default)]
    pub prenoms: Option<String>,

    pub email: String,

    #[serde(default)]
    pub telephone: Option<String>,

    #[serde(default, alias = "type")]
    pub type_utilisateur: TypeUtilisateur,

    #[serde(default)]
    pub role_uuid: Option<EntityUuid>,

    #[serde(default, alias = "status")]
    pub statut: Statut,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Utilisateur {
    /// "Prénoms Nom", or just the last name when no first names are known.
    pub fn full_name(&self) -> String {
        match self.prenoms.as_deref().map(str::trim) {
            Some(prenoms) if !prenoms.is_empty() => format!("{} {}", prenoms, self.nom),
            _ => self.nom.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UtilisateurInput {
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenoms: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    pub type_utilisateur: TypeUtilisateur,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_uuid: Option<EntityUuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<Statut>,
}

impl From<&Utilisateur> for UtilisateurInput {
    fn from(val: &Utilisateur) -> Self {
        UtilisateurInput {
            nom: val.nom.clone(),
            prenoms: val.prenoms.clone(),
            email: val.email.clone(),
            telephone: val.telephone.clone(),
            type_utilisateur: val.type_utilisateur,
            role_uuid: val.role_uuid.clone(),
            statut: Some(val.statut),
        }
    }
}

/// The four kinds of accounts on the platform.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeUtilisateur {
    #[serde(rename = "admin", alias = "administrateur")]
    Admin,

    #[serde(rename = "agent")]
    Agent,

    #[serde(rename = "vendeur", alias = "vendor")]
    Vendeur,

    #[default]
    #[serde(rename = "utilisateur", alias = "user", other)]
    Utilisateur,
}

impl std::fmt::Display for TypeUtilisateur {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TypeUtilisateur::Admin => "admin",
                TypeUtilisateur::Agent => "agent",
                TypeUtilisateur::Vendeur => "vendeur",
                TypeUtilisateur::Utilisateur => "utilisateur",
            }
        )
    }
}

impl std::str::FromStr for TypeUtilisateur {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(TypeUtilisateur::Admin),
            "agent" => Ok(TypeUtilisateur::Agent),
            "vendeur" => Ok(TypeUtilisateur::Vendeur),
            "utilisateur" => Ok(TypeUtilisateur::Utilisateur),
            _ => Err(()),
        }
    }
}
