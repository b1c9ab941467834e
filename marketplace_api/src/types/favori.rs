//! Favorites: a user bookmarking a product, shop, vendor or listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityUuid;

/// A favorite is identified logically by `(utilisateur_uuid, type_element, element_uuid)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Favori {
    pub uuid: EntityUuid,

    pub utilisateur_uuid: EntityUuid,

    pub type_element: TypeElement,

    pub element_uuid: EntityUuid,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FavoriInput {
    pub utilisateur_uuid: EntityUuid,
    pub type_element: TypeElement,
    pub element_uuid: EntityUuid,
}

/// Kind of element a favorite points at.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeElement {
    #[serde(rename = "produit", alias = "product")]
    Produit,

    #[serde(rename = "boutique", alias = "shop")]
    Boutique,

    #[serde(rename = "vendeur", alias = "vendor")]
    Vendeur,

    #[serde(rename = "annonce")]
    Annonce,
}

impl std::fmt::Display for TypeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TypeElement::Produit => "produit",
                TypeElement::Boutique => "boutique",
                TypeElement::Vendeur => "vendeur",
                TypeElement::Annonce => "annonce",
            }
        )
    }
}

impl std::str::FromStr for TypeElement {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "produit" => Ok(TypeElement::Produit),
            "boutique" => Ok(TypeElement::Boutique),
            "vendeur" => Ok(TypeElement::Vendeur),
            "annonce" => Ok(TypeElement::Annonce),
            _ => Err(()),
        }
    }
}
