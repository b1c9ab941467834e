//! Types shared by every entity.

use serde::{Deserialize, Serialize};

/// Primary identifier of every entity, as sent by the API.
pub type EntityUuid = String;

/// Activation status carried by most reference entities.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Statut {
    #[default]
    #[serde(rename = "actif", alias = "active", alias = "ACTIF")]
    Actif,

    #[serde(rename = "inactif", alias = "inactive", alias = "INACTIF")]
    Inactif,

    /// Any value the client does not know about.
    #[serde(rename = "inconnu", other)]
    Inconnu,
}

impl Statut {
    /// The opposite status. Unknown statuses toggle to active.
    pub fn toggled(self) -> Self {
        match self {
            Statut::Actif => Statut::Inactif,
            Statut::Inactif | Statut::Inconnu => Statut::Actif,
        }
    }
}

impl std::fmt::Display for Statut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Statut::Actif => "actif",
                Statut::Inactif => "inactif",
                Statut::Inconnu => "inconnu",
            }
        )
    }
}

impl std::str::FromStr for Statut {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "actif" | "active" => Ok(Statut::Actif),
            "inactif" | "inactive" => Ok(Statut::Inactif),
            _ => Err(()),
        }
    }
}
