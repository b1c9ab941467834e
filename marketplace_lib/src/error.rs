//! Error types for the library layer.

use std::fmt;

use marketplace_api::{Error as ApiError, ErrorKind};

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation and configuration failures.
#[derive(Debug)]
pub enum MarketplaceError {
    /// An error from the underlying API client.
    Api(ApiError),
    /// User-provided input failed validation; no request was sent.
    InvalidInput(String),
    /// The environment did not describe a usable client configuration.
    Config(String),
}

impl MarketplaceError {
    /// Kind of the underlying API failure, if this is one.
    pub fn api_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// French copy shown to the person who triggered the action.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => format!("Saisie invalide : {}", msg),
            Self::Config(msg) => format!("Configuration invalide : {}", msg),
            Self::Api(e) => api_user_message(e),
        }
    }
}

fn api_user_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) | ApiError::InvalidUrl(_) => {
            "Impossible de joindre le serveur. Vérifiez votre connexion.".to_string()
        }
        ApiError::MalformedResponse(_) => "Réponse inattendue du serveur.".to_string(),
        ApiError::NotFound { message } => message
            .clone()
            .unwrap_or_else(|| "Ressource introuvable.".to_string()),
        ApiError::Conflict { message } => message
            .clone()
            .unwrap_or_else(|| "Cette ressource existe déjà.".to_string()),
        ApiError::Validation { message, fields } => {
            let head = message
                .clone()
                .unwrap_or_else(|| "Les données envoyées sont invalides.".to_string());
            if fields.is_empty() {
                return head;
            }
            let details: Vec<String> = fields
                .iter()
                .map(|f| match &f.field {
                    Some(field) => format!("{} : {}", field, f.message),
                    None => f.message.clone(),
                })
                .collect();
            format!("{} ({})", head, details.join(", "))
        }
        ApiError::HttpStatus { status, .. } => match status {
            401 => "Session expirée, veuillez vous reconnecter.".to_string(),
            403 => "Vous n'avez pas les droits nécessaires pour cette action.".to_string(),
            500..=599 => "Erreur serveur, veuillez réessayer plus tard.".to_string(),
            other => format!("Une erreur est survenue (code {}).", other),
        },
    }
}

impl fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MarketplaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for MarketplaceError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}
