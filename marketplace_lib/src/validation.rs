//! Input validation applied before any request is built.

use marketplace_api::types::{Statut, TypeElement, TypeUtilisateur};

use crate::error::MarketplaceError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_NAME_LENGTH: usize = 150;
pub const MAX_MESSAGE_LENGTH: usize = 5000;
pub const MAX_LIMIT: u64 = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, MarketplaceError> {
    if input.len() > max_len {
        return Err(MarketplaceError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(MarketplaceError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search string: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, MarketplaceError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a display name (country, role, product label...).
pub fn validate_name(input: &str) -> Result<String, MarketplaceError> {
    sanitize_text(input, MAX_NAME_LENGTH)
}

/// Validate a message body. Line breaks and tabs are kept.
pub fn validate_message(input: &str) -> Result<String, MarketplaceError> {
    if input.len() > MAX_MESSAGE_LENGTH {
        return Err(MarketplaceError::InvalidInput(format!(
            "message exceeds maximum length of {} bytes",
            MAX_MESSAGE_LENGTH
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || matches!(c, ' ' | '\n' | '\t'))
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(MarketplaceError::InvalidInput("message is empty".to_string()));
    }
    Ok(sanitized)
}

/// Validate an entity UUID and return it in canonical lowercase hyphenated form.
pub fn validate_uuid(input: &str) -> Result<String, MarketplaceError> {
    uuid::Uuid::parse_str(input.trim())
        .map(|u| u.hyphenated().to_string())
        .map_err(|_| {
            MarketplaceError::InvalidInput(format!(
                "invalid uuid '{}'. Expected format: 8-4-4-4-12 hex digits",
                input
            ))
        })
}

/// Whether two identifiers name the same UUID, whatever their case or format.
///
/// Values that are not UUIDs fall back to a case-insensitive comparison.
pub fn same_uuid(a: &str, b: &str) -> bool {
    match (uuid::Uuid::parse_str(a.trim()), uuid::Uuid::parse_str(b.trim())) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.trim().eq_ignore_ascii_case(b.trim()),
    }
}

/// Validate a 2-letter country code, normalized to uppercase.
pub fn validate_country_code(input: &str) -> Result<String, MarketplaceError> {
    let trimmed = input.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(MarketplaceError::InvalidInput(format!(
            "invalid country code '{}'. Expected a 2-letter ISO code (e.g., CI, SN)",
            input
        )))
    }
}

/// Minimal email sanity check: one `@` with a dotted domain.
pub fn validate_email(input: &str) -> Result<String, MarketplaceError> {
    let trimmed = input.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !trimmed.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(trimmed.to_lowercase())
    } else {
        Err(MarketplaceError::InvalidInput(format!(
            "invalid email '{}'",
            input
        )))
    }
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: u64) -> Result<u64, MarketplaceError> {
    if page < 1 {
        return Err(MarketplaceError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_limit(limit: u64) -> Result<u64, MarketplaceError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(MarketplaceError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }
    Ok(limit)
}

/// Validate a status string: case-insensitive, accepts French and English spellings.
pub fn validate_statut(input: &str) -> Result<Statut, MarketplaceError> {
    input.trim().parse::<Statut>().map_err(|_| {
        MarketplaceError::InvalidInput(format!(
            "unknown status '{}'. Valid values: actif, inactif",
            input
        ))
    })
}

pub fn validate_type_element(input: &str) -> Result<TypeElement, MarketplaceError> {
    input.trim().to_lowercase().parse::<TypeElement>().map_err(|_| {
        MarketplaceError::InvalidInput(format!(
            "unknown element type '{}'. Valid values: produit, boutique, vendeur, annonce",
            input
        ))
    })
}

pub fn validate_type_utilisateur(input: &str) -> Result<TypeUtilisateur, MarketplaceError> {
    input
        .trim()
        .to_lowercase()
        .parse::<TypeUtilisateur>()
        .map_err(|_| {
            MarketplaceError::InvalidInput(format!(
                "unknown user type '{}'. Valid values: admin, agent, vendeur, utilisateur",
                input
            ))
        })
}
