//! Static registry of the REST paths used by the client.
//!
//! Collection paths are constants; item paths are built with [`item`] or the
//! dedicated helpers for action endpoints.

pub const PAYS: &str = "/pays";
pub const STATUTS_MATRIMONIAUX: &str = "/statuts-matrimoniaux";
pub const ROLES: &str = "/roles";
pub const UTILISATEURS: &str = "/utilisateurs";
pub const PRODUITS: &str = "/produits";
pub const ECHANGES: &str = "/echanges";
pub const FAVORIS: &str = "/favoris";

pub const MESSAGES_RECUS: &str = "/messagerie/recus";
pub const MESSAGES_ENVOYES: &str = "/messagerie/envoyes";
pub const MESSAGE_ENVOYER: &str = "/messagerie/envoyer";
pub const MESSAGES_NON_LUS: &str = "/messagerie/non-lus";
const MESSAGERIE: &str = "/messagerie";

/// Path of a single resource inside a collection, e.g. `/pays/{uuid}`.
pub fn item(collection: &str, uuid: &str) -> String {
    format!("{}/{}", collection.trim_end_matches('/'), uuid)
}

pub fn message(uuid: &str) -> String {
    item(MESSAGERIE, uuid)
}

pub fn message_lu(uuid: &str) -> String {
    format!("{}/lu", message(uuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_paths() {
        assert_eq!(item(PAYS, "abc"), "/pays/abc");
        assert_eq!(item("/roles/", "abc"), "/roles/abc");
        assert_eq!(message("m1"), "/messagerie/m1");
        assert_eq!(message_lu("m1"), "/messagerie/m1/lu");
    }
}
