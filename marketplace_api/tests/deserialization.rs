use marketplace_api::types::{
    Favori, Pays, Role, Statut, TypeElement, TypeUtilisateur, Utilisateur,
};
use marketplace_api::{normalize_detail, normalize_list, PageRequest};
use serde_json::Value;

fn load_fixture(name: &str) -> Value {
    let raw = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn deserialize_pays_page() {
    let raw = load_fixture("pays_paginated.json");
    let page = normalize_list::<Pays>(&raw, PageRequest::new(1, 10));
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 54);
    assert_eq!(page.page, 1);
    assert_eq!(page.pages, 6);

    let ci = &page.items[0];
    assert_eq!(ci.nom, "Côte d'Ivoire");
    assert_eq!(ci.code, "CI");
    assert_eq!(ci.indicatif.as_deref(), Some("+225"));
    assert_eq!(ci.statut, Statut::Actif);
    assert!(ci.created_at.is_some());
    assert!(ci.updated_at.is_some());

    let sn = &page.items[1];
    assert_eq!(sn.nom, "Sénégal");
    assert_eq!(sn.statut, Statut::Inactif);
    assert!(sn.created_at.is_none());
}

#[test]
fn deserialize_nested_roles_skips_items_without_uuid() {
    let raw = load_fixture("roles_nested.json");
    let page = normalize_list::<Role>(&raw, PageRequest::new(1, 2));
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.pages, 2);

    let admin = &page.items[0];
    assert_eq!(admin.nom, "Administrateur");
    assert_eq!(admin.permissions, vec!["users.read", "users.write"]);
    assert_eq!(admin.statut, Statut::Actif);
    assert!(page.items[1].permissions.is_empty());
}

#[test]
fn deserialize_favoris_plural_field() {
    let raw = load_fixture("favoris_plural.json");
    let page = normalize_list::<Favori>(&raw, PageRequest::default());
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].type_element, TypeElement::Produit);
}

#[test]
fn deserialize_user_detail() {
    let raw = load_fixture("utilisateur_detail.json");
    let user: Utilisateur = normalize_detail(&raw).unwrap();
    assert_eq!(user.full_name(), "Aya Marie Kouassi");
    assert_eq!(user.type_utilisateur, TypeUtilisateur::Vendeur);
    assert!(user.created_at.is_some());
}

#[test]
fn unknown_enum_values_do_not_fail() {
    let raw = serde_json::json!({
        "uuid": "x",
        "nom": "Test",
        "email": "t@example.com",
        "type": "superviseur",
        "statut": "suspendu"
    });
    let user: Utilisateur = normalize_detail(&raw).unwrap();
    assert_eq!(user.type_utilisateur, TypeUtilisateur::Utilisateur);
    assert_eq!(user.statut, Statut::Inconnu);
}
