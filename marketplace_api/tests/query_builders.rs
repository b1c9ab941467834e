use marketplace_api::types::{Statut, TypeElement, TypeUtilisateur};
use marketplace_api::{
    FavoriQuery, ListQuery, MessageQuery, PageRequest, Query, SortDirection, UserQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/pays").unwrap()
}

#[test]
fn list_query_defaults() {
    let url = ListQuery::default().add_to_url(&base_url());
    insta::assert_snapshot!(url.to_string(), @"https://example.com/pays?page=1");
}

#[test]
fn list_query_all_common_fields() {
    let url = ListQuery::default()
        .with_page(3)
        .with_limit(25)
        .with_search("côte d'ivoire")
        .with_statut(Statut::Inactif)
        .with_sort_by("nom")
        .with_sort_direction(SortDirection::Asc)
        .add_to_url(&base_url());
    insta::assert_snapshot!(
        url.to_string(),
        @"https://example.com/pays?page=3&limit=25&search=c%C3%B4te+d%27ivoire&statut=inactif&sort=nom&order=asc"
    );
}

#[test]
fn sort_direction_only_sent_with_sort_field() {
    let url = ListQuery::default()
        .with_sort_direction(SortDirection::Asc)
        .add_to_url(&base_url());
    assert!(!url.query().unwrap().contains("order"));

    let url = ListQuery::default()
        .with_sort_by("created_at")
        .add_to_url(&base_url());
    assert!(url.query().unwrap().contains("sort=created_at&order=desc"));
}

#[test]
fn favori_query_filters() {
    let url = FavoriQuery::default()
        .with_utilisateur("u-1")
        .with_type_element(TypeElement::Produit)
        .with_element("p-9")
        .add_to_url(&base_url());
    insta::assert_snapshot!(
        url.to_string(),
        @"https://example.com/pays?page=1&utilisateur_uuid=u-1&type_element=produit&element_uuid=p-9"
    );
}

#[test]
fn user_query_filters() {
    let url = UserQuery::default()
        .with_role("r-1")
        .with_types(&[TypeUtilisateur::Agent, TypeUtilisateur::Vendeur])
        .with_limit(10)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("limit=10"));
    assert!(query.contains("role_uuid=r-1"));
    assert!(query.contains("type=agent&type=vendeur"));
}

#[test]
fn message_query_unread_only() {
    let url = MessageQuery::default().add_to_url(&base_url());
    assert!(!url.query().unwrap().contains("est_lu"));

    let url = MessageQuery::default().unread_only().add_to_url(&base_url());
    assert!(url.query().unwrap().contains("est_lu=false"));
}

#[test]
fn page_request_follows_query() {
    let query = ListQuery::default().with_page(2).with_limit(10);
    assert_eq!(query.page_request(), PageRequest::new(2, 10));

    let query = ListQuery::default();
    assert_eq!(
        query.page_request(),
        PageRequest {
            page: Some(1),
            limit: None
        }
    );
}
