use marketplace_api::types::{Pays, PaysInput, Statut};
use marketplace_api::{endpoints, Client, Error, ErrorKind, ListQuery, Page, Query};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pays_json(uuid: &str, nom: &str) -> serde_json::Value {
    json!({ "uuid": uuid, "nom": nom, "code": "CI", "statut": "actif" })
}

#[tokio::test]
async fn list_pays_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pays"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": (0..10).map(|i| pays_json(&format!("p-{}", i), "Pays")).collect::<Vec<_>>(),
            "total": 35
        })))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let query = ListQuery::default().with_page(2).with_limit(10);
    let page: Page<Pays> = client.list(endpoints::PAYS, &query).await.unwrap();

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total, 35);
    assert_eq!(page.page, 2);
    assert_eq!(page.pages, 4);
}

#[tokio::test]
async fn list_unrecognized_shape_is_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pays"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let page: Page<Pays> = client
        .list(endpoints::PAYS, &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(page, Page::empty());
}

#[tokio::test]
async fn detail_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pays/p-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": pays_json("p-1", "Ghana") })),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let pays: Pays = client
        .detail(&endpoints::item(endpoints::PAYS, "p-1"))
        .await
        .unwrap();
    assert_eq!(pays.nom, "Ghana");
}

#[tokio::test]
async fn detail_without_entity_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pays/p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client
        .detail::<Pays>(&endpoints::item(endpoints::PAYS, "p-1"))
        .await;
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn status_404_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pays/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Pays introuvable" })),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .detail::<Pays>(&endpoints::item(endpoints::PAYS, "missing"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.server_message(), Some("Pays introuvable"));
}

#[tokio::test]
async fn create_sends_json_body() {
    let mock_server = MockServer::start().await;
    let input = PaysInput {
        nom: "Mali".to_string(),
        code: "ML".to_string(),
        indicatif: None,
        statut: Some(Statut::Actif),
    };

    Mock::given(method("POST"))
        .and(path("/pays"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "nom": "Mali", "code": "ML", "statut": "actif" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Pays créé",
            "data": { "uuid": "p-2", "nom": "Mali", "code": "ML" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let created: Pays = client.create(endpoints::PAYS, &input).await.unwrap();
    assert_eq!(created.uuid, "p-2");
}

#[tokio::test]
async fn validation_error_carries_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pays"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Données invalides",
            "errors": { "code": ["Le code est requis"] }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .create::<Pays, _>(endpoints::PAYS, &json!({ "nom": "X" }))
        .await
        .unwrap_err();
    let Error::Validation { fields, .. } = err else {
        panic!("expected validation error");
    };
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].field.as_deref(), Some("code"));
}

#[tokio::test]
async fn conflict_and_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/pays/p-1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "message": "Code déjà utilisé" })))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/pays/p-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let item = endpoints::item(endpoints::PAYS, "p-1");

    let err = client
        .update::<Pays, _>(&item, &json!({ "nom": "X", "code": "CI" }))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let err = client.delete(&item).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn delete_with_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/pays/p-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    client
        .delete(&endpoints::item(endpoints::PAYS, "p-1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn malformed_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pays"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.list::<Pays>(endpoints::PAYS, &ListQuery::default()).await;
    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pays"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_options(marketplace_api::ClientOptions {
        base_url: format!("{}/", mock_server.uri()),
        token: Some("secret".to_string()),
        ..Default::default()
    })
    .unwrap();
    let page = client
        .list::<Pays>(endpoints::PAYS, &ListQuery::default())
        .await
        .unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let client = Client::with_base_url("http://127.0.0.1:1").unwrap();
    let err = client
        .list::<Pays>(endpoints::PAYS, &ListQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
