mod common;

use common::{TestEnvironment, TEST_TOKEN};
use futures::StreamExt;
use mealie_client::{ClientConfig, Error, MealieClient};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test_log::test(tokio::test)]
async fn test_get_with_query_returns_body_unchanged() {
    let env = TestEnvironment::authenticated().await;
    let body = json!([{ "id": "1", "recipeId": "abc", "groupId": "g1" }]);

    Mock::given(method("GET"))
        .and(path("/api/shared/recipes"))
        .and(query_param("recipe_id", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&env.server)
        .await;

    let result: Value = env
        .client
        .get_with("/api/shared/recipes", &json!({ "recipeId": "abc" }))
        .await
        .expect("request should succeed");

    assert_eq!(result, body);

    let requests = env.server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/api/shared/recipes");
    assert_eq!(requests[0].url.query(), Some("recipe_id=abc"));
}

#[tokio::test]
async fn test_undefined_query_params_are_omitted() {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/foods"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&env.server)
        .await;

    let _: Value = env
        .client
        .get_with(
            "/api/foods",
            &json!({ "page": 1, "perPage": 10, "search": null, "tags": ["a"] }),
        )
        .await
        .unwrap();
    let _: Value = env
        .client
        .get_with("/api/foods", &json!({ "search": null }))
        .await
        .unwrap();

    let requests = env.server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=1&per_page=10"));
    assert_eq!(requests[1].url.query(), None);
}

#[tokio::test]
async fn test_delete_with_no_content_resolves() {
    let env = TestEnvironment::authenticated().await;

    Mock::given(method("DELETE"))
        .and(path("/api/shared/recipes/xyz"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&env.server)
        .await;

    let result: Result<(), Error> = env.client.delete("/api/shared/recipes/xyz").await;
    assert!(result.is_ok(), "204 should resolve: {:?}", result);
}

#[tokio::test]
async fn test_empty_success_body_decodes_as_none() {
    let env = TestEnvironment::new().await;

    Mock::given(method("PUT"))
        .and(path("/api/households/preferences"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&env.server)
        .await;

    let result: Option<Value> = env
        .client
        .put("/api/households/preferences", &json!({ "recipePublic": true }))
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_blob_is_returned_raw_with_auth_header() {
    let env = TestEnvironment::authenticated().await;
    let image = vec![0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50];

    Mock::given(method("GET"))
        .and(path("/api/recipes/123/images/original.webp"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(image.clone(), "image/webp"))
        .expect(1)
        .mount(&env.server)
        .await;

    let blob = env
        .client
        .get_blob("/api/recipes/123/images/original.webp")
        .await
        .expect("blob request should succeed");

    assert_eq!(blob.content_type.as_deref(), Some("image/webp"));
    assert_eq!(&blob.bytes[..], image.as_slice());
}

#[tokio::test]
async fn test_blob_ignores_json_content_type() {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/media/recipes/1/assets/broken.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"{not json".to_vec(), "application/json"))
        .mount(&env.server)
        .await;

    let blob = env
        .client
        .get_blob("/api/media/recipes/1/assets/broken.json")
        .await
        .expect("binary verbs never parse JSON");
    assert_eq!(&blob.bytes[..], &b"{not json"[..]);
}

#[tokio::test]
async fn test_stream_yields_whole_body() {
    let env = TestEnvironment::authenticated().await;
    let payload: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

    Mock::given(method("GET"))
        .and(path("/api/media/recipes/1/images/original.webp"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(payload.clone(), "image/webp"))
        .mount(&env.server)
        .await;

    let mut stream = env
        .client
        .get_stream("/api/media/recipes/1/images/original.webp")
        .await
        .unwrap();

    let mut received = Vec::new();
    while let Some(chunk) = stream.next().await {
        received.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(received.len(), payload.len());
    assert!(received == payload);
}

#[tokio::test]
async fn test_not_found_becomes_normalized_error() {
    let env = TestEnvironment::authenticated().await;

    Mock::given(method("POST"))
        .and(path("/api/shared/recipes"))
        .respond_with(
            ResponseTemplate::new(404).set_body_raw(r#"{"detail":"not found"}"#, "application/json"),
        )
        .mount(&env.server)
        .await;

    let err = env
        .client
        .post::<Value, _>("/api/shared/recipes", &json!({ "recipeId": "missing" }))
        .await
        .unwrap_err();

    let api = err.as_api().expect("expected an API error");
    assert_eq!(api.status_code(), 404);
    assert_eq!(api.status_text(), "Not Found");
    assert_eq!(api.response(), r#"{"detail":"not found"}"#);
    assert_eq!(api.message(), "404 Not Found: not found");
}

#[tokio::test]
async fn test_server_error_with_empty_body() {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/app/about"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&env.server)
        .await;

    let err = env.client.get::<Value>("/api/app/about").await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.as_api().unwrap().response(), "");
}

#[tokio::test]
async fn test_invalid_json_on_success_is_a_decode_error() {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/app/about"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "text/html"))
        .mount(&env.server)
        .await;

    let err = env.client.get::<Value>("/api/app/about").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got {:?}", err);
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    let client = MealieClient::new(ClientConfig::new("http://127.0.0.1:1"));
    let err = client.get::<Value>("/api/app/about").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let env = TestEnvironment::new().await;

    Mock::given(method("POST"))
        .and(path("/api/foods"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "name": "onion" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "f1", "name": "onion" })))
        .expect(1)
        .mount(&env.server)
        .await;

    let created: Value = env
        .client
        .post("/api/foods", &json!({ "name": "onion" }))
        .await
        .unwrap();
    assert_eq!(created["id"], "f1");
}

#[tokio::test]
async fn test_trailing_slash_and_missing_leading_slash() {
    let server = wiremock::MockServer::start().await;
    let client = MealieClient::new(ClientConfig::new(format!("{}/", server.uri())));

    assert_eq!(client.base_url(), server.uri());
    assert!(!client.is_debug());
    assert_eq!(client.url("/api/foods"), format!("{}/api/foods", server.uri()));
    assert_eq!(client.url("api/foods"), format!("{}/api/foods", server.uri()));

    Mock::given(method("GET"))
        .and(path("/api/units"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let units: Vec<Value> = client.get("api/units").await.unwrap();
    assert!(units.is_empty());
}

#[tokio::test]
async fn test_concurrent_requests_share_one_client() {
    let env = TestEnvironment::authenticated().await;

    Mock::given(method("GET"))
        .and(path("/api/app/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "version": "v2.0.0" })))
        .expect(4)
        .mount(&env.server)
        .await;

    let (a, b, c, d) = tokio::join!(
        env.client.get::<Value>("/api/app/about"),
        env.client.get::<Value>("/api/app/about"),
        env.client.get::<Value>("/api/app/about"),
        env.client.get::<Value>("/api/app/about"),
    );
    for result in [a, b, c, d] {
        assert_eq!(result.unwrap()["version"], "v2.0.0");
    }
}

#[tokio::test]
async fn test_empty_body_verbs_send_no_payload() {
    let env = TestEnvironment::authenticated().await;
    assert!(env.client.is_debug());

    Mock::given(method("POST"))
        .and(path("/api/households/invitations/email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&env.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/recipes/r1/last-made"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&env.server)
        .await;

    let sent: Value = env
        .client
        .post_empty("/api/households/invitations/email")
        .await
        .unwrap();
    assert_eq!(sent["success"], true);

    let touched: Option<Value> = env.client.put_empty("/api/recipes/r1/last-made").await.unwrap();
    assert_eq!(touched, None);

    for request in env.server.received_requests().await.unwrap() {
        assert!(request.body.is_empty(), "{} carried a body", request.url);
        assert!(request.headers.get("content-type").is_none());
        assert_eq!(
            request.headers.get("authorization").and_then(|v| v.to_str().ok()),
            Some(format!("Bearer {}", TEST_TOKEN).as_str())
        );
    }
}
