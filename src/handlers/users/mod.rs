//! User resource handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handler::list_users)
                .post(handler::create_user)
                .options(handler::collection_options),
        )
        .route(
            "/users/{id}",
            get(handler::get_user)
                .put(handler::replace_user)
                .patch(handler::patch_user)
                .delete(handler::delete_user),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::{header, Method, StatusCode};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::test_utils::test_app::{create_test_app, send, TEST_HOST};

    async fn create(app: &axum::Router, body: Value) -> Uuid {
        let response = send(app, Method::POST, "/api/users", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED);
        serde_json::from_value(response.body).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (app, _) = create_test_app();

        let response = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({ "firstName": "Ada", "lastName": "Lovelace", "login": "ada" })),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED);

        let id: Uuid = serde_json::from_value(response.body.clone()).unwrap();
        assert_eq!(
            response.header(header::LOCATION.as_str()),
            Some(format!("http://{}/api/users/{}", TEST_HOST, id))
        );

        let response = send(&app, Method::GET, &format!("/api/users/{}", id), None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["id"], json!(id));
        assert_eq!(response.body["login"], "ada");
        assert_eq!(response.body["firstName"], "Ada");
        assert_eq!(response.body["lastName"], "Lovelace");
        assert_eq!(response.body["fullName"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_head_returns_no_body() {
        let (app, _) = create_test_app();
        let id = create(&app, json!({ "login": "ada" })).await;

        let response = send(&app, Method::HEAD, &format!("/api/users/{}", id), None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, Value::Null);

        let response = send(&app, Method::HEAD, &format!("/api/users/{}", Uuid::new_v4()), None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let (app, _) = create_test_app();
        let response = send(&app, Method::GET, &format!("/api/users/{}", Uuid::new_v4()), None).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_with_bad_login_is_unprocessable() {
        let (app, repo) = create_test_app();
        let response = send(&app, Method::POST, "/api/users", Some(json!({ "login": "a b!" }))).await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
        assert!(response.body["error"]["details"]["login"].is_array());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_without_login_is_unprocessable() {
        let (app, _) = create_test_app();
        let response = send(&app, Method::POST, "/api/users", Some(json!({ "firstName": "Ada" }))).await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.body["error"]["details"]["login"].is_array());
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_is_bad_request() {
        let (app, _) = create_test_app();

        let response = send(&app, Method::POST, "/api/users", None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);

        let response = send(&app, Method::POST, "/api/users", Some(json!(42))).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_malformed_login_is_unprocessable() {
        let (app, repo) = create_test_app();

        let response = send(&app, Method::POST, "/api/users", Some(json!({ "login": ["ada"] }))).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.body["error"]["details"]["login"].is_array());

        let response = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({ "firstName": 7, "login": "ada" })),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_rejects_non_decimal_numerals() {
        let (app, repo) = create_test_app();
        let response = send(&app, Method::POST, "/api/users", Some(json!({ "login": "ada²" }))).await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.body["error"]["details"]["login"].is_array());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_with_malformed_field_is_unprocessable() {
        let (app, repo) = create_test_app();
        let response = send(
            &app,
            Method::PUT,
            &format!("/api/users/{}", Uuid::new_v4()),
            Some(json!({ "firstName": "A", "lastName": "B", "login": { "x": 1 } })),
        )
        .await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        let details = &response.body["error"]["details"];
        assert!(details["login"].is_array());
        assert!(details["firstName"].is_null());
        assert!(repo.is_empty().await);

        let response = send(
            &app,
            Method::PUT,
            &format!("/api/users/{}", Uuid::new_v4()),
            Some(json!("ada")),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_put_inserts_then_updates() {
        let (app, _) = create_test_app();
        let id = Uuid::new_v4();
        let uri = format!("/api/users/{}", id);

        let response = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({ "firstName": "Ada", "lastName": "Lovelace", "login": "ada" })),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body, json!(id));
        assert_eq!(
            response.header(header::LOCATION.as_str()),
            Some(format!("http://{}/api/users/{}", TEST_HOST, id))
        );

        let response = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({ "firstName": "Ada", "lastName": "Byron", "login": "ada", "id": Uuid::new_v4() })),
        )
        .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);

        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.body["id"], json!(id));
        assert_eq!(response.body["lastName"], "Byron");
    }

    #[tokio::test]
    async fn test_put_validation() {
        let (app, _) = create_test_app();

        let response = send(
            &app,
            Method::PUT,
            &format!("/api/users/{}", Uuid::nil()),
            Some(json!({ "firstName": "Ada", "lastName": "Lovelace", "login": "ada" })),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);

        let response = send(&app, Method::PUT, &format!("/api/users/{}", Uuid::new_v4()), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);

        let response = send(
            &app,
            Method::PUT,
            &format!("/api/users/{}", Uuid::new_v4()),
            Some(json!({ "login": "a_b" })),
        )
        .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        let details = &response.body["error"]["details"];
        assert!(details["firstName"].is_array());
        assert!(details["lastName"].is_array());
        assert!(details["login"].is_array());
    }

    #[tokio::test]
    async fn test_patch_last_name() {
        let (app, _) = create_test_app();
        let id = create(&app, json!({ "firstName": "Ada", "lastName": "Lovelace", "login": "ada" })).await;
        let uri = format!("/api/users/{}", id);

        let response = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!([{ "op": "replace", "path": "/lastName", "value": "Byron" }])),
        )
        .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);

        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.body["lastName"], "Byron");
        assert_eq!(response.body["firstName"], "Ada");
        assert_eq!(response.body["login"], "ada");
    }

    #[tokio::test]
    async fn test_patch_op_names_ignore_case() {
        let (app, _) = create_test_app();
        let id = create(&app, json!({ "firstName": "Ada", "lastName": "Lovelace", "login": "ada" })).await;
        let uri = format!("/api/users/{}", id);

        let response = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!([{ "op": "Replace", "path": "/LastName", "value": "Byron" }])),
        )
        .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);

        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.body["lastName"], "Byron");
    }

    #[tokio::test]
    async fn test_patch_to_empty_login_is_rejected() {
        let (app, _) = create_test_app();
        let id = create(&app, json!({ "firstName": "Ada", "lastName": "Lovelace", "login": "ada" })).await;
        let uri = format!("/api/users/{}", id);

        let response = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!([{ "op": "replace", "path": "/login", "value": "" }])),
        )
        .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.body["error"]["details"]["login"].is_array());

        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.body["login"], "ada");
    }

    #[tokio::test]
    async fn test_patch_edge_cases() {
        let (app, _) = create_test_app();

        let response = send(
            &app,
            Method::PATCH,
            &format!("/api/users/{}", Uuid::new_v4()),
            Some(json!([{ "op": "replace", "path": "/lastName", "value": "Byron" }])),
        )
        .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);

        let id = create(&app, json!({ "firstName": "Ada", "lastName": "Lovelace", "login": "ada" })).await;
        let response = send(&app, Method::PATCH, &format!("/api/users/{}", id), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (app, _) = create_test_app();
        let id = create(&app, json!({ "login": "ada" })).await;
        let uri = format!("/api/users/{}", id);

        assert_eq!(send(&app, Method::DELETE, &uri, None).await.status, StatusCode::NO_CONTENT);
        assert_eq!(send(&app, Method::DELETE, &uri, None).await.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_clamps_page_size() {
        let (app, _) = create_test_app();
        for i in 0..25 {
            create(&app, json!({ "login": format!("user{:02}", i) })).await;
        }

        let response = send(&app, Method::GET, "/api/users?pageNumber=1&pageSize=50", None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.as_array().map(Vec::len), Some(20));

        let pagination: Value =
            serde_json::from_str(&response.header("x-pagination").unwrap()).unwrap();
        assert_eq!(pagination["pageSize"], 20);
        assert_eq!(pagination["currentPage"], 1);
        assert_eq!(pagination["previousPageLink"], Value::Null);
        assert_eq!(
            pagination["nextPageLink"],
            format!("http://{}/api/users?pageNumber=2&pageSize=20", TEST_HOST)
        );
        assert_eq!(pagination["totalCount"], 1);
        assert_eq!(pagination["totalPages"], 1);
    }

    #[tokio::test]
    async fn test_list_defaults_and_links() {
        let (app, _) = create_test_app();
        for login in ["carol", "alice", "bob"] {
            create(&app, json!({ "login": login })).await;
        }

        let response = send(&app, Method::GET, "/api/users", None).await;
        let logins: Vec<&str> = response
            .body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|u| u["login"].as_str())
            .collect();
        assert_eq!(logins, vec!["alice", "bob", "carol"]);

        let response = send(&app, Method::GET, "/api/users?pageNumber=3&pageSize=1", None).await;
        assert_eq!(response.body[0]["login"], "carol");
        let pagination: Value =
            serde_json::from_str(&response.header("x-pagination").unwrap()).unwrap();
        assert_eq!(
            pagination["previousPageLink"],
            format!("http://{}/api/users?pageNumber=2&pageSize=1", TEST_HOST)
        );
        assert_eq!(
            pagination["nextPageLink"],
            format!("http://{}/api/users?pageNumber=4&pageSize=1", TEST_HOST)
        );
    }

    #[tokio::test]
    async fn test_options_advertises_methods() {
        let (app, _) = create_test_app();
        let response = send(&app, Method::OPTIONS, "/api/users", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.header("allow"), Some("POST, GET, OPTIONS".to_string()));
    }
}
