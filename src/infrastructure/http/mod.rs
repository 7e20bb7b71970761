//! HTTP REST API routes

mod creature_routes;
mod encounter_routes;
mod json_body;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Creature catalog routes
        .route("/api/creatures", get(creature_routes::list_creatures))
        .route(
            "/api/creatures/facets",
            get(creature_routes::get_creature_facets),
        )
        .route("/api/creatures/{id}", get(creature_routes::get_creature))
        // Encounter routes
        .route(
            "/api/encounters",
            get(encounter_routes::list_encounters).post(encounter_routes::create_encounter),
        )
        .route(
            "/api/encounters/{id}",
            get(encounter_routes::get_encounter).delete(encounter_routes::delete_encounter),
        )
        .route("/api/encounters/{id}/party", put(encounter_routes::update_party))
        .route(
            "/api/encounters/{id}/creatures",
            post(encounter_routes::add_creature).delete(encounter_routes::clear_roster),
        )
        .route(
            "/api/encounters/{id}/creatures/{index}",
            put(encounter_routes::update_quantity).delete(encounter_routes::remove_creature),
        )
        .route(
            "/api/encounters/{id}/analysis",
            get(encounter_routes::get_analysis),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::domain::value_objects::AnalysisSettings;
    use crate::infrastructure::catalog::InMemoryCatalog;
    use crate::infrastructure::config::AppConfig;

    fn app() -> Router {
        let config = AppConfig {
            server_port: 0,
            catalog_path: None,
            analysis: AnalysisSettings::default(),
        };
        let catalog = InMemoryCatalog::bundled().unwrap();
        let state = Arc::new(AppState::with_catalog(config, Arc::new(catalog)));
        create_routes().with_state(state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_search_creatures() {
        let app = app();

        let (status, body) = send(&app, "GET", "/api/creatures?search=goblin&organization=minion", None).await;
        assert_eq!(status, StatusCode::OK);
        let creatures = body.as_array().unwrap();
        assert!(!creatures.is_empty());
        assert!(creatures.iter().all(|c| c["organization"] == "minion"));
        assert!(creatures.iter().all(|c| c["add_label"] == "Add 4"));

        let (status, _) = send(&app, "GET", "/api/creatures?level=abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "GET", "/api/creatures/facets", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["types"].as_array().unwrap().contains(&json!("Goblinoid")));

        let (status, _) = send(&app, "GET", "/api/creatures/not-a-creature", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_encounter_flow() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/api/encounters",
            Some(json!({ "name": "Goblin Ambush" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["party"]["encounter_strength"], 40);
        assert_eq!(body["difficulty"]["tier"], "trivial");
        let id = body["id"].as_str().unwrap().to_string();

        // Goblin Sniper is a minion worth 3 per squad of four
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/encounters/{}/creatures", id),
            Some(json!({ "creature_id": "goblin-sniper" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["creatures"][0]["quantity"], 4);
        assert_eq!(body["total_value"], 3);

        let (_, body) = send(
            &app,
            "PUT",
            &format!("/api/encounters/{}/creatures/0", id),
            Some(json!({ "quantity": 1 })),
        )
        .await;
        assert_eq!(body["creatures"][0]["quantity"], 4);

        let (_, body) = send(
            &app,
            "PUT",
            &format!("/api/encounters/{}/creatures/0", id),
            Some(json!({ "quantity": 5 })),
        )
        .await;
        assert_eq!(body["creatures"][0]["quantity"], 5);
        assert_eq!(body["total_value"], 6);

        let (_, body) = send(
            &app,
            "PUT",
            &format!("/api/encounters/{}/party", id),
            Some(json!({ "hero_count": 0, "hero_level": 99 })),
        )
        .await;
        assert_eq!(body["party"]["hero_count"], 1);
        assert_eq!(body["party"]["hero_level"], 10);
        assert_eq!(body["party"]["encounter_strength"], 24);

        let (status, body) = send(&app, "GET", &format!("/api/encounters/{}/analysis", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_creatures"], 5);
        assert_eq!(body["organizations"][0]["organization_count"], 2);
        assert_eq!(body["organizations"][0]["verdict"], "balanced");

        let (status, _) = send(&app, "DELETE", &format!("/api/encounters/{}/creatures/3", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "DELETE", &format!("/api/encounters/{}/creatures/0", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_value"], 0);

        let (status, body) = send(&app, "GET", "/api/encounters", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, "DELETE", &format!("/api/encounters/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &format!("/api/encounters/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_oversized_input_is_capped() {
        let app = app();

        let (_, body) = send(&app, "POST", "/api/encounters", Some(json!({}))).await;
        let id = body["id"].as_str().unwrap().to_string();
        send(
            &app,
            "POST",
            &format!("/api/encounters/{}/creatures", id),
            Some(json!({ "creature_id": "ogre-juggernaut" })),
        )
        .await;

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/encounters/{}/creatures/0", id),
            Some(json!({ "quantity": 4294967295u64 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["creatures"][0]["quantity"], 999);
        assert_eq!(body["total_value"], 24 * 999);

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/encounters/{}/party", id),
            Some(json!({ "hero_count": 1000000000 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["party"]["hero_count"], 100);

        let (status, body) = send(&app, "GET", &format!("/api/encounters/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["party"]["encounter_strength"], 1000);
        assert_eq!(body["creatures"][0]["quantity"], 999);

        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/encounters/{}/creatures", id),
            Some(json!({ "creature_id": "ogre-juggernaut" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrongly_typed_body_is_bad_request() {
        let app = app();

        let (_, body) = send(&app, "POST", "/api/encounters", Some(json!({}))).await;
        let id = body["id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/encounters/{}/party", id),
            Some(json!({ "hero_level": 3.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/encounters/{}/creatures/0", id),
            Some(json!({ "quantity": "many" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_bad_ids() {
        let app = app();

        let (status, _) = send(&app, "GET", "/api/encounters/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "POST", "/api/encounters", Some(json!({}))).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/encounters/{}/creatures", id),
            Some(json!({ "creature_id": "tarrasque" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
