// HTTP surface tests

use actix_web::{test, web, App};
use serde_json::json;

use matrimony_match::config::MatchingSettings;
use matrimony_match::core::Matcher;
use matrimony_match::models::ScoreMatchesResponse;
use matrimony_match::routes::{configure_routes, matches::AppState};

fn app_state() -> AppState {
    AppState {
        matcher: Matcher::with_default_weights(),
        matching: MatchingSettings {
            max_pool_size: 3,
            ..Default::default()
        },
    }
}

fn score_body() -> serde_json::Value {
    json!({
        "seeker": { "seekerId": "seeker-1", "star": "Rohini" },
        "preferences": {
            "ageRange": { "min": 25, "max": 30 },
            "heightRange": { "min": 160, "max": 175 },
            "religions": ["Hindu"]
        },
        "candidates": [
            { "id": "a", "age": 27, "heightCm": 165, "religion": "Hindu", "isVerified": true },
            { "id": "b", "age": 33, "heightCm": 165, "religion": "Hindu" }
        ],
        "minScore": 50,
        "minResults": 1
    })
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_score_matches_strict_pass() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(score_body())
        .to_request();
    let resp: ScoreMatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert!(!resp.fallback_applied);
    assert_eq!(resp.total_candidates, 2);
    assert_eq!(resp.matches.len(), 2);
    assert_eq!(resp.matches[0].profile.id, "a");
    assert_eq!(resp.matches[0].score, 93);
    assert_eq!(resp.matches[1].score, 81);
}

#[actix_web::test]
async fn test_score_matches_falls_back() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let mut body = score_body();
    body["preferences"]["religions"] = json!(["Jain"]);
    body["minScore"] = json!(90);

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(body)
        .to_request();
    let resp: ScoreMatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.fallback_applied);
    assert_eq!(resp.matches.len(), 1);
    assert!(resp.matches[0].is_fallback);
}

#[actix_web::test]
async fn test_relaxed_endpoint_tags_every_match() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/relaxed")
        .set_json(score_body())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    for m in matches {
        assert_eq!(m["isFallback"], json!(true));
        assert!(m["tags"].as_array().unwrap().contains(&json!("Flexible Match")));
    }
}

#[actix_web::test]
async fn test_inverted_range_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let mut body = score_body();
    body["preferences"]["ageRange"] = json!({ "min": 35, "max": 25 });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_oversized_pool_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let mut body = score_body();
    body["candidates"] = json!([
        { "id": "1", "age": 27, "heightCm": 165 },
        { "id": "2", "age": 27, "heightCm": 165 },
        { "id": "3", "age": 27, "heightCm": 165 },
        { "id": "4", "age": 27, "heightCm": 165 }
    ]);

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_json_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
