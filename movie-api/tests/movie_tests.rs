mod common;

use common::TestApp;
use common::BLADE_RUNNER_ID;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_list_movies() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice1", "secret1").await;

    let response = app.get_authenticated("/movies", &token).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let movies = body["data"].as_array().unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0]["id"], BLADE_RUNNER_ID);
    assert_eq!(movies[0]["genre"]["name"], "Science Fiction");
    assert_eq!(movies[0]["director"]["birth_year"], 1937);
    assert_eq!(movies[0]["featured"], true);
}

#[tokio::test]
async fn test_get_movie_by_title() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice1", "secret1").await;

    let response = app
        .get_authenticated("/movies/Blade%20Runner", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["title"], "Blade Runner");
    assert_eq!(body["data"]["director"]["name"], "Ridley Scott");
    assert_eq!(
        body["data"]["image_url"],
        "https://images.example.com/blade-runner.jpg"
    );
}

#[tokio::test]
async fn test_unknown_title_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice1", "secret1").await;

    let response = app
        .get_authenticated("/movies/Nonexistent", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status_code"], 404);
}

#[tokio::test]
async fn test_get_genre() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice1", "secret1").await;

    let response = app
        .get_authenticated("/genres/Horror", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Horror");
    assert!(body["data"]["description"].is_string());

    let response = app
        .get_authenticated("/genres/Polka", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_director() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice1", "secret1").await;

    let response = app
        .get_authenticated("/directors/Ridley%20Scott", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Ridley Scott");
    assert_eq!(body["data"]["birth_year"], 1937);

    let response = app
        .get_authenticated("/directors/Nobody", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
