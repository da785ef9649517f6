// tests/leaderboard_tests.rs

use recipeshare_backend::{config::Config, routes, state::AppState, store::Db};

/// Spawns the app on a random port with a freshly seeded store.
async fn spawn_app() -> String {
    let config = Config {
        bind_addr: "127.0.0.1:0".to_string(),
        jwt_secret: "test_secret_for_integration_tests".to_string(),
        jwt_expiration: 600,
        rust_log: "error".to_string(),
    };

    let state = AppState {
        db: Db::seeded(),
        config,
    };

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn register_user(client: &reqwest::Client, address: &str) -> (String, String) {
    let unique_name = format!("u_{}", &uuid::Uuid::new_v4().to_string()[..8]);
    let email = format!("{}@example.com", unique_name);

    let body: serde_json::Value = client
        .post(format!("{}/api/auth/register", address))
        .json(&serde_json::json!({
            "username": unique_name,
            "email": email,
            "password": "password123"
        }))
        .send()
        .await
        .expect("Register failed")
        .json()
        .await
        .expect("Failed to parse register json");

    let token = body["token"].as_str().expect("Token not found").to_string();
    (unique_name, token)
}

#[tokio::test]
async fn seeded_leaderboard_is_sorted_by_total_likes() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/api/leaderboard", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    let entries = body.as_array().expect("Expected an array");
    assert_eq!(entries.len(), 2);

    // chef_master owns the 78-like recipe, foodie123 the 45-like one
    assert_eq!(entries[0]["username"], "chef_master");
    assert_eq!(entries[0]["totalLikes"], 78);
    assert_eq!(entries[1]["username"], "foodie123");
    assert_eq!(entries[1]["totalLikes"], 45);
}

#[tokio::test]
async fn leaderboard_supports_alternate_sort_metrics() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let by_followers: serde_json::Value = client
        .get(format!("{}/api/leaderboard?sort=followers", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_followers[0]["username"], "chef_master");
    assert_eq!(by_followers[0]["followers"], 320);

    let by_posts: serde_json::Value = client
        .get(format!("{}/api/leaderboard?sort=posts", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_posts[0]["username"], "chef_master");
    assert_eq!(by_posts[0]["posts"], 25);
}

#[tokio::test]
async fn leaderboard_rejects_unknown_sort() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/leaderboard?sort=bogus", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn leaderboard_reflects_new_engagement() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let (_, token) = register_user(&client, &address).await;

    // Like foodie123's recipe; their total moves from 45 to 46
    client
        .post(format!("{}/api/recipes/1/like", address))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Like failed");

    let body: serde_json::Value = client
        .get(format!("{}/api/leaderboard", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let foodie = body
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["username"] == "foodie123")
        .expect("foodie123 on the leaderboard");
    assert_eq!(foodie["totalLikes"], 46);
}

#[tokio::test]
async fn new_user_ranks_with_zero_total() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let (username, _token) = register_user(&client, &address).await;

    let body: serde_json::Value = client
        .get(format!("{}/api/leaderboard", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 3);

    let newcomer = entries
        .iter()
        .find(|e| e["username"] == username.as_str())
        .expect("new user on the leaderboard");
    assert_eq!(newcomer["totalLikes"], 0);

    // Zero likes ranks last
    assert_eq!(entries[2]["username"], username.as_str());
}

#[tokio::test]
async fn profile_embeds_user_recipes() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/api/users/2", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert_eq!(body["username"], "chef_master");
    assert_eq!(body["followers"], 320);

    let recipes = body["recipes"].as_array().expect("Expected recipes array");
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["title"], "Beef Tacos");
}

#[tokio::test]
async fn profile_unknown_user_is_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/users/999", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
}
