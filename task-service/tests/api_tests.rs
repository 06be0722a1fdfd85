mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use common::TEST_PASSWORD;
use reqwest::header::SET_COOKIE;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

fn task_body(title: &str, due_in: Duration) -> Value {
    json!({
        "title": title,
        "description": format!("{} description", title),
        "due_date": (Utc::now() + due_in).to_rfc3339(),
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("alice@example.com", "Alice").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Register success" }));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    let first = app.register("alice@example.com", "Alice").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let response = app.register("alice@example.com", "Alice Again").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Email has already been used");
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/user/register")
        .json(&json!({
            "email": "alice@example.com",
            "password": "12345",
            "name": "Alice",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/user/register")
        .json(&json!({
            "email": "not-an-email",
            "password": TEST_PASSWORD,
            "name": "Alice",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_sets_cookie_and_returns_public_user() {
    let app = TestApp::spawn().await;
    app.register("alice@example.com", "Alice").await;

    let response = app.login("alice@example.com", TEST_PASSWORD).await;

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("Login response has no Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("jwt="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=None"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=259200"));

    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert!(cookie.starts_with(&format!("jwt={}", token)));

    assert_eq!(body["message"], "Login success");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["name"], "Alice");
    assert!(body["user"]["id"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_unknown_email_issues_no_token() {
    let app = TestApp::spawn().await;

    let response = app.login("nobody@example.com", TEST_PASSWORD).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(SET_COOKIE).is_none());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Email not found");
    assert!(body.get("token").is_none());
    assert!(body.get("status_code").is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("alice@example.com", "Alice").await;

    let response = app.login("alice@example.com", "wrong-password").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(SET_COOKIE).is_none());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app.login("", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("alice@example.com", "Alice").await;

    let response = app
        .post_authenticated("/api/user/logout", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("Logout response has no Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("jwt=;") || cookie.starts_with("jwt=\"\""));
    assert!(cookie.contains("Max-Age=0"));

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Logout success");
}

#[tokio::test]
async fn test_logout_with_forged_cookie_still_clears_it() {
    let app = TestApp::spawn().await;

    let response = app
        .post_authenticated("/api/user/logout", "not-a-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_some());
}

#[tokio::test]
async fn test_protected_route_without_cookie() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/task")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User not authenticated");
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/user", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("alice@example.com", "Alice").await;

    let before = app
        .get_authenticated("/api/user", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(before.status(), StatusCode::OK);

    app.clock.advance(Duration::hours(25));

    let response = app
        .get_authenticated("/api/user", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_get_profile() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("alice@example.com", "Alice").await;

    let response = app
        .get_authenticated("/api/user", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["role"], "user");
    assert_eq!(body["user"]["is_verified"], false);
    assert!(body["user"]["photo"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("alice@example.com", "Alice").await;

    let profile: Value = app
        .get_authenticated("/api/user", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let user_id = profile["user"]["id"].as_str().unwrap();

    let response = app
        .put_authenticated(&format!("/api/user/{}", user_id), &token)
        .json(&json!({ "name": "Alice Liddell", "bio": "Down the rabbit hole" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["user"]["name"], "Alice Liddell");
    assert_eq!(body["user"]["bio"], "Down the rabbit hole");
    assert_eq!(body["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_update_other_profile_forbidden() {
    let app = TestApp::spawn().await;
    let alice = app.sign_up("alice@example.com", "Alice").await;
    let bob = app.sign_up("bob@example.com", "Bob").await;

    let profile: Value = app
        .get_authenticated("/api/user", &alice)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let alice_id = profile["user"]["id"].as_str().unwrap();

    let response = app
        .put_authenticated(&format!("/api/user/{}", alice_id), &bob)
        .json(&json!({ "name": "Mallory" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "You do not have permission to access this resource"
    );
}

#[tokio::test]
async fn test_create_and_get_task() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("alice@example.com", "Alice").await;

    let response = app
        .post_authenticated("/api/task", &token)
        .json(&json!({
            "title": "Write report",
            "description": "Quarterly numbers",
            "due_date": (Utc::now() + Duration::days(2)).to_rfc3339(),
            "priority": "high",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["task"]["title"], "Write report");
    assert_eq!(created["task"]["priority"], "high");
    assert_eq!(created["task"]["status"], "active");
    assert_eq!(created["task"]["completed"], false);

    let task_id = created["task"]["id"].as_str().unwrap();
    let response = app
        .get_authenticated(&format!("/api/task/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["task"], created["task"]);
}

#[tokio::test]
async fn test_create_task_requires_title_and_description() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("alice@example.com", "Alice").await;

    let response = app
        .post_authenticated("/api/task", &token)
        .json(&json!({
            "title": "",
            "description": "",
            "due_date": Utc::now().to_rfc3339(),
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Title and description are required");
}

#[tokio::test]
async fn test_task_of_another_user_is_forbidden() {
    let app = TestApp::spawn().await;
    let alice = app.sign_up("alice@example.com", "Alice").await;
    let bob = app.sign_up("bob@example.com", "Bob").await;

    let task = app
        .create_task(&alice, task_body("Alice's task", Duration::days(1)))
        .await;
    let path = format!("/api/task/{}", task["id"].as_str().unwrap());

    let read = app
        .get_authenticated(&path, &bob)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(read.status(), StatusCode::FORBIDDEN);

    let update = app
        .put_authenticated(&path, &bob)
        .json(&json!({ "title": "Hijacked" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::FORBIDDEN);

    let delete = app
        .delete_authenticated(&path, &bob)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    let owner_read = app
        .get_authenticated(&path, &alice)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(owner_read.status(), StatusCode::OK);

    let body: Value = owner_read.json().await.unwrap();
    assert_eq!(body["task"]["title"], "Alice's task");
}

#[tokio::test]
async fn test_update_and_delete_task() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("alice@example.com", "Alice").await;

    let task = app
        .create_task(&token, task_body("Laundry", Duration::days(1)))
        .await;
    let path = format!("/api/task/{}", task["id"].as_str().unwrap());

    let response = app
        .put_authenticated(&path, &token)
        .json(&json!({ "completed": true, "priority": "medium" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["task"]["completed"], true);
    assert_eq!(body["task"]["priority"], "medium");
    assert_eq!(body["task"]["title"], "Laundry");
    assert_eq!(body["task"]["user_id"], task["user_id"]);

    let response = app
        .delete_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Task deleted");

    let response = app
        .get_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Task not found");
}

#[tokio::test]
async fn test_malformed_task_id() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("alice@example.com", "Alice").await;

    let response = app
        .get_authenticated("/api/task/not-a-uuid", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_task_listing_views() {
    let app = TestApp::spawn().await;
    let alice = app.sign_up("alice@example.com", "Alice").await;
    let bob = app.sign_up("bob@example.com", "Bob").await;

    app.create_task(&alice, task_body("Later", Duration::days(3)))
        .await;
    app.create_task(&alice, task_body("Missed", -Duration::days(1)))
        .await;
    let mut done = task_body("Done", -Duration::days(2));
    done["completed"] = json!(true);
    done["priority"] = json!("high");
    app.create_task(&alice, done).await;
    app.create_task(&bob, task_body("Bob's", Duration::days(1)))
        .await;

    let titles = |body: Value| -> Vec<String> {
        body["tasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["title"].as_str().unwrap().to_string())
            .collect()
    };

    let list = |path: &'static str| {
        let request = app.get_authenticated(path, &alice);
        async move {
            let response = request.send().await.expect("Failed to execute request");
            assert_eq!(response.status(), StatusCode::OK);
            response.json::<Value>().await.unwrap()
        }
    };

    assert_eq!(
        titles(list("/api/task").await),
        vec!["Done", "Missed", "Later"]
    );
    assert_eq!(titles(list("/api/task/complete").await), vec!["Done"]);
    assert_eq!(
        titles(list("/api/task/pending").await),
        vec!["Missed", "Later"]
    );
    assert_eq!(titles(list("/api/task/overdue").await), vec!["Missed"]);
    assert_eq!(
        titles(list("/api/task?priority=high").await),
        vec!["Done"]
    );
    assert_eq!(
        titles(list("/api/task/pending?priority=").await),
        vec!["Missed", "Later"]
    );
}

#[tokio::test]
async fn test_task_listing_unknown_priority() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("alice@example.com", "Alice").await;

    let response = app
        .get_authenticated("/api/task?priority=urgent", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
