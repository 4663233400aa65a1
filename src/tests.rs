//! Integration tests for the Arteterapia backend.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::{Config, LogFormat};
use crate::db::{init_database, Repository};
use crate::{create_router, AppState};

const TEST_KEY: &str = "test-api-key";

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_psk(Some(TEST_KEY.to_string())).await
    }

    async fn with_psk(psk: Option<String>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        // Create config
        let config = Config {
            api_psk: psk.clone(),
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        };

        let state = AppState {
            repo,
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let mut client_builder = Client::builder();
        if let Some(key) = psk {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert("x-api-key", key.parse().unwrap());
            client_builder = client_builder.default_headers(headers);
        }

        TestFixture {
            client: client_builder.build().unwrap(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        (resp.status(), resp.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        (resp.status(), resp.json().await.unwrap())
    }

    async fn patch(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .patch(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        (resp.status(), resp.json().await.unwrap())
    }

    async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        (resp.status(), resp.json().await.unwrap())
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let resp = self.client.delete(self.url(path)).send().await.unwrap();
        (resp.status(), resp.json().await.unwrap())
    }

    /// Create the "Arte" forum and return its id.
    async fn create_arte_forum(&self) -> i64 {
        let (status, _) = self
            .post(
                "/forum",
                json!({
                    "name": "Arte",
                    "description": "Discussões sobre arte",
                    "tag": "geral"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, forums) = self.get("/forum").await;
        forums.as_array().unwrap().last().unwrap()["id"]
            .as_i64()
            .unwrap()
    }

    async fn create_topic(&self, forum_id: i64) -> Value {
        let (status, topic) = self
            .post(
                &format!("/forum/{}/topics", forum_id),
                json!({
                    "title": "Oi pessoal",
                    "author": "Ana",
                    "content": "Conteúdo de teste"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        topic
    }
}

// ==================== HEALTH & AUTH ====================

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_auth_missing_psk() {
    let fixture = TestFixture::new().await;

    // A client without the default header
    let resp = Client::new().get(fixture.url("/forum")).send().await.unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert!(body["error"].is_string());

    // Health stays open
    let resp = Client::new().get(fixture.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_auth_invalid_psk() {
    let fixture = TestFixture::new().await;

    let resp = Client::new()
        .get(fixture.url("/forum"))
        .header("x-api-key", "wrong-key")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_auth_bearer_token() {
    let fixture = TestFixture::new().await;

    let resp = Client::new()
        .get(fixture.url("/forum"))
        .header("Authorization", format!("Bearer {}", TEST_KEY))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_open_without_configured_psk() {
    let fixture = TestFixture::with_psk(None).await;

    let (status, forums) = fixture.get("/forum").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(forums, json!([]));
}

// ==================== FORUM ====================

#[tokio::test]
async fn test_arte_end_to_end() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/forum",
            json!({
                "name": "Arte",
                "description": "Discussões sobre arte",
                "tag": "geral"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Fórum criado com sucesso");

    let (status, forums) = fixture.get("/forum").await;
    assert_eq!(status, StatusCode::OK);
    let forum = &forums[0];
    assert_eq!(forum["name"], "Arte");
    assert_eq!(forum["topicsCount"], 0);
    let forum_id = forum["id"].as_i64().unwrap();

    let topic = fixture.create_topic(forum_id).await;
    assert_eq!(topic["forumId"], forum_id);
    assert_eq!(topic["repliesCount"], 0);
    let topic_id = topic["id"].as_i64().unwrap();

    let (_, forum) = fixture.get(&format!("/forum/{}", forum_id)).await;
    assert_eq!(forum["topicsCount"], 1);

    let replies_path = format!("/forum/{}/topics/{}/replies", forum_id, topic_id);
    let (status, reply) = fixture
        .post(&replies_path, json!({"author": "Bia", "text": "Concordo!"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(reply["accepted"], false);
    let reply_id = reply["id"].as_i64().unwrap();

    let (_, topic) = fixture
        .get(&format!("/forum/{}/topics/{}", forum_id, topic_id))
        .await;
    assert_eq!(topic["repliesCount"], 1);

    let (status, body) = fixture.delete(&format!("/forum/{}", forum_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Fórum apagado com sucesso");

    let (status, body) = fixture
        .get(&format!("/forum/{}/topics/{}", forum_id, topic_id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = fixture
        .get(&format!("{}/{}", replies_path, reply_id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_forum_validation_errors() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post("/forum", json!({"name": "Ar", "tag": "geral"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dados inválidos");
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let details = body["details"].as_array().unwrap();
    assert_eq!(details[0]["path"], "description");
    assert_eq!(details[1]["path"], "name");
    assert_eq!(
        details[1]["message"],
        "O nome é obrigatório e deve ter pelo menos 3 caracteres."
    );

    // Nothing was stored
    let (_, forums) = fixture.get("/forum").await;
    assert_eq!(forums, json!([]));
}

#[tokio::test]
async fn test_topic_and_reply_validation_errors() {
    let fixture = TestFixture::new().await;
    let forum_id = fixture.create_arte_forum().await;

    let (status, body) = fixture
        .post(
            &format!("/forum/{}/topics", forum_id),
            json!({"title": "Oi", "author": "An", "content": "curto"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["details"],
        json!([
            {"path": "author", "message": "O autor é obrigatório e deve ter pelo menos 3 caracteres."},
            {"path": "content", "message": "O conteúdo é obrigatório e deve ter pelo menos 10 caracteres."},
            {"path": "title", "message": "O título é obrigatório e deve ter pelo menos 5 caracteres."}
        ])
    );

    let topic = fixture.create_topic(forum_id).await;
    let replies_path = format!("/forum/{}/topics/{}/replies", forum_id, topic["id"]);

    let (status, body) = fixture
        .post(&replies_path, json!({"author": "Bi", "text": "oi"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["details"],
        json!([
            {"path": "author", "message": "O autor é obrigatório."},
            {"path": "text", "message": "O texto é obrigatório e deve ter pelo menos 5 caracteres."}
        ])
    );

    // A mistyped field fails deserialization as a whole
    let (status, body) = fixture
        .post(
            &replies_path,
            json!({"author": "Bia", "text": "Concordo!", "accepted": "x"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["path"], "");

    // Nothing was stored
    let (_, replies) = fixture.get(&replies_path).await;
    assert_eq!(replies, json!([]));
    let (_, topics) = fixture.get(&format!("/forum/{}/topics", forum_id)).await;
    assert_eq!(topics.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_ids_are_bad_requests() {
    let fixture = TestFixture::new().await;
    let forum_id = fixture.create_arte_forum().await;

    let cases = [
        ("/forum/abc".to_string(), "ID do Fórum inválido."),
        (format!("/forum/{}/topics/xyz", forum_id), "ID do Tópico inválido."),
        (
            format!("/forum/{}/topics/1/replies/1a", forum_id),
            "ID da Resposta inválido.",
        ),
    ];

    for (path, message) in cases {
        let (status, body) = fixture.get(&path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", path);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert_eq!(body["error"], message);
    }
}

#[tokio::test]
async fn test_forum_not_found_messages() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/forum/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Fórum não encontrado");

    let (status, body) = fixture
        .post(
            "/forum/99/topics",
            json!({
                "title": "Oi pessoal",
                "author": "Ana",
                "content": "Conteúdo de teste"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Fórum pai não encontrado");

    let forum_id = fixture.create_arte_forum().await;
    let (status, body) = fixture
        .post(
            &format!("/forum/{}/topics/5/replies", forum_id),
            json!({"author": "Bia", "text": "Concordo!"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Tópico pai não encontrado");

    let (status, body) = fixture.delete(&format!("/forum/{}/topics/5", forum_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Tópico não encontrado");
}

#[tokio::test]
async fn test_patch_forum_changes_only_given_fields() {
    let fixture = TestFixture::new().await;
    let forum_id = fixture.create_arte_forum().await;
    let path = format!("/forum/{}", forum_id);
    let (_, before) = fixture.get(&path).await;

    let (status, updated) = fixture.patch(&path, json!({"tag": "x"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["tag"], "x");

    let (_, after) = fixture.get(&path).await;
    let mut expected = before.clone();
    expected["tag"] = json!("x");
    assert_eq!(after, expected);

    // Update schemas keep the length rules for supplied fields
    let (status, body) = fixture.patch(&path, json!({"name": "A"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["path"], "name");
}

#[tokio::test]
async fn test_concurrent_topic_creation() {
    let fixture = Arc::new(TestFixture::new().await);
    let forum_id = fixture.create_arte_forum().await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let fixture = fixture.clone();
        handles.push(tokio::spawn(async move {
            fixture.create_topic(forum_id).await["id"].as_i64().unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);

    let (_, forum) = fixture.get(&format!("/forum/{}", forum_id)).await;
    assert_eq!(forum["topicsCount"], 10);
}

#[tokio::test]
async fn test_topic_from_other_forum_is_not_found() {
    let fixture = TestFixture::new().await;
    let first = fixture.create_arte_forum().await;
    let second = fixture.create_arte_forum().await;
    let topic_id = fixture.create_topic(first).await["id"].as_i64().unwrap();

    let (status, _) = fixture
        .get(&format!("/forum/{}/topics/{}", second, topic_id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, topics) = fixture.get(&format!("/forum/{}/topics", second)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(topics, json!([]));
}

#[tokio::test]
async fn test_reply_update_and_delete() {
    let fixture = TestFixture::new().await;
    let forum_id = fixture.create_arte_forum().await;
    let topic_id = fixture.create_topic(forum_id).await["id"].as_i64().unwrap();
    let replies_path = format!("/forum/{}/topics/{}/replies", forum_id, topic_id);

    let (_, reply) = fixture
        .post(&replies_path, json!({"author": "Bia", "text": "Concordo!"}))
        .await;
    let reply_path = format!("{}/{}", replies_path, reply["id"]);

    let (status, updated) = fixture.patch(&reply_path, json!({"accepted": true})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["accepted"], true);
    assert_eq!(updated["text"], "Concordo!");

    let (status, fetched) = fixture.get(&reply_path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);

    let (status, body) = fixture.delete(&reply_path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Resposta apagada com sucesso");

    let (_, topic) = fixture
        .get(&format!("/forum/{}/topics/{}", forum_id, topic_id))
        .await;
    assert_eq!(topic["repliesCount"], 0);

    let (status, replies) = fixture.get(&replies_path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replies, json!([]));
}

#[tokio::test]
async fn test_delete_topic_decrements_forum_count() {
    let fixture = TestFixture::new().await;
    let forum_id = fixture.create_arte_forum().await;
    let topic_id = fixture.create_topic(forum_id).await["id"].as_i64().unwrap();
    fixture.create_topic(forum_id).await;

    let (status, body) = fixture
        .delete(&format!("/forum/{}/topics/{}", forum_id, topic_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Tópico apagado com sucesso");

    let (_, forum) = fixture.get(&format!("/forum/{}", forum_id)).await;
    assert_eq!(forum["topicsCount"], 1);
}

// ==================== NOTICES ====================

#[tokio::test]
async fn test_notice_crud() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/notice",
            json!({"title": "Aula cancelada", "content": "Sem aula na sexta."}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Aviso criado com sucesso");

    let (_, notices) = fixture.get("/notice").await;
    let id = notices[0]["id"].as_str().unwrap().to_string();
    assert!(notices[0]["createdAt"].is_string());

    let (status, body) = fixture
        .put(&format!("/notice/{}", id), json!({"title": "Aula remarcada"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registro editado com sucesso");

    let (_, notice) = fixture.get(&format!("/notice/{}", id)).await;
    assert_eq!(notice["title"], "Aula remarcada");
    assert_eq!(notice["content"], "Sem aula na sexta.");

    let (status, body) = fixture.delete(&format!("/notice/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registro excluído com sucesso");

    let (status, body) = fixture.get(&format!("/notice/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dado não encontrado");
}

#[tokio::test]
async fn test_notice_requires_title() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.post("/notice", json!({"content": "Texto"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["path"], "title");
}

// ==================== SCHOOL DATA ====================

#[tokio::test]
async fn test_school_data_crud() {
    let fixture = TestFixture::new().await;

    let course = json!({
        "name": "Arteterapia I",
        "students": [{
            "name": "Carla",
            "birthdate": "2001-05-04",
            "registerId": "R-1",
            "document": "123",
            "status": "active"
        }],
        "classList": [{
            "name": "Turma A",
            "times": [{"dateTime": "19:00", "dayOfWeek": "segunda"}]
        }]
    });

    let (status, body) = fixture
        .post("/school-data", json!({"courseList": [course]}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Registro criado com sucesso");

    let (_, records) = fixture.get("/school-data").await;
    let id = records[0]["id"].as_str().unwrap().to_string();
    let path = format!("/school-data/{}", id);

    let (status, record) = fixture.get(&path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["courseList"][0]["students"][0]["status"], "active");
    assert_eq!(
        record["courseList"][0]["classList"][0]["times"][0]["dayOfWeek"],
        "segunda"
    );

    let (status, body) = fixture.put(&path, json!({"courseList": []})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registro editado com sucesso");
    let (_, record) = fixture.get(&path).await;
    assert_eq!(record["courseList"], json!([]));

    let (status, _) = fixture.delete(&path).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = fixture.get(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dado não encontrado");
}

// ==================== USERS ====================

fn ana() -> Value {
    json!({
        "name": "Ana Souza",
        "email": "ana@example.com",
        "password": "segredo123",
        "city": "Recife"
    })
}

#[tokio::test]
async fn test_user_registration_and_login() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.post("/user", ana()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Usuário criado com sucesso");

    let (status, body) = fixture.post("/user", ana()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Usuário já cadastrado.");

    let (status, user) = fixture.get("/user/ana@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Ana Souza");
    assert_eq!(user["city"], "Recife");
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());

    let (status, user) = fixture
        .post(
            "/user/login",
            json!({"email": "ana@example.com", "password": "segredo123"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["email"], "ana@example.com");

    let (status, body) = fixture
        .post(
            "/user/login",
            json!({"email": "ana@example.com", "password": "errada"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Dados de login incorretos.");
}

#[tokio::test]
async fn test_user_validation() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/user",
            json!({"name": "Ana Souza", "email": "not-an-email", "password": "123"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let paths: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["email", "password"]);
}

#[tokio::test]
async fn test_user_update_and_content() {
    let fixture = TestFixture::new().await;
    fixture.post("/user", ana()).await;

    let (status, body) = fixture
        .put(
            "/user/ana@example.com",
            json!({"city": "Olinda", "password": "novasenha"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Usuário editado com sucesso");

    let (status, _) = fixture
        .post(
            "/user/ana@example.com/content-note",
            json!({"contentId": "modulo-1", "itemId": 3, "note": "Rever exercício"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = fixture
        .post(
            "/user/ana@example.com/completed-content",
            json!({"contentId": "modulo-1", "itemId": 3}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, user) = fixture.get("/user/ana@example.com").await;
    assert_eq!(user["city"], "Olinda");
    assert_eq!(user["name"], "Ana Souza");
    assert_eq!(user["contentNotes"][0]["note"], "Rever exercício");
    assert_eq!(user["completedContent"][0]["itemId"], 3);

    let (status, _) = fixture
        .post(
            "/user/login",
            json!({"email": "ana@example.com", "password": "novasenha"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = fixture.delete("/user/ana@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Usuário excluído com sucesso");

    let (status, body) = fixture.get("/user/ana@example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Usuário não encontrado");

    let (status, _) = fixture
        .post(
            "/user/ana@example.com/content-note",
            json!({"contentId": "modulo-1", "itemId": 4, "note": "x"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
