use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::admin::AdminPanel;
use crate::client::{Backend, ClubApi};
use crate::config::{MemoryTokenStore, SharedTokenStore};
use crate::constants::{CONTACT_PATH, LOGIN_PATH, VERIFY_PATH};
use crate::error::{ApiError, ApiResult};
use crate::session::SessionController;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "s3cret";
pub const TOKEN: &str = "token-abc";

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

struct Rule {
    method: &'static str,
    path: String,
    status: u16,
    body: Value,
}

#[derive(Default)]
struct State {
    events: Vec<Value>,
    team: Vec<Value>,
    gallery: Vec<Value>,
    next_id: u64,
    requests: Vec<Request>,
    rules: Vec<Rule>,
    verify: Option<ApiResult<Value>>,
    reject_token: bool,
}

/// In-memory stand-in for the club backend.
pub struct FakeBackend {
    state: Mutex<State>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 100,
                ..State::default()
            }),
        }
    }

    pub fn with_events(self, events: Vec<Value>) -> Self {
        self.state.lock().unwrap().events = events;
        self
    }

    pub fn with_team(self, team: Vec<Value>) -> Self {
        self.state.lock().unwrap().team = team;
        self
    }

    pub fn with_gallery(self, gallery: Vec<Value>) -> Self {
        self.state.lock().unwrap().gallery = gallery;
        self
    }

    pub fn with_verify(self, answer: ApiResult<Value>) -> Self {
        self.state.lock().unwrap().verify = Some(answer);
        self
    }

    /// Answer `method path` with an error status from now on.
    pub fn fail(&self, method: &'static str, path: &str, status: u16, body: Value) {
        self.state.lock().unwrap().rules.push(Rule {
            method,
            path: path.to_string(),
            status,
            body,
        });
    }

    /// Every non-auth request gets a 401 from now on.
    pub fn reject_token(&self) {
        self.state.lock().unwrap().reject_token = true;
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last_body(&self, method: &str) -> Option<Value> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method)
            .and_then(|r| r.body)
    }

    fn handle(&self, method: &'static str, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(Request {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        if let Some(rule) = state
            .rules
            .iter()
            .find(|r| r.method == method && r.path == path)
        {
            return Err(ApiError::from_response(rule.status, Some(rule.body.clone())));
        }

        if path == LOGIN_PATH {
            let body = body.cloned().unwrap_or(Value::Null);
            return if body["username"] == USERNAME && body["password"] == PASSWORD {
                Ok(json!({ "success": true, "data": { "token": TOKEN } }))
            } else {
                Err(ApiError::from_response(
                    401,
                    Some(json!({ "success": false, "error": "Invalid credentials" })),
                ))
            };
        }
        if path == VERIFY_PATH {
            return state.verify.clone().unwrap_or_else(|| Ok(json!({ "valid": true })));
        }
        if state.reject_token {
            return Err(ApiError::from_response(401, Some(json!({ "message": "Token expired" }))));
        }
        if path == CONTACT_PATH {
            return Ok(json!({ "success": true }));
        }

        let mut parts = path.trim_start_matches('/').splitn(2, '/');
        let collection = parts.next().unwrap_or_default().to_string();
        let id = parts.next().map(str::to_string);
        state.next_id += 1;
        let next_id = state.next_id.to_string();

        let list = match collection.as_str() {
            "events" => &mut state.events,
            "team" => &mut state.team,
            "gallery" => &mut state.gallery,
            _ => return Err(ApiError::from_response(404, None)),
        };
        let position = id
            .as_deref()
            .and_then(|id| list.iter().position(|item| item["id"] == id));

        match (method, id, position) {
            ("GET", None, _) => Ok(json!({ "success": true, "data": list.clone() })),
            ("POST", None, _) => {
                let mut item = body.cloned().unwrap_or_else(|| json!({}));
                item["id"] = Value::String(next_id);
                list.push(item.clone());
                Ok(json!({ "success": true, "data": item }))
            }
            ("PUT", Some(id), Some(index)) => {
                let mut item = body.cloned().unwrap_or_else(|| json!({}));
                item["id"] = Value::String(id);
                list[index] = item.clone();
                Ok(json!({ "success": true, "data": item }))
            }
            ("DELETE", Some(_), Some(index)) => {
                list.remove(index);
                Ok(json!({ "success": true }))
            }
            _ => Err(ApiError::from_response(404, Some(json!({ "message": "Not found" })))),
        }
    }
}

impl Backend for FakeBackend {
    async fn get(&self, path: &str) -> ApiResult<Value> {
        self.handle("GET", path, None)
    }

    async fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.handle("POST", path, Some(body))
    }

    async fn put(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.handle("PUT", path, Some(body))
    }

    async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.handle("DELETE", path, None)
    }
}

pub fn event(id: &str, kind: &str, date: &str, title: &str) -> Value {
    json!({
        "id": id,
        "type": kind,
        "date": date,
        "time": "18:00",
        "title": title,
        "description": format!("About {}", title),
        "location": "Lab 2",
        "tags": ["Tech"]
    })
}

pub fn member(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "position": "Lead",
        "bio": "Builds things",
        "initials": name.split_whitespace().filter_map(|w| w.chars().next()).collect::<String>()
    })
}

pub fn photo(id: &str, title: &str, event_id: Option<&str>) -> Value {
    json!({
        "id": id,
        "title": title,
        "imageUrl": format!("https://img.example.com/{}.jpg", id),
        "eventId": event_id
    })
}

pub fn store(token: Option<&str>) -> SharedTokenStore {
    match token {
        Some(token) => Arc::new(MemoryTokenStore::with_token(token)),
        None => Arc::new(MemoryTokenStore::new()),
    }
}

pub fn panel(backend: FakeBackend, tokens: SharedTokenStore) -> AdminPanel<FakeBackend> {
    AdminPanel::new(ClubApi::new(backend), SessionController::start(tokens))
}

/// A panel that has already logged in.
pub async fn logged_in(backend: FakeBackend) -> (AdminPanel<FakeBackend>, SharedTokenStore) {
    let tokens = store(None);
    let mut panel = panel(backend, tokens.clone());
    let mut credentials = crate::forms::Credentials::new(USERNAME, PASSWORD);
    let outcome = panel.login(&mut credentials).await;
    assert_eq!(outcome, crate::session::LoginOutcome::Success);
    (panel, tokens)
}
