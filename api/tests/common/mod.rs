#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::{FromRequest, Multipart, Path, Query, Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_test::TestServer;
use capturas_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs, ProviderArgs, ServerArgs},
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub const SECURE_URL: &str =
    "https://res.cloudinary.com/demo/image/upload/v1760868000/capturas/abc123.jpg";
pub const CREATED_AT: &str = "2026-10-19T10:00:00Z";

/// A request received by the fake provider.
#[derive(Debug, Clone, Default)]
pub struct RecordedCall {
    pub action: String,
    pub cloud_name: String,
    pub resource_type: String,
    pub fields: HashMap<String, String>,
    pub file_name: Option<String>,
    pub file_size: usize,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Behavior {
    pub destroy_result: String,
    pub failure: Option<(StatusCode, String)>,
    pub resources: Value,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            destroy_result: "ok".to_string(),
            failure: None,
            resources: json!([
                {
                    "public_id": "capturas/first",
                    "secure_url": "https://res.cloudinary.com/demo/image/upload/v1/capturas/first.png",
                    "created_at": "2026-10-01T08:00:00Z",
                    "format": "png",
                    "context": { "custom": { "alt": "first" } }
                },
                {
                    "public_id": "capturas/second",
                    "secure_url": "https://res.cloudinary.com/demo/image/upload/v1/capturas/second.webp"
                }
            ]),
        }
    }
}

/// In-process stand-in for the Cloudinary REST API.
#[derive(Clone, Default)]
pub struct FakeCloudinary {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    behavior: Arc<Mutex<Behavior>>,
}

impl FakeCloudinary {
    /// Serves the fake on a random local port and returns its API base URL.
    pub async fn spawn() -> (Self, String) {
        let fake = FakeCloudinary::default();
        let app = Router::new()
            .route(
                "/v1_1/{cloud_name}/resources/image/{delivery_type}",
                get(list_resources),
            )
            .route(
                "/v1_1/{cloud_name}/{resource_type}/{action}",
                post(post_action),
            )
            .with_state(fake.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (fake, format!("http://{addr}/v1_1"))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_destroy_result(&self, result: &str) {
        self.behavior.lock().unwrap().destroy_result = result.to_string();
    }

    pub fn fail_with(&self, status: StatusCode, message: &str) {
        self.behavior.lock().unwrap().failure = Some((status, message.to_string()));
    }

    fn record(&self, call: RecordedCall) -> Behavior {
        self.calls.lock().unwrap().push(call);
        self.behavior.lock().unwrap().clone()
    }
}

fn provider_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": { "message": message } }))).into_response()
}

async fn list_resources(
    State(fake): State<FakeCloudinary>,
    Path((cloud_name, delivery_type)): Path<(String, String)>,
    Query(fields): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let behavior = fake.record(RecordedCall {
        action: "list".to_string(),
        cloud_name,
        resource_type: delivery_type,
        fields,
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        ..RecordedCall::default()
    });

    if let Some((status, message)) = behavior.failure {
        return provider_error(status, &message);
    }

    Json(json!({ "resources": behavior.resources })).into_response()
}

async fn post_action(
    State(fake): State<FakeCloudinary>,
    Path((cloud_name, resource_type, action)): Path<(String, String, String)>,
    request: Request,
) -> Response {
    let mut call = RecordedCall {
        action: action.clone(),
        cloud_name,
        resource_type,
        ..RecordedCall::default()
    };

    match action.as_str() {
        "upload" => {
            let mut multipart = Multipart::from_request(request, &()).await.unwrap();
            while let Some(field) = multipart.next_field().await.unwrap() {
                let name = field.name().unwrap_or_default().to_string();
                if name == "file" {
                    call.file_name = field.file_name().map(str::to_string);
                    call.file_size = field.bytes().await.unwrap().len();
                } else {
                    call.fields.insert(name, field.text().await.unwrap());
                }
            }
        }
        "destroy" => {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &())
                .await
                .unwrap();
            call.fields = fields;
        }
        _ => return StatusCode::NOT_FOUND.into_response(),
    }

    let folder = call.fields.get("folder").cloned().unwrap_or_default();
    let behavior = fake.record(call);

    if let Some((status, message)) = behavior.failure {
        return provider_error(status, &message);
    }

    if action == "upload" {
        Json(json!({
            "public_id": format!("{folder}/abc123"),
            "secure_url": SECURE_URL,
            "created_at": CREATED_AT,
            "format": "jpg",
            "resource_type": "image",
        }))
        .into_response()
    } else {
        Json(json!({ "result": behavior.destroy_result })).into_response()
    }
}

pub fn test_router(provider: ProviderArgs) -> Router {
    let args = Arc::new(Args {
        provider,
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: vec!["*".to_string()],
        },
        log: LogArgs {
            filter: "debug".to_string(),
            json: false,
        },
    });

    let state = state(args).unwrap();
    router(state).unwrap()
}

pub fn test_server(provider: ProviderArgs) -> TestServer {
    TestServer::new(test_router(provider)).unwrap()
}

/// API wired to a fake provider with valid credentials.
pub struct CapturasContext {
    pub server: TestServer,
    pub app: Router,
    pub provider: FakeCloudinary,
}

impl AsyncTestContext for CapturasContext {
    async fn setup() -> Self {
        let (provider, api_url) = FakeCloudinary::spawn().await;
        let app = test_router(ProviderArgs {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_url,
        });
        let server = TestServer::new(app.clone()).unwrap();

        Self {
            server,
            app,
            provider,
        }
    }
}
