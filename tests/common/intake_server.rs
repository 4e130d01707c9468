use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct IntakeState {
    status: StatusCode,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Stand-in for the survey intake API.
///
/// Runs on its own thread with a tokio runtime so tests can drive the
/// blocking client from the test thread.
pub struct IntakeServer {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
}

impl IntakeServer {
    /// Server answering every POST to `/api/survey` with `status`
    pub fn start(status: u16) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = IntakeState {
            status: StatusCode::from_u16(status).unwrap(),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/api/survey", post(receive_survey))
            .with_state(state);

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = rx.recv().unwrap();
        IntakeServer { addr, received }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn endpoint(&self) -> String {
        self.url("/api/survey")
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

// `Json` rejects bodies without an application/json content type, so
// anything recorded here arrived with the right header.
async fn receive_survey(
    State(state): State<IntakeState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.received.lock().unwrap().push(body.clone());
    (state.status, Json(json!({ "survey": body, "respondent": 1 })))
}
