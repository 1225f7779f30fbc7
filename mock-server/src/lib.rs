//! Request-recording HTTP server for adapter contract tests.
//!
//! # Design
//! A single fallback handler records every incoming request (method, path,
//! headers including duplicates, body) into shared state and replies with
//! whatever stub response is currently configured. Contract tests point a
//! real client at [`MockServer::start`], execute requests, then inspect
//! what arrived on the wire and what the client made of the reply.

use std::borrow::Cow;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

/// One request as it arrived at the server. The body is kept as raw wire
/// bytes so charset-encoded payloads can be asserted exactly.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// The body as UTF-8 text, lossy where the bytes are not.
    pub fn body_utf8(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// First value of `name`, matched case-insensitively since the server
    /// side normalizes header-name casing.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }
}

/// The reply the server sends until reconfigured. Headers may repeat names;
/// the body is raw bytes so non-UTF-8 charsets are expressible.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Default for StubResponse {
    fn default() -> StubResponse {
        StubResponse {
            status: 200,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ServerState {
    pub recorded: Vec<RecordedRequest>,
    pub stub: StubResponse,
}

pub type SharedState = Arc<RwLock<ServerState>>;

pub fn shared_state() -> SharedState {
    Arc::new(RwLock::new(ServerState::default()))
}

pub fn app(state: SharedState) -> Router {
    Router::new().fallback(handle).with_state(state)
}

pub async fn run(listener: TcpListener, state: SharedState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn handle(State(state): State<SharedState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let recorded = RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        headers,
        body: bytes.to_vec(),
    };

    let stub = {
        let mut state = state.write().await;
        state.recorded.push(recorded);
        state.stub.clone()
    };

    let mut builder = Response::builder()
        .status(StatusCode::from_u16(stub.status).unwrap_or(StatusCode::OK));
    for (name, value) in &stub.headers {
        builder = builder.header(name, value);
    }
    builder
        .body(Body::from(stub.body))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

/// A running server on a random local port, driven by a background thread
/// so blocking clients can talk to it from plain `#[test]` functions.
pub struct MockServer {
    addr: SocketAddr,
    state: SharedState,
}

impl MockServer {
    pub fn start() -> MockServer {
        let std_listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock server port");
        let addr = std_listener.local_addr().expect("mock server local addr");
        std_listener
            .set_nonblocking(true)
            .expect("set mock server listener nonblocking");

        let state = shared_state();
        let server_state = state.clone();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock server runtime");
            rt.block_on(async {
                let listener = TcpListener::from_std(std_listener).expect("tokio listener");
                run(listener, server_state).await
            })
            .expect("mock server exited");
        });

        MockServer { addr, state }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Replace the reply sent to subsequent requests.
    pub fn stub(&self, stub: StubResponse) {
        self.state.blocking_write().stub = stub;
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.blocking_read().recorded.last().cloned()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.blocking_read().recorded.clone()
    }
}
