//! Test server fixture.
//!
//! Serves the real router in-process on an ephemeral port, backed by a fresh
//! in-memory store and a running sweeper.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use batepapo_server::{
    domain::{ChatRepository, Clock},
    infrastructure::{InMemoryChatRepository, SystemClock},
    ui::{USER_HEADER, build_router, spawn_sweeper, state::AppState},
    usecase::EvictInactiveParticipantsUseCase,
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::watch, task::JoinHandle};

pub struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    server: JoinHandle<()>,
    sweeper: JoinHandle<()>,
    _shutdown: watch::Sender<bool>,
}

impl TestServer {
    /// Start with the production timing policy (10s timeout, 15s sweeps)
    pub async fn start() -> Self {
        Self::start_with_policy(Duration::from_secs(10), Duration::from_secs(15)).await
    }

    pub async fn start_with_policy(inactivity_timeout: Duration, sweep_interval: Duration) -> Self {
        let repository: Arc<dyn ChatRepository> = Arc::new(InMemoryChatRepository::open(16));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let sweeper = spawn_sweeper(
            EvictInactiveParticipantsUseCase::new(
                repository.clone(),
                clock.clone(),
                inactivity_timeout,
            ),
            sweep_interval,
            shutdown_rx,
        );

        let app = build_router(Arc::new(AppState::new(repository, clock, 0)));
        let server = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            addr,
            client: reqwest::Client::new(),
            server,
            sweeper,
            _shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn join(&self, name: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/participants", self.base_url()))
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn heartbeat(&self, user: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/status", self.base_url()))
            .header(USER_HEADER, user)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn send(&self, user: &str, to: &str, text: &str, kind: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/messages", self.base_url()))
            .header(USER_HEADER, user)
            .json(&json!({ "to": to, "text": text, "type": kind }))
            .send()
            .await
            .expect("Failed to send request")
    }

    /// `GET /messages` as `user` (or anonymously), returning the parsed list
    pub async fn messages(&self, user: Option<&str>, limit: Option<&str>) -> Vec<Value> {
        let url = match limit {
            Some(limit) => format!("{}/messages?limit={}", self.base_url(), limit),
            None => format!("{}/messages", self.base_url()),
        };
        let mut request = self.client.get(url);
        if let Some(user) = user {
            request = request.header(USER_HEADER, user);
        }
        let response = request.send().await.expect("Failed to send request");
        assert_eq!(response.status(), 200);
        response.json().await.expect("Failed to parse JSON")
    }

    pub async fn participants(&self) -> Vec<Value> {
        let response = self
            .client
            .get(format!("{}/participants", self.base_url()))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);
        response.json().await.expect("Failed to parse JSON")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.abort();
        self.sweeper.abort();
    }
}
