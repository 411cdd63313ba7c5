//! Server lifecycle: store, sweeper and HTTP listener.

use std::sync::Arc;

use tokio::{net::TcpListener, sync::watch};

use crate::{
    config::ServerConfig,
    domain::ChatRepository,
    error::ServerError,
    infrastructure::{InMemoryChatRepository, SystemClock},
    usecase::EvictInactiveParticipantsUseCase,
};

use super::{router::build_router, signal::shutdown_signal, state::AppState, sweeper::spawn_sweeper};

/// Run the chat server until a shutdown signal is received.
///
/// The store is opened before the listener binds and closed only after the
/// listener and the sweeper have both stopped.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    let repository: Arc<dyn ChatRepository> =
        Arc::new(InMemoryChatRepository::open(config.max_connections));
    let clock = Arc::new(SystemClock);

    let addr = config.bind_address();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(source) => {
            repository.close().await;
            return Err(ServerError::Bind { addr, source });
        }
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = spawn_sweeper(
        EvictInactiveParticipantsUseCase::new(
            repository.clone(),
            clock.clone(),
            config.inactivity_timeout(),
        ),
        config.sweep_interval(),
        shutdown_rx,
    );

    let state = Arc::new(AppState::new(
        repository.clone(),
        clock,
        config.utc_offset_minutes,
    ));
    let app = build_router(state);

    tracing::info!("Chat server listening on http://{}", addr);
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    let _ = shutdown_tx.send(true);
    if let Err(e) = sweeper.await {
        tracing::error!("Sweeper task failed: {}", e);
    }
    repository.close().await;
    tracing::info!("Chat server stopped");

    served.map_err(ServerError::Serve)
}
