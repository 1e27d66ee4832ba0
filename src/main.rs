//! # Venue Registry
//!
//! Main entry point for the venue registry service.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use venue_registry::api::rest::{AppState, create_router};
use venue_registry::application::services::{
    ConsistencyGuard, EventPublisher, InstrumentService, OrderGate, TracingEventPublisher,
    VenueService,
};
use venue_registry::config::{AppConfig, LogFormat};
use venue_registry::domain::value_objects::VenueStatus;
use venue_registry::infrastructure::persistence::in_memory::{
    InMemoryInstrumentRepository, InMemoryVenueRepository,
};
use venue_registry::infrastructure::persistence::traits::{
    InstrumentRepository, VenueRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    info!("starting venue registry v{}", env!("CARGO_PKG_VERSION"));

    let venues: Arc<dyn VenueRepository> = Arc::new(InMemoryVenueRepository::new());
    let instruments: Arc<dyn InstrumentRepository> =
        Arc::new(InMemoryInstrumentRepository::new());
    let guard = ConsistencyGuard::new(venues.clone(), instruments.clone());
    let events: Arc<dyn EventPublisher> = Arc::new(TracingEventPublisher::new());
    let write_lock = Arc::new(Mutex::new(()));

    let initial_status = if config.registry.approval_required {
        VenueStatus::PendingApproval
    } else {
        VenueStatus::Open
    };

    let venue_service = Arc::new(
        VenueService::new(
            venues,
            instruments.clone(),
            guard.clone(),
            events.clone(),
            write_lock.clone(),
        )
        .with_initial_status(initial_status),
    );
    let instrument_service = Arc::new(InstrumentService::new(
        instruments,
        venue_service.clone(),
        guard,
        events.clone(),
        write_lock,
    ));
    let order_gate = Arc::new(OrderGate::new(
        instrument_service.clone(),
        venue_service.clone(),
        events,
    ));

    let router = create_router(AppState {
        venue_service,
        instrument_service,
        order_gate,
    });

    let addr = config.rest.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, approval_required = config.registry.approval_required, "REST server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("venue registry shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level));

    match config.log.format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init(),
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler; shutting down");
    }
}
