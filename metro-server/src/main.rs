use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use metro_server::cache::{CacheConfig, RouteCache};
use metro_server::config::ServerConfig;
use metro_server::network::{SharedNetwork, StationPositions, load_network, load_positions};
use metro_server::planner::PlannerConfig;
use metro_server::web::{AppState, create_router};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    init_logger();

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    info!(
        network = %config.network_path.display(),
        algorithm = %config.algorithm,
        "starting metro planner"
    );

    // Load the network (fail fast if unavailable)
    let (network, report) =
        load_network(&config.network_path).expect("Failed to load network description");
    if !report.skipped.is_empty() {
        warn!(skipped = report.skipped.len(), "some input lines were skipped");
    }
    if network.is_empty() {
        warn!("network has no stations");
    }
    let shared = SharedNetwork::new(network);

    let positions = match &config.positions_path {
        Some(path) => load_positions(path).expect("Failed to load station positions"),
        None => StationPositions::default(),
    };

    let routes = RouteCache::new(&CacheConfig::with_capacity(config.cache_capacity));
    let state = AppState::new(
        shared.clone(),
        positions,
        PlannerConfig::new(config.algorithm),
        routes,
    );

    // Spawn background task to reload the network periodically
    if let Some(period) = config.reload_interval {
        let network_path = config.network_path.clone();
        let routes = state.routes.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match shared.reload(&network_path).await {
                    Ok(stations) => {
                        routes.invalidate_all();
                        info!(stations, "reloaded network");
                    }
                    Err(e) => warn!(error = %e, "failed to reload network, keeping current"),
                }
            }
        });
    }

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.bind, "metro planner listening");

    axum::serve(listener, app).await.expect("Server error");
}
