//! API server entry point.

use std::path::PathBuf;

use patient_store::JsonFileStore;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use api::config::Config;

/// Resolves once SIGINT or SIGTERM arrives, logging which signal stopped
/// the server and the store file it was serving.
async fn shutdown_signal(store_path: PathBuf) {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal_name = tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(err) = result {
                tracing::warn!(error = %err, "SIGINT handler failed");
            }
            "SIGINT"
        }
        () = terminate => "SIGTERM",
    };

    tracing::info!(
        signal = signal_name,
        store = %store_path.display(),
        "starting graceful shutdown"
    );
}

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Open the patient store, seeding an empty one on first run
    let store = JsonFileStore::new(&config.patients_file);
    store
        .create_if_missing()
        .await
        .expect("failed to initialize patient store");
    tracing::info!(path = %store.path().display(), "using patient store");

    // 4. Build the application
    let store_path = store.path().to_path_buf();
    let state = api::create_default_state(store);
    let app = api::create_app(state, metrics_handle);

    // 5. Start server
    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(store_path))
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
