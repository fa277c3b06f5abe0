use dotenvy::dotenv;
use tokio::net::TcpListener;

use activities_server::config::Config;
use activities_server::db::{seed::seed_database, Database};
use activities_server::logging;
use activities_server::routes::create_routes;
use activities_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init();

    let config = Config::from_env()?;

    let db = Database::connect(&config.database_url).await?;
    db.init().await?;
    {
        let mut session = db.session().await?;
        seed_database(&mut session).await?;
    }

    tracing::info!("Database ready");

    let app = create_routes(AppState {
        db: db.clone(),
        static_dir: config.static_dir.clone(),
    });

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server running at http://{}", config.bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;
    served?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
