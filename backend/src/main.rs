use std::net::SocketAddr;

use clap::Parser;
use tokio::signal;
use tower_http::cors::CorsLayer;

mod args;
mod error;
mod routes;
mod state;

use args::Args;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(&args)?;

    // Permissive CORS: the service fronts a mobile client on another origin.
    let app = routes::router(AppState::new()).layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    log::info!("Serving on http://{addr}");
    for (method, path) in routes::ROUTES {
        log::info!("  {method:8} {path}");
    }

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_logger(args: &Args) -> anyhow::Result<()> {
    stderrlog::new()
        .quiet(args.quiet)
        .show_module_names(false)
        .verbosity(usize::from(args.verbose) + 2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("signal received, starting graceful shutdown");
}
