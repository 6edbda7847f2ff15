mod api;
mod app;
mod auth;
mod config;
mod content;
mod domain;
mod error;
mod logging;
mod middleware;
mod routes;
mod services;
#[cfg(test)]
mod testing;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        backend = %settings.supabase_url,
        "Starting conglomerate content service"
    );

    let state = app::AppState::from_settings(settings.clone())?;

    // Report backend reachability without blocking startup
    tokio::spawn({
        let backend = state.backend.clone();
        async move {
            match backend.health_check().await {
                Ok(()) => tracing::info!("Hosted backend is reachable"),
                Err(e) => tracing::warn!(error = %e, "Hosted backend check failed - public pages will use fallbacks"),
            }
        }
    });

    if let Err(e) = state.jwks_cache.warm_cache().await {
        tracing::warn!(error = %e, "Failed to warm JWKS cache - will fetch on first admin request");
    }

    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
