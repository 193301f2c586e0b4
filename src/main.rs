#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use kolun::core::config::Config;
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let addr = match config.addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Config loaded: site_root={}, pkg_dir={}",
        config.site_root(),
        config.pkg_dir()
    );

    // Compiled wasm bundle, with pre-compressed file support
    let pkg_service = ServeDir::new(config.pkg_dir())
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        // Static landing page: index.html, styles, images
        .fallback_service(ServeDir::new(config.site_root()))
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no native entry point without the preview server
    // see lib.rs for the wasm entry points instead
}
