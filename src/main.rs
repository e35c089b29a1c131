use leptos::prelude::get_configuration;
use shelfmark::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let conf = get_configuration(None).expect("leptos configuration missing from Cargo.toml");
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr.set_port(config.port);
    let addr = leptos_options.site_addr;

    let app = shelfmark::server::router(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "shelfmark listening");
    axum::serve(listener, app).await.expect("server failed");
}
