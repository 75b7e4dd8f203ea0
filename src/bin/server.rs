#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use hizmet_puani::api::{AppState, create_router};
    use hizmet_puani::config::ConfigLoader;

    let addr: SocketAddr = std::env::var("HIZMET_PUANI_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;
    let config_dir = std::env::var("HIZMET_PUANI_CONFIG")
        .unwrap_or_else(|_| "./config/hizmet_puani".to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let router = create_router(AppState::new(config));

    println!("hizmet-puani HTTP API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
