use posts_api::config::Config;
use posts_api::routes::configure_routes;
use posts_api::store::PostStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("posts_api=info,warp=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };

    let store = if config.seed {
        PostStore::seeded()
    } else {
        PostStore::new()
    };
    info!(posts = store.len(), "post store ready");

    let routes = configure_routes(store.into_shared());

    let addr = config.socket_addr();
    info!(%addr, "starting server");
    warp::serve(routes).run(addr).await;
}
