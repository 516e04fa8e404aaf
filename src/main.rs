use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info, LevelFilter};
use std::sync::Arc;

use nft_gallery::config::Config;
use nft_gallery::routes::configure_routes;
use nft_gallery::services::{build_gallery, SolscanClient, TokenSource};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse command line arguments and setup logging
    let args = Args::parse();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    let config = Config::load()?;
    info!("Starting NFT gallery...");
    info!("Configuration loaded: {:?}", config);

    // 2. Page is ready: run the one-shot rendering pass
    let client = SolscanClient::new(&config.explorer.base_url);
    info!("Token list endpoint: {}", client.url());
    let source: Arc<dyn TokenSource> = Arc::new(client);

    let snapshot = match build_gallery(&config.gallery, source).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to prepare gallery page: {}", e);
            return Err(e.into());
        }
    };
    info!(
        "Gallery pass finished: {:?}, {} cards",
        snapshot.outcome.state,
        snapshot.cards.len()
    );
    let snapshot = web::Data::new(snapshot);

    // 3. Serve the rendered page
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server will be available at http://{}", bind_addr);

    HttpServer::new(move || {
        let allowed_origins = config.cors.allowed_origins.clone();
        let cors = Cors::default().allowed_origin_fn(move |origin, _req_head| {
            let origin_str = match origin.to_str() {
                Ok(s) => s,
                Err(_) => return false,
            };
            allowed_origins.iter().any(|allowed| origin_str == allowed)
        });

        let methods: Vec<actix_web::http::Method> = config
            .cors
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();

        let cors = cors
            .allowed_methods(methods)
            .allowed_headers(config.cors.allowed_headers.clone())
            .max_age(3600);

        App::new()
            .app_data(snapshot.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
