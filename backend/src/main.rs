mod config;
mod record_store;
mod services;

use crate::config::Config;
use crate::record_store::{CsvFileStore, RecordStore};
use actix_web::{web, App, HttpResponse, HttpServer};
use env_logger::Env;
use log::info;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    let file_store = CsvFileStore::new(&config.store_path);
    info!("Appending marketing requests to {}", file_store.path().display());
    let store: Arc<dyn RecordStore> = Arc::new(file_store);

    info!("Server running at {}", config.url());

    let json_limit = config.json_limit;
    HttpServer::new(move || {
        App::new()
            .app_data(services::requests::json_config(json_limit))
            .app_data(web::Data::from(Arc::clone(&store)))
            .service(services::requests::configure_routes())
            .default_service(web::route().to(HttpResponse::NotFound))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
