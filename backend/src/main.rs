mod config;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use crate::store::sqlite::SqliteTemplateStore;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let store = SqliteTemplateStore::open(&config.database_path).map_err(io::Error::other)?;
    info!("Templates stored in {}", config.database_path.display());

    let state = AppState::new(store);
    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(state.clone()))
            .service(services::catalog::configure_routes())
            .service(services::templates::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
