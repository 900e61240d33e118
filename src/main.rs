use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use roster_manager::config::AppConfig;
use roster_manager::state::AppState;
use roster_manager::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let storage = db::open_storage(&config).map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    })?;

    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState::new(config, storage));

    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
