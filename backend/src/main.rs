mod config;
mod db;
mod services;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Make sure the schema exists before the first request comes in.
    let conn = db::open().map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    db::init_schema(&conn).map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    drop(conn);

    let (host, port) = config::bind_address();
    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .service(services::products::configure_routes())
            .service(services::templates::configure_routes())
            .service(services::profiles::configure_routes())
            .service(services::generate::configure_routes())
            .service(services::generated::configure_routes())
    })
    .bind((host, port))?
    .run()
    .await
}
