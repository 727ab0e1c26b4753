#[macro_use]
extern crate log;

use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod deserializers;
mod routes;
mod settings;
mod tests;
mod validate;

use crate::routes::{not_found, routes};
use crate::settings::Settings;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env().map_err(|err| {
        error!("{}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let pool = db::new_pool(&settings.database_url)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    info!("Serving on {}", settings.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
