use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use std::sync::Arc;

use shop_accounts_backend::db;
use shop_accounts_backend::handlers::user_handler::{get_user, signup};
use shop_accounts_backend::store::postgres::PgUserStore;
use shop_accounts_backend::store::UserStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let pool = match db::connect(&database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("PostgreSQL connection error: {err}");
            std::process::exit(1);
        }
    };
    log::info!("✅ Connected to PostgreSQL");

    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));
    let store = web::Data::from(store);

    log::info!("🚀 Server running on http://localhost:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(store.clone())
            .service(signup)
            .service(get_user)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
