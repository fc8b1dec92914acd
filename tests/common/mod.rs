#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{Service, ServiceResponse},
    middleware::NormalizePath,
    test,
    web::Data,
};
use attendance_admin::{config::Config, db, routes};
use sqlx::MySqlPool;

/// Config for tests that never reach a live database. It points at a port
/// nothing listens on, so a query that does run fails within a second.
pub fn offline_config(rate_limit_per_min: u32) -> Config {
    let rate = rate_limit_per_min.to_string();
    Config::from_lookup(move |key| match key {
        "DB_HOST" => Some("127.0.0.1".into()),
        "DB_PORT" => Some("1".into()),
        "DB_ACQUIRE_TIMEOUT_SECS" => Some("1".into()),
        "DB_USER" => Some("attendance".into()),
        "DB_NAME" => Some("attendance_test".into()),
        "RATE_LIMIT_PER_MIN" => Some(rate.clone()),
        _ => None,
    })
    .unwrap()
}

/// Config pointed at the MySQL instance given by the `DB_*` variables.
pub fn database_config() -> Config {
    let mut config = Config::from_env().expect("DB_* variables must be set for database tests");
    config.rate_limit_per_min = 0;
    config
}

pub async fn app(
    config: Config,
    pool: MySqlPool,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(Data::new(pool))
            .configure(|cfg| routes::configure(cfg, &config)),
    )
    .await
}

/// App backed by a pool that cannot connect. Requests decided before a
/// query answer normally; anything reaching the database gets a 500.
pub async fn offline_app(
    rate_limit_per_min: u32,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let config = offline_config(rate_limit_per_min);
    let pool = db::lazy_pool(&config);
    app(config, pool).await
}

pub async fn connect_and_prepare(config: &Config) -> MySqlPool {
    let pool = db::init_db(config).await.expect("database reachable");

    let schema = include_str!("../../sql/schema.sql");
    for statement in schema.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement).execute(&pool).await.expect("schema applies");
    }

    pool
}

/// Database tests share tables; serialize them so counts stay predictable.
pub fn db_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn unique_id(prefix: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}-{nanos}")
}
