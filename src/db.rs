use std::time::Duration;

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;

use crate::config::Config;

fn pool_options(config: &Config) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
}

pub async fn init_db(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    pool_options(config)
        .connect_with(config.connect_options())
        .await
}

/// Pool that only dials MySQL when a query first needs a connection.
pub fn lazy_pool(config: &Config) -> MySqlPool {
    pool_options(config).connect_lazy_with(config.connect_options())
}
