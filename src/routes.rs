use crate::{
    api::{attendance, dashboard, employee, home},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, error::InternalError, middleware::Condition, web};
use serde_json::json;

// Per-peer limiter; the whole per-minute budget may be spent as one burst.
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    let cfg: GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware> = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap_or_default();
    Governor::new(&cfg)
}

/// Unreadable bodies get the same `{"error": ...}` shape as validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, HttpResponse::BadRequest().json(json!({ "error": message })))
            .into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    let limiter = Condition::new(
        config.rate_limit_per_min > 0,
        build_limiter(config.rate_limit_per_min),
    );

    cfg.app_data(json_config());

    cfg.service(home::index);

    cfg.service(
        web::scope("")
            .wrap(limiter)
            // /employees
            .service(
                web::resource("/employees")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{emp_id}
            .service(
                web::resource("/employees/{emp_id}")
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            )
            // /attendance
            .service(web::resource("/attendance").route(web::post().to(attendance::mark_attendance)))
            // /attendance/{emp_id}
            .service(
                web::resource("/attendance/{emp_id}")
                    .route(web::get().to(attendance::get_attendance)),
            )
            // /dashboard
            .service(web::resource("/dashboard").route(web::get().to(dashboard::dashboard))),
    );
}
