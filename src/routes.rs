use crate::{
    api::{leave_balance, leave_request},
    auth::{handlers, middleware::auth_middleware, remote::remote_auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        60_000 / requests_per_min as u64
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap();
    Governor::new(&cfg)
}

/// Auth service routes: token issuance, the validate endpoint downstream
/// services depend on, and admin-only user lifecycle.
pub fn configure_auth(cfg: &mut web::ServiceConfig, config: Config) {
    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let register_limiter = Arc::new(build_limiter(config.rate_register_per_min));
    let refresh_limiter = Arc::new(build_limiter(config.rate_refresh_per_min));
    let validate_limiter = Arc::new(build_limiter(config.rate_validate_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    cfg.service(
        web::scope(&format!("{}/auth", config.api_prefix))
            .service(
                web::resource("/login")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/register")
                    .wrap(register_limiter.clone())
                    .route(web::post().to(handlers::register)),
            )
            .service(
                web::resource("/refresh")
                    .wrap(refresh_limiter.clone())
                    .route(web::post().to(handlers::refresh_token)),
            )
            .service(
                web::resource("/logout")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::logout)),
            )
            // called by every downstream service on every protected request
            .service(
                web::resource("/validate")
                    .wrap(validate_limiter)
                    .route(web::get().to(handlers::validate)),
            )
            // user lifecycle, verified locally (this service owns the secret)
            .service(
                web::scope("/users")
                    .wrap(from_fn(auth_middleware))
                    .wrap(protected_limiter)
                    .service(
                        web::resource("/{id}/deactivate")
                            .route(web::put().to(handlers::deactivate_user)),
                    )
                    .service(
                        web::resource("/{id}/activate")
                            .route(web::put().to(handlers::activate_user)),
                    )
                    .service(web::resource("/{id}").route(web::delete().to(handlers::delete_user))),
            ),
    );
}

/// Leave service routes. Every request is authorized through the auth
/// service validate endpoint by remote_auth_middleware.
pub fn configure_leave(cfg: &mut web::ServiceConfig, config: Config) {
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    cfg.service(
        web::scope(&format!("{}/leave", config.api_prefix))
            .wrap(from_fn(remote_auth_middleware))
            .wrap(protected_limiter)
            // /leave/balance must be registered ahead of /leave/{id}
            .service(
                web::resource("/balance")
                    .route(web::post().to(leave_balance::upsert_balance))
                    .route(web::get().to(leave_balance::list_balances)),
            )
            // /leave
            .service(
                web::resource("")
                    .route(web::get().to(leave_request::leave_list))
                    .route(web::post().to(leave_request::create_leave)),
            )
            // /leave/{id}
            .service(
                web::resource("/{id}")
                    .route(web::get().to(leave_request::get_leave))
                    .route(web::put().to(leave_request::update_leave)),
            )
            // /leave/{id}/approve
            .service(
                web::resource("/{id}/approve").route(web::put().to(leave_request::approve_leave)),
            )
            // /leave/{id}/reject
            .service(
                web::resource("/{id}/reject").route(web::put().to(leave_request::reject_leave)),
            )
            // /leave/{id}/cancel
            .service(
                web::resource("/{id}/cancel").route(web::put().to(leave_request::cancel_leave)),
            ),
    );
}

// LOGIN
//  ├─ access_token (15 min)
//  └─ refresh_token (7 days)
//
// DOWNSTREAM REQUEST
//  └─ Authorization: Bearer access_token
//       └─ leave-service → GET {auth}/api/auth/validate
//            └─ {valid, user} or 401
