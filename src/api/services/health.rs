use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use std::time::Instant;
use tracing::trace;

use crate::redirector::Redirector;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub started_at: Instant,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
    pub uptime_secs: u64,
    pub version: &'static str,
}

/// Health Service
///
/// 不访问后端：后端属于外部服务，其可用性不代表本服务的存活状态。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        redirector: web::Data<Redirector>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        HttpResponse::Ok().json(HealthResponse {
            status: "healthy",
            backend: redirector.backend().name(),
            uptime_secs: app_start_time.started_at.elapsed().as_secs(),
            version: env!("CARGO_PKG_VERSION"),
        })
    }

    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
