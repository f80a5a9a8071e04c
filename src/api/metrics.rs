use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static CLIENT_ERROR_COUNT: AtomicU64 = AtomicU64::new(0);
static SERVER_ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

/// Registra uma resposta (chamado pelo middleware `RequestMetrics`)
pub fn record_response(status: StatusCode) {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
    if status.is_client_error() {
        CLIENT_ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
    } else if status.is_server_error() {
        SERVER_ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_client_errors_total: u64,
    pub http_server_errors_total: u64,
}

pub fn snapshot() -> MetricsResponse {
    MetricsResponse {
        http_requests_total: REQUEST_COUNT.load(Ordering::Relaxed),
        http_client_errors_total: CLIENT_ERROR_COUNT.load(Ordering::Relaxed),
        http_server_errors_total: SERVER_ERROR_COUNT.load(Ordering::Relaxed),
    }
}

fn render(metrics: &MetricsResponse) -> String {
    format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_client_errors_total Total number of HTTP 4xx responses\n\
         # TYPE http_client_errors_total counter\n\
         http_client_errors_total {}\n\
         \n\
         # HELP http_server_errors_total Total number of HTTP 5xx responses\n\
         # TYPE http_server_errors_total counter\n\
         http_server_errors_total {}\n",
        metrics.http_requests_total, metrics.http_client_errors_total, metrics.http_server_errors_total
    )
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus text exposition", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render(&snapshot()))
}
