use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde_json::json;

use crate::models::AppStartTime;

pub struct HealthService;

impl HealthService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 存活检查
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let uptime_seconds = request
            .app_data::<web::Data<AppStartTime>>()
            .map(|start| {
                chrono::Utc::now()
                    .signed_duration_since(start.start_datetime)
                    .num_seconds()
            })
            .unwrap_or(0);

        Ok(HttpResponse::Ok().json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "uptime_seconds": uptime_seconds,
        })))
    }
}
