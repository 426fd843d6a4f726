use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::HealthService;

// 懒加载的全局 HealthService 实例
static HEALTH_SERVICE: Lazy<HealthService> = Lazy::new(HealthService::new_lazy);

pub async fn health(request: HttpRequest) -> ActixResult<HttpResponse> {
    HEALTH_SERVICE.health(&request).await
}

// 配置路由
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_health_reports_ok() {
        let app = test::init_service(App::new().configure(configure_health_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["uptime_seconds"], 0);
    }
}
