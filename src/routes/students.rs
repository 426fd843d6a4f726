use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_adults(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_adults(&req).await
}

pub async fn list_minors(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_minors(&req).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            // 直接执行 SQL 查询
            .route("/adults", web::get().to(list_adults))
            // 通过 ORM 原始查询
            .route("/minors", web::get().to(list_minors)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use std::sync::Arc;

    async fn seeded_storage() -> Arc<dyn Storage> {
        let threshold = AppConfig::get().students.age_threshold;
        let storage = SeaOrmStorage::in_memory().await;
        storage.create_student("Older", threshold + 3).await.unwrap();
        storage.create_student("Boundary", threshold).await.unwrap();
        storage.create_student("Younger", threshold - 3).await.unwrap();
        Arc::new(storage)
    }

    async fn get_page(uri: &str) -> (StatusCode, String, String) {
        let storage = seeded_storage().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_students_routes),
        )
        .await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = test::read_body(resp).await;
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_adults_page_lists_only_older_students() {
        let (status, content_type, body) = get_page("/students/adults").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("<td>Older</td>"));
        assert!(!body.contains("<td>Boundary</td>"));
        assert!(!body.contains("<td>Younger</td>"));
        assert!(body.contains("1 student(s)"));
    }

    #[actix_web::test]
    async fn test_minors_page_lists_only_younger_students() {
        let (status, _, body) = get_page("/students/minors").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<td>Younger</td>"));
        assert!(!body.contains("<td>Boundary</td>"));
        assert!(!body.contains("<td>Older</td>"));
    }

    #[actix_web::test]
    async fn test_unknown_student_route_is_not_found() {
        let (status, _, _) = get_page("/students/all").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
