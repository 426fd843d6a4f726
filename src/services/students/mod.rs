pub mod adults;
pub mod minors;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use askama::Template;
use std::sync::Arc;
use tracing::error;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
use crate::models::students::entities::Student;
use crate::storage::Storage;
use crate::templates::StudentsTemplate;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    /// 绑定固定的存储实例，不再从请求的 app data 中查找
    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn age_threshold(&self) -> i32 {
        AppConfig::get().students.age_threshold
    }

    // 年龄大于阈值的学生
    pub async fn list_adults(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        adults::list_adults(self, request).await
    }

    // 年龄小于阈值的学生
    pub async fn list_minors(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        minors::list_minors(self, request).await
    }
}

/// 把查询结果渲染为 HTML 响应
pub(crate) fn render_page(title: &str, result: Result<Vec<Student>>) -> HttpResponse {
    let rendered = result.and_then(|students| {
        StudentsTemplate::new(title, students)
            .render()
            .map_err(SchoolError::from)
    });

    match rendered {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!("Failed to render {}: {}", title, e);
            HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(
                    r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Server Error</title>
</head>
<body>
    <h1>Server Error</h1>
    <p>The student list could not be loaded.</p>
</body>
</html>"#,
                )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_render_page_ok() {
        let students = vec![Student {
            id: 1,
            name: "Alice".to_string(),
            age: 20,
        }];
        let resp = render_page("Adults", Ok(students));
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("<td>Alice</td>"));
    }

    #[actix_web::test]
    async fn test_render_page_error_hides_details() {
        let resp = render_page(
            "Adults",
            Err(SchoolError::database_operation("no such table: school_student")),
        );
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Server Error"));
        assert!(!body.contains("school_student"));
    }

    #[actix_web::test]
    async fn test_bound_storage_needs_no_app_data() {
        let storage = SeaOrmStorage::in_memory().await;
        let threshold = AppConfig::get().students.age_threshold;
        storage.create_student("Grace", threshold + 1).await.unwrap();
        storage.create_student("Hugo", threshold - 1).await.unwrap();

        let service = StudentService::with_storage(Arc::new(storage));
        let request = TestRequest::default().to_http_request();

        let resp = service.list_adults(&request).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("<td>Grace</td>"));
        assert!(!body.contains("<td>Hugo</td>"));
    }
}
