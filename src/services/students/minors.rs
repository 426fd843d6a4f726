use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{StudentService, render_page};

pub async fn list_minors(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let threshold = service.age_threshold();

    let result = storage.list_students_younger_than(threshold).await;
    if let Ok(students) = &result {
        debug!("{} student(s) younger than {}", students.len(), threshold);
    }

    Ok(render_page(&format!("Students younger than {threshold}"), result))
}
