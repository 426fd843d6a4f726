use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{StudentService, render_page};

pub async fn list_adults(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let threshold = service.age_threshold();

    let result = storage.list_students_older_than(threshold).await;
    if let Ok(students) = &result {
        debug!("{} student(s) older than {}", students.len(), threshold);
    }

    Ok(render_page(&format!("Students older than {threshold}"), result))
}
