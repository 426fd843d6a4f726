//! Askama 模板
//!
//! 模板在编译时从 templates/ 目录读取，输出自动进行 HTML 转义。

use askama::Template;

use crate::models::students::entities::Student;

/// 学生列表页面
#[derive(Template)]
#[template(path = "students.html")]
pub struct StudentsTemplate {
    pub title: String,
    pub students: Vec<Student>,
}

impl StudentsTemplate {
    pub fn new(title: impl Into<String>, students: Vec<Student>) -> Self {
        Self {
            title: title.into(),
            students,
        }
    }
}
