use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::entities::Student;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生查询方法
    // 直接在连接上执行 SQL，列出年龄大于 age 的学生
    async fn list_students_older_than(&self, age: i32) -> Result<Vec<Student>>;
    // 通过 ORM 原始查询，列出年龄小于 age 的学生
    async fn list_students_younger_than(&self, age: i32) -> Result<Vec<Student>>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, name: &str, age: i32) -> Result<Student>;
    // 在同一事务中批量创建学生
    async fn create_students(&self, students: &[(&str, i32)]) -> Result<Vec<Student>>;
    // 统计学生数量
    async fn count_students(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
