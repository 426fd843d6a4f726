//! 学生存储操作
//!
//! 两种查询方式：
//! - 年龄大于阈值：直接在连接上执行 SQL，结果映射到临时行结构
//! - 年龄小于阈值：通过实体的原始 SQL 查询，结果映射到实体模型

use super::SeaOrmStorage;
use crate::entity::prelude::{StudentActiveModel, Students};
use crate::errors::{Result, SchoolError};
use crate::models::students::entities::Student;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbBackend, EntityTrait, FromQueryResult, PaginatorTrait,
    Set, Statement, TransactionTrait,
};

/// 年龄比较方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeComparison {
    Above,
    Below,
}

impl AgeComparison {
    fn operator(self) -> &'static str {
        match self {
            AgeComparison::Above => ">",
            AgeComparison::Below => "<",
        }
    }

    /// 生成带绑定参数的查询语句，年龄值不会拼接进 SQL 文本
    pub fn select_sql(self, backend: DbBackend) -> String {
        let placeholder = match backend {
            DbBackend::Postgres => "$1",
            _ => "?",
        };
        format!(
            "SELECT * FROM school_student WHERE age {} {}",
            self.operator(),
            placeholder
        )
    }

    pub fn statement(self, backend: DbBackend, age: i32) -> Statement {
        Statement::from_sql_and_values(backend, self.select_sql(backend), [age.into()])
    }
}

/// 直接查询得到的原始行
#[derive(Debug, FromQueryResult)]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.id,
            name: row.name,
            age: row.age,
        }
    }
}

impl SeaOrmStorage {
    /// 列出年龄大于 age 的学生
    pub async fn list_students_older_than_impl(&self, age: i32) -> Result<Vec<Student>> {
        let stmt = AgeComparison::Above.statement(self.db.get_database_backend(), age);

        let rows = StudentRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolError::database_operation(format!("Failed to query students: {e}"))
            })?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    /// 列出年龄小于 age 的学生
    pub async fn list_students_younger_than_impl(&self, age: i32) -> Result<Vec<Student>> {
        let stmt = AgeComparison::Below.statement(self.db.get_database_backend(), age);

        let models = Students::find()
            .from_raw_sql(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolError::database_operation(format!("Failed to query students: {e}"))
            })?;

        Ok(models.into_iter().map(|m| m.into_student()).collect())
    }

    /// 创建学生
    pub async fn create_student_impl(&self, name: &str, age: i32) -> Result<Student> {
        insert_student(&self.db, name, age).await
    }

    /// 在同一事务中批量创建学生，任一失败则全部回滚
    pub async fn create_students_impl(&self, students: &[(&str, i32)]) -> Result<Vec<Student>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("Failed to begin: {e}")))?;

        let mut created = Vec::with_capacity(students.len());
        for (name, age) in students {
            // 出错时 txn 被丢弃并回滚
            created.push(insert_student(&txn, name, *age).await?);
        }

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("Failed to commit: {e}")))?;

        Ok(created)
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        Students::find()
            .count(&self.db)
            .await
            .map_err(|e| {
                SchoolError::database_operation(format!("Failed to count students: {e}"))
            })
    }
}

async fn insert_student<C: ConnectionTrait>(db: &C, name: &str, age: i32) -> Result<Student> {
    if name.trim().is_empty() {
        return Err(SchoolError::validation("Student name must not be blank"));
    }

    let model = StudentActiveModel {
        name: Set(name.to_string()),
        age: Set(age),
        ..Default::default()
    };

    let result = model.insert(db).await.map_err(|e| {
        SchoolError::database_operation(format!("Failed to create student: {e}"))
    })?;

    Ok(result.into_student())
}
