//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod students;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, SchoolError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

pub use students::{AgeComparison, StudentRow};

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::from_config(&AppConfig::get().database).await
    }

    /// 按数据库配置连接并运行迁移
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage ready, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                SchoolError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            SchoolError::database_connection(format!("Unable to connect to database: {e}"))
        })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    pub(crate) fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

use crate::models::students::entities::Student;
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn list_students_older_than(&self, age: i32) -> Result<Vec<Student>> {
        self.list_students_older_than_impl(age).await
    }

    async fn list_students_younger_than(&self, age: i32) -> Result<Vec<Student>> {
        self.list_students_younger_than_impl(age).await
    }

    async fn create_student(&self, name: &str, age: i32) -> Result<Student> {
        self.create_student_impl(name, age).await
    }

    async fn create_students(&self, students: &[(&str, i32)]) -> Result<Vec<Student>> {
        self.create_students_impl(students).await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }
}

#[cfg(test)]
impl SeaOrmStorage {
    /// 测试用内存 SQLite
    pub(crate) async fn in_memory() -> Self {
        let config = DatabaseConfig {
            url: "sqlite://:memory:".to_string(),
            pool_size: 1,
            timeout: 5,
            seed_demo: false,
        };
        Self::from_config(&config)
            .await
            .expect("in-memory sqlite should open")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url_sqlite_paths() {
        assert_eq!(
            SeaOrmStorage::build_database_url("school.db").unwrap(),
            "sqlite://school.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("data/school.sqlite").unwrap(),
            "sqlite://data/school.sqlite?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite://school.db").unwrap(),
            "sqlite://school.db"
        );
    }

    #[test]
    fn test_build_database_url_server_schemes() {
        for url in [
            "postgres://u:p@localhost/school",
            "postgresql://localhost/school",
            "mysql://root@localhost/school",
            "mariadb://root@localhost/school",
        ] {
            assert_eq!(SeaOrmStorage::build_database_url(url).unwrap(), url);
        }
    }

    #[test]
    fn test_build_database_url_rejects_unknown() {
        let err = SeaOrmStorage::build_database_url("mongodb://localhost").unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}
