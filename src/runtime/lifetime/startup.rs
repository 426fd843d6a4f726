use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 示例学生，分布在默认阈值两侧
const DEMO_STUDENTS: &[(&str, i32)] = &[
    ("Alice Martin", 21),
    ("Ben Carter", 17),
    ("Chloe Nguyen", 19),
    ("Daniel Okafor", 15),
    ("Emma Rossi", 18),
    ("Felix Wagner", 24),
];

/// 写入示例学生
/// 仅在表为空时执行
pub async fn seed_demo_students(storage: &Arc<dyn Storage>) {
    match storage.count_students().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} student(s), skipping demo seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No students found in database, inserting demo data...");
        }
        Err(e) => {
            warn!("Failed to count students: {}, skipping demo seed", e);
            return;
        }
    }

    match storage.create_students(DEMO_STUDENTS).await {
        Ok(created) => info!("Inserted {} demo student(s)", created.len()),
        Err(e) => warn!("Failed to insert demo students, nothing was written: {}", e),
    }
}

/// 安装 rustls crypto provider
/// sqlx 的 rustls 需要进程级 provider，已安装时保留现有的
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("A rustls crypto provider is already installed, keeping it");
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> StartupContext {
    install_crypto_provider();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    if AppConfig::get().database.seed_demo {
        seed_demo_students(&storage).await;
    }

    StartupContext { storage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    #[tokio::test]
    async fn test_seed_fills_empty_table_once() {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await);

        seed_demo_students(&storage).await;
        assert_eq!(
            storage.count_students().await.unwrap(),
            DEMO_STUDENTS.len() as u64
        );

        seed_demo_students(&storage).await;
        assert_eq!(
            storage.count_students().await.unwrap(),
            DEMO_STUDENTS.len() as u64
        );
    }

    #[test]
    fn test_install_crypto_provider_twice() {
        install_crypto_provider();
        install_crypto_provider();
        assert!(rustls::crypto::CryptoProvider::get_default().is_some());
    }
}
