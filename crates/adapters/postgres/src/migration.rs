//! PostgreSQL 迁移管理模块
//!
//! 按版本号顺序执行 SQL，已执行的版本记录在 `_migrations` 表中

use sha2::{Digest, Sha256};
use sqlx::PgPool;
use std::collections::HashMap;
use storefront_errors::{AppError, AppResult};
use tracing::{info, warn};

/// 迁移记录
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MigrationRecord {
    pub version: i64,
    pub name: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub checksum: String,
}

/// 迁移定义
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub name: String,
    pub up_sql: String,
    pub checksum: String,
}

impl Migration {
    pub fn new(version: i64, name: impl Into<String>, up_sql: impl Into<String>) -> Self {
        let up_sql = up_sql.into();
        let checksum = checksum(&up_sql);
        Self {
            version,
            name: name.into(),
            up_sql,
            checksum,
        }
    }
}

/// SQL 内容的 SHA-256，用于发现已执行迁移被修改
fn checksum(sql: &str) -> String {
    hex::encode(Sha256::digest(sql.as_bytes()))
}

/// 迁移管理器
pub struct MigrationManager {
    pool: PgPool,
    table_name: String,
}

impl MigrationManager {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            table_name: "_migrations".to_string(),
        }
    }

    /// 初始化迁移表
    pub async fn init(&self) -> AppResult<()> {
        let create_sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                version BIGINT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                checksum VARCHAR(64) NOT NULL
            )
            "#,
            self.table_name
        );

        sqlx::query(&create_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create migration table: {}", e)))?;

        Ok(())
    }

    /// 获取已应用的迁移
    pub async fn applied_migrations(&self) -> AppResult<Vec<MigrationRecord>> {
        let sql = format!(
            "SELECT version, name, applied_at, checksum FROM {} ORDER BY version ASC",
            self.table_name
        );

        sqlx::query_as::<_, MigrationRecord>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get migrations: {}", e)))
    }

    /// 在单个事务中应用一个迁移并记录
    async fn apply(&self, migration: &Migration) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::raw_sql(&migration.up_sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to apply migration {}: {}",
                    migration.version, e
                ))
            })?;

        let insert_sql = format!(
            "INSERT INTO {} (version, name, checksum) VALUES ($1, $2, $3)",
            self.table_name
        );
        sqlx::query(&insert_sql)
            .bind(migration.version)
            .bind(&migration.name)
            .bind(&migration.checksum)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to record migration: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit migration: {}", e)))?;

        info!(
            version = migration.version,
            name = %migration.name,
            "Migration applied"
        );
        Ok(())
    }

    /// 应用所有待处理的迁移
    ///
    /// 已执行迁移的校验和不一致或某个迁移失败时返回错误，后续迁移不再执行
    pub async fn migrate(&self, migrations: &[Migration]) -> AppResult<MigrationResult> {
        self.init().await?;

        let applied: HashMap<i64, String> = self
            .applied_migrations()
            .await?
            .into_iter()
            .map(|r| (r.version, r.checksum))
            .collect();

        let plan = plan(migrations, &applied)?;
        let mut result = MigrationResult {
            applied: Vec::new(),
            skipped: plan.skipped,
        };

        for migration in plan.pending {
            self.apply(migration).await?;
            result.applied.push(migration.version);
        }

        if result.applied.is_empty() {
            info!(skipped = result.skipped.len(), "Schema up to date");
        }
        Ok(result)
    }
}

struct MigrationPlan<'a> {
    pending: Vec<&'a Migration>,
    skipped: Vec<i64>,
}

/// 按版本排序并与已执行记录比对
fn plan<'a>(
    migrations: &'a [Migration],
    applied: &HashMap<i64, String>,
) -> AppResult<MigrationPlan<'a>> {
    let mut sorted: Vec<&Migration> = migrations.iter().collect();
    sorted.sort_by_key(|m| m.version);

    let mut pending = Vec::new();
    let mut skipped = Vec::new();
    for migration in sorted {
        match applied.get(&migration.version) {
            Some(recorded) if *recorded != migration.checksum => {
                warn!(
                    version = migration.version,
                    name = %migration.name,
                    "Checksum mismatch"
                );
                return Err(AppError::internal(format!(
                    "Migration {} ({}) has been modified after it was applied",
                    migration.version, migration.name
                )));
            }
            Some(_) => skipped.push(migration.version),
            None => pending.push(migration),
        }
    }

    Ok(MigrationPlan { pending, skipped })
}

/// 迁移结果
#[derive(Debug, Clone)]
pub struct MigrationResult {
    pub applied: Vec<i64>,
    pub skipped: Vec<i64>,
}

impl MigrationResult {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }
}
