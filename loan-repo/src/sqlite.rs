//! SQLite repository adapter.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use loan_types::{LoanPayment, LoanPaymentRepository, RepoError};

use crate::types::DbLoanPayment;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_loan_payments.sql");
        for statement in ddl.split(';') {
            let stmt = statement.trim();
            if !stmt.is_empty() {
                sqlx::query(stmt).execute(&pool).await?;
            }
        }

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl LoanPaymentRepository for SqliteRepo {
    async fn list_payments(&self) -> Result<Vec<LoanPayment>, RepoError> {
        let rows: Vec<DbLoanPayment> = sqlx::query_as(
            r#"SELECT id, loan_id, payment_date, amount, status, created_at
               FROM loan_payments ORDER BY created_at"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbLoanPayment::into_domain).collect()
    }

    async fn find_payments_by_date(&self, date: NaiveDate) -> Result<Vec<LoanPayment>, RepoError> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let rows: Vec<DbLoanPayment> = sqlx::query_as(
            r#"SELECT id, loan_id, payment_date, amount, status, created_at
               FROM loan_payments WHERE payment_date = ? ORDER BY created_at"#,
        )
        .bind(&date_str)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbLoanPayment::into_domain).collect()
    }

    async fn record_payment(&self, payment: &LoanPayment) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO loan_payments (id, loan_id, payment_date, amount, status, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(payment.id.to_string())
        .bind(payment.loan_id)
        .bind(payment.payment_date.format("%Y-%m-%d").to_string())
        .bind(payment.amount)
        .bind(payment.status.to_string())
        .bind(payment.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}
