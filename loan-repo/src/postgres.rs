//! PostgreSQL repository adapter.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use loan_types::{LoanPayment, LoanPaymentRepository, RepoError};

use crate::types::DbLoanPayment;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_loan_payments_pg.sql"),
            "0001",
        )
        .await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl LoanPaymentRepository for PostgresRepo {
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
        let rows: Vec<DbLoanPayment> = sqlx::query_as(
            r#"SELECT id, loan_id, payment_date, amount, status, created_at
               FROM loan_payments WHERE payment_date = $1 ORDER BY created_at"#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbLoanPayment::into_domain).collect()
    }

    async fn record_payment(&self, payment: &LoanPayment) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO loan_payments (id, loan_id, payment_date, amount, status, created_at)
               VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(*payment.id.as_uuid())
        .bind(payment.loan_id)
        .bind(payment.payment_date)
        .bind(payment.amount)
        .bind(payment.status.to_string())
        .bind(payment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}
