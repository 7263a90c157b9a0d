//! The transactional executor.
//!
//! A [`StatementBatch`] accumulates parameterized statements and commits them
//! as one all-or-nothing unit. Statements run in push order; the first
//! failure aborts the unit and nothing it wrote survives.

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, TransactionTrait};

use crate::ResultEngine;

/// An ordered, single-use batch of statements.
///
/// `execute` takes the batch by value: a unit is built once, committed once.
/// Re-running the same logical movement means building a fresh batch.
#[derive(Debug, Default)]
pub struct StatementBatch {
    statements: Vec<Statement>,
}

impl StatementBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Run every statement inside one database transaction.
    ///
    /// The transaction holds a single pooled connection for its whole
    /// lifetime; it is released at commit, or at rollback when any statement
    /// errors (an uncommitted transaction rolls back on drop).
    pub async fn execute(self, db: &DatabaseConnection) -> ResultEngine<()> {
        let txn = db.begin().await?;

        for statement in self.statements {
            txn.execute(statement).await?;
        }

        txn.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DatabaseBackend;

    use super::*;

    fn statement(sql: &str) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, Vec::new())
    }

    #[test]
    fn preserves_push_order() {
        let mut batch = StatementBatch::new();
        batch.push(statement("INSERT INTO a VALUES (1)"));
        batch.push(statement("INSERT INTO b VALUES (2)"));
        batch.push(statement("INSERT INTO a VALUES (3)"));

        let sql: Vec<&str> = batch.statements().iter().map(|s| s.sql.as_str()).collect();
        assert_eq!(
            sql,
            vec![
                "INSERT INTO a VALUES (1)",
                "INSERT INTO b VALUES (2)",
                "INSERT INTO a VALUES (3)",
            ]
        );
    }

    #[test]
    fn starts_empty() {
        let batch = StatementBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }
}
