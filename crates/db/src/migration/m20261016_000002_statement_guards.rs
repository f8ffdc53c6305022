//! Statement guards.
//!
//! Makes the statements table append-only at the database level and keeps
//! `users.updated_at` current.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(TRIGGERS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_TRIGGERS_SQL).await?;
        Ok(())
    }
}

const TRIGGERS_SQL: &str = r"
-- ============================================================
-- FUNCTION: prevent_statement_modification
-- ============================================================
CREATE OR REPLACE FUNCTION prevent_statement_modification()
RETURNS TRIGGER AS $$
BEGIN
    RAISE EXCEPTION 'Statements are append-only. Record a new operation instead.';
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_prevent_statement_mod
BEFORE UPDATE OR DELETE ON statements
FOR EACH ROW
EXECUTE FUNCTION prevent_statement_modification();

-- ============================================================
-- FUNCTION: touch_updated_at
-- ============================================================
CREATE OR REPLACE FUNCTION touch_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_users_updated_at
BEFORE UPDATE ON users
FOR EACH ROW
EXECUTE FUNCTION touch_updated_at();
";

const DROP_TRIGGERS_SQL: &str = r"
DROP TRIGGER IF EXISTS trg_users_updated_at ON users;
DROP TRIGGER IF EXISTS trg_prevent_statement_mod ON statements;
DROP FUNCTION IF EXISTS touch_updated_at();
DROP FUNCTION IF EXISTS prevent_statement_modification();
";
