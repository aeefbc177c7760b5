use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::is_plain_identifier;

const SCHEMA: [&str; 5] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id       SERIAL PRIMARY KEY,
        username TEXT NOT NULL,
        email    TEXT NOT NULL,
        password TEXT NOT NULL
    )"#,
    r#"CREATE UNIQUE INDEX IF NOT EXISTS users_user_email ON users (email)"#,
    r#"
    CREATE TABLE IF NOT EXISTS advertisements (
        id          SERIAL PRIMARY KEY,
        title       VARCHAR(120) NOT NULL,
        description TEXT NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
        creator_id  INTEGER NOT NULL REFERENCES users (id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS ix_advertisements_title ON advertisements (title)"#,
    r#"CREATE INDEX IF NOT EXISTS ix_advertisements_description ON advertisements (description)"#,
];

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("connect to database")
}

/// Creates the users and advertisements tables if they are missing. Idempotent.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    for stmt in SCHEMA {
        sqlx::query(stmt).execute(db).await.with_context(|| {
            let head: String = stmt.trim().chars().take(48).collect();
            format!("apply schema statement: {}", head.replace('\n', " "))
        })?;
    }
    tracing::info!("schema ensured");
    Ok(())
}

/// Dumps every row of `table` as a JSON array of rows, each row an array of
/// its column values in table order.
pub async fn dump_table(db: &PgPool, table: &str) -> Result<serde_json::Value, sqlx::Error> {
    if !is_plain_identifier(table) {
        return Err(sqlx::Error::Protocol(format!("refusing table name {table:?}")));
    }
    let sql = format!(
        r#"
        SELECT COALESCE(json_agg(t.r), '[]'::json)
        FROM (
            SELECT (
                SELECT json_agg(v.value ORDER BY v.ord)
                FROM json_each(row_to_json(x)) WITH ORDINALITY AS v(key, value, ord)
            ) AS r
            FROM {table} x
        ) t
        "#
    );
    sqlx::query_scalar::<_, serde_json::Value>(&sql)
        .fetch_one(db)
        .await
}
