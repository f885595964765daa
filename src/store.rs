#[cfg(test)]
use std::str::FromStr;
#[cfg(test)]
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::{Config, ItemVariant};
use crate::models::{PricedItem, PricedItemPayload, TitledItem, TitledItemPayload};

const PRICED_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL
)";

const TITLED_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (title <> ''),
    description TEXT
)";

const PRICED_COLUMNS: &str = "SELECT id, name, price FROM items LIMIT 0";

const TITLED_COLUMNS: &str = "SELECT id, title, description FROM items LIMIT 0";

/// Column tuple selected for a priced item: `id, name, price`
type PricedRow = (i64, String, f64);

/// Column tuple selected for a titled item: `id, title, description`
type TitledRow = (i64, String, Option<String>);

impl From<PricedRow> for PricedItem {
    fn from((id, name, price): PricedRow) -> Self {
        PricedItem { id, name, price }
    }
}

impl From<TitledRow> for TitledItem {
    fn from((id, title, description): TitledRow) -> Self {
        TitledItem {
            id,
            title,
            description,
        }
    }
}

/// Shareable SQLite-backed item store for use across async handlers
///
/// Every operation runs a single autocommitted statement on a connection
/// checked out from the pool. Nothing is cached between calls and no
/// transaction spans more than one request.
#[derive(Clone)]
pub struct ItemStore {
    pool: SqlitePool,
    variant: ItemVariant,
}

impl ItemStore {
    /// Open the database described by `config`
    ///
    /// Creates the parent directory and the database file when they are
    /// missing, then ensures the table for the configured variant exists.
    /// Fails when the file already holds the other variant's `items` table.
    pub async fn from_config(config: &Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to open database {}", config.database_path.display())
            })?;

        tracing::info!(
            "Successfully opened database: {}",
            config.database_path.display()
        );

        let store = Self {
            pool,
            variant: config.variant,
        };
        store.ensure_schema().await.with_context(|| {
            format!(
                "Database {} cannot serve {} items",
                config.database_path.display(),
                config.variant
            )
        })?;
        Ok(store)
    }

    /// Private in-memory database with the variant's schema applied
    ///
    /// The pool holds exactly one connection that never expires, since each
    /// SQLite memory connection is its own database.
    #[cfg(test)]
    pub async fn in_memory(variant: ItemVariant) -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Failed to build in-memory database options")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .context("Failed to open in-memory database")?;

        let store = Self { pool, variant };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Close the pool so later operations fail
    #[cfg(test)]
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the variant's table if missing, then check that the existing
    /// `items` table carries the variant's columns
    async fn ensure_schema(&self) -> Result<()> {
        let (ddl, columns) = match self.variant {
            ItemVariant::Priced => (PRICED_SCHEMA, PRICED_COLUMNS),
            ItemVariant::Titled => (TITLED_SCHEMA, TITLED_COLUMNS),
        };

        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to create {} items table", self.variant))?;

        // `IF NOT EXISTS` keeps a table created for the other variant; selecting
        // the expected columns fails at prepare time when any is missing.
        sqlx::query(columns)
            .execute(&self.pool)
            .await
            .with_context(|| {
                format!("Existing items table does not have the {} columns", self.variant)
            })?;

        tracing::debug!("Ensured {} items table exists", self.variant);
        Ok(())
    }

    /// Perform a health check by executing `SELECT 1`
    pub async fn health_check(&self) -> Result<()> {
        let one: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("Failed to execute health check query")?;

        if one == 1 {
            tracing::debug!("Health check query succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned {}", one))
        }
    }

    /// Insert a priced item; the database assigns the identifier
    pub async fn create_priced(&self, payload: &PricedItemPayload) -> Result<PricedItem> {
        let result = sqlx::query("INSERT INTO items (name, price) VALUES (?, ?)")
            .bind(payload.name.as_str())
            .bind(payload.price)
            .execute(&self.pool)
            .await
            .context("Failed to insert priced item")?;

        let id = result.last_insert_rowid();
        tracing::debug!("Inserted priced item with id: {}", id);
        Ok(PricedItem::from_payload(id, payload.clone()))
    }

    /// Read a priced item by identifier
    ///
    /// # Returns
    /// * `Ok(Some(item))` - Row found
    /// * `Ok(None)` - No row with that identifier
    pub async fn read_priced(&self, id: i64) -> Result<Option<PricedItem>> {
        let row: Option<PricedRow> =
            sqlx::query_as("SELECT id, name, price FROM items WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to query priced item")?;

        Ok(row.map(PricedItem::from))
    }

    /// Overwrite every mutable field of a priced item
    ///
    /// Returns `false` when no row matched; nothing is inserted in that case.
    pub async fn replace_priced(&self, id: i64, payload: &PricedItemPayload) -> Result<bool> {
        let result = sqlx::query("UPDATE items SET name = ?, price = ? WHERE id = ?")
            .bind(payload.name.as_str())
            .bind(payload.price)
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to update priced item")?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a priced item, returning whether a row was removed
    pub async fn delete_priced(&self, id: i64) -> Result<bool> {
        self.delete(id).await
    }

    /// Insert a titled item and return the stored row
    pub async fn create_titled(&self, payload: &TitledItemPayload) -> Result<TitledItem> {
        let row: TitledRow = sqlx::query_as(
            "INSERT INTO items (title, description) VALUES (?, ?) RETURNING id, title, description",
        )
        .bind(payload.title.as_str())
        .bind(payload.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert titled item")?;

        tracing::debug!("Inserted titled item with id: {}", row.0);
        Ok(row.into())
    }

    /// Read a titled item by identifier
    pub async fn read_titled(&self, id: i64) -> Result<Option<TitledItem>> {
        let row: Option<TitledRow> =
            sqlx::query_as("SELECT id, title, description FROM items WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to query titled item")?;

        Ok(row.map(TitledItem::from))
    }

    /// All stored titled items
    ///
    /// Rows come back in id order, but callers should not depend on it.
    pub async fn list_titled(&self) -> Result<Vec<TitledItem>> {
        let rows: Vec<TitledRow> =
            sqlx::query_as("SELECT id, title, description FROM items ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .context("Failed to list titled items")?;

        tracing::debug!("Listed {} titled items", rows.len());
        Ok(rows.into_iter().map(TitledItem::from).collect())
    }

    /// Overwrite every mutable field of a titled item
    ///
    /// Returns the row as written, or `None` when no row matched.
    pub async fn replace_titled(
        &self,
        id: i64,
        payload: &TitledItemPayload,
    ) -> Result<Option<TitledItem>> {
        let row: Option<TitledRow> = sqlx::query_as(
            "UPDATE items SET title = ?, description = ? WHERE id = ? \
             RETURNING id, title, description",
        )
        .bind(payload.title.as_str())
        .bind(payload.description.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update titled item")?;

        Ok(row.map(TitledItem::from))
    }

    /// Delete a titled item, returning whether a row was removed
    pub async fn delete_titled(&self, id: i64) -> Result<bool> {
        self.delete(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete item")?;

        let removed = result.rows_affected() > 0;
        tracing::debug!("Delete of item {} removed a row: {}", id, removed);
        Ok(removed)
    }
}
