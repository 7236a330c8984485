//! SQLite trade repository.

use crate::domain::error::TradepipeError;
use crate::domain::settings::parse_pool_size;
use crate::domain::trade::TradeRecord;
use crate::ports::config_port::ConfigPort;
use crate::ports::logger_port::LoggerPort;
use crate::ports::repository_port::RepositoryPort;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use std::path::Path;

pub struct SqliteRepository {
    pool: Pool<SqliteConnectionManager>,
}

fn pool_error(e: r2d2::Error) -> TradepipeError {
    TradepipeError::Storage {
        reason: e.to_string(),
    }
}

fn query_error(e: rusqlite::Error) -> TradepipeError {
    TradepipeError::Storage {
        reason: e.to_string(),
    }
}

impl SqliteRepository {
    /// Opens `db_path` with the pool size from `[sqlite]`.
    pub fn from_config(config: &dyn ConfigPort, db_path: &Path) -> Result<Self, TradepipeError> {
        let pool_size = parse_pool_size(config)?;
        Self::open(&db_path.to_string_lossy(), pool_size)
    }

    pub fn open(db_path: &str, pool_size: u32) -> Result<Self, TradepipeError> {
        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .map_err(pool_error)?;

        Ok(Self { pool })
    }

    pub fn in_memory() -> Result<Self, TradepipeError> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(pool_error)?;

        Ok(Self { pool })
    }

    fn connection(&self) -> Result<PooledConnection<SqliteConnectionManager>, TradepipeError> {
        self.pool.get().map_err(pool_error)
    }

    pub fn initialize_schema(&self) -> Result<(), TradepipeError> {
        let conn = self.connection()?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS trades (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                source_currency TEXT NOT NULL,
                destination_currency TEXT NOT NULL,
                lots REAL NOT NULL,
                price REAL NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_trades_pair
                ON trades(source_currency, destination_currency);",
        )
        .map_err(query_error)?;

        Ok(())
    }

    /// All stored trades in insertion order.
    pub fn fetch_all(&self) -> Result<Vec<TradeRecord>, TradepipeError> {
        let conn = self.connection()?;

        let mut stmt = conn
            .prepare(
                "SELECT source_currency, destination_currency, lots, price
                 FROM trades
                 ORDER BY id ASC",
            )
            .map_err(query_error)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(TradeRecord {
                    source_currency: row.get(0)?,
                    destination_currency: row.get(1)?,
                    lots: row.get(2)?,
                    price: row.get(3)?,
                })
            })
            .map_err(query_error)?;

        let mut trades = Vec::new();
        for row in rows {
            trades.push(row.map_err(query_error)?);
        }

        Ok(trades)
    }

    pub fn count(&self) -> Result<usize, TradepipeError> {
        let conn = self.connection()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM trades", [], |row| row.get(0))
            .map_err(query_error)?;
        Ok(count as usize)
    }
}

impl RepositoryPort for SqliteRepository {
    fn store_records(
        &self,
        records: &[TradeRecord],
        logger: &dyn LoggerPort,
    ) -> Result<(), TradepipeError> {
        let mut conn = self.connection()?;
        let tx = conn.transaction().map_err(query_error)?;

        for trade in records {
            tx.execute(
                "INSERT INTO trades (source_currency, destination_currency, lots, price)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    trade.source_currency,
                    trade.destination_currency,
                    trade.lots,
                    trade.price
                ],
            )
            .map_err(query_error)?;
        }

        tx.commit().map_err(query_error)?;

        logger.log(&format!("INFO: {} trades processed", records.len()));
        Ok(())
    }
}
