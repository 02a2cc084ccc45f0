//! Append-only audit log of band change attempts.
//!
//! Records are immutable once inserted; the only delete is a full clear. The
//! store assigns identifiers, the writer assigns timestamps. No actual RF
//! reconfiguration happens anywhere near this module; an entry records
//! intent, nothing more.

use crate::{
    snapshot::{FrequencyInfo, NetworkInfo},
    Result,
};
use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqliteExecutor;

/// The only status written in the current scope. The schema allows more.
pub const STATUS_LOGGED: &str = "Logged";

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ChangeLogRecord {
    /// Store-assigned; 0 until inserted.
    pub id: i64,
    /// Epoch milliseconds, assigned by the writer at construction time.
    pub timestamp_ms: i64,
    pub old_band: String,
    pub old_frequency: String,
    pub new_band: String,
    pub new_frequency: String,
    pub status: String,
    pub operator_name: String,
    pub network_type: String,
}

impl ChangeLogRecord {
    /// Builds a record for one attempt, stamped now. A missing prior current
    /// cell is written as "Unknown".
    pub fn new(old: Option<&FrequencyInfo>, new: &FrequencyInfo, context: &NetworkInfo) -> Self {
        let (old_band, old_frequency) = match old {
            Some(old) => (old.band.clone(), format!("{} MHz", old.frequency_mhz)),
            None => ("Unknown".to_string(), "Unknown".to_string()),
        };
        Self {
            id: 0,
            timestamp_ms: Utc::now().timestamp_millis(),
            old_band,
            old_frequency,
            new_band: new.band.clone(),
            new_frequency: format!("{} MHz", new.frequency_mhz),
            status: STATUS_LOGGED.to_string(),
            operator_name: context.operator.to_string(),
            network_type: context.network_type.to_string(),
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp_ms).single()
    }
}

/// Persists one record and returns the store-assigned identifier. Durable on
/// return; storage failure surfaces to the caller, never retried here.
pub async fn insert(exec: impl SqliteExecutor<'_>, record: &ChangeLogRecord) -> Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        insert into band_change_log
            (timestamp_ms, old_band, old_frequency, new_band, new_frequency, status, operator_name, network_type)
        values (?, ?, ?, ?, ?, ?, ?, ?)
        returning id
        "#,
    )
    .bind(record.timestamp_ms)
    .bind(&record.old_band)
    .bind(&record.old_frequency)
    .bind(&record.new_band)
    .bind(&record.new_frequency)
    .bind(&record.status)
    .bind(&record.operator_name)
    .bind(&record.network_type)
    .fetch_one(exec)
    .await?;
    tracing::debug!(id, new_band = %record.new_band, "band change logged");
    Ok(id)
}

/// Every record, newest first. Timestamp ties break by identifier, newest
/// insert first.
pub async fn list_all(exec: impl SqliteExecutor<'_>) -> Result<Vec<ChangeLogRecord>> {
    let records = sqlx::query_as::<_, ChangeLogRecord>(
        r#"
        select * from band_change_log
        order by timestamp_ms desc, id desc
        "#,
    )
    .fetch_all(exec)
    .await?;
    Ok(records)
}

/// At most `limit` records, newest first. A limit of 0 yields an empty list
/// (plain SQL `limit 0` semantics); negative limits are unrepresentable.
pub async fn list_recent(
    exec: impl SqliteExecutor<'_>,
    limit: u32,
) -> Result<Vec<ChangeLogRecord>> {
    let records = sqlx::query_as::<_, ChangeLogRecord>(
        r#"
        select * from band_change_log
        order by timestamp_ms desc, id desc
        limit ?
        "#,
    )
    .bind(limit as i64)
    .fetch_all(exec)
    .await?;
    Ok(records)
}

/// Irreversibly deletes every record. No soft delete, no undo.
pub async fn clear_all(exec: impl SqliteExecutor<'_>) -> Result {
    let deleted = sqlx::query("delete from band_change_log")
        .execute(exec)
        .await?
        .rows_affected();
    tracing::info!(deleted, "band change history cleared");
    Ok(())
}
