//! Database operations for transportation records.

use rusqlite::{Connection, Row, types::Type};
use time::OffsetDateTime;

use crate::{
    Error,
    record::{
        TransportationRecord, ValidatedRecord,
        domain::{format_created_at, parse_created_at},
    },
};

/// Store a validated record and return it with its generated ID and creation time.
///
/// The creation time is the current UTC time truncated to whole seconds.
///
/// # Errors
/// This function will return an [Error::SqlError] if the record cannot be written.
pub fn insert_record(
    record: ValidatedRecord,
    connection: &Connection,
) -> Result<TransportationRecord, Error> {
    let created_at = format_created_at(now_utc_seconds());

    let record = connection
        .prepare(
            "INSERT INTO transportation_records (
                user_name, travel_date, mode, origin, destination, distance_km, cost, notes, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             RETURNING id, user_name, travel_date, mode, origin, destination, distance_km, cost, notes, created_at",
        )?
        .query_row(
            (
                record.user_name,
                record.travel_date,
                record.mode,
                record.origin,
                record.destination,
                record.distance_km,
                record.cost,
                record.notes,
                created_at,
            ),
            map_record_row,
        )?;

    Ok(record)
}

/// Retrieve up to `limit` of the most recently stored records, newest first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn list_latest_records(
    limit: u32,
    connection: &Connection,
) -> Result<Vec<TransportationRecord>, Error> {
    connection
        .prepare(
            "SELECT id, user_name, travel_date, mode, origin, destination, distance_km, cost, notes, created_at
             FROM transportation_records
             ORDER BY id DESC
             LIMIT ?1",
        )?
        .query_map([limit], map_record_row)?
        .map(|maybe_record| maybe_record.map_err(Error::from))
        .collect()
}

/// Retrieve every record, newest first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn list_all_records(connection: &Connection) -> Result<Vec<TransportationRecord>, Error> {
    connection
        .prepare(
            "SELECT id, user_name, travel_date, mode, origin, destination, distance_km, cost, notes, created_at
             FROM transportation_records
             ORDER BY id DESC",
        )?
        .query_map([], map_record_row)?
        .map(|maybe_record| maybe_record.map_err(Error::from))
        .collect()
}

/// Get the total number of records in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_records(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transportation_records;", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the record table in the database if it does not exist.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_record_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transportation_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_name TEXT NOT NULL,
                travel_date TEXT NOT NULL,
                mode TEXT NOT NULL,
                origin TEXT NOT NULL,
                destination TEXT NOT NULL,
                distance_km REAL NOT NULL,
                cost REAL NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn now_utc_seconds() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();

    now.replace_nanosecond(0).unwrap_or(now)
}

/// Map a database row to a TransportationRecord.
fn map_record_row(row: &Row) -> Result<TransportationRecord, rusqlite::Error> {
    let id = row.get(0)?;
    let user_name = row.get(1)?;
    let travel_date = row.get(2)?;
    let mode = row.get(3)?;
    let origin = row.get(4)?;
    let destination = row.get(5)?;
    let distance_km = row.get(6)?;
    let cost = row.get(7)?;
    let notes: Option<String> = row.get(8)?;
    let raw_created_at: String = row.get(9)?;
    let created_at = parse_created_at(&raw_created_at).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(error))
    })?;

    Ok(TransportationRecord {
        id,
        user_name,
        travel_date,
        mode,
        origin,
        destination,
        distance_km,
        cost,
        notes: notes.unwrap_or_default(),
        created_at,
    })
}
