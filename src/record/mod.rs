//! Transportation records: the only thing this app stores.
//!
//! This module contains everything related to records:
//! - The `TransportationRecord` model and the form validation that produces `ValidatedRecord`s
//! - Database functions for storing and listing records
//! - The CSV export
//! - View handlers for the record pages and the form endpoint

mod db;
mod domain;
mod export;
mod list;
mod submit;
mod validate;

pub use db::{
    count_records, create_record_table, insert_record, list_all_records, list_latest_records,
};
pub use domain::{RecordForm, RecordId, TransportationRecord, ValidatedRecord};
pub use export::{CsvChunks, EXPORT_FILE_NAME, export_records_endpoint};
pub use list::{LATEST_RECORDS_LIMIT, get_index_page, get_records_page};
pub use submit::submit_record_endpoint;
