//! CSV export of every record.
//!
//! The records are read in one query, then written to the response one CSV row
//! at a time so the whole file is never held in memory as text.

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::{FromRef, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use csv::{Terminator, WriterBuilder};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    record::{TransportationRecord, list_all_records},
};

/// The file name suggested to the client for the exported CSV file.
pub const EXPORT_FILE_NAME: &str = "transportation_records.csv";

/// The column names written as the first row of the export.
const HEADER: [&str; 10] = [
    "id",
    "user_name",
    "travel_date",
    "mode",
    "origin",
    "destination",
    "distance_km",
    "cost",
    "notes",
    "created_at",
];

/// A lazy sequence of CSV encoded chunks: the header row, then one row per record.
///
/// Records are written in the order they are given, this type does not sort.
/// Once exhausted, a new `CsvChunks` must be created to serialize the records again.
pub struct CsvChunks {
    header_written: bool,
    records: std::vec::IntoIter<TransportationRecord>,
}

impl CsvChunks {
    /// Create the chunk sequence for `records`.
    pub fn new(records: Vec<TransportationRecord>) -> Self {
        Self {
            header_written: false,
            records: records.into_iter(),
        }
    }
}

impl Iterator for CsvChunks {
    type Item = Result<Vec<u8>, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.header_written {
            self.header_written = true;
            return Some(encode_row(HEADER));
        }

        let record = self.records.next()?;

        Some(encode_row(record_to_row(&record)))
    }
}

fn record_to_row(record: &TransportationRecord) -> [String; 10] {
    [
        record.id.to_string(),
        record.user_name.clone(),
        record.travel_date.clone(),
        record.mode.clone(),
        record.origin.clone(),
        record.destination.clone(),
        format_number(record.distance_km),
        format_number(record.cost),
        record.notes.clone(),
        record.created_at_text(),
    ]
}

/// Format a number in its shortest round-trip form, keeping ".0" on whole numbers.
fn format_number(number: f64) -> String {
    format!("{number:?}")
}

/// Encode a single CSV row, quoting fields that contain delimiters, quotes or line breaks.
fn encode_row<I, T>(row: I) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(row)?;

    writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))
}

/// The state needed for exporting records.
#[derive(Debug, Clone)]
pub struct ExportState {
    /// The database connection for reading records.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that streams every record, newest first, as a CSV attachment.
pub async fn export_records_endpoint(
    State(state): State<ExportState>,
) -> Result<Response, Error> {
    let records = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        list_all_records(&connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve records: {error}"))?
    };

    tracing::debug!("Exporting {} records", records.len());

    let body = Body::from_stream(tokio_stream::iter(CsvChunks::new(records)));

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename={EXPORT_FILE_NAME}"),
            ),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod csv_chunks_tests {
    use time::macros::datetime;

    use crate::record::TransportationRecord;

    use super::CsvChunks;

    fn record(id: i64, notes: &str) -> TransportationRecord {
        TransportationRecord {
            id,
            user_name: "Alice".to_owned(),
            travel_date: "2024-01-05".to_owned(),
            mode: "bus".to_owned(),
            origin: "A".to_owned(),
            destination: "B".to_owned(),
            distance_km: 12.5,
            cost: 3.0,
            notes: notes.to_owned(),
            created_at: datetime!(2024-01-05 09:30:00 UTC),
        }
    }

    fn collect_text(chunks: CsvChunks) -> String {
        let bytes = chunks
            .map(|chunk| chunk.expect("Could not encode chunk"))
            .collect::<Vec<_>>()
            .concat();

        String::from_utf8(bytes).expect("Export is not valid UTF-8")
    }

    #[test]
    fn empty_export_is_just_the_header() {
        let chunks = CsvChunks::new(Vec::new()).collect::<Vec<_>>();

        assert_eq!(chunks.len(), 1);
        assert_eq!(
            chunks[0].as_ref().unwrap(),
            b"id,user_name,travel_date,mode,origin,destination,distance_km,cost,notes,created_at\r\n"
        );
    }

    #[test]
    fn one_chunk_per_record() {
        let chunks = CsvChunks::new(vec![record(2, ""), record(1, "")]);

        assert_eq!(chunks.count(), 3);
    }

    #[test]
    fn rows_use_natural_text_form() {
        let text = collect_text(CsvChunks::new(vec![record(7, "")]));

        let rows = text.split("\r\n").collect::<Vec<_>>();
        assert_eq!(rows[1], "7,Alice,2024-01-05,bus,A,B,12.5,3.0,,2024-01-05T09:30:00");
    }

    #[test]
    fn special_characters_are_quoted() {
        let text = collect_text(CsvChunks::new(vec![record(1, "said \"hi\", then\nleft")]));

        assert!(
            text.contains("\"said \"\"hi\"\", then\nleft\""),
            "notes not quoted in {text:?}"
        );
    }

    #[test]
    fn input_order_is_kept() {
        let text = collect_text(CsvChunks::new(vec![record(1, ""), record(3, ""), record(2, "")]));

        let ids = text
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["1", "3", "2"]);
    }

    #[test]
    fn round_trips_through_csv_reader() {
        let records = vec![
            record(3, "has, a comma\nand a line break"),
            record(2, "plain"),
            TransportationRecord {
                user_name: "Zoë \"Z\" Smith".to_owned(),
                distance_km: 0.1,
                cost: -2.75,
                ..record(1, "")
            },
        ];

        let text = collect_text(CsvChunks::new(records.clone()));
        let mut reader = csv::Reader::from_reader(text.as_bytes());

        let headers = reader.headers().expect("Could not read header").clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            [
                "id",
                "user_name",
                "travel_date",
                "mode",
                "origin",
                "destination",
                "distance_km",
                "cost",
                "notes",
                "created_at"
            ]
        );

        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .expect("Could not read rows");
        assert_eq!(rows.len(), records.len());

        for (row, want) in rows.iter().zip(&records) {
            assert_eq!(row[0].parse::<i64>().unwrap(), want.id);
            assert_eq!(&row[1], want.user_name);
            assert_eq!(&row[2], want.travel_date);
            assert_eq!(&row[3], want.mode);
            assert_eq!(&row[4], want.origin);
            assert_eq!(&row[5], want.destination);
            assert_eq!(row[6].parse::<f64>().unwrap(), want.distance_km);
            assert_eq!(row[7].parse::<f64>().unwrap(), want.cost);
            assert_eq!(&row[8], want.notes);
            assert_eq!(&row[9], want.created_at_text());
        }
    }
}
