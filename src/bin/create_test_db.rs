use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use transport_records::{RecordForm, count_records, initialize_db, insert_record};

/// A utility for creating a test database for the transport_records server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_TRIPS: [(&str, &str, &str, &str, &str, &str, &str, &str); 5] = [
    ("Alice", "2024-01-05", "bus", "Central", "Airport", "12.5", "3.00", ""),
    ("Bob", "2024-01-06", "train", "North", "Harbour", "31", "7.80", "Peak fare"),
    ("Alice", "2024-01-08", "bike", "Central", "University", "4.2", "0", ""),
    ("Carol", "2024-01-09", "taxi", "Airport", "Hotel", "18.9", "42.50", "Late flight, no buses"),
    ("Bob", "2024-01-10", "ferry", "Harbour", "Island", "9", "11", "Return trip\nbooked online"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample records...");

    for (user_name, travel_date, mode, origin, destination, distance_km, cost, notes) in
        SAMPLE_TRIPS
    {
        let record = RecordForm {
            user_name: Some(user_name.to_owned()),
            travel_date: Some(travel_date.to_owned()),
            mode: Some(mode.to_owned()),
            origin: Some(origin.to_owned()),
            destination: Some(destination.to_owned()),
            distance_km: Some(distance_km.to_owned()),
            cost: Some(cost.to_owned()),
            notes: Some(notes.to_owned()),
        }
        .validate()?;

        insert_record(record, &conn)?;
    }

    println!("Success! The database has {} records.", count_records(&conn)?);

    Ok(())
}
