/*! Sets up the application's database. */

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, record::create_record_table};

/// Create the application tables if they do not exist yet.
///
/// Safe to call on every start up, an existing database is left as is.
///
/// # Errors
/// Returns an [Error::SqlError] if the database cannot be opened for writing
/// or the schema cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_record_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
