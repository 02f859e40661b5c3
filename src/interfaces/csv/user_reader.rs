use crate::domain::ports::UserStore;
use crate::domain::user::UserRecord;
use crate::error::{DropError, Result};
use std::io::Read;
use tracing::warn;

/// Counts from a seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Rows whose fid was already known. Their stored record is left as is.
    pub existing: usize,
    pub malformed: usize,
}

/// Reads user records from a CSV source with a `fid,wallet,recievedrop,points` header.
///
/// Whitespace around fields is trimmed, and `points` may be omitted.
pub struct UserReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> UserReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one record per row.
    pub fn users(self) -> impl Iterator<Item = Result<UserRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(DropError::from))
    }

    /// Loads every readable row into `store` without touching known users.
    ///
    /// Malformed rows are logged and skipped; store failures abort the run.
    pub async fn seed(self, store: &dyn UserStore) -> Result<SeedReport> {
        let mut report = SeedReport::default();
        for user in self.users() {
            match user {
                Ok(user) => {
                    if store.insert_if_absent(user).await? {
                        report.inserted += 1;
                    } else {
                        report.existing += 1;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Error reading user");
                    report.malformed += 1;
                }
            }
        }
        Ok(report)
    }
}
