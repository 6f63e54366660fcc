use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use logwindow_core::errors::{LogWindowError, Result};
use logwindow_protocol::logs::LogRecord;
use tracing::{info, warn};

/// Records of a single user, in dataset order, borrowed for one request.
pub type UserLogView<'a> = Vec<&'a LogRecord>;

/// Immutable, shareable log dataset loaded once at startup.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[LogRecord]>,
}

impl Dataset {
    /// Wraps already parsed records without reordering them.
    pub fn from_records(records: Vec<LogRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Reads a newline-delimited JSON file, one record per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;

        info!(
            path = %path.display(),
            records = dataset.len(),
            users = dataset.user_count(),
            "loaded log dataset"
        );
        for user_id in dataset.unordered_users() {
            warn!(%user_id, "user records are not in ascending timestamp order");
        }

        Ok(dataset)
    }

    /// Parses NDJSON from any buffered reader. Blank lines are skipped; any
    /// other unparseable line aborts the load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let record = serde_json::from_str::<LogRecord>(&line)
                .map_err(|err| LogWindowError::dataset(index + 1, err.to_string()))?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Filters the records of `user_id`, preserving dataset order.
    pub fn user_view(&self, user_id: &str) -> UserLogView<'_> {
        self.records
            .iter()
            .filter(|record| record.belongs_to(user_id))
            .collect()
    }

    pub fn user_count(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.user_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Users whose records go back in time somewhere in the dataset.
    pub fn unordered_users(&self) -> Vec<String> {
        let mut last_seen: HashMap<&str, &LogRecord> = HashMap::new();
        let mut unordered: Vec<String> = Vec::new();

        for record in self.records.iter() {
            if let Some(previous) = last_seen.insert(record.user_id.as_str(), record) {
                if previous.timestamp > record.timestamp
                    && !unordered.iter().any(|user| user == &record.user_id)
                {
                    unordered.push(record.user_id.clone());
                }
            }
        }

        unordered
    }
}
