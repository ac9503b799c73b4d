//! Name-extension partitioning: `"cute_cat.jpg"` becomes `cute_cat -> jpg`.
//!
//! A label is split on `.`; the first segment is the key and the last
//! segment the value. A label without `.` maps to itself, and a repeated key
//! keeps the value of its last occurrence.

use std::collections::HashMap;

use tracing::trace;

use crate::{as_text, Result};

pub const DELIMITER: char = '.';

pub type PartitionTable = HashMap<String, String>;

/// First and last segment of `label`.
pub fn split_label(label: &str) -> Option<(&str, &str)> {
    let key = label.split(DELIMITER).next()?;
    let value = label.rsplit(DELIMITER).next()?;
    Some((key, value))
}

pub fn partition<I, S>(labels: I) -> PartitionTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = PartitionTable::new();
    for label in labels {
        let label = label.as_ref();
        let Some((key, value)) = split_label(label) else {
            continue;
        };
        if let Some(old) = table.insert(key.to_string(), value.to_string()) {
            trace!("{label}: {key} overwrites {old} with {value}");
        }
    }
    table
}

/// Like [`partition`], for raw lines that may not be UTF-8. Fails on the
/// first element that is not text.
pub fn partition_bytes<I, B>(lines: I) -> Result<PartitionTable>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut labels = vec![];
    for (index, line) in lines.into_iter().enumerate() {
        let label = as_text(&format!("element {index}"), line.as_ref())?;
        labels.push(label.to_owned());
    }
    Ok(partition(labels))
}
