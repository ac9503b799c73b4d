use common::{integers, ops, KeyValue};
use tracing::warn;

/// `n -> n²`; squares that overflow are skipped.
pub fn map(filename: &str, contents: &str) -> Vec<KeyValue> {
    integers(filename, contents)
        .filter_map(|n| match ops::square(n) {
            Ok(sq) => Some(KeyValue::new(n.to_string(), sq.to_string())),
            Err(e) => {
                warn!("{filename}: {e}");
                None
            }
        })
        .collect()
}

pub fn reduce(_key: &str, values: Vec<String>) -> String {
    values.into_iter().last().unwrap_or_default()
}
