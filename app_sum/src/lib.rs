use common::{integers, ops, KeyValue};
use tracing::warn;

pub const OVERFLOW: &str = "overflow";

pub fn map(filename: &str, contents: &str) -> Vec<KeyValue> {
    integers(filename, contents)
        .map(|n| KeyValue::new("sum", n.to_string()))
        .collect()
}

/// Sum of the values, or `overflow` when it leaves the `i64` range.
pub fn reduce(key: &str, values: Vec<String>) -> String {
    let numbers: Vec<i64> = values
        .iter()
        .filter_map(|v| match v.parse::<i64>() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("{key}: bad value {v:?}: {e}");
                None
            }
        })
        .collect();
    match ops::sum_traced(&numbers) {
        Ok(total) => total.to_string(),
        Err(e) => {
            warn!("{key}: {e}");
            OVERFLOW.to_string()
        }
    }
}
