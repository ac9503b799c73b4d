//! Inverted index of the words containing [`NEEDLE`].
use common::{ops, KeyValue};
use itertools::Itertools;

pub const NEEDLE: char = 'm';

pub fn map(filename: &str, contents: &str) -> Vec<KeyValue> {
    let words = contents
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .unique()
        .collect_vec();
    ops::containing(&words, NEEDLE)
        .into_iter()
        .map(|w| KeyValue::new(w, filename))
        .collect()
}

pub fn reduce(_key: &str, values: Vec<String>) -> String {
    let files = values.into_iter().sorted().dedup().collect_vec();
    format!("{} {}", files.len(), files.join(","))
}
