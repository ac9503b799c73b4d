use common::{integers, ops, KeyValue};

pub fn map(filename: &str, contents: &str) -> Vec<KeyValue> {
    let numbers: Vec<i64> = integers(filename, contents).collect();
    let tag = |key: &'static str| move |n: i64| KeyValue::new(key, n.to_string());
    ops::evens(&numbers)
        .into_iter()
        .map(tag("even"))
        .chain(ops::odds(&numbers).into_iter().map(tag("odd")))
        .collect()
}

pub fn reduce(_key: &str, values: Vec<String>) -> String {
    format!("{} {}", values.len(), values.join(","))
}
