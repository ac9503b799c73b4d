use common::{ops::NameFormatter, KeyValue};
use tracing::warn;

/// One `First Last` pair per line, keyed as `F. Last.`.
pub fn map(filename: &str, contents: &str) -> Vec<KeyValue> {
    let mut kva = vec![];
    for line in contents.lines() {
        let mut parts = line.split_whitespace();
        let (Some(first), Some(last)) = (parts.next(), parts.last()) else {
            if !line.trim().is_empty() {
                warn!("{filename}: not a full name: {line:?}");
            }
            continue;
        };
        match NameFormatter::FirstInitialLastName.format(first, last) {
            Ok(name) => kva.push(KeyValue::new(name, "1")),
            Err(e) => warn!("{filename}: {e}"),
        }
    }
    kva
}

pub fn reduce(_key: &str, values: Vec<String>) -> String {
    values.len().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{runner, App};

    #[test]
    fn test_map() {
        assert_eq!(
            map("f", "Ada Lovelace\nGrace Brewster Hopper\nPlato\n\n"),
            vec![
                KeyValue::new("A. Lovelace.", "1"),
                KeyValue::new("G. Hopper.", "1"),
            ]
        );
    }

    #[test]
    fn test_count() {
        let app = App::new("names", map, reduce);
        let out = runner::run(&app, [("a", "Alan Turing\nAda Lovelace"), ("b", "Alan Turing")]);
        assert_eq!(
            out,
            vec![KeyValue::new("A. Lovelace.", "1"), KeyValue::new("A. Turing.", "2")]
        );
    }
}
