//! Splits one filename per line into `name -> extension`.
//!
//! Lines are trimmed and blank lines skipped before partitioning, so the
//! output equals [`common::partition`] over the trimmed, non-blank lines.
use common::{split_label, KeyValue};
use tracing::trace;

pub fn map(filename: &str, contents: &str) -> Vec<KeyValue> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|label| {
            let kv = split_label(label).map(|(key, value)| KeyValue::new(key, value));
            if kv.is_none() {
                trace!("{filename}: no segments in {label:?}");
            }
            kv
        })
        .collect()
}

/// Last write wins.
pub fn reduce(_key: &str, values: Vec<String>) -> String {
    values.into_iter().last().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{partition, runner, App};

    const FILES: &str = "cute_cat.jpg\ncute_dog.jpg\nessay_cats-are-the-best.doc\n\
                         turtles_are_ok.png\nbaby_otters.svg\n";

    #[test]
    fn test_map() {
        let kvs = map("list", "  a.txt \n\nREADME\n");
        assert_eq!(
            kvs,
            vec![KeyValue::new("a", "txt"), KeyValue::new("README", "README")]
        );
    }

    #[test]
    fn test_reduce_last_wins() {
        assert_eq!(reduce("a", vec!["x".into(), "y".into()]), "y");
    }

    #[test]
    fn test_run_matches_partition_of_trimmed_lines() {
        let app = App::new("ext", map, reduce);
        let more = "cute_cat.png\n\n  readme \n\t\n";
        let out = runner::run(&app, [("one", FILES), ("two", more)]);

        let expected = partition(
            FILES
                .lines()
                .chain(more.lines())
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        assert_eq!(out.len(), expected.len());
        for kv in &out {
            assert_eq!(expected.get(&kv.key), Some(&kv.value));
        }
        assert!(out.contains(&KeyValue::new("cute_cat", "png")));
        assert!(out.contains(&KeyValue::new("readme", "readme")));
    }

    #[test]
    fn test_blank_and_padded_lines() {
        let app = App::new("ext", map, reduce);
        let out = runner::run(&app, [("f", "a.x\n\n b.y \n")]);
        assert_eq!(out, vec![KeyValue::new("a", "x"), KeyValue::new("b", "y")]);
        assert!(!out.iter().any(|kv| kv.key.is_empty()));
    }
}
