//! Single process map/reduce over in-memory inputs.

use std::io::{self, Write};

use itertools::Itertools;
use tracing::{debug, info};

use crate::{App, KeyValue};

/// Maps every `(filename, contents)` input, groups the pairs by key and
/// reduces each group. Output is sorted by key; values reach `reduce` in
/// input order.
pub fn run<'a, I>(app: &App, inputs: I) -> Vec<KeyValue>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut intermediate = inputs
        .into_iter()
        .flat_map(|(filename, contents)| {
            debug!("map {filename}");
            app.map(filename, contents)
        })
        .collect_vec();
    info!("{}: {} intermediate pairs", app.app_name, intermediate.len());

    // stable, so values keep input order within a key
    intermediate.sort_by(|a, b| a.key.cmp(&b.key));

    let mut output = vec![];
    for (key, kvs) in intermediate
        .into_iter()
        .group_by(|kv| kv.key.clone())
        .into_iter()
    {
        let value = app.reduce(&key, kvs.map(|kv| kv.value).collect_vec());
        output.push(KeyValue { key, value });
    }
    output
}

/// One `"{key} {value}"` line per result.
pub fn write_output<W: Write>(mut out: W, results: &[KeyValue]) -> io::Result<()> {
    for kv in results {
        writeln!(out, "{} {}", kv.key, kv.value)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(filename: &str, contents: &str) -> Vec<KeyValue> {
        contents
            .split_whitespace()
            .map(|w| KeyValue::new(w, filename))
            .collect()
    }

    fn join(_key: &str, values: Vec<String>) -> String {
        values.join(",")
    }

    #[test]
    fn test_run_groups_in_input_order() {
        let app = App::new("words", words, join);
        let out = run(&app, [("f2", "b a"), ("f1", "a c a")]);
        assert_eq!(
            out,
            vec![
                KeyValue::new("a", "f2,f1,f1"),
                KeyValue::new("b", "f2"),
                KeyValue::new("c", "f1"),
            ]
        );
    }

    #[test]
    fn test_run_empty() {
        let app = App::new("words", words, join);
        assert!(run(&app, Vec::<(&str, &str)>::new()).is_empty());
        assert!(run(&app, [("f", "  \n")]).is_empty());
    }

    #[test]
    fn test_write_output() {
        let mut file = tempfile::tempfile().unwrap();
        write_output(&mut file, &[KeyValue::new("a", "1"), KeyValue::new("b", "2 3")]).unwrap();

        use std::io::{Read, Seek};
        file.rewind().unwrap();
        let mut buf = String::new();
        file.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "a 1\nb 2 3\n");
    }
}
