use time::macros::format_description;
use tracing::warn;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

pub mod error;
pub mod ops;
pub mod partition;
pub mod runner;

pub use error::{Error, Result};
pub use partition::{partition, partition_bytes, split_label, PartitionTable};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

pub type MapFn = fn(filename: &str, contents: &str) -> Vec<KeyValue>;
pub type ReduceFn = fn(key: &str, values: Vec<String>) -> String;

/// A named map/reduce pair.
#[derive(Debug, Clone)]
pub struct App {
    pub app_name: String,
    map: MapFn,
    reduce: ReduceFn,
}

impl App {
    pub fn new(app_name: &str, map: MapFn, reduce: ReduceFn) -> Self {
        Self {
            app_name: app_name.to_string(),
            map,
            reduce,
        }
    }

    pub fn map(&self, filename: &str, contents: &str) -> Vec<KeyValue> {
        (self.map)(filename, contents)
    }

    pub fn reduce(&self, key: &str, values: Vec<String>) -> String {
        (self.reduce)(key, values)
    }
}

/// Whitespace separated integers of `contents`. Tokens that do not parse are
/// skipped with a warning.
pub fn integers<'a>(filename: &'a str, contents: &'a str) -> impl Iterator<Item = i64> + 'a {
    contents
        .split_whitespace()
        .filter_map(move |token| match token.parse::<i64>() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("{filename}: skipping token {token:?}: {e}");
                None
            }
        })
}

/// `bytes` as text, or `InvalidInput` naming `what` when they are not UTF-8.
pub fn as_text<'a>(what: &str, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes)
        .map_err(|e| Error::InvalidInput(format!("{what} is not text: {e}")))
}

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default
/// `info` level. Calling it twice is a no-op.
pub fn init_logger() {
    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .try_init();
}
