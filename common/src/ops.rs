//! Small map / filter / fold helpers shared by the apps.

use tracing::debug;

use crate::{Error, Result};

pub fn square(x: i64) -> Result<i64> {
    x.checked_mul(x)
        .ok_or_else(|| Error::InvalidInput(format!("{x} squared overflows i64")))
}

pub fn squares(xs: &[i64]) -> Result<Vec<i64>> {
    xs.iter().copied().map(square).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFormatter {
    /// `Lovelace, Ada`
    LastNameFirstName,
    /// `Ada Lovelace`
    FirstLast,
    /// `A. L.`
    InitialsOnly,
    /// `A. Lovelace.`
    FirstInitialLastName,
}

impl NameFormatter {
    pub fn format(self, first: &str, last: &str) -> Result<String> {
        Ok(match self {
            NameFormatter::LastNameFirstName => format!("{last}, {first}"),
            NameFormatter::FirstLast => format!("{first} {last}"),
            NameFormatter::InitialsOnly => format!("{}. {}.", initial(first)?, initial(last)?),
            NameFormatter::FirstInitialLastName => format!("{}. {last}.", initial(first)?),
        })
    }
}

fn initial(name: &str) -> Result<char> {
    name.chars()
        .next()
        .ok_or_else(|| Error::InvalidInput("empty name has no initial".to_string()))
}

pub fn format_names<S: AsRef<str>>(
    pairs: &[(S, S)],
    formatter: NameFormatter,
) -> Result<Vec<String>> {
    pairs
        .iter()
        .map(|(first, last)| formatter.format(first.as_ref(), last.as_ref()))
        .collect()
}

pub fn compact<T, I>(xs: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    xs.into_iter().flatten().collect()
}

fn add(running: i64, current: i64) -> Result<i64> {
    running
        .checked_add(current)
        .ok_or_else(|| Error::InvalidInput(format!("{running} + {current} overflows i64")))
}

pub fn sum(xs: &[i64]) -> Result<i64> {
    xs.iter().try_fold(0, |acc, &x| add(acc, x))
}

/// [`sum`], logging every step at debug level.
pub fn sum_traced(xs: &[i64]) -> Result<i64> {
    xs.iter().try_fold(0, |running, &current| {
        let next = add(running, current)?;
        debug!("{running} + {current} = {next}");
        Ok(next)
    })
}

/// Joins with a leading space per word: `["a", "b"]` gives `" a b"`.
pub fn concat<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .fold(String::new(), |acc, word| acc + " " + word.as_ref())
}

pub fn honorees<S: AsRef<str>>(pairs: &[(S, S)]) -> Result<String> {
    Ok(format_names(pairs, NameFormatter::FirstInitialLastName)?
        .iter()
        .fold(String::new(), |acc, name| acc + "Honoree: " + name + "\n"))
}

pub fn evens(xs: &[i64]) -> Vec<i64> {
    xs.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn odds(xs: &[i64]) -> Vec<i64> {
    xs.iter().copied().filter(|n| n % 2 != 0).collect()
}

pub fn containing<S: AsRef<str>>(words: &[S], ch: char) -> Vec<&str> {
    words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| word.contains(ch))
        .collect()
}
