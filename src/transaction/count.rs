//! The number of transactions a client may ask for.

use std::{fmt::Display, str::FromStr};

use crate::Error;

/// A validated number of transactions to generate, between
/// [TransactionCount::MIN] and [TransactionCount::MAX] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransactionCount(usize);

impl TransactionCount {
    /// The fewest transactions a client may request.
    pub const MIN: usize = 1;
    /// The most transactions a client may request.
    pub const MAX: usize = 10_000;

    /// Create a transaction count.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidCount] if `count` is
    /// outside of the accepted range.
    pub fn new(count: usize) -> Result<Self, Error> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(Error::InvalidCount(count.to_string()))
        }
    }

    /// The number of transactions.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for TransactionCount {
    fn default() -> Self {
        Self(5)
    }
}

impl FromStr for TransactionCount {
    type Err = Error;

    /// Parse a count from a query string value.
    ///
    /// Negative numbers parse but are rejected as out of range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCount(s.to_owned()))?;

        usize::try_from(count)
            .map_err(|_| Error::InvalidCount(s.to_owned()))
            .and_then(Self::new)
    }
}

impl Display for TransactionCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
