//! Implements a struct that holds the state of the REST server.

use rand::{SeedableRng, rngs::StdRng};
use time::{Date, OffsetDateTime};

use crate::{Error, timezone::get_local_offset, transaction::TransactionCount};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The number of transactions to generate when a request does not specify one.
    pub default_count: TransactionCount,

    /// Seeds the random source of every request when set, so the same request
    /// on the same day always gets the same transactions.
    pub seed: Option<u64>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezone] if `local_timezone` is not a known timezone.
    pub fn new(
        default_count: TransactionCount,
        seed: Option<u64>,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            default_count,
            seed,
            local_timezone: local_timezone.to_owned(),
        })
    }

    /// The current date in the local timezone.
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezone] if the local timezone is not a known timezone.
    pub fn today(&self) -> Result<Date, Error> {
        let offset = get_local_offset(&self.local_timezone)
            .ok_or_else(|| Error::InvalidTimezone(self.local_timezone.clone()))?;

        Ok(OffsetDateTime::now_utc().to_offset(offset).date())
    }

    /// A fresh random source for one request.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
