//! Fake names, codes and dates for filling in generated transactions.
//!
//! The generator only relies on the *shape* of these values, e.g. that a full
//! name looks like "First Last".

use fake::{
    Fake,
    faker::{
        company::en::CompanyName,
        name::en::{FirstName, Name},
    },
};
use rand::Rng;
use time::{Date, Duration};

/// Produces fake values for generated transactions.
///
/// Every method draws from the random source it is given so that seeding that
/// source makes the output reproducible.
pub trait Fabricate {
    /// A person's name in the form "First Last".
    fn full_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// The name of a made up company, e.g. "Hills, Ortiz and Kemmer".
    fn company_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// A single given name.
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// A string of exactly `length` ASCII digits.
    fn digit_string<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> String {
        (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    /// A date drawn uniformly from `min` to `max`, both inclusive.
    ///
    /// Returns `min` if `max` is not after `min`.
    fn date_between<R: Rng + ?Sized>(&self, rng: &mut R, min: Date, max: Date) -> Date {
        let span = (max - min).whole_days();

        if span <= 0 {
            return min;
        }

        min + Duration::days(rng.gen_range(0..=span))
    }
}

/// A [Fabricate] implementation backed by the English name and company data of the `fake` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameCorpus;

impl Fabricate for NameCorpus {
    fn full_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        Name().fake_with_rng(rng)
    }

    fn company_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        CompanyName().fake_with_rng(rng)
    }

    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        FirstName().fake_with_rng(rng)
    }
}

/// Create an EAN style code of `length` digits where the last digit is the check digit.
///
/// EAN-13 and EAN-8 codes are produced with `length` 13 and 8 respectively.
pub fn ean_code<F, R>(fabricator: &F, rng: &mut R, length: usize) -> String
where
    F: Fabricate,
    R: Rng + ?Sized,
{
    let mut code = fabricator.digit_string(rng, length.saturating_sub(1));
    code.push(ean_check_digit(&code));

    code
}

/// Calculate the EAN check digit for `digits`.
///
/// Digits are weighted 3, 1, 3, ... starting from the rightmost one.
/// Non-digit characters are ignored.
pub fn ean_check_digit(digits: &str) -> char {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, digit)| if i % 2 == 0 { digit * 3 } else { digit })
        .sum();

    char::from_digit((10 - sum % 10) % 10, 10).unwrap_or('0')
}
