//! Generates batches of synthetic transactions.

use std::ops::RangeInclusive;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rand::Rng;
use time::{Date, macros::date};

use crate::{
    classification::{
        CLASSIFICATIONS, CumulativeWeights, PAYROLL, SUBRECIPIENT_PAYMENT, TransactionClassification,
        VENDOR_PAYMENT, weights,
    },
    fabricate::{Fabricate, NameCorpus, ean_code},
};

use super::models::{PerformancePeriod, Transaction};

/// The earliest date a generated transaction may be posted on.
pub const EARLIEST_POST_DATE: Date = date!(2010 - 01 - 01);

/// The number of fiscal years, counting back from the current year, that grants are named after.
pub const FISCAL_YEAR_COUNT: i32 = 5;

/// The range of amounts paid out for payroll.
pub const PAYROLL_AMOUNTS: RangeInclusive<f64> = 500.0..=5000.0;

/// The range of amounts for every classification other than payroll.
pub const GENERAL_AMOUNTS: RangeInclusive<f64> = 1000.0..=50000.0;

/// The range of performance period lengths in months, not counting the end month.
const PERFORMANCE_PERIOD_MONTHS: RangeInclusive<u8> = 1..=7;

const TRANS_ID_LENGTH: usize = 13;
const ACCOUNT_CODE_LENGTH: usize = 8;

/// Creates transactions with somewhat realistic data.
///
/// The generator holds no random state of its own, the caller passes in the
/// random source so that seeded sources give reproducible transactions.
#[derive(Debug, Clone)]
pub struct TransactionGenerator<F = NameCorpus> {
    fabricator: F,
    classification_weights: CumulativeWeights,
    today: Date,
}

impl TransactionGenerator<NameCorpus> {
    /// Create a generator that posts transactions no later than `today`.
    pub fn new(today: Date) -> Self {
        Self::with_fabricator(NameCorpus, today)
    }
}

impl<F: Fabricate> TransactionGenerator<F> {
    /// Create a generator that uses `fabricator` for names and codes.
    pub fn with_fabricator(fabricator: F, today: Date) -> Self {
        Self {
            fabricator,
            classification_weights: CumulativeWeights::new(&weights()),
            today,
        }
    }

    /// Generate `count` transactions.
    ///
    /// Classifications are drawn independently for each transaction, so
    /// repeats are expected. A `count` of zero gives an empty list.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Transaction> {
        let mut transactions = Vec::with_capacity(count);

        for _ in 0..count {
            transactions.push(self.generate_one(rng));
        }

        transactions
    }

    fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Transaction {
        let classification = self.draw_classification(rng);
        let trans_id = ean_code(&self.fabricator, rng, TRANS_ID_LENGTH);
        let trans_post_date = self
            .fabricator
            .date_between(rng, EARLIEST_POST_DATE, self.today);

        let performance_period = if rng.gen_bool(0.5) {
            let months_back = rng.gen_range(PERFORMANCE_PERIOD_MONTHS);
            Some(PerformancePeriod::before(trans_post_date, months_back))
        } else {
            None
        };

        let (trans_name, dollar_amount) = match classification.id {
            PAYROLL => (
                format!("Payroll: {}", self.fabricator.full_name(rng)),
                random_amount(rng, PAYROLL_AMOUNTS),
            ),
            SUBRECIPIENT_PAYMENT => (
                format!("Subrecipient Payment: {}", self.fabricator.full_name(rng)),
                random_amount(rng, GENERAL_AMOUNTS),
            ),
            VENDOR_PAYMENT => (
                format!("Vendor Payment: {}", self.fabricator.company_name(rng)),
                random_amount(rng, GENERAL_AMOUNTS),
            ),
            _ => (
                classification
                    .default_transaction_name
                    .unwrap_or(classification.name)
                    .to_owned(),
                random_amount(rng, GENERAL_AMOUNTS),
            ),
        };

        let ext_grant_id = random_grant_id(rng);
        let fiscal_year = self.today.year() - rng.gen_range(0..FISCAL_YEAR_COUNT);
        let ext_grant_name = format!(
            "Project Grant {} FY{fiscal_year}",
            self.fabricator.first_name(rng)
        );
        let account_number = format!(
            "{}{}",
            classification.kind.account_prefix(),
            ean_code(&self.fabricator, rng, ACCOUNT_CODE_LENGTH)
        );

        Transaction {
            department_id: None,
            trans_id,
            trans_name,
            trans_post_date,
            ext_project_id: "N/A".to_owned(),
            ext_project_name: String::new(),
            ext_grant_id,
            ext_grant_name,
            account_number,
            dollar_amount,
            performance_period,
            dollar_class: classification.id.to_string(),
            dollar_trans_number: rng.gen_range(1000..=9999).to_string(),
        }
    }

    fn draw_classification<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> &'static TransactionClassification {
        // The table weights are all positive, so a draw always lands on an entry.
        self.classification_weights
            .sample(rng)
            .and_then(|index| CLASSIFICATIONS.get(index))
            .unwrap_or(&CLASSIFICATIONS[0])
    }
}

/// A uniformly drawn amount in `range`, rounded to cents.
fn random_amount<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f64>) -> f64 {
    (rng.gen_range(range) * 100.0).round() / 100.0
}

/// The base64 encoded bytes of a random version 4 UUID.
fn random_grant_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();

    STANDARD.encode(uuid.as_bytes())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use rand::{SeedableRng, rngs::StdRng};
    use time::{Date, macros::date};

    use crate::{
        classification::{CLASSIFICATIONS, TransactionKind, classification_by_id},
        fabricate::ean_check_digit,
        transaction::Transaction,
    };

    use super::{EARLIEST_POST_DATE, GENERAL_AMOUNTS, PAYROLL_AMOUNTS, TransactionGenerator};

    const TODAY: Date = date!(2024 - 06 - 15);

    fn generate(count: usize, seed: u64) -> Vec<Transaction> {
        let mut rng = StdRng::seed_from_u64(seed);

        TransactionGenerator::new(TODAY).generate(count, &mut rng)
    }

    fn classification_of(
        transaction: &Transaction,
    ) -> &'static crate::classification::TransactionClassification {
        let id = transaction.dollar_class.parse().unwrap();

        classification_by_id(id).unwrap()
    }

    #[test]
    fn generates_requested_count() {
        for count in [0, 1, 12, 500] {
            assert_eq!(generate(count, 1).len(), count);
        }
    }

    #[test]
    fn single_transaction_has_known_class_and_four_digit_number() {
        let transactions = generate(1, 99);
        let transaction = &transactions[0];
        let known_ids: Vec<_> = CLASSIFICATIONS.iter().map(|c| c.id.to_string()).collect();

        assert!(known_ids.contains(&transaction.dollar_class));
        assert_eq!(transaction.dollar_trans_number.len(), 4);
        assert!(
            transaction
                .dollar_trans_number
                .chars()
                .all(|c| c.is_ascii_digit())
        );
    }

    #[test]
    fn trans_id_is_ean13() {
        for transaction in generate(200, 2) {
            let trans_id = &transaction.trans_id;

            assert_eq!(trans_id.len(), 13, "got {trans_id}");
            assert!(trans_id.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(
                trans_id.chars().last(),
                Some(ean_check_digit(&trans_id[..12]))
            );
        }
    }

    #[test]
    fn account_prefix_follows_kind() {
        for transaction in generate(500, 3) {
            let classification = classification_of(&transaction);
            let want = match classification.kind {
                TransactionKind::Expense => '6',
                TransactionKind::Income => '4',
            };

            assert_eq!(transaction.account_number.len(), 9);
            assert_eq!(transaction.account_number.chars().next(), Some(want));
            assert!(
                transaction
                    .account_number
                    .chars()
                    .all(|c| c.is_ascii_digit())
            );
        }
    }

    #[test]
    fn name_and_amount_follow_classification() {
        for transaction in generate(1_000, 4) {
            let classification = classification_of(&transaction);
            let amount = transaction.dollar_amount;
            let name = &transaction.trans_name;

            match classification.id {
                101 => {
                    assert!(name.starts_with("Payroll: "), "got {name}");
                    assert!(PAYROLL_AMOUNTS.contains(&amount), "got {amount}");
                }
                103 => {
                    assert!(name.starts_with("Subrecipient Payment: "), "got {name}");
                    assert!(GENERAL_AMOUNTS.contains(&amount), "got {amount}");
                }
                104 => {
                    assert!(name.starts_with("Vendor Payment: "), "got {name}");
                    assert!(GENERAL_AMOUNTS.contains(&amount), "got {amount}");
                }
                _ => {
                    assert_eq!(Some(name.as_str()), classification.default_transaction_name);
                    assert!(GENERAL_AMOUNTS.contains(&amount), "got {amount}");
                }
            }
        }
    }

    #[test]
    fn payroll_name_is_a_full_name() {
        let payroll = generate(500, 5)
            .into_iter()
            .find(|transaction| transaction.dollar_class == "101")
            .expect("expected at least one payroll transaction");
        let person = payroll.trans_name.strip_prefix("Payroll: ").unwrap();

        assert!(person.split(' ').count() >= 2, "got {person}");
    }

    #[test]
    fn amounts_are_rounded_to_cents() {
        for transaction in generate(500, 6) {
            let cents = transaction.dollar_amount * 100.0;

            assert!((cents - cents.round()).abs() < 1e-6, "got {cents}");
        }
    }

    #[test]
    fn post_date_is_between_earliest_date_and_today() {
        for transaction in generate(1_000, 7) {
            let date = transaction.trans_post_date;

            assert!(EARLIEST_POST_DATE <= date && date <= TODAY, "got {date}");
        }
    }

    #[test]
    fn performance_period_precedes_post_month() {
        for transaction in generate(1_000, 8) {
            let Some(period) = transaction.performance_period else {
                continue;
            };
            let post_date = transaction.trans_post_date;
            let post_month_start = post_date.replace_day(1).unwrap();

            assert!(period.start <= period.end, "got {period:?}");
            assert!(period.end < post_month_start, "got {period:?} for {post_date}");
            assert_eq!(period.start.day(), 1);
            assert_eq!(period.end.next_day().unwrap(), post_month_start);
        }
    }

    #[test]
    fn about_half_have_a_performance_period() {
        let with_period = generate(1_000, 9)
            .iter()
            .filter(|transaction| transaction.performance_period.is_some())
            .count();

        assert!((400..=600).contains(&with_period), "got {with_period}");
    }

    #[test]
    fn fixed_fields_are_constant() {
        for transaction in generate(100, 10) {
            assert_eq!(transaction.department_id, None);
            assert_eq!(transaction.ext_project_id, "N/A");
            assert_eq!(transaction.ext_project_name, "");
        }
    }

    #[test]
    fn grant_id_is_base64_uuid() {
        for transaction in generate(100, 11) {
            let bytes = STANDARD.decode(&transaction.ext_grant_id).unwrap();
            let uuid = uuid::Uuid::from_slice(&bytes).unwrap();

            assert_eq!(bytes.len(), 16);
            assert_eq!(uuid.get_version_num(), 4);
        }
    }

    #[test]
    fn grant_name_uses_recent_fiscal_year() {
        let valid_years: Vec<_> = (2020..=2024).map(|year| format!("FY{year}")).collect();

        for transaction in generate(200, 12) {
            let name = &transaction.ext_grant_name;
            let (prefix, year) = name.rsplit_once(' ').unwrap();

            assert!(prefix.starts_with("Project Grant "), "got {name}");
            assert!(valid_years.iter().any(|valid| valid == year), "got {name}");
        }
    }

    #[test]
    fn every_classification_is_drawn() {
        let drawn: HashSet<_> = generate(2_000, 13)
            .into_iter()
            .map(|transaction| transaction.dollar_class)
            .collect();

        assert_eq!(drawn.len(), CLASSIFICATIONS.len());
    }

    #[test]
    fn same_seed_gives_same_transactions() {
        assert_eq!(generate(50, 14), generate(50, 14));
        assert_ne!(generate(50, 14), generate(50, 15));
    }
}
