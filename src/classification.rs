//! The fixed table of transaction classifications and the weighted draw over it.

use rand::Rng;

/// Whether money leaves or enters the grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money spent, booked against a `6xxx` account.
    Expense,
    /// Money received, booked against a `4xxx` account.
    Income,
}

impl TransactionKind {
    /// The leading digit of general ledger account numbers for this kind.
    pub fn account_prefix(self) -> char {
        match self {
            TransactionKind::Expense => '6',
            TransactionKind::Income => '4',
        }
    }
}

/// The numeric code of a transaction classification, e.g. `101`.
pub type ClassificationId = u16;

/// A category of transaction and how often it should show up in generated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionClassification {
    /// The classification code emitted in the `dollarClass` column.
    pub id: ClassificationId,
    /// Whether the classification is an expense or income.
    pub kind: TransactionKind,
    /// Human readable label.
    pub name: &'static str,
    /// Relative selection weight, not a normalized probability.
    pub weight: u32,
    /// The transaction name used when no name is derived for the classification.
    pub default_transaction_name: Option<&'static str>,
}

const fn classification(
    id: ClassificationId,
    kind: TransactionKind,
    name: &'static str,
    weight: u32,
    default_transaction_name: Option<&'static str>,
) -> TransactionClassification {
    TransactionClassification {
        id,
        kind,
        name,
        weight,
        default_transaction_name,
    }
}

/// Payroll/Direct Labor.
pub const PAYROLL: ClassificationId = 101;
/// Payment to Subrecipient.
pub const SUBRECIPIENT_PAYMENT: ClassificationId = 103;
/// Payment to Vendor.
pub const VENDOR_PAYMENT: ClassificationId = 104;

/// Every classification that generated transactions may be drawn from.
pub static CLASSIFICATIONS: [TransactionClassification; 10] = {
    use TransactionKind::{Expense, Income};

    [
        classification(PAYROLL, Expense, "Payroll/Direct Labor", 5, None),
        classification(
            102,
            Expense,
            "Indirect Costs",
            5,
            Some("Administrative Expenses"),
        ),
        classification(
            SUBRECIPIENT_PAYMENT,
            Expense,
            "Payment to Subrecipient",
            3,
            None,
        ),
        classification(VENDOR_PAYMENT, Expense, "Payment to Vendor", 2, None),
        classification(105, Expense, "Other", 3, Some("Other Expenses")),
        classification(106, Expense, "Encumbrances", 1, Some("Encumbrance")),
        classification(
            201,
            Income,
            "Reimbursement",
            5,
            Some("Program Reimbursement"),
        ),
        classification(202, Income, "Advance", 2, Some("Program Advance")),
        classification(203, Income, "Program Income", 2, Some("Program Income")),
        classification(204, Income, "Other", 3, Some("Other Income")),
    ]
};

/// The selection weights of [CLASSIFICATIONS], in table order.
pub fn weights() -> [u32; 10] {
    CLASSIFICATIONS.map(|classification| classification.weight)
}

/// Find the classification with the code `id`.
pub fn classification_by_id(id: ClassificationId) -> Option<&'static TransactionClassification> {
    CLASSIFICATIONS
        .iter()
        .find(|classification| classification.id == id)
}

/// Prefix sums over a list of weights for drawing an index in proportion to its weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeWeights {
    prefix_sums: Vec<u64>,
}

impl CumulativeWeights {
    /// Precompute the running totals of `weights`.
    pub fn new(weights: &[u32]) -> Self {
        let prefix_sums = weights
            .iter()
            .scan(0u64, |total, &weight| {
                *total += u64::from(weight);
                Some(*total)
            })
            .collect();

        Self { prefix_sums }
    }

    /// The sum of all weights.
    pub fn total(&self) -> u64 {
        self.prefix_sums.last().copied().unwrap_or(0)
    }

    /// Map a draw in `[0, total)` to the index whose weight band contains it.
    ///
    /// Returns `None` if `draw` is not less than [CumulativeWeights::total].
    pub fn index_for(&self, draw: u64) -> Option<usize> {
        let index = self.prefix_sums.partition_point(|&sum| sum <= draw);

        (index < self.prefix_sums.len()).then_some(index)
    }

    /// Draw an index with probability `weight / total`.
    ///
    /// Returns `None` only when every weight is zero.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let total = self.total();

        if total == 0 {
            return None;
        }

        self.index_for(rng.gen_range(0..total))
    }
}
