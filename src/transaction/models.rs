//! The generated transaction record and its CSV row layout.

use time::{Date, Duration};

/// The period of work that a transaction pays for.
///
/// The period always ends before the month the transaction was posted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformancePeriod {
    /// The first day of the period, always the first day of a month.
    pub start: Date,
    /// The last day of the period, always the last day of a month.
    pub end: Date,
}

impl PerformancePeriod {
    /// Create the period that ends on the last day of the month before
    /// `post_date` and starts on the first day of the month `months_back`
    /// months before the end month.
    ///
    /// A `months_back` of zero gives a period covering only the end month.
    pub fn before(post_date: Date, months_back: u8) -> Self {
        let end = first_day_of_month(post_date) - Duration::days(1);
        let mut start = first_day_of_month(end);

        for _ in 0..months_back {
            start = first_day_of_month(start - Duration::days(1));
        }

        Self { start, end }
    }
}

fn first_day_of_month(date: Date) -> Date {
    date - Duration::days(i64::from(date.day()) - 1)
}

/// A synthetic financial transaction as consumed by the data-integration pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The department the transaction belongs to. Never populated.
    pub department_id: Option<u32>,
    /// The identity of the transaction in the remote financial management system.
    pub trans_id: String,
    /// A text description of the transaction.
    pub trans_name: String,
    /// When the transaction was posted.
    pub trans_post_date: Date,
    /// Always "N/A".
    pub ext_project_id: String,
    /// Always empty.
    pub ext_project_name: String,
    /// The base64 encoded identifier of the grant.
    pub ext_grant_id: String,
    /// The name of the grant, e.g. "Project Grant Elena FY2024".
    pub ext_grant_name: String,
    /// The general ledger code, starting with 6 for expenses and 4 for income.
    pub account_number: String,
    /// The amount of money, rounded to cents.
    pub dollar_amount: f64,
    /// The period of work the transaction covers, if known.
    pub performance_period: Option<PerformancePeriod>,
    /// The classification ID, e.g. "101".
    pub dollar_class: String,
    /// A four digit reference number, e.g. "2441".
    pub dollar_trans_number: String,
}

impl Transaction {
    /// The column names of the CSV header, in the order of [Transaction::csv_fields].
    pub const CSV_HEADER: [&'static str; 14] = [
        "departmentID",
        "transID",
        "transName",
        "transPostDate",
        "extProjectID",
        "extProjectName",
        "extGrantID",
        "extGrantName",
        "accountNumber",
        "dollarAmount",
        "transPerfPeriodStartDate",
        "transPerfPeriodEndDate",
        "dollarClass",
        "dollarTransNumber",
    ];

    /// The transaction as CSV field values.
    ///
    /// Missing values are empty strings, dates use the `YYYY-MM-DD` format and
    /// the dollar amount always has two decimal places.
    pub fn csv_fields(&self) -> [String; 14] {
        let (start_date, end_date) = match self.performance_period {
            Some(period) => (period.start.to_string(), period.end.to_string()),
            None => (String::new(), String::new()),
        };

        [
            self.department_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            self.trans_id.clone(),
            self.trans_name.clone(),
            self.trans_post_date.to_string(),
            self.ext_project_id.clone(),
            self.ext_project_name.clone(),
            self.ext_grant_id.clone(),
            self.ext_grant_name.clone(),
            self.account_number.clone(),
            format!("{:.2}", self.dollar_amount),
            start_date,
            end_date,
            self.dollar_class.clone(),
            self.dollar_trans_number.clone(),
        ]
    }
}
