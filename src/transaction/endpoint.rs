//! Defines the route handler that serves generated transactions as CSV.

use axum::{
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{AppState, Error};

use super::{TransactionCount, TransactionGenerator, to_csv};

/// The query parameters accepted by [get_transactions_csv].
#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuery {
    /// The number of transactions to generate, as sent by the client.
    ///
    /// Kept as text so that malformed values produce the same error as out of
    /// range ones.
    pub count: Option<String>,
}

/// Generate the requested number of transactions and return them as CSV text.
///
/// Falls back to the configured default count when `count` is missing.
/// Responds with 400 Bad Request if `count` is not an integer between
/// [TransactionCount::MIN] and [TransactionCount::MAX], in which case no
/// transactions are generated.
pub async fn get_transactions_csv(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Result<Response, Error> {
    let count = match query.count {
        Some(count) => count.parse::<TransactionCount>()?,
        None => state.default_count,
    };

    let generator = TransactionGenerator::new(state.today()?);
    let mut rng = state.rng();
    let transactions = generator.generate(count.get(), &mut rng);
    let body = to_csv(&transactions)?;

    tracing::info!("Generated {count} transactions");

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}
