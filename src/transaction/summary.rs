//! Reduces per-type totals into a spender's income, expenses and balance.

use serde::{Deserialize, Serialize};

use crate::transaction::TypeTotal;

/// The transaction type label counted as money coming in.
pub const INCOME: &str = "income";
/// The transaction type label counted as money going out.
pub const EXPENSE: &str = "expense";

/// Totals for a single spender.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all "income" transactions.
    pub total_income: f64,
    /// The sum of all "expense" transactions.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub current_balance: f64,
}

/// The response body for the summary endpoint, `{"summary": {...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The computed totals.
    pub summary: Summary,
}

/// Sum the income and expense totals and compute the balance.
///
/// Labels are matched exactly and case-sensitively. Totals with any other
/// label are ignored. An empty slice gives an all-zero summary.
pub fn calculate_summary(totals: &[TypeTotal]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;

    for total in totals {
        match total.transaction_type.as_str() {
            INCOME => total_income += total.total_amount,
            EXPENSE => total_expenses += total.total_amount,
            _ => {}
        }
    }

    Summary {
        total_income,
        total_expenses,
        current_balance: total_income - total_expenses,
    }
}
