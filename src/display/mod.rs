//! Terminal formatting for budget data

pub mod account;
pub mod category;

pub use account::format_account_list;
pub use category::format_category_list;

use crate::models::BudgetSummary;

/// Format the derived totals of a budget
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    format!(
        "Total funds:      {:>14}\nAssigned:         {:>14}\nUnassigned funds: {:>14}\n",
        summary.total_funds.format_with_symbol(symbol),
        summary.assigned.format_with_symbol(symbol),
        summary.unassigned_funds.format_with_symbol(symbol),
    )
}
