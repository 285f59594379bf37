//! Account display formatting

use crate::models::{Account, Money};

/// Format accounts with balances as a table, followed by a total row
pub fn format_account_list<'a>(
    accounts: impl IntoIterator<Item = &'a Account>,
    symbol: &str,
) -> String {
    let accounts: Vec<&Account> = accounts.into_iter().collect();
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {:>6}\n",
        "Name",
        "Balance",
        "Txns",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->14}  {:->6}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in &accounts {
        output.push_str(&format!(
            "{:<name_width$}  {:>14}  {:>6}\n",
            account.name(),
            account.balance().format_with_symbol(symbol),
            account.transactions().len(),
            name_width = name_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance()).sum();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}\n",
        "Total",
        total.format_with_symbol(symbol),
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Budget;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_account_list(Vec::<&Account>::new(), "$"), "No accounts found.\n");
    }

    #[test]
    fn test_table_rows_and_total() {
        let mut budget = Budget::new();
        let checking = budget.add_account("Checking").unwrap();
        budget.add_account("Savings").unwrap();
        budget.deposit(Money::from_cents(50000), checking).unwrap();

        let output = format_account_list(budget.accounts(), "$");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("Checking"));
        assert!(lines[2].contains("$500.00"));
        assert!(lines[3].contains("$0.00"));
        assert!(lines[4].starts_with("Total"));
        assert!(lines[4].ends_with("$500.00"));
    }
}
