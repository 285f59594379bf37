//! Category display formatting

use crate::models::Category;

/// Format categories with their available amounts
///
/// Overspent categories are flagged in the status column.
pub fn format_category_list<'a>(
    categories: impl IntoIterator<Item = &'a Category>,
    symbol: &str,
) -> String {
    let categories: Vec<&Category> = categories.into_iter().collect();
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {}\n",
        "Name",
        "Available",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->14}  {:-<10}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for category in categories {
        let status = if category.is_overspent() {
            "Overspent"
        } else {
            ""
        };
        output.push_str(
            format!(
                "{:<name_width$}  {:>14}  {}",
                category.name(),
                category.available().format_with_symbol(symbol),
                status,
                name_width = name_width,
            )
            .trim_end(),
        );
        output.push('\n');
    }

    output
}
