//! Category aggregation and terminal chart rendering.

use crate::model::Record;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt::Write;

/// Width, in characters, of the longest bar in the bar chart.
const BAR_WIDTH: usize = 40;

/// Sums `amount` per exact `category` string.
///
/// Categories appear in first-seen order; case and whitespace variants
/// are distinct. Zero and negative totals are kept.
pub(crate) fn category_totals(records: &[Record]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        match index.get(&record.category) {
            Some(&i) => totals[i].1 += record.amount.value(),
            None => {
                index.insert(record.category.clone(), totals.len());
                totals.push((record.category.clone(), record.amount.value()));
            }
        }
    }
    totals
}

/// Renders a horizontal bar chart of the totals.
///
/// Bars scale to the largest total. Zero and negative totals are not
/// filtered out; they render as empty bars next to their value.
pub(crate) fn render_bar_chart(totals: &[(String, Decimal)]) -> String {
    let mut out = String::from("Expenses by Category\n\n");
    if totals.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }
    let label_width = label_width(totals);
    let max = totals.iter().map(|(_, t)| *t).max().unwrap_or_default();
    for (category, total) in totals {
        let bar_len = if max > Decimal::ZERO && *total > Decimal::ZERO {
            let ratio = (total / max).to_f64().unwrap_or(0.0);
            ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH)
        } else {
            0
        };
        let bar = "#".repeat(bar_len);
        let bar_width = BAR_WIDTH;
        let _ = writeln!(out, "{category:<label_width$}  {bar:<bar_width$}  {total}");
    }
    out
}

/// Renders per-category shares, the flat analogue of a pie chart.
///
/// Each share is `amount / sum * 100` over the sum of every total,
/// including zero and negative ones, which pass through unfiltered and
/// can produce odd percentages.
pub(crate) fn render_pie_chart(totals: &[(String, Decimal)]) -> String {
    let mut out = String::from("Expense Shares by Category\n\n");
    if totals.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }
    let label_width = label_width(totals);
    let sum: Decimal = totals.iter().map(|(_, t)| *t).sum();
    for (category, total) in totals {
        let percent = if sum.is_zero() {
            0.0
        } else {
            (total / sum).to_f64().unwrap_or(0.0) * 100.0
        };
        let _ = writeln!(out, "{category:<label_width$}  {percent:>6.1}%  {total}");
    }
    out
}

fn label_width(totals: &[(String, Decimal)]) -> usize {
    totals
        .iter()
        .map(|(category, _)| category.chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use rust_decimal_macros::dec;

    fn record(category: &str, amount: Decimal) -> Record {
        Record::new("2025-01-01", category, Amount::new(amount), "")
    }

    #[test]
    fn test_totals_group_and_sum() {
        let records = vec![
            record("catA", dec!(10)),
            record("catB", dec!(5)),
            record("catA", dec!(3)),
        ];
        let totals = category_totals(&records);
        assert_eq!(
            totals,
            vec![
                ("catA".to_string(), dec!(13)),
                ("catB".to_string(), dec!(5))
            ]
        );
    }

    #[test]
    fn test_totals_first_seen_order() {
        let records = vec![
            record("zebra", dec!(1)),
            record("apple", dec!(1)),
            record("zebra", dec!(1)),
            record("mango", dec!(1)),
        ];
        let totals = category_totals(&records);
        let order: Vec<&str> = totals
            .iter()
            .map(|(c, _)| c.as_str())
            .collect();
        assert_eq!(order, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_totals_case_variants_are_distinct() {
        let records = vec![record("Food", dec!(1)), record("food", dec!(2))];
        assert_eq!(category_totals(&records).len(), 2);
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let totals = vec![
            ("Rent".to_string(), dec!(100)),
            ("Food".to_string(), dec!(50)),
        ];
        let chart = render_bar_chart(&totals);
        let lines: Vec<&str> = chart.lines().collect();
        let rent_bars = lines[2].matches('#').count();
        let food_bars = lines[3].matches('#').count();
        assert_eq!(rent_bars, 40);
        assert_eq!(food_bars, 20);
    }

    #[test]
    fn test_bar_chart_keeps_zero_and_negative_totals() {
        let totals = vec![
            ("Refunds".to_string(), dec!(-25)),
            ("Nothing".to_string(), dec!(0)),
            ("Food".to_string(), dec!(10)),
        ];
        let chart = render_bar_chart(&totals);
        assert!(chart.contains("Refunds"));
        assert!(chart.contains("-25"));
        assert!(chart.contains("Nothing"));
    }

    #[test]
    fn test_pie_chart_percentages() {
        let totals = vec![
            ("catA".to_string(), dec!(75)),
            ("catB".to_string(), dec!(25)),
        ];
        let chart = render_pie_chart(&totals);
        assert!(chart.contains("75.0%"));
        assert!(chart.contains("25.0%"));
    }

    #[test]
    fn test_pie_chart_zero_sum_does_not_panic() {
        let totals = vec![
            ("catA".to_string(), dec!(10)),
            ("catB".to_string(), dec!(-10)),
        ];
        let chart = render_pie_chart(&totals);
        assert!(chart.contains("catA"));
        assert!(chart.contains("catB"));
    }

    #[test]
    fn test_empty_charts() {
        assert!(render_bar_chart(&[]).contains("(no data)"));
        assert!(render_pie_chart(&[]).contains("(no data)"));
    }
}
