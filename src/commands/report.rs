use crate::args::{ChartKind, ReportArgs};
use crate::commands::Out;
use crate::report::{category_totals, render_bar_chart, render_pie_chart};
use crate::{Config, Result};
use rust_decimal::Decimal;

/// Aggregates category totals from the local store and draws the
/// requested chart(s) to stdout. Fails with `StoreMissing` when no
/// store exists yet.
pub async fn report(config: Config, args: ReportArgs) -> Result<Out<Vec<(String, Decimal)>>> {
    let records = config.store().read_all()?;
    let totals = category_totals(&records);

    match args.chart() {
        ChartKind::Bar => println!("{}", render_bar_chart(&totals)),
        ChartKind::Pie => println!("{}", render_pie_chart(&totals)),
        ChartKind::Both => {
            println!("{}", render_bar_chart(&totals));
            println!("{}", render_pie_chart(&totals));
        }
    }

    Ok(Out::new(
        format!(
            "Report generated over {} record(s) in {} categor{}",
            records.len(),
            totals.len(),
            if totals.len() == 1 { "y" } else { "ies" }
        ),
        totals,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Amount, Record};
    use crate::test::TestEnv;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_report_totals() {
        let env = TestEnv::new().await;
        let store = env.config().store();
        for (category, amount) in [("catA", dec!(10)), ("catB", dec!(5)), ("catA", dec!(3))] {
            store
                .append(&Record::new("2025-01-01", category, Amount::new(amount), ""))
                .unwrap();
        }

        let out = report(env.config(), ReportArgs::new(ChartKind::Both))
            .await
            .unwrap();
        let totals = out.structure().unwrap();
        assert_eq!(
            totals,
            &vec![
                ("catA".to_string(), dec!(13)),
                ("catB".to_string(), dec!(5))
            ]
        );
    }

    #[tokio::test]
    async fn test_report_missing_store() {
        let env = TestEnv::without_store().await;
        let err = report(env.config(), ReportArgs::new(ChartKind::Bar))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::StoreMissing(_)));
    }
}
