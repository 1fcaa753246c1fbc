use crate::functions::portfolio_summary;
use crate::structs::Holding;
use crate::utils::fmt4;

/* Render a snapshot with the same seven columns and the same four decimal
formatting as the CSV export, plus a totals footer */
pub fn render_table(holdings: &[Holding]) -> String {
    let mut out = String::new();
    push_row(
        &mut out,
        "Symbol",
        &[
            "Qty".to_string(),
            "Buy Price".to_string(),
            "Cur Price".to_string(),
            "Market Value".to_string(),
            "Invested".to_string(),
            "P/L".to_string(),
        ],
    );
    for holding in holdings {
        push_row(
            &mut out,
            &holding.symbol,
            &[
                fmt4(holding.quantity),
                fmt4(holding.buy_price),
                fmt4(holding.current_price),
                fmt4(holding.market_value()),
                fmt4(holding.invested_amount()),
                fmt4(holding.profit_loss()),
            ],
        );
    }
    if holdings.is_empty() {
        out.push_str("(no holdings)\n");
    }
    let summary = portfolio_summary(holdings);
    push_row(
        &mut out,
        "Total",
        &[
            String::new(),
            String::new(),
            String::new(),
            fmt4(summary.total_market_value),
            fmt4(summary.total_invested),
            fmt4(summary.total_profit_loss),
        ],
    );
    return out;
}

fn push_row(out: &mut String, first: &str, cells: &[String; 6]) {
    out.push_str(&format!(
        "{:<10} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}\n",
        first, cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    ));
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_render_uses_four_decimals() {
        let holdings = vec![Holding::with_current_price(
            "AAPL",
            dec!(10),
            dec!(100),
            dec!(150),
        )];

        let rendered = render_table(&holdings);
        assert!(rendered.contains("AAPL"));
        assert!(rendered.contains("1500.0000"));
        assert!(rendered.contains("500.0000"));
        assert!(rendered.contains("Total"));
    }

    #[test]
    fn test_render_empty_portfolio() {
        let rendered = render_table(&[]);
        assert!(rendered.contains("(no holdings)"));
        assert!(rendered.contains("0.0000"));
    }
}
