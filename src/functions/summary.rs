use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::structs::Holding;

/* Whole portfolio totals: the same arithmetic as the per-row derived
fields, folded over a snapshot */
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub total_market_value: Decimal,
    pub total_invested: Decimal,
    pub total_profit_loss: Decimal,
}

pub fn portfolio_summary(holdings: &[Holding]) -> PortfolioSummary {
    let total_market_value = holdings
        .iter()
        .fold(dec!(0), |acc, holding| acc + holding.market_value());
    let total_invested = holdings
        .iter()
        .fold(dec!(0), |acc, holding| acc + holding.invested_amount());
    return PortfolioSummary {
        total_market_value,
        total_invested,
        total_profit_loss: total_market_value - total_invested,
    };
}
