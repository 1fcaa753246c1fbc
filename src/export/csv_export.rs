use csv::WriterBuilder;
use serde::Serialize;

use crate::errors::IoError;
use crate::structs::Holding;
use crate::utils::{create_directories_if_needed, fmt4};

pub const CSV_HEADER: [&str; 7] = [
    "Symbol",
    "Quantity",
    "BuyPrice",
    "CurrentPrice",
    "MarketValue",
    "Invested",
    "ProfitLoss",
];

/* One exported row: the four stored fields plus the three derived ones.
Numbers are pre-formatted to four decimals with a '.' separator, so the file
is byte-identical whatever the machine locale is. */
#[derive(Debug, Serialize)]
struct CsvRow {
    symbol: String,
    quantity: String,
    buy_price: String,
    current_price: String,
    market_value: String,
    invested: String,
    profit_loss: String,
}

impl CsvRow {
    fn from_holding(holding: &Holding) -> Self {
        CsvRow {
            symbol: holding.symbol.clone(),
            quantity: fmt4(holding.quantity),
            buy_price: fmt4(holding.buy_price),
            current_price: fmt4(holding.current_price),
            market_value: fmt4(holding.market_value()),
            invested: fmt4(holding.invested_amount()),
            profit_loss: fmt4(holding.profit_loss()),
        }
    }
}

/* Write-only export, there is no importer for this format. The header goes
out even when the portfolio is empty. */
pub fn write_holdings_csv(holdings: &[Holding], path: &str) -> Result<(), IoError> {
    create_directories_if_needed(path);
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for holding in holdings {
        writer.serialize(CsvRow::from_holding(holding))?;
    }
    writer.flush()?;
    Ok(())
}
