use rust_decimal::Decimal;

/* A Holding is one tracked stock position. The symbol is normalized to
uppercase at construction and acts as the lookup key, matched
case-insensitively. Duplicate symbols are allowed: the portfolio keeps
insertion order and only ever touches the first match.

Quantity and buy price are fixed at creation, only the current price moves.
No sign or range check on the numbers: a negative quantity or price is
accepted as-is. */
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub current_price: Decimal,
}

impl Holding {
    /* The current price starts at the buy price until a quote is entered */
    pub fn new(symbol: &str, quantity: Decimal, buy_price: Decimal) -> Self {
        Holding {
            symbol: symbol.to_uppercase(),
            quantity,
            buy_price,
            current_price: buy_price,
        }
    }

    pub fn with_current_price(
        symbol: &str,
        quantity: Decimal,
        buy_price: Decimal,
        current_price: Decimal,
    ) -> Self {
        Holding {
            symbol: symbol.to_uppercase(),
            quantity,
            buy_price,
            current_price,
        }
    }

    pub fn set_current_price(&mut self, price: Decimal) {
        self.current_price = price;
    }

    pub fn market_value(&self) -> Decimal {
        return self.current_price * self.quantity;
    }

    pub fn invested_amount(&self) -> Decimal {
        return self.buy_price * self.quantity;
    }

    pub fn profit_loss(&self) -> Decimal {
        return self.market_value() - self.invested_amount();
    }

    /* One line of the portfolio file: symbol|quantity|buyPrice|currentPrice.
    Decimal's display form does not depend on the machine locale, so a line
    written here parses back to the same values everywhere. */
    pub fn serialize(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.symbol, self.quantity, self.buy_price, self.current_price
        )
    }

    /* None marks an unusable line: fewer than four fields, or a number that
    does not parse. The loader skips those lines. Fields past the fourth are
    ignored. */
    pub fn deserialize(line: &str) -> Option<Holding> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() < 4 {
            return None;
        }
        let quantity = parts[1].parse::<Decimal>().ok()?;
        let buy_price = parts[2].parse::<Decimal>().ok()?;
        let current_price = parts[3].parse::<Decimal>().ok()?;
        Some(Holding::with_current_price(
            parts[0],
            quantity,
            buy_price,
            current_price,
        ))
    }
}
