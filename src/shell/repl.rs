use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use crate::errors::InputError;
use crate::shell::render_table;
use crate::structs::{Holding, Persistable, PortfolioManager};

pub const DEFAULT_EXPORT_PATH: &str = "portfolio_export.csv";

/* The interactive front end. Every action re-reads the snapshot before
rendering, every failure ends as a printed message. Nothing here is fatal,
and rejected input never mutates the portfolio. */
pub struct Shell {
    manager: PortfolioManager,
}

impl Shell {
    pub fn new(manager: PortfolioManager) -> Self {
        Shell { manager }
    }

    pub fn run(&self) {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        println!("Stock Portfolio Tracker");
        loop {
            println!();
            print!("{}", render_table(&self.manager.list()));
            println!("[a]dd  [u]pdate price  [r]emove  [s]ave  [l]oad  [e]xport csv  [q]uit");
            let choice = match prompt(&mut input, "> ") {
                Some(choice) => choice,
                None => break,
            };
            match choice.trim() {
                "a" => self.on_add(&mut input),
                "u" => self.on_update_price(&mut input),
                "r" => self.on_remove(&mut input),
                "s" => self.on_save(),
                "l" => self.on_load(),
                "e" => self.on_export(&mut input),
                "q" => break,
                "" => (),
                other => println!("Unknown action: {other}"),
            }
        }
    }

    /* Both numbers are parsed before anything is added, so bad input leaves
    the portfolio untouched */
    fn on_add(&self, input: &mut impl BufRead) {
        let symbol = match prompt(input, "Symbol: ") {
            Some(symbol) => symbol.trim().to_string(),
            None => return,
        };
        if symbol.is_empty() {
            println!("{}", InputError::EmptySymbol);
            return;
        }
        let quantity_raw = match prompt(input, "Quantity: ") {
            Some(raw) => raw,
            None => return,
        };
        let buy_raw = match prompt(input, "Buy price: ") {
            Some(raw) => raw,
            None => return,
        };
        match (parse_decimal(&quantity_raw), parse_decimal(&buy_raw)) {
            (Ok(quantity), Ok(buy_price)) => {
                self.manager.add(Holding::new(&symbol, quantity, buy_price));
            }
            (Err(error), _) | (_, Err(error)) => println!("{error}"),
        }
    }

    fn on_update_price(&self, input: &mut impl BufRead) {
        let symbol = match prompt(input, "Symbol: ") {
            Some(symbol) => symbol.trim().to_string(),
            None => return,
        };
        if symbol.is_empty() {
            return;
        }
        let current = match self.manager.find_by_symbol(&symbol) {
            Some(holding) => holding,
            None => {
                println!("Holding not found: {symbol}");
                return;
            }
        };
        let label = format!("New price (current {}): ", current.current_price);
        let price_raw = match prompt(input, &label) {
            Some(raw) => raw,
            None => return,
        };
        match parse_decimal(&price_raw) {
            Ok(price) => {
                if !self.manager.update_price(&symbol, price) {
                    println!("Holding not found: {symbol}");
                }
            }
            Err(error) => println!("{error}"),
        }
    }

    fn on_remove(&self, input: &mut impl BufRead) {
        let symbol = match prompt(input, "Symbol to remove: ") {
            Some(symbol) => symbol.trim().to_string(),
            None => return,
        };
        if symbol.is_empty() {
            return;
        }
        if !self.manager.remove_by_symbol(&symbol) {
            println!("Holding not found: {symbol}");
        }
    }

    fn on_save(&self) {
        match self.manager.save() {
            Ok(()) => println!("Saved to {}", self.manager.get_path()),
            Err(error) => println!("Save failed: {error}"),
        }
    }

    fn on_load(&self) {
        match self.manager.load() {
            Ok(()) => println!("Loaded from {}", self.manager.get_path()),
            Err(error) => println!("Load failed: {error}"),
        }
    }

    fn on_export(&self, input: &mut impl BufRead) {
        let label = format!("Export path [{DEFAULT_EXPORT_PATH}]: ");
        let path_raw = match prompt(input, &label) {
            Some(raw) => raw,
            None => return,
        };
        let path_raw = path_raw.trim();
        let path = if path_raw.is_empty() {
            DEFAULT_EXPORT_PATH
        } else {
            path_raw
        };
        match self.manager.export_csv(path) {
            Ok(()) => println!("Exported to {path}"),
            Err(error) => println!("Export failed: {error}"),
        }
    }
}

/* None means end of input (the user closed stdin) */
fn prompt(input: &mut impl BufRead, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end().to_string()),
        Err(_) => None,
    }
}

fn parse_decimal(raw: &str) -> Result<Decimal, InputError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| InputError::InvalidNumber(raw.trim().to_string()))
}
