use std::sync::Mutex;

use rust_decimal::Decimal;

use crate::errors::IoError;
use crate::export::write_holdings_csv;
use crate::structs::Holding;

use super::Persistable;

/* This portfolio manager owns the in-memory list of holdings and its
portfolio.txt persistence. The list keeps insertion order and allows
duplicate symbols; find/update/remove all touch the first case-insensitive
match only.

Every operation takes the mutex, so a front end is free to call in from
whatever thread its callbacks run on: at most one operation proceeds at a
time. */
pub struct PortfolioManager {
    holdings: Mutex<Vec<Holding>>,
    path: String,
}

impl Persistable for PortfolioManager {
    const PATH: &'static str = "portfolio.txt";

    fn default_new(path: String) -> Self {
        Self {
            holdings: Mutex::new(Vec::new()),
            path,
        }
    }

    fn get_path(&self) -> &str {
        return &self.path;
    }

    fn serialize_lines(&self) -> Vec<String> {
        let holdings = self.holdings.lock().unwrap();
        holdings.iter().map(|h| h.serialize()).collect()
    }

    fn load_lines<'a>(&self, lines: impl Iterator<Item = &'a str>) {
        let mut holdings = self.holdings.lock().unwrap();
        for line in lines {
            if let Some(holding) = Holding::deserialize(line) {
                holdings.push(holding);
            }
        }
    }

    fn clear(&self) {
        self.holdings.lock().unwrap().clear();
    }
}

impl PortfolioManager {
    /* Appends, no duplicate check */
    pub fn add(&self, holding: Holding) {
        self.holdings.lock().unwrap().push(holding);
    }

    /* Independent snapshot: the caller can sort or drop rows without
    touching the stored list */
    pub fn list(&self) -> Vec<Holding> {
        return self.holdings.lock().unwrap().clone();
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<Holding> {
        let holdings = self.holdings.lock().unwrap();
        holdings
            .iter()
            .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
            .cloned()
    }

    /* First match only, like find. Returns false when the symbol is absent */
    pub fn update_price(&self, symbol: &str, price: Decimal) -> bool {
        let mut holdings = self.holdings.lock().unwrap();
        match holdings
            .iter_mut()
            .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
        {
            Some(holding) => {
                holding.set_current_price(price);
                true
            }
            None => false,
        }
    }

    /* Removes the first match, reports whether a removal happened */
    pub fn remove_by_symbol(&self, symbol: &str) -> bool {
        let mut holdings = self.holdings.lock().unwrap();
        match holdings
            .iter()
            .position(|h| h.symbol.eq_ignore_ascii_case(symbol))
        {
            Some(index) => {
                holdings.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        return self.holdings.lock().unwrap().len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    pub fn export_csv(&self, path: &str) -> Result<(), IoError> {
        let snapshot = self.list();
        write_holdings_csv(&snapshot, path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal_macros::dec;
    use serial_test::serial;

    use super::*;

    fn manager_with(holdings: Vec<Holding>) -> PortfolioManager {
        let manager = PortfolioManager::default_new(".data_test/unused.txt".to_string());
        for holding in holdings {
            manager.add(holding);
        }
        manager
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let manager = manager_with(vec![Holding::new("AAPL", dec!(10), dec!(100))]);

        let mut snapshot = manager.list();
        snapshot.clear();

        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let manager = manager_with(vec![Holding::new("aapl", dec!(10), dec!(100))]);

        let found = manager.find_by_symbol("AAPL").unwrap();
        assert_eq!(found.symbol, "AAPL");
        assert_eq!(manager.find_by_symbol("aApL").unwrap().symbol, "AAPL");
        assert!(manager.find_by_symbol("MSFT").is_none());
    }

    #[test]
    fn test_first_match_wins_with_duplicates() {
        let manager = manager_with(vec![
            Holding::new("AAPL", dec!(1), dec!(100)),
            Holding::new("AAPL", dec!(2), dec!(200)),
        ]);

        assert_eq!(manager.find_by_symbol("aapl").unwrap().buy_price, dec!(100));

        assert!(manager.update_price("AAPL", dec!(111)));
        let snapshot = manager.list();
        assert_eq!(snapshot[0].current_price, dec!(111));
        assert_eq!(snapshot[1].current_price, dec!(200));

        assert!(manager.remove_by_symbol("AAPL"));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.list()[0].buy_price, dec!(200));
    }

    #[test]
    fn test_remove_absent_symbol_changes_nothing() {
        let manager = manager_with(vec![
            Holding::new("AAPL", dec!(1), dec!(100)),
            Holding::new("MSFT", dec!(2), dec!(200)),
        ]);

        assert!(!manager.remove_by_symbol("GOOG"));
        assert!(!manager.update_price("GOOG", dec!(1)));

        let snapshot = manager.list();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].symbol, "AAPL");
        assert_eq!(snapshot[1].symbol, "MSFT");
    }

    #[test]
    #[serial]
    fn test_save_and_load_round_trip() {
        let path = ".data_test/roundtrip_portfolio.txt";
        let manager = PortfolioManager::default_new(path.to_string());
        manager.add(Holding::new("AAPL", dec!(10), dec!(100)));
        manager.add(Holding::with_current_price("GOOG", dec!(2), dec!(1500), dec!(1400.5)));
        manager.save().unwrap();

        let reloaded = PortfolioManager::new(Some(path.to_string())).unwrap();
        let snapshot = reloaded.list();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].symbol, "AAPL");
        assert_eq!(snapshot[1].symbol, "GOOG");
        assert_eq!(snapshot[1].current_price, dec!(1400.5));

        manager.delete().unwrap();
    }

    #[test]
    #[serial]
    fn test_load_missing_file_yields_empty_collection() {
        let path = ".data_test/no_such_portfolio.txt";
        let _ = fs::remove_file(path);

        let manager = PortfolioManager::new(Some(path.to_string())).unwrap();
        assert!(manager.is_empty());
    }

    #[test]
    #[serial]
    fn test_load_skips_malformed_lines() {
        let path = ".data_test/malformed_portfolio.txt";
        fs::create_dir_all(".data_test").unwrap();
        fs::write(path, "AAPL|10|100|150\nnot a holding\nMSFT|abc|1|1\n").unwrap();

        let manager = PortfolioManager::new(Some(path.to_string())).unwrap();
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.list()[0].symbol, "AAPL");

        manager.delete().unwrap();
    }

    #[test]
    #[serial]
    fn test_load_clears_previous_content() {
        let path = ".data_test/clearing_portfolio.txt";
        let _ = fs::remove_file(path);

        let manager = PortfolioManager::new(Some(path.to_string())).unwrap();
        manager.add(Holding::new("AAPL", dec!(1), dec!(1)));

        manager.load().unwrap();
        assert!(manager.is_empty());
    }
}
