use std::env;

pub mod errors;
pub mod export;
pub mod functions;
pub mod shell;
pub mod structs;
pub mod utils;


use dotenv::dotenv;
use shell::Shell;
use structs::{Persistable, PortfolioManager};

fn main() {
    dotenv().ok();

    let path = env::var("PORTFOLIO_FILE").ok();
    let manager = match PortfolioManager::new(path.clone()) {
        Ok(manager) => manager,
        Err(error) => {
            // Unreadable data file: report it and start with an empty portfolio
            eprintln!("Load failed: {error}");
            PortfolioManager::default_new(path.unwrap_or(PortfolioManager::PATH.to_string()))
        }
    };

    Shell::new(manager).run();
}
