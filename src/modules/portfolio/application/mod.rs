pub mod ordering;
pub mod page_data;
pub mod portfolio_use_cases;
pub mod ports;
pub mod services;
