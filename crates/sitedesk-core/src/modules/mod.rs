//! Dashboard feature modules

pub mod brokers;
pub mod crm;
pub mod documents;
pub mod employees;
pub mod financials;
pub mod inventory;
pub mod messaging;
pub mod progress_summary;
pub mod sales;
