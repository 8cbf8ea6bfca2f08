#![no_std]

mod config;
mod contract;
mod errors;
mod quote;
mod storage_types;


pub use crate::config::ExchangeConfig;
pub use crate::contract::{FixedRateExchange, FixedRateExchangeClient};
pub use crate::errors::ExchangeError;
pub use crate::quote::Quote;
pub use crate::storage_types::Direction;
