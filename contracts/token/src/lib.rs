#![no_std]

mod allowance;
mod balance;
mod contract;
mod errors;
mod metadata;
mod storage_types;


pub use crate::contract::{Token, TokenClient};
pub use crate::errors::TokenError;
