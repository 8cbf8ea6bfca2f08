use crate::storage_types::Direction;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExchangeError {
    ZeroAmount = 1,
    InsufficientCallerBalance = 2,
    InsufficientReserve = 3,
    InsufficientAllowance = 4,
    AmountOverflow = 5,
    NegativeAmount = 6,
    PayoutTooSmall = 7,
    InvalidRate = 8,
    IdenticalTokens = 9,
    NotInitialized = 10,
}

impl ExchangeError {
    /// Caller-facing reason. Existing integrations match on these strings.
    pub const fn message(self, direction: Direction) -> &'static str {
        match self {
            ExchangeError::ZeroAmount => "Can't exchange zero amount",
            ExchangeError::InsufficientCallerBalance => "Insufficient Balance",
            ExchangeError::InsufficientReserve => match direction {
                Direction::AToB => "Not enough tokenB",
                Direction::BToA => "Not enough tokenA",
            },
            ExchangeError::InsufficientAllowance => "Insufficient Allowance",
            ExchangeError::AmountOverflow => "Amount overflow",
            ExchangeError::NegativeAmount => "Amount must not be negative",
            ExchangeError::PayoutTooSmall => "Amount too small for rate",
            ExchangeError::InvalidRate => "Rate must be positive",
            ExchangeError::IdenticalTokens => "Tokens must differ",
            ExchangeError::NotInitialized => "Exchange not initialized",
        }
    }
}
