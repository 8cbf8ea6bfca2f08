use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    InsufficientBalance = 1,
    InsufficientAllowance = 2,
    NegativeAmount = 3,
    InvalidExpiration = 4,
    BalanceOverflow = 5,
    DecimalTooLarge = 6,
}
