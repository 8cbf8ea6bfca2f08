use crate::errors::ExchangeError;
use crate::storage_types::Direction;
use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    pub amount_in: i128,
    pub amount_out: i128,
    /// Input left over by integer division. Stays in the reserve.
    pub remainder: i128,
}

impl Quote {
    /// A to B multiplies by the rate, B to A divides by it.
    pub fn calculate(
        rate: i128,
        direction: Direction,
        amount_in: i128,
    ) -> Result<Self, ExchangeError> {
        if amount_in == 0 {
            return Err(ExchangeError::ZeroAmount);
        }
        if amount_in < 0 {
            return Err(ExchangeError::NegativeAmount);
        }

        let (amount_out, remainder) = match direction {
            Direction::AToB => (
                amount_in
                    .checked_mul(rate)
                    .ok_or(ExchangeError::AmountOverflow)?,
                0,
            ),
            Direction::BToA => (amount_in / rate, amount_in % rate),
        };

        if amount_out == 0 {
            return Err(ExchangeError::PayoutTooSmall);
        }

        Ok(Self {
            amount_in,
            amount_out,
            remainder,
        })
    }
}
