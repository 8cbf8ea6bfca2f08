use crate::errors::ExchangeError;
use crate::storage_types::{DataKey, Direction};
use soroban_sdk::{Address, Env, contracttype};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeConfig {
    pub token_a: Address,
    pub token_b: Address,
    /// Units of token B paid per unit of token A.
    pub rate: i128,
}

impl ExchangeConfig {
    /// Returns `(source, counter)` ledger addresses for a swap direction.
    pub fn legs(&self, direction: Direction) -> (&Address, &Address) {
        match direction {
            Direction::AToB => (&self.token_a, &self.token_b),
            Direction::BToA => (&self.token_b, &self.token_a),
        }
    }
}

pub fn read_config(e: &Env) -> Result<ExchangeConfig, ExchangeError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ExchangeError::NotInitialized)
}

pub fn write_config(e: &Env, config: &ExchangeConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}
