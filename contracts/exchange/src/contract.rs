use crate::config::{ExchangeConfig, read_config, write_config};
use crate::errors::ExchangeError;
use crate::quote::Quote;
use crate::storage_types::{Direction, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env, contract, contractimpl, log, panic_with_error, symbol_short, token};

fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Logs the caller-facing reason and hands the error back for `?`/`Err`.
fn reject(e: &Env, error: ExchangeError, direction: Direction) -> ExchangeError {
    if cfg!(debug_assertions) {
        e.logs().add(error.message(direction), &[]);
    }
    error
}

#[contract]
pub struct FixedRateExchange;

#[contractimpl]
impl FixedRateExchange {
    /// Binds the exchange to its two ledgers and a positive rate. Nothing
    /// here can be changed later.
    pub fn __constructor(e: Env, token_a: Address, token_b: Address, rate: i128) {
        if rate <= 0 {
            log!(&e, "rejected rate", rate);
            panic_with_error!(&e, ExchangeError::InvalidRate);
        }
        if token_a == token_b {
            panic_with_error!(&e, ExchangeError::IdenticalTokens);
        }

        write_config(
            &e,
            &ExchangeConfig {
                token_a,
                token_b,
                rate,
            },
        );
        extend_instance_ttl(&e);
    }

    /// Pay `amount` of token A, receive `amount * rate` of token B.
    pub fn swap_a_to_b(e: Env, caller: Address, amount: i128) -> Result<i128, ExchangeError> {
        Self::swap(&e, caller, Direction::AToB, amount)
    }

    /// Pay `amount` of token B, receive `amount / rate` of token A.
    pub fn swap_b_to_a(e: Env, caller: Address, amount: i128) -> Result<i128, ExchangeError> {
        Self::swap(&e, caller, Direction::BToA, amount)
    }

    /// Prices a swap without touching either ledger.
    pub fn quote(e: Env, direction: Direction, amount: i128) -> Result<Quote, ExchangeError> {
        let config = read_config(&e)?;
        Quote::calculate(config.rate, direction, amount)
            .map_err(|err| reject(&e, err, direction))
    }

    /// Live reserve balances `(token_a, token_b)` held by the exchange.
    pub fn reserves(e: Env) -> Result<(i128, i128), ExchangeError> {
        let config = read_config(&e)?;
        let this = e.current_contract_address();
        let reserve_a = token::Client::new(&e, &config.token_a).balance(&this);
        let reserve_b = token::Client::new(&e, &config.token_b).balance(&this);
        Ok((reserve_a, reserve_b))
    }

    pub fn rate(e: Env) -> Result<i128, ExchangeError> {
        Ok(read_config(&e)?.rate)
    }

    pub fn config(e: Env) -> Result<ExchangeConfig, ExchangeError> {
        read_config(&e)
    }

    // Shared by both directions. Any error return or trap in a ledger call
    // rolls back the whole invocation.
    fn swap(
        e: &Env,
        caller: Address,
        direction: Direction,
        amount: i128,
    ) -> Result<i128, ExchangeError> {
        caller.require_auth();
        extend_instance_ttl(e);

        let config = read_config(e)?;
        let (source, counter) = config.legs(direction);

        if amount == 0 {
            return Err(reject(e, ExchangeError::ZeroAmount, direction));
        }
        if amount < 0 {
            return Err(reject(e, ExchangeError::NegativeAmount, direction));
        }

        let source = token::Client::new(e, source);
        let counter = token::Client::new(e, counter);
        let this = e.current_contract_address();

        if source.balance(&caller) < amount {
            return Err(reject(e, ExchangeError::InsufficientCallerBalance, direction));
        }

        let quote = Quote::calculate(config.rate, direction, amount)
            .map_err(|err| reject(e, err, direction))?;

        if counter.balance(&this) < quote.amount_out {
            return Err(reject(e, ExchangeError::InsufficientReserve, direction));
        }
        if source.allowance(&caller, &this) < amount {
            return Err(reject(e, ExchangeError::InsufficientAllowance, direction));
        }

        source.transfer_from(&this, &caller, &this, &amount);
        counter.transfer(&this, &caller, &quote.amount_out);

        e.events().publish(
            (symbol_short!("swap"), caller),
            (direction, quote.amount_in, quote.amount_out),
        );

        Ok(quote.amount_out)
    }
}
