use crate::errors::TokenError;
use crate::storage_types::{AllowanceDataKey, AllowanceValue, DataKey};
use soroban_sdk::{Address, Env, panic_with_error};

/// Reads the live allowance. An expired entry reads as zero.
pub fn read_allowance(e: &Env, from: Address, spender: Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    match e.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= e.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

/// Overwrites any prior allowance for `(from, spender)`.
pub fn write_allowance(
    e: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };

    if amount > 0 && expiration_ledger < e.ledger().sequence() {
        panic_with_error!(e, TokenError::InvalidExpiration);
    }

    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    e.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger - e.ledger().sequence();
        e.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

pub fn spend_allowance(e: &Env, from: Address, spender: Address, amount: i128) {
    let allowance = read_allowance(e, from.clone(), spender.clone());
    if allowance.amount < amount {
        panic_with_error!(e, TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            e,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}
