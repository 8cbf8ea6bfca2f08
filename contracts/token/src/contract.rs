use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{
    read_balance, read_total_supply, receive_balance, spend_balance, write_total_supply,
};
use crate::errors::TokenError;
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use crate::storage_types::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::token::{self, Interface as _};
use soroban_sdk::{Address, Env, String, contract, contractimpl, panic_with_error};
use soroban_token_sdk::{TokenUtils, metadata::TokenMetadata};

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, TokenError::NegativeAmount);
    }
}

fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contract]
pub struct Token;

#[contractimpl]
impl Token {
    /// Deploys the ledger and credits the whole initial supply to `holder`.
    pub fn __constructor(
        e: Env,
        holder: Address,
        decimal: u32,
        name: String,
        symbol: String,
        initial_supply: i128,
    ) {
        if decimal > 18 {
            panic_with_error!(&e, TokenError::DecimalTooLarge);
        }
        check_nonnegative_amount(&e, initial_supply);

        write_metadata(
            &e,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        receive_balance(&e, holder.clone(), initial_supply);
        write_total_supply(&e, initial_supply);
        extend_instance_ttl(&e);

        TokenUtils::new(&e)
            .events()
            .mint(holder.clone(), holder, initial_supply);
    }

    /// Get total supply
    pub fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }
}

#[contractimpl]
impl token::Interface for Token {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        extend_instance_ttl(&e);
        read_allowance(&e, from, spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);
        extend_instance_ttl(&e);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&e)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        extend_instance_ttl(&e);
        read_balance(&e, id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);
        extend_instance_ttl(&e);

        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);
        extend_instance_ttl(&e);

        // Allowance is checked before balance.
        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        TokenUtils::new(&e).events().transfer(from, to, amount)
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);
        extend_instance_ttl(&e);

        spend_balance(&e, from.clone(), amount);
        write_total_supply(&e, read_total_supply(&e) - amount);
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);
        extend_instance_ttl(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        write_total_supply(&e, read_total_supply(&e) - amount);
        TokenUtils::new(&e).events().burn(from, amount)
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }
}
