#![allow(dead_code)]
use soroban_sdk::{contract, contractimpl, panic_with_error, token::TokenClient, Address, Env, Error, Vec};

use soroban_fixed_point_math::SorobanFixedPoint;

// Fixed-price pool exposing the Aqua swap interface
//
// `shortfall` is withheld from every delivery while the full quote is still reported back,
// `overdraw` is pulled from the seller on top of the declared input.
#[contract]
pub struct MockPoolContract;

#[contractimpl]
impl MockPoolContract {
    pub fn init(
        e: Env,
        tokens: Vec<Address>,
        price: (u128, u128),
        shortfall: i128,
        overdraw: i128,
    ) {
        e.storage().instance().set(&"tokens", &tokens);
        e.storage().instance().set(&"price", &price);
        e.storage().instance().set(&"shortfall", &shortfall);
        e.storage().instance().set(&"overdraw", &overdraw);
    }

    // Amount of the buying token quoted for `in_amount` of the selling token
    pub fn quote(e: Env, in_amount: u128) -> u128 {
        let (num, den): (u128, u128) = e.storage().instance().get(&"price").unwrap();
        in_amount.fixed_mul_floor(&e, &num, &den)
    }

    pub fn swap(
        e: Env,
        user: Address,
        in_idx: u32,
        out_idx: u32,
        in_amount: u128,
        out_min: u128,
    ) -> u128 {
        user.require_auth();

        if in_idx == out_idx || in_idx > 1 || out_idx > 1 {
            panic_with_error!(&e, Error::from_contract_error(2007));
        }
        if in_amount == 0 {
            panic_with_error!(&e, Error::from_contract_error(2018));
        }

        let out = Self::quote(e.clone(), in_amount);
        if out < out_min {
            panic_with_error!(&e, Error::from_contract_error(2006));
        }

        let tokens: Vec<Address> = e.storage().instance().get(&"tokens").unwrap();
        let shortfall: i128 = e.storage().instance().get(&"shortfall").unwrap();
        let overdraw: i128 = e.storage().instance().get(&"overdraw").unwrap();

        TokenClient::new(&e, &tokens.get(in_idx).unwrap()).transfer(
            &user,
            &e.current_contract_address(),
            &(in_amount as i128 + overdraw),
        );
        TokenClient::new(&e, &tokens.get(out_idx).unwrap()).transfer(
            &e.current_contract_address(),
            &user,
            &(out as i128 - shortfall),
        );

        out
    }
}
