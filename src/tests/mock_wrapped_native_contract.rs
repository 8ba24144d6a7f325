#![allow(dead_code)]
use soroban_sdk::{contract, contractimpl, panic_with_error, token::TokenClient, Address, Env, Error};

// Minimal wrapped-native token: deposit/withdraw 1:1 plus the token calls the router relies on
#[contract]
pub struct MockWrappedNativeContract;

#[contractimpl]
impl MockWrappedNativeContract {
    pub fn init(e: Env, native: Address) {
        e.storage().instance().set(&"native", &native);
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        e.storage().persistent().get(&id).unwrap_or(0)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        debit(&e, &from, amount);
        credit(&e, &to, amount);
    }

    pub fn deposit(e: Env, from: Address, amount: i128) {
        from.require_auth();
        TokenClient::new(&e, &native(&e)).transfer(&from, &e.current_contract_address(), &amount);
        credit(&e, &from, amount);
    }

    pub fn withdraw(e: Env, to: Address, amount: i128) {
        to.require_auth();
        debit(&e, &to, amount);
        TokenClient::new(&e, &native(&e)).transfer(&e.current_contract_address(), &to, &amount);
    }
}

fn native(e: &Env) -> Address {
    e.storage().instance().get(&"native").unwrap()
}

fn credit(e: &Env, id: &Address, amount: i128) {
    let balance: i128 = e.storage().persistent().get(id).unwrap_or(0);
    e.storage().persistent().set(id, &(balance + amount));
}

fn debit(e: &Env, id: &Address, amount: i128) {
    let balance: i128 = e.storage().persistent().get(id).unwrap_or(0);
    if amount < 0 || balance < amount {
        panic_with_error!(e, Error::from_contract_error(10));
    }
    e.storage().persistent().set(id, &(balance - amount));
}
