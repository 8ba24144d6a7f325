use soroban_sdk::{contracttype, panic_with_error, Address, Bytes, Env, Vec};

use super::{error::RouterError, module::Module};

// Dispatch route descriptor
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Route {
    // Asset path, path[0] is the asset paid in by the caller
    pub path: Vec<Address>,
    // Module-dependent amounts, amounts[0] is the amount paid in
    pub amounts: Vec<i128>,
    // Counterparties consumed by modules
    pub participants: Vec<Address>,
    // Step modules in execution order
    pub modules: Vec<Module>,
    // Opaque per-module payloads
    pub aux: Vec<Bytes>,
    // Expiration ledger timestamp
    pub deadline: u64,
}

impl Route {
    pub fn asset(&self, e: &Env, index: u32) -> Address {
        match self.path.get(index) {
            Some(asset) => asset,
            None => panic_with_error!(e, RouterError::InvalidRoute),
        }
    }

    pub fn amount(&self, e: &Env, index: u32) -> i128 {
        match self.amounts.get(index) {
            Some(amount) if amount >= 0 => amount,
            _ => panic_with_error!(e, RouterError::InvalidRoute),
        }
    }

    pub fn participant(&self, e: &Env, index: u32) -> Address {
        match self.participants.get(index) {
            Some(participant) => participant,
            None => panic_with_error!(e, RouterError::InvalidRoute),
        }
    }

    pub fn aux(&self, e: &Env, index: u32) -> Bytes {
        match self.aux.get(index) {
            Some(data) => data,
            None => panic_with_error!(e, RouterError::InvalidRoute),
        }
    }

    // Asset paid in by the caller
    pub fn asset_in(&self, e: &Env) -> Address {
        self.asset(e, 0)
    }

    // Amount paid in by the caller
    pub fn amount_in(&self, e: &Env) -> i128 {
        self.amount(e, 0)
    }
}
