use soroban_sdk::{contractclient, log, panic_with_error, Address, Env};

use crate::{
    extensions::auth_helper::add_transfer_auth,
    types::{error::RouterError, swapinfo::LPSwap},
};

use super::adapter::AdapterTrait;

#[contractclient(name = "AquaPoolClient")]
#[allow(dead_code)]
pub trait AquaPoolTrait {
    fn swap(
        e: Env,
        user: Address,
        in_idx: u32,
        out_idx: u32,
        in_amount: u128,
        out_min: u128,
    ) -> u128;
}

pub struct AquaConstantAdapter;

impl AdapterTrait for AquaConstantAdapter {
    fn swap(&self, env: &Env, si: LPSwap) -> i128 {
        let selling = match u128::try_from(si.amount) {
            Ok(selling) if selling > 0 => selling,
            _ => panic_with_error!(env, RouterError::InvalidRoute),
        };

        //the pool pulls the selling tokens from the router itself
        add_transfer_auth(env, &si.pool, &si.in_token, si.amount);

        let bought = AquaPoolClient::new(env, &si.pool).swap(&si.to, &si.si, &si.bi, &selling, &1u128);
        log!(env, "aqua swap", si.pool, si.out_token, bought);

        match i128::try_from(bought) {
            Ok(bought) => bought,
            Err(_) => panic_with_error!(env, RouterError::InvalidRoute),
        }
    }
}
