use soroban_sdk::{contractclient, panic_with_error, token::TokenClient, Address, Env, Error};

use super::adapter::AdapterTrait;
use crate::types::{error::RouterError, swapinfo::LPSwap};

#[contractclient(name = "SoroswapClient")]
#[allow(dead_code)]
pub trait SoroswapPairTrait {
    fn get_reserves(e: Env) -> (i128, i128);
    fn swap(e: Env, amount_0_out: i128, amount_1_out: i128, to: Address) -> Result<(), Error>;
}

pub struct SoroswapAdapter;

impl AdapterTrait for SoroswapAdapter {
    fn swap(&self, e: &Env, si: LPSwap) -> i128 {
        if si.bi > 1 {
            panic_with_error!(e, RouterError::InvalidRoute);
        }

        let token_client = TokenClient::new(e, &si.in_token);
        token_client.transfer(&si.to, &si.pool, &si.amount);

        let swap_client = SoroswapClient::new(e, &si.pool);
        let reserves = &swap_client.get_reserves();

        let amount_out = match calc_soroswap_amount_out(si.amount, reserves, si.bi == 0) {
            Some(amount) => amount,
            None => panic_with_error!(e, RouterError::InvalidRoute),
        };

        if si.bi == 1 {
            swap_client.swap(&0, &amount_out, &si.to);
        } else {
            swap_client.swap(&amount_out, &0, &si.to);
        }

        amount_out
    }
}

const SOROSWAP_FEE: i128 = 30;
const SOROSWAP_FEEM: i128 = 10_000;

// Estimate amount_out for SoroSwap LPs
pub fn calc_soroswap_amount_out(
    amount_in: i128,
    reserves: &(i128, i128),
    reverse: bool,
) -> Option<i128> {
    let (reserve_x, reserve_y) = if reverse {
        (reserves.1, reserves.0)
    } else {
        (reserves.0, reserves.1)
    };

    let fee = checked_ceiling_div(amount_in.checked_mul(SOROSWAP_FEE)?, SOROSWAP_FEEM)?;
    let amount_in_less_fee = amount_in.checked_sub(fee)?;
    let numerator = amount_in_less_fee.checked_mul(reserve_y)?;
    let denominator = reserve_x.checked_add(amount_in_less_fee)?;

    numerator.checked_div(denominator)
}

fn checked_ceiling_div(x: i128, y: i128) -> Option<i128> {
    let result = x.checked_div(y)?;
    if x % y != 0 {
        result.checked_add(1)
    } else {
        Some(result)
    }
}
