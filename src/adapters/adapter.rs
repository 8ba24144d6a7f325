use super::{aqua_constant, soroswap};
use crate::types::{protocol::Protocol, swapinfo::LPSwap};
use soroban_sdk::Env;

// Standard interface for all venue adapters
pub trait AdapterTrait {
    // Executes the swap directly through the venue contract, returns the amount the venue reports
    fn swap(&self, env: &Env, swap: LPSwap) -> i128;
}

// Resolve venue adapter for a given protocol
pub fn swap_adapter(e: &Env, protocol: Protocol, si: LPSwap) -> i128 {
    match protocol {
        Protocol::AquaConstant => aqua_constant::AquaConstantAdapter.swap(e, si),
        Protocol::Soroswap => soroswap::SoroswapAdapter.swap(e, si),
    }
}
