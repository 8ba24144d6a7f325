use soroban_sdk::{panic_with_error, Bytes, Env};

use super::module::ModuleTrait;
use crate::adapters::adapter::swap_adapter;
use crate::types::{
    context::DispatchContext, cursor::Cursor, error::RouterError, protocol::Protocol,
    route::Route, swapinfo::LPSwap,
};

// Sells amounts[c] of path[a] for path[a+1] on the venue at participants[c]
//
// The aux payload carries the venue call data: selling and buying asset indices `[si, bi]`.
// The module trusts the venue for its own quote; short deliveries are caught by the router
// balance check after the chain completes.
pub struct VenueSwapModule(pub Protocol);

impl ModuleTrait for VenueSwapModule {
    fn execute(&self, e: &Env, ctx: &DispatchContext, route: &Route, cursor: Cursor) -> Cursor {
        let (si, bi) = parse_indices(e, &route.aux(e, cursor.aux));
        let swap = LPSwap {
            pool: route.participant(e, cursor.participant),
            in_token: route.asset(e, cursor.asset),
            out_token: route.asset(e, cursor.asset + 1),
            si,
            bi,
            to: ctx.router.clone(),
            amount: route.amount(e, cursor.amount),
        };
        swap_adapter(e, self.0, swap);

        cursor.advance(1, 1, 1, 1)
    }
}

fn parse_indices(e: &Env, data: &Bytes) -> (u32, u32) {
    if data.len() != 2 {
        panic_with_error!(e, RouterError::InvalidRoute);
    }
    match (data.get(0), data.get(1)) {
        (Some(si), Some(bi)) if si != bi => (si as u32, bi as u32),
        _ => panic_with_error!(e, RouterError::InvalidRoute),
    }
}
