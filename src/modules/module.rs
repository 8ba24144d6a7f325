use super::{contract_call, fee_split, notify, payment, venue_swap, wrap};
use crate::extensions::env_extensions::EnvExtensions;
use crate::types::{
    context::DispatchContext, cursor::Cursor, error::RouterError, module::Module, route::Route,
};
use soroban_sdk::{log, panic_with_error, Env};

// Shared execution contract for all step modules
//
// A module runs inside the router's own invocation frame and acts on the router's balances
// directly. It reads its slots starting at `cursor` and returns the cursor advanced by the
// number of entries it consumed from each route sequence.
pub trait ModuleTrait {
    fn execute(&self, e: &Env, ctx: &DispatchContext, route: &Route, cursor: Cursor) -> Cursor;
}

// Panic unless the module is on the allow-list
pub fn require_approved(e: &Env, module: &Module) {
    if !e.is_module_approved(module) {
        panic_with_error!(e, RouterError::ModuleNotApproved);
    }
}

// Resolve and run the implementation of a given module
pub fn execute_module(
    e: &Env,
    module: &Module,
    ctx: &DispatchContext,
    route: &Route,
    cursor: Cursor,
) -> Cursor {
    require_approved(e, module);
    log!(e, "executing module", module.clone(), cursor.amount);
    match module {
        Module::Payment => payment::PaymentModule.execute(e, ctx, route, cursor),
        Module::FeeSplit => fee_split::FeeSplitModule.execute(e, ctx, route, cursor),
        Module::Wrap => wrap::WrapModule.execute(e, ctx, route, cursor),
        Module::Unwrap => wrap::UnwrapModule.execute(e, ctx, route, cursor),
        Module::VenueSwap(protocol) => {
            venue_swap::VenueSwapModule(*protocol).execute(e, ctx, route, cursor)
        }
        Module::Notify => notify::NotifyModule.execute(e, ctx, route, cursor),
        Module::ContractCall => contract_call::ContractCallModule.execute(e, ctx, route, cursor),
    }
}
