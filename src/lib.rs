#![no_std]

mod adapters;
mod balances;
mod events;
mod extensions;
mod modules;
mod tests;
mod types;

use balances::{take_snapshots, verify_snapshots};
use events::Events;
use extensions::env_extensions::EnvExtensions;
use modules::module::{execute_module, require_approved};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, token, Address, BytesN, Env};
use types::{
    context::DispatchContext, cursor::Cursor, error::RouterError, module::Module, route::Route,
};

#[contract]
pub struct StellarRouter;

#[contractimpl]
impl StellarRouter {
    // Initialize contract
    //
    // # Arguments
    //
    // * `owner` - Owner account address
    // * `native` - Native asset contract address
    // * `wrapped` - Wrapped native token contract address
    //
    // # Panics
    //
    // Panics if the contract is already initialized
    pub fn init(e: Env, owner: Address, native: Address, wrapped: Address) {
        if e.is_initialized() {
            panic_with_error!(&e, RouterError::AlreadyInitialized);
        }
        owner.require_auth();
        e.set_owner(&owner);
        e.set_assets(&native, &wrapped);
        e.bump_instance();
    }

    // Add a step module to the allow-list
    //
    // # Arguments
    //
    // * `caller` - Owner account address
    // * `module` - Module to approve
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the owner
    pub fn approve(e: Env, caller: Address, module: Module) {
        e.panic_if_not_initialized();
        e.panic_if_not_owner(&caller);
        e.set_module_approved(&module, true);
        e.bump_instance();
        Events::new(&e).approved(module);
    }

    // Remove a step module from the allow-list
    //
    // # Arguments
    //
    // * `caller` - Owner account address
    // * `module` - Module to disapprove
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the owner
    pub fn disapprove(e: Env, caller: Address, module: Module) {
        e.panic_if_not_initialized();
        e.panic_if_not_owner(&caller);
        e.set_module_approved(&module, false);
        e.bump_instance();
        Events::new(&e).disapproved(module);
    }

    // Check whether a step module is allowed to run
    pub fn is_approved(e: Env, module: Module) -> bool {
        e.is_module_approved(&module)
    }

    // Retrieve current owner address
    pub fn owner(e: Env) -> Address {
        match e.get_owner() {
            Some(owner) => owner,
            None => panic_with_error!(&e, RouterError::NotInitialized),
        }
    }

    // Propose a new owner, the transfer completes once the new owner accepts it
    //
    // # Arguments
    //
    // * `caller` - Current owner account address
    // * `new_owner` - Proposed owner address
    //
    // # Panics
    //
    // Panics if the caller is not the owner
    pub fn propose_owner(e: Env, caller: Address, new_owner: Address) {
        e.panic_if_not_initialized();
        e.panic_if_not_owner(&caller);
        e.set_pending_owner(&new_owner);
        e.bump_instance();
        Events::new(&e).owner_proposed(caller, new_owner);
    }

    // Accept a pending ownership transfer
    //
    // # Arguments
    //
    // * `new_owner` - Proposed owner address
    //
    // # Panics
    //
    // Panics if no transfer was proposed
    // Panics if the address doesn't match the proposed owner
    pub fn accept_owner(e: Env, new_owner: Address) {
        e.panic_if_not_initialized();
        new_owner.require_auth();
        let pending = match e.get_pending_owner() {
            Some(pending) => pending,
            None => panic_with_error!(&e, RouterError::NoPendingOwner),
        };
        if pending != new_owner {
            panic_with_error!(&e, RouterError::Unauthorized);
        }
        e.set_owner(&new_owner);
        e.clear_pending_owner();
        e.bump_instance();
        Events::new(&e).owner_accepted(new_owner);
    }

    // Update the contract's WASM hash
    //
    // # Arguments
    //
    // * `caller` - Owner account address
    // * `wasm_hash` - New WASM hash
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the owner
    pub fn update_contract(e: Env, caller: Address, wasm_hash: BytesN<32>) {
        e.panic_if_not_initialized();
        e.panic_if_not_owner(&caller);
        e.deployer().update_current_contract_wasm(wasm_hash)
    }

    // Execute a route through its chain of step modules
    //
    // # Arguments
    //
    // * `caller` - Address of the account paying in
    // * `value` - Native spending cap declared by the caller, must be zero for token routes.
    //   No funds travel with it: exactly `amounts[0]` is pulled from the caller, so a cap above
    //   that leaves the difference with the caller and a cap below it fails the dispatch.
    // * `route` - Route descriptor
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if another dispatch is in progress
    // Panics if the route deadline has passed
    // Panics if any module of the route is not approved
    // Panics if the route is malformed
    // Panics if the attached value or allowance does not cover the amount paid in
    // Panics if any module fails
    // Panics if router balances end up below their pre-dispatch floor
    pub fn dispatch(e: Env, caller: Address, value: i128, route: Route) {
        //require authentication
        caller.require_auth();
        e.panic_if_not_initialized();
        //bump TTL
        e.bump_instance();
        e.enter_dispatch();

        if route.deadline < e.ledger().timestamp() {
            panic_with_error!(&e, RouterError::DeadlineExpired);
        }
        //fail fast before any funds move
        for module in route.modules.iter() {
            require_approved(&e, &module);
        }
        validate_route(&e, &route);

        let router = e.current_contract_address();
        let asset_in = route.asset_in(&e);
        let amount_in = route.amount_in(&e);
        log!(&e, "dispatch started", caller.clone(), asset_in.clone(), amount_in);

        collect_amount_in(&e, &caller, &router, &asset_in, amount_in, value);

        //make balances snapshot once the paid in amount is on the router
        let snapshots = take_snapshots(&e, &route.path, &router);

        let ctx = DispatchContext { caller, router };
        //amounts[0] belongs to the router, modules start reading after it
        let mut cursor = Cursor::default().advance(0, 1, 0, 0);
        for module in route.modules.iter() {
            cursor = execute_module(&e, &module, &ctx, &route, cursor);
        }

        //only the paid in amount may leave the router
        verify_snapshots(&e, &snapshots, &asset_in, amount_in);

        e.exit_dispatch();
        log!(&e, "dispatch completed", route.modules.len());
    }

    // Withdraw stray balances from the contract
    //
    // # Arguments
    //
    // * `caller` - Owner account address
    // * `asset` - Token address to withdraw
    // * `amount` - Amount of tokens to withdraw
    //
    // # Panics
    //
    // Panics if the caller is not the owner
    // Panics if a dispatch is in progress
    // Panics if the contract balance is insufficient
    pub fn withdraw(e: Env, caller: Address, asset: Address, amount: i128) {
        e.panic_if_not_initialized();
        e.panic_if_not_owner(&caller);
        if e.is_dispatching() {
            panic_with_error!(&e, RouterError::Reentrancy);
        }
        if amount <= 0 {
            panic_with_error!(&e, RouterError::InvalidAmount);
        }
        //extend TTL
        e.bump_instance();
        //transfer tokens from the contract balance
        token::Client::new(&e, &asset).transfer(&e.current_contract_address(), &caller, &amount);
        Events::new(&e).withdraw(caller, asset, amount);
    }
}

// Check route shape: non-empty sequences, positive amount paid in, no negative amounts
fn validate_route(e: &Env, route: &Route) {
    if route.path.is_empty() || route.amounts.is_empty() || route.modules.is_empty() {
        panic_with_error!(e, RouterError::InvalidRoute);
    }
    if route.amounts.iter().any(|amount| amount < 0) {
        panic_with_error!(e, RouterError::InvalidRoute);
    }
    if route.amount_in(e) == 0 {
        panic_with_error!(e, RouterError::InvalidRoute);
    }
}

// Move the amount paid in from the caller to the router
//
// Native routes are pulled directly within the caller's declared cap, token routes through the
// caller's allowance
fn collect_amount_in(
    e: &Env,
    caller: &Address,
    router: &Address,
    asset_in: &Address,
    amount_in: i128,
    value: i128,
) {
    let token_client = token::Client::new(e, asset_in);
    if asset_in == &e.get_native() {
        if value < amount_in {
            panic_with_error!(e, RouterError::InsufficientAmountPaidIn);
        }
        token_client.transfer(caller, router, &amount_in);
    } else {
        if value != 0 {
            panic_with_error!(e, RouterError::InvalidRoute);
        }
        token_client.transfer_from(router, caller, router, &amount_in);
    }
}
