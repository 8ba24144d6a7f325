use soroban_sdk::{contractclient, panic_with_error, Address, Env};

use super::module::ModuleTrait;
use crate::extensions::{auth_helper::add_transfer_auth, env_extensions::EnvExtensions};
use crate::types::{context::DispatchContext, cursor::Cursor, error::RouterError, route::Route};

// Wrapped native token contract, 1:1 backed by the native asset
#[contractclient(name = "WrappedNativeClient")]
#[allow(dead_code)]
pub trait WrappedNativeTrait {
    // Pull `amount` native units from `from` and mint the same amount of wrapped tokens
    fn deposit(e: Env, from: Address, amount: i128);
    // Burn `amount` wrapped tokens of `to` and release the same amount of native units
    fn withdraw(e: Env, to: Address, amount: i128);
}

// Native -> wrapped native, consumes path[a..=a+1] and one amount
pub struct WrapModule;

impl ModuleTrait for WrapModule {
    fn execute(&self, e: &Env, ctx: &DispatchContext, route: &Route, cursor: Cursor) -> Cursor {
        let native = e.get_native();
        let wrapped = e.get_wrapped();
        require_pair(e, route, cursor, &native, &wrapped);
        let amount = route.amount(e, cursor.amount);

        add_transfer_auth(e, &wrapped, &native, amount);
        WrappedNativeClient::new(e, &wrapped).deposit(&ctx.router, &amount);

        cursor.advance(1, 1, 0, 0)
    }
}

// Wrapped native -> native, consumes path[a..=a+1] and one amount
pub struct UnwrapModule;

impl ModuleTrait for UnwrapModule {
    fn execute(&self, e: &Env, ctx: &DispatchContext, route: &Route, cursor: Cursor) -> Cursor {
        let native = e.get_native();
        let wrapped = e.get_wrapped();
        require_pair(e, route, cursor, &wrapped, &native);
        let amount = route.amount(e, cursor.amount);

        WrappedNativeClient::new(e, &wrapped).withdraw(&ctx.router, &amount);

        cursor.advance(1, 1, 0, 0)
    }
}

fn require_pair(e: &Env, route: &Route, cursor: Cursor, from: &Address, to: &Address) {
    if &route.asset(e, cursor.asset) != from || &route.asset(e, cursor.asset + 1) != to {
        panic_with_error!(e, RouterError::InvalidRoute);
    }
}
