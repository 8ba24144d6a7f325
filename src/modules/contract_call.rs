use soroban_sdk::{panic_with_error, token, Bytes, Env, IntoVal, Symbol, Val, Vec};

use super::module::ModuleTrait;
use crate::types::{context::DispatchContext, cursor::Cursor, error::RouterError, route::Route};

const MAX_METHOD_LEN: usize = 32;

// Pays amounts[c] of the current asset to the contract at participants[c] and then invokes
// the method named by the aux payload with `(caller, asset, amount)`
pub struct ContractCallModule;

impl ModuleTrait for ContractCallModule {
    fn execute(&self, e: &Env, ctx: &DispatchContext, route: &Route, cursor: Cursor) -> Cursor {
        let asset = route.asset(e, cursor.asset);
        let amount = route.amount(e, cursor.amount);
        let target = route.participant(e, cursor.participant);
        let method = parse_method(e, &route.aux(e, cursor.aux));

        if amount > 0 {
            token::Client::new(e, &asset).transfer(&ctx.router, &target, &amount);
        }
        let args: Vec<Val> = Vec::from_array(
            e,
            [
                ctx.caller.into_val(e),
                asset.into_val(e),
                amount.into_val(e),
            ],
        );
        e.invoke_contract::<Val>(&target, &method, args);

        cursor.advance(0, 1, 1, 1)
    }
}

fn parse_method(e: &Env, data: &Bytes) -> Symbol {
    let len = data.len() as usize;
    if len == 0 || len > MAX_METHOD_LEN {
        panic_with_error!(e, RouterError::InvalidRoute);
    }
    let mut buf = [0u8; MAX_METHOD_LEN];
    data.copy_into_slice(&mut buf[..len]);
    match core::str::from_utf8(&buf[..len]) {
        Ok(name) if is_symbol_name(name) => Symbol::new(e, name),
        _ => panic_with_error!(e, RouterError::InvalidRoute),
    }
}

fn is_symbol_name(name: &str) -> bool {
    name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
