use soroban_sdk::{panic_with_error, token, Env};

use super::module::ModuleTrait;
use crate::balances::balance_of;
use crate::events::Events;
use crate::types::{context::DispatchContext, cursor::Cursor, error::RouterError, route::Route};

// Sends amounts[c] of the current asset to participants[c]
pub struct PaymentModule;

impl ModuleTrait for PaymentModule {
    fn execute(&self, e: &Env, ctx: &DispatchContext, route: &Route, cursor: Cursor) -> Cursor {
        let asset = route.asset(e, cursor.asset);
        let amount = route.amount(e, cursor.amount);
        let receiver = route.participant(e, cursor.participant);

        if balance_of(e, &asset, &ctx.router) < amount {
            panic_with_error!(e, RouterError::InsufficientAmountPaidIn);
        }

        token::Client::new(e, &asset).transfer(&ctx.router, &receiver, &amount);
        Events::new(e).payment(ctx.caller.clone(), receiver, amount, asset);

        cursor.advance(0, 1, 1, 0)
    }
}
