use soroban_sdk::{panic_with_error, token, Env};

use super::module::ModuleTrait;
use crate::balances::balance_of;
use crate::events::Events;
use crate::types::{context::DispatchContext, cursor::Cursor, error::RouterError, route::Route};

// Splits a declared total of the current asset between a receiver and a fee receiver
//
// Slots: amounts = [total, payment, fee], participants = [receiver, fee receiver].
// The router must hold the whole total, whatever it exceeds payment + fee by stays there.
pub struct FeeSplitModule;

impl ModuleTrait for FeeSplitModule {
    fn execute(&self, e: &Env, ctx: &DispatchContext, route: &Route, cursor: Cursor) -> Cursor {
        let asset = route.asset(e, cursor.asset);
        let total = route.amount(e, cursor.amount);
        let payment = route.amount(e, cursor.amount + 1);
        let fee = route.amount(e, cursor.amount + 2);
        let receiver = route.participant(e, cursor.participant);
        let fee_receiver = route.participant(e, cursor.participant + 1);

        match payment.checked_add(fee) {
            Some(charged) if charged <= total => {}
            _ => panic_with_error!(e, RouterError::InvalidRoute),
        };
        if balance_of(e, &asset, &ctx.router) < total {
            panic_with_error!(e, RouterError::InsufficientAmountPaidIn);
        }

        let token_client = token::Client::new(e, &asset);
        let events = Events::new(e);
        if payment > 0 {
            token_client.transfer(&ctx.router, &receiver, &payment);
            events.payment(ctx.caller.clone(), receiver, payment, asset.clone());
        }
        if fee > 0 {
            token_client.transfer(&ctx.router, &fee_receiver, &fee);
            events.payment(ctx.caller.clone(), fee_receiver, fee, asset);
        }

        cursor.advance(0, 3, 2, 0)
    }
}
