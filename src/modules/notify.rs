use soroban_sdk::{panic_with_error, Env};

use super::module::ModuleTrait;
use crate::events::Events;
use crate::extensions::env_extensions::EnvExtensions;
use crate::types::{context::DispatchContext, cursor::Cursor, error::RouterError, route::Route};

// Emits a sale notification for participants[c]
pub struct NotifyModule;

impl ModuleTrait for NotifyModule {
    fn execute(&self, e: &Env, _ctx: &DispatchContext, route: &Route, cursor: Cursor) -> Cursor {
        //sale events are only valid as part of a running dispatch
        if !e.is_dispatching() {
            panic_with_error!(e, RouterError::Unauthorized);
        }
        let buyer = route.participant(e, cursor.participant);
        Events::new(e).sale(buyer);

        cursor.advance(0, 0, 1, 0)
    }
}
