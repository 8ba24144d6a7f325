#![allow(non_upper_case_globals)]
use soroban_sdk::storage::Instance;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::types;
use crate::types::module::Module;

use types::error::RouterError;

const OWNER_KEY: &str = "owner";
const PENDING_OWNER_KEY: &str = "pending";
const NATIVE_KEY: &str = "native";
const WRAPPED_KEY: &str = "wrapped";
const LOCK_KEY: &str = "lock";

pub trait EnvExtensions {
    fn get_owner(&self) -> Option<Address>;

    fn set_owner(&self, owner: &Address);

    fn get_pending_owner(&self) -> Option<Address>;

    fn set_pending_owner(&self, owner: &Address);

    fn clear_pending_owner(&self);

    fn get_native(&self) -> Address;

    fn get_wrapped(&self) -> Address;

    fn set_assets(&self, native: &Address, wrapped: &Address);

    fn set_module_approved(&self, module: &Module, approved: bool);

    fn is_module_approved(&self, module: &Module) -> bool;

    fn is_dispatching(&self) -> bool;

    fn enter_dispatch(&self);

    fn exit_dispatch(&self);

    fn bump_instance(&self);

    fn panic_if_not_initialized(&self);

    fn panic_if_not_owner(&self, caller: &Address);

    fn is_initialized(&self) -> bool;
}

impl EnvExtensions for Env {
    fn is_initialized(&self) -> bool {
        get_instance_storage(&self).has(&OWNER_KEY)
    }

    fn get_owner(&self) -> Option<Address> {
        get_instance_storage(&self).get(&OWNER_KEY)
    }

    fn set_owner(&self, owner: &Address) {
        get_instance_storage(&self).set(&OWNER_KEY, owner);
    }

    fn get_pending_owner(&self) -> Option<Address> {
        get_instance_storage(&self).get(&PENDING_OWNER_KEY)
    }

    fn set_pending_owner(&self, owner: &Address) {
        get_instance_storage(&self).set(&PENDING_OWNER_KEY, owner);
    }

    fn clear_pending_owner(&self) {
        get_instance_storage(&self).remove(&PENDING_OWNER_KEY);
    }

    fn get_native(&self) -> Address {
        match get_instance_storage(&self).get(&NATIVE_KEY) {
            Some(native) => native,
            None => panic_with_error!(self, RouterError::NotInitialized),
        }
    }

    fn get_wrapped(&self) -> Address {
        match get_instance_storage(&self).get(&WRAPPED_KEY) {
            Some(wrapped) => wrapped,
            None => panic_with_error!(self, RouterError::NotInitialized),
        }
    }

    fn set_assets(&self, native: &Address, wrapped: &Address) {
        let storage = get_instance_storage(&self);
        storage.set(&NATIVE_KEY, native);
        storage.set(&WRAPPED_KEY, wrapped);
    }

    fn set_module_approved(&self, module: &Module, approved: bool) {
        if approved {
            get_instance_storage(&self).set(module, &true);
        } else {
            get_instance_storage(&self).remove(module);
        }
    }

    fn is_module_approved(&self, module: &Module) -> bool {
        get_instance_storage(&self).get(module).unwrap_or_default()
    }

    //the lock lives in temporary storage and never outlives a successful dispatch
    fn is_dispatching(&self) -> bool {
        self.storage().temporary().has(&LOCK_KEY)
    }

    fn enter_dispatch(&self) {
        if self.is_dispatching() {
            panic_with_error!(self, RouterError::Reentrancy);
        }
        self.storage().temporary().set(&LOCK_KEY, &true);
    }

    fn exit_dispatch(&self) {
        self.storage().temporary().remove(&LOCK_KEY);
    }

    fn panic_if_not_initialized(&self) {
        if !self.is_initialized() {
            panic_with_error!(self, RouterError::NotInitialized);
        }
    }

    fn panic_if_not_owner(&self, caller: &Address) {
        caller.require_auth();
        match self.get_owner() {
            Some(owner) if &owner == caller => {}
            _ => panic_with_error!(self, RouterError::Unauthorized),
        }
    }

    //extend for 20 days if less than 10 days TTL left
    fn bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(LPH * 24 * 10, LPH * 24 * 20);
    }
}

const LPH: u32 = 720;

fn get_instance_storage(e: &Env) -> Instance {
    e.storage().instance()
}
