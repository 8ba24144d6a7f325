use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::module::Module;

// Router event publisher
pub struct Events(Env);

impl Events {
    pub fn new(e: &Env) -> Self {
        Events(e.clone())
    }

    pub fn approved(&self, module: Module) {
        self.0
            .events()
            .publish((symbol_short!("approved"), module), ());
    }

    pub fn disapproved(&self, module: Module) {
        self.0
            .events()
            .publish((Symbol::new(&self.0, "disapproved"), module), ());
    }

    pub fn payment(&self, from: Address, to: Address, amount: i128, asset: Address) {
        self.0
            .events()
            .publish((symbol_short!("payment"), from, to), (amount, asset));
    }

    pub fn sale(&self, buyer: Address) {
        self.0.events().publish((symbol_short!("sale"), buyer), ());
    }

    pub fn owner_proposed(&self, owner: Address, new_owner: Address) {
        self.0.events().publish(
            (Symbol::new(&self.0, "owner_proposed"), owner, new_owner),
            (),
        );
    }

    pub fn owner_accepted(&self, new_owner: Address) {
        self.0
            .events()
            .publish((Symbol::new(&self.0, "owner_accepted"), new_owner), ());
    }

    pub fn withdraw(&self, owner: Address, asset: Address, amount: i128) {
        self.0
            .events()
            .publish((symbol_short!("withdraw"), owner, asset), amount);
    }
}
