use soroban_sdk::Address;

// Invocation-wide values shared by all modules of a dispatch
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DispatchContext {
    // Account that submitted the route
    pub caller: Address,
    // Router contract address holding the funds
    pub router: Address,
}
