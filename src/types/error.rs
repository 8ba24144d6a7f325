use soroban_sdk::contracterror;

// Standard contract errors
#[contracterror]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RouterError {
    // Caller is not allowed to execute this function
    Unauthorized = 32_700,
    // Contract has not been initialized yet
    NotInitialized = 32_701,
    // Cannot initialize the contract for the second time
    AlreadyInitialized = 32_702,
    // Ownership transfer has not been proposed
    NoPendingOwner = 32_703,
    // Module referenced by the route is not on the allow-list
    ModuleNotApproved = 32_710,
    // Malformed route (missing slots, negative amounts, asset mismatch)
    InvalidRoute = 32_711,
    // Route deadline has already passed
    DeadlineExpired = 32_712,
    // Supplied or held amount is lower than the route declares
    InsufficientAmountPaidIn = 32_713,
    // Router balances dropped below the declared floor
    InsufficientBalanceAfterDispatch = 32_714,
    // Dispatch is already in progress
    Reentrancy = 32_715,
    // Amount must be positive
    InvalidAmount = 32_716,
}
