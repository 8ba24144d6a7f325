use soroban_sdk::contracttype;

use super::protocol::Protocol;

// Step module identifier, also used as the approval storage key
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Module {
    // Send the current asset to a receiver
    Payment,
    // Split a declared total between a receiver and a fee receiver
    FeeSplit,
    // Native -> wrapped native
    Wrap,
    // Wrapped native -> native
    Unwrap,
    // Swap through an external venue of the given protocol
    VenueSwap(Protocol),
    // Emit a sale notification
    Notify,
    // Pay and invoke an arbitrary receiver contract
    ContractCall,
}
