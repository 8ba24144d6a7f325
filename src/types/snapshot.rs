use soroban_sdk::{contracttype, Address};

// Point-in-time balance record used for the post-dispatch check
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BalanceSnapshot {
    pub asset: Address,
    pub holder: Address,
    pub amount: i128,
}
