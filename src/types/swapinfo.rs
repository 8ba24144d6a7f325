use soroban_sdk::Address;

// Normalized venue swap descriptor
#[derive(Clone, Eq, PartialEq)]
pub struct LPSwap {
    // Venue contract address
    pub pool: Address,
    // Selling token address
    pub in_token: Address,
    // Buying token address
    pub out_token: Address,
    // Selling asset index within the venue
    pub si: u32,
    // Buying asset index within the venue
    pub bi: u32,
    // Address to receive swapped tokens
    pub to: Address,
    // Amount of tokens to sell
    pub amount: i128,
}
