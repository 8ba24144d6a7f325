use soroban_sdk::contracttype;

// Venue protocol family
#[contracttype]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Protocol {
    AquaConstant = 0,
    Soroswap = 1,
}
