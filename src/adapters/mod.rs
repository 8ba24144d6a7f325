pub mod adapter;
pub mod aqua_constant;
pub mod soroswap;
