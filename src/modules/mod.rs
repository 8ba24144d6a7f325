pub mod contract_call;
pub mod fee_split;
pub mod module;
pub mod notify;
pub mod payment;
pub mod venue_swap;
pub mod wrap;
