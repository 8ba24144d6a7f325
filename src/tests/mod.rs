#![cfg(test)]

mod access_control_tests;
mod mock_pool_contract;
mod mock_wrapped_native_contract;
