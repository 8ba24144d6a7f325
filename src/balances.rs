use soroban_sdk::{panic_with_error, token, Address, Env, Vec};

use crate::types::{error::RouterError, snapshot::BalanceSnapshot};

// Current balance of `holder` in `asset`
pub fn balance_of(e: &Env, asset: &Address, holder: &Address) -> i128 {
    token::Client::new(e, asset).balance(holder)
}

// Snapshot holder balances for every distinct asset of the path
pub fn take_snapshots(e: &Env, path: &Vec<Address>, holder: &Address) -> Vec<BalanceSnapshot> {
    let mut snapshots: Vec<BalanceSnapshot> = Vec::new(e);
    for asset in path.iter() {
        if snapshots.iter().any(|s| s.asset == asset) {
            continue;
        }
        let amount = balance_of(e, &asset, holder);
        snapshots.push_back(BalanceSnapshot {
            asset,
            holder: holder.clone(),
            amount,
        });
    }
    snapshots
}

// Verify that no balance dropped below its snapshot minus the declared outflow
//
// # Arguments
//
// * `snapshots` - Balances taken before the module chain ran
// * `declared_asset` - Asset the route declares as consumed
// * `declared_out` - Amount of `declared_asset` the route consumes
//
// # Panics
//
// Panics with InsufficientBalanceAfterDispatch if any floor is violated
pub fn verify_snapshots(
    e: &Env,
    snapshots: &Vec<BalanceSnapshot>,
    declared_asset: &Address,
    declared_out: i128,
) {
    for snapshot in snapshots.iter() {
        let out = if &snapshot.asset == declared_asset {
            declared_out
        } else {
            0
        };
        let floor = match snapshot.amount.checked_sub(out) {
            Some(floor) => floor,
            None => panic_with_error!(e, RouterError::InvalidRoute),
        };
        let after = balance_of(e, &snapshot.asset, &snapshot.holder);
        if after < floor {
            panic_with_error!(e, RouterError::InsufficientBalanceAfterDispatch);
        }
    }
}
