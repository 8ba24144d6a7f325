use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    symbol_short, Address, Env, IntoVal, Val, Vec,
};

// Let `puller` move exactly `amount` of router-held `token` to itself within the current call
//
// Venue pools and the wrapped native contract transfer the router's tokens on its behalf.
pub fn add_transfer_auth(env: &Env, puller: &Address, token: &Address, amount: i128) {
    let args: Vec<Val> = Vec::from_array(
        env,
        [
            env.current_contract_address().to_val(),
            puller.clone().to_val(),
            amount.into_val(env),
        ],
    );
    let transfer = InvokerContractAuthEntry::Contract(SubContractInvocation {
        context: ContractContext {
            contract: token.clone(),
            fn_name: symbol_short!("transfer"),
            args,
        },
        sub_invocations: Vec::new(env),
    });

    env.authorize_as_current_contract(Vec::from_array(env, [transfer]));
}
