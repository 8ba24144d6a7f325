extern crate std;
use crate::tests::router_test_context::{router_error, setup, RouterTestContext};
use crate::types::{error::RouterError, module::Module};
use crate::{StellarRouter, StellarRouterClient};
use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env, FromVal, Symbol};

#[test]
fn approve_is_idempotent() {
    let ctx = setup();
    assert!(ctx.router_client.is_approved(&Module::Payment));

    ctx.router_client.approve(&ctx.owner, &Module::Payment);
    let (topics, _) = ctx.last_router_event().unwrap();
    assert_eq!(topics.len(), 2);
    assert_eq!(
        Symbol::from_val(&ctx.env, &topics.get(0).unwrap()),
        symbol_short!("approved")
    );
    assert_eq!(
        Module::from_val(&ctx.env, &topics.get(1).unwrap()),
        Module::Payment
    );

    ctx.router_client.approve(&ctx.owner, &Module::Payment);
    let (topics, _) = ctx.last_router_event().unwrap();
    assert_eq!(
        Symbol::from_val(&ctx.env, &topics.get(0).unwrap()),
        symbol_short!("approved")
    );
    assert!(ctx.router_client.is_approved(&Module::Payment));
}

#[test]
fn disapprove_removes_module() {
    let ctx = setup();
    ctx.router_client.disapprove(&ctx.owner, &Module::Notify);
    let (topics, _) = ctx.last_router_event().unwrap();
    assert_eq!(
        Symbol::from_val(&ctx.env, &topics.get(0).unwrap()),
        Symbol::new(&ctx.env, "disapproved")
    );
    assert!(!ctx.router_client.is_approved(&Module::Notify));
    assert!(ctx.router_client.is_approved(&Module::Payment));

    //approval is keyed by venue protocol
    ctx.router_client
        .disapprove(&ctx.owner, &RouterTestContext::soroswap());
    assert!(!ctx.router_client.is_approved(&RouterTestContext::soroswap()));
    assert!(ctx.router_client.is_approved(&RouterTestContext::aqua()));
}

#[test]
fn non_owner_cannot_manage_modules() {
    let ctx = setup();
    let stranger = Address::generate(&ctx.env);

    let result = ctx.router_client.try_approve(&stranger, &Module::Payment);
    assert_eq!(result.err(), router_error(RouterError::Unauthorized));

    let result = ctx.router_client.try_disapprove(&stranger, &Module::Payment);
    assert_eq!(result.err(), router_error(RouterError::Unauthorized));
    assert!(ctx.router_client.is_approved(&Module::Payment));
}

#[test]
fn unknown_module_is_not_approved() {
    let env = Env::default();
    env.mock_all_auths();
    let router = env.register(StellarRouter, ());
    let client = StellarRouterClient::new(&env, &router);
    let owner = Address::generate(&env);
    client.init(
        &owner,
        &Address::generate(&env),
        &Address::generate(&env),
    );
    assert!(!client.is_approved(&Module::ContractCall));
    assert_eq!(client.owner(), owner);
}

#[test]
#[should_panic(expected = "32702")]
fn init_twice_fails() {
    let ctx = setup();
    ctx.router_client
        .init(&ctx.owner, &ctx.native, &ctx.wrapped);
}

#[test]
#[should_panic(expected = "32701")]
fn approve_before_init_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let router = env.register(StellarRouter, ());
    let client = StellarRouterClient::new(&env, &router);
    client.approve(&Address::generate(&env), &Module::Payment);
}

#[test]
fn ownership_transfer_requires_acceptance() {
    let ctx = setup();
    let new_owner = Address::generate(&ctx.env);

    ctx.router_client.propose_owner(&ctx.owner, &new_owner);
    //still the old owner until accepted
    assert_eq!(ctx.router_client.owner(), ctx.owner);
    let result = ctx.router_client.try_approve(&new_owner, &Module::Payment);
    assert_eq!(result.err(), router_error(RouterError::Unauthorized));

    ctx.router_client.accept_owner(&new_owner);
    assert_eq!(ctx.router_client.owner(), new_owner);

    ctx.router_client.disapprove(&new_owner, &Module::Payment);
    assert!(!ctx.router_client.is_approved(&Module::Payment));
    let result = ctx.router_client.try_approve(&ctx.owner, &Module::Payment);
    assert_eq!(result.err(), router_error(RouterError::Unauthorized));

    //pending proposal is consumed
    let result = ctx.router_client.try_accept_owner(&new_owner);
    assert_eq!(result.err(), router_error(RouterError::NoPendingOwner));
}

#[test]
fn ownership_transfer_rejects_other_accounts() {
    let ctx = setup();
    let new_owner = Address::generate(&ctx.env);
    let stranger = Address::generate(&ctx.env);

    let result = ctx.router_client.try_propose_owner(&stranger, &stranger);
    assert_eq!(result.err(), router_error(RouterError::Unauthorized));

    let result = ctx.router_client.try_accept_owner(&new_owner);
    assert_eq!(result.err(), router_error(RouterError::NoPendingOwner));

    ctx.router_client.propose_owner(&ctx.owner, &new_owner);
    let result = ctx.router_client.try_accept_owner(&stranger);
    assert_eq!(result.err(), router_error(RouterError::Unauthorized));
    assert_eq!(ctx.router_client.owner(), ctx.owner);
}
