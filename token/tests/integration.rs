//! Integration tests for the token ledger contract using cw-multi-test.

use cosmwasm_std::Addr;
use cw_multi_test::{App, ContractWrapper, Executor};

use token::msg::{
    AdminResponse, BridgeOperatorResponse, ExecuteMsg, InstantiateMsg, IsLockedResponse,
    MinterResponse, OwnerOfResponse, QueryMsg, TokensResponse,
};

fn contract_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        token::contract::execute,
        token::contract::instantiate,
        token::contract::query,
    );
    Box::new(contract)
}

fn setup() -> (App, Addr, Addr) {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");

    let code_id = app.store_code(contract_token());
    let ledger = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {},
            &[],
            "hermes-token",
            None,
        )
        .unwrap();

    (app, ledger, admin)
}

#[test]
fn test_instantiate_sets_deployer_as_admin() {
    let (app, ledger, admin) = setup();

    let resp: AdminResponse = app
        .wrap()
        .query_wasm_smart(&ledger, &QueryMsg::Admin {})
        .unwrap();
    assert_eq!(resp.admin, admin.to_string());

    // both capability slots start unset
    let minter: MinterResponse = app
        .wrap()
        .query_wasm_smart(&ledger, &QueryMsg::Minter {})
        .unwrap();
    assert_eq!(minter.minter, None);

    let operator: BridgeOperatorResponse = app
        .wrap()
        .query_wasm_smart(&ledger, &QueryMsg::BridgeOperator {})
        .unwrap();
    assert_eq!(operator.bridge_operator, None);
}

#[test]
fn test_mint_requires_minter_role() {
    let (mut app, ledger, admin) = setup();
    let minter = Addr::unchecked("terra1minter");
    let user = Addr::unchecked("terra1user");

    // no minter configured yet
    let res = app.execute_contract(
        minter.clone(),
        ledger.clone(),
        &ExecuteMsg::Mint {
            to: user.to_string(),
            token_id: 1234,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Minter role not configured"),
        "Expected unset-minter error, got: {}",
        err_str
    );

    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetMinterRole {
            account: minter.to_string(),
        },
        &[],
    )
    .unwrap();

    // non-minter still rejected
    let res = app.execute_contract(
        user.clone(),
        ledger.clone(),
        &ExecuteMsg::Mint {
            to: user.to_string(),
            token_id: 1234,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("only minter"),
        "Expected minter-only error, got: {}",
        err_str
    );

    // minter succeeds
    app.execute_contract(
        minter.clone(),
        ledger.clone(),
        &ExecuteMsg::Mint {
            to: user.to_string(),
            token_id: 1234,
        },
        &[],
    )
    .unwrap();

    let resp: OwnerOfResponse = app
        .wrap()
        .query_wasm_smart(&ledger, &QueryMsg::OwnerOf { token_id: 1234 })
        .unwrap();
    assert_eq!(resp.owner, user.to_string());
}

#[test]
fn test_mint_duplicate_id_rejected() {
    let (mut app, ledger, admin) = setup();
    let minter = Addr::unchecked("terra1minter");
    let user = Addr::unchecked("terra1user");

    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetMinterRole {
            account: minter.to_string(),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        minter.clone(),
        ledger.clone(),
        &ExecuteMsg::Mint {
            to: user.to_string(),
            token_id: 7,
        },
        &[],
    )
    .unwrap();

    let res = app.execute_contract(
        minter.clone(),
        ledger.clone(),
        &ExecuteMsg::Mint {
            to: minter.to_string(),
            token_id: 7,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Token already exists"),
        "Expected duplicate-id error, got: {}",
        err_str
    );

    // original owner unchanged
    let resp: OwnerOfResponse = app
        .wrap()
        .query_wasm_smart(&ledger, &QueryMsg::OwnerOf { token_id: 7 })
        .unwrap();
    assert_eq!(resp.owner, user.to_string());
}

#[test]
fn test_transfer_owner_only() {
    let (mut app, ledger, admin) = setup();
    let minter = Addr::unchecked("terra1minter");
    let user = Addr::unchecked("terra1user");
    let other = Addr::unchecked("terra1other");

    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetMinterRole {
            account: minter.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        minter.clone(),
        ledger.clone(),
        &ExecuteMsg::Mint {
            to: user.to_string(),
            token_id: 1,
        },
        &[],
    )
    .unwrap();

    // non-owner cannot transfer
    let res = app.execute_contract(
        other.clone(),
        ledger.clone(),
        &ExecuteMsg::Transfer {
            to: other.to_string(),
            token_id: 1,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("no rights to this token"),
        "Expected ownership error, got: {}",
        err_str
    );

    // owner can
    app.execute_contract(
        user.clone(),
        ledger.clone(),
        &ExecuteMsg::Transfer {
            to: other.to_string(),
            token_id: 1,
        },
        &[],
    )
    .unwrap();

    let resp: OwnerOfResponse = app
        .wrap()
        .query_wasm_smart(&ledger, &QueryMsg::OwnerOf { token_id: 1 })
        .unwrap();
    assert_eq!(resp.owner, other.to_string());
}

#[test]
fn test_lock_requires_bridge_operator() {
    let (mut app, ledger, admin) = setup();
    let minter = Addr::unchecked("terra1minter");
    let operator = Addr::unchecked("terra1bridge");
    let user = Addr::unchecked("terra1user");

    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetMinterRole {
            account: minter.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        minter.clone(),
        ledger.clone(),
        &ExecuteMsg::Mint {
            to: user.to_string(),
            token_id: 9,
        },
        &[],
    )
    .unwrap();

    // no operator configured yet
    let res = app.execute_contract(
        operator.clone(),
        ledger.clone(),
        &ExecuteMsg::Lock { token_id: 9 },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Bridge operator role not configured"),
        "Expected unset-operator error, got: {}",
        err_str
    );

    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetBridgeOperatorRole {
            account: operator.to_string(),
        },
        &[],
    )
    .unwrap();

    // the owner itself holds no lock privilege
    let res = app.execute_contract(
        user.clone(),
        ledger.clone(),
        &ExecuteMsg::Lock { token_id: 9 },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("only bridge operator"),
        "Expected operator-only error, got: {}",
        err_str
    );

    app.execute_contract(
        operator.clone(),
        ledger.clone(),
        &ExecuteMsg::Lock { token_id: 9 },
        &[],
    )
    .unwrap();

    let resp: IsLockedResponse = app
        .wrap()
        .query_wasm_smart(&ledger, &QueryMsg::IsLocked { token_id: 9 })
        .unwrap();
    assert!(resp.locked);

    // locking twice is an error
    let res = app.execute_contract(
        operator.clone(),
        ledger.clone(),
        &ExecuteMsg::Lock { token_id: 9 },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Token is locked"),
        "Expected already-locked error, got: {}",
        err_str
    );
}

#[test]
fn test_locked_token_cannot_transfer() {
    let (mut app, ledger, admin) = setup();
    let minter = Addr::unchecked("terra1minter");
    let operator = Addr::unchecked("terra1bridge");
    let user = Addr::unchecked("terra1user");
    let other = Addr::unchecked("terra1other");

    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetMinterRole {
            account: minter.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetBridgeOperatorRole {
            account: operator.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        minter.clone(),
        ledger.clone(),
        &ExecuteMsg::Mint {
            to: user.to_string(),
            token_id: 3,
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        operator.clone(),
        ledger.clone(),
        &ExecuteMsg::Lock { token_id: 3 },
        &[],
    )
    .unwrap();

    let res = app.execute_contract(
        user.clone(),
        ledger.clone(),
        &ExecuteMsg::Transfer {
            to: other.to_string(),
            token_id: 3,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Token is locked"),
        "Expected locked error, got: {}",
        err_str
    );
}

#[test]
fn test_role_setters_admin_only_and_overwrite() {
    let (mut app, ledger, admin) = setup();
    let minter1 = Addr::unchecked("terra1minter");
    let minter2 = Addr::unchecked("terra1minter2");
    let user = Addr::unchecked("terra1user");

    let res = app.execute_contract(
        user.clone(),
        ledger.clone(),
        &ExecuteMsg::SetMinterRole {
            account: user.to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("only admin"),
        "Expected admin-only error, got: {}",
        err_str
    );

    // single-holder slot: second assignment replaces the first
    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetMinterRole {
            account: minter1.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetMinterRole {
            account: minter2.to_string(),
        },
        &[],
    )
    .unwrap();

    let resp: MinterResponse = app
        .wrap()
        .query_wasm_smart(&ledger, &QueryMsg::Minter {})
        .unwrap();
    assert_eq!(resp.minter, Some(minter2.to_string()));

    // the replaced holder can no longer mint
    let res = app.execute_contract(
        minter1.clone(),
        ledger.clone(),
        &ExecuteMsg::Mint {
            to: user.to_string(),
            token_id: 1,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("only minter"),
        "Expected minter-only error, got: {}",
        err_str
    );
}

#[test]
fn test_tokens_enumeration() {
    let (mut app, ledger, admin) = setup();
    let minter = Addr::unchecked("terra1minter");
    let user = Addr::unchecked("terra1user");

    app.execute_contract(
        admin.clone(),
        ledger.clone(),
        &ExecuteMsg::SetMinterRole {
            account: minter.to_string(),
        },
        &[],
    )
    .unwrap();

    for id in [5u64, 10, 15] {
        app.execute_contract(
            minter.clone(),
            ledger.clone(),
            &ExecuteMsg::Mint {
                to: user.to_string(),
                token_id: id,
            },
            &[],
        )
        .unwrap();
    }

    let resp: TokensResponse = app
        .wrap()
        .query_wasm_smart(
            &ledger,
            &QueryMsg::Tokens {
                start_after: None,
                limit: Some(2),
            },
        )
        .unwrap();
    assert_eq!(resp.tokens.len(), 2);
    assert_eq!(resp.tokens[0].token_id, 5);
    assert_eq!(resp.tokens[1].token_id, 10);

    let resp: TokensResponse = app
        .wrap()
        .query_wasm_smart(
            &ledger,
            &QueryMsg::Tokens {
                start_after: Some(10),
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(resp.tokens.len(), 1);
    assert_eq!(resp.tokens[0].token_id, 15);
}
