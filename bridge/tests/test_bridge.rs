//! Bridge integration tests.
//!
//! Covers:
//! - role administration and the governed allow-list
//! - deposits that wrap a listed token
//! - guardian-signed redemptions: payout, replay, tampering, nonce handling
//! - a deposit on one bridge redeemed on another

use alloy::primitives::B256;
use alloy::signers::{local::PrivateKeySigner, SignerSync};
use cosmwasm_std::{Addr, Api, Binary, CanonicalAddr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin};
use cw_multi_test::{
    MockAddressGenerator, WasmKeeper,
    App, AppBuilder, AppResponse, BankKeeper, Contract, ContractWrapper, Executor, MockApiBech32,
};

use common::{keccak256, CompactSignature};
use file_bridge::msg::{
    ExecuteMsg, HasRoleResponse, InstantiateMsg, NonceResponse, QueryMsg, RedeemHashResponse,
    WTokenResponse,
};
use file_bridge::state::{governance_role, DEFAULT_ADMIN_ROLE};

// ============================================================================
// Test Setup
// ============================================================================

const SOURCE_CHAIN_ID: u64 = 31337;
const DEST_CHAIN_ID: u64 = 56;
const GUARDIAN_KEY: &str = "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a";
const OTHER_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

type TestApp = App<BankKeeper, MockApiBech32>;

fn contract_token() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        file_token::contract::execute,
        file_token::contract::instantiate,
        file_token::contract::query,
    ))
}

fn contract_wrapped() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        wrapped_token::contract::execute,
        wrapped_token::contract::instantiate,
        wrapped_token::contract::query,
    ))
}

fn contract_bridge() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            file_bridge::contract::execute,
            file_bridge::contract::instantiate,
            file_bridge::contract::query,
        )
        .with_migrate(file_bridge::contract::migrate),
    )
}

struct TestEnv {
    app: TestApp,
    admin: Addr,
    governor: Addr,
    user: Addr,
    bridge: Addr,
    token: Addr,
    w_token: Addr,
    guardian_key: PrivateKeySigner,
    /// Account controlled by `guardian_key`
    guardian: Addr,
    bridge_code: u64,
}

fn signer_account(app: &TestApp, signer: &PrivateKeySigner) -> Addr {
    app.api()
        .addr_humanize(&CanonicalAddr::from(signer.address().as_slice()))
        .unwrap()
}

fn instantiate_bridge(app: &mut TestApp, code_id: u64, admin: &Addr, governors: &[&Addr], chain_id: u64) -> Addr {
    app.instantiate_contract(
        code_id,
        admin.clone(),
        &InstantiateMsg {
            admin: admin.to_string(),
            governors: governors.iter().map(|g| g.to_string()).collect(),
            chain_id,
        },
        &[],
        "bridge",
        Some(admin.to_string()),
    )
    .unwrap()
}

fn setup() -> TestEnv {
    let mut app = AppBuilder::default()
        .with_api(MockApiBech32::new("file"))
        .with_wasm(WasmKeeper::new().with_address_generator(MockAddressGenerator))
        .build(|_, _, _| {});
    let admin = app.api().addr_make("admin");
    let governor = app.api().addr_make("governor");
    let user = app.api().addr_make("user");
    let guardian_key: PrivateKeySigner = GUARDIAN_KEY.parse().unwrap();
    let guardian = signer_account(&app, &guardian_key);

    let token_code = app.store_code(contract_token());
    let wrapped_code = app.store_code(contract_wrapped());
    let bridge_code = app.store_code(contract_bridge());

    let token = app
        .instantiate_contract(
            token_code,
            admin.clone(),
            &file_token::msg::InstantiateMsg {
                name: "FILE DAI TOKEN".to_string(),
                symbol: "FDAI".to_string(),
                minter: None,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::new(1_000_000),
                }],
                chain_id: SOURCE_CHAIN_ID,
            },
            &[],
            "token",
            None,
        )
        .unwrap();
    let w_token = app
        .instantiate_contract(
            wrapped_code,
            admin.clone(),
            &common::wrapped::InstantiateMsg {
                name: "Wrapped FDAI".to_string(),
                symbol: "WFDAI".to_string(),
                underlying: token.to_string(),
                chain_id: SOURCE_CHAIN_ID,
            },
            &[],
            "wrapped",
            None,
        )
        .unwrap();

    let bridge = instantiate_bridge(&mut app, bridge_code, &admin, &[&governor], SOURCE_CHAIN_ID);

    TestEnv {
        app,
        admin,
        governor,
        user,
        bridge,
        token,
        w_token,
        guardian_key,
        guardian,
        bridge_code,
    }
}

fn role(id: [u8; 32]) -> Binary {
    Binary::from(id.to_vec())
}

fn has_role(env: &TestEnv, role_id: [u8; 32], account: &Addr) -> bool {
    let res: HasRoleResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::HasRole {
                role: role(role_id),
                account: account.to_string(),
            },
        )
        .unwrap();
    res.has_role
}

fn w_token_of(env: &TestEnv, token: &Addr) -> Option<Addr> {
    let res: WTokenResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::WToken {
                token: token.to_string(),
            },
        )
        .unwrap();
    res.w_token
}

fn nonce_of(env: &TestEnv, bridge: &Addr, account: &Addr) -> u64 {
    let res: NonceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            bridge,
            &QueryMsg::Nonce {
                account: account.to_string(),
            },
        )
        .unwrap();
    res.nonce
}

fn balance(env: &TestEnv, token: &Addr, account: &Addr) -> Uint128 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            token,
            &file_token::msg::QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn execute(env: &mut TestEnv, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
    env.app
        .execute_contract(sender.clone(), env.bridge.clone(), msg, &[])
}

fn assert_err(res: anyhow::Result<AppResponse>, expected: &str) {
    let message = res.unwrap_err().root_cause().to_string();
    assert!(
        message.contains(expected),
        "expected error containing {:?}, got {:?}",
        expected,
        message
    );
}

fn list_token(env: &mut TestEnv) {
    let governor = env.governor.clone();
    let msg = ExecuteMsg::AddWToken {
        token: env.token.to_string(),
        w_token: env.w_token.to_string(),
    };
    execute(env, &governor, &msg).unwrap();
}

fn deposit(env: &mut TestEnv, amount: u128) -> anyhow::Result<AppResponse> {
    let user = env.user.clone();
    env.app
        .execute_contract(
            user.clone(),
            env.token.clone(),
            &file_token::msg::ExecuteMsg::Approve {
                spender: env.bridge.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
        .unwrap();
    let msg = ExecuteMsg::DepositToken {
        to: user.to_string(),
        destination_chain_id: DEST_CHAIN_ID,
        token: env.token.to_string(),
        amount: Uint128::new(amount),
    };
    execute(env, &user, &msg)
}

/// Redemption fields a guardian signs
struct Redeem {
    to: Addr,
    chain_id: u64,
    token: Addr,
    amount: u128,
}

/// Sign through the bridge's own digest query, the way a guardian service would
fn sign_redeem(
    env: &TestEnv,
    bridge: &Addr,
    key: &PrivateKeySigner,
    redeem: &Redeem,
    nonce: u64,
) -> (Binary, Binary) {
    let res: RedeemHashResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            bridge,
            &QueryMsg::RedeemHash {
                to: redeem.to.to_string(),
                chain_id: redeem.chain_id,
                token: redeem.token.to_string(),
                amount: Uint128::new(redeem.amount),
                nonce,
            },
        )
        .unwrap();
    let sig = key
        .sign_hash_sync(&B256::from_slice(res.hash.as_slice()))
        .unwrap();
    let compact = CompactSignature::from_parts(
        sig.r().to_be_bytes::<32>(),
        sig.s().to_be_bytes::<32>(),
        sig.v(),
    );
    (
        Binary::from(compact.r.to_vec()),
        Binary::from(compact.vs.to_vec()),
    )
}

fn redeem_msg(redeem: &Redeem, guardian: &Addr, r: Binary, vs: Binary) -> ExecuteMsg {
    ExecuteMsg::RedeemToken {
        to: redeem.to.to_string(),
        chain_id: redeem.chain_id,
        token: redeem.token.to_string(),
        amount: Uint128::new(redeem.amount),
        guardian: guardian.to_string(),
        r,
        vs,
    }
}

/// A bridge on the same chain holding 1000 wrapped tokens from a deposit
fn funded_bridge() -> TestEnv {
    let mut env = setup();
    list_token(&mut env);
    deposit(&mut env, 1000).unwrap();
    env
}

fn attribute(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm")
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap()
}

// ============================================================================
// Roles
// ============================================================================

#[test]
fn test_instantiate_grants_roles() {
    let env = setup();
    assert!(has_role(&env, DEFAULT_ADMIN_ROLE, &env.admin));
    assert!(has_role(&env, governance_role(), &env.governor));
    assert!(!has_role(&env, governance_role(), &env.admin));
    assert!(!has_role(&env, DEFAULT_ADMIN_ROLE, &env.governor));
}

#[test]
fn test_role_management() {
    let mut env = setup();
    let (admin, governor, user) = (env.admin.clone(), env.governor.clone(), env.user.clone());

    // only the role admin grants and revokes
    let grant = ExecuteMsg::GrantRole {
        role: role(governance_role()),
        account: user.to_string(),
    };
    assert_err(execute(&mut env, &governor, &grant), "is missing role");
    let res = execute(&mut env, &admin, &grant).unwrap();
    assert_eq!(attribute(&res, "action"), "role_granted");
    assert!(has_role(&env, governance_role(), &user));

    let revoke = ExecuteMsg::RevokeRole {
        role: role(governance_role()),
        account: user.to_string(),
    };
    assert_err(execute(&mut env, &user, &revoke), "is missing role");
    execute(&mut env, &admin, &revoke).unwrap();
    assert!(!has_role(&env, governance_role(), &user));

    // accounts renounce only for themselves
    let renounce = ExecuteMsg::RenounceRole {
        role: role(governance_role()),
        account: governor.to_string(),
    };
    assert_err(execute(&mut env, &admin, &renounce), "Unauthorized");
    execute(&mut env, &governor, &renounce).unwrap();
    assert!(!has_role(&env, governance_role(), &governor));
}

#[test]
fn test_repeated_grant_changes_nothing() {
    let mut env = setup();
    let (admin, governor) = (env.admin.clone(), env.governor.clone());
    let grant = ExecuteMsg::GrantRole {
        role: role(governance_role()),
        account: governor.to_string(),
    };
    let res = execute(&mut env, &admin, &grant).unwrap();
    let wasm = res.events.iter().find(|e| e.ty == "wasm").unwrap();
    assert!(!wasm.attributes.iter().any(|a| a.key == "role"));
    assert!(has_role(&env, governance_role(), &governor));
}

#[test]
fn test_admin_administers_itself() {
    let mut env = setup();
    let (admin, user) = (env.admin.clone(), env.user.clone());
    let grant = ExecuteMsg::GrantRole {
        role: role(DEFAULT_ADMIN_ROLE),
        account: user.to_string(),
    };
    execute(&mut env, &admin, &grant).unwrap();

    let revoke = ExecuteMsg::RevokeRole {
        role: role(DEFAULT_ADMIN_ROLE),
        account: admin.to_string(),
    };
    execute(&mut env, &user, &revoke).unwrap();
    assert!(!has_role(&env, DEFAULT_ADMIN_ROLE, &admin));
}

#[test]
fn test_role_id_must_be_32_bytes() {
    let mut env = setup();
    let admin = env.admin.clone();
    let msg = ExecuteMsg::GrantRole {
        role: Binary::from(vec![1u8; 31]),
        account: admin.to_string(),
    };
    assert_err(execute(&mut env, &admin, &msg), "Invalid role");
}

// ============================================================================
// Allow-list
// ============================================================================

#[test]
fn test_allow_list_requires_governance() {
    let mut env = setup();
    let admin = env.admin.clone();
    let msg = ExecuteMsg::AddWToken {
        token: env.token.to_string(),
        w_token: env.w_token.to_string(),
    };
    assert_err(execute(&mut env, &admin, &msg), "is missing role");
    assert_eq!(w_token_of(&env, &env.token), None);
}

#[test]
fn test_allow_list_add_change_remove() {
    let mut env = setup();
    let governor = env.governor.clone();
    let token = env.token.clone();
    let replacement = env.app.api().addr_make("replacement");

    list_token(&mut env);
    assert_eq!(w_token_of(&env, &token), Some(env.w_token.clone()));

    let add_again = ExecuteMsg::AddWToken {
        token: token.to_string(),
        w_token: replacement.to_string(),
    };
    assert_err(execute(&mut env, &governor, &add_again), "TOKEN_EXIST");

    let change = ExecuteMsg::ChangeWToken {
        token: token.to_string(),
        new_w_token: replacement.to_string(),
    };
    let res = execute(&mut env, &governor, &change).unwrap();
    assert_eq!(attribute(&res, "old_w_token"), env.w_token.to_string());
    let removed = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-token_removed_from_list")
        .unwrap();
    assert!(removed
        .attributes
        .iter()
        .any(|a| a.key == "w_token" && a.value == env.w_token.to_string()));
    assert!(res
        .events
        .iter()
        .any(|e| e.ty == "wasm-token_added_to_list"));
    assert_eq!(w_token_of(&env, &token), Some(replacement));

    let remove = ExecuteMsg::RemoveWToken {
        token: token.to_string(),
    };
    execute(&mut env, &governor, &remove).unwrap();
    assert_eq!(w_token_of(&env, &token), None);

    assert_err(execute(&mut env, &governor, &remove), "TOKEN_DOESNT_EXIST");
    assert_err(execute(&mut env, &governor, &change), "TOKEN_DOESNT_EXIST");
}

// ============================================================================
// Deposits
// ============================================================================

#[test]
fn test_deposit_wraps_and_announces() {
    let mut env = setup();
    list_token(&mut env);

    let res = deposit(&mut env, 1000).unwrap();
    assert_eq!(attribute(&res, "action"), "token_deposit");
    assert_eq!(attribute(&res, "to"), env.user.to_string());
    assert_eq!(
        attribute(&res, "destination_chain_id"),
        DEST_CHAIN_ID.to_string()
    );
    assert_eq!(attribute(&res, "amount"), "1000");

    assert_eq!(balance(&env, &env.token, &env.user), Uint128::new(999_000));
    assert_eq!(balance(&env, &env.token, &env.w_token), Uint128::new(1000));
    assert_eq!(balance(&env, &env.w_token, &env.bridge), Uint128::new(1000));
    assert_eq!(balance(&env, &env.token, &env.bridge), Uint128::zero());
}

#[test]
fn test_deposit_rejects_unlisted_and_zero() {
    let mut env = setup();
    assert_err(deposit(&mut env, 1000), "Token not supported");

    list_token(&mut env);
    assert_err(deposit(&mut env, 0), "Invalid amount");
}

#[test]
fn test_deposit_without_allowance_fails() {
    let mut env = setup();
    list_token(&mut env);
    let user = env.user.clone();
    let msg = ExecuteMsg::DepositToken {
        to: user.to_string(),
        destination_chain_id: DEST_CHAIN_ID,
        token: env.token.to_string(),
        amount: Uint128::new(1000),
    };
    assert_err(execute(&mut env, &user, &msg), "insufficient allowance");
    assert_eq!(balance(&env, &env.token, &env.user), Uint128::new(1_000_000));
}

// ============================================================================
// Redemptions
// ============================================================================

#[test]
fn test_redeem_pays_out_and_consumes_nonce() {
    let mut env = funded_bridge();
    let (bridge, user, guardian) = (env.bridge.clone(), env.user.clone(), env.guardian.clone());
    let redeem = Redeem {
        to: user.clone(),
        chain_id: DEST_CHAIN_ID,
        token: env.w_token.clone(),
        amount: 400,
    };

    let (r, vs) = sign_redeem(&env, &bridge, &env.guardian_key, &redeem, 0);
    let msg = redeem_msg(&redeem, &guardian, r, vs);
    let relayer = env.app.api().addr_make("relayer");
    let res = execute(&mut env, &relayer, &msg).unwrap();
    assert_eq!(attribute(&res, "nonce"), "0");

    assert_eq!(balance(&env, &env.w_token, &user), Uint128::new(400));
    assert_eq!(balance(&env, &env.w_token, &bridge), Uint128::new(600));
    assert_eq!(nonce_of(&env, &bridge, &user), 1);

    // the same signature is bound to nonce 0
    assert_err(execute(&mut env, &relayer, &msg), "Invalid signature");
    assert_eq!(balance(&env, &env.w_token, &user), Uint128::new(400));

    let (r, vs) = sign_redeem(&env, &bridge, &env.guardian_key, &redeem, 1);
    execute(&mut env, &relayer, &redeem_msg(&redeem, &guardian, r, vs)).unwrap();
    assert_eq!(nonce_of(&env, &bridge, &user), 2);
}

#[test]
fn test_redeem_rejects_tampering() {
    let mut env = funded_bridge();
    let (bridge, user, guardian) = (env.bridge.clone(), env.user.clone(), env.guardian.clone());
    let signed = Redeem {
        to: user.clone(),
        chain_id: DEST_CHAIN_ID,
        token: env.w_token.clone(),
        amount: 400,
    };
    let (r, vs) = sign_redeem(&env, &bridge, &env.guardian_key, &signed, 0);
    let other = env.app.api().addr_make("other");

    let tampered = [
        Redeem {
            amount: 401,
            ..clone_redeem(&signed)
        },
        Redeem {
            to: other.clone(),
            ..clone_redeem(&signed)
        },
        Redeem {
            chain_id: SOURCE_CHAIN_ID,
            ..clone_redeem(&signed)
        },
        Redeem {
            token: env.token.clone(),
            ..clone_redeem(&signed)
        },
    ];
    for redeem in &tampered {
        let msg = redeem_msg(redeem, &guardian, r.clone(), vs.clone());
        assert_err(execute(&mut env, &user, &msg), "Invalid signature");
    }

    // signed by a key that does not control the named guardian
    let other_key: PrivateKeySigner = OTHER_KEY.parse().unwrap();
    let (r2, vs2) = sign_redeem(&env, &bridge, &other_key, &signed, 0);
    let msg = redeem_msg(&signed, &guardian, r2, vs2);
    assert_err(execute(&mut env, &user, &msg), "Invalid signature");

    // a signature of the right key naming someone else as guardian
    let msg = redeem_msg(&signed, &other, r.clone(), vs.clone());
    assert_err(execute(&mut env, &user, &msg), "Invalid signature");

    // malformed signature bytes
    let msg = redeem_msg(&signed, &guardian, Binary::from(vec![1u8; 31]), vs.clone());
    assert_err(execute(&mut env, &user, &msg), "Invalid signature");

    assert_eq!(nonce_of(&env, &bridge, &user), 0);
    let msg = redeem_msg(&signed, &guardian, r, vs);
    execute(&mut env, &user, &msg).unwrap();
}

fn clone_redeem(redeem: &Redeem) -> Redeem {
    Redeem {
        to: redeem.to.clone(),
        chain_id: redeem.chain_id,
        token: redeem.token.clone(),
        amount: redeem.amount,
    }
}

#[test]
fn test_redeem_failure_keeps_nonce() {
    let mut env = funded_bridge();
    let (bridge, user, guardian) = (env.bridge.clone(), env.user.clone(), env.guardian.clone());
    // more than the bridge holds
    let redeem = Redeem {
        to: user.clone(),
        chain_id: DEST_CHAIN_ID,
        token: env.w_token.clone(),
        amount: 1001,
    };
    let (r, vs) = sign_redeem(&env, &bridge, &env.guardian_key, &redeem, 0);
    let res = execute(&mut env, &user, &redeem_msg(&redeem, &guardian, r, vs));
    assert_err(res, "transfer amount exceeds balance");
    assert_eq!(nonce_of(&env, &bridge, &user), 0);
}

#[test]
fn test_cross_chain_round_trip() {
    let mut env = setup();
    list_token(&mut env);

    // the destination bridge holds wrapped liquidity of its own
    let admin = env.admin.clone();
    let dest = instantiate_bridge(&mut env.app, env.bridge_code, &admin, &[], DEST_CHAIN_ID);
    let user = env.user.clone();
    env.app
        .execute_contract(
            user.clone(),
            env.token.clone(),
            &file_token::msg::ExecuteMsg::Approve {
                spender: env.w_token.to_string(),
                amount: Uint128::new(5000),
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            user.clone(),
            env.w_token.clone(),
            &common::wrapped::ExecuteMsg::Deposit {
                amount: Uint128::new(5000),
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            user.clone(),
            env.w_token.clone(),
            &common::wrapped::ExecuteMsg::Transfer {
                recipient: dest.to_string(),
                amount: Uint128::new(5000),
            },
            &[],
        )
        .unwrap();

    // source side: the relayer reads the deposit attributes
    let res = deposit(&mut env, 700).unwrap();
    let to = env.app.api().addr_validate(&attribute(&res, "to")).unwrap();
    let amount: u128 = attribute(&res, "amount").parse().unwrap();
    let destination: u64 = attribute(&res, "destination_chain_id").parse().unwrap();
    assert_eq!(destination, DEST_CHAIN_ID);

    // destination side: the guardian signs against the destination bridge
    let redeem = Redeem {
        to: to.clone(),
        chain_id: SOURCE_CHAIN_ID,
        token: env.w_token.clone(),
        amount,
    };
    let (r, vs) = sign_redeem(&env, &dest, &env.guardian_key, &redeem, 0);
    let guardian = env.guardian.clone();
    env.app
        .execute_contract(
            user.clone(),
            dest.clone(),
            &redeem_msg(&redeem, &guardian, r.clone(), vs.clone()),
            &[],
        )
        .unwrap();
    assert_eq!(balance(&env, &env.w_token, &to), Uint128::new(700));
    assert_eq!(balance(&env, &env.w_token, &dest), Uint128::new(4300));

    // the destination signature means nothing to the source bridge
    let res = env.app.execute_contract(
        user,
        env.bridge.clone(),
        &redeem_msg(&redeem, &guardian, r, vs),
        &[],
    );
    assert_err(res, "Invalid signature");
}

#[test]
fn test_role_ids_are_hashes() {
    assert_eq!(DEFAULT_ADMIN_ROLE, [0u8; 32]);
    assert_eq!(governance_role(), keccak256(b"GOVERNANCE_ROLE"));
}

#[test]
fn test_migrate_keeps_state() {
    let mut env = funded_bridge();
    let admin = env.admin.clone();
    let bridge = env.bridge.clone();
    let code_id = env.bridge_code;
    env.app
        .migrate_contract(admin, bridge, &file_bridge::msg::MigrateMsg {}, code_id)
        .unwrap();
    assert_eq!(w_token_of(&env, &env.token), Some(env.w_token.clone()));
    assert!(has_role(&env, governance_role(), &env.governor));
}
