use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env, MockApi, MockQuerier};
use cosmwasm_std::{from_json, Addr, MemoryStorage, OwnedDeps};

use warband_land_nft::contract::*;
use warband_land_nft::error::ContractError;
use warband_land_nft::msg::*;
use warband_land_nft::state::Config;

type Deps = OwnedDeps<MemoryStorage, MockApi, MockQuerier>;

fn a(deps: &Deps, name: &str) -> Addr {
    deps.api.addr_make(name)
}

/// The warrior contract plays the minter role in these tests.
fn setup() -> Deps {
    let mut deps = mock_dependencies();
    let owner = deps.api.addr_make("owner");
    let warrior = deps.api.addr_make("warrior_contract");

    let msg = InstantiateMsg {
        owner: owner.to_string(),
        minter: warrior.to_string(),
        name: "Warband Land".to_string(),
        symbol: "LAND".to_string(),
    };
    let info = message_info(&owner, &[]);
    instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
    deps
}

fn mint_for(deps: &mut Deps, recipient: &str) -> u64 {
    let warrior = deps.api.addr_make("warrior_contract");
    let to = deps.api.addr_make(recipient);
    let info = message_info(&warrior, &[]);
    let res = execute_mint_for(deps.as_mut(), mock_env(), info, to.to_string()).unwrap();
    res.attributes
        .iter()
        .find(|attr| attr.key == "token_id")
        .unwrap()
        .value
        .parse()
        .unwrap()
}

fn balance(deps: &Deps, name: &str) -> u64 {
    let res: BalanceResponse =
        from_json(query_balance_of(deps.as_ref(), a(deps, name).to_string()).unwrap()).unwrap();
    res.balance
}

fn num_tokens(deps: &Deps) -> u64 {
    let res: NumTokensResponse = from_json(query_num_tokens(deps.as_ref()).unwrap()).unwrap();
    res.count
}

// ─── Instantiation ──────────────────────────────────────────────────────────

#[test]
fn test_instantiate() {
    let deps = setup();
    let config: Config = from_json(query_config(deps.as_ref()).unwrap()).unwrap();
    assert_eq!(config.owner, a(&deps, "owner"));
    assert_eq!(config.minter, a(&deps, "warrior_contract"));
    assert_eq!(num_tokens(&deps), 0);
}

// ─── Privileged minting ─────────────────────────────────────────────────────

#[test]
fn test_mint_for_sequential_ids() {
    let mut deps = setup();
    assert_eq!(mint_for(&mut deps, "alice"), 0);
    assert_eq!(mint_for(&mut deps, "alice"), 1);
    assert_eq!(mint_for(&mut deps, "bob"), 2);

    assert_eq!(num_tokens(&deps), 3);
    assert_eq!(balance(&deps, "alice"), 2);
    assert_eq!(balance(&deps, "bob"), 1);
}

#[test]
fn test_mint_for_non_minter_fails() {
    let mut deps = setup();
    let stranger = a(&deps, "stranger");
    let info = message_info(&stranger, &[]);

    let err =
        execute_mint_for(deps.as_mut(), mock_env(), info, stranger.to_string()).unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "minter".to_string()
        }
    );
    assert_eq!(num_tokens(&deps), 0);
}

#[test]
fn test_owner_cannot_mint() {
    // Even the contract owner is not the minter — only the warrior claim path is
    let mut deps = setup();
    let owner = a(&deps, "owner");
    let info = message_info(&owner, &[]);

    let err = execute_mint_for(deps.as_mut(), mock_env(), info, owner.to_string()).unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "minter".to_string()
        }
    );
}

// ─── Transfers ──────────────────────────────────────────────────────────────

#[test]
fn test_transfer() {
    let mut deps = setup();
    let token_id = mint_for(&mut deps, "alice");

    let alice = a(&deps, "alice");
    let bob = a(&deps, "bob");
    let info = message_info(&alice, &[]);
    execute_transfer_nft(deps.as_mut(), mock_env(), info, bob.to_string(), token_id).unwrap();

    let owner: OwnerOfResponse =
        from_json(query_owner_of(deps.as_ref(), token_id).unwrap()).unwrap();
    assert_eq!(owner.owner, bob.to_string());
    assert_eq!(balance(&deps, "alice"), 0);
    assert_eq!(balance(&deps, "bob"), 1);
}

#[test]
fn test_transfer_unauthorized_fails() {
    let mut deps = setup();
    let token_id = mint_for(&mut deps, "alice");

    let bob = a(&deps, "bob");
    let info = message_info(&bob, &[]);
    let err = execute_transfer_nft(deps.as_mut(), mock_env(), info, bob.to_string(), token_id)
        .unwrap_err();

    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "owner or approved".to_string()
        }
    );
    // State unchanged after the failed call
    let owner: OwnerOfResponse =
        from_json(query_owner_of(deps.as_ref(), token_id).unwrap()).unwrap();
    assert_eq!(owner.owner, a(&deps, "alice").to_string());
}

#[test]
fn test_transfer_nonexistent_fails() {
    let mut deps = setup();
    let alice = a(&deps, "alice");
    let info = message_info(&alice, &[]);

    let err = execute_transfer_nft(deps.as_mut(), mock_env(), info, alice.to_string(), 42)
        .unwrap_err();
    assert_eq!(err, ContractError::TokenNotFound { token_id: 42 });
}

// ─── Approvals ──────────────────────────────────────────────────────────────

#[test]
fn test_approve_and_transfer() {
    let mut deps = setup();
    let token_id = mint_for(&mut deps, "alice");

    let alice = a(&deps, "alice");
    let bob = a(&deps, "bob");
    let info = message_info(&alice, &[]);
    execute_approve(deps.as_mut(), mock_env(), info, bob.to_string(), token_id).unwrap();

    let approval: ApprovalResponse =
        from_json(query_approval(deps.as_ref(), token_id, bob.to_string()).unwrap()).unwrap();
    assert!(approval.approved);

    // Approved spender moves the token; approval is cleared by the transfer
    let info = message_info(&bob, &[]);
    execute_transfer_nft(deps.as_mut(), mock_env(), info, bob.to_string(), token_id).unwrap();

    let approval: ApprovalResponse =
        from_json(query_approval(deps.as_ref(), token_id, bob.to_string()).unwrap()).unwrap();
    assert!(!approval.approved);
}

#[test]
fn test_approve_non_owner_fails() {
    let mut deps = setup();
    let token_id = mint_for(&mut deps, "alice");

    let bob = a(&deps, "bob");
    let info = message_info(&bob, &[]);
    let err = execute_approve(deps.as_mut(), mock_env(), info, bob.to_string(), token_id)
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "token owner".to_string()
        }
    );
}

#[test]
fn test_operator_lifecycle() {
    let mut deps = setup();
    let t0 = mint_for(&mut deps, "alice");
    let t1 = mint_for(&mut deps, "alice");

    let alice = a(&deps, "alice");
    let operator = a(&deps, "operator");
    let carol = a(&deps, "carol");

    let info = message_info(&alice, &[]);
    execute_approve_all(deps.as_mut(), mock_env(), info, operator.to_string()).unwrap();

    // Operator can move any of alice's parcels
    let info = message_info(&operator, &[]);
    execute_transfer_nft(deps.as_mut(), mock_env(), info, carol.to_string(), t0).unwrap();

    // After revocation the operator is locked out again
    let info = message_info(&alice, &[]);
    execute_revoke_all(deps.as_mut(), mock_env(), info, operator.to_string()).unwrap();

    let info = message_info(&operator, &[]);
    let err = execute_transfer_nft(deps.as_mut(), mock_env(), info, carol.to_string(), t1)
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "owner or approved".to_string()
        }
    );
}

// ─── Queries ────────────────────────────────────────────────────────────────

#[test]
fn test_owner_of_nonexistent_fails() {
    let deps = setup();
    query_owner_of(deps.as_ref(), 7).unwrap_err();
}

#[test]
fn test_tokens_by_owner() {
    let mut deps = setup();
    mint_for(&mut deps, "alice");
    mint_for(&mut deps, "bob");
    mint_for(&mut deps, "alice");

    let tokens: TokensResponse = from_json(
        query_tokens(deps.as_ref(), a(&deps, "alice").to_string(), None, None).unwrap(),
    )
    .unwrap();
    assert_eq!(tokens.tokens, vec![0, 2]);

    let all: TokensResponse =
        from_json(query_all_tokens(deps.as_ref(), None, None).unwrap()).unwrap();
    assert_eq!(all.tokens, vec![0, 1, 2]);
}

#[test]
fn test_balance_sum_equals_supply() {
    let mut deps = setup();
    mint_for(&mut deps, "alice");
    mint_for(&mut deps, "alice");
    mint_for(&mut deps, "bob");
    mint_for(&mut deps, "carol");

    let total = balance(&deps, "alice") + balance(&deps, "bob") + balance(&deps, "carol");
    assert_eq!(total, num_tokens(&deps));
}
