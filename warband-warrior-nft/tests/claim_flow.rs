//! End-to-end flow across all three contracts: paid stake-mint, scouting,
//! land claims, game-master wiring, and proceeds withdrawal.

use cosmwasm_std::{coins, Addr, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use warband_warrior_nft::error::ContractError;
use warband_warrior_nft::msg as warrior;
use warband_land_nft::msg as land;
use warband_resource_token::msg as resource;

const DENOM: &str = "uarc";
const PRICE: u128 = 80_000;
const LAND_CLAIM_TIME: u64 = 86_400;

struct TestEnv {
    app: App,
    owner: Addr,
    alice: Addr,
    bob: Addr,
    warrior_addr: Addr,
    land_addr: Addr,
    resource_addr: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::new(|router, api, storage| {
        for name in ["alice", "bob"] {
            let addr = api.addr_make(name);
            router
                .bank
                .init_balance(storage, &addr, coins(1_000_000, DENOM))
                .unwrap();
        }
    });

    let owner = app.api().addr_make("owner");
    let alice = app.api().addr_make("alice");
    let bob = app.api().addr_make("bob");

    let warrior_code = app.store_code(Box::new(ContractWrapper::new(
        warband_warrior_nft::contract::execute,
        warband_warrior_nft::contract::instantiate,
        warband_warrior_nft::contract::query,
    )));
    let land_code = app.store_code(Box::new(ContractWrapper::new(
        warband_land_nft::contract::execute,
        warband_land_nft::contract::instantiate,
        warband_land_nft::contract::query,
    )));
    let resource_code = app.store_code(Box::new(ContractWrapper::new(
        warband_resource_token::contract::execute,
        warband_resource_token::contract::instantiate,
        warband_resource_token::contract::query,
    )));

    let resource_addr = app
        .instantiate_contract(
            resource_code,
            owner.clone(),
            &resource::InstantiateMsg {
                owner: owner.to_string(),
                name: "Warband Resource".to_string(),
                symbol: "RESOURCE".to_string(),
                decimals: 6,
            },
            &[],
            "resource",
            None,
        )
        .unwrap();

    let warrior_addr = app
        .instantiate_contract(
            warrior_code,
            owner.clone(),
            &warrior::InstantiateMsg {
                owner: owner.to_string(),
                name: "Warband Warriors".to_string(),
                symbol: "WARRIOR".to_string(),
                denom: DENOM.to_string(),
                price: Uint128::new(PRICE),
                land_claim_time: LAND_CLAIM_TIME,
            },
            &[],
            "warrior",
            None,
        )
        .unwrap();

    // The land contract's minter is fixed to the warrior contract
    let land_addr = app
        .instantiate_contract(
            land_code,
            owner.clone(),
            &land::InstantiateMsg {
                owner: owner.to_string(),
                minter: warrior_addr.to_string(),
                name: "Warband Land".to_string(),
                symbol: "LAND".to_string(),
            },
            &[],
            "land",
            None,
        )
        .unwrap();

    // Wire the warrior contract and open the sale
    app.execute_contract(
        owner.clone(),
        warrior_addr.clone(),
        &warrior::ExecuteMsg::SetContractAddresses {
            land: land_addr.to_string(),
            resource: resource_addr.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        warrior_addr.clone(),
        &warrior::ExecuteMsg::FlipSaleState {},
        &[],
    )
    .unwrap();

    // Both NFT contracts become game masters on the resource token
    app.execute_contract(
        owner.clone(),
        resource_addr.clone(),
        &resource::ExecuteMsg::EditGameMasters {
            accounts: vec![warrior_addr.to_string(), land_addr.to_string()],
            flags: vec![true, true],
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        owner,
        alice,
        bob,
        warrior_addr,
        land_addr,
        resource_addr,
    }
}

fn warrior_balance(env: &TestEnv, addr: &Addr) -> u64 {
    let res: warrior::BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.warrior_addr,
            &warrior::QueryMsg::BalanceOf {
                owner: addr.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn land_balance(env: &TestEnv, addr: &Addr) -> u64 {
    let res: land::BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.land_addr,
            &land::QueryMsg::BalanceOf {
                owner: addr.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn land_supply(env: &TestEnv) -> u64 {
    let res: land::NumTokensResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.land_addr, &land::QueryMsg::NumTokens {})
        .unwrap();
    res.count
}

#[test]
fn test_full_claim_flow() {
    let mut env = setup();

    // Alice and Bob each stake-mint 3 warriors (ids 0-2 and 3-5)
    for account in [env.alice.clone(), env.bob.clone()] {
        env.app
            .execute_contract(
                account,
                env.warrior_addr.clone(),
                &warrior::ExecuteMsg::PublicMint {
                    quantity: 3,
                    stake: true,
                },
                &coins(3 * PRICE, DENOM),
            )
            .unwrap();
    }

    let supply: warrior::NumTokensResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.warrior_addr, &warrior::QueryMsg::NumTokens {})
        .unwrap();
    assert_eq!(supply.count, 6);
    assert_eq!(warrior_balance(&env, &env.alice), 0);
    assert_eq!(land_supply(&env), 0);

    let activity: Option<warrior::ActivityResponse> = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.warrior_addr,
            &warrior::QueryMsg::Activity { token_id: 3 },
        )
        .unwrap();
    assert_eq!(activity.unwrap().staker, env.bob.to_string());

    // Too early: the claim is rejected wholesale
    let err = env
        .app
        .execute_contract(
            env.alice.clone(),
            env.warrior_addr.clone(),
            &warrior::ExecuteMsg::ClaimLand {
                token_ids: vec![0, 1, 2],
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::ClaimTooEarly { token_id: 0 }
    );

    env.app
        .update_block(|b| b.time = b.time.plus_seconds(LAND_CLAIM_TIME));

    // Alice claims her three; the warriors come home and land is minted
    env.app
        .execute_contract(
            env.alice.clone(),
            env.warrior_addr.clone(),
            &warrior::ExecuteMsg::ClaimLand {
                token_ids: vec![0, 1, 2],
            },
            &[],
        )
        .unwrap();

    assert_eq!(warrior_balance(&env, &env.alice), 3);
    assert_eq!(land_balance(&env, &env.alice), 3);
    assert_eq!(land_supply(&env), 3);

    let activity: Option<warrior::ActivityResponse> = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.warrior_addr,
            &warrior::QueryMsg::Activity { token_id: 0 },
        )
        .unwrap();
    assert!(activity.is_none());

    // Bob cannot claim Alice's already-claimed ids, only his own
    let err = env
        .app
        .execute_contract(
            env.bob.clone(),
            env.warrior_addr.clone(),
            &warrior::ExecuteMsg::ClaimLand {
                token_ids: vec![0],
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NotStaked { token_id: 0 }
    );

    env.app
        .execute_contract(
            env.bob.clone(),
            env.warrior_addr.clone(),
            &warrior::ExecuteMsg::ClaimLand {
                token_ids: vec![3, 4, 5],
            },
            &[],
        )
        .unwrap();

    assert_eq!(land_balance(&env, &env.bob), 3);
    assert_eq!(land_supply(&env), 6);
}

#[test]
fn test_game_master_wiring() {
    let mut env = setup();

    // Both NFT contracts hold the game-master capability
    for contract in [&env.warrior_addr, &env.land_addr] {
        let check: resource::GameMasterResponse = env
            .app
            .wrap()
            .query_wasm_smart(
                &env.resource_addr,
                &resource::QueryMsg::IsGameMaster {
                    address: contract.to_string(),
                },
            )
            .unwrap();
        assert!(check.is_game_master);
    }

    // A plain account does not, and cannot mint
    let err = env
        .app
        .execute_contract(
            env.alice.clone(),
            env.resource_addr.clone(),
            &resource::ExecuteMsg::Mint {
                recipient: env.alice.to_string(),
                amount: Uint128::new(1_000),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<warband_resource_token::error::ContractError>()
            .unwrap(),
        warband_resource_token::error::ContractError::Unauthorized {
            role: "game master".to_string()
        }
    );
}

#[test]
fn test_withdraw_proceeds() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.alice.clone(),
            env.warrior_addr.clone(),
            &warrior::ExecuteMsg::PublicMint {
                quantity: 3,
                stake: false,
            },
            &coins(3 * PRICE, DENOM),
        )
        .unwrap();

    // Mint proceeds sit on the warrior contract until withdrawn
    let contract_funds = env
        .app
        .wrap()
        .query_balance(&env.warrior_addr, DENOM)
        .unwrap();
    assert_eq!(contract_funds.amount.u128(), 3 * PRICE);

    env.app
        .execute_contract(
            env.owner.clone(),
            env.warrior_addr.clone(),
            &warrior::ExecuteMsg::Withdraw {},
            &[],
        )
        .unwrap();

    let owner_funds = env.app.wrap().query_balance(&env.owner, DENOM).unwrap();
    assert_eq!(owner_funds.amount.u128(), 3 * PRICE);
    let contract_funds = env
        .app
        .wrap()
        .query_balance(&env.warrior_addr, DENOM)
        .unwrap();
    assert_eq!(contract_funds.amount.u128(), 0);
}
