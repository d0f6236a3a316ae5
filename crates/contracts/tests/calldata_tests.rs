//! Unit tests for calldata encoding.
//!
//! These tests verify the selectors and ABI encoding of every transaction the
//! harness sends, without requiring RPC connections.

use alloy::primitives::{address, keccak256, Address, U256};
use alloy::sol_types::SolCall;
use pairvault_contracts::{
    connect_http, HttpProvider, RouterClient, StrategyAllocation, StrategyClient, TokenClient,
    VaultClient, VaultInit,
};

const TEST_TOKEN: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
const TEST_VAULT: Address = address!("1111111111111111111111111111111111111111");
const TEST_STRATEGY: Address = address!("2222222222222222222222222222222222222222");
const TEST_ROUTER: Address = address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D");
const TEST_SENDER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
const TEST_RECEIVER: Address = address!("1234567890123456789012345678901234567890");

// Well-known selectors
// approve(address,uint256)
const APPROVE_SELECTOR: [u8; 4] = [0x09, 0x5e, 0xa7, 0xb3];
// transfer(address,uint256)
const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];
// deposit(uint256)
const DEPOSIT_SELECTOR: [u8; 4] = [0xb6, 0xb5, 0x5f, 0x25];
// withdraw()
const WITHDRAW_SELECTOR: [u8; 4] = [0x3c, 0xcf, 0xd6, 0x0b];
// harvest()
const HARVEST_SELECTOR: [u8; 4] = [0x46, 0x41, 0x25, 0x7d];
// swapExactTokensForTokens(uint256,uint256,address[],address,uint256)
const SWAP_SELECTOR: [u8; 4] = [0x38, 0xed, 0x17, 0x39];

fn provider() -> HttpProvider {
    connect_http("http://localhost:8545").expect("Failed to create provider")
}

fn selector_of(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Reads the address stored right-aligned in a 32-byte word.
fn word_address(calldata: &[u8], word: usize) -> Address {
    let start = 4 + word * 32;
    Address::from_slice(&calldata[start + 12..start + 32])
}

fn word_u256(calldata: &[u8], word: usize) -> U256 {
    let start = 4 + word * 32;
    U256::from_be_slice(&calldata[start..start + 32])
}

// ============================================================================
// ERC-20
// ============================================================================

#[test]
fn test_approve_calldata() {
    let token = TokenClient::new(TEST_TOKEN, provider());
    let amount = U256::from(10_000_000_000u64);

    let prepared = token.approve(TEST_SENDER, TEST_VAULT, amount);
    assert_eq!(prepared.from(), TEST_SENDER);
    assert_eq!(prepared.to(), TEST_TOKEN);

    let calldata = prepared.calldata();
    assert_eq!(&calldata[0..4], &APPROVE_SELECTOR);
    assert_eq!(calldata.len(), 4 + 64);
    assert_eq!(word_address(&calldata, 0), TEST_VAULT);
    assert_eq!(word_u256(&calldata, 1), amount);
}

#[test]
fn test_transfer_calldata() {
    let token = TokenClient::new(TEST_TOKEN, provider());
    let amount = U256::from(10_000u64) * U256::from(10u64).pow(U256::from(6));

    let (addr, call) = token.transfer(TEST_SENDER, TEST_RECEIVER, amount).prepare();
    assert_eq!(addr, TEST_TOKEN);

    let calldata = call.abi_encode();
    assert_eq!(&calldata[0..4], &TRANSFER_SELECTOR);
    assert_eq!(word_address(&calldata, 0), TEST_RECEIVER);
    assert_eq!(word_u256(&calldata, 1), amount);
}

// ============================================================================
// Vault
// ============================================================================

#[test]
fn test_vault_deposit_calldata() {
    let vault = VaultClient::new(TEST_VAULT, provider());
    let amount = U256::from(10_000_000_000u64);

    let prepared = vault.deposit(TEST_SENDER, amount);
    assert_eq!(prepared.to(), TEST_VAULT);

    let calldata = prepared.calldata();
    assert_eq!(&calldata[0..4], &DEPOSIT_SELECTOR);
    assert_eq!(calldata.len(), 4 + 32);
    assert_eq!(word_u256(&calldata, 0), amount);
}

#[test]
fn test_vault_withdraw_all_has_no_arguments() {
    let vault = VaultClient::new(TEST_VAULT, provider());

    let calldata = vault.withdraw_all(TEST_SENDER).calldata();
    assert_eq!(calldata.as_ref(), &WITHDRAW_SELECTOR);
}

#[test]
fn test_vault_set_deposit_limit_max() {
    let vault = VaultClient::new(TEST_VAULT, provider());

    let calldata = vault.set_deposit_limit(TEST_SENDER, U256::MAX).calldata();
    assert_eq!(&calldata[0..4], &selector_of("setDepositLimit(uint256)"));
    assert_eq!(&calldata[4..36], &[0xff; 32]);
}

#[test]
fn test_vault_set_management_calldata() {
    let vault = VaultClient::new(TEST_VAULT, provider());

    let calldata = vault.set_management(TEST_SENDER, TEST_RECEIVER).calldata();
    assert_eq!(&calldata[0..4], &selector_of("setManagement(address)"));
    assert_eq!(word_address(&calldata, 0), TEST_RECEIVER);
}

#[test]
fn test_vault_initialize_calldata() {
    let vault = VaultClient::new(TEST_VAULT, provider());
    let init = VaultInit {
        token: TEST_TOKEN,
        governance: Address::repeat_byte(0x01),
        rewards: Address::repeat_byte(0x02),
        name_override: String::new(),
        symbol_override: String::new(),
        guardian: Address::repeat_byte(0x03),
        management: Address::repeat_byte(0x04),
    };

    let calldata = vault.initialize(TEST_SENDER, &init).calldata();
    assert_eq!(
        &calldata[0..4],
        &selector_of("initialize(address,address,address,string,string,address,address)")
    );

    // 7 head words, then one length word (zero) for each empty string
    assert_eq!(calldata.len(), 4 + 7 * 32 + 2 * 32);
    assert_eq!(word_address(&calldata, 0), TEST_TOKEN);
    assert_eq!(word_address(&calldata, 1), init.governance);
    assert_eq!(word_address(&calldata, 2), init.rewards);
    assert_eq!(word_address(&calldata, 5), init.guardian);
    assert_eq!(word_address(&calldata, 6), init.management);
    assert_eq!(word_u256(&calldata, 7), U256::ZERO);
    assert_eq!(word_u256(&calldata, 8), U256::ZERO);
}

#[test]
fn test_vault_add_strategy_calldata() {
    let vault = VaultClient::new(TEST_VAULT, provider());
    let allocation = StrategyAllocation {
        debt_ratio: U256::from(10_000u64),
        min_debt_per_harvest: U256::ZERO,
        max_debt_per_harvest: U256::MAX,
        rate_limit: U256::from(1_000u64),
    };

    let calldata = vault
        .add_strategy(TEST_SENDER, TEST_STRATEGY, &allocation)
        .calldata();
    assert_eq!(
        &calldata[0..4],
        &selector_of("addStrategy(address,uint256,uint256,uint256,uint256)")
    );
    assert_eq!(calldata.len(), 4 + 5 * 32);
    assert_eq!(word_address(&calldata, 0), TEST_STRATEGY);
    assert_eq!(word_u256(&calldata, 1), U256::from(10_000u64));
    assert_eq!(word_u256(&calldata, 2), U256::ZERO);
    assert_eq!(word_u256(&calldata, 3), U256::MAX);
    assert_eq!(word_u256(&calldata, 4), U256::from(1_000u64));
}

// ============================================================================
// Strategy
// ============================================================================

#[test]
fn test_strategy_harvest_and_tend_calldata() {
    let strategy = StrategyClient::new(TEST_STRATEGY, provider());

    let harvest = strategy.harvest(TEST_SENDER).calldata();
    assert_eq!(harvest.as_ref(), &HARVEST_SELECTOR);

    let tend = strategy.tend(TEST_SENDER).calldata();
    assert_eq!(tend.as_ref(), &selector_of("tend()"));
}

#[test]
fn test_strategy_set_keeper_calldata() {
    let strategy = StrategyClient::new(TEST_STRATEGY, provider());
    let keeper = Address::repeat_byte(0x05);

    let prepared = strategy.set_keeper(TEST_SENDER, keeper);
    assert_eq!(prepared.to(), TEST_STRATEGY);

    let calldata = prepared.calldata();
    assert_eq!(&calldata[0..4], &selector_of("setKeeper(address)"));
    assert_eq!(word_address(&calldata, 0), keeper);
}

#[test]
fn test_strategy_constructor_args_are_two_inline_words() {
    let vault0 = Address::repeat_byte(0xaa);
    let vault1 = Address::repeat_byte(0xbb);

    let args = StrategyClient::constructor_args([vault0, vault1]);

    assert_eq!(args.len(), 64);
    assert_eq!(Address::from_slice(&args[12..32]), vault0);
    assert_eq!(Address::from_slice(&args[44..64]), vault1);
}

// ============================================================================
// Router
// ============================================================================

#[test]
fn test_swap_calldata() {
    let router = RouterClient::new(TEST_ROUTER, provider());
    let token_in = Address::repeat_byte(0x0a);
    let token_out = Address::repeat_byte(0x0b);
    let amount_in = U256::from(10_000_000_000u64);
    let deadline = U256::from(1_700_000_010u64);

    let prepared = router.swap_exact_tokens_for_tokens(
        TEST_SENDER,
        amount_in,
        U256::from(1u64),
        vec![token_in, token_out],
        TEST_SENDER,
        deadline,
    );
    assert_eq!(prepared.to(), TEST_ROUTER);

    let calldata = prepared.calldata();
    assert_eq!(&calldata[0..4], &SWAP_SELECTOR);

    // 5 head words, then the path: length word and two elements
    assert_eq!(calldata.len(), 4 + 5 * 32 + 3 * 32);
    assert_eq!(word_u256(&calldata, 0), amount_in);
    assert_eq!(word_u256(&calldata, 1), U256::from(1u64));
    assert_eq!(word_u256(&calldata, 2), U256::from(5 * 32));
    assert_eq!(word_address(&calldata, 3), TEST_SENDER);
    assert_eq!(word_u256(&calldata, 4), deadline);
    assert_eq!(word_u256(&calldata, 5), U256::from(2u64));
    assert_eq!(word_address(&calldata, 6), token_in);
    assert_eq!(word_address(&calldata, 7), token_out);
}
