use soroban_sdk::{contractclient, token, Address, Env};

/// Interface an item collection must expose for its items to be auctioned.
/// The collection enforces single ownership and requires `from` to authorize.
#[allow(dead_code)]
#[contractclient(name = "ItemCollectionClient")]
pub trait ItemCollection {
    fn transfer(env: Env, from: Address, to: Address, item_id: u64);
}

/// Moves an item from its owner into the contract's custody.
pub fn lock_item(env: &Env, item_type: &Address, owner: &Address, item_id: u64) {
    ItemCollectionClient::new(env, item_type).transfer(
        owner,
        &env.current_contract_address(),
        &item_id,
    );
}

/// Moves an item out of the contract's custody.
pub fn release_item(env: &Env, item_type: &Address, to: &Address, item_id: u64) {
    ItemCollectionClient::new(env, item_type).transfer(
        &env.current_contract_address(),
        to,
        &item_id,
    );
}

pub fn escrow_bid(env: &Env, token: &Address, bidder: &Address, amount: i128) {
    if amount > 0 {
        token::TokenClient::new(env, token).transfer(
            bidder,
            &env.current_contract_address(),
            &amount,
        );
    }
}

/// Pays out escrowed funds. Used both for outbid refunds and settlement.
pub fn release_funds(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        token::TokenClient::new(env, token).transfer(
            &env.current_contract_address(),
            to,
            &amount,
        );
    }
}
