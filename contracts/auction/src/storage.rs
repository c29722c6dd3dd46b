use crate::types::{Auction, Bid, BidRecord, ManagerCap, Settlement, StorageKey};
use soroban_sdk::{Address, Env, Vec};

const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

fn bump(env: &Env, key: &StorageKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Identity minting ==========

/// Mints a fresh identity. Auctions and capabilities share one counter, so an
/// id never names two different records.
pub fn next_object_id(env: &Env) -> u64 {
    reserve_object_ids(env, 1)
}

/// Reserves `count` consecutive identities and returns the first one.
pub fn reserve_object_ids(env: &Env, count: u32) -> u64 {
    let last = env
        .storage()
        .instance()
        .get::<_, u64>(&StorageKey::ObjectCounter)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&StorageKey::ObjectCounter, &(last + count as u64));
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    last + 1
}

// ========== Auctions ==========

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        bump(env, &key);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    bump(env, &key);
}

/// Deletes the auction record, its live bid slot and bid counter. Bid
/// records themselves are left to expire with their TTL.
pub fn remove_auction(env: &Env, auction_id: u64) {
    env.storage()
        .persistent()
        .remove(&StorageKey::Auction(auction_id));
    env.storage()
        .persistent()
        .remove(&StorageKey::LiveBid(auction_id));
    env.storage()
        .persistent()
        .remove(&StorageKey::BidCount(auction_id));
    env.storage()
        .persistent()
        .remove(&StorageKey::Settlement(auction_id));
}

// ========== Live bid ==========

pub fn get_live_bid(env: &Env, auction_id: u64) -> Option<Bid> {
    let key = StorageKey::LiveBid(auction_id);
    let bid = env.storage().persistent().get::<_, Bid>(&key);
    if bid.is_some() {
        bump(env, &key);
    }
    bid
}

pub fn set_live_bid(env: &Env, auction_id: u64, bid: &Bid) {
    let key = StorageKey::LiveBid(auction_id);
    env.storage().persistent().set(&key, bid);
    bump(env, &key);
}

/// Clears the live bid slot, returning what it held.
pub fn take_live_bid(env: &Env, auction_id: u64) -> Option<Bid> {
    let bid = get_live_bid(env, auction_id);
    if bid.is_some() {
        env.storage()
            .persistent()
            .remove(&StorageKey::LiveBid(auction_id));
    }
    bid
}

// ========== Bid history ==========

pub fn get_bid_count(env: &Env, auction_id: u64) -> u32 {
    let key = StorageKey::BidCount(auction_id);
    match env.storage().persistent().get(&key) {
        Some(count) => {
            bump(env, &key);
            count
        }
        None => 0,
    }
}

/// One entry per record, so appending never rewrites earlier history.
pub fn append_bid_record(env: &Env, auction_id: u64, record: &BidRecord) {
    let index = get_bid_count(env, auction_id);

    let record_key = StorageKey::BidRecord(auction_id, index);
    env.storage().persistent().set(&record_key, record);
    bump(env, &record_key);

    let count_key = StorageKey::BidCount(auction_id);
    env.storage().persistent().set(&count_key, &(index + 1));
    bump(env, &count_key);
}

/// Up to `limit` records starting at index `start`, oldest first.
pub fn get_bid_history(env: &Env, auction_id: u64, start: u32, limit: u32) -> Vec<BidRecord> {
    let count = get_bid_count(env, auction_id);
    let end = start.saturating_add(limit).min(count);

    let mut records = Vec::new(env);
    for index in start..end {
        let key = StorageKey::BidRecord(auction_id, index);
        if let Some(record) = env.storage().persistent().get::<_, BidRecord>(&key) {
            bump(env, &key);
            records.push_back(record);
        }
    }
    records
}

// ========== Manager capabilities ==========

pub fn get_manager_cap(env: &Env, cap_id: u64) -> Option<ManagerCap> {
    let key = StorageKey::ManagerCap(cap_id);
    let cap = env.storage().persistent().get::<_, ManagerCap>(&key);
    if cap.is_some() {
        bump(env, &key);
    }
    cap
}

pub fn save_manager_cap(env: &Env, cap: &ManagerCap) {
    let key = StorageKey::ManagerCap(cap.id);
    env.storage().persistent().set(&key, cap);
    bump(env, &key);
}

pub fn remove_manager_cap(env: &Env, cap_id: u64) {
    env.storage()
        .persistent()
        .remove(&StorageKey::ManagerCap(cap_id));
}

// ========== Settlements ==========

pub fn get_settlement(env: &Env, auction_id: u64) -> Option<Settlement> {
    let key = StorageKey::Settlement(auction_id);
    let settlement = env.storage().persistent().get::<_, Settlement>(&key);
    if settlement.is_some() {
        bump(env, &key);
    }
    settlement
}

/// Stores the settlement while it still has unredeemed caps and deletes it
/// once the last one is redeemed.
pub fn save_settlement(env: &Env, settlement: &Settlement) {
    let key = StorageKey::Settlement(settlement.auction_id);
    if settlement.outstanding() == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, settlement);
        bump(env, &key);
    }
}

pub fn get_claim_holder(env: &Env, cap_id: u64) -> Option<Address> {
    let key = StorageKey::ClaimHolder(cap_id);
    let holder = env.storage().persistent().get::<_, Address>(&key);
    if holder.is_some() {
        bump(env, &key);
    }
    holder
}

pub fn set_claim_holder(env: &Env, cap_id: u64, holder: &Address) {
    let key = StorageKey::ClaimHolder(cap_id);
    env.storage().persistent().set(&key, holder);
    bump(env, &key);
}

pub fn remove_claim_holder(env: &Env, cap_id: u64) {
    env.storage()
        .persistent()
        .remove(&StorageKey::ClaimHolder(cap_id));
}
