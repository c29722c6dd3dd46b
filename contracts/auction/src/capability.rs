use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::events::{CapTransferred, ClaimCapsIssued};
use crate::storage;
use crate::types::{Auction, ClaimCap, ItemEntry, ManagerCap, Settlement};

pub fn mint_manager_cap(env: &Env, auction_id: u64, holder: &Address) -> ManagerCap {
    let cap = ManagerCap {
        id: storage::next_object_id(env),
        auction_id,
        holder: holder.clone(),
    };
    storage::save_manager_cap(env, &cap);
    cap
}

/// Checks that `holder` authorized the call, holds `cap_id`, and that the
/// cap administers `auction`.
pub fn require_manager(
    env: &Env,
    holder: &Address,
    cap_id: u64,
    auction: &Auction,
) -> Result<ManagerCap, Error> {
    holder.require_auth();

    let cap = storage::get_manager_cap(env, cap_id).ok_or(Error::InvalidManagerCap)?;
    if cap.holder != *holder || cap.auction_id != auction.id {
        return Err(Error::InvalidManagerCap);
    }
    Ok(cap)
}

/// Issues one claim cap per item to `recipient` in a single write. Cap ids
/// are a consecutive block, in registry order.
pub fn issue_claim_caps(env: &Env, auction_id: u64, items: Vec<ItemEntry>, recipient: &Address) {
    if items.is_empty() {
        return;
    }

    let count = items.len();
    let first_cap_id = storage::reserve_object_ids(env, count);
    storage::save_settlement(
        env,
        &Settlement {
            auction_id,
            recipient: recipient.clone(),
            first_cap_id,
            items,
            redeemed: Vec::new(env),
        },
    );

    ClaimCapsIssued {
        auction_id,
        holder: recipient.clone(),
        first_cap_id,
        count,
    }
    .publish(env);
}

fn current_holder(env: &Env, settlement: &Settlement, cap_id: u64) -> Address {
    storage::get_claim_holder(env, cap_id).unwrap_or_else(|| settlement.recipient.clone())
}

/// Looks up an unredeemed claim cap of `auction_id`.
pub fn find_claim_cap(env: &Env, auction_id: u64, cap_id: u64) -> Option<ClaimCap> {
    let settlement = storage::get_settlement(env, auction_id)?;
    if settlement.is_redeemed(cap_id) {
        return None;
    }
    let entry = settlement.item_for(cap_id)?;
    Some(ClaimCap {
        id: cap_id,
        auction_id,
        item_id: entry.item_id,
        item_type: entry.item_type,
        holder: current_holder(env, &settlement, cap_id),
    })
}

/// Unredeemed claim caps of `auction_id`, in issue order.
pub fn outstanding_claim_caps(env: &Env, auction_id: u64) -> Vec<ClaimCap> {
    let mut caps = Vec::new(env);
    let Some(settlement) = storage::get_settlement(env, auction_id) else {
        return caps;
    };

    for (offset, entry) in settlement.items.iter().enumerate() {
        let cap_id = settlement.first_cap_id + offset as u64;
        if settlement.is_redeemed(cap_id) {
            continue;
        }
        caps.push_back(ClaimCap {
            id: cap_id,
            auction_id,
            item_id: entry.item_id,
            item_type: entry.item_type,
            holder: current_holder(env, &settlement, cap_id),
        });
    }
    caps
}

pub fn has_outstanding_claims(env: &Env, auction_id: u64) -> bool {
    storage::get_settlement(env, auction_id).is_some()
}

/// Verifies and spends a claim cap. A cap that was never issued and one that
/// was already redeemed are both reported as `InvalidClaimCap`.
pub fn redeem_claim_cap(
    env: &Env,
    claimant: &Address,
    cap_id: u64,
    auction_id: u64,
    item_type: &Address,
    item_id: u64,
) -> Result<ClaimCap, Error> {
    claimant.require_auth();

    let mut settlement = storage::get_settlement(env, auction_id).ok_or(Error::InvalidClaimCap)?;
    if settlement.is_redeemed(cap_id) {
        return Err(Error::InvalidClaimCap);
    }
    let entry = settlement.item_for(cap_id).ok_or(Error::InvalidClaimCap)?;
    let holder = current_holder(env, &settlement, cap_id);
    if holder != *claimant || entry.item_id != item_id || entry.item_type != *item_type {
        return Err(Error::InvalidClaimCap);
    }

    settlement.redeemed.push_back(cap_id);
    storage::save_settlement(env, &settlement);
    storage::remove_claim_holder(env, cap_id);

    Ok(ClaimCap {
        id: cap_id,
        auction_id,
        item_id,
        item_type: entry.item_type,
        holder,
    })
}

pub fn transfer_manager_cap(env: &Env, holder: &Address, cap_id: u64, to: &Address) -> Result<(), Error> {
    holder.require_auth();

    let mut cap = storage::get_manager_cap(env, cap_id).ok_or(Error::CapNotFound)?;
    if cap.holder != *holder {
        return Err(Error::InvalidManagerCap);
    }
    cap.holder = to.clone();
    storage::save_manager_cap(env, &cap);

    CapTransferred {
        cap_id,
        from: holder.clone(),
        to: to.clone(),
    }
    .publish(env);
    Ok(())
}

pub fn transfer_claim_cap(
    env: &Env,
    holder: &Address,
    auction_id: u64,
    cap_id: u64,
    to: &Address,
) -> Result<(), Error> {
    holder.require_auth();

    let cap = find_claim_cap(env, auction_id, cap_id).ok_or(Error::CapNotFound)?;
    if cap.holder != *holder {
        return Err(Error::InvalidClaimCap);
    }
    storage::set_claim_holder(env, cap_id, to);

    CapTransferred {
        cap_id,
        from: holder.clone(),
        to: to.clone(),
    }
    .publish(env);
    Ok(())
}
