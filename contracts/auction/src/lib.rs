#![no_std]

mod bidding;
mod capability;
mod custody;
mod errors;
mod events;
mod registry;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use custody::{ItemCollection, ItemCollectionClient};
pub use errors::{Error, ErrorKind};
pub use types::{
    Auction, AuctionStatus, Bid, BidRecord, ClaimCap, ItemEntry, ManagerCap, PricingPolicy,
    MAX_ITEMS,
};

use events::{AuctionClosed, AuctionCreated, AuctionDestroyed, BidPlaced, BidRefunded, ItemAdded, ItemClaimed};

/// Escrow auction with capability-gated item custody.
///
/// Sellers lock items into an auction before it starts, bidders escrow the
/// auction's token and are refunded in full when outbid, and the holder of
/// the auction's `ManagerCap` closes it once the window has elapsed. Closing
/// issues one `ClaimCap` per item for the winner, or for the manager when
/// the reserve was not beaten; each cap releases its item exactly once.
#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    // ========== LIFECYCLE ==========

    /// Publish a new auction and return the capability that administers it.
    pub fn create_auction(
        env: Env,
        creator: Address,
        token: Address,
        name: String,
        description: Option<String>,
        start_ts: u64,
        end_ts: u64,
        min_bid_increment: i128,
        reserve_price: i128,
        starting_price: i128,
    ) -> Result<ManagerCap, Error> {
        creator.require_auth();

        if name.is_empty() {
            return Err(Error::AuctionNameEmpty);
        }
        if start_ts >= end_ts {
            return Err(Error::InvalidTimeWindow);
        }
        if min_bid_increment < 0 || reserve_price < 0 || starting_price < 0 {
            return Err(Error::InvalidPricing);
        }

        let auction_id = storage::next_object_id(&env);
        let cap = capability::mint_manager_cap(&env, auction_id, &creator);

        let auction = Auction {
            id: auction_id,
            name,
            description,
            creator: creator.clone(),
            token,
            start_ts,
            end_ts,
            pricing: PricingPolicy {
                min_bid_increment,
                reserve_price,
                starting_price,
            },
            items: Vec::new(&env),
            status: AuctionStatus::Active,
            manager_cap_id: cap.id,
        };
        storage::save_auction(&env, &auction);

        AuctionCreated {
            auction_id,
            creator,
            manager_cap_id: cap.id,
            start_ts,
            end_ts,
        }
        .publish(&env);

        Ok(cap)
    }

    /// Move an item into auction custody. Only before the auction starts.
    pub fn add_item(
        env: Env,
        holder: Address,
        cap_id: u64,
        auction_id: u64,
        item_type: Address,
        item_id: u64,
    ) -> Result<(), Error> {
        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        capability::require_manager(&env, &holder, cap_id, &auction)?;
        auction.check_accepting_items(&env)?;
        auction.register_item(&item_type, item_id)?;

        custody::lock_item(&env, &item_type, &holder, item_id);
        storage::save_auction(&env, &auction);

        ItemAdded {
            auction_id,
            item_type,
            item_id,
        }
        .publish(&env);

        Ok(())
    }

    /// Escrow a bid. Only the minimum required amount is taken from the
    /// bidder; the displaced live bid is refunded in full. Returns the amount
    /// now held in escrow.
    pub fn place_bid(env: Env, bidder: Address, auction_id: u64, payment: i128) -> Result<i128, Error> {
        bidder.require_auth();

        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if payment <= 0 {
            return Err(Error::InvalidAmount);
        }
        auction.check_bidding_open(&env)?;

        let previous = storage::get_live_bid(&env, auction_id);
        let target = auction.min_next_bid(previous.as_ref())?;
        if payment < target {
            return Err(Error::BidTooLow);
        }

        custody::escrow_bid(&env, &auction.token, &bidder, target);

        if let Some(previous) = previous {
            custody::release_funds(&env, &auction.token, &previous.bidder, previous.amount);
            BidRefunded {
                auction_id,
                bidder: previous.bidder,
                amount: previous.amount,
            }
            .publish(&env);
        }

        let bid = Bid {
            bidder: bidder.clone(),
            amount: target,
            timestamp: env.ledger().timestamp(),
        };
        storage::append_bid_record(&env, auction_id, &BidRecord::from(&bid));
        storage::set_live_bid(&env, auction_id, &bid);

        BidPlaced {
            auction_id,
            bidder,
            amount: bid.amount,
            timestamp: bid.timestamp,
        }
        .publish(&env);

        Ok(target)
    }

    /// Settle the auction: issue claim caps for every item and pay the
    /// escrowed proceeds to the manager. Returns the amount paid out.
    pub fn close_auction(env: Env, holder: Address, cap_id: u64, auction_id: u64) -> Result<i128, Error> {
        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        capability::require_manager(&env, &holder, cap_id, &auction)?;
        auction.check_can_close(&env)?;

        let mut recipient = holder.clone();
        let mut winner = None;
        let mut proceeds = 0;

        if let Some(final_bid) = storage::take_live_bid(&env, auction_id) {
            storage::append_bid_record(&env, auction_id, &BidRecord::from(&final_bid));
            if auction.reserve_met(final_bid.amount) {
                recipient = final_bid.bidder.clone();
                winner = Some(final_bid.bidder.clone());
            }
            proceeds = final_bid.amount;
        }

        let entries = auction.drain_items(&env);
        let claim_count = entries.len();
        capability::issue_claim_caps(&env, auction_id, entries, &recipient);

        custody::release_funds(&env, &auction.token, &holder, proceeds);

        auction.status = AuctionStatus::Closed;
        storage::save_auction(&env, &auction);

        log!(
            &env,
            "auction {} settled: {} claim caps to {}, proceeds {}",
            auction_id,
            claim_count,
            recipient,
            proceeds
        );

        AuctionClosed {
            auction_id,
            winner,
            recipient,
            proceeds,
        }
        .publish(&env);

        Ok(proceeds)
    }

    /// Redeem a claim cap for the item it names. The cap is spent.
    pub fn claim_item(
        env: Env,
        claimant: Address,
        cap_id: u64,
        auction_id: u64,
        item_type: Address,
        item_id: u64,
    ) -> Result<(), Error> {
        capability::redeem_claim_cap(&env, &claimant, cap_id, auction_id, &item_type, item_id)?;
        custody::release_item(&env, &item_type, &claimant, item_id);

        ItemClaimed {
            auction_id,
            claimant,
            item_type,
            item_id,
        }
        .publish(&env);

        Ok(())
    }

    /// Remove an auction that no longer holds items, escrow, or unredeemed
    /// claims. Requires the manager cap, which is deleted with it.
    pub fn destroy_empty_auction(env: Env, holder: Address, cap_id: u64, auction_id: u64) -> Result<(), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        capability::require_manager(&env, &holder, cap_id, &auction)?;
        if !auction.items.is_empty()
            || storage::get_live_bid(&env, auction_id).is_some()
            || capability::has_outstanding_claims(&env, auction_id)
        {
            return Err(Error::AuctionNotEmpty);
        }

        storage::remove_auction(&env, auction_id);
        storage::remove_manager_cap(&env, auction.manager_cap_id);

        AuctionDestroyed { auction_id }.publish(&env);

        Ok(())
    }

    // ========== CAPABILITIES ==========

    pub fn transfer_manager_cap(env: Env, holder: Address, cap_id: u64, to: Address) -> Result<(), Error> {
        capability::transfer_manager_cap(&env, &holder, cap_id, &to)
    }

    pub fn transfer_claim_cap(
        env: Env,
        holder: Address,
        auction_id: u64,
        cap_id: u64,
        to: Address,
    ) -> Result<(), Error> {
        capability::transfer_claim_cap(&env, &holder, auction_id, cap_id, &to)
    }

    // ========== QUERIES ==========

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    /// Number of records in the auction's bid history.
    pub fn get_bid_count(env: Env, auction_id: u64) -> Result<u32, Error> {
        Self::require_auction(&env, auction_id)?;
        Ok(storage::get_bid_count(&env, auction_id))
    }

    /// A page of at most `limit` history records starting at `start`, oldest
    /// first.
    pub fn get_bid_history(env: Env, auction_id: u64, start: u32, limit: u32) -> Result<Vec<BidRecord>, Error> {
        Self::require_auction(&env, auction_id)?;
        Ok(storage::get_bid_history(&env, auction_id, start, limit))
    }

    pub fn get_live_bid(env: Env, auction_id: u64) -> Result<Option<Bid>, Error> {
        Self::require_auction(&env, auction_id)?;
        Ok(storage::get_live_bid(&env, auction_id))
    }

    pub fn get_items(env: Env, auction_id: u64) -> Result<Vec<ItemEntry>, Error> {
        Ok(Self::require_auction(&env, auction_id)?.items)
    }

    /// Minimum payment the next bid must carry.
    pub fn get_min_next_bid(env: Env, auction_id: u64) -> Result<i128, Error> {
        let auction = Self::require_auction(&env, auction_id)?;
        auction.min_next_bid(storage::get_live_bid(&env, auction_id).as_ref())
    }

    pub fn get_manager_cap(env: Env, cap_id: u64) -> Result<ManagerCap, Error> {
        storage::get_manager_cap(&env, cap_id).ok_or(Error::CapNotFound)
    }

    pub fn get_claim_cap(env: Env, auction_id: u64, cap_id: u64) -> Result<ClaimCap, Error> {
        capability::find_claim_cap(&env, auction_id, cap_id).ok_or(Error::CapNotFound)
    }

    /// Unredeemed claim caps of an auction, in issue order.
    pub fn get_claim_caps(env: Env, auction_id: u64) -> Result<Vec<ClaimCap>, Error> {
        Self::require_auction(&env, auction_id)?;
        Ok(capability::outstanding_claim_caps(&env, auction_id))
    }
}

impl AuctionContract {
    fn require_auction(env: &Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(env, auction_id).ok_or(Error::AuctionNotFound)
    }
}

#[cfg(test)]
mod test;
