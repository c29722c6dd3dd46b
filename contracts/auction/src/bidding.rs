use soroban_sdk::Env;

use crate::errors::Error;
use crate::types::{Auction, AuctionStatus, Bid};

impl Auction {
    pub fn is_closed(&self) -> bool {
        self.status == AuctionStatus::Closed
    }

    /// Bids are accepted strictly inside `(start_ts, end_ts)` while the
    /// auction is open.
    pub fn check_bidding_open(&self, env: &Env) -> Result<(), Error> {
        if self.is_closed() {
            return Err(Error::AuctionClosed);
        }
        let now = env.ledger().timestamp();
        if now <= self.start_ts {
            return Err(Error::AuctionNotStarted);
        }
        if now >= self.end_ts {
            return Err(Error::AuctionEnded);
        }
        Ok(())
    }

    pub fn check_accepting_items(&self, env: &Env) -> Result<(), Error> {
        if env.ledger().timestamp() >= self.start_ts {
            return Err(Error::AuctionAlreadyStarted);
        }
        Ok(())
    }

    pub fn check_can_close(&self, env: &Env) -> Result<(), Error> {
        if self.is_closed() {
            return Err(Error::AuctionClosed);
        }
        if env.ledger().timestamp() < self.end_ts {
            return Err(Error::AuctionNotEnded);
        }
        Ok(())
    }

    /// Smallest payment the next bid must carry: the starting price for the
    /// first bid, otherwise the live amount plus the minimum increment.
    pub fn min_next_bid(&self, live_bid: Option<&Bid>) -> Result<i128, Error> {
        match live_bid {
            None => Ok(self.pricing.starting_price),
            Some(bid) => bid
                .amount
                .checked_add(self.pricing.min_bid_increment)
                .ok_or(Error::InvalidAmount),
        }
    }

    /// Settlement goes to the winning bidder only when the final bid clears
    /// the reserve strictly.
    pub fn reserve_met(&self, amount: i128) -> bool {
        amount > self.pricing.reserve_price
    }
}
