use soroban_sdk::{contractevent, Address};

/// Event emitted when an auction is published
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub creator: Address,
    pub manager_cap_id: u64,
    pub start_ts: u64,
    pub end_ts: u64,
}

/// Event emitted when an item enters auction custody
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemAdded {
    #[topic]
    pub auction_id: u64,
    pub item_type: Address,
    pub item_id: u64,
}

/// Event emitted when a bid becomes the live bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when an outbid bidder is refunded
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefunded {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted once per close for the whole block of claim caps
/// `first_cap_id..first_cap_id + count`
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimCapsIssued {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub holder: Address,
    pub first_cap_id: u64,
    pub count: u32,
}

/// Event emitted once when the manager closes the auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionClosed {
    #[topic]
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub recipient: Address,
    pub proceeds: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemClaimed {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub claimant: Address,
    pub item_type: Address,
    pub item_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapTransferred {
    #[topic]
    pub cap_id: u64,
    pub from: Address,
    pub to: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionDestroyed {
    #[topic]
    pub auction_id: u64,
}
