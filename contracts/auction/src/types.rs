use soroban_sdk::{contracttype, Address, String, Vec};

/// Maximum number of items a single auction can hold in custody.
pub const MAX_ITEMS: u32 = 255;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Active = 0,
    Closed = 1,
}

/// Pricing rules fixed at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PricingPolicy {
    pub min_bid_increment: i128,
    pub reserve_price: i128,
    pub starting_price: i128,
}

/// The single live bid; its amount is held by the contract in escrow.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Immutable history entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRecord {
    pub bidder: Address,
    pub timestamp: u64,
    pub amount: i128,
}

impl From<&Bid> for BidRecord {
    fn from(bid: &Bid) -> Self {
        BidRecord {
            bidder: bid.bidder.clone(),
            timestamp: bid.timestamp,
            amount: bid.amount,
        }
    }
}

/// An item in auction custody. `item_type` is the address of the collection
/// contract the item belongs to.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemEntry {
    pub item_id: u64,
    pub item_type: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub creator: Address,
    pub token: Address,
    pub start_ts: u64,
    pub end_ts: u64,
    pub pricing: PricingPolicy,
    pub items: Vec<ItemEntry>,
    pub status: AuctionStatus,
    pub manager_cap_id: u64,
}

/// Administrative rights over one auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerCap {
    pub id: u64,
    pub auction_id: u64,
    pub holder: Address,
}

/// Right to redeem one item from one auction. Claim caps are not stored one
/// by one: they are a view over the auction's `Settlement`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimCap {
    pub id: u64,
    pub auction_id: u64,
    pub item_id: u64,
    pub item_type: Address,
    pub holder: Address,
}

/// Outcome of a close. Claim cap `first_cap_id + i` redeems `items[i]`.
/// Caps are held by `recipient` unless transferred, in which case the new
/// holder is stored under `StorageKey::ClaimHolder`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub auction_id: u64,
    pub recipient: Address,
    pub first_cap_id: u64,
    pub items: Vec<ItemEntry>,
    pub redeemed: Vec<u64>,
}

impl Settlement {
    /// Item named by `cap_id`, if the cap belongs to this settlement.
    pub fn item_for(&self, cap_id: u64) -> Option<ItemEntry> {
        let index = cap_id.checked_sub(self.first_cap_id)?;
        if index >= self.items.len() as u64 {
            return None;
        }
        self.items.get(index as u32)
    }

    pub fn is_redeemed(&self, cap_id: u64) -> bool {
        self.redeemed.contains(cap_id)
    }

    pub fn outstanding(&self) -> u32 {
        self.items.len() - self.redeemed.len()
    }
}

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    ObjectCounter,
    Auction(u64),
    LiveBid(u64),
    BidCount(u64),
    BidRecord(u64, u32),
    ManagerCap(u64),
    Settlement(u64),
    ClaimHolder(u64),
}
