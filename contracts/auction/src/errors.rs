use soroban_sdk::contracterror;

/// Error codes for the auction contract, grouped by hundreds per
/// [`ErrorKind`].
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Bid placed at or before the start timestamp
    AuctionNotStarted = 100,
    /// Bid placed at or after the end timestamp
    AuctionEnded = 101,
    /// Item added at or after the start timestamp
    AuctionAlreadyStarted = 102,
    /// Close attempted before the end timestamp
    AuctionNotEnded = 103,
    /// Auction has already been closed
    AuctionClosed = 104,

    /// Manager capability missing, not held by caller, or for another auction
    InvalidManagerCap = 200,
    /// Claim capability missing, already redeemed, not held by caller, or mismatched
    InvalidClaimCap = 201,

    /// Payment below the current minimum bid
    BidTooLow = 300,
    /// Payment is not positive or the next minimum overflows
    InvalidAmount = 301,

    /// Item registry is full
    ItemCapacityExceeded = 400,

    AuctionNotFound = 500,
    CapNotFound = 501,
    /// Auction still holds items, a live bid, or unredeemed claims
    AuctionNotEmpty = 502,
    ItemAlreadyRegistered = 503,
    /// Start timestamp is not before end timestamp
    InvalidTimeWindow = 504,
    /// A pricing field is negative
    InvalidPricing = 505,
    AuctionNameEmpty = 506,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    WindowViolation,
    AuthorizationFailure,
    InsufficientBid,
    CapacityExceeded,
    InvalidState,
}

impl Error {
    pub fn kind(self) -> ErrorKind {
        match self as u32 {
            100..=199 => ErrorKind::WindowViolation,
            200..=299 => ErrorKind::AuthorizationFailure,
            300..=399 => ErrorKind::InsufficientBid,
            400..=499 => ErrorKind::CapacityExceeded,
            _ => ErrorKind::InvalidState,
        }
    }
}
