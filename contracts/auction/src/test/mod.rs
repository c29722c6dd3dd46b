
use crate::{AuctionContract, AuctionContractClient, ManagerCap};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Events as _, Ledger},
    token, Address, Env, String, Symbol, TryFromVal, Vec,
};

pub const START_TS: u64 = 100;
pub const END_TS: u64 = 200;
pub const MIN_INCREMENT: i128 = 10;
pub const RESERVE_PRICE: i128 = 50;
pub const STARTING_PRICE: i128 = 20;

#[contracttype]
#[derive(Clone)]
enum CollectionKey {
    Owner(u64),
}

/// Single-owner item collection used as the auction's custody collaborator.
#[contract]
pub struct MockCollection;

#[contractimpl]
impl MockCollection {
    pub fn mint(env: Env, to: Address, item_id: u64) {
        env.storage()
            .persistent()
            .set(&CollectionKey::Owner(item_id), &to);
    }

    pub fn owner_of(env: Env, item_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&CollectionKey::Owner(item_id))
            .unwrap()
    }

    pub fn transfer(env: Env, from: Address, to: Address, item_id: u64) {
        from.require_auth();
        let owner = Self::owner_of(env.clone(), item_id);
        if owner != from {
            panic!("not the item owner");
        }
        env.storage()
            .persistent()
            .set(&CollectionKey::Owner(item_id), &to);
    }
}

pub struct TestContext {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub creator: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub collection: MockCollectionClient<'static>,
}

impl TestContext {
    /// Creates the standard auction: window (100, 200), increment 10,
    /// reserve 50, starting price 20.
    pub fn create_auction(&self) -> ManagerCap {
        self.client.create_auction(
            &self.creator,
            &self.token.address,
            &String::from_str(&self.env, "Prime Machin x Arttoo"),
            &Some(String::from_str(&self.env, "Studio collaboration")),
            &START_TS,
            &END_TS,
            &MIN_INCREMENT,
            &RESERVE_PRICE,
            &STARTING_PRICE,
        )
    }

    /// Mints `item_id` to the creator and locks it into the auction.
    pub fn add_item(&self, cap: &ManagerCap, item_id: u64) {
        self.collection.mint(&self.creator, &item_id);
        self.client.add_item(
            &self.creator,
            &cap.id,
            &cap.auction_id,
            &self.collection.address,
            &item_id,
        );
    }

    pub fn funded_bidder(&self, amount: i128) -> Address {
        let bidder = Address::generate(&self.env);
        self.token_admin.mint(&bidder, &amount);
        bidder
    }

    pub fn escrow_balance(&self) -> i128 {
        self.token.balance(&self.client.address)
    }

    /// Names of the events the auction contract published during the last
    /// call, in order. Token and collection events are skipped.
    pub fn emitted(&self) -> Vec<Symbol> {
        let mut names = Vec::new(&self.env);
        for (contract, topics, _) in self.env.events().all().iter() {
            if contract == self.client.address {
                let name = topics.get(0).unwrap();
                names.push_back(Symbol::try_from_val(&self.env, &name).unwrap());
            }
        }
        names
    }

    pub fn destroy(&self, cap: &ManagerCap) {
        self.client
            .destroy_empty_auction(&self.creator, &cap.id, &cap.auction_id);
    }
}

pub fn event_names(env: &Env, names: &[&str]) -> Vec<Symbol> {
    let mut symbols = Vec::new(env);
    for name in names {
        symbols.push_back(Symbol::new(env, name));
    }
    symbols
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, 10);

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);

    let creator = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_client = token::TokenClient::new(&env, &token_contract.address());
    let token_admin_client = token::StellarAssetClient::new(&env, &token_contract.address());

    let collection_id = env.register(MockCollection, ());
    let collection = MockCollectionClient::new(&env, &collection_id);

    TestContext {
        env,
        client,
        creator,
        token: token_client,
        token_admin: token_admin_client,
        collection,
    }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set_timestamp(timestamp);
}
