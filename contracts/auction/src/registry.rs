use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::types::{Auction, ItemEntry, MAX_ITEMS};

impl Auction {
    pub fn holds_item(&self, item_type: &Address, item_id: u64) -> bool {
        self.items
            .iter()
            .any(|entry| entry.item_id == item_id && entry.item_type == *item_type)
    }

    pub fn register_item(&mut self, item_type: &Address, item_id: u64) -> Result<(), Error> {
        if self.items.len() >= MAX_ITEMS {
            return Err(Error::ItemCapacityExceeded);
        }
        if self.holds_item(item_type, item_id) {
            return Err(Error::ItemAlreadyRegistered);
        }
        self.items.push_back(ItemEntry {
            item_id,
            item_type: item_type.clone(),
        });
        Ok(())
    }

    /// Empties the registry, returning its entries in insertion order.
    pub fn drain_items(&mut self, env: &Env) -> Vec<ItemEntry> {
        core::mem::replace(&mut self.items, Vec::new(env))
    }
}
