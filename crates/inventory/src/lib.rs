//! Inventory domain module: items, categories, and the end-of-day aging rules.
//!
//! This crate contains the business rules for inventory aging, implemented
//! purely as deterministic domain logic (no IO, no logging, no storage).

pub mod aging;
pub mod catalog;
pub mod category;
pub mod item;
pub mod policy;
pub mod quality;

pub use aging::advance_one_day;
pub use catalog::{items_from_json, items_to_json};
pub use category::{AGED_BRIE, BACKSTAGE_PASS, CONJURED, ItemCategory, SULFURAS};
pub use item::Item;
pub use policy::{AgingPolicy, CONJURED_DOUBLE_DECAY_ENV};
pub use quality::Quality;
