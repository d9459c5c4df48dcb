//! `gildedrose-simulation` — the shop that runs the day loop.
//!
//! The inventory crate owns the aging rules; this crate owns the loop that
//! drives them day after day and the bookkeeping around it.

pub mod shop;

pub use shop::Shop;
