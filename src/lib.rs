//! `ResaleLedger` - A Discord bot for tracking resale inventory
//!
//! Each stored product is one line of stock bought for resale: what was paid,
//! how many units are held, what it is listed for, and what it finally sold
//! for and where. Products move `in_stock` → `listed` → `pending` → `sold`,
//! and only a sold product carries a sold price.
//!
//! The crate is layered:
//! - [`entities`] defines the `products` table.
//! - [`crate::core::product`] is the only writer. It validates money (zero up to
//!   99,999,999.99) and stock before anything reaches the table.
//! - [`crate::core::repository`] reads pages, search results and the full collection.
//! - The remaining [`crate::core`] modules are pure aggregators over a slice of
//!   products: dashboard totals, sales history, profit partitioning, and
//!   brand and platform analytics.
//! - [`bot`] renders those reports as Discord embeds and exposes the
//!   lifecycle operations as `/product` subcommands.
//!
//! Money is `rust_decimal::Decimal` throughout; only percentages and day
//! counts are floating point.

// Deny lints that point at real bugs
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on everything else worth fixing
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    // Money and report code must not panic or compare floats loosely
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::float_cmp,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::exit,
    clippy::clone_on_ref_ptr,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,
    clippy::large_types_passed_by_value,
    clippy::inefficient_to_string,
    clippy::cognitive_complexity,
    clippy::too_many_lines,
    clippy::match_same_arms,
    clippy::enum_glob_use,
    clippy::wildcard_imports,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

// `missing_docs` stays a warning: `poise::command` expands to undocumented items.

/// Discord surface: report commands, `/product` subcommands, autocomplete
pub mod bot;
/// Database connection, table creation and the TOML seed file
pub mod config;
/// Product lifecycle writes, repository reads and the report aggregators
pub mod core;
/// The `products` table and its status enum
pub mod entities;
/// Crate-wide `Error` and `Result`
pub mod errors;

#[cfg(test)]
pub mod test_utils;
