/// Brand and platform breakdowns, hold time and sell-through
pub mod analytics;
/// Inventory totals and status tabs
pub mod inventory;
/// Per-item profit, status badges and display formatting
pub mod presentation;
/// Product lifecycle operations (the only writers)
pub mod product;
/// Profitable/loss partitioning and margins
pub mod profit;
/// Read access to product rows
pub mod repository;
/// Sales history figures
pub mod sales;
/// Dashboard totals
pub mod stats;
