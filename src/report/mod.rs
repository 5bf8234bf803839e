//! Result accumulation and report rendering.
//!
//! - `counts`: per-category tallies produced by one scan
//! - `template`: swappable category labels (built-in or loaded from JSON)
//! - `report`: the fixed-order text report and its JSON counterpart

pub mod counts;
pub mod report;
pub mod template;

#[cfg(test)]
mod tests;
