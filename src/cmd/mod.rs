// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   tag, readme, settings
//! ```

pub mod config;
pub mod readme;
pub mod tag;

#[cfg(test)]
mod tests;
