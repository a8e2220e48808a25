// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Documentation version sync.
//!
//! ```text
//! Versions --> ReadmeRewriter (badge -> core -> siblings)
//!                   |
//!                   v
//! targets --> update_targets() --> UpdateSummary
//!             each file once, failures isolated
//! ```

pub mod rewrite;
pub mod target;


pub use rewrite::{ReadmeRewriter, RewriteRule, VersionSource};
pub use target::{TargetOutcome, TargetReport, UpdateSummary, update_target, update_targets};
