// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             tag / readme / settings
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   dsr.toml, CLI overrides |
//!              '------+-------------+------'
//!                     |             |
//!                     v             v
//!                  catalog        readme
//!              libs.versions   rewrite rules,
//!                  .toml       per-file update
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod catalog;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod readme;
pub mod utility;
