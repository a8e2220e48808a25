// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! write:  write_atomic_async()  temp file in same dir --> rename over target
//! ```

pub mod write;
