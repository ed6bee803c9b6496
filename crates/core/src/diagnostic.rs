// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Diagnostic side channel for failures that must not disturb logging
//! callers.
//!
//! Per-record write failures are swallowed by dispatch and unrecognized
//! level flags resolve to a default; both are recorded here instead of
//! being raised, so operators can still observe them.

use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use parking_lot::Mutex;

static UNKNOWN_LEVELS: AtomicU64 = AtomicU64::new(0);
static WRITE_FAILURES: AtomicU64 = AtomicU64::new(0);
static LAST_UNKNOWN_LEVEL: Lazy<Mutex<Option<String>>> =
	Lazy::new(|| Mutex::new(None));

/// Snapshot of the diagnostic counters
#[derive(Debug, Clone)]
pub struct Diagnostics {
	pub unknown_levels: u64,
	pub write_failures: u64,
	pub last_unknown_level: Option<String>,
}

/// Record an unrecognized level flag
pub fn note_unknown_level(flag: &str) {
	UNKNOWN_LEVELS.fetch_add(1, Ordering::Relaxed);
	*LAST_UNKNOWN_LEVEL.lock() = Some(flag.trim().to_string());
}

/// Record a backend write failure swallowed by dispatch
pub fn note_write_failure() {
	WRITE_FAILURES.fetch_add(1, Ordering::Relaxed);
}

/// Total unrecognized level flags seen since process start
pub fn unknown_level_count() -> u64 {
	UNKNOWN_LEVELS.load(Ordering::Relaxed)
}

/// Total backend write failures swallowed since process start
pub fn write_failure_count() -> u64 {
	WRITE_FAILURES.load(Ordering::Relaxed)
}

/// The most recent unrecognized level flag, if any
pub fn last_unknown_level() -> Option<String> {
	LAST_UNKNOWN_LEVEL.lock().clone()
}

/// Get a coherent view of all diagnostic counters
pub fn snapshot() -> Diagnostics {
	Diagnostics {
		unknown_levels: unknown_level_count(),
		write_failures: write_failure_count(),
		last_unknown_level: last_unknown_level(),
	}
}
