// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Log severity levels and flag resolution

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diagnostic;

/// Log severity levels, ordered from least to most severe
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
)]
pub enum LogLevel {
	Debug = 0,
	Info = 1,
	Warn = 2,
	Error = 3,
	Fatal = 4,
}

impl LogLevel {
	/// All levels in ordinal order
	pub const ALL: [LogLevel; 5] = [
		LogLevel::Debug,
		LogLevel::Info,
		LogLevel::Warn,
		LogLevel::Error,
		LogLevel::Fatal,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Debug => "DEBUG",
			LogLevel::Info => "INFO",
			LogLevel::Warn => "WARN",
			LogLevel::Error => "ERROR",
			LogLevel::Fatal => "FATAL",
		}
	}

	/// Resolve a level flag to a level.
	///
	/// Matching is case-insensitive and ignores surrounding whitespace.
	/// An unrecognized flag resolves to `default` and records a
	/// diagnostic through [`crate::diagnostic`]; it is never an error,
	/// so a bad configuration value cannot block logging. Callers that
	/// need strictness inspect the diagnostic side channel.
	pub fn resolve(flag: &str, default: LogLevel) -> LogLevel {
		let wanted = flag.trim();
		for level in LogLevel::ALL {
			if wanted.eq_ignore_ascii_case(level.as_str()) {
				return level;
			}
		}
		diagnostic::note_unknown_level(flag);
		default
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ordering() {
		assert!(LogLevel::Debug < LogLevel::Info);
		assert!(LogLevel::Info < LogLevel::Warn);
		assert!(LogLevel::Warn < LogLevel::Error);
		assert!(LogLevel::Error < LogLevel::Fatal);
		assert_eq!(LogLevel::ALL.iter().max(), Some(&LogLevel::Fatal));
	}

	#[test]
	fn test_resolve_exact() {
		assert_eq!(
			LogLevel::resolve("ERROR", LogLevel::Debug),
			LogLevel::Error
		);
	}

	#[test]
	fn test_resolve_case_and_whitespace() {
		assert_eq!(
			LogLevel::resolve("  warn \t", LogLevel::Debug),
			LogLevel::Warn
		);
		assert_eq!(
			LogLevel::resolve("Info", LogLevel::Debug),
			LogLevel::Info
		);
	}

	#[test]
	fn test_resolve_unknown_falls_back_with_diagnostic() {
		let before = diagnostic::unknown_level_count();
		assert_eq!(
			LogLevel::resolve("VERBOSE", LogLevel::Warn),
			LogLevel::Warn
		);
		// Other tests bump the process-wide counter concurrently
		assert!(diagnostic::unknown_level_count() > before);
		assert!(diagnostic::last_unknown_level().is_some());
	}

	#[test]
	fn test_display_matches_flag() {
		for level in LogLevel::ALL {
			assert_eq!(level.to_string(), level.as_str());
		}
	}
}
