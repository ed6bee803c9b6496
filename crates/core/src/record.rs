// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Log record type

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

/// A single formatted log entry.
///
/// Records are created fresh per admitted log call and are immutable.
/// The timestamp is rendered into `time` by the logger using its layout
/// before dispatch, so backends append the record text verbatim without
/// knowing about layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
	/// Log severity level
	pub level: LogLevel,
	/// Wall-clock timestamp, already rendered with the logger layout
	pub time: String,
	/// Call site as `file:line`, when captured by a macro
	pub source: Option<String>,
	/// Pre-formatted log message
	pub message: String,
}

impl Record {
	pub fn new(
		level: LogLevel,
		time: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		Self {
			level,
			time: time.into(),
			source: None,
			message: message.into(),
		}
	}

	pub fn with_source(mut self, source: impl Into<String>) -> Self {
		self.source = Some(source.into());
		self
	}
}

impl fmt::Display for Record {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.source {
			Some(source) => write!(
				f,
				"[{}] [{}] ({}) {}",
				self.time, self.level, source, self.message
			),
			None => write!(
				f,
				"[{}] [{}] {}",
				self.time, self.level, self.message
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_without_source() {
		let record = Record::new(
			LogLevel::Info,
			"2024-03-07 10:15:00",
			"service started",
		);
		assert_eq!(
			record.to_string(),
			"[2024-03-07 10:15:00] [INFO] service started"
		);
	}

	#[test]
	fn test_display_with_source() {
		let record = Record::new(
			LogLevel::Error,
			"2024-03-07 10:15:00",
			"bind failed",
		)
		.with_source("server.rs:42");
		assert_eq!(
			record.to_string(),
			"[2024-03-07 10:15:00] [ERROR] (server.rs:42) bind failed"
		);
	}
}
