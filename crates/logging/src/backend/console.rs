// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Console backend

use std::io::{self, Write as _};

use colored::Colorize;
use reifylog_core::{LogBackend, LogLevel, Record, Result};

/// Console backend writing to stdout, optionally colorized.
///
/// Holds no persistent resource; closing it only flushes the standard
/// streams.
pub struct ConsoleBackend {
	level: LogLevel,
	color: bool,
	stderr_for_errors: bool,
}

impl ConsoleBackend {
	pub fn new() -> Self {
		Self {
			level: LogLevel::Debug,
			color: true,
			stderr_for_errors: true,
		}
	}

	pub fn with_level(mut self, level: LogLevel) -> Self {
		self.level = level;
		self
	}

	/// Enable or disable colored output
	pub fn with_color(mut self, enabled: bool) -> Self {
		self.color = enabled;
		self
	}

	/// Send error and fatal level logs to stderr instead of stdout
	pub fn with_stderr_for_errors(mut self, enabled: bool) -> Self {
		self.stderr_for_errors = enabled;
		self
	}

	fn render(&self, record: &Record) -> String {
		if !self.color {
			return record.to_string();
		}
		let flag = record.level.as_str();
		let flag = match record.level {
			LogLevel::Debug => flag.blue(),
			LogLevel::Info => flag.green(),
			LogLevel::Warn => flag.yellow(),
			LogLevel::Error => flag.red(),
			LogLevel::Fatal => flag.bright_red(),
		};
		match &record.source {
			Some(source) => format!(
				"[{}] [{}] ({}) {}",
				record.time, flag, source, record.message
			),
			None => format!(
				"[{}] [{}] {}",
				record.time, flag, record.message
			),
		}
	}
}

impl Default for ConsoleBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl LogBackend for ConsoleBackend {
	fn name(&self) -> &'static str {
		"console"
	}

	fn level(&self) -> LogLevel {
		self.level
	}

	fn init(&self) -> Result<()> {
		Ok(())
	}

	fn write(&self, record: &Record) -> Result<()> {
		if record.level < self.level {
			return Ok(());
		}
		let line = self.render(record);
		if self.stderr_for_errors && record.level >= LogLevel::Error {
			writeln!(io::stderr().lock(), "{line}")?;
		} else {
			writeln!(io::stdout().lock(), "{line}")?;
		}
		Ok(())
	}

	fn flush(&self) -> Result<()> {
		io::stdout().lock().flush()?;
		Ok(())
	}

	fn close(&self) -> Result<()> {
		self.flush()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_write_below_level_is_noop() {
		let backend = ConsoleBackend::new().with_level(LogLevel::Warn);
		let record = Record::new(
			LogLevel::Debug,
			"2024-03-07 10:15:00",
			"ignored",
		);
		backend.write(&record).unwrap();
	}

	#[test]
	fn test_render_plain_matches_record() {
		let backend = ConsoleBackend::new().with_color(false);
		let record = Record::new(
			LogLevel::Info,
			"2024-03-07 10:15:00",
			"started",
		);
		assert_eq!(backend.render(&record), record.to_string());
	}

	#[test]
	fn test_close_is_repeatable() {
		let backend = ConsoleBackend::new();
		backend.close().unwrap();
		backend.close().unwrap();
	}
}
