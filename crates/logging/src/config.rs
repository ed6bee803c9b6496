// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Configuration-driven logger setup.
//!
//! Decodes a JSON logging configuration, resolves per-writer level
//! flags, computes the effective minimum level across enabled writers
//! and constructs a fully wired [`Logger`]. Setup-time errors (bad
//! rotation pattern, failed initial open, undecodable config) abort the
//! affected writer's activation and propagate to the caller; nothing is
//! partially registered.

use std::{fs, path::Path};

use reifylog_core::{LogBackend, LogLevel, Result};
use serde::{Deserialize, Serialize};

use crate::{
	backend::{ConsoleBackend, FileBackend},
	global,
	logger::Logger,
};

/// File writer section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWriterConfig {
	/// Level flag; empty inherits the global flag
	pub level: String,
	/// Rotation path pattern
	pub log_path: String,
	pub enable: bool,
}

/// Console writer section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleWriterConfig {
	/// Level flag; empty inherits the global flag
	pub level: String,
	pub enable: bool,
	pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
	/// Global level flag; empty means DEBUG
	pub level: String,
	/// Keep full source paths in records
	pub full_path: bool,
	pub file_writer: FileWriterConfig,
	pub console_writer: ConsoleWriterConfig,
}

/// Resolve a configured flag, treating an empty flag as unset
fn resolve_or(flag: &str, default: LogLevel) -> LogLevel {
	if flag.trim().is_empty() {
		return default;
	}
	LogLevel::resolve(flag, default)
}

impl LogConfig {
	fn global_level(&self) -> LogLevel {
		resolve_or(&self.level, LogLevel::Debug)
	}

	/// Effective minimum level across all enabled writers.
	///
	/// A writer without its own flag inherits the global one. The
	/// second element names the first writer, in fixed enumeration
	/// order (file, console), that achieves the minimum; with no
	/// writer enabled it is `"global"` and the level is FATAL. The
	/// name is diagnostic only.
	pub fn effective_level(&self) -> (LogLevel, &'static str) {
		let global = self.global_level();
		let mut min = LogLevel::Fatal;
		let mut by = "global";

		let writers = [
			(
				self.file_writer.enable,
				&self.file_writer.level,
				"file_writer",
			),
			(
				self.console_writer.enable,
				&self.console_writer.level,
				"console_writer",
			),
		];
		for (enabled, flag, name) in writers {
			if !enabled {
				continue;
			}
			let level = resolve_or(flag, global);
			if level < min {
				min = level;
				by = name;
			} else if level == min && by == "global" {
				by = name;
			}
		}
		(min, by)
	}
}

fn configure(config: &LogConfig, logger: &Logger) -> Result<()> {
	let global_level = config.global_level();
	logger.set_full_path(config.full_path);
	let (min, _) = config.effective_level();
	logger.set_level(min);

	if config.file_writer.enable {
		let backend = FileBackend::new(&config.file_writer.log_path)?
			.with_level(resolve_or(
				&config.file_writer.level,
				global_level,
			));
		backend.init()?;
		logger.register(Box::new(backend));
	}

	if config.console_writer.enable {
		let backend = ConsoleBackend::new()
			.with_level(resolve_or(
				&config.console_writer.level,
				global_level,
			))
			.with_color(config.console_writer.color);
		backend.init()?;
		logger.register(Box::new(backend));
	}

	Ok(())
}

/// Construct a logger from a configuration
pub fn setup(config: &LogConfig) -> Result<Logger> {
	let logger = Logger::new();
	configure(config, &logger)?;
	Ok(logger)
}

/// Configure the process-wide default logger
pub fn setup_global(config: &LogConfig) -> Result<()> {
	configure(config, global::global())
}

/// Construct a logger from a JSON configuration file
pub fn setup_from_file(path: impl AsRef<Path>) -> Result<Logger> {
	let content = fs::read_to_string(path)?;
	let config: LogConfig = serde_json::from_str(&content)?;
	setup(&config)
}

#[cfg(test)]
mod tests {
	use reifylog_core::{Error, diagnostic};
	use reifylog_testing::temp_dir;

	use super::*;

	fn decode(json: &str) -> LogConfig {
		serde_json::from_str(json).unwrap()
	}

	#[test]
	fn test_decode_with_defaults() {
		let config = decode("{}");
		assert!(!config.file_writer.enable);
		assert!(!config.console_writer.enable);
		assert_eq!(config.effective_level().0, LogLevel::Fatal);
	}

	#[test]
	fn test_effective_level_is_minimum_across_enabled() {
		let config = decode(
			r#"{
			"level": "ERROR",
			"file_writer": {"level": "WARN", "enable": true},
			"console_writer": {"level": "INFO", "enable": true}
		}"#,
		);
		assert_eq!(
			config.effective_level(),
			(LogLevel::Info, "console_writer")
		);
	}

	#[test]
	fn test_effective_level_ignores_disabled_writers() {
		let config = decode(
			r#"{
			"file_writer": {"level": "DEBUG", "enable": false},
			"console_writer": {"level": "ERROR", "enable": true}
		}"#,
		);
		assert_eq!(
			config.effective_level(),
			(LogLevel::Error, "console_writer")
		);
	}

	#[test]
	fn test_effective_level_tie_reports_first_writer() {
		let config = decode(
			r#"{
			"file_writer": {"level": "WARN", "enable": true},
			"console_writer": {"level": "WARN", "enable": true}
		}"#,
		);
		assert_eq!(
			config.effective_level(),
			(LogLevel::Warn, "file_writer")
		);
	}

	#[test]
	fn test_writer_without_flag_inherits_global() {
		let config = decode(
			r#"{
			"level": "WARN",
			"console_writer": {"enable": true}
		}"#,
		);
		assert_eq!(
			config.effective_level(),
			(LogLevel::Warn, "console_writer")
		);
	}

	#[test]
	fn test_unknown_flag_resolves_with_diagnostic() {
		let before = diagnostic::unknown_level_count();
		let config = decode(
			r#"{
			"level": "INFO",
			"console_writer": {"level": "VERBOSE", "enable": true}
		}"#,
		);
		// VERBOSE falls back to the global level
		assert_eq!(config.effective_level().0, LogLevel::Info);
		assert!(diagnostic::unknown_level_count() > before);
	}

	#[test]
	fn test_setup_registers_enabled_file_writer() {
		temp_dir(|dir| {
			let config = LogConfig {
				level: "INFO".to_string(),
				file_writer: FileWriterConfig {
					level: String::new(),
					log_path: format!(
						"{}/setup-%Y.log",
						dir.to_str().unwrap()
					),
					enable: true,
				},
				..Default::default()
			};
			let logger = setup(&config).unwrap();
			assert_eq!(logger.level(), LogLevel::Info);
			logger.info("wired");
			logger.close().unwrap();
			// The initial rotation already created the file
			assert_eq!(std::fs::read_dir(dir)?.count(), 1);
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn test_setup_rejects_bad_pattern() {
		let config = LogConfig {
			file_writer: FileWriterConfig {
				level: String::new(),
				log_path: "/tmp/bad-%q.log".to_string(),
				enable: true,
			},
			..Default::default()
		};
		assert!(matches!(
			setup(&config),
			Err(Error::Pattern { .. })
		));
	}

	#[test]
	fn test_setup_from_file_rejects_bad_json() {
		temp_dir(|dir| {
			let path = dir.join("log.json");
			std::fs::write(&path, b"{ not json")?;
			assert!(matches!(
				setup_from_file(&path),
				Err(Error::Config(_))
			));
			Ok(())
		})
		.unwrap();
	}
}
