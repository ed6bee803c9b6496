// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Builder pattern for configuring a logger

use reifylog_core::{LogBackend, LogLevel, Result};

use crate::{
	backend::{ConsoleBackend, FileBackend},
	global,
	logger::Logger,
};

/// Builder for configuring a [`Logger`] in code.
///
/// Unless overridden with [`LoggingBuilder::level`], the built logger's
/// advisory minimum is the minimum across the added backends' levels.
pub struct LoggingBuilder {
	backends: Vec<Box<dyn LogBackend>>,
	level: Option<LogLevel>,
	layout: Option<String>,
	full_path: bool,
}

impl LoggingBuilder {
	pub fn new() -> Self {
		Self {
			backends: Vec::new(),
			level: None,
			layout: None,
			full_path: false,
		}
	}

	/// Add a backend
	pub fn with_backend(mut self, backend: Box<dyn LogBackend>) -> Self {
		self.backends.push(backend);
		self
	}

	/// Add a console backend with default settings
	pub fn with_console(self) -> Self {
		self.with_backend(Box::new(ConsoleBackend::new()))
	}

	/// Add a console backend with custom settings
	pub fn with_console_custom(
		self,
		level: LogLevel,
		use_color: bool,
	) -> Self {
		self.with_backend(Box::new(
			ConsoleBackend::new()
				.with_level(level)
				.with_color(use_color),
		))
	}

	/// Add a rotating file backend; fails on an invalid path pattern
	pub fn with_file(self, pattern: &str) -> Result<Self> {
		Ok(self.with_backend(Box::new(FileBackend::new(pattern)?)))
	}

	/// Add a rotating file backend with its own level
	pub fn with_file_at(
		self,
		pattern: &str,
		level: LogLevel,
	) -> Result<Self> {
		Ok(self.with_backend(Box::new(
			FileBackend::new(pattern)?.with_level(level),
		)))
	}

	/// Override the advisory minimum level
	pub fn level(mut self, level: LogLevel) -> Self {
		self.level = Some(level);
		self
	}

	/// Timestamp layout, chrono strftime syntax
	pub fn layout(mut self, layout: impl Into<String>) -> Self {
		self.layout = Some(layout.into());
		self
	}

	/// Keep full source paths in records
	pub fn full_path(mut self, enabled: bool) -> Self {
		self.full_path = enabled;
		self
	}

	fn apply(self, logger: &Logger) -> Result<()> {
		if let Some(layout) = self.layout {
			logger.set_layout(layout);
		}
		logger.set_full_path(self.full_path);

		let min = self
			.level
			.or_else(|| {
				self.backends
					.iter()
					.map(|backend| backend.level())
					.min()
			})
			.unwrap_or(LogLevel::Debug);
		logger.set_level(min);

		for backend in self.backends {
			backend.init()?;
			logger.register(backend);
		}
		Ok(())
	}

	/// Build the configured logger, initializing every backend
	pub fn build(self) -> Result<Logger> {
		let logger = Logger::new();
		self.apply(&logger)?;
		Ok(logger)
	}

	/// Apply this configuration to the process-wide default logger
	pub fn install(self) -> Result<()> {
		self.apply(global::global())
	}
}

impl Default for LoggingBuilder {
	fn default() -> Self {
		Self::new()
	}
}
