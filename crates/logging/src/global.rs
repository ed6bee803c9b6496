// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Process-wide default logger.
//!
//! One explicitly constructed [`Logger`] singleton with the same
//! lifecycle contract as any other instance. Logging through it before
//! any backend is registered dispatches to an empty backend list and is
//! therefore a no-op, never a crash; after [`close`] records are
//! silently dropped.

use once_cell::sync::Lazy;
use reifylog_core::{LogBackend, LogLevel, Result};

use crate::logger::Logger;

static GLOBAL: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide default logger
pub fn global() -> &'static Logger {
	&GLOBAL
}

/// Register a backend with the default logger
pub fn register(backend: Box<dyn LogBackend>) {
	GLOBAL.register(backend);
}

/// Set the default logger's advisory minimum level
pub fn set_level(level: LogLevel) {
	GLOBAL.set_level(level);
}

/// Set the default logger's timestamp layout
pub fn set_layout(layout: impl Into<String>) {
	GLOBAL.set_layout(layout);
}

/// Keep full source paths in the default logger's records
pub fn set_full_path(enabled: bool) {
	GLOBAL.set_full_path(enabled);
}

pub fn log(level: LogLevel, message: impl Into<String>) {
	GLOBAL.log(level, message);
}

/// Log with an explicit call site, used by the logging macros
pub fn log_at(
	level: LogLevel,
	file: &str,
	line: u32,
	message: impl Into<String>,
) {
	GLOBAL.log_at(level, file, line, message);
}

pub fn debug(message: impl Into<String>) {
	GLOBAL.debug(message);
}

pub fn info(message: impl Into<String>) {
	GLOBAL.info(message);
}

pub fn warn(message: impl Into<String>) {
	GLOBAL.warn(message);
}

pub fn error(message: impl Into<String>) {
	GLOBAL.error(message);
}

/// Log at fatal level through the default logger, then terminate the
/// process
pub fn fatal(message: impl Into<String>) -> ! {
	GLOBAL.fatal(message)
}

/// [`fatal`] with an explicit call site, used by the logging macros
pub fn fatal_at(file: &str, line: u32, message: impl Into<String>) -> ! {
	GLOBAL.fatal_at(file, line, message)
}

/// Flush every backend of the default logger
pub fn flush() -> Result<()> {
	GLOBAL.flush()
}

/// Flush and close every backend of the default logger.
///
/// Records logged afterwards are silently dropped.
pub fn close() -> Result<()> {
	GLOBAL.close()
}
