// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logger owning the registered backends and dispatching records

use std::{
	fmt::Write as _,
	path::Path,
	process,
	sync::atomic::{AtomicBool, Ordering},
};

use chrono::Local;
use parking_lot::RwLock;
use reifylog_core::{LogBackend, LogLevel, Record, Result, diagnostic};

/// Default timestamp layout, chrono strftime syntax
pub const DEFAULT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Logger holding an ordered set of backends and an advisory minimum
/// level.
///
/// The minimum level only short-circuits record construction: it is
/// expected to be the minimum across all registered backends, and each
/// backend re-checks its own threshold on every write. Logging methods
/// never fail; write errors are swallowed and counted through
/// [`reifylog_core::diagnostic`] so a broken sink cannot destabilize
/// the calling application. Closing the logger flushes and closes every
/// backend; records logged after close are silently dropped.
pub struct Logger {
	level: RwLock<LogLevel>,
	layout: RwLock<String>,
	full_path: AtomicBool,
	backends: RwLock<Vec<Box<dyn LogBackend>>>,
	closed: AtomicBool,
}

impl Logger {
	/// Create a logger with no backends, admitting everything
	pub fn new() -> Self {
		Self {
			level: RwLock::new(LogLevel::Debug),
			layout: RwLock::new(DEFAULT_LAYOUT.to_string()),
			full_path: AtomicBool::new(false),
			backends: RwLock::new(Vec::new()),
			closed: AtomicBool::new(false),
		}
	}

	/// Register a backend.
	///
	/// Dispatch order is registration order. The backend must already
	/// be initialized; registration never calls
	/// [`LogBackend::init`].
	pub fn register(&self, backend: Box<dyn LogBackend>) {
		self.backends.write().push(backend);
	}

	/// Set the advisory minimum level
	pub fn set_level(&self, level: LogLevel) {
		*self.level.write() = level;
	}

	pub fn level(&self) -> LogLevel {
		*self.level.read()
	}

	/// Set the timestamp layout, chrono strftime syntax
	pub fn set_layout(&self, layout: impl Into<String>) {
		*self.layout.write() = layout.into();
	}

	/// Keep the full source path in records instead of the file name
	pub fn set_full_path(&self, enabled: bool) {
		self.full_path.store(enabled, Ordering::Relaxed);
	}

	pub fn log(&self, level: LogLevel, message: impl Into<String>) {
		self.dispatch(level, None, message.into());
	}

	/// Log with an explicit call site, used by the logging macros
	pub fn log_at(
		&self,
		level: LogLevel,
		file: &str,
		line: u32,
		message: impl Into<String>,
	) {
		self.dispatch(level, Some((file, line)), message.into());
	}

	pub fn debug(&self, message: impl Into<String>) {
		self.dispatch(LogLevel::Debug, None, message.into());
	}

	pub fn info(&self, message: impl Into<String>) {
		self.dispatch(LogLevel::Info, None, message.into());
	}

	pub fn warn(&self, message: impl Into<String>) {
		self.dispatch(LogLevel::Warn, None, message.into());
	}

	pub fn error(&self, message: impl Into<String>) {
		self.dispatch(LogLevel::Error, None, message.into());
	}

	/// Log at fatal level, then terminate the process.
	///
	/// The record is dispatched and every backend flushed best-effort
	/// before the process exits with status 1.
	pub fn fatal(&self, message: impl Into<String>) -> ! {
		self.dispatch(LogLevel::Fatal, None, message.into());
		let _ = self.flush();
		process::exit(1);
	}

	/// [`Logger::fatal`] with an explicit call site, used by the
	/// logging macros
	pub fn fatal_at(
		&self,
		file: &str,
		line: u32,
		message: impl Into<String>,
	) -> ! {
		self.dispatch(
			LogLevel::Fatal,
			Some((file, line)),
			message.into(),
		);
		let _ = self.flush();
		process::exit(1);
	}

	fn dispatch(
		&self,
		level: LogLevel,
		source: Option<(&str, u32)>,
		message: String,
	) {
		if self.closed.load(Ordering::Acquire) {
			return;
		}
		if level < *self.level.read() {
			return;
		}

		let now = Local::now();
		// An invalid layout surfaces as a fmt error; fall back to
		// the default layout instead of panicking inside a log call
		let mut time = String::new();
		if write!(time, "{}", now.format(&self.layout.read())).is_err()
		{
			time.clear();
			let _ = write!(time, "{}", now.format(DEFAULT_LAYOUT));
		}
		let mut record = Record::new(level, time, message);
		if let Some((file, line)) = source {
			record = record
				.with_source(self.format_source(file, line));
		}

		for backend in self.backends.read().iter() {
			if backend.write(&record).is_err() {
				diagnostic::note_write_failure();
			}
		}
	}

	fn format_source(&self, file: &str, line: u32) -> String {
		if self.full_path.load(Ordering::Relaxed) {
			return format!("{file}:{line}");
		}
		let name = Path::new(file)
			.file_name()
			.map(|name| name.to_string_lossy())
			.unwrap_or_else(|| file.into());
		format!("{name}:{line}")
	}

	/// Flush every backend; the first error wins but all are attempted
	pub fn flush(&self) -> Result<()> {
		let mut first_error = None;
		for backend in self.backends.read().iter() {
			if let Err(err) = backend.flush() {
				first_error.get_or_insert(err);
			}
		}
		match first_error {
			Some(err) => Err(err),
			None => Ok(()),
		}
	}

	/// Flush and close every backend in registration order.
	///
	/// Best-effort teardown: the first error is returned but every
	/// backend is still attempted. Further logging calls are silently
	/// dropped; a second close is a no-op.
	pub fn close(&self) -> Result<()> {
		if self.closed.swap(true, Ordering::AcqRel) {
			return Ok(());
		}
		let mut first_error = None;
		for backend in self.backends.read().iter() {
			if let Err(err) = backend.flush() {
				first_error.get_or_insert(err);
			}
			if let Err(err) = backend.close() {
				first_error.get_or_insert(err);
			}
		}
		match first_error {
			Some(err) => Err(err),
			None => Ok(()),
		}
	}
}

impl Default for Logger {
	fn default() -> Self {
		Self::new()
	}
}

impl Drop for Logger {
	fn drop(&mut self) {
		let _ = self.close();
	}
}
