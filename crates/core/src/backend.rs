// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Backend capability trait implemented by every log sink

use crate::{Result, level::LogLevel, record::Record};

/// A destination for log records.
///
/// Backends are registered with a logger and receive every record the
/// logger dispatches. Each backend carries its own admission threshold,
/// fixed at construction time: [`LogBackend::write`] must return `Ok(())`
/// without writing when `record.level` is below [`LogBackend::level`].
/// The logger's global minimum is the minimum across all registered
/// backends, not a per-backend ceiling, so the in-backend check is
/// mandatory even when the logger already filtered.
///
/// All methods take `&self`; backends with mutable state (open files,
/// buffers) synchronize internally so one logger can be shared across
/// threads.
pub trait LogBackend: Send + Sync {
	/// Short identifier used in diagnostics
	fn name(&self) -> &'static str;

	/// Admission threshold for this backend
	fn level(&self) -> LogLevel;

	/// Prepare the backend's resource, e.g. open the initial file.
	///
	/// Called once by the setup layer before the backend is
	/// registered, never by the logger itself.
	fn init(&self) -> Result<()>;

	/// Write one record.
	///
	/// Must be a no-op returning `Ok(())` when
	/// `record.level < self.level()`.
	fn write(&self, record: &Record) -> Result<()>;

	/// Force buffered data to the underlying resource without closing
	fn flush(&self) -> Result<()>;

	/// Flush then release the backend's resource.
	///
	/// Closing an already-closed backend is a no-op; it must never
	/// panic.
	fn close(&self) -> Result<()>;
}
