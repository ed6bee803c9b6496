// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Rotating file backend.
//!
//! The backend compiles its path pattern once at construction and keeps
//! the extracted time components of the last-opened file as an explicit
//! snapshot. A rotation check re-extracts the components from wall-clock
//! time and swaps the open handle when any component changed; the check
//! runs on `init` and before every write, under the backend's lock, so
//! concurrent writers race neither the swap nor each other.

use std::{
	fs::{self, File, OpenOptions},
	io::{BufWriter, Write as _},
	path::Path,
};

use chrono::Local;
use parking_lot::Mutex;
use reifylog_core::{Error, LogBackend, LogLevel, Record, Result};

use crate::backend::pattern::PathPattern;

/// Buffer size for the file stream, sized for throughput
const FILE_BUFFER_SIZE: usize = 8 * 1024;

struct FileState {
	/// Time components of the last-opened file; all zeroes until the
	/// first open so the first rotation check always triggers
	snapshot: Vec<i32>,
	out: Option<BufWriter<File>>,
	closed: bool,
}

/// File backend with time-bucket rotation
pub struct FileBackend {
	level: LogLevel,
	pattern: PathPattern,
	state: Mutex<FileState>,
}

impl FileBackend {
	/// Create a file backend for a path pattern.
	///
	/// Fails with a pattern error when the pattern contains an
	/// unsupported placeholder; nothing is opened until
	/// [`LogBackend::init`] runs the first rotation check.
	pub fn new(pattern: &str) -> Result<Self> {
		let pattern = PathPattern::compile(pattern)?;
		let snapshot = vec![0; pattern.component_count()];
		Ok(Self {
			level: LogLevel::Debug,
			pattern,
			state: Mutex::new(FileState {
				snapshot,
				out: None,
				closed: false,
			}),
		})
	}

	pub fn with_level(mut self, level: LogLevel) -> Self {
		self.level = level;
		self
	}

	/// Check whether the current time bucket changed and swap the open
	/// file if it did.
	///
	/// Runs on `init` and before every write; callers driving writes
	/// through [`LogBackend::write`] never need to invoke it directly.
	pub fn rotate(&self) -> Result<()> {
		self.rotate_locked(&mut self.state.lock())
	}

	/// The concrete path the backend currently writes to, if a file
	/// has been opened
	pub fn current_path(&self) -> Option<String> {
		let state = self.state.lock();
		state.out
			.as_ref()
			.map(|_| self.pattern.render(&state.snapshot))
	}

	fn rotate_locked(&self, state: &mut FileState) -> Result<()> {
		if state.closed {
			return Err(Error::Uninitialized);
		}

		let snapshot = self.pattern.snapshot(&Local::now());
		if state.out.is_some() && snapshot == state.snapshot {
			return Ok(());
		}

		// A flush failure aborts the rotation and leaves no open
		// stream; buffered data must not be dropped silently.
		if let Some(mut out) = state.out.take() {
			out.flush()?;
		}

		state.snapshot = snapshot;
		let path = self.pattern.render(&state.snapshot);

		if let Some(parent) = Path::new(&path).parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent)?;
			}
		}

		let file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&path)?;
		state.out =
			Some(BufWriter::with_capacity(FILE_BUFFER_SIZE, file));

		Ok(())
	}
}

impl LogBackend for FileBackend {
	fn name(&self) -> &'static str {
		"file"
	}

	fn level(&self) -> LogLevel {
		self.level
	}

	fn init(&self) -> Result<()> {
		self.rotate()
	}

	fn write(&self, record: &Record) -> Result<()> {
		if record.level < self.level {
			return Ok(());
		}

		// Rotation check and append form one critical section, so
		// two writers racing a bucket boundary produce exactly one
		// swap and no write lands on a closing handle.
		let mut state = self.state.lock();
		self.rotate_locked(&mut state)?;

		let out = state.out.as_mut().ok_or(Error::Uninitialized)?;
		writeln!(out, "{record}")?;
		Ok(())
	}

	fn flush(&self) -> Result<()> {
		if let Some(out) = self.state.lock().out.as_mut() {
			out.flush()?;
		}
		Ok(())
	}

	fn close(&self) -> Result<()> {
		let mut state = self.state.lock();
		state.closed = true;
		if let Some(mut out) = state.out.take() {
			out.flush()?;
		}
		Ok(())
	}
}
