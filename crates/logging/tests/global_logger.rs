// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Lifecycle of the process-wide default logger.
//!
//! Everything lives in one test function: the default logger is
//! process-wide state and the phases below depend on their order.

use std::fs;

use reifylog_logging::{FileBackend, LogBackend, LogLevel, global, info};
use reifylog_testing::temp_dir;

#[test]
fn test_default_logger_lifecycle() {
	temp_dir(|dir| {
		// Logging before any backend is registered is a no-op, not
		// a crash
		global::info("into the void");
		info!("still into the void");

		let path = dir.join("global.log");
		let backend = FileBackend::new(path.to_str().unwrap())
			.map_err(io_other)?;
		backend.init().map_err(io_other)?;
		global::register(Box::new(backend));
		global::set_level(LogLevel::Debug);

		global::info("direct call");
		info!("macro call with {}", "arguments");
		global::flush().map_err(io_other)?;

		let content = fs::read_to_string(&path)?;
		assert!(content.contains("direct call"));
		assert!(content.contains("macro call with arguments"));
		// The macro captured this file as the call site
		assert!(content.contains("global_logger.rs:"));
		assert!(!content.contains("into the void"));

		// After close, records are dropped silently
		global::close().map_err(io_other)?;
		global::info("dropped");
		let content = fs::read_to_string(&path)?;
		assert!(!content.contains("dropped"));
		Ok(())
	})
	.unwrap();
}

fn io_other(err: reifylog_logging::Error) -> std::io::Error {
	std::io::Error::other(err)
}
