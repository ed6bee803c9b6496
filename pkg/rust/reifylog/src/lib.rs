// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Pluggable leveled logging with time-bucket file rotation.
//!
//! Application code logs through a [`Logger`] (or the process-wide
//! default behind the [`debug!`]..[`fatal!`] macros); the logger fans
//! every record out to the registered backends, each with its own
//! minimum severity. The file backend derives its path from a pattern
//! with time placeholders (`%Y%M%D%H%m`) and swaps the file whenever
//! the current time leaves the bucket the pattern names.
//!
//! # Example
//!
//! ```no_run
//! use reifylog::{LogLevel, LoggingBuilder};
//!
//! let logger = LoggingBuilder::new()
//!     .with_console()
//!     .with_file_at("/var/log/app/error-%Y%M%D%H.log", LogLevel::Warn)?
//!     .build()?;
//!
//! logger.info("service started");
//! logger.close()?;
//! # Ok::<(), reifylog::Error>(())
//! ```
//!
//! Or through the default logger and a decoded configuration:
//!
//! ```no_run
//! use reifylog::{FileWriterConfig, LogConfig, setup_global};
//!
//! let config = LogConfig {
//!     level: "INFO".to_string(),
//!     file_writer: FileWriterConfig {
//!         log_path: "/var/log/app/app-%Y%M%D.log".to_string(),
//!         enable: true,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! setup_global(&config)?;
//! reifylog::info!("configured");
//! # Ok::<(), reifylog::Error>(())
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use reifylog_core::{
	Diagnostics, Error, LogBackend, LogLevel, Record, Result, diagnostic,
};
pub use reifylog_logging::{
	ConsoleBackend, ConsoleWriterConfig, DEFAULT_LAYOUT, FileBackend,
	FileWriterConfig, LogConfig, Logger, LoggingBuilder, PathPattern,
	TimeComponent, debug, error, fatal, global, info, log, setup,
	setup_from_file, setup_global, warn,
};
