// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logger, backends and rotation engine for reifylog.
//!
//! Records are dispatched synchronously: a log call formats the record
//! once and hands it to every registered backend, each of which applies
//! its own admission threshold. The file backend rotates by comparing
//! the time components extracted from its path pattern against the
//! components of the last-opened file and swapping the buffered handle
//! when the bucket changes.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod backend;
mod builder;
mod config;
pub mod global;
mod logger;
mod macros;

pub use backend::{
	ConsoleBackend, FileBackend,
	pattern::{PathPattern, TimeComponent},
};
pub use builder::LoggingBuilder;
pub use config::{
	ConsoleWriterConfig, FileWriterConfig, LogConfig, setup,
	setup_from_file, setup_global,
};
pub use logger::{DEFAULT_LAYOUT, Logger};
pub use reifylog_core::{
	Diagnostics, Error, LogBackend, LogLevel, Record, Result, diagnostic,
};
