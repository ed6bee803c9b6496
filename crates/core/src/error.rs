// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Error type shared by all logging crates

/// Errors returned by logging setup, rotation and backend I/O.
///
/// Unrecognized level flags are deliberately not represented here: they
/// resolve to a default and are reported through
/// [`crate::diagnostic`] so a bad configuration value can never block
/// logging.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A `%` in a rotation path pattern is followed by a character
	/// outside the supported set. Detected at setup, fatal to that
	/// backend's construction.
	#[error(
		"invalid rotate pattern `{pattern}`: unknown placeholder `%{found}`"
	)]
	Pattern {
		pattern: String,
		found: char,
	},

	/// A rotation path pattern ends with a dangling `%`
	#[error("invalid rotate pattern `{pattern}`: dangling `%`")]
	PatternTruncated {
		pattern: String,
	},

	/// A write was attempted with no open stream, e.g. after close or
	/// after a failed rotation
	#[error("no opened file")]
	Uninitialized,

	/// File open/flush/close/mkdir or console write failure
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Logging configuration could not be decoded
	#[error("invalid logging config: {0}")]
	Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pattern_error_names_placeholder() {
		let err = Error::Pattern {
			pattern: "log-%x.log".to_string(),
			found: 'x',
		};
		assert_eq!(
			err.to_string(),
			"invalid rotate pattern `log-%x.log`: unknown placeholder `%x`"
		);
	}

	#[test]
	fn test_uninitialized_message() {
		assert_eq!(Error::Uninitialized.to_string(), "no opened file");
	}

	#[test]
	fn test_io_error_converts() {
		let io = std::io::Error::new(
			std::io::ErrorKind::PermissionDenied,
			"denied",
		);
		let err: Error = io.into();
		assert!(matches!(err, Error::Io(_)));
	}
}
