// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{env, fs, path::Path};

use uuid::Uuid;

/// Run `f` inside a fresh scoped directory under the system temp dir.
///
/// The directory is removed afterwards regardless of the outcome, so
/// log files created by a test never leak between runs.
pub fn temp_dir<T, F>(f: F) -> std::io::Result<T>
where
	F: FnOnce(&Path) -> std::io::Result<T>,
{
	let mut path = env::temp_dir();
	path.push(format!("reifylog-{}", Uuid::new_v4()));

	fs::create_dir(&path)?;
	let result = f(&path);

	let _ = fs::remove_dir_all(&path);
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_directory_is_removed_after_use() {
		let mut seen = None;
		temp_dir(|dir| {
			seen = Some(dir.to_path_buf());
			fs::write(dir.join("probe.log"), b"x")
		})
		.unwrap();
		assert!(!seen.unwrap().exists());
	}

	#[test]
	fn test_result_passes_through() {
		let lines = temp_dir(|_| Ok(3usize)).unwrap();
		assert_eq!(lines, 3);
	}
}
