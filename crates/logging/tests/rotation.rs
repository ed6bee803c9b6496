// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Rotation behavior of the file backend against real wall-clock time

use std::fs;

use chrono::Local;
use reifylog_logging::{FileBackend, LogBackend, LogLevel, Record};
use reifylog_testing::temp_dir;

fn record(message: &str) -> Record {
	Record::new(LogLevel::Info, "2024-03-07 10:15:00", message)
}

#[test]
fn test_initial_open_uses_current_bucket() {
	temp_dir(|dir| {
		let pattern =
			format!("{}/app-%Y%M%D.log", dir.to_str().unwrap());
		let backend = FileBackend::new(&pattern).unwrap();

		// Computed on both sides of init so a date flip mid-test
		// cannot fail the assertion
		let before = Local::now().format("app-%Y%m%d.log").to_string();
		backend.init().unwrap();
		let after = Local::now().format("app-%Y%m%d.log").to_string();

		let path = backend.current_path().unwrap();
		let name = path.rsplit('/').next().unwrap().to_string();
		assert!(name == before || name == after);
		assert!(fs::metadata(&path).is_ok());
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_same_bucket_never_reopens() {
	temp_dir(|dir| {
		let pattern = format!("{}/app-%Y.log", dir.to_str().unwrap());
		let backend = FileBackend::new(&pattern).unwrap();
		backend.init().unwrap();

		backend.write(&record("one")).unwrap();
		backend.rotate().unwrap();
		backend.write(&record("two")).unwrap();
		backend.flush().unwrap();

		// A single file holding both lines proves the second check
		// neither opened a new file nor truncated the first
		assert_eq!(fs::read_dir(dir)?.count(), 1);
		let content =
			fs::read_to_string(backend.current_path().unwrap())?;
		assert_eq!(content.lines().count(), 2);
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_appends_across_backend_instances() {
	// Reopening the same bucket path appends instead of truncating
	temp_dir(|dir| {
		let pattern = format!("{}/app-%Y.log", dir.to_str().unwrap());

		let first = FileBackend::new(&pattern).unwrap();
		first.init().unwrap();
		first.write(&record("from first")).unwrap();
		first.close().unwrap();

		let second = FileBackend::new(&pattern).unwrap();
		second.init().unwrap();
		second.write(&record("from second")).unwrap();
		second.close().unwrap();

		let path = fs::read_dir(dir)?.next().unwrap()?.path();
		let content = fs::read_to_string(path)?;
		assert!(content.contains("from first"));
		assert!(content.contains("from second"));
		Ok(())
	})
	.unwrap();
}
