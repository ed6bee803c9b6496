// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Rotation path patterns.
//!
//! A pattern is a file path containing time-component placeholders:
//! `%Y` (year, unpadded), `%M` (month), `%D` (day), `%H` (hour) and
//! `%m` (minute), the last four zero-padded to two digits. Compilation
//! turns the pattern into an ordered extractor list plus a segment list
//! with one slot per placeholder; evaluating the extractors against a
//! wall-clock time yields the snapshot that decides when the file
//! backend rotates.

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, Local, Timelike};
use reifylog_core::{Error, Result};

/// One time component extracted from wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeComponent {
	Year,
	Month,
	Day,
	Hour,
	Minute,
}

impl TimeComponent {
	fn from_placeholder(c: char) -> Option<Self> {
		match c {
			'Y' => Some(TimeComponent::Year),
			'M' => Some(TimeComponent::Month),
			'D' => Some(TimeComponent::Day),
			'H' => Some(TimeComponent::Hour),
			'm' => Some(TimeComponent::Minute),
			_ => None,
		}
	}

	/// Evaluate this component against a wall-clock time
	pub fn extract(&self, at: &DateTime<Local>) -> i32 {
		match self {
			TimeComponent::Year => at.year(),
			TimeComponent::Month => at.month() as i32,
			TimeComponent::Day => at.day() as i32,
			TimeComponent::Hour => at.hour() as i32,
			TimeComponent::Minute => at.minute() as i32,
		}
	}

	fn render(&self, value: i32, out: &mut String) {
		match self {
			// The year is the only unpadded component
			TimeComponent::Year => {
				let _ = write!(out, "{value}");
			}
			_ => {
				let _ = write!(out, "{value:02}");
			}
		}
	}
}

#[derive(Debug, Clone)]
enum Segment {
	Literal(String),
	Slot(TimeComponent),
}

/// A compiled rotation path pattern.
///
/// Immutable after compilation. A pattern without placeholders compiles
/// to a single literal segment and an empty extractor list: the path is
/// derived once and never changes.
#[derive(Debug, Clone)]
pub struct PathPattern {
	segments: Vec<Segment>,
	components: Vec<TimeComponent>,
}

impl PathPattern {
	/// Compile a path pattern.
	///
	/// Fails when a `%` is followed by a character outside the
	/// supported set or ends the pattern. Compilation is pure: a
	/// failure leaves no partial state behind.
	pub fn compile(pattern: &str) -> Result<Self> {
		let mut segments = Vec::new();
		let mut components = Vec::new();
		let mut literal = String::new();

		let mut chars = pattern.chars();
		while let Some(c) = chars.next() {
			if c != '%' {
				literal.push(c);
				continue;
			}
			let placeholder = chars.next().ok_or_else(|| {
				Error::PatternTruncated {
					pattern: pattern.to_string(),
				}
			})?;
			let component =
				TimeComponent::from_placeholder(placeholder)
					.ok_or_else(|| Error::Pattern {
						pattern: pattern.to_string(),
						found: placeholder,
					})?;
			if !literal.is_empty() {
				segments.push(Segment::Literal(
					std::mem::take(&mut literal),
				));
			}
			segments.push(Segment::Slot(component));
			components.push(component);
		}
		if !literal.is_empty() || segments.is_empty() {
			segments.push(Segment::Literal(literal));
		}

		Ok(Self {
			segments,
			components,
		})
	}

	/// Number of time extractors in the compiled pattern
	pub fn component_count(&self) -> usize {
		self.components.len()
	}

	/// Evaluate every extractor against `at`, in placeholder order
	pub fn snapshot(&self, at: &DateTime<Local>) -> Vec<i32> {
		self.components
			.iter()
			.map(|component| component.extract(at))
			.collect()
	}

	/// Render the concrete path for a snapshot.
	///
	/// `snapshot` must have exactly [`Self::component_count`] entries,
	/// in the order [`Self::snapshot`] produces them.
	pub fn render(&self, snapshot: &[i32]) -> String {
		debug_assert_eq!(snapshot.len(), self.components.len());
		let mut path = String::new();
		let mut values = snapshot.iter();
		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => path.push_str(text),
				Segment::Slot(component) => {
					if let Some(value) = values.next() {
						component.render(
							*value, &mut path,
						);
					}
				}
			}
		}
		path
	}
}
