// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Resolves a `--log-list` / `--latest-logs` CLI selection into a
//! [`LogRegistry`]: the bundled list, a user-supplied file, or a freshly
//! fetched one.

use crate::error::CoreError;
use crate::log_registry::LogRegistry;

/// The log list bundled into the binary, dated 2020-04-05.
const BUNDLED_LOG_LIST: &str = include_str!("../../assets/really_all_logs.json");

/// The canonical source `--latest-logs` fetches from.
const LATEST_LOGS_URL: &str = "https://www.gstatic.com/ct/log_list/v3/all_logs_list.json";

pub enum Source<'a> {
	Bundled,
	File(&'a str),
	Fetch,
}

pub fn load(source: Source<'_>) -> Result<LogRegistry, CoreError> {
	let json = match source {
		Source::Bundled => BUNDLED_LOG_LIST.to_string(),
		Source::File(path) => std::fs::read_to_string(path)
			.map_err(|e| CoreError::ConfigError(format!("cannot read log list '{path}': {e}")))?,
		Source::Fetch => fetch_latest()?,
	};
	LogRegistry::load_from_json(&json)
}

fn fetch_latest() -> Result<String, CoreError> {
	let response = reqwest::blocking::get(LATEST_LOGS_URL)
		.map_err(|e| CoreError::ConfigError(format!("fetching log list failed: {e}")))?;
	response
		.text()
		.map_err(|e| CoreError::ConfigError(format!("reading log list response failed: {e}")))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_log_list_loads_and_is_non_empty() {
		let registry = load(Source::Bundled).unwrap();
		assert!(!registry.is_empty());
	}

	#[test]
	fn missing_file_is_config_error() {
		let result = load(Source::File("/nonexistent/does-not-exist.json"));
		assert!(result.is_err());
	}
}
