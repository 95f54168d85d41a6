// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Command-line surface: one mandatory domain file, and three
//! mutually-exclusive selector groups (verbosity, task, log list).

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
	#[default]
	Verbose,
	Short,
	Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSelector {
	#[default]
	All,
	CertOnly,
	TlsOnly,
	OcspOnly,
}

#[derive(Parser, Debug)]
#[command(
	version,
	about = "Verifies Signed Certificate Timestamps served by a list of hosts",
	long_about = None
)]
pub struct Args {
	/// A file with one hostname per line; port 443 is assumed.
	#[arg(long, required = true)]
	pub domain_file: String,

	/// Print a one-line summary per SCT instead of the full report.
	#[arg(long, conflicts_with = "debug")]
	pub short: bool,

	/// Print full diagnostic detail, including logging at debug level.
	#[arg(long, conflicts_with = "short")]
	pub debug: bool,

	/// Only verify SCTs embedded in the certificate.
	#[arg(long, conflicts_with_all = ["tls_only", "ocsp_only"])]
	pub cert_only: bool,

	/// Only verify SCTs delivered via the TLS extension.
	#[arg(long, conflicts_with_all = ["cert_only", "ocsp_only"])]
	pub tls_only: bool,

	/// Only verify SCTs delivered via the stapled OCSP response.
	#[arg(long, conflicts_with_all = ["cert_only", "tls_only"])]
	pub ocsp_only: bool,

	/// Load the CT log list from this file instead of the bundled one.
	#[arg(long, conflicts_with = "latest_logs")]
	pub log_list: Option<String>,

	/// Fetch the current CT log list from its canonical source instead
	/// of using the bundled one.
	#[arg(long, conflicts_with = "log_list")]
	pub latest_logs: bool,
}

impl Args {
	pub fn verbosity(&self) -> Verbosity {
		if self.debug {
			Verbosity::Debug
		} else if self.short {
			Verbosity::Short
		} else {
			Verbosity::Verbose
		}
	}

	pub fn task_selector(&self) -> TaskSelector {
		if self.cert_only {
			TaskSelector::CertOnly
		} else if self.tls_only {
			TaskSelector::TlsOnly
		} else if self.ocsp_only {
			TaskSelector::OcspOnly
		} else {
			TaskSelector::All
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_selectors_are_all_and_verbose() {
		let args = Args::parse_from(["sct-verify", "--domain-file", "hosts.txt"]);
		assert_eq!(args.verbosity(), Verbosity::Verbose);
		assert_eq!(args.task_selector(), TaskSelector::All);
	}

	#[test]
	fn short_and_debug_are_mutually_exclusive() {
		let result =
			Args::try_parse_from(["sct-verify", "--domain-file", "hosts.txt", "--short", "--debug"]);
		assert!(result.is_err());
	}

	#[test]
	fn task_selectors_are_mutually_exclusive() {
		let result = Args::try_parse_from([
			"sct-verify",
			"--domain-file",
			"hosts.txt",
			"--cert-only",
			"--tls-only",
		]);
		assert!(result.is_err());
	}

	#[test]
	fn cert_only_selects_cert_task() {
		let args =
			Args::parse_from(["sct-verify", "--domain-file", "hosts.txt", "--cert-only"]);
		assert_eq!(args.task_selector(), TaskSelector::CertOnly);
	}
}
