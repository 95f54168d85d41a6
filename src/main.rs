// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Driver: reads a domain file, resolves the log list, and for each
//! host runs the selected tasks against the handshake adapter, printing
//! a report section per host.

use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};

use sct_verify::cert::{candidate_issuers, Certificate};
use sct_verify::handshake;
use sct_verify::log_registry::LogRegistry;
use sct_verify::ocsp;
use sct_verify::sct::TlsExtension18Envelope;
use sct_verify::util::cli::{Args, TaskSelector, Verbosity};
use sct_verify::util::loglist::{self, Source};
use sct_verify::util::report::{self, Channel};
use sct_verify::verifier::{self, VerificationKind, VerificationResult};

fn main() -> ExitCode {
	let args = Args::parse();

	let verbosity = args.verbosity();
	init_logging(verbosity);

	let hosts = match read_domain_file(&args.domain_file) {
		Ok(hosts) => hosts,
		Err(e) => {
			eprintln!("error: {e}");
			return ExitCode::FAILURE;
		}
	};

	let log_source = match (&args.log_list, args.latest_logs) {
		(Some(path), _) => Source::File(path),
		(None, true) => Source::Fetch,
		(None, false) => Source::Bundled,
	};
	let registry = match loglist::load(log_source) {
		Ok(registry) => registry,
		Err(e) => {
			eprintln!("error: {e}");
			return ExitCode::FAILURE;
		}
	};
	debug!("loaded {} CT logs", registry.len());

	let runtime = match tokio::runtime::Runtime::new() {
		Ok(rt) => rt,
		Err(e) => {
			eprintln!("error: failed to start async runtime: {e}");
			return ExitCode::FAILURE;
		}
	};

	let task = args.task_selector();
	let short = matches!(verbosity, Verbosity::Short);

	for host in &hosts {
		println!("{}", report::host_heading(host));
		runtime.block_on(verify_host(host, &registry, task, short));
	}

	ExitCode::SUCCESS
}

fn init_logging(verbosity: Verbosity) {
	let level = match verbosity {
		Verbosity::Debug => "debug",
		Verbosity::Short | Verbosity::Verbose => "warn",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Reads one hostname per line, trimming whitespace and skipping blank
/// lines -- unlike the tool this one is modeled on, which fed unstripped
/// lines straight to its connector and silently mishandled trailing
/// newlines.
fn read_domain_file(path: &str) -> Result<Vec<String>, String> {
	let contents = std::fs::read_to_string(path).map_err(|e| format!("cannot read domain file '{path}': {e}"))?;
	Ok(contents.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect())
}

async fn verify_host(host: &str, registry: &LogRegistry, task: TaskSelector, short: bool) {
	let handshake = handshake::do_handshake(host).await;

	if let Some(err) = &handshake.err {
		warn!("{host}: handshake failed: {err}");
		println!("{}", report::channel_error(Channel::Cert, err));
		return;
	}

	let run_cert = matches!(task, TaskSelector::All | TaskSelector::CertOnly);
	let run_tls = matches!(task, TaskSelector::All | TaskSelector::TlsOnly);
	let run_ocsp = matches!(task, TaskSelector::All | TaskSelector::OcspOnly);

	if run_cert {
		println!("{}", cert_channel_report(&handshake, registry, short));
	}
	if run_tls {
		println!("{}", tls_channel_report(&handshake, registry, short));
	}
	if run_ocsp {
		println!("{}", ocsp_channel_report(&handshake, registry, short));
	}
}

fn cert_channel_report(handshake: &handshake::HandshakeResult, registry: &LogRegistry, short: bool) -> String {
	let Some(ee_der) = &handshake.ee_der else {
		return report::channel_error(Channel::Cert, "no certificate presented");
	};

	let ee = match Certificate::from_der(ee_der) {
		Ok(cert) => cert,
		Err(e) => return report::channel_error(Channel::Cert, &e.to_string()),
	};

	let chain: Vec<Certificate> = handshake
		.more_issuer_candidates_der
		.iter()
		.skip(1)
		.filter_map(|der| Certificate::from_der(der).ok())
		.collect();

	let scts = match ee.scts_embedded() {
		Ok(scts) => scts,
		Err(e) => return report::channel_error(Channel::Cert, &e.to_string()),
	};

	let tbs_no_sct = match ee.tbs_for_precert_signing() {
		Ok(tbs) => tbs,
		Err(e) => return report::channel_error(Channel::Cert, &e.to_string()),
	};
	let candidates = candidate_issuers(&ee, &chain);
	let kind = VerificationKind::Precert { issuer_candidates: &candidates, ee_tbs_no_sct: &tbs_no_sct };
	let results: Vec<VerificationResult> = verifier::verify(&scts, registry, &kind);

	report::channel_section(Channel::Cert, &results, short)
}

fn tls_channel_report(handshake: &handshake::HandshakeResult, registry: &LogRegistry, short: bool) -> String {
	let (Some(tdf), Some(ee_der)) = (&handshake.ext18_tdf, &handshake.ee_der) else {
		return report::channel_error(Channel::Tls, "server did not reply with extension 18");
	};

	let envelope = match TlsExtension18Envelope::decode(tdf) {
		Ok(envelope) => envelope,
		Err(e) => return report::channel_error(Channel::Tls, &e.to_string()),
	};

	let kind = VerificationKind::Leaf { cert_der: ee_der };
	let results = verifier::verify(&envelope.sct_list.entries, registry, &kind);
	report::channel_section(Channel::Tls, &results, short)
}

fn ocsp_channel_report(handshake: &handshake::HandshakeResult, registry: &LogRegistry, short: bool) -> String {
	let (Some(ocsp_der), Some(ee_der)) = (&handshake.ocsp_der, &handshake.ee_der) else {
		return report::channel_error(Channel::Ocsp, "no stapled OCSP response");
	};

	let scts = match ocsp::scts_from_ocsp(ocsp_der) {
		Ok(scts) => scts,
		Err(e) => return report::channel_error(Channel::Ocsp, &e.to_string()),
	};

	let kind = VerificationKind::Leaf { cert_der: ee_der };
	let results = verifier::verify(&scts, registry, &kind);
	report::channel_section(Channel::Ocsp, &results, short)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn domain_file_trims_and_skips_blank_lines() {
		let mut file = tempfile_with_content("example.com\n\n  other.example.org  \n\n");
		let hosts = read_domain_file(file.path_str()).unwrap();
		assert_eq!(hosts, vec!["example.com".to_string(), "other.example.org".to_string()]);
		file.cleanup();
	}

	struct TempFile {
		path: std::path::PathBuf,
	}

	impl TempFile {
		fn path_str(&self) -> &str {
			self.path.to_str().unwrap()
		}
		fn cleanup(&mut self) {
			let _ = std::fs::remove_file(&self.path);
		}
	}

	fn tempfile_with_content(content: &str) -> TempFile {
		let mut path = std::env::temp_dir();
		path.push(format!("sct-verify-test-{}.txt", std::process::id()));
		let mut f = std::fs::File::create(&path).unwrap();
		f.write_all(content.as_bytes()).unwrap();
		TempFile { path }
	}
}
