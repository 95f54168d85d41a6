// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Formats [`VerificationResult`]s into the Markdown-ish report printed
//! to standard output: one section per host, sub-sections per task, a
//! fenced block per SCT.

use base64::Engine;
use hex::DisplayHex;

use crate::verifier::{Reason, VerificationResult};

/// Which wire channel a batch of results came from; names the
/// sub-section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
	Cert,
	Tls,
	Ocsp,
}

impl Channel {
	fn heading(self) -> &'static str {
		match self {
			Self::Cert => "Certificate-embedded SCTs",
			Self::Tls => "TLS extension SCTs",
			Self::Ocsp => "OCSP-stapled SCTs",
		}
	}
}

fn reason_label(reason: Reason) -> &'static str {
	match reason {
		Reason::Ok => "Verified OK",
		Reason::UnknownLog => "Verification Failure (unknown log)",
		Reason::BadSignature => "Verification Failure (bad signature)",
		Reason::UnsupportedAlg => "Verification Failure (unsupported algorithm)",
		Reason::MalformedInput => "Verification Failure (malformed input)",
	}
}

/// Writes the `# <host>` heading that opens a host's report section.
pub fn host_heading(host: &str) -> String {
	format!("# {host}\n")
}

/// Writes one task's sub-section: a heading followed by a fenced block
/// per SCT, or a one-line note if the channel produced nothing.
pub fn channel_section(channel: Channel, results: &[VerificationResult], short: bool) -> String {
	let mut out = format!("\n## {}\n", channel.heading());

	if results.is_empty() {
		out.push_str("\n_no SCTs present_\n");
		return out;
	}

	for result in results {
		out.push('\n');
		out.push_str(&sct_block(result, short));
	}
	out
}

/// Writes a note for a channel that could not be examined at all (a
/// transport failure or a malformed container), rather than silently
/// reporting zero SCTs.
pub fn channel_error(channel: Channel, message: &str) -> String {
	format!("\n## {}\n\n_error: {message}_\n", channel.heading())
}

fn sct_block(result: &VerificationResult, short: bool) -> String {
	let sct = &result.sct;
	let log_id_hex = sct.log_id.to_lower_hex_string();
	let log_id_b64 = base64::engine::general_purpose::STANDARD.encode(sct.log_id);

	if short {
		let log_name = result.log.as_ref().map(|l| l.description.as_str()).unwrap_or("unknown log");
		return format!("- `{log_id_hex}` ({log_name}): {}\n", reason_label(result.reason));
	}

	let sig_hex = sct.signature.to_lower_hex_string();
	let sig_b64 = base64::engine::general_purpose::STANDARD.encode(&sct.signature);

	let (description, operator, chrome_status) = match &result.log {
		Some(log) => (log.description.clone(), log.operator.clone(), log.chrome_status.to_string()),
		None => ("unknown".to_string(), "unknown".to_string(), "unknown".to_string()),
	};

	format!(
		"```\n\
		version: {}\n\
		log id (hex): {log_id_hex}\n\
		log id (b64): {log_id_b64}\n\
		timestamp: {}\n\
		extensions length: {}\n\
		algorithm: hash={} sign={}\n\
		signature (hex): {sig_hex}\n\
		signature (b64): {sig_b64}\n\
		log description: {description}\n\
		log operator: {operator}\n\
		chrome status: {chrome_status}\n\
		result: {}\n\
		```\n",
		sct.version,
		sct.timestamp,
		sct.extensions.len(),
		sct.signature_algorithm_hash,
		sct.signature_algorithm_sign,
		reason_label(result.reason),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::log_registry::{ChromeStatus, Log};
	use crate::sct::SignedCertificateTimestamp;

	fn sample_result(verified: bool, reason: Reason) -> VerificationResult {
		VerificationResult {
			sct: SignedCertificateTimestamp {
				version: 0,
				log_id: [7u8; 32],
				timestamp: 1_600_000_000_000,
				extensions: vec![],
				signature_algorithm_hash: 4,
				signature_algorithm_sign: 3,
				signature: vec![1, 2, 3, 4],
			},
			log: Some(Log {
				log_id: [7u8; 32],
				description: "Test Log".to_string(),
				key: vec![],
				operator: "Test Operator".to_string(),
				chrome_status: ChromeStatus::Usable,
				mmd_seconds: 86400,
			}),
			verified,
			reason,
		}
	}

	#[test]
	fn verbose_block_contains_log_metadata_and_result() {
		let result = sample_result(true, Reason::Ok);
		let block = sct_block(&result, false);
		assert!(block.contains("Test Log"));
		assert!(block.contains("Test Operator"));
		assert!(block.contains("Verified OK"));
	}

	#[test]
	fn short_block_is_one_line() {
		let result = sample_result(false, Reason::BadSignature);
		let block = sct_block(&result, true);
		assert_eq!(block.lines().count(), 1);
		assert!(block.contains("bad signature"));
	}

	#[test]
	fn empty_channel_notes_absence() {
		let section = channel_section(Channel::Ocsp, &[], false);
		assert!(section.contains("no SCTs present"));
	}
}
