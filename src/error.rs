// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! The core error taxonomy. Cryptographic outcomes (unknown log, bad
//! signature, unsupported algorithm) are never errors here -- they are
//! [`crate::verifier::Reason`] values attached to a `VerificationResult`.
//! Only failures that stop a channel or the whole run are `CoreError`.

use crate::codec::CodecError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
	/// The handshake adapter could not establish or complete a TLS
	/// connection to a host. That host's report is skipped; other hosts
	/// are unaffected.
	#[error("transport failure: {0}")]
	TransportFailure(String),

	/// A container (SctList, X.509 extension, OCSP response) failed to
	/// parse. That channel's SCTs are dropped; other channels for the
	/// same host continue.
	#[error("malformed container: {0}")]
	MalformedContainer(String),

	/// Startup configuration is invalid: an unreadable domain file, a
	/// malformed log-list JSON document, or conflicting CLI flags. Fatal.
	#[error("configuration error: {0}")]
	ConfigError(String),
}

impl From<CodecError> for CoreError {
	fn from(value: CodecError) -> Self {
		CoreError::MalformedContainer(value.to_string())
	}
}

impl From<x509_cert::der::Error> for CoreError {
	fn from(value: x509_cert::der::Error) -> Self {
		CoreError::MalformedContainer(format!("DER decode failed: {value}"))
	}
}
