// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! The TLS handshake adapter: connects to a host, captures the
//! certificate chain and stapled OCSP response, and probes for the TLS
//! extension-18 SCT list. Path validation is deliberately skipped (see
//! spec non-goals) -- a permissive certificate verifier is installed so
//! the handshake completes regardless of trust-chain validity; this tool
//! reports on SCTs, it does not gate on whether the server is trusted.

pub mod ext18_probe;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::rustls::client::danger::{
	HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier,
};
use tokio_rustls::rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use tokio_rustls::rustls::{ClientConfig, DigitallySignedStruct, SignatureScheme};
use tokio_rustls::TlsConnector;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_PORT: u16 = 443;

/// Result of one host's handshake, per spec.md's `HandshakeResult`
/// contract. `err` is set exactly when every other field that depends
/// on a completed handshake is absent.
#[derive(Debug, Default)]
pub struct HandshakeResult {
	pub ee_der: Option<Vec<u8>>,
	pub issuer_der: Option<Vec<u8>>,
	pub more_issuer_candidates_der: Vec<Vec<u8>>,
	pub ocsp_der: Option<Vec<u8>>,
	pub ext18_tdf: Option<Vec<u8>>,
	pub err: Option<String>,
}

#[derive(Default)]
struct Captured {
	chain: Vec<Vec<u8>>,
	ocsp: Option<Vec<u8>>,
}

/// A `ServerCertVerifier` that accepts every presented chain (no path
/// validation, per spec non-goals) while recording the chain and the
/// stapled OCSP response it was handed, the only point in the safe
/// client API where either is reachable.
#[derive(Debug)]
struct PermissiveVerifier {
	captured: Mutex<Captured>,
}

impl PermissiveVerifier {
	fn new() -> Arc<Self> {
		Arc::new(Self { captured: Mutex::new(Captured::default()) })
	}
}

impl std::fmt::Debug for Captured {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Captured").field("chain_len", &self.chain.len()).finish()
	}
}

impl ServerCertVerifier for PermissiveVerifier {
	fn verify_server_cert(
		&self,
		end_entity: &CertificateDer<'_>,
		intermediates: &[CertificateDer<'_>],
		_server_name: &ServerName<'_>,
		ocsp_response: &[u8],
		_now: UnixTime,
	) -> Result<ServerCertVerified, tokio_rustls::rustls::Error> {
		let mut captured = self.captured.lock().unwrap();
		captured.chain.clear();
		captured.chain.push(end_entity.as_ref().to_vec());
		captured.chain.extend(intermediates.iter().map(|c| c.as_ref().to_vec()));
		captured.ocsp = if ocsp_response.is_empty() { None } else { Some(ocsp_response.to_vec()) };
		Ok(ServerCertVerified::assertion())
	}

	fn verify_tls12_signature(
		&self,
		_message: &[u8],
		_cert: &CertificateDer<'_>,
		_dss: &DigitallySignedStruct,
	) -> Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
		Ok(HandshakeSignatureValid::assertion())
	}

	fn verify_tls13_signature(
		&self,
		_message: &[u8],
		_cert: &CertificateDer<'_>,
		_dss: &DigitallySignedStruct,
	) -> Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
		Ok(HandshakeSignatureValid::assertion())
	}

	fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
		vec![
			SignatureScheme::RSA_PKCS1_SHA256,
			SignatureScheme::RSA_PKCS1_SHA384,
			SignatureScheme::RSA_PKCS1_SHA512,
			SignatureScheme::ECDSA_NISTP256_SHA256,
			SignatureScheme::ECDSA_NISTP384_SHA384,
			SignatureScheme::RSA_PSS_SHA256,
			SignatureScheme::RSA_PSS_SHA384,
			SignatureScheme::RSA_PSS_SHA512,
			SignatureScheme::ED25519,
		]
	}
}

fn client_config(verifier: Arc<PermissiveVerifier>) -> ClientConfig {
	ClientConfig::builder()
		.dangerous()
		.with_custom_certificate_verifier(verifier)
		.with_no_client_auth()
}

/// Connects to `host:443`, completes a TLS handshake, and probes for
/// extension 18 over a short-lived second connection. Never panics on
/// transport failure -- the failure is folded into `HandshakeResult::err`.
pub async fn do_handshake(host: &str) -> HandshakeResult {
	match do_handshake_inner(host).await {
		Ok(result) => result,
		Err(e) => HandshakeResult { err: Some(e), ..Default::default() },
	}
}

async fn do_handshake_inner(host: &str) -> Result<HandshakeResult, String> {
	let verifier = PermissiveVerifier::new();
	let config = client_config(verifier.clone());
	let connector = TlsConnector::from(Arc::new(config));

	let server_name = ServerName::try_from(host.to_string())
		.map_err(|e| format!("invalid server name '{host}': {e}"))?;

	let tcp = timeout(DEFAULT_TIMEOUT, TcpStream::connect((host, DEFAULT_PORT)))
		.await
		.map_err(|_| format!("connect to {host}:{DEFAULT_PORT} timed out"))?
		.map_err(|e| format!("connect to {host}:{DEFAULT_PORT} failed: {e}"))?;

	let _tls_stream = timeout(DEFAULT_TIMEOUT, connector.connect(server_name, tcp))
		.await
		.map_err(|_| format!("TLS handshake with {host} timed out"))?
		.map_err(|e| format!("TLS handshake with {host} failed: {e}"))?;

	let captured = verifier.captured.lock().unwrap();
	let mut chain_iter = captured.chain.iter();
	let ee_der = chain_iter.next().cloned();
	let issuer_der = chain_iter.next().cloned();
	let more_issuer_candidates_der = captured.chain.clone();
	let ocsp_der = captured.ocsp.clone();
	drop(captured);

	let ext18_tdf = ext18_probe::probe(host, DEFAULT_PORT, DEFAULT_TIMEOUT).await.ok();

	Ok(HandshakeResult { ee_der, issuer_der, more_issuer_candidates_der, ocsp_der, ext18_tdf, err: None })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn permissive_verifier_starts_empty() {
		let verifier = PermissiveVerifier::new();
		let captured = verifier.captured.lock().unwrap();
		assert!(captured.chain.is_empty());
		assert!(captured.ocsp.is_none());
	}
}
