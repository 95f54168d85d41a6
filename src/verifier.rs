// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Orchestrates per-SCT verification: look up the log, map the
//! algorithm pair, build the signature input, verify. A verifier never
//! throws on a cryptographic failure -- the outcome is reported, not
//! raised.

use crate::cert::Certificate;
use crate::log_registry::{Log, LogRegistry};
use crate::sct::SignedCertificateTimestamp;
use crate::signature_input::{self, EntryKind};

const SIG_ALG_HASH_SHA256: u8 = 4;
const SIG_ALG_SIGN_ECDSA: u8 = 3;
const SIG_ALG_SIGN_RSA: u8 = 1;

/// Why a `VerificationResult` did or did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
	Ok,
	UnknownLog,
	BadSignature,
	UnsupportedAlg,
	MalformedInput,
}

#[derive(Debug, Clone)]
pub struct VerificationResult {
	pub sct: SignedCertificateTimestamp,
	pub log: Option<Log>,
	pub verified: bool,
	pub reason: Reason,
}

/// Which signature-input shape to build for every SCT in a batch: all
/// SCTs from one container share a kind (leaf containers never mix with
/// precert containers).
pub enum VerificationKind<'a> {
	/// `scts_by_tls` / `scts_by_ocsp`.
	Leaf { cert_der: &'a [u8] },
	/// `scts_by_cert`: tries each candidate issuer in order, accepting
	/// the first whose key hash validates the signature.
	Precert { issuer_candidates: &'a [&'a Certificate], ee_tbs_no_sct: &'a [u8] },
}

fn verify_signature(key_der: &[u8], sign_alg: u8, message: &[u8], signature: &[u8]) -> Option<bool> {
	use ring::signature::{UnparsedPublicKey, ECDSA_P256_SHA256_ASN1, RSA_PKCS1_2048_8192_SHA256};

	let algorithm: &dyn ring::signature::VerificationAlgorithm = match sign_alg {
		SIG_ALG_SIGN_ECDSA => &ECDSA_P256_SHA256_ASN1,
		SIG_ALG_SIGN_RSA => &RSA_PKCS1_2048_8192_SHA256,
		_ => return None,
	};
	let public_key = UnparsedPublicKey::new(algorithm, key_der);
	Some(public_key.verify(message, signature).is_ok())
}

/// Verifies every SCT in `scts` against `logs`, building the signature
/// input appropriate to `kind`.
pub fn verify(scts: &[SignedCertificateTimestamp], logs: &LogRegistry, kind: &VerificationKind<'_>) -> Vec<VerificationResult> {
	scts.iter()
		.map(|sct| verify_one(sct, logs, kind))
		.collect()
}

fn verify_one(sct: &SignedCertificateTimestamp, logs: &LogRegistry, kind: &VerificationKind<'_>) -> VerificationResult {
	let Some(log) = logs.lookup(&sct.log_id) else {
		return VerificationResult { sct: sct.clone(), log: None, verified: false, reason: Reason::UnknownLog };
	};

	if sct.signature_algorithm_hash != SIG_ALG_HASH_SHA256
		|| !matches!(sct.signature_algorithm_sign, SIG_ALG_SIGN_ECDSA | SIG_ALG_SIGN_RSA)
	{
		return VerificationResult {
			sct: sct.clone(),
			log: Some(log.clone()),
			verified: false,
			reason: Reason::UnsupportedAlg,
		};
	}

	let Ok(key_bits) = log.public_key_bits() else {
		return VerificationResult {
			sct: sct.clone(),
			log: Some(log.clone()),
			verified: false,
			reason: Reason::MalformedInput,
		};
	};

	let verified = match kind {
		VerificationKind::Leaf { cert_der } => {
			let message = signature_input::build(sct, EntryKind::Leaf { cert_der });
			verify_signature(&key_bits, sct.signature_algorithm_sign, &message, &sct.signature).unwrap_or(false)
		}
		VerificationKind::Precert { issuer_candidates, ee_tbs_no_sct } => issuer_candidates.iter().any(|issuer| {
			let Ok(issuer_key_hash) = issuer.issuer_key_hash() else { return false };
			let message = signature_input::build(
				sct,
				EntryKind::Precert { issuer_key_hash: &issuer_key_hash, tbs_no_sct: ee_tbs_no_sct },
			);
			verify_signature(&key_bits, sct.signature_algorithm_sign, &message, &sct.signature).unwrap_or(false)
		}),
	};

	VerificationResult {
		sct: sct.clone(),
		log: Some(log.clone()),
		verified,
		reason: if verified { Reason::Ok } else { Reason::BadSignature },
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cert::{candidate_issuers, Certificate};
	use crate::log_registry::LogRegistry;
	use crate::testdata_fixtures::*;
	use base64::Engine;

	fn registry_with_fixture_log() -> LogRegistry {
		let key_b64 = base64::engine::general_purpose::STANDARD.encode(LOG_SPKI_DER);
		let id_b64 = base64::engine::general_purpose::STANDARD.encode(LOG_ID);
		let json = format!(
			r#"{{"operators":[{{"id":0,"name":"Test Operator"}}],
			     "logs":[{{"description":"Test Log","log_id":"{id_b64}","key":"{key_b64}","mmd":86400,
			               "state":{{"usable":{{}}}},"operated_by":[0]}}]}}"#
		);
		LogRegistry::load_from_json(&json).unwrap()
	}

	#[test]
	fn s1_embedded_precert_sct_verifies() {
		let logs = registry_with_fixture_log();
		let ee = Certificate::from_der(&FINAL_EE_CERT_DER).unwrap();
		let issuer = Certificate::from_der(&ISSUER_CERT_DER).unwrap();
		let chain = vec![issuer];
		let candidates = candidate_issuers(&ee, &chain);
		let tbs_no_sct = ee.tbs_for_precert_signing().unwrap();

		let scts = ee.scts_embedded().unwrap();
		let kind = VerificationKind::Precert { issuer_candidates: &candidates, ee_tbs_no_sct: &tbs_no_sct };
		let results = verify(&scts, &logs, &kind);

		assert_eq!(results.len(), 1);
		assert!(results[0].verified);
		assert_eq!(results[0].reason, Reason::Ok);
		assert_eq!(results[0].log.as_ref().unwrap().description, "Test Log");
	}

	#[test]
	fn s2_tls_delivered_leaf_sct_verifies() {
		let logs = registry_with_fixture_log();
		let list = crate::sct::SctList::decode(&LEAF_SCT_LIST).unwrap();
		let kind = VerificationKind::Leaf { cert_der: &FINAL_EE_CERT_DER };
		let results = verify(&list.entries, &logs, &kind);

		assert_eq!(results.len(), 1);
		assert!(results[0].verified);
	}

	#[test]
	fn s3_ocsp_delivered_leaf_sct_verifies() {
		let logs = registry_with_fixture_log();
		let scts = crate::ocsp::scts_from_ocsp(&OCSP_RESPONSE_WITH_SCT).unwrap();
		let kind = VerificationKind::Leaf { cert_der: &FINAL_EE_CERT_DER };
		let results = verify(&scts, &logs, &kind);

		assert_eq!(results.len(), 1);
		assert!(results[0].verified);
	}

	#[test]
	fn s4_unknown_log_is_reported_not_fatal() {
		let logs = registry_with_fixture_log();
		let mut sct = crate::sct::SctList::decode(&LEAF_SCT_LIST).unwrap().entries.remove(0);
		sct.log_id = [0u8; 32];
		let kind = VerificationKind::Leaf { cert_der: &FINAL_EE_CERT_DER };
		let results = verify(&[sct], &logs, &kind);

		assert_eq!(results.len(), 1);
		assert!(!results[0].verified);
		assert_eq!(results[0].reason, Reason::UnknownLog);
		assert!(results[0].log.is_none());
	}

	#[test]
	fn s5_tampered_signature_is_bad_signature() {
		let logs = registry_with_fixture_log();
		let mut sct = crate::sct::SctList::decode(&LEAF_SCT_LIST).unwrap().entries.remove(0);
		let last = sct.signature.len() - 1;
		sct.signature[last] ^= 0xFF;
		let kind = VerificationKind::Leaf { cert_der: &FINAL_EE_CERT_DER };
		let results = verify(&[sct], &logs, &kind);

		assert_eq!(results.len(), 1);
		assert!(!results[0].verified);
		assert_eq!(results[0].reason, Reason::BadSignature);
	}

	#[test]
	fn unsupported_algorithm_is_reported() {
		let logs = registry_with_fixture_log();
		let mut sct = crate::sct::SctList::decode(&LEAF_SCT_LIST).unwrap().entries.remove(0);
		sct.signature_algorithm_sign = 2; // DSA, not supported
		let kind = VerificationKind::Leaf { cert_der: &FINAL_EE_CERT_DER };
		let results = verify(&[sct], &logs, &kind);

		assert_eq!(results[0].reason, Reason::UnsupportedAlg);
	}
}
