// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Reconstructs the exact bytes a CT log signed over (RFC 6962 §3.2's
//! `digitally-signed` structure) for both x509_entry and precert_entry
//! SCTs. Pure and deterministic: same inputs, same bytes, every time.

use crate::codec::Writer;
use crate::sct::SignedCertificateTimestamp;

const SIGNATURE_TYPE_CERTIFICATE_TIMESTAMP: u8 = 0;
const ENTRY_TYPE_X509: u16 = 0;
const ENTRY_TYPE_PRECERT: u16 = 1;

/// Which kind of log entry a `SignedCertificateTimestamp` attests to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind<'a> {
	/// `scts_by_tls` / `scts_by_ocsp`: the SCT signs the served end-entity
	/// certificate verbatim.
	Leaf { cert_der: &'a [u8] },
	/// `scts_by_cert`: the SCT signs the precertificate TBS under a
	/// candidate issuer's key hash.
	Precert { issuer_key_hash: &'a [u8; 32], tbs_no_sct: &'a [u8] },
}

/// Builds the TLS-serialized signature input for `sct` over `entry`.
pub fn build(sct: &SignedCertificateTimestamp, entry: EntryKind<'_>) -> Vec<u8> {
	let mut w = Writer::new();
	w.u8(sct.version);
	w.u8(SIGNATURE_TYPE_CERTIFICATE_TIMESTAMP);
	w.u64(sct.timestamp);
	match entry {
		EntryKind::Leaf { cert_der } => {
			w.u16(ENTRY_TYPE_X509);
			w.opaque24(cert_der);
		}
		EntryKind::Precert { issuer_key_hash, tbs_no_sct } => {
			w.u16(ENTRY_TYPE_PRECERT);
			w.raw(issuer_key_hash.as_slice());
			w.opaque24(tbs_no_sct);
		}
	}
	w.opaque16(&sct.extensions);
	w.into_bytes()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testdata_fixtures::*;

	fn sct_from(log_id: [u8; 32], timestamp: u64, signature: Vec<u8>) -> SignedCertificateTimestamp {
		SignedCertificateTimestamp {
			version: 0,
			log_id,
			timestamp,
			extensions: Vec::new(),
			signature_algorithm_hash: 4,
			signature_algorithm_sign: 3,
			signature,
		}
	}

	#[test]
	fn precert_input_is_deterministic() {
		let sct = sct_from(LOG_ID, SCT_TIMESTAMP_PRECERT_MS, vec![1, 2, 3]);
		let entry =
			EntryKind::Precert { issuer_key_hash: &ISSUER_KEY_HASH, tbs_no_sct: &PRECERT_TBS_DER };
		let a = build(&sct, entry);
		let b = build(&sct, entry);
		assert_eq!(a, b);
	}

	#[test]
	fn leaf_input_uses_entry_type_zero() {
		let sct = sct_from(LOG_ID, SCT_TIMESTAMP_LEAF_MS, vec![9]);
		let bytes = build(&sct, EntryKind::Leaf { cert_der: &FINAL_EE_CERT_DER });
		// version, sig type, 8-byte timestamp, then the u16 entry_type.
		let entry_type = u16::from_be_bytes([bytes[10], bytes[11]]);
		assert_eq!(entry_type, ENTRY_TYPE_X509);
	}

	#[test]
	fn precert_input_uses_entry_type_one() {
		let sct = sct_from(LOG_ID, SCT_TIMESTAMP_PRECERT_MS, vec![9]);
		let bytes = build(
			&sct,
			EntryKind::Precert { issuer_key_hash: &ISSUER_KEY_HASH, tbs_no_sct: &PRECERT_TBS_DER },
		);
		let entry_type = u16::from_be_bytes([bytes[10], bytes[11]]);
		assert_eq!(entry_type, ENTRY_TYPE_PRECERT);
	}
}
