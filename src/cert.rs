// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! The certificate adapter: extracts embedded SCTs, builds the
//! precertificate TBS used for the precert signature input, and derives
//! issuer-key hashes from DER-encoded X.509 certificates.

use sha2::{Digest, Sha256};
use x509_cert::der::asn1::{ObjectIdentifier, OctetString};
use x509_cert::der::{Decode, Encode};
use x509_cert::{Certificate as RawCertificate, TbsCertificate};

use crate::error::CoreError;
use crate::sct::{SctList, SignedCertificateTimestamp};

/// The X.509 SCT-list extension.
pub const OID_SCT_LIST: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.11129.2.4.2");
/// The precertificate poison extension.
pub const OID_CT_POISON: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.11129.2.4.3");

/// A parsed X.509 certificate, used both as an end-entity and an issuer
/// candidate -- the same DER shape serves either role.
#[derive(Debug, Clone)]
pub struct Certificate {
	der: Vec<u8>,
	parsed: RawCertificate,
}

impl Certificate {
	pub fn from_der(der: &[u8]) -> Result<Self, CoreError> {
		let parsed = RawCertificate::from_der(der)?;
		Ok(Self { der: der.to_vec(), parsed })
	}

	pub fn der(&self) -> &[u8] {
		&self.der
	}

	fn tbs(&self) -> &TbsCertificate {
		&self.parsed.tbs_certificate
	}

	/// `scts_embedded`: the SCTs carried in the X.509 extension, decoded
	/// from the TLS-encoded `SctList` inside the extension's DER OCTET
	/// STRING. Returns an empty list if the extension is absent.
	pub fn scts_embedded(&self) -> Result<Vec<SignedCertificateTimestamp>, CoreError> {
		let Some(extensions) = &self.tbs().extensions else {
			return Ok(Vec::new());
		};
		let mut out = Vec::new();
		for ext in extensions.iter() {
			if ext.extn_id != OID_SCT_LIST {
				continue;
			}
			let octets = OctetString::from_der(ext.extn_value.as_bytes())?;
			let list = SctList::decode(octets.as_bytes())?;
			out.extend(list.entries);
		}
		Ok(out)
	}

	/// `is_precertificate`: a critical poison extension (`…2.4.3`, value
	/// `05 00`, DER NULL) is present.
	pub fn is_precertificate(&self) -> bool {
		let Some(extensions) = &self.tbs().extensions else {
			return false;
		};
		extensions
			.iter()
			.any(|ext| ext.extn_id == OID_CT_POISON && ext.critical && ext.extn_value.as_bytes() == [0x05, 0x00])
	}

	/// `tbs_for_precert_signing`: the TBSCertificate with the SCT-list
	/// extension (and, defensively, a poison extension, should one
	/// remain) removed, re-encoded. The `der` crate recomputes every
	/// length field; there is no manual byte-patching.
	pub fn tbs_for_precert_signing(&self) -> Result<Vec<u8>, CoreError> {
		let mut tbs = self.tbs().clone();
		if let Some(extensions) = tbs.extensions.take() {
			let filtered: Vec<_> = extensions
				.into_iter()
				.filter(|ext| ext.extn_id != OID_SCT_LIST && ext.extn_id != OID_CT_POISON)
				.collect();
			tbs.extensions = if filtered.is_empty() { None } else { Some(filtered) };
		}
		let mut out = Vec::new();
		tbs.encode_to_vec(&mut out).map_err(CoreError::from)?;
		Ok(out)
	}

	/// `issuer_key_hash`: SHA-256 of the DER-encoded SubjectPublicKeyInfo
	/// taken from this certificate's own TBS -- used when this
	/// certificate is acting as an issuer candidate.
	pub fn issuer_key_hash(&self) -> Result<[u8; 32], CoreError> {
		let mut spki_bytes = Vec::new();
		self.tbs().subject_public_key_info.encode_to_vec(&mut spki_bytes).map_err(CoreError::from)?;
		Ok(Sha256::digest(&spki_bytes).into())
	}
}

/// Builds the ordered set of issuer candidates the verifier tries for
/// precert signature inputs: the presented chain in order, with the
/// end-entity certificate itself appended last as a degenerate
/// candidate (see spec design note "Multiple issuer candidates").
pub fn candidate_issuers<'a>(ee: &'a Certificate, chain: &'a [Certificate]) -> Vec<&'a Certificate> {
	let mut out: Vec<&Certificate> = chain.iter().collect();
	out.push(ee);
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testdata_fixtures::*;

	#[test]
	fn scts_embedded_finds_precert_sct() {
		let cert = Certificate::from_der(&FINAL_EE_CERT_DER).unwrap();
		let scts = cert.scts_embedded().unwrap();
		assert_eq!(scts.len(), 1);
		assert_eq!(scts[0].log_id, LOG_ID);
		assert_eq!(scts[0].timestamp, SCT_TIMESTAMP_PRECERT_MS);
	}

	#[test]
	fn cert_without_sct_extension_is_empty() {
		let cert = Certificate::from_der(&ISSUER_CERT_DER).unwrap();
		assert!(cert.scts_embedded().unwrap().is_empty());
	}

	#[test]
	fn tbs_for_precert_signing_strips_sct_extension_and_matches_precert_tbs() {
		let cert = Certificate::from_der(&FINAL_EE_CERT_DER).unwrap();
		let stripped = cert.tbs_for_precert_signing().unwrap();
		assert_eq!(stripped, PRECERT_TBS_DER.to_vec());

		let reparsed = TbsCertificate::from_der(&stripped).unwrap();
		let has_sct_ext = reparsed
			.extensions
			.unwrap_or_default()
			.iter()
			.any(|ext| ext.extn_id == OID_SCT_LIST);
		assert!(!has_sct_ext);
	}

	#[test]
	fn issuer_key_hash_matches_fixture() {
		let issuer = Certificate::from_der(&ISSUER_CERT_DER).unwrap();
		assert_eq!(issuer.issuer_key_hash().unwrap(), ISSUER_KEY_HASH);
	}

	#[test]
	fn poisoned_precert_is_detected_as_precertificate() {
		let cert = Certificate::from_der(&POISONED_PRECERT_DER).unwrap();
		assert!(cert.is_precertificate());
	}

	#[test]
	fn final_cert_is_not_a_precertificate() {
		let cert = Certificate::from_der(&FINAL_EE_CERT_DER).unwrap();
		assert!(!cert.is_precertificate());
	}

	#[test]
	fn candidate_issuers_orders_chain_then_ee() {
		let ee = Certificate::from_der(&FINAL_EE_CERT_DER).unwrap();
		let issuer = Certificate::from_der(&ISSUER_CERT_DER).unwrap();
		let chain = vec![issuer.clone()];
		let candidates = candidate_issuers(&ee, &chain);
		assert_eq!(candidates.len(), 2);
		assert_eq!(candidates[0].der(), issuer.der());
		assert_eq!(candidates[1].der(), ee.der());
	}
}
