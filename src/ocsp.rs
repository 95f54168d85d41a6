// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! The OCSP adapter: locates the CT SCT-list extension
//! (`1.3.6.1.4.1.11129.2.4.5`) inside a stapled `OCSPResponse`'s
//! `singleExtensions`. Decoded the same way `cert.rs` decodes X.509 --
//! typed `der::Sequence` structs over the `der` crate's reader, not a
//! hand-rolled tag-length-value cursor. RFC 6960's `Extension` is the same
//! `SEQUENCE { id, critical DEFAULT FALSE, value }` grammar RFC 5280
//! defines, so `x509_cert::ext::Extension` is reused as-is for
//! `singleExtensions` rather than redefined.

use der::asn1::{Any, ObjectIdentifier, OctetString};
use der::{Decode, Sequence};
use x509_cert::ext::Extensions;

use crate::error::CoreError;
use crate::sct::{SctList, SignedCertificateTimestamp};

/// The CT SCT-list extension as carried in an OCSP single response --
/// distinct from `cert::OID_SCT_LIST`, the X.509 embedded-SCT extension.
const OID_OCSP_SCT_LIST: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.11129.2.4.5");

/// `OCSPResponse ::= SEQUENCE { responseStatus ENUMERATED, responseBytes
/// [0] EXPLICIT ResponseBytes OPTIONAL }`. `responseStatus` is never
/// inspected here: an unsuccessful response with no `responseBytes` simply
/// has no SCTs to report, which is exactly the "absent" case below.
#[derive(Sequence)]
struct OcspResponse {
	response_status: Any,
	#[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
	response_bytes: Option<ResponseBytes>,
}

/// `ResponseBytes ::= SEQUENCE { responseType OBJECT IDENTIFIER, response
/// OCTET STRING }`. `response` holds the DER-encoded `BasicOCSPResponse`.
#[derive(Sequence)]
struct ResponseBytes {
	response_type: ObjectIdentifier,
	response: OctetString,
}

/// `BasicOCSPResponse ::= SEQUENCE { tbsResponseData ResponseData,
/// signatureAlgorithm AlgorithmIdentifier, signature BIT STRING, certs [0]
/// EXPLICIT SEQUENCE OF Certificate OPTIONAL }`. The signature is never
/// verified here (spec non-goal: revocation/OCSP trust is out of scope),
/// so `signature_algorithm`/`signature`/`certs` are read opaquely.
#[derive(Sequence)]
struct BasicOcspResponse {
	tbs_response_data: ResponseData,
	signature_algorithm: Any,
	signature: Any,
	#[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
	certs: Option<Any>,
}

/// `ResponseData ::= SEQUENCE { version [0] EXPLICIT Version DEFAULT v1,
/// responderID ResponderID, producedAt GeneralizedTime, responses SEQUENCE
/// OF SingleResponse, responseExtensions [1] EXPLICIT Extensions OPTIONAL
/// }`. `responderID` is a `CHOICE` of two context-tagged alternatives;
/// read as `Any` since only `responses` is ever inspected.
#[derive(Sequence)]
struct ResponseData {
	#[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
	version: Option<Any>,
	responder_id: Any,
	produced_at: Any,
	responses: Vec<SingleResponse>,
	#[asn1(context_specific = "1", tag_mode = "EXPLICIT", optional = "true")]
	response_extensions: Option<Extensions>,
}

/// `SingleResponse ::= SEQUENCE { certID CertID, certStatus CertStatus,
/// thisUpdate GeneralizedTime, nextUpdate [0] EXPLICIT GeneralizedTime
/// OPTIONAL, singleExtensions [1] EXPLICIT Extensions OPTIONAL }`.
#[derive(Sequence)]
struct SingleResponse {
	cert_id: Any,
	cert_status: Any,
	this_update: Any,
	#[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
	next_update: Option<Any>,
	#[asn1(context_specific = "1", tag_mode = "EXPLICIT", optional = "true")]
	single_extensions: Option<Extensions>,
}

/// Decodes `responseBytes.response` (an OCTET STRING wrapping a
/// `BasicOCSPResponse`), descends into the first `singleResponse`'s
/// `singleExtensions`, and decodes the SCT-list extension there as a TLS
/// `SctList`. Returns an empty list if any layer -- `responseBytes`, a
/// single response, its extensions, or the CT extension itself -- is
/// absent; an OCSP response with no stapled SCTs is not malformed, merely
/// silent on this channel.
pub fn scts_from_ocsp(response_der: &[u8]) -> Result<Vec<SignedCertificateTimestamp>, CoreError> {
	let response = OcspResponse::from_der(response_der)?;
	let Some(response_bytes) = response.response_bytes else {
		return Ok(Vec::new());
	};

	let basic = BasicOcspResponse::from_der(response_bytes.response.as_bytes())?;

	let Some(single) = basic.tbs_response_data.responses.into_iter().next() else {
		return Ok(Vec::new());
	};
	let Some(extensions) = single.single_extensions else {
		return Ok(Vec::new());
	};

	let mut out = Vec::new();
	for ext in extensions {
		if ext.extn_id != OID_OCSP_SCT_LIST {
			continue;
		}
		// extnValue is itself a DER OCTET STRING whose content is the
		// TLS-encoded SctList.
		let octets = OctetString::from_der(ext.extn_value.as_bytes())?;
		let list = SctList::decode(octets.as_bytes())?;
		out.extend(list.entries);
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testdata_fixtures::*;

	#[test]
	fn scts_from_ocsp_finds_sct_list() {
		let scts = scts_from_ocsp(&OCSP_RESPONSE_WITH_SCT).unwrap();
		assert_eq!(scts.len(), 1);
		assert_eq!(scts[0].log_id, LOG_ID);
		assert_eq!(scts[0].timestamp, SCT_TIMESTAMP_LEAF_MS);
	}

	#[test]
	fn response_without_response_bytes_has_no_scts() {
		// OCSPResponse ::= SEQUENCE { responseStatus ENUMERATED(successful) }
		// with no optional [0] responseBytes at all.
		assert_eq!(scts_from_ocsp(&[0x30, 0x03, 0x0A, 0x01, 0x00]).unwrap(), Vec::new());
	}

	#[test]
	fn truncated_top_level_sequence_is_malformed() {
		// Declares 5 content bytes but only 3 are present.
		assert!(scts_from_ocsp(&[0x30, 0x05, 0x0A, 0x01, 0x00]).is_err());
	}

	#[test]
	fn empty_input_errors() {
		assert!(scts_from_ocsp(&[]).is_err());
	}
}
