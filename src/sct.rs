// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! `SignedCertificateTimestamp`, `SctList` and the TLS extension-18
//! envelope (RFC 6962 §3.2, §3.3). These are pure data plus codec glue;
//! no cryptography lives in this module.

use crate::codec::{CodecError, Reader, Writer};

pub const SCT_VERSION_V1: u8 = 0;

/// A single Signed Certificate Timestamp, RFC 6962 §3.2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedCertificateTimestamp {
	pub version: u8,
	pub log_id: [u8; 32],
	pub timestamp: u64,
	pub extensions: Vec<u8>,
	pub signature_algorithm_hash: u8,
	pub signature_algorithm_sign: u8,
	pub signature: Vec<u8>,
}

impl SignedCertificateTimestamp {
	pub fn decode(r: &mut Reader<'_>) -> Result<Self, CodecError> {
		let version = r.u8()?;
		let log_id_bytes = r.bytes(32)?;
		let mut log_id = [0u8; 32];
		log_id.copy_from_slice(log_id_bytes);
		let timestamp = r.u64()?;
		let extensions = r.opaque16()?.to_vec();
		let signature_algorithm_hash = r.u8()?;
		let signature_algorithm_sign = r.u8()?;
		let signature = r.opaque16()?.to_vec();
		Ok(Self {
			version,
			log_id,
			timestamp,
			extensions,
			signature_algorithm_hash,
			signature_algorithm_sign,
			signature,
		})
	}

	pub fn encode(&self, w: &mut Writer) {
		w.u8(self.version);
		w.raw(&self.log_id);
		w.u64(self.timestamp);
		w.opaque16(&self.extensions);
		w.u8(self.signature_algorithm_hash);
		w.u8(self.signature_algorithm_sign);
		w.opaque16(&self.signature);
	}

	fn encode_to_vec(&self) -> Vec<u8> {
		let mut w = Writer::new();
		self.encode(&mut w);
		w.into_bytes()
	}
}

/// A `SignedCertificateTimestampList`: `u16 total_len` followed by a
/// sequence of `u16 sct_len || sct_bytes` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SctList {
	pub entries: Vec<SignedCertificateTimestamp>,
}

impl SctList {
	pub fn new(entries: Vec<SignedCertificateTimestamp>) -> Self {
		Self { entries }
	}

	pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
		let mut outer = Reader::new(bytes);
		let body = outer.opaque16()?;
		outer.finish()?;

		let mut entries = Vec::new();
		let mut r = Reader::new(body);
		while !r.is_empty() {
			let entry_bytes = r.opaque16()?;
			let mut entry_reader = Reader::new(entry_bytes);
			let sct = SignedCertificateTimestamp::decode(&mut entry_reader)?;
			entry_reader.finish()?;
			entries.push(sct);
		}
		Ok(Self { entries })
	}

	pub fn encode(&self) -> Vec<u8> {
		let mut body = Writer::new();
		for entry in &self.entries {
			body.opaque16(&entry.encode_to_vec());
		}
		let mut outer = Writer::new();
		outer.opaque16(&body.into_bytes());
		outer.into_bytes()
	}
}

pub const EXT_TYPE_SIGNED_CERTIFICATE_TIMESTAMP: u16 = 18;

/// The TLS handshake extension-18 reply, captured verbatim by the
/// handshake adapter: `u16 ext_type || u16 inner_len || SctList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsExtension18Envelope {
	pub sct_list: SctList,
}

impl TlsExtension18Envelope {
	pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
		let mut r = Reader::new(bytes);
		let ext_type = r.u16()?;
		if ext_type != EXT_TYPE_SIGNED_CERTIFICATE_TIMESTAMP {
			return Err(CodecError::WrongExtensionType {
				expected: EXT_TYPE_SIGNED_CERTIFICATE_TIMESTAMP,
				found: ext_type,
			});
		}
		// `opaque16` here reads the `inner_len`-prefixed body; that body is
		// itself exactly an SctList's wire form (`u16 total_len || entries`).
		let inner = r.opaque16()?;
		r.finish()?;
		let sct_list = SctList::decode(inner)?;
		Ok(Self { sct_list })
	}

	pub fn encode(&self) -> Vec<u8> {
		let inner = self.sct_list.encode();
		let mut w = Writer::new();
		w.u16(EXT_TYPE_SIGNED_CERTIFICATE_TIMESTAMP);
		w.opaque16(&inner);
		w.into_bytes()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_sct(byte: u8) -> SignedCertificateTimestamp {
		SignedCertificateTimestamp {
			version: SCT_VERSION_V1,
			log_id: [byte; 32],
			timestamp: 1_700_000_000_000,
			extensions: Vec::new(),
			signature_algorithm_hash: 4,
			signature_algorithm_sign: 3,
			signature: vec![0xAA, 0xBB, 0xCC, byte],
		}
	}

	#[test]
	fn sct_roundtrip() {
		let sct = sample_sct(7);
		let bytes = sct.encode_to_vec();
		let mut r = Reader::new(&bytes);
		let decoded = SignedCertificateTimestamp::decode(&mut r).unwrap();
		r.finish().unwrap();
		assert_eq!(sct, decoded);
	}

	#[test]
	fn sct_list_total_len_invariant() {
		let list = SctList::new(vec![sample_sct(1), sample_sct(2), sample_sct(3)]);
		let encoded = list.encode();
		let mut r = Reader::new(&encoded);
		let total_len = r.opaque16().unwrap().len();
		let expected: usize =
			list.entries.iter().map(|e| 2 + e.encode_to_vec().len()).sum();
		assert_eq!(total_len, expected);
	}

	#[test]
	fn sct_list_roundtrip() {
		let list = SctList::new(vec![sample_sct(9), sample_sct(10)]);
		let encoded = list.encode();
		let decoded = SctList::decode(&encoded).unwrap();
		assert_eq!(list, decoded);
	}

	#[test]
	fn empty_sct_list_decodes() {
		let list = SctList::new(vec![]);
		let decoded = SctList::decode(&list.encode()).unwrap();
		assert!(decoded.entries.is_empty());
	}

	#[test]
	fn extension18_envelope_roundtrip() {
		let list = SctList::new(vec![sample_sct(5)]);
		let env = TlsExtension18Envelope { sct_list: list };
		let bytes = env.encode();
		let decoded = TlsExtension18Envelope::decode(&bytes).unwrap();
		assert_eq!(env, decoded);
	}

	#[test]
	fn extension18_envelope_rejects_wrong_type() {
		let mut w = Writer::new();
		w.u16(19);
		w.opaque16(&SctList::default().encode());
		let bytes = w.into_bytes();
		assert!(TlsExtension18Envelope::decode(&bytes).is_err());
	}

	#[test]
	fn generated_fixture_leaf_sct_list_decodes() {
		use crate::testdata_fixtures::*;
		let list = SctList::decode(&LEAF_SCT_LIST).unwrap();
		assert_eq!(list.entries.len(), 1);
		assert_eq!(list.entries[0].log_id, LOG_ID);
	}

	#[test]
	fn generated_fixture_ext18_envelope_decodes() {
		use crate::testdata_fixtures::*;
		let env = TlsExtension18Envelope::decode(&EXT18_ENVELOPE).unwrap();
		assert_eq!(env.sct_list.entries.len(), 1);
		assert_eq!(env.sct_list.entries[0].timestamp, SCT_TIMESTAMP_LEAF_MS);
	}
}
