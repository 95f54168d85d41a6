// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Maps a 32-byte CT log ID to its public key and metadata, loaded from
//! the Google-style `log_list` JSON schema (`operators`/`logs`).

use std::collections::HashMap;

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::CoreError;

/// Chrome's acceptance state for a log, from the log-list's `state` map.
/// Kept as an enum rather than a boolean -- the real schema names more
/// than two states and a report that only said "trusted: yes/no" would
/// throw away information the original tool displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeStatus {
	Usable,
	Qualified,
	Pending,
	ReadOnly,
	Retired,
	Rejected,
	Unknown,
}

impl ChromeStatus {
	fn from_state_key(key: &str) -> Self {
		match key {
			"usable" => Self::Usable,
			"qualified" => Self::Qualified,
			"pending" => Self::Pending,
			"readonly" => Self::ReadOnly,
			"retired" => Self::Retired,
			"rejected" => Self::Rejected,
			_ => Self::Unknown,
		}
	}
}

impl std::fmt::Display for ChromeStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let s = match self {
			Self::Usable => "usable",
			Self::Qualified => "qualified",
			Self::Pending => "pending",
			Self::ReadOnly => "readonly",
			Self::Retired => "retired",
			Self::Rejected => "rejected",
			Self::Unknown => "unknown",
		};
		f.write_str(s)
	}
}

/// A single CT log.
#[derive(Debug, Clone)]
pub struct Log {
	pub log_id: [u8; 32],
	pub description: String,
	/// DER-encoded `SubjectPublicKeyInfo`, as stored in the log list.
	pub key: Vec<u8>,
	pub operator: String,
	pub chrome_status: ChromeStatus,
	pub mmd_seconds: u32,
}

impl Log {
	/// The raw key-algorithm-specific bits inside this log's SPKI --
	/// the uncompressed EC point for ECDSA keys, or the DER `RSAPublicKey`
	/// sequence for RSA keys. This is the byte form `ring`'s
	/// `UnparsedPublicKey` expects; the SPKI wrapper itself is not a
	/// public-key format `ring` understands.
	pub fn public_key_bits(&self) -> Result<Vec<u8>, CoreError> {
		use spki::SubjectPublicKeyInfoOwned;
		use x509_cert::der::Decode;

		let spki = SubjectPublicKeyInfoOwned::from_der(&self.key)
			.map_err(|e| CoreError::MalformedContainer(format!("bad log SPKI: {e}")))?;
		Ok(spki.subject_public_key.raw_bytes().to_vec())
	}
}

#[derive(Debug, Deserialize)]
struct LogListDoc {
	operators: Vec<OperatorDoc>,
	logs: Vec<LogDoc>,
}

#[derive(Debug, Deserialize)]
struct OperatorDoc {
	id: Option<u32>,
	name: String,
}

#[derive(Debug, Deserialize)]
struct LogDoc {
	description: String,
	log_id: String,
	key: String,
	mmd: u32,
	#[serde(default)]
	state: HashMap<String, serde_json::Value>,
	#[serde(default)]
	operated_by: Vec<u32>,
}

/// A read-only collection of known CT logs, indexed by log ID.
#[derive(Debug, Default)]
pub struct LogRegistry {
	by_id: HashMap<[u8; 32], Log>,
}

impl LogRegistry {
	pub fn lookup(&self, log_id: &[u8; 32]) -> Option<&Log> {
		self.by_id.get(log_id)
	}

	pub fn len(&self) -> usize {
		self.by_id.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_id.is_empty()
	}

	/// Loads and validates a log-list JSON document: `log_id` is
	/// recomputed as `SHA256(key)` and must match the declared value;
	/// `operated_by` is dereferenced against `operators` and joined in as
	/// each log's `operator` field.
	pub fn load_from_json(json: &str) -> Result<Self, CoreError> {
		let doc: LogListDoc = serde_json::from_str(json)
			.map_err(|e| CoreError::ConfigError(format!("invalid log-list JSON: {e}")))?;

		let operator_names: HashMap<u32, String> = doc
			.operators
			.iter()
			.enumerate()
			.map(|(idx, op)| (op.id.unwrap_or(idx as u32), op.name.clone()))
			.collect();

		let mut by_id = HashMap::with_capacity(doc.logs.len());
		for log in doc.logs {
			let key = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &log.key)
				.map_err(|e| CoreError::ConfigError(format!("log '{}': bad base64 key: {e}", log.description)))?;
			let declared_id: [u8; 32] = base64::Engine::decode(
				&base64::engine::general_purpose::STANDARD,
				&log.log_id,
			)
			.map_err(|e| CoreError::ConfigError(format!("log '{}': bad base64 log_id: {e}", log.description)))?
			.try_into()
			.map_err(|_| CoreError::ConfigError(format!("log '{}': log_id is not 32 bytes", log.description)))?;

			let computed_id: [u8; 32] = Sha256::digest(&key).into();
			if computed_id != declared_id {
				return Err(CoreError::ConfigError(format!(
					"log '{}': SHA256(key) does not match declared log_id",
					log.description
				)));
			}

			let operator = log
				.operated_by
				.first()
				.and_then(|id| operator_names.get(id))
				.cloned()
				.unwrap_or_default();

			let chrome_status = log
				.state
				.keys()
				.next()
				.map(|k| ChromeStatus::from_state_key(k))
				.unwrap_or(ChromeStatus::Unknown);

			by_id.insert(
				computed_id,
				Log {
					log_id: computed_id,
					description: log.description,
					key,
					operator,
					chrome_status,
					mmd_seconds: log.mmd,
				},
			);
		}

		Ok(Self { by_id })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use base64::Engine;

	fn sample_json(log_id_b64: &str, key_b64: &str) -> String {
		format!(
			r#"{{
				"operators": [{{"id": 0, "name": "Test Operator"}}],
				"logs": [{{
					"description": "Test Log 2024",
					"log_id": "{log_id_b64}",
					"key": "{key_b64}",
					"mmd": 86400,
					"state": {{"usable": {{"timestamp": "2024-01-01T00:00:00Z"}}}},
					"operated_by": [0]
				}}]
			}}"#
		)
	}

	#[test]
	fn load_from_json_validates_log_id_invariant() {
		let key = crate::testdata_fixtures::LOG_SPKI_DER.to_vec();
		let log_id = crate::testdata_fixtures::LOG_ID;
		let key_b64 = base64::engine::general_purpose::STANDARD.encode(&key);
		let id_b64 = base64::engine::general_purpose::STANDARD.encode(log_id);

		let registry = LogRegistry::load_from_json(&sample_json(&id_b64, &key_b64)).unwrap();
		assert_eq!(registry.len(), 1);
		let log = registry.lookup(&log_id).unwrap();
		assert_eq!(log.description, "Test Log 2024");
		assert_eq!(log.operator, "Test Operator");
		assert_eq!(log.chrome_status, ChromeStatus::Usable);
	}

	#[test]
	fn load_from_json_rejects_mismatched_log_id() {
		let key = crate::testdata_fixtures::LOG_SPKI_DER.to_vec();
		let key_b64 = base64::engine::general_purpose::STANDARD.encode(&key);
		let wrong_id_b64 = base64::engine::general_purpose::STANDARD.encode([0u8; 32]);

		let result = LogRegistry::load_from_json(&sample_json(&wrong_id_b64, &key_b64));
		assert!(result.is_err());
	}
}
