// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Core library for verifying Certificate Transparency Signed
//! Certificate Timestamps delivered via the X.509 extension, the TLS
//! extension, and stapled OCSP responses, per RFC 6962.

pub mod cert;
pub mod codec;
pub mod error;
pub mod handshake;
pub mod log_registry;
pub mod ocsp;
pub mod sct;
pub mod signature_input;
pub mod util;
pub mod verifier;

#[cfg(test)]
mod testdata_fixtures;
