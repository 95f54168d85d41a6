// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Synthetic but cryptographically real fixtures (real ECDSA P-256
//! signatures, real SHA-256 digests) for unit tests, generated by
//! `testdata/gen_fixtures.py` and `testdata/gen_ocsp.py`. Test-only.

#![cfg(test)]
#![allow(dead_code)]

include!("../testdata/generated_fixtures.rs");
include!("../testdata/generated_ocsp.rs");
