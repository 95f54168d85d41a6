// Generated by testdata/gen_fixtures.py. Do not hand-edit.
pub const LOG_ID: [u8; 32] = [0xef, 0x62, 0x1c, 0xef, 0x21, 0xfd, 0xef, 0x0a, 0x06, 0x61, 0x0e, 0xce, 0x79, 0x08, 0x25, 0xdf, 0x5f, 0x57, 0xb0, 0x37, 0x10, 0x1a, 0xa8, 0x6a, 0xb8, 0xdc, 0x61, 0x02, 0xec, 0x22, 0xf1, 0xa5];
pub const LOG_SPKI_DER: [u8; 91] = [0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00, 0x04, 0xce, 0x26, 0x5f, 0x24, 0x2d, 0x8d, 0x60, 0x4d, 0x36, 0x6b, 0xfa, 0xcf, 0x79, 0xe0, 0x7f, 0x3e, 0x49, 0x6c, 0xc1, 0x4d, 0x1a, 0x56, 0x93, 0xe8, 0xac, 0x71, 0x45, 0xef, 0x5e, 0x44, 0x1e, 0x75, 0x05, 0x75, 0xc4, 0x8f, 0x15, 0x07, 0x8e, 0x5e, 0x1f, 0xc3, 0xe6, 0xb0, 0xcc, 0xd1, 0xcb, 0xdc, 0x30, 0x47, 0x7c, 0xf4, 0x4f, 0xae, 0xed, 0x18, 0xbd, 0x3a, 0x6e, 0x3b, 0xbb, 0x4b, 0xfe, 0x69];
pub const ISSUER_KEY_HASH: [u8; 32] = [0x9e, 0x37, 0xb4, 0xdd, 0x89, 0xe6, 0x44, 0x54, 0xd6, 0x32, 0xcf, 0x6c, 0xf6, 0x26, 0x95, 0x6a, 0x3b, 0xaa, 0xe9, 0xc4, 0xc6, 0x6a, 0xa5, 0x00, 0xac, 0xfb, 0x7c, 0x70, 0xbe, 0x35, 0x5f, 0x0c];
pub const ISSUER_CERT_DER: [u8; 344] = [0x30, 0x82, 0x01, 0x54, 0x30, 0x81, 0xfc, 0xa0, 0x03, 0x02, 0x01, 0x02, 0x02, 0x14, 0x23, 0x57, 0xb9, 0xb9, 0x62, 0x8d, 0xff, 0xd9, 0x8d, 0x79, 0x00, 0xd3, 0x5a, 0x5e, 0x56, 0x24, 0x19, 0x81, 0xfa, 0x3f, 0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02, 0x30, 0x1f, 0x31, 0x1d, 0x30, 0x1b, 0x06, 0x03, 0x55, 0x04, 0x03, 0x0c, 0x14, 0x54, 0x65, 0x73, 0x74, 0x20, 0x49, 0x6e, 0x74, 0x65, 0x72, 0x6d, 0x65, 0x64, 0x69, 0x61, 0x74, 0x65, 0x20, 0x43, 0x41, 0x30, 0x1e, 0x17, 0x0d, 0x32, 0x34, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x17, 0x0d, 0x32, 0x35, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x30, 0x1f, 0x31, 0x1d, 0x30, 0x1b, 0x06, 0x03, 0x55, 0x04, 0x03, 0x0c, 0x14, 0x54, 0x65, 0x73, 0x74, 0x20, 0x49, 0x6e, 0x74, 0x65, 0x72, 0x6d, 0x65, 0x64, 0x69, 0x61, 0x74, 0x65, 0x20, 0x43, 0x41, 0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00, 0x04, 0xd6, 0x5f, 0xc0, 0x6f, 0x4e, 0xde, 0x95, 0x34, 0xb4, 0x4f, 0xfc, 0xaf, 0x96, 0x4c, 0xd7, 0x0f, 0xbe, 0xd0, 0xb1, 0x04, 0xd8, 0x4b, 0x36, 0x95, 0x67, 0xbd, 0x37, 0xaa, 0x6e, 0xa7, 0x5b, 0xe7, 0xf8, 0x7c, 0xef, 0x65, 0x9e, 0x29, 0x75, 0x84, 0xa9, 0x99, 0x1c, 0xeb, 0xeb, 0x03, 0x22, 0x02, 0xbd, 0xf9, 0x70, 0x6b, 0x77, 0xfb, 0xbe, 0xf2, 0xf2, 0xdc, 0x19, 0x86, 0xa0, 0x1d, 0xa5, 0xc8, 0xa3, 0x16, 0x30, 0x14, 0x30, 0x12, 0x06, 0x03, 0x55, 0x1d, 0x13, 0x01, 0x01, 0xff, 0x04, 0x08, 0x30, 0x06, 0x01, 0x01, 0xff, 0x02, 0x01, 0x00, 0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02, 0x03, 0x47, 0x00, 0x30, 0x44, 0x02, 0x20, 0x22, 0x26, 0x2a, 0x6c, 0xa3, 0xe7, 0xd3, 0x8f, 0x48, 0x25, 0xbf, 0xd0, 0xe9, 0x0c, 0x1f, 0x4c, 0xc0, 0x9f, 0x36, 0xb6, 0x8e, 0xf8, 0xc6, 0xd1, 0x29, 0x78, 0x64, 0x8c, 0xc9, 0xbf, 0xcf, 0x2c, 0x02, 0x20, 0x73, 0x1c, 0x43, 0x4d, 0x41, 0x74, 0xe3, 0x5e, 0x43, 0x49, 0xd7, 0x95, 0x27, 0x9e, 0xa0, 0xf0, 0x61, 0xbb, 0x7f, 0x4e, 0x1f, 0x84, 0x14, 0x02, 0x68, 0xe3, 0x4e, 0x80, 0xe8, 0xf3, 0xe2, 0x1d];
pub const FINAL_EE_CERT_DER: [u8; 485] = [0x30, 0x82, 0x01, 0xe1, 0x30, 0x82, 0x01, 0x86, 0xa0, 0x03, 0x02, 0x01, 0x02, 0x02, 0x14, 0x24, 0xba, 0x5f, 0x92, 0x71, 0x6f, 0xf4, 0xf2, 0xe3, 0x7f, 0xd7, 0x24, 0xd8, 0x27, 0xf6, 0x3d, 0x95, 0xa7, 0x53, 0x56, 0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02, 0x30, 0x1f, 0x31, 0x1d, 0x30, 0x1b, 0x06, 0x03, 0x55, 0x04, 0x03, 0x0c, 0x14, 0x54, 0x65, 0x73, 0x74, 0x20, 0x49, 0x6e, 0x74, 0x65, 0x72, 0x6d, 0x65, 0x64, 0x69, 0x61, 0x74, 0x65, 0x20, 0x43, 0x41, 0x30, 0x1e, 0x17, 0x0d, 0x32, 0x34, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x17, 0x0d, 0x32, 0x35, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x30, 0x16, 0x31, 0x14, 0x30, 0x12, 0x06, 0x03, 0x55, 0x04, 0x03, 0x0c, 0x0b, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2e, 0x6f, 0x72, 0x67, 0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00, 0x04, 0xb3, 0x25, 0xcf, 0xe6, 0x7d, 0xde, 0x0a, 0x41, 0xf0, 0x43, 0xb0, 0x48, 0xd7, 0x91, 0xab, 0xb0, 0x33, 0x89, 0x60, 0xeb, 0xa9, 0xb8, 0xb4, 0xaf, 0x8d, 0xa5, 0xcf, 0x2c, 0xca, 0x41, 0x91, 0xed, 0x98, 0x2e, 0x6a, 0xae, 0xa1, 0x19, 0xde, 0x64, 0x59, 0x80, 0x85, 0xc1, 0x45, 0xa8, 0x67, 0x81, 0xfa, 0x49, 0xde, 0xee, 0x8b, 0xfa, 0xc0, 0x5f, 0x14, 0x28, 0xa6, 0xb7, 0x90, 0x73, 0xf6, 0x75, 0xa3, 0x81, 0xa8, 0x30, 0x81, 0xa5, 0x30, 0x16, 0x06, 0x03, 0x55, 0x1d, 0x11, 0x04, 0x0f, 0x30, 0x0d, 0x82, 0x0b, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2e, 0x6f, 0x72, 0x67, 0x30, 0x81, 0x8a, 0x06, 0x0a, 0x2b, 0x06, 0x01, 0x04, 0x01, 0xd6, 0x79, 0x02, 0x04, 0x02, 0x04, 0x7c, 0x04, 0x7a, 0x00, 0x78, 0x00, 0x76, 0x00, 0xef, 0x62, 0x1c, 0xef, 0x21, 0xfd, 0xef, 0x0a, 0x06, 0x61, 0x0e, 0xce, 0x79, 0x08, 0x25, 0xdf, 0x5f, 0x57, 0xb0, 0x37, 0x10, 0x1a, 0xa8, 0x6a, 0xb8, 0xdc, 0x61, 0x02, 0xec, 0x22, 0xf1, 0xa5, 0x00, 0x00, 0x01, 0x8b, 0xcf, 0xe5, 0x68, 0x00, 0x00, 0x00, 0x04, 0x03, 0x00, 0x47, 0x30, 0x45, 0x02, 0x21, 0x00, 0x9b, 0x10, 0x9e, 0x02, 0x2a, 0xf1, 0x11, 0xf6, 0x27, 0xef, 0x02, 0xd7, 0xba, 0x7f, 0xda, 0x3e, 0xee, 0x3e, 0xc5, 0xce, 0x58, 0x5a, 0x28, 0x4c, 0x3f, 0x08, 0x59, 0x66, 0x1e, 0xec, 0x5f, 0x69, 0x02, 0x20, 0x71, 0xb1, 0xdd, 0xa3, 0x72, 0xa1, 0xeb, 0x1f, 0x82, 0x7d, 0x4b, 0x10, 0xf1, 0x37, 0x1b, 0x8a, 0x00, 0x81, 0x7f, 0xde, 0x6e, 0xee, 0xe1, 0xdd, 0x1e, 0x03, 0x48, 0x68, 0x69, 0x80, 0x0c, 0xb7, 0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02, 0x03, 0x49, 0x00, 0x30, 0x46, 0x02, 0x21, 0x00, 0xe3, 0xab, 0x3e, 0xe9, 0x90, 0x7e, 0xdf, 0x40, 0x2d, 0x14, 0xa3, 0xbd, 0x37, 0xf4, 0xd5, 0xcf, 0x88, 0xd9, 0x83, 0x9e, 0xa0, 0xf2, 0xe8, 0xfe, 0xf7, 0x7d, 0x77, 0xa8, 0x1f, 0xee, 0x20, 0x03, 0x02, 0x21, 0x00, 0xca, 0x38, 0x23, 0x9a, 0xff, 0xbf, 0xbd, 0xf5, 0xa9, 0xd0, 0xde, 0x21, 0xff, 0x31, 0xe6, 0xda, 0xbf, 0xd1, 0xd7, 0xed, 0x26, 0xc4, 0xd7, 0xba, 0xf3, 0x86, 0xe3, 0x4b, 0xdd, 0x60, 0xc3, 0x31];
pub const POISONED_PRECERT_DER: [u8; 362] = [0x30, 0x82, 0x01, 0x66, 0x30, 0x82, 0x01, 0x0c, 0xa0, 0x03, 0x02, 0x01, 0x02, 0x02, 0x14, 0x24, 0xba, 0x5f, 0x92, 0x71, 0x6f, 0xf4, 0xf2, 0xe3, 0x7f, 0xd7, 0x24, 0xd8, 0x27, 0xf6, 0x3d, 0x95, 0xa7, 0x53, 0x56, 0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02, 0x30, 0x1f, 0x31, 0x1d, 0x30, 0x1b, 0x06, 0x03, 0x55, 0x04, 0x03, 0x0c, 0x14, 0x54, 0x65, 0x73, 0x74, 0x20, 0x49, 0x6e, 0x74, 0x65, 0x72, 0x6d, 0x65, 0x64, 0x69, 0x61, 0x74, 0x65, 0x20, 0x43, 0x41, 0x30, 0x1e, 0x17, 0x0d, 0x32, 0x34, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x17, 0x0d, 0x32, 0x35, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x30, 0x16, 0x31, 0x14, 0x30, 0x12, 0x06, 0x03, 0x55, 0x04, 0x03, 0x0c, 0x0b, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2e, 0x6f, 0x72, 0x67, 0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00, 0x04, 0xb3, 0x25, 0xcf, 0xe6, 0x7d, 0xde, 0x0a, 0x41, 0xf0, 0x43, 0xb0, 0x48, 0xd7, 0x91, 0xab, 0xb0, 0x33, 0x89, 0x60, 0xeb, 0xa9, 0xb8, 0xb4, 0xaf, 0x8d, 0xa5, 0xcf, 0x2c, 0xca, 0x41, 0x91, 0xed, 0x98, 0x2e, 0x6a, 0xae, 0xa1, 0x19, 0xde, 0x64, 0x59, 0x80, 0x85, 0xc1, 0x45, 0xa8, 0x67, 0x81, 0xfa, 0x49, 0xde, 0xee, 0x8b, 0xfa, 0xc0, 0x5f, 0x14, 0x28, 0xa6, 0xb7, 0x90, 0x73, 0xf6, 0x75, 0xa3, 0x2f, 0x30, 0x2d, 0x30, 0x16, 0x06, 0x03, 0x55, 0x1d, 0x11, 0x04, 0x0f, 0x30, 0x0d, 0x82, 0x0b, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2e, 0x6f, 0x72, 0x67, 0x30, 0x13, 0x06, 0x0a, 0x2b, 0x06, 0x01, 0x04, 0x01, 0xd6, 0x79, 0x02, 0x04, 0x03, 0x01, 0x01, 0xff, 0x04, 0x02, 0x05, 0x00, 0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02, 0x03, 0x48, 0x00, 0x30, 0x45, 0x02, 0x21, 0x00, 0xc3, 0xea, 0xfe, 0x1d, 0x5a, 0xb8, 0xd8, 0xb3, 0x3a, 0x0f, 0x39, 0x99, 0x42, 0x15, 0x46, 0x2f, 0xf5, 0xfc, 0x47, 0x56, 0x0d, 0x94, 0x72, 0x0c, 0x22, 0xe7, 0x3f, 0xdf, 0x26, 0x2c, 0x3d, 0x5f, 0x02, 0x20, 0x06, 0x67, 0xd2, 0x6f, 0xd3, 0x98, 0x1e, 0xd9, 0xce, 0x25, 0x94, 0xa9, 0x51, 0x1c, 0xa3, 0xb6, 0xaa, 0xf8, 0x8b, 0x3e, 0xdc, 0x5f, 0x10, 0x2c, 0xf9, 0x6f, 0x28, 0x58, 0x8a, 0x3d, 0x75, 0xb6];
pub const PRECERT_TBS_DER: [u8; 250] = [0x30, 0x81, 0xf7, 0xa0, 0x03, 0x02, 0x01, 0x02, 0x02, 0x14, 0x24, 0xba, 0x5f, 0x92, 0x71, 0x6f, 0xf4, 0xf2, 0xe3, 0x7f, 0xd7, 0x24, 0xd8, 0x27, 0xf6, 0x3d, 0x95, 0xa7, 0x53, 0x56, 0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02, 0x30, 0x1f, 0x31, 0x1d, 0x30, 0x1b, 0x06, 0x03, 0x55, 0x04, 0x03, 0x0c, 0x14, 0x54, 0x65, 0x73, 0x74, 0x20, 0x49, 0x6e, 0x74, 0x65, 0x72, 0x6d, 0x65, 0x64, 0x69, 0x61, 0x74, 0x65, 0x20, 0x43, 0x41, 0x30, 0x1e, 0x17, 0x0d, 0x32, 0x34, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x17, 0x0d, 0x32, 0x35, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x30, 0x16, 0x31, 0x14, 0x30, 0x12, 0x06, 0x03, 0x55, 0x04, 0x03, 0x0c, 0x0b, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2e, 0x6f, 0x72, 0x67, 0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00, 0x04, 0xb3, 0x25, 0xcf, 0xe6, 0x7d, 0xde, 0x0a, 0x41, 0xf0, 0x43, 0xb0, 0x48, 0xd7, 0x91, 0xab, 0xb0, 0x33, 0x89, 0x60, 0xeb, 0xa9, 0xb8, 0xb4, 0xaf, 0x8d, 0xa5, 0xcf, 0x2c, 0xca, 0x41, 0x91, 0xed, 0x98, 0x2e, 0x6a, 0xae, 0xa1, 0x19, 0xde, 0x64, 0x59, 0x80, 0x85, 0xc1, 0x45, 0xa8, 0x67, 0x81, 0xfa, 0x49, 0xde, 0xee, 0x8b, 0xfa, 0xc0, 0x5f, 0x14, 0x28, 0xa6, 0xb7, 0x90, 0x73, 0xf6, 0x75, 0xa3, 0x1a, 0x30, 0x18, 0x30, 0x16, 0x06, 0x03, 0x55, 0x1d, 0x11, 0x04, 0x0f, 0x30, 0x0d, 0x82, 0x0b, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2e, 0x6f, 0x72, 0x67];
pub const SCT_PRECERT: [u8; 118] = [0x00, 0xef, 0x62, 0x1c, 0xef, 0x21, 0xfd, 0xef, 0x0a, 0x06, 0x61, 0x0e, 0xce, 0x79, 0x08, 0x25, 0xdf, 0x5f, 0x57, 0xb0, 0x37, 0x10, 0x1a, 0xa8, 0x6a, 0xb8, 0xdc, 0x61, 0x02, 0xec, 0x22, 0xf1, 0xa5, 0x00, 0x00, 0x01, 0x8b, 0xcf, 0xe5, 0x68, 0x00, 0x00, 0x00, 0x04, 0x03, 0x00, 0x47, 0x30, 0x45, 0x02, 0x21, 0x00, 0x9b, 0x10, 0x9e, 0x02, 0x2a, 0xf1, 0x11, 0xf6, 0x27, 0xef, 0x02, 0xd7, 0xba, 0x7f, 0xda, 0x3e, 0xee, 0x3e, 0xc5, 0xce, 0x58, 0x5a, 0x28, 0x4c, 0x3f, 0x08, 0x59, 0x66, 0x1e, 0xec, 0x5f, 0x69, 0x02, 0x20, 0x71, 0xb1, 0xdd, 0xa3, 0x72, 0xa1, 0xeb, 0x1f, 0x82, 0x7d, 0x4b, 0x10, 0xf1, 0x37, 0x1b, 0x8a, 0x00, 0x81, 0x7f, 0xde, 0x6e, 0xee, 0xe1, 0xdd, 0x1e, 0x03, 0x48, 0x68, 0x69, 0x80, 0x0c, 0xb7];
pub const SCT_LEAF: [u8; 118] = [0x00, 0xef, 0x62, 0x1c, 0xef, 0x21, 0xfd, 0xef, 0x0a, 0x06, 0x61, 0x0e, 0xce, 0x79, 0x08, 0x25, 0xdf, 0x5f, 0x57, 0xb0, 0x37, 0x10, 0x1a, 0xa8, 0x6a, 0xb8, 0xdc, 0x61, 0x02, 0xec, 0x22, 0xf1, 0xa5, 0x00, 0x00, 0x01, 0x8b, 0xcf, 0xe5, 0x7b, 0x88, 0x00, 0x00, 0x04, 0x03, 0x00, 0x47, 0x30, 0x45, 0x02, 0x20, 0x42, 0xaf, 0x69, 0x98, 0x30, 0x94, 0x5b, 0x35, 0x45, 0x47, 0xb6, 0x0b, 0xd2, 0x09, 0xd8, 0x6a, 0xb3, 0x7c, 0x82, 0x5c, 0x12, 0xfb, 0x3e, 0x7c, 0x47, 0xb9, 0xf8, 0xc7, 0x98, 0xd7, 0x49, 0xeb, 0x02, 0x21, 0x00, 0xdd, 0x2a, 0xf0, 0x40, 0xdc, 0x7f, 0x5a, 0xec, 0x73, 0x06, 0x6a, 0x7a, 0xf3, 0x77, 0x80, 0x97, 0x34, 0xc3, 0xa9, 0x04, 0x13, 0x7c, 0x7b, 0x2a, 0x6d, 0x68, 0x7b, 0x5d, 0x22, 0x37, 0x5d, 0xef];
pub const BAD_SCT_LEAF: [u8; 122] = [0x00, 0x78, 0x00, 0x76, 0x00, 0xef, 0x62, 0x1c, 0xef, 0x21, 0xfd, 0xef, 0x0a, 0x06, 0x61, 0x0e, 0xce, 0x79, 0x08, 0x25, 0xdf, 0x5f, 0x57, 0xb0, 0x37, 0x10, 0x1a, 0xa8, 0x6a, 0xb8, 0xdc, 0x61, 0x02, 0xec, 0x22, 0xf1, 0xa5, 0x00, 0x00, 0x01, 0x8b, 0xcf, 0xe5, 0x7b, 0x88, 0x00, 0x00, 0x04, 0x03, 0x00, 0x47, 0x30, 0x45, 0x02, 0x20, 0x42, 0xaf, 0x69, 0x98, 0x30, 0x94, 0x5b, 0x35, 0x45, 0x47, 0xb6, 0x0b, 0xd2, 0x09, 0xd8, 0x6a, 0xb3, 0x7c, 0x82, 0x5c, 0x12, 0xfb, 0x3e, 0x7c, 0x47, 0xb9, 0xf8, 0xc7, 0x98, 0xd7, 0x49, 0xeb, 0x02, 0x21, 0x00, 0xdd, 0x2a, 0xf0, 0x40, 0xdc, 0x7f, 0x5a, 0xec, 0x73, 0x06, 0x6a, 0x7a, 0xf3, 0x77, 0x80, 0x97, 0x34, 0xc3, 0xa9, 0x04, 0x13, 0x7c, 0x7b, 0x2a, 0x6d, 0x68, 0x7b, 0x5d, 0x22, 0x37, 0x5d, 0x10];
pub const LEAF_SCT_LIST: [u8; 122] = [0x00, 0x78, 0x00, 0x76, 0x00, 0xef, 0x62, 0x1c, 0xef, 0x21, 0xfd, 0xef, 0x0a, 0x06, 0x61, 0x0e, 0xce, 0x79, 0x08, 0x25, 0xdf, 0x5f, 0x57, 0xb0, 0x37, 0x10, 0x1a, 0xa8, 0x6a, 0xb8, 0xdc, 0x61, 0x02, 0xec, 0x22, 0xf1, 0xa5, 0x00, 0x00, 0x01, 0x8b, 0xcf, 0xe5, 0x7b, 0x88, 0x00, 0x00, 0x04, 0x03, 0x00, 0x47, 0x30, 0x45, 0x02, 0x20, 0x42, 0xaf, 0x69, 0x98, 0x30, 0x94, 0x5b, 0x35, 0x45, 0x47, 0xb6, 0x0b, 0xd2, 0x09, 0xd8, 0x6a, 0xb3, 0x7c, 0x82, 0x5c, 0x12, 0xfb, 0x3e, 0x7c, 0x47, 0xb9, 0xf8, 0xc7, 0x98, 0xd7, 0x49, 0xeb, 0x02, 0x21, 0x00, 0xdd, 0x2a, 0xf0, 0x40, 0xdc, 0x7f, 0x5a, 0xec, 0x73, 0x06, 0x6a, 0x7a, 0xf3, 0x77, 0x80, 0x97, 0x34, 0xc3, 0xa9, 0x04, 0x13, 0x7c, 0x7b, 0x2a, 0x6d, 0x68, 0x7b, 0x5d, 0x22, 0x37, 0x5d, 0xef];
pub const EXT18_ENVELOPE: [u8; 126] = [0x00, 0x12, 0x00, 0x7a, 0x00, 0x78, 0x00, 0x76, 0x00, 0xef, 0x62, 0x1c, 0xef, 0x21, 0xfd, 0xef, 0x0a, 0x06, 0x61, 0x0e, 0xce, 0x79, 0x08, 0x25, 0xdf, 0x5f, 0x57, 0xb0, 0x37, 0x10, 0x1a, 0xa8, 0x6a, 0xb8, 0xdc, 0x61, 0x02, 0xec, 0x22, 0xf1, 0xa5, 0x00, 0x00, 0x01, 0x8b, 0xcf, 0xe5, 0x7b, 0x88, 0x00, 0x00, 0x04, 0x03, 0x00, 0x47, 0x30, 0x45, 0x02, 0x20, 0x42, 0xaf, 0x69, 0x98, 0x30, 0x94, 0x5b, 0x35, 0x45, 0x47, 0xb6, 0x0b, 0xd2, 0x09, 0xd8, 0x6a, 0xb3, 0x7c, 0x82, 0x5c, 0x12, 0xfb, 0x3e, 0x7c, 0x47, 0xb9, 0xf8, 0xc7, 0x98, 0xd7, 0x49, 0xeb, 0x02, 0x21, 0x00, 0xdd, 0x2a, 0xf0, 0x40, 0xdc, 0x7f, 0x5a, 0xec, 0x73, 0x06, 0x6a, 0x7a, 0xf3, 0x77, 0x80, 0x97, 0x34, 0xc3, 0xa9, 0x04, 0x13, 0x7c, 0x7b, 0x2a, 0x6d, 0x68, 0x7b, 0x5d, 0x22, 0x37, 0x5d, 0xef];
pub const SCT_TIMESTAMP_PRECERT_MS: u64 = 1700000000000;
pub const SCT_TIMESTAMP_LEAF_MS: u64 = 1700000005000;
