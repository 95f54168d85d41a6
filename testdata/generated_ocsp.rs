// Generated by testdata/gen_ocsp.py. Do not hand-edit.
pub const OCSP_RESPONSE_WITH_SCT: [u8; 336] = [0x30, 0x82, 0x01, 0x4c, 0x0a, 0x01, 0x00, 0xa0, 0x82, 0x01, 0x45, 0x30, 0x82, 0x01, 0x41, 0x06, 0x09, 0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x01, 0x01, 0x04, 0x82, 0x01, 0x32, 0x30, 0x82, 0x01, 0x2e, 0x30, 0x82, 0x01, 0x14, 0xa2, 0x16, 0x04, 0x14, 0x82, 0x68, 0x22, 0x75, 0x5c, 0x75, 0x11, 0xaa, 0x5a, 0xb1, 0x28, 0x9b, 0xda, 0xef, 0xff, 0xe8, 0xc7, 0xc7, 0x7d, 0xc5, 0x18, 0x0f, 0x32, 0x30, 0x32, 0x34, 0x30, 0x36, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x30, 0x81, 0xe8, 0x30, 0x81, 0xe5, 0x30, 0x3b, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x04, 0x14, 0x50, 0x7a, 0x53, 0x09, 0xdf, 0x01, 0xda, 0xf4, 0x8c, 0xbd, 0x9b, 0x4c, 0x14, 0xf7, 0xa3, 0xd8, 0x3f, 0xf4, 0x20, 0x56, 0x04, 0x14, 0x76, 0x40, 0x6c, 0x28, 0x45, 0x89, 0x7c, 0xe1, 0x6a, 0x70, 0x8e, 0x41, 0x06, 0xec, 0x58, 0xcb, 0xc2, 0x9e, 0x53, 0x39, 0x02, 0x02, 0x30, 0x39, 0xa0, 0x02, 0x05, 0x00, 0x18, 0x0f, 0x32, 0x30, 0x32, 0x34, 0x30, 0x36, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0xa1, 0x81, 0x90, 0x30, 0x81, 0x8d, 0x30, 0x81, 0x8a, 0x06, 0x0a, 0x2b, 0x06, 0x01, 0x04, 0x01, 0xd6, 0x79, 0x02, 0x04, 0x05, 0x04, 0x7c, 0x04, 0x7a, 0x00, 0x78, 0x00, 0x76, 0x00, 0xef, 0x62, 0x1c, 0xef, 0x21, 0xfd, 0xef, 0x0a, 0x06, 0x61, 0x0e, 0xce, 0x79, 0x08, 0x25, 0xdf, 0x5f, 0x57, 0xb0, 0x37, 0x10, 0x1a, 0xa8, 0x6a, 0xb8, 0xdc, 0x61, 0x02, 0xec, 0x22, 0xf1, 0xa5, 0x00, 0x00, 0x01, 0x8b, 0xcf, 0xe5, 0x7b, 0x88, 0x00, 0x00, 0x04, 0x03, 0x00, 0x47, 0x30, 0x45, 0x02, 0x20, 0x42, 0xaf, 0x69, 0x98, 0x30, 0x94, 0x5b, 0x35, 0x45, 0x47, 0xb6, 0x0b, 0xd2, 0x09, 0xd8, 0x6a, 0xb3, 0x7c, 0x82, 0x5c, 0x12, 0xfb, 0x3e, 0x7c, 0x47, 0xb9, 0xf8, 0xc7, 0x98, 0xd7, 0x49, 0xeb, 0x02, 0x21, 0x00, 0xdd, 0x2a, 0xf0, 0x40, 0xdc, 0x7f, 0x5a, 0xec, 0x73, 0x06, 0x6a, 0x7a, 0xf3, 0x77, 0x80, 0x97, 0x34, 0xc3, 0xa9, 0x04, 0x13, 0x7c, 0x7b, 0x2a, 0x6d, 0x68, 0x7b, 0x5d, 0x22, 0x37, 0x5d, 0xef, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x03, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
