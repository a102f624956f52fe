//! Embedded sample vocabulary
//!
//! Compiled into the binary at build time.

// Include generated vocabulary from build script
include!(concat!(env!("OUT_DIR"), "/sample.rs"));
