//! Embedded word list
//!
//! Words compiled into the binary at build time, for play without network.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/offline.rs"));
