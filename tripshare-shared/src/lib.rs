#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::multiple_crate_versions)]

//! Data-transfer shapes mirroring the Tripshare backend's JSON records.

pub mod models;
