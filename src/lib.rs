// Library target exists for the integration tests and criterion benchmarks.
// The binary entry point is main.rs; this file re-declares the module tree so
// that harnesses can import types via `splitr::app::*` / `splitr::exercise::*`.
// Some code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod event;
pub mod exercise;
pub mod session;
pub mod ui;
