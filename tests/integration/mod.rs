//! Integration test modules.

mod reload_test;
