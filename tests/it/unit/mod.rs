//! Unit tests for keyboard-handoff.

mod command_log_tests;
mod config_tests;
mod perf_tests;
