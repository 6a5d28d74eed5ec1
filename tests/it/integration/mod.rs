//! Integration tests for full notification and drag sequences.

mod replay_tests;
