//! Integration tests for city-seeder
//!
//! These tests run the real HTTP client against a local mock server.

pub mod postgrest_store_tests;
pub mod seeder_tests;
