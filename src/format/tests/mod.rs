//! Unit tests for data set loading.
//!
//! These tests verify parsing and validation against realistic documents.

mod dataset_tests;
