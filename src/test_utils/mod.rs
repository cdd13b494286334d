//! Consolidated test utilities and helpers for the scraper.
//!
//! Shared HTML builders, fixtures, mock fetchers and config helpers used
//! throughout the test suite.

#![cfg(test)]

pub mod config;
pub mod html;
pub mod mocks;
