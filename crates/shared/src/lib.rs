//! Shared utilities for the invitation backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Text folding and ordering helpers for guest-name search and sorting
//! - Common validation logic for editor and guest-facing payloads

pub mod collation;
pub mod validation;
