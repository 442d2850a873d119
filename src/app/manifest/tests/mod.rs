//! Test modules for manifest processing
//!
//! This module contains integration tests that load manifests from real files.
