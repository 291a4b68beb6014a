//! cspconf — resolves CSP build options for a build environment.
//!
//! ```text
//! raw option text → tokenize → apply → validate → compose → BuildArtifacts
//! ```

pub mod config;
pub mod logging;
pub mod options;
