//! Build option resolution for the CSP source tree.
//!
//! Each stage is a pure function over in-memory values:
//!
//! ```text
//! Raw text → Tokenize → Apply (OptionTable) → Validate → Compose → BuildArtifacts
//! ```
//!
//! Data flows strictly forward; no stage calls back into an earlier one.

mod composer;
mod error;
mod pipeline;
mod registry;
mod table;
mod tokenizer;
mod validator;

pub use composer::{compose, link_settings, BuildArtifacts, LinkSettings, SourceFilterBuilder};
pub use error::{OptionError, ResolveError};
pub use pipeline::{resolve, resolve_environment, ResolvedEnvironment, KNOWN_USART_DRIVERS};
pub use registry::{option_registry, OptionDef, OptionKey, OptionKind};
pub use table::{FlagValue, OptionTable};
pub use tokenizer::{tokenize, OptionToken};
pub use validator::{
    enum_constraints, validate, EnumConstraint, LogLevel, RoutingTable, TargetOs,
    ValidatedOptions,
};
