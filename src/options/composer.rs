//! Artifact composer — source filter and link settings from validated options.

use serde::Serialize;

use crate::options::registry::OptionKey;
use crate::options::validator::{RoutingTable, TargetOs, ValidatedOptions};

/// Unconditional source directories of the CSP tree.
const BASE_SOURCE_FILTER: [&str; 6] = [
    "+<*.c>",
    "+<transport/**/*.c>",
    "+<crypto/**/*.c>",
    "+<interfaces/**/*.c>",
    "+<arch/*.c>",
    "+<rtable/csp_rtable.c>",
];

/// Builder for the ordered source inclusion filter.
#[derive(Debug, Clone)]
pub struct SourceFilterBuilder {
    rules: Vec<String>,
}

impl SourceFilterBuilder {
    /// Start with the fixed base rules.
    pub fn base() -> Self {
        Self {
            rules: owned(&BASE_SOURCE_FILTER),
        }
    }

    /// OS abstraction layer sources.
    pub fn with_os(mut self, os: TargetOs) -> Self {
        self.rules.push(format!("+<arch/{}/**/*.c>", os.as_str()));
        self
    }

    /// Routing table backend source.
    pub fn with_rtable(mut self, rtable: RoutingTable) -> Self {
        self.rules.push(format!("+<rtable/csp_rtable_{}.c>", rtable.as_str()));
        self
    }

    pub fn with_socketcan(mut self, enabled: bool) -> Self {
        if enabled {
            self.rules.push("+<drivers/can/can_socketcan.c>".into());
        }
        self
    }

    /// KISS framing plus the named USART backend.
    pub fn with_usart_driver(mut self, driver: Option<&str>) -> Self {
        if let Some(driver) = driver.filter(|d| !d.is_empty()) {
            self.rules.push("+<drivers/usart/usart_kiss.c>".into());
            self.rules.push(format!("+<drivers/usart/usart_{}.c>", driver));
        }
        self
    }

    pub fn build(self) -> Vec<String> {
        self.rules
    }
}

/// Link libraries and extra compile flags for one OS target.
///
/// The two channels are never merged: `windows` contributes a compile
/// define, not a library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkSettings {
    pub libs: Vec<String>,
    pub extra_flags: Vec<String>,
}

pub fn link_settings(os: TargetOs) -> LinkSettings {
    match os {
        TargetOs::Posix => LinkSettings {
            libs: owned(&["-lrt", "-lpthread", "-lutil"]),
            extra_flags: Vec::new(),
        },
        TargetOs::Macosx => LinkSettings {
            libs: owned(&["-lpthread"]),
            extra_flags: Vec::new(),
        },
        TargetOs::Windows => LinkSettings {
            libs: Vec::new(),
            extra_flags: owned(&["-D_WIN32_WINNT=0x0600"]),
        },
        TargetOs::Freertos => LinkSettings::default(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Everything the build orchestrator needs from one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildArtifacts {
    /// Ordered source inclusion globs.
    pub src_filter: Vec<String>,
    /// Ordered linker flags / library names.
    pub libs: Vec<String>,
    /// Additional compiler flags.
    pub extra_flags: Vec<String>,
}

/// Derive build artifacts from validated options.
pub fn compose(options: &ValidatedOptions) -> BuildArtifacts {
    let src_filter = SourceFilterBuilder::base()
        .with_os(options.os())
        .with_rtable(options.rtable())
        .with_socketcan(options.is_enabled(OptionKey::EnableCanSocketcan))
        .with_usart_driver(options.value(OptionKey::WithDriverUsart))
        .build();

    let LinkSettings { libs, extra_flags } = link_settings(options.os());

    BuildArtifacts {
        src_filter,
        libs,
        extra_flags,
    }
}
