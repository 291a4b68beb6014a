//! Option registry — single source of truth for all CSP build options.

use std::fmt;

/// A recognized build option key.
///
/// The set is closed: input text can never introduce a key outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    DisableOutput,
    EnableRdp,
    EnableRdpFastClose,
    EnableQos,
    EnablePromisc,
    EnableCrc32,
    EnableHmac,
    EnableXtea,
    EnableDedup,
    EnableExternalDebug,
    EnableDebugTimestamp,
    EnableIfZmqhub,
    EnableCanSocketcan,
    WithLoglevel,
    WithDriverUsart,
    WithOs,
    WithRtable,
}

impl OptionKey {
    /// Number of recognized keys.
    pub const COUNT: usize = 17;

    /// Every key, in registry order.
    pub const ALL: [OptionKey; Self::COUNT] = [
        OptionKey::DisableOutput,
        OptionKey::EnableRdp,
        OptionKey::EnableRdpFastClose,
        OptionKey::EnableQos,
        OptionKey::EnablePromisc,
        OptionKey::EnableCrc32,
        OptionKey::EnableHmac,
        OptionKey::EnableXtea,
        OptionKey::EnableDedup,
        OptionKey::EnableExternalDebug,
        OptionKey::EnableDebugTimestamp,
        OptionKey::EnableIfZmqhub,
        OptionKey::EnableCanSocketcan,
        OptionKey::WithLoglevel,
        OptionKey::WithDriverUsart,
        OptionKey::WithOs,
        OptionKey::WithRtable,
    ];

    /// The option name as written in configuration text (e.g. `with-os`).
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::DisableOutput => "disable-output",
            OptionKey::EnableRdp => "enable-rdp",
            OptionKey::EnableRdpFastClose => "enable-rdp-fast-close",
            OptionKey::EnableQos => "enable-qos",
            OptionKey::EnablePromisc => "enable-promisc",
            OptionKey::EnableCrc32 => "enable-crc32",
            OptionKey::EnableHmac => "enable-hmac",
            OptionKey::EnableXtea => "enable-xtea",
            OptionKey::EnableDedup => "enable-dedup",
            OptionKey::EnableExternalDebug => "enable-external-debug",
            OptionKey::EnableDebugTimestamp => "enable-debug-timestamp",
            OptionKey::EnableIfZmqhub => "enable-if-zmqhub",
            OptionKey::EnableCanSocketcan => "enable-can-socketcan",
            OptionKey::WithLoglevel => "with-loglevel",
            OptionKey::WithDriverUsart => "with-driver-usart",
            OptionKey::WithOs => "with-os",
            OptionKey::WithRtable => "with-rtable",
        }
    }

    /// Look up a key by its exact (case-sensitive) name.
    pub fn lookup(name: &str) -> Option<OptionKey> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Position of this key in the option table.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an option is a bare switch or takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Presence enables the feature (e.g. `enable-rdp`).
    Switch,
    /// Written as `name=VALUE`; the placeholder names the value in help text.
    Value { placeholder: &'static str },
}

/// A single option definition.
#[derive(Debug, Clone)]
pub struct OptionDef {
    pub key: OptionKey,
    pub kind: OptionKind,
    /// Human-readable description (for `cspconf options`).
    pub description: &'static str,
}

impl OptionDef {
    /// Usage form, e.g. `with-os=OS` or `enable-rdp`.
    pub fn usage(&self) -> String {
        match self.kind {
            OptionKind::Switch => self.key.as_str().to_string(),
            OptionKind::Value { placeholder } => format!("{}={}", self.key, placeholder),
        }
    }
}

const fn switch(key: OptionKey, description: &'static str) -> OptionDef {
    OptionDef {
        key,
        kind: OptionKind::Switch,
        description,
    }
}

const fn valued(key: OptionKey, placeholder: &'static str, description: &'static str) -> OptionDef {
    OptionDef {
        key,
        kind: OptionKind::Value { placeholder },
        description,
    }
}

static OPTION_REGISTRY: [OptionDef; OptionKey::COUNT] = [
    switch(OptionKey::DisableOutput, "Disable CSP output"),
    switch(OptionKey::EnableRdp, "Enable RDP support"),
    switch(OptionKey::EnableRdpFastClose, "Enable fast close of RDP connections"),
    switch(OptionKey::EnableQos, "Enable Quality of Service support"),
    switch(OptionKey::EnablePromisc, "Enable promiscuous support"),
    switch(OptionKey::EnableCrc32, "Enable CRC32 support"),
    switch(OptionKey::EnableHmac, "Enable HMAC-SHA1 support"),
    switch(OptionKey::EnableXtea, "Enable XTEA support"),
    switch(OptionKey::EnableDedup, "Enable packet deduplicator"),
    switch(OptionKey::EnableExternalDebug, "Enable external debug API"),
    switch(OptionKey::EnableDebugTimestamp, "Enable timestamps on debug/log"),
    switch(OptionKey::EnableIfZmqhub, "Enable ZMQ interface"),
    switch(OptionKey::EnableCanSocketcan, "Enable Linux socketcan driver"),
    valued(OptionKey::WithLoglevel, "LEVEL", "Set log level"),
    valued(OptionKey::WithDriverUsart, "DRIVER", "Build USART driver"),
    valued(OptionKey::WithOs, "OS", "Set operating system"),
    valued(OptionKey::WithRtable, "TYPE", "Set routing table type"),
];

/// The complete option registry, in table order.
pub fn option_registry() -> &'static [OptionDef] {
    &OPTION_REGISTRY
}
