//! Option validator — checks enum-constrained options against their allowed sets.

use crate::options::error::OptionError;
use crate::options::registry::OptionKey;
use crate::options::table::OptionTable;

/// Declares a closed value set whose names, `as_str` and parser all come
/// from one list.
macro_rules! closed_values {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const NAMES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

closed_values! {
    /// Target operating system (`with-os`).
    TargetOs {
        Posix => "posix",
        Windows => "windows",
        Freertos => "freertos",
        Macosx => "macosx",
    }
}

closed_values! {
    /// Library log level (`with-loglevel`).
    LogLevel {
        Error => "error",
        Warn => "warn",
        Info => "info",
        Debug => "debug",
    }
}

closed_values! {
    /// Routing table backend (`with-rtable`).
    RoutingTable {
        Static => "static",
        Cidr => "cidr",
    }
}

/// Closed set of legal values for one option.
#[derive(Debug, Clone, Copy)]
pub struct EnumConstraint {
    pub key: OptionKey,
    pub allowed: &'static [&'static str],
}

static ENUM_CONSTRAINTS: [EnumConstraint; 3] = [
    EnumConstraint {
        key: OptionKey::WithOs,
        allowed: TargetOs::NAMES,
    },
    EnumConstraint {
        key: OptionKey::WithLoglevel,
        allowed: LogLevel::NAMES,
    },
    EnumConstraint {
        key: OptionKey::WithRtable,
        allowed: RoutingTable::NAMES,
    },
];

/// Enum constraints, in the order they are checked.
pub fn enum_constraints() -> &'static [EnumConstraint] {
    &ENUM_CONSTRAINTS
}

/// A table whose enum-constrained options are known to be valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOptions {
    table: OptionTable,
    os: TargetOs,
    log_level: LogLevel,
    rtable: RoutingTable,
}

impl ValidatedOptions {
    pub fn os(&self) -> TargetOs {
        self.os
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn rtable(&self) -> RoutingTable {
        self.rtable
    }

    pub fn is_enabled(&self, key: OptionKey) -> bool {
        self.table.get(key).is_truthy()
    }

    /// Non-empty string value of `key`, if any.
    pub fn value(&self, key: OptionKey) -> Option<&str> {
        self.table.get(key).as_non_empty_str()
    }

    pub fn table(&self) -> &OptionTable {
        &self.table
    }
}

/// Validate a finalized table.
///
/// Checks `with-os`, `with-loglevel` and `with-rtable` in that order and
/// fails on the first violation. All three are mandatory.
pub fn validate(table: OptionTable) -> Result<ValidatedOptions, OptionError> {
    let os = parse(&table, OptionKey::WithOs, TargetOs::NAMES, TargetOs::from_name)?;
    let log_level = parse(
        &table,
        OptionKey::WithLoglevel,
        LogLevel::NAMES,
        LogLevel::from_name,
    )?;
    let rtable = parse(
        &table,
        OptionKey::WithRtable,
        RoutingTable::NAMES,
        RoutingTable::from_name,
    )?;

    Ok(ValidatedOptions {
        table,
        os,
        log_level,
        rtable,
    })
}

/// `Absent`, `Enabled` and empty values never parse.
fn parse<T>(
    table: &OptionTable,
    key: OptionKey,
    allowed: &'static [&'static str],
    from_name: fn(&str) -> Option<T>,
) -> Result<T, OptionError> {
    table
        .get(key)
        .as_non_empty_str()
        .and_then(from_name)
        .ok_or(OptionError::InvalidEnumOption { key, allowed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::tokenizer::tokenize;

    fn table(raw: &str) -> OptionTable {
        OptionTable::defaults().apply_tokens(&tokenize(raw).unwrap())
    }

    #[test]
    fn valid_trio_passes() {
        let raw = "with-os=freertos\nwith-loglevel=info\nwith-rtable=cidr";
        let options = validate(table(raw)).unwrap();
        assert_eq!(options.os(), TargetOs::Freertos);
        assert_eq!(options.log_level(), LogLevel::Info);
        assert_eq!(options.rtable(), RoutingTable::Cidr);
    }

    #[test]
    fn defaults_never_validate() {
        let err = validate(OptionTable::defaults()).unwrap_err();
        assert_eq!(
            err,
            OptionError::InvalidEnumOption {
                key: OptionKey::WithOs,
                allowed: TargetOs::NAMES,
            }
        );
    }

    #[test]
    fn reports_first_failure_in_check_order() {
        let err = validate(table("with-os=posix")).unwrap_err();
        assert!(matches!(
            err,
            OptionError::InvalidEnumOption {
                key: OptionKey::WithLoglevel,
                ..
            }
        ));

        let raw = "with-os=posix\nwith-loglevel=warn\nwith-rtable=hash";
        let err = validate(table(raw)).unwrap_err();
        assert!(matches!(
            err,
            OptionError::InvalidEnumOption {
                key: OptionKey::WithRtable,
                ..
            }
        ));
    }

    #[test]
    fn bare_enum_option_is_invalid() {
        let raw = "with-os\nwith-loglevel=warn\nwith-rtable=static";
        let err = validate(table(raw)).unwrap_err();
        assert!(matches!(
            err,
            OptionError::InvalidEnumOption {
                key: OptionKey::WithOs,
                ..
            }
        ));
    }

    #[test]
    fn values_are_case_sensitive() {
        let raw = "with-os=POSIX\nwith-loglevel=warn\nwith-rtable=static";
        assert!(validate(table(raw)).is_err());
    }

    #[test]
    fn constraints_share_the_parsed_names() {
        let allowed: Vec<_> = enum_constraints().iter().map(|c| (c.key, c.allowed)).collect();
        assert_eq!(
            allowed,
            vec![
                (OptionKey::WithOs, TargetOs::NAMES),
                (OptionKey::WithLoglevel, LogLevel::NAMES),
                (OptionKey::WithRtable, RoutingTable::NAMES),
            ]
        );
        for name in TargetOs::NAMES {
            assert_eq!(TargetOs::from_name(name).map(TargetOs::as_str), Some(*name));
        }
    }

    #[test]
    fn empty_enum_value_is_invalid() {
        let raw = "with-os=posix\nwith-loglevel=\nwith-rtable=static";
        assert_eq!(
            validate(table(raw)).unwrap_err(),
            OptionError::InvalidEnumOption {
                key: OptionKey::WithLoglevel,
                allowed: LogLevel::NAMES,
            }
        );
    }

    #[test]
    fn error_message_lists_allowed_values() {
        let err = validate(table("with-os=bsd")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "--with-os must be either: [posix, windows, freertos, macosx]"
        );
    }
}
