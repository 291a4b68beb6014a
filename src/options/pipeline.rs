//! Pipeline — ties all option resolution stages together.

use crate::options::composer::{compose, BuildArtifacts};
use crate::options::error::{OptionError, ResolveError};
use crate::options::registry::{option_registry, OptionKey, OptionKind};
use crate::options::table::{FlagValue, OptionTable};
use crate::options::tokenizer::{tokenize, OptionToken};
use crate::options::validator::{validate, ValidatedOptions};

/// USART backends shipped in the CSP tree.
pub const KNOWN_USART_DRIVERS: &[&str] = &["linux", "windows"];

/// Outcome of resolving one build environment.
#[derive(Debug, Clone)]
pub struct ResolvedEnvironment {
    /// Environment name the options came from.
    pub environment: String,
    pub options: ValidatedOptions,
    pub artifacts: BuildArtifacts,
    /// Non-fatal findings (repeated keys, missing values, unfamiliar drivers).
    pub warnings: Vec<String>,
}

/// Resolve raw option text straight to build artifacts.
pub fn resolve(raw: &str) -> Result<BuildArtifacts, OptionError> {
    let tokens = tokenize(raw)?;
    let options = validate(OptionTable::defaults().apply_tokens(&tokens))?;
    Ok(compose(&options))
}

/// Resolve the option text of a named build environment.
///
/// This is the main entry point for build hooks.
pub fn resolve_environment(
    environment: &str,
    raw: &str,
) -> Result<ResolvedEnvironment, ResolveError> {
    let tag = |source: OptionError| ResolveError {
        environment: environment.to_string(),
        source,
    };

    // Stage 1: Tokenize
    let tokens = tokenize(raw).map_err(tag)?;
    tracing::trace!(environment, count = tokens.len(), "tokenized options");

    // Stage 2: Apply on top of defaults
    let table = OptionTable::defaults().apply_tokens(&tokens);

    // Stage 3: Validate
    let options = validate(table).map_err(tag)?;

    // Stage 4: Compose
    let artifacts = compose(&options);
    tracing::debug!(
        environment,
        os = options.os().as_str(),
        rtable = options.rtable().as_str(),
        sources = artifacts.src_filter.len(),
        libs = artifacts.libs.len(),
        "resolved build options"
    );

    let mut warnings = repeated_key_warnings(&tokens);
    warnings.extend(missing_value_warnings(options.table()));
    warnings.extend(usart_driver_warning(&options));

    Ok(ResolvedEnvironment {
        environment: environment.to_string(),
        options,
        artifacts,
        warnings,
    })
}

fn repeated_key_warnings(tokens: &[OptionToken]) -> Vec<String> {
    let mut seen = [0usize; OptionKey::COUNT];
    for token in tokens {
        seen[token.key.index()] += 1;
    }

    OptionKey::ALL
        .into_iter()
        .filter(|key| seen[key.index()] > 1)
        .map(|key| format!("{}: given {} times, last value wins", key, seen[key.index()]))
        .collect()
}

/// Valued options given bare (`with-driver-usart`) or as `name=` contribute
/// nothing to the build.
fn missing_value_warnings(table: &OptionTable) -> Vec<String> {
    option_registry()
        .iter()
        .filter(|def| matches!(def.kind, OptionKind::Value { .. }))
        .filter(|def| match table.get(def.key) {
            FlagValue::Enabled => true,
            FlagValue::Value(value) => value.is_empty(),
            FlagValue::Absent => false,
        })
        .map(|def| format!("{}: given without a value, expected {}", def.key, def.usage()))
        .collect()
}

fn usart_driver_warning(options: &ValidatedOptions) -> Option<String> {
    let driver = options.value(OptionKey::WithDriverUsart)?;
    if KNOWN_USART_DRIVERS.contains(&driver) {
        return None;
    }
    Some(format!(
        "{}: '{}' is not one of [{}], expecting drivers/usart/usart_{}.c to exist",
        OptionKey::WithDriverUsart,
        driver,
        KNOWN_USART_DRIVERS.join(", "),
        driver
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "with-os=posix\nwith-loglevel=debug\nwith-rtable=static\n";

    #[test]
    fn repeated_keys_warn() {
        let raw = format!("{BASE}with-os=macosx\n");
        let resolved = resolve_environment("dev", &raw).unwrap();
        assert_eq!(resolved.artifacts.libs, vec!["-lpthread"]);
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].starts_with("with-os: given 2 times"));
    }

    #[test]
    fn unfamiliar_usart_driver_warns_but_resolves() {
        let raw = format!("{BASE}with-driver-usart=zephyr\n");
        let resolved = resolve_environment("dev", &raw).unwrap();
        assert!(resolved
            .artifacts
            .src_filter
            .contains(&"+<drivers/usart/usart_zephyr.c>".to_string()));
        assert!(resolved.warnings.iter().any(|w| w.contains("zephyr")));
    }

    #[test]
    fn bare_usart_driver_warns_and_builds_no_driver() {
        let raw = format!("{BASE}with-driver-usart\n");
        let resolved = resolve_environment("dev", &raw).unwrap();
        assert!(!resolved
            .artifacts
            .src_filter
            .iter()
            .any(|rule| rule.contains("drivers/usart")));
        assert_eq!(
            resolved.warnings,
            vec!["with-driver-usart: given without a value, expected with-driver-usart=DRIVER"]
        );
    }

    #[test]
    fn empty_usart_driver_warns() {
        let raw = format!("{BASE}with-driver-usart=\n");
        let resolved = resolve_environment("dev", &raw).unwrap();
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].contains("given without a value"));
    }

    #[test]
    fn clean_input_has_no_warnings() {
        let raw = format!("{BASE}with-driver-usart=linux\n");
        assert!(resolve_environment("dev", &raw).unwrap().warnings.is_empty());
    }

    #[test]
    fn errors_carry_environment_name() {
        let err = resolve_environment("uno", "with-os=bsd").unwrap_err();
        assert_eq!(err.environment, "uno");
        assert!(err.to_string().starts_with("environment 'uno': --with-os"));
    }
}
