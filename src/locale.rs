// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve human-readable fields stored as { localized: {<lang>_<COUNTRY>: value}, preferredLocale: {...} }
// role: normalization/locale
// inputs: Top-level document map and the field key (e.g., "firstName")
// outputs: Resolved string or "" when any step is missing
// invariants: Locale key is always "<language>_<country>", even when both parts are empty ("_")
// errors: None; absence is logged at debug level only
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt;

use crate::ext::serde_json::{try_map, try_string, JsonMap};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleKey {
  pub language: String,
  pub country: String,
}

impl LocaleKey {
  /// Read `language`/`country` from a `preferredLocale` map; missing parts become "".
  pub fn from_preferred(preferred: &JsonMap) -> Self {
    Self {
      language: try_string(preferred, "language"),
      country: try_string(preferred, "country"),
    }
  }
}

impl fmt::Display for LocaleKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}_{}", self.language, self.country)
  }
}

/// Resolve `doc[key].localized[<preferred locale>]` to a string, or "".
pub fn resolve_localized(doc: &JsonMap, key: &str) -> String {
  let Some(field) = try_map(doc, key) else {
    tracing::debug!(field = key, "localized field absent");
    return String::new();
  };

  let empty = JsonMap::new();
  let preferred = try_map(field, "preferredLocale").unwrap_or(&empty);
  let locale = LocaleKey::from_preferred(preferred).to_string();

  let Some(localized) = try_map(field, "localized") else {
    tracing::debug!(field = key, "localized map absent");
    return String::new();
  };

  let value = try_string(localized, &locale);

  if value.is_empty() {
    tracing::debug!(field = key, locale = %locale, "no value for preferred locale");
  }

  value
}
