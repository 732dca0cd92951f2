// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Tolerant, schema-less reads over serde_json trees (dotted paths, single keys, typed coercions with zero values)
// role: extension/serde_json
// outputs: JsonFetch trait, JsonFetched wrapper, try_string/try_int/try_map/try_array helpers
// invariants:
// - No panics and no errors; missing keys, nulls and shape mismatches yield the shape's zero value
// - Strings are never produced from non-string values except through `text()`
// - Integers accept i64, u64 (saturating) and floats (truncated toward zero); strings are not parsed
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub type JsonMap = Map<String, Value>;

/// Wrapper around a JSON location to allow typed extraction via a clear second step.
#[derive(Debug, Clone, Copy)]
pub struct JsonFetched<'a> {
  inner: Option<&'a Value>,
}

impl<'a> JsonFetched<'a> {
  /// Attempt to deserialize the fetched value as `T`.
  pub fn to<T>(&self) -> Option<T>
  where
    T: DeserializeOwned,
  {
    self.inner.and_then(|v| serde_json::from_value::<T>(v.clone()).ok())
  }

  /// Deserialize as `T`, returning `T::default()` on failure.
  pub fn to_or_default<T>(&self) -> T
  where
    T: DeserializeOwned + Default,
  {
    self.to::<T>().unwrap_or_default()
  }

  /// True when something other than `null` lives at this location.
  pub fn is_present(&self) -> bool {
    matches!(self.inner, Some(v) if !v.is_null())
  }

  /// Borrowed string, or `""` when absent or not a JSON string.
  pub fn str(&self) -> &'a str {
    self.inner.and_then(Value::as_str).unwrap_or("")
  }

  pub fn string(&self) -> String {
    self.str().to_string()
  }

  /// Integer view of a JSON number, or 0.
  pub fn int(&self) -> i64 {
    self.inner.and_then(coerce_int).unwrap_or(0)
  }

  pub fn map(&self) -> Option<&'a JsonMap> {
    self.inner.and_then(Value::as_object)
  }

  pub fn array(&self) -> Option<&'a [Value]> {
    self.inner.and_then(Value::as_array).map(Vec::as_slice)
  }

  /// Lenient textual view: strings as-is, numbers rendered in their JSON form.
  /// Everything else (null, bool, map, array) is `None`.
  pub fn text(&self) -> Option<String> {
    match self.inner? {
      Value::String(s) => Some(s.clone()),
      Value::Number(n) => Some(n.to_string()),
      _ => None,
    }
  }
}

fn coerce_int(v: &Value) -> Option<i64> {
  let Value::Number(n) = v else { return None };

  if let Some(i) = n.as_i64() {
    return Some(i);
  }

  if let Some(u) = n.as_u64() {
    return Some(i64::try_from(u).unwrap_or(i64::MAX));
  }

  // `as` saturates at the i64 bounds
  n.as_f64().map(|f| f.trunc() as i64)
}

/// Extension to fetch nested values via dotted paths like "preferredLocale.country",
/// or a single key verbatim (keys that themselves contain dots).
pub trait JsonFetch {
  fn fetch(&self, path: &str) -> JsonFetched<'_>;
  fn field(&self, key: &str) -> JsonFetched<'_>;
}

impl JsonFetch for Value {
  fn fetch(&self, path: &str) -> JsonFetched<'_> {
    if path.is_empty() {
      return JsonFetched { inner: Some(self) };
    }

    let mut cur = self;

    for key in path.split('.') {
      match cur.get(key) {
        Some(next) => cur = next,
        None => return JsonFetched { inner: None },
      }
    }

    JsonFetched { inner: Some(cur) }
  }

  fn field(&self, key: &str) -> JsonFetched<'_> {
    JsonFetched { inner: self.get(key) }
  }
}

impl JsonFetch for JsonMap {
  fn fetch(&self, path: &str) -> JsonFetched<'_> {
    let (head, rest) = match path.split_once('.') {
      Some((head, rest)) => (head, Some(rest)),
      None => (path, None),
    };

    match (self.get(head), rest) {
      (Some(next), Some(rest)) => next.fetch(rest),
      (next, None) => JsonFetched { inner: next },
      (None, Some(_)) => JsonFetched { inner: None },
    }
  }

  fn field(&self, key: &str) -> JsonFetched<'_> {
    JsonFetched { inner: self.get(key) }
  }
}

/// String at `key`, or `""`.
pub fn try_string(map: &JsonMap, key: &str) -> String {
  map.field(key).string()
}

/// Integer at `key`, or 0.
pub fn try_int(map: &JsonMap, key: &str) -> i64 {
  map.field(key).int()
}

/// Nested map at `key`, or `None`.
pub fn try_map<'a>(map: &'a JsonMap, key: &str) -> Option<&'a JsonMap> {
  map.field(key).map()
}

/// Array at `key`, or `None`.
pub fn try_array<'a>(map: &'a JsonMap, key: &str) -> Option<&'a [Value]> {
  map.field(key).array()
}
