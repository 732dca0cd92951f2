// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the typed profile model (profile, image descriptors, current positions) produced by normalization
// role: model/types
// outputs: Serializable structs (plus the OAuth AccessToken) with stable camelCase field names and optional enrichment fields
// invariants: Profile.id is never empty; ImageDescriptor.url is never empty; photos keep source order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt;

use serde::{Deserialize, Serialize};

/// One available rendition of a profile photo.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
  pub width: u32,
  pub height: u32,
  pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct CurrentPosition {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub company: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub id: String,
  pub first_name: String,
  pub last_name: String,
  pub photos: Vec<ImageDescriptor>,
  /// Best match for the requested width, when one was requested.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub selected: Option<ImageDescriptor>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub headline: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub positions: Option<Vec<CurrentPosition>>,
}

/// Result of exchanging an authorization code.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessToken {
  pub access_token: String,
  pub expires_in: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub refresh_token: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scope: Option<String>,
}

impl fmt::Display for Profile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "ID: {}, FirstName: {}, LastName: {}, Photos: {}",
      self.id,
      self.first_name,
      self.last_name,
      self.photos.len()
    )
  }
}
