// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Assemble a typed Profile from a raw member document (id, localized names, photos, optional selection)
// role: normalization/assembler
// inputs: Decoded JSON document; AssembleOptions (target width, positions)
// outputs: Profile or ProfileError
// invariants:
// - Only the id check can fail assembly; names/photos/positions degrade to empty values
// - photos are returned unfiltered; `selected` is set only when a target width was requested
// errors: EmptyDocument (null, non-object or empty root); MissingIdentity (no usable id)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::Value;

use crate::error::ProfileError;
use crate::ext::serde_json::{JsonFetch, JsonMap};
use crate::locale::resolve_localized;
use crate::model::Profile;
use crate::photos::{extract_images, select_by_width};
use crate::positions::current_positions;

#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
  /// Pick the best photo for this width; `None` leaves `selected` empty.
  pub target_width: Option<i64>,
  /// Also collect headline and current positions.
  pub include_positions: bool,
}

pub fn assemble_profile(doc: &Value, opts: &AssembleOptions) -> Result<Profile, ProfileError> {
  let root = match doc {
    Value::Object(map) if !map.is_empty() => map,
    _ => return Err(ProfileError::EmptyDocument),
  };

  let id = resolve_identity(root).ok_or(ProfileError::MissingIdentity)?;

  let first_name = resolve_localized(root, "firstName");
  let last_name = resolve_localized(root, "lastName");
  let photos = extract_images(root);

  let selected = opts
    .target_width
    .and_then(|width| select_by_width(&photos, width).cloned());

  let (headline, positions) = if opts.include_positions {
    let (positions, headline) = current_positions(root);
    (Some(headline), Some(positions))
  } else {
    (None, None)
  };

  tracing::debug!(%id, photos = photos.len(), selected = selected.is_some(), "assembled profile");

  Ok(Profile {
    id,
    first_name,
    last_name,
    photos,
    selected,
    headline,
    positions,
  })
}

fn resolve_identity(root: &JsonMap) -> Option<String> {
  let raw = root.field("id");
  let id = raw.text().filter(|id| !id.is_empty());

  if id.is_none() && raw.is_present() {
    tracing::debug!("id present but not a non-empty string or number");
  }

  id
}
