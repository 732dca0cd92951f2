// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Flatten profilePicture["displayImage~"].elements[] into image descriptors and pick the best match for a width
// role: normalization/photos
// inputs: Top-level document map; descriptor slice plus target width
// outputs: Vec<ImageDescriptor> in source order; Option<&ImageDescriptor> for a target width
// invariants:
// - Missing outer containers yield an empty Vec (normal condition, not an error)
// - One malformed element never aborts the rest; elements without a non-empty identifier are dropped
// - Selection prefers exact width, then closest wider, then closest narrower; ties go to the first in order
// errors: None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::cmp::Ordering;

use serde_json::Value;

use crate::ext::serde_json::{try_array, try_int, try_map, try_string, JsonMap};
use crate::model::ImageDescriptor;

pub const PICTURE_KEY: &str = "profilePicture";
/// Projection indirection key that carries the resolved display image.
pub const DISPLAY_IMAGE_KEY: &str = "displayImage~";
pub const STILL_IMAGE_ARTIFACT: &str = "com.linkedin.digitalmedia.mediaartifact.StillImage";

/// Extract every usable photo variant from a profile document.
pub fn extract_images(doc: &JsonMap) -> Vec<ImageDescriptor> {
  let Some(elements) = try_map(doc, PICTURE_KEY)
    .and_then(|picture| try_map(picture, DISPLAY_IMAGE_KEY))
    .and_then(|display| try_array(display, "elements"))
  else {
    tracing::debug!("no photo elements in document");
    return Vec::new();
  };

  let mut out = Vec::with_capacity(elements.len());

  for (idx, element) in elements.iter().enumerate() {
    match element_descriptor(element) {
      Some(descriptor) => out.push(descriptor),
      None => tracing::debug!(element = idx, "skipping unusable photo element"),
    }
  }

  out
}

fn element_descriptor(element: &Value) -> Option<ImageDescriptor> {
  let element = element.as_object()?;

  // data["<artifact>"].displaySize
  let size = try_map(element, "data")
    .and_then(|data| try_map(data, STILL_IMAGE_ARTIFACT))
    .and_then(|artifact| try_map(artifact, "displaySize"))?;

  let url = try_array(element, "identifiers")?
    .iter()
    .filter_map(Value::as_object)
    .map(|entry| try_string(entry, "identifier"))
    .find(|s| !s.is_empty())?;

  Some(ImageDescriptor {
    width: dimension(try_int(size, "width")),
    height: dimension(try_int(size, "height")),
    url,
  })
}

fn dimension(n: i64) -> u32 {
  u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

/// Pick the descriptor best suited to `target_width`.
///
/// A non-positive target means "no preference" and yields the first photo. Otherwise an
/// exact width wins outright; failing that the closest wider photo is preferred over any
/// narrower one, so that callers never upscale when a larger rendition exists.
pub fn select_by_width(photos: &[ImageDescriptor], target_width: i64) -> Option<&ImageDescriptor> {
  if target_width <= 0 {
    return photos.first();
  }

  let mut above: Option<(i64, &ImageDescriptor)> = None;
  let mut below: Option<(i64, &ImageDescriptor)> = None;

  for photo in photos {
    let delta = i64::from(photo.width) - target_width;

    match delta.cmp(&0) {
      Ordering::Equal => return Some(photo),
      Ordering::Greater => {
        if above.map_or(true, |(best, _)| delta < best) {
          above = Some((delta, photo));
        }
      }
      Ordering::Less => {
        if below.map_or(true, |(best, _)| delta > best) {
          below = Some((delta, photo));
        }
      }
    }
  }

  above.or(below).map(|(_, photo)| photo)
}
