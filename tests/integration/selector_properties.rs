use member_profile::ext::serde_json::JsonMap;
use member_profile::photos::{extract_images, select_by_width, STILL_IMAGE_ARTIFACT};
use member_profile::ImageDescriptor;
use proptest::prelude::*;
use serde_json::json;

fn descriptors() -> impl Strategy<Value = Vec<ImageDescriptor>> {
  prop::collection::vec((0u32..2_000, 0u32..2_000), 0..12).prop_map(|sizes| {
    sizes
      .into_iter()
      .enumerate()
      .map(|(i, (width, height))| ImageDescriptor { width, height, url: format!("https://img/{i}") })
      .collect()
  })
}

fn raw_element(width: u32, url: Option<String>, with_artifact: bool) -> serde_json::Value {
  let data = if with_artifact {
    json!({ STILL_IMAGE_ARTIFACT: { "displaySize": { "width": width, "height": width } } })
  } else {
    json!({})
  };
  let identifiers = match url {
    Some(u) => json!([{ "identifier": u }]),
    None => json!([]),
  };
  json!({ "data": data, "identifiers": identifiers })
}

proptest! {
  #[test]
  fn non_positive_target_returns_first(photos in descriptors(), target in -500i64..=0) {
    prop_assert_eq!(select_by_width(&photos, target), photos.first());
  }

  #[test]
  fn exact_width_always_wins(mut photos in descriptors(), target in 1u32..2_000, at in 0usize..12) {
    let at = at.min(photos.len());
    photos.insert(at, ImageDescriptor { width: target, height: 1, url: "https://exact".into() });

    let picked = select_by_width(&photos, i64::from(target)).unwrap();
    prop_assert_eq!(picked.width, target);
    let first_exact = photos.iter().position(|p| p.width == target).unwrap();
    prop_assert!(std::ptr::eq(picked, &photos[first_exact]));
  }

  #[test]
  fn prefers_smallest_wider_else_largest_narrower(photos in descriptors(), target in 1i64..2_000) {
    let picked = select_by_width(&photos, target);

    if photos.is_empty() {
      prop_assert!(picked.is_none());
      return Ok(());
    }

    let picked = picked.unwrap();
    let wider = photos.iter().map(|p| i64::from(p.width)).filter(|w| *w >= target).min();

    match wider {
      Some(w) => prop_assert_eq!(i64::from(picked.width), w),
      None => {
        let narrower = photos.iter().map(|p| p.width).max().unwrap();
        prop_assert_eq!(picked.width, narrower);
      }
    }

    // first in scan order among equal widths
    let first_same = photos.iter().position(|p| p.width == picked.width).unwrap();
    prop_assert!(std::ptr::eq(picked, &photos[first_same]));
  }

  #[test]
  fn extraction_never_grows_and_drops_unusable(
    specs in prop::collection::vec((0u32..1_000, prop::option::of("[a-z]{0,6}"), any::<bool>()), 0..10)
  ) {
    let elements: Vec<serde_json::Value> = specs
      .iter()
      .map(|(w, url, art)| raw_element(*w, url.clone(), *art))
      .collect();
    let doc = json!({ "profilePicture": { "displayImage~": { "elements": elements } } });
    let doc: JsonMap = doc.as_object().cloned().unwrap();

    let photos = extract_images(&doc);
    let usable = specs
      .iter()
      .filter(|(_, url, art)| *art && url.as_deref().map_or(false, |u| !u.is_empty()))
      .count();

    prop_assert!(photos.len() <= specs.len());
    prop_assert_eq!(photos.len(), usable);
    prop_assert!(photos.iter().all(|p| !p.url.is_empty()));
  }
}
