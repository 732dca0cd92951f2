// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Collect current positions (company + title) and the headline from a full-profile document
// role: normalization/positions
// inputs: Document map carrying `headline` and `positions` ({ <group>: [position, ...] })
// outputs: (Vec<CurrentPosition>, headline)
// invariants: Only entries with boolean isCurrent == true are kept; a missing company never aborts the scan
// errors: None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::ext::serde_json::{try_map, try_string, JsonFetch, JsonMap};
use crate::model::CurrentPosition;

pub fn current_positions(doc: &JsonMap) -> (Vec<CurrentPosition>, String) {
  let headline = try_string(doc, "headline");

  let Some(groups) = try_map(doc, "positions") else {
    return (Vec::new(), headline);
  };

  let mut out = Vec::new();

  for entries in groups.values().filter_map(|v| v.as_array()) {
    for position in entries.iter().filter_map(|v| v.as_object()) {
      if !position.field("isCurrent").to::<bool>().unwrap_or(false) {
        continue;
      }

      out.push(CurrentPosition {
        company: position.fetch("company.name").text(),
        title: position.field("title").text(),
      });
    }
  }

  (out, headline)
}
