//! Tolerant normalization of professional-network profile documents.
//!
//! Raw provider JSON is read through forgiving accessors (`ext::serde_json`), names are
//! resolved through the document's preferred locale, photo renditions are flattened into
//! [`ImageDescriptor`]s and a best match can be picked for a target width. Only a missing
//! `id` (or an empty document) fails assembly.

pub mod cli;
pub mod error;
pub mod ext;
pub mod locale;
pub mod model;
pub mod photos;
pub mod positions;
pub mod profile;
pub mod provider;
pub mod util;

pub use error::ProfileError;
pub use model::{CurrentPosition, ImageDescriptor, Profile};
pub use profile::{assemble_profile, AssembleOptions};
