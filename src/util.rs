// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for paths, local document loading, and man page rendering
// role: utilities/helpers
// inputs: Paths; InputSource; clap CommandFactory
// outputs: Canonicalized paths, decoded JSON documents, man page text
// side_effects: load_document reads files or stdin
// errors: IO and JSON errors bubble with context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use serde_json::Value;

use crate::cli::InputSource;

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

/// Read and decode a raw member document from a local source.
pub fn load_document(source: &InputSource) -> Result<Value> {
  let raw = match source {
    InputSource::File(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?,
    InputSource::Stdin => {
      let mut buf = String::new();
      std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
      buf
    }
    InputSource::Remote { .. } => bail!("remote sources are fetched through the provider API"),
  };

  serde_json::from_str::<Value>(&raw).context("decoding member document JSON")
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
