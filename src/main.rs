use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use member_profile::cli::{normalize, Cli, InputSource};
use member_profile::profile::assemble_profile;
use member_profile::provider::{authorization_url, build_api, build_token_api, exchange_code, fetch_profile};
use member_profile::util;

fn init_tracing() {
  // stdout carries the JSON result; diagnostics go to stderr
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .try_init();
}

fn main() -> Result<()> {
  init_tracing();

  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  if let Some(auth) = &cfg.auth {
    println!(
      "{}",
      authorization_url(&auth.client_id, &auth.redirect, &auth.state, &auth.scopes)
    );
    return Ok(());
  }

  if let Some(req) = &cfg.exchange {
    let token = exchange_code(build_token_api().as_ref(), req)?;
    println!("{}", serde_json::to_string(&token)?);
    return Ok(());
  }

  // Phase 2: obtain the document and assemble
  let opts = cfg.assemble_options();

  let profile = match &cfg.source {
    InputSource::Remote { token } => {
      let api = build_api(token.clone())?;
      fetch_profile(api.as_ref(), &opts)?
    }
    local => {
      let doc = util::load_document(local)?;
      assemble_profile(&doc, &opts)?
    }
  };

  tracing::info!(summary = %profile, "profile ready");

  // Phase 3: render
  let out = if cfg.pretty {
    serde_json::to_string_pretty(&profile)?
  } else {
    serde_json::to_string(&profile)?
  };

  println!("{}", out);

  Ok(())
}
