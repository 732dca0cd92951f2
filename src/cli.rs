use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::profile::AssembleOptions;
use crate::provider::TokenRequest;
use crate::util;

#[derive(Parser, Debug)]
#[command(
    name = "member-profile",
    version,
    about = "Normalize a professional-network member profile into typed JSON",
    long_about = None
)]
pub struct Cli {
  /// Read the raw member document from a file ("-" for stdin) instead of calling the API
  #[arg(long)]
  pub input: Option<PathBuf>,

  /// OAuth access token used for the API call
  #[arg(long, env = "LINKEDIN_ACCESS_TOKEN", hide_env_values = true)]
  pub token: Option<String>,

  /// Select the photo best matching this width (0 or less = first available)
  #[arg(long, allow_negative_numbers = true)]
  pub width: Option<i64>,

  /// Include headline and current positions
  #[arg(long)]
  pub positions: bool,

  /// Pretty-print the JSON output
  #[arg(long)]
  pub pretty: bool,

  /// Print the OAuth authorization URL and exit (needs --client-id and --redirect)
  #[arg(long)]
  pub auth_url: bool,

  /// Exchange an authorization code for an access token and exit
  /// (needs --client-id, --client-secret and --redirect)
  #[arg(long, value_name = "CODE")]
  pub exchange_code: Option<String>,

  /// OAuth client id (with --auth-url or --exchange-code)
  #[arg(long)]
  pub client_id: Option<String>,

  /// OAuth client secret (with --exchange-code)
  #[arg(long, env = "LINKEDIN_CLIENT_SECRET", hide_env_values = true)]
  pub client_secret: Option<String>,

  /// OAuth redirect URI (with --auth-url or --exchange-code); passed through unescaped
  #[arg(long)]
  pub redirect: Option<String>,

  /// Opaque OAuth state echoed back by the provider
  #[arg(long, default_value = "")]
  pub state: String,

  /// OAuth scope; repeatable (default: r_liteprofile)
  #[arg(long = "scope")]
  pub scopes: Vec<String>,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
  Stdin,
  File(String), // absolute path for stable error messages
  Remote { token: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
  pub client_id: String,
  pub redirect: String,
  pub state: String,
  pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
  pub source: InputSource,
  pub target_width: Option<i64>,
  pub include_positions: bool,
  pub pretty: bool,
  pub auth: Option<AuthRequest>,
  pub exchange: Option<TokenRequest>,
}

impl EffectiveConfig {
  pub fn assemble_options(&self) -> AssembleOptions {
    AssembleOptions {
      target_width: self.target_width,
      include_positions: self.include_positions,
    }
  }
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  if cli.auth_url && cli.exchange_code.is_some() {
    bail!("--auth-url cannot be combined with --exchange-code");
  }

  let exchange = match cli.exchange_code {
    Some(code) => {
      if cli.input.is_some() {
        bail!("--exchange-code cannot be combined with --input");
      }

      match (cli.client_id.clone(), cli.client_secret, cli.redirect.clone()) {
        (Some(client_id), Some(client_secret), Some(redirect)) => Some(TokenRequest {
          code,
          client_id,
          client_secret,
          redirect,
        }),
        _ => bail!("--exchange-code requires --client-id, --client-secret and --redirect"),
      }
    }
    None => None,
  };

  let auth = if cli.auth_url {
    if cli.input.is_some() {
      bail!("--auth-url cannot be combined with --input");
    }

    match (cli.client_id, cli.redirect) {
      (Some(client_id), Some(redirect)) => Some(AuthRequest {
        client_id,
        redirect,
        state: cli.state,
        scopes: cli.scopes,
      }),
      _ => bail!("--auth-url requires both --client-id and --redirect"),
    }
  } else {
    None
  };

  let source = match cli.input {
    Some(p) if p.as_os_str() == "-" => InputSource::Stdin,
    Some(p) => InputSource::File(util::canonicalize_lossy(&p)),
    None => InputSource::Remote {
      token: cli.token.filter(|t| !t.trim().is_empty()),
    },
  };

  Ok(EffectiveConfig {
    source,
    target_width: cli.width,
    include_positions: cli.positions,
    pretty: cli.pretty,
    auth,
    exchange,
  })
}
