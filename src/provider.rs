// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Narrow seam to the profile provider (authorization URL, code-for-token exchange, authenticated `me` fetch)
// role: provider/api
// inputs: Bearer access token or env fixture MEMBER_PROFILE_TEST_ME_JSON; auth code + client credentials
//   or env fixture MEMBER_PROFILE_TEST_TOKEN_JSON; AssembleOptions
// outputs: Raw JSON documents; assembled Profile; AccessToken
// side_effects: Network calls to www.linkedin.com / api.linkedin.com (HTTP backends only)
// invariants:
// - One request per logical operation; no retries, no caching
// - Fixture backend wins over HTTP whenever its env var is set
// errors: Transport, status (with response body) and decode failures surface via anyhow; assembly errors convert from ProfileError
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use serde_json::Value;

use crate::ext::serde_json::JsonFetch;
use crate::model::{AccessToken, Profile};
use crate::profile::{assemble_profile, AssembleOptions};

pub const AUTH_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
pub const TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
pub const ME_URL: &str = "https://api.linkedin.com/v2/me";

pub const PROFILE_PROJECTION: &str = "(id,firstName,lastName,profilePicture(displayImage~:playableStreams))";
pub const FULL_PROJECTION: &str =
  "(id,firstName,lastName,headline,positions,profilePicture(displayImage~:playableStreams))";

pub const DEFAULT_SCOPE: &str = "r_liteprofile";
pub const FIXTURE_ENV: &str = "MEMBER_PROFILE_TEST_ME_JSON";
pub const TOKEN_FIXTURE_ENV: &str = "MEMBER_PROFILE_TEST_TOKEN_JSON";

// --- Trait seam for the provider API ---
pub trait ProfileApi {
  fn me_json(&self, projection: &str) -> Result<Value>;
}

fn get_json(url: &str, token: &str) -> Result<Value> {
  let agent = ureq::AgentBuilder::new().build();

  let resp = agent
    .get(url)
    .set("Authorization", &format!("Bearer {}", token))
    .set("X-RestLi-Protocol-Version", "2.0.0")
    .set("User-Agent", "member-profile")
    .call();

  read_json(resp, || format!("GET {}", url))
}

fn post_json(url: &str) -> Result<Value> {
  let agent = ureq::AgentBuilder::new().build();

  let resp = agent
    .post(url)
    .set("x-li-format", "json")
    .set("User-Agent", "member-profile")
    .call();

  read_json(resp, || format!("POST {}", url))
}

/// Decode a 2xx body; any other status becomes an error carrying the provider's body.
fn read_json<F>(resp: Result<ureq::Response, ureq::Error>, what: F) -> Result<Value>
where
  F: Fn() -> String,
{
  match resp {
    Ok(r) => r.into_json::<Value>().with_context(|| format!("decoding JSON from {}", what())),
    Err(ureq::Error::Status(code, r)) => {
      let body = r.into_string().unwrap_or_default();
      anyhow::bail!("{} failed with HTTP {}: {}", what(), code, body.trim())
    }
    Err(e) => Err(e).with_context(what),
  }
}

struct HttpProfileApi {
  token: String,
}

impl HttpProfileApi {
  fn new(token: String) -> Self {
    Self { token }
  }
}

impl ProfileApi for HttpProfileApi {
  fn me_json(&self, projection: &str) -> Result<Value> {
    // Parentheses in the projection must reach the server unescaped.
    let url = format!("{}?projection={}", ME_URL, projection);
    tracing::debug!(%url, "fetching member document");
    get_json(&url, &self.token)
  }
}

struct EnvProfileApi;

impl ProfileApi for EnvProfileApi {
  fn me_json(&self, _projection: &str) -> Result<Value> {
    let raw = std::env::var(FIXTURE_ENV).with_context(|| format!("{} is not set", FIXTURE_ENV))?;
    serde_json::from_str::<Value>(&raw).with_context(|| format!("parsing {}", FIXTURE_ENV))
  }
}

fn env_wants_mock() -> bool {
  std::env::var(FIXTURE_ENV).is_ok()
}

/// Select the backend: env fixture first, then HTTP when a token is available.
pub fn build_api(token: Option<String>) -> Result<Box<dyn ProfileApi>> {
  if env_wants_mock() {
    return Ok(Box::new(EnvProfileApi));
  }

  match token {
    Some(t) if !t.trim().is_empty() => Ok(Box::new(HttpProfileApi::new(t))),
    _ => anyhow::bail!("missing access token (pass --token or set LINKEDIN_ACCESS_TOKEN)"),
  }
}

#[cfg(any(test, feature = "testutil"))]
pub fn make_env_api() -> Box<dyn ProfileApi> {
  Box::new(EnvProfileApi)
}

// --- Trait seam for the code-for-token exchange ---
pub trait TokenApi {
  fn access_token_json(&self, url: &str) -> Result<Value>;
}

struct HttpTokenApi;

impl TokenApi for HttpTokenApi {
  fn access_token_json(&self, url: &str) -> Result<Value> {
    post_json(url)
  }
}

struct EnvTokenApi;

impl TokenApi for EnvTokenApi {
  fn access_token_json(&self, _url: &str) -> Result<Value> {
    let raw = std::env::var(TOKEN_FIXTURE_ENV).with_context(|| format!("{} is not set", TOKEN_FIXTURE_ENV))?;
    serde_json::from_str::<Value>(&raw).with_context(|| format!("parsing {}", TOKEN_FIXTURE_ENV))
  }
}

pub fn build_token_api() -> Box<dyn TokenApi> {
  if std::env::var(TOKEN_FIXTURE_ENV).is_ok() {
    Box::new(EnvTokenApi)
  } else {
    Box::new(HttpTokenApi)
  }
}

/// Inputs for exchanging an authorization code for an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
  pub code: String,
  pub client_id: String,
  pub client_secret: String,
  pub redirect: String,
}

/// Token endpoint URL for `req`. The redirect must match the one used for the
/// authorization URL byte for byte, so it is appended verbatim like there.
pub fn access_token_url(req: &TokenRequest) -> String {
  let enc = |s: &str| url::form_urlencoded::byte_serialize(s.as_bytes()).collect::<String>();

  format!(
    "{}?grant_type=authorization_code&code={}&redirect_uri={}&client_id={}&client_secret={}",
    TOKEN_URL,
    enc(&req.code),
    req.redirect,
    enc(&req.client_id),
    enc(&req.client_secret)
  )
}

/// Exchange an authorization code (valid for about a minute) for an access token.
pub fn exchange_code(api: &dyn TokenApi, req: &TokenRequest) -> Result<AccessToken> {
  let doc = api.access_token_json(&access_token_url(req))?;

  let access_token = doc.field("access_token").string();

  if access_token.is_empty() {
    let reason = doc.field("error_description").to_or_default::<String>();
    anyhow::bail!("token exchange returned no access_token: {}", reason);
  }

  Ok(AccessToken {
    access_token,
    expires_in: doc.field("expires_in").int(),
    refresh_token: doc.field("refresh_token").to::<String>(),
    scope: doc.field("scope").to::<String>(),
  })
}

/// Fetch the member document once and assemble it.
pub fn fetch_profile(api: &dyn ProfileApi, opts: &AssembleOptions) -> Result<Profile> {
  let projection = if opts.include_positions { FULL_PROJECTION } else { PROFILE_PROJECTION };

  let doc = api.me_json(projection)?;
  let profile = assemble_profile(&doc, opts)?;

  Ok(profile)
}

/// Authorization URL the member is redirected to; the provider answers with an auth code.
///
/// Scopes default to `r_liteprofile`. `redirect_uri` is appended verbatim, the provider
/// rejects an escaped one.
pub fn authorization_url(client_id: &str, redirect: &str, state: &str, scopes: &[String]) -> String {
  let scope = if scopes.is_empty() { DEFAULT_SCOPE.to_string() } else { scopes.join(" ") };

  let query = url::form_urlencoded::Serializer::new(String::new())
    .append_pair("client_id", client_id)
    .append_pair("response_type", "code")
    .append_pair("scope", &scope)
    .append_pair("state", state)
    .finish();

  format!("{}?{}&redirect_uri={}", AUTH_URL, query, redirect)
}
