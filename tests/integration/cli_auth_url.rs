use predicates::prelude::*;
use test_support::cmd_bin;

#[test]
fn prints_authorization_url() {
  cmd_bin("member-profile")
    .args([
      "--auth-url",
      "--client-id",
      "77abc",
      "--redirect",
      "https://app.example/li/callback",
      "--state",
      "xyz",
    ])
    .assert()
    .success()
    .stdout(predicate::str::diff(
      "https://www.linkedin.com/oauth/v2/authorization?client_id=77abc&response_type=code&scope=r_liteprofile&state=xyz&redirect_uri=https://app.example/li/callback\n",
    ));
}

#[test]
fn repeated_scopes_are_space_joined() {
  cmd_bin("member-profile")
    .args([
      "--auth-url",
      "--client-id",
      "c",
      "--redirect",
      "r",
      "--scope",
      "r_liteprofile",
      "--scope",
      "r_emailaddress",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("scope=r_liteprofile+r_emailaddress"));
}

#[test]
fn auth_url_without_redirect_fails() {
  cmd_bin("member-profile")
    .args(["--auth-url", "--client-id", "c"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--redirect"));
}

#[test]
fn exchange_code_prints_access_token_from_fixture_backend() {
  let out = cmd_bin("member-profile")
    .env(
      "MEMBER_PROFILE_TEST_TOKEN_JSON",
      r#"{"access_token":"AQV-fixture","expires_in":5184000}"#,
    )
    .args([
      "--exchange-code",
      "AQTcode",
      "--client-id",
      "77abc",
      "--client-secret",
      "shh",
      "--redirect",
      "https://app.example/li/callback",
    ])
    .output()
    .unwrap();
  assert!(out.status.success(), "cli run failed: {}", String::from_utf8_lossy(&out.stderr));

  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(v["access_token"], "AQV-fixture");
  assert_eq!(v["expires_in"], 5184000);
}

#[test]
fn exchange_code_rejection_fails() {
  cmd_bin("member-profile")
    .env(
      "MEMBER_PROFILE_TEST_TOKEN_JSON",
      r#"{"error":"invalid_request","error_description":"Unable to retrieve access token: authorization code not found"}"#,
    )
    .args(["--exchange-code", "stale", "--client-id", "c", "--client-secret", "s", "--redirect", "r"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("authorization code not found"));
}

#[test]
fn exchange_code_without_secret_fails() {
  cmd_bin("member-profile")
    .args(["--exchange-code", "AQTcode", "--client-id", "c", "--redirect", "r"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--client-secret"));
}
