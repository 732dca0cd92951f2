use member_profile::provider::{build_api, fetch_profile, FIXTURE_ENV};
use member_profile::AssembleOptions;
use serial_test::serial;
use test_support::{cmd_bin, read_fixture_text, with_env};

#[test]
#[serial]
fn fixture_backend_feeds_the_assembler() {
  let doc = read_fixture_text("me_full.json");
  let _env = with_env(&[(FIXTURE_ENV, doc.as_str())]);

  let api = build_api(None).unwrap();
  let opts = AssembleOptions { target_width: Some(300), include_positions: true };
  let profile = fetch_profile(api.as_ref(), &opts).unwrap();

  assert_eq!(profile.id, "yrZCpj2Z12");
  assert_eq!(profile.selected.map(|s| s.width), Some(400));
  assert_eq!(profile.positions.map(|p| p.len()), Some(1));
}

#[test]
fn binary_uses_fixture_env_instead_of_network() {
  let out = cmd_bin("member-profile")
    .env(FIXTURE_ENV, read_fixture_text("me_no_photo.json"))
    .args(["--width", "100"])
    .output()
    .unwrap();
  assert!(out.status.success(), "cli run failed: {}", String::from_utf8_lossy(&out.stderr));

  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(v["id"], "nP0t0");
  assert!(v.get("selected").is_none());
}
