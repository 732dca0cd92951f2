use member_profile::photos::STILL_IMAGE_ARTIFACT;
use member_profile::{assemble_profile, AssembleOptions};
use serde_json::json;

fn element(width: u32) -> serde_json::Value {
  json!({
    "data": { STILL_IMAGE_ARTIFACT: { "displaySize": { "width": width, "height": width } } },
    "identifiers": [{ "identifier": format!("https://img/{width}") }]
  })
}

#[test]
fn end_to_end_profile_snapshot() {
  test_support::init_tracing();

  let doc = json!({
    "id": "42",
    "firstName": {
      "localized": { "en_US": "A" },
      "preferredLocale": { "language": "en", "country": "US" }
    },
    "profilePicture": {
      "displayImage~": { "elements": [element(60), element(100), element(140)] }
    }
  });

  let opts = AssembleOptions { target_width: Some(100), ..Default::default() };
  let profile = assemble_profile(&doc, &opts).unwrap();

  insta::assert_json_snapshot!(profile, @r###"
  {
    "id": "42",
    "firstName": "A",
    "lastName": "",
    "photos": [
      {
        "width": 60,
        "height": 60,
        "url": "https://img/60"
      },
      {
        "width": 100,
        "height": 100,
        "url": "https://img/100"
      },
      {
        "width": 140,
        "height": 140,
        "url": "https://img/140"
      }
    ],
    "selected": {
      "width": 100,
      "height": 100,
      "url": "https://img/100"
    }
  }
  "###);
}

#[test]
fn full_fixture_summary() {
  let doc: serde_json::Value = test_support::read_fixture_json("me_full.json");
  let profile = assemble_profile(&doc, &AssembleOptions::default()).unwrap();

  insta::assert_snapshot!(profile.to_string(), @"ID: yrZCpj2Z12, FirstName: Grace, LastName: Hopper, Photos: 3");
}
