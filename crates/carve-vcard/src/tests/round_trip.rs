//! Full-document encoding tests.

use crate::build::{encode, export};
use crate::profile::{LinkKind, Profile, ProfileLink, sort_links};

const BASE_URL: &str = "https://carve.app";

fn jane() -> Profile {
    Profile::new("Jane Smith", "janesmith").unwrap()
}

#[test_log::test]
fn minimal_profile_line_by_line() {
    let doc = encode(&jane(), &[], BASE_URL);

    let expected = [
        "BEGIN:VCARD",
        "VERSION:3.0",
        "FN:Jane Smith",
        "N:Smith;Jane;;;",
        "URL:https://carve.app/janesmith",
        "END:VCARD",
    ]
    .join("\r\n");

    assert_eq!(doc, expected);
}

#[test_log::test]
fn website_and_linkedin_line_by_line() {
    let links = vec![
        ProfileLink::new(LinkKind::Website, "https://janesmith.dev", 0),
        ProfileLink::new(LinkKind::Linkedin, "https://linkedin.com/in/janesmith", 1),
    ];

    let doc = encode(&jane(), &links, BASE_URL);

    let expected = [
        "BEGIN:VCARD",
        "VERSION:3.0",
        "FN:Jane Smith",
        "N:Smith;Jane;;;",
        "URL:https://janesmith.dev",
        "X-SOCIALPROFILE;TYPE=linkedin:https://linkedin.com/in/janesmith",
        "URL:https://carve.app/janesmith",
        "END:VCARD",
    ]
    .join("\r\n");

    assert_eq!(doc, expected);
}

#[test_log::test]
fn full_profile_emits_optional_fields_in_order() {
    let profile = jane()
        .with_title("Staff Engineer")
        .with_company("Carve")
        .with_bio("Building cards.\nSay hi!")
        .with_avatar_url("https://cdn.carve.app/jane.png");

    let doc = encode(&profile, &[], BASE_URL);

    let expected = [
        "BEGIN:VCARD",
        "VERSION:3.0",
        "FN:Jane Smith",
        "N:Smith;Jane;;;",
        "TITLE:Staff Engineer",
        "ORG:Carve",
        "NOTE:Building cards.\\nSay hi!",
        "PHOTO;TYPE=URI:https://cdn.carve.app/jane.png",
        "URL:https://carve.app/janesmith",
        "END:VCARD",
    ]
    .join("\r\n");

    assert_eq!(doc, expected);
}

#[test_log::test]
fn single_token_name_fills_given_slot() {
    let profile = Profile::new("Madonna", "madonna").unwrap();
    let doc = encode(&profile, &[], BASE_URL);

    assert!(doc.contains("FN:Madonna\r\nN:;Madonna;;;"));
}

#[test_log::test]
fn unrepresentable_links_shrink_output_without_error() {
    let links = vec![
        ProfileLink::new(LinkKind::Whatsapp, "not-a-match", 0),
        ProfileLink::new(LinkKind::Other, "ftp://example.com", 1),
        ProfileLink::new(LinkKind::Email, "mailto:jane@carve.app", 2),
    ];

    let doc = encode(&jane(), &links, BASE_URL);

    assert!(doc.contains("EMAIL;TYPE=WORK:jane@carve.app"));
    assert!(!doc.contains("wa.me"));
    assert!(!doc.contains("ftp://"));
}

#[test_log::test]
fn encoder_preserves_caller_order() {
    let mut links = vec![
        ProfileLink::new(LinkKind::Twitter, "https://twitter.com/jane", 2),
        ProfileLink::new(LinkKind::Website, "https://janesmith.dev", 1),
    ];

    let unsorted = encode(&jane(), &links, BASE_URL);
    let twitter_pos = unsorted.find("X-SOCIALPROFILE").unwrap();
    let website_pos = unsorted.find("URL:https://janesmith.dev").unwrap();
    assert!(twitter_pos < website_pos);

    sort_links(&mut links);
    let sorted = encode(&jane(), &links, BASE_URL);
    let twitter_pos = sorted.find("X-SOCIALPROFILE").unwrap();
    let website_pos = sorted.find("URL:https://janesmith.dev").unwrap();
    assert!(website_pos < twitter_pos);
}

#[test_log::test]
fn no_trailing_line_terminator() {
    let doc = encode(&jane(), &[], BASE_URL);
    assert!(doc.ends_with("END:VCARD"));
    assert!(!doc.ends_with('\n'));
}

#[test_log::test]
fn export_bundles_download_metadata() {
    let vcf = export(&jane(), &[], BASE_URL);

    assert_eq!(vcf.filename, "Jane_Smith.vcf");
    assert_eq!(vcf.content_type, "text/vcard; charset=utf-8");
    assert_eq!(vcf.body, encode(&jane(), &[], BASE_URL));
}

#[test_log::test]
fn profile_from_store_rows_encodes() {
    let profile: Profile = serde_json::from_str(
        r#"{
            "name": "Jane Smith",
            "title": "Staff Engineer",
            "company": null,
            "bio": null,
            "avatar_url": null,
            "username": "janesmith"
        }"#,
    )
    .unwrap();
    let mut links: Vec<ProfileLink> = serde_json::from_str(
        r#"[
            {"type": "linkedin", "url": "https://linkedin.com/in/janesmith", "order": 1},
            {"type": "email", "url": "mailto:jane@carve.app", "order": 0}
        ]"#,
    )
    .unwrap();
    sort_links(&mut links);

    let doc = encode(&profile, &links, BASE_URL);

    let expected = [
        "BEGIN:VCARD",
        "VERSION:3.0",
        "FN:Jane Smith",
        "N:Smith;Jane;;;",
        "TITLE:Staff Engineer",
        "EMAIL;TYPE=WORK:jane@carve.app",
        "X-SOCIALPROFILE;TYPE=linkedin:https://linkedin.com/in/janesmith",
        "URL:https://carve.app/janesmith",
        "END:VCARD",
    ]
    .join("\r\n");

    assert_eq!(doc, expected);
}
