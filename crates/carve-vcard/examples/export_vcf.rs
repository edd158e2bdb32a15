//! Example rendering a complete profile export.
//!
//! Loads the application configuration (base URL, log level), encodes a
//! sample profile, and prints the download metadata plus the vCard body.
//!
//! Run with: `cargo run --package carve-vcard --example export_vcf`

use anyhow::Result;
use carve_core::config::load_config;
use carve_core::logging;
use carve_vcard::build::export;
use carve_vcard::profile::{LinkKind, Profile, ProfileLink, sort_links};

fn main() -> Result<()> {
    let settings = load_config()?;
    logging::init(&settings.logging.level);

    let profile = Profile::new("Jane Smith", "janesmith")?
        .with_title("Staff Engineer")
        .with_company("Carve")
        .with_bio("Building digital business cards.\nSay hi!");

    // Links come back from the store unordered; sort before encoding.
    let mut links = vec![
        ProfileLink::new(LinkKind::Linkedin, "https://linkedin.com/in/janesmith", 1),
        ProfileLink::new(LinkKind::Email, "mailto:jane@carve.app", 0),
        ProfileLink::new(LinkKind::Whatsapp, "https://wa.me/15551234567", 2),
    ];
    sort_links(&mut links);

    let vcf = export(&profile, &links, &settings.server.base_url);

    println!("Content-Type: {}", vcf.content_type);
    println!("Filename: {}", vcf.filename);
    println!();
    println!("{}", vcf.body);

    Ok(())
}
