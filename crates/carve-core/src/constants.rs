/// vCard download constants shared across crates
pub const VCARD_MIME_TYPE: &str = "text/vcard";
pub const VCARD_CHARSET: &str = "utf-8";
pub const VCARD_CONTENT_TYPE: &str =
    const_str::concat!(VCARD_MIME_TYPE, "; charset=", VCARD_CHARSET);

pub const VCF_FILE_EXTENSION: &str = ".vcf";
