//! Introspection and conversion tools for stylecap tokens.
//!
//! This crate provides utilities for working with encoded style tokens:
//!
//! - Inspect a token's envelope and payload sizes
//! - Decode a token into readable JSON
//! - Re-encode edited JSON into a token
//! - Emit the canonical presets
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what a token carries.

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use model::StyleSheet;

/// Size and content summary for a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    /// The leading format tag.
    pub tag: String,
    /// Whole token length in bytes.
    pub token_bytes: usize,
    /// Compressed payload length after base64 removal.
    pub compressed_bytes: usize,
    /// Serialized text length after decompression.
    pub text_bytes: usize,
    /// Sheet display name.
    pub name: String,
    /// Number of color slots carried by the sheet.
    pub color_slots: usize,
    /// Whether the accent palette sub-document is present.
    pub has_accent: bool,
}

/// Inspects a token without printing anything.
pub fn inspect_token(token: &str) -> Result<InspectReport> {
    let payload = wire::strip_tag(token).context("validate format tag")?;
    let compressed_bytes = BASE64
        .decode(payload)
        .context("decode base64 payload")?
        .len();
    let text = wire::open(token).context("open token")?;
    let sheet = codec::decode(token).context("decode style sheet")?;

    Ok(InspectReport {
        tag: token[..wire::TAG_LEN].to_owned(),
        token_bytes: token.len(),
        compressed_bytes,
        text_bytes: text.len(),
        name: sheet.name.clone(),
        color_slots: sheet.colors.len(),
        has_accent: sheet.accent.is_some(),
    })
}

/// Formats an inspect report for terminal output.
#[must_use]
pub fn format_inspect_report(report: &InspectReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("tag:        {}\n", report.tag));
    out.push_str(&format!(
        "sizes:      token {} B, compressed {} B, text {} B\n",
        report.token_bytes, report.compressed_bytes, report.text_bytes
    ));
    out.push_str(&format!("name:       {}\n", report.name));
    out.push_str(&format!("colors:     {} slot(s)\n", report.color_slots));
    out.push_str(&format!(
        "accent:     {}\n",
        if report.has_accent { "present" } else { "absent" }
    ));
    out
}

/// Decodes a token into its structured JSON value.
pub fn decode_token_json(token: &str) -> Result<serde_json::Value> {
    let sheet = codec::decode(token).context("decode style sheet")?;
    serde_json::to_value(&sheet).context("render sheet as JSON")
}

/// Re-encodes a structured JSON sheet into a portable token.
pub fn encode_sheet_json(json: &str) -> Result<String> {
    let sheet: StyleSheet = serde_json::from_str(json).context("parse sheet JSON")?;
    Ok(codec::encode(&sheet))
}

/// Looks up a canonical preset by name.
pub fn preset_by_name(name: &str) -> Result<StyleSheet> {
    match name {
        "standard" => Ok(StyleSheet::standard()),
        "classic" => Ok(StyleSheet::classic()),
        other => Err(anyhow!("unknown preset {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_reports_envelope_and_content() {
        let token = codec::encode(&StyleSheet::standard());
        let report = inspect_token(&token).unwrap();

        assert_eq!(report.tag, "DS1");
        assert_eq!(report.token_bytes, token.len());
        assert!(report.compressed_bytes < report.text_bytes);
        assert_eq!(report.name, "Standard");
        assert_eq!(report.color_slots, model::ColorSlot::COUNT);
        assert!(report.has_accent);
    }

    #[test]
    fn inspect_rejects_bad_tokens() {
        assert!(inspect_token("").is_err());
        assert!(inspect_token("ZZZabc").is_err());
    }

    #[test]
    fn format_report_mentions_every_line() {
        let token = codec::encode(&StyleSheet::new());
        let text = format_inspect_report(&inspect_token(&token).unwrap());
        for needle in ["tag:", "sizes:", "name:", "colors:", "accent:"] {
            assert!(text.contains(needle), "missing {needle}");
        }
        assert!(text.contains("absent"));
    }

    #[test]
    fn decode_token_json_yields_wire_keys() {
        let token = codec::encode(&StyleSheet::classic());
        let value = decode_token_json(&token).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["name"], "Classic");
        assert!(obj.contains_key("col"));
        assert!(obj.contains_key("dol"));
    }

    #[test]
    fn encode_sheet_json_roundtrips() {
        let sheet = StyleSheet::standard();
        let json = serde_json::to_string(&sheet).unwrap();
        let token = encode_sheet_json(&json).unwrap();
        assert_eq!(codec::decode(&token), Ok(sheet));
    }

    #[test]
    fn preset_lookup() {
        assert_eq!(preset_by_name("standard").unwrap().name, "Standard");
        assert_eq!(preset_by_name("classic").unwrap().name, "Classic");
        assert!(preset_by_name("neon").is_err());
    }
}
