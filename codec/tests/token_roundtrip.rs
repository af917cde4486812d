use codec::{decode, encode, DecodeError, FormatError, FORMAT_TAG};
use model::{AccentPalette, ColorSlot, Rgba, StyleSheet, Vec2, PLACEHOLDER_NAME};

fn partial_sheet() -> StyleSheet {
    let mut sheet = StyleSheet::new();
    sheet.name = "Partial".to_owned();
    sheet.alpha = 0.75;
    sheet.item_spacing = Vec2::new(8.0, 4.0);
    sheet
        .colors
        .insert(ColorSlot::Text, Rgba::new(0.9, 0.9, 0.9, 1.0));
    sheet
        .colors
        .insert(ColorSlot::WindowBg, Rgba::new(0.06, 0.06, 0.06, 0.87));
    sheet
}

#[test]
fn integration_roundtrip_empty_sheet() {
    let sheet = StyleSheet::new();
    let decoded = decode(&encode(&sheet)).unwrap();
    assert_eq!(decoded, sheet);
    assert_eq!(decoded.name, PLACEHOLDER_NAME);
    assert!(decoded.colors.is_empty());
    assert!(decoded.accent.is_none());
}

#[test]
fn integration_roundtrip_partial_colors_absent_accent() {
    let sheet = partial_sheet();
    assert_eq!(decode(&encode(&sheet)), Ok(sheet));
}

#[test]
fn integration_roundtrip_full_colors_present_accent() {
    let mut sheet = StyleSheet::standard();
    sheet.name = "Custom full".to_owned();
    let mut accent = AccentPalette::STOCK;
    accent.orange = Rgba::new(0.95, 0.6, 0.1, 1.0);
    sheet.accent = Some(accent);

    let decoded = decode(&encode(&sheet)).unwrap();
    assert_eq!(decoded, sheet);
    assert_eq!(decoded.colors.len(), ColorSlot::COUNT);
}

#[test]
fn integration_roundtrip_awkward_float_values() {
    let mut sheet = StyleSheet::new();
    sheet.alpha = 0.022624433;
    sheet.window_title_align = Vec2::new(0.1, 1.0e-7);
    sheet.grab_min_size = -0.0;
    sheet
        .colors
        .insert(ColorSlot::TitleBg, Rgba::new(0.38914025, 0.10917056, 0.10917056, 0.8280543));
    assert_eq!(decode(&encode(&sheet)), Ok(sheet));
}

// The documented concrete scenario for format version 1.
#[test]
fn integration_concrete_ds1_scenario() {
    let mut sheet = StyleSheet::new();
    sheet.name = "Test".to_owned();
    sheet.alpha = 1.0;
    sheet.window_padding = Vec2::new(8.0, 8.0);
    sheet
        .colors
        .insert(ColorSlot::Text, Rgba::new(1.0, 1.0, 1.0, 1.0));
    sheet.accent = None;

    let token = encode(&sheet);
    assert!(token.starts_with("DS1"));

    let decoded = decode(&token).unwrap();
    assert_eq!(decoded.name, "Test");
    assert_eq!(decoded.alpha, 1.0);
    assert_eq!(decoded.window_padding, Vec2::new(8.0, 8.0));
    assert_eq!(decoded.colors.len(), 1);
    assert_eq!(
        decoded.colors.get(&ColorSlot::Text),
        Some(&Rgba::new(1.0, 1.0, 1.0, 1.0))
    );
    assert!(decoded.accent.is_none());
}

#[test]
fn integration_preset_stability() {
    // Regression fixture against accidental edits to the preset constants.
    for preset in [StyleSheet::standard(), StyleSheet::classic()] {
        assert_eq!(decode(&encode(&preset)), Ok(preset));
    }
}

#[test]
fn integration_decode_empty_token_is_format_error() {
    assert_eq!(
        decode(""),
        Err(DecodeError::Format(FormatError::TooShort { len: 0 }))
    );
}

#[test]
fn integration_decode_short_token_is_format_error() {
    assert_eq!(
        decode("XX"),
        Err(DecodeError::Format(FormatError::TooShort { len: 2 }))
    );
}

#[test]
fn integration_decode_foreign_tag_is_format_error() {
    let valid = encode(&StyleSheet::standard());
    let forged = format!("ZZZ{}", &valid[FORMAT_TAG.len()..]);
    assert!(matches!(
        decode(&forged),
        Err(DecodeError::Format(FormatError::UnknownTag { .. }))
    ));
}

#[test]
fn integration_decode_garbage_payload_is_frame_error() {
    let err = decode("DS1%%%%not-base64%%%%").unwrap_err();
    assert!(matches!(err, DecodeError::Frame(_)));
}

#[test]
fn integration_decode_valid_base64_garbage_is_frame_error() {
    // Well-formed base64 that is not a gzip stream.
    let err = decode("DS1aGVsbG8gd29ybGQ=").unwrap_err();
    assert!(matches!(err, DecodeError::Frame(_)));
}

#[test]
fn integration_failed_decode_keeps_no_partial_state() {
    // Truncating a valid token must fail cleanly, not produce a half sheet.
    let token = encode(&StyleSheet::standard());
    let truncated = &token[..token.len() - 8];
    assert!(decode(truncated).is_err());
}

#[test]
fn integration_tokens_from_older_writers_still_decode() {
    // A token whose text predates the accent palette and most fields.
    let token = wire::seal("{\"name\":\"Vintage\",\"a\":1.0,\"t\":10.0}");
    let sheet = decode(&token).unwrap();
    assert_eq!(sheet.name, "Vintage");
    assert_eq!(sheet.grab_min_size, 10.0);
    assert_eq!(sheet.window_padding, Vec2::default());
    assert!(sheet.accent.is_none());
}
