use fmtguard::{classify, classify_bytes, ensure_plain, is_plain, is_plain_units, Classification, GuardError};

#[test]
fn test_plain_text_accepted() {
    assert!(is_plain("hello world"));
    assert!(is_plain(""));
    assert!(is_plain("no directives here, just punctuation !?"));
}

#[test]
fn test_escaped_directive_accepted() {
    assert!(is_plain("100%% safe"));
    assert!(is_plain("%%"));
    assert!(is_plain("%%%%"));
    assert!(is_plain("a%%b%%c"));
}

#[test]
fn test_active_directives_rejected() {
    assert!(!is_plain("%s%s%s"));
    assert!(!is_plain("%d"));
    assert!(!is_plain("a%b"));
    assert!(!is_plain("%n write primitive"));
}

#[test]
fn test_trailing_directive_rejected() {
    // End of input right after the introducer is unsafe
    assert!(!is_plain("trailing%"));
    assert!(!is_plain("%"));
    assert!(!is_plain("%%%"));
}

#[test]
fn test_classification_is_exclusive() {
    assert_eq!(classify("plain"), Classification::Plain);
    assert_eq!(classify("%x"), Classification::Templated { position: 0 });
}

#[test]
fn test_classify_bytes_matches_str_scan() {
    assert_eq!(classify_bytes(b"100%% safe"), Classification::Plain);
    assert_eq!(classify_bytes(b"%s"), Classification::Templated { position: 0 });
    assert_eq!(classify_bytes(b"trailing%"), Classification::Templated { position: 8 });
}

#[test]
fn test_wide_sequences() {
    assert!(is_plain_units(['a', '%', '%', 'b']));
    assert!(!is_plain_units(['a', '%', 's']));
    assert!(!is_plain_units(['%']));
    assert!(is_plain_units(core::iter::empty()));
}

#[test]
fn test_ensure_plain_passes_input_through() {
    assert_eq!(ensure_plain("fine"), Ok("fine"));
}

#[test]
fn test_ensure_plain_reports_position() {
    assert_eq!(
        ensure_plain("ab%cd"),
        Err(GuardError::TemplatedInput { position: 2 })
    );
}
