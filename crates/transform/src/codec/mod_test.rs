//! Tests for the codec registry and built-in codecs

use super::*;

fn apply(registry: &CodecRegistry, scheme: &str, input: &[u8]) -> CodecResult {
    let codec = registry.resolve(scheme).unwrap();
    codec(input)
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_empty_registry() {
    let registry = CodecRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.schemes().is_empty());
}

#[test]
fn test_builtin_schemes() {
    assert_eq!(CodecRegistry::encoders().schemes(), vec!["base64", "hex"]);
    assert_eq!(CodecRegistry::decoders().schemes(), vec!["base64", "hex"]);
}

#[test]
fn test_resolve_unknown_scheme() {
    let registry = CodecRegistry::encoders();
    let err = registry.resolve("rot13").err().unwrap();

    assert_eq!(
        err,
        TransformError::UnknownScheme {
            scheme: "rot13".to_string(),
            available: "base64, hex".to_string(),
        }
    );
}

#[test]
fn test_lookup_is_exact_match() {
    let registry = CodecRegistry::encoders();
    assert!(registry.contains("base64"));
    assert!(!registry.contains("BASE64"));
    assert!(!registry.contains("base64 "));
    assert!(registry.resolve("Base64").is_err());
}

#[test]
fn test_register_custom_scheme() {
    let mut registry = CodecRegistry::new();
    registry.register("upper", |input: &[u8]| Ok(input.to_ascii_uppercase()));

    assert_eq!(apply(&registry, "upper", b"abc").unwrap(), b"ABC");
}

#[test]
#[should_panic(expected = "already registered")]
fn test_duplicate_registration_panics() {
    let mut registry = CodecRegistry::encoders();
    registry.register("base64", base64_codec::decode);
}

#[test]
fn test_try_register_duplicate() {
    let mut registry = CodecRegistry::encoders();
    assert!(!registry.try_register("base64", base64_codec::decode));
    assert!(registry.try_register("b64", base64_codec::encode));
    assert_eq!(registry.len(), 3);

    // The original registration is kept
    assert_eq!(apply(&registry, "base64", b"abc").unwrap(), b"YWJj");
}

#[test]
fn test_resolve_twice_is_equivalent() {
    let registry = CodecRegistry::encoders();
    let first = registry.resolve("base64").unwrap();
    let second = registry.resolve("base64").unwrap();

    let inputs: [&[u8]; 4] = [b"", b"a", b"hello world", &[0, 255, 128, 7]];
    for input in inputs {
        assert_eq!(first(input), second(input));
    }
}

#[test]
fn test_debug_lists_schemes() {
    let debug = format!("{:?}", CodecRegistry::encoders());
    assert_eq!(debug, r#"CodecRegistry { schemes: ["base64", "hex"] }"#);
}

// =============================================================================
// base64
// =============================================================================

#[test]
fn test_base64_encode_known_values() {
    let registry = CodecRegistry::encoders();
    assert_eq!(apply(&registry, "base64", b"abc").unwrap(), b"YWJj");
    assert_eq!(apply(&registry, "base64", b"xyz").unwrap(), b"eHl6");
    assert_eq!(apply(&registry, "base64", b"").unwrap(), b"");
    assert_eq!(apply(&registry, "base64", b"a").unwrap(), b"YQ==");
    assert_eq!(apply(&registry, "base64", b"ab").unwrap(), b"YWI=");
}

#[test]
fn test_base64_encode_length() {
    for n in 0..64usize {
        let input = vec![0xA5u8; n];
        let encoded = base64_codec::encode(&input).unwrap();
        assert_eq!(encoded.len(), n.div_ceil(3) * 4);
    }
}

#[test]
fn test_base64_encode_has_no_line_wrapping() {
    let input = vec![b'x'; 1024];
    let encoded = base64_codec::encode(&input).unwrap();
    assert!(!encoded.contains(&b'\n'));
    assert!(!encoded.contains(&b'\r'));
}

#[test]
fn test_base64_round_trip_all_bytes() {
    let input: Vec<u8> = (0..=255u8).collect();
    let encoded = base64_codec::encode(&input).unwrap();
    assert_eq!(base64_codec::decode(&encoded).unwrap(), input);
}

#[test]
fn test_base64_decode_invalid() {
    let err = base64_codec::decode(b"not base64!").unwrap_err();
    assert!(err.to_string().starts_with("invalid base64"));
}

// =============================================================================
// hex
// =============================================================================

#[test]
fn test_hex_encode_known_values() {
    assert_eq!(hex_codec::encode(b"\x00\xffab").unwrap(), b"00ff6162");
}

#[test]
fn test_hex_round_trip() {
    let input = b"sluice \x01\x02";
    let encoded = hex_codec::encode(input).unwrap();
    assert_eq!(hex_codec::decode(&encoded).unwrap(), input);
}

#[test]
fn test_hex_decode_accepts_uppercase() {
    assert_eq!(hex_codec::decode(b"00FF").unwrap(), vec![0x00, 0xff]);
}

#[test]
fn test_hex_decode_invalid() {
    assert!(hex_codec::decode(b"abc").is_err());
    assert!(hex_codec::decode(b"zz").is_err());
}
