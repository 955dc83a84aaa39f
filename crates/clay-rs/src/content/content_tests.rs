use super::*;
use std::collections::BTreeSet;

const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

#[test]
fn computes_known_digests() {
    assert_eq!(Sha256Hash::compute(b""), Sha256Hash::EMPTY);
    assert_eq!(Sha256Hash::compute(b"abc").to_string(), ABC_HEX);
    assert_eq!(
        Sha256Hash::EMPTY.to_string(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn parses_hex_in_any_case_with_whitespace() {
    let expected = Sha256Hash::compute(b"abc");
    assert_eq!(Sha256Hash::parse(ABC_HEX).unwrap(), expected);
    assert_eq!(ABC_HEX.to_uppercase().parse::<Sha256Hash>().unwrap(), expected);
    assert_eq!(Sha256Hash::parse(&format!("  {ABC_HEX}\n")).unwrap(), expected);
}

#[test]
fn display_round_trips_through_parse() {
    let h = Sha256Hash::compute(b"round trip");
    let text = format!("{h}");
    assert_eq!(text.len(), SHA256_HEX_LEN);
    assert_eq!(text.parse::<Sha256Hash>().unwrap(), h);
    assert_eq!(format!("{h:x}"), text);
    assert_eq!(format!("{h:?}"), format!("Sha256Hash({text})"));
}

#[test]
fn rejects_malformed_hex() {
    assert!(Sha256Hash::parse("").is_err());
    assert!(Sha256Hash::parse(&ABC_HEX[..63]).is_err());
    assert!(Sha256Hash::parse(&format!("{ABC_HEX}0")).is_err());

    let bad = format!("g{}", &ABC_HEX[1..]);
    let err = Sha256Hash::parse(&bad).unwrap_err();
    assert!(err.to_string().contains("'g'"), "{err}");
}

#[test]
fn slice_conversion_checks_length() {
    let h = Sha256Hash::compute(b"slice");
    assert_eq!(Sha256Hash::try_from_slice(h.as_ref()).unwrap(), h);
    assert_eq!(Sha256Hash::try_from(&h.as_bytes()[..]).unwrap(), h);

    let err = Sha256Hash::try_from_slice(&[0u8; 31]).unwrap_err();
    assert!(err.to_string().contains("got 31"), "{err}");
}

#[test]
fn orders_by_digest_bytes() {
    let low = Sha256Hash::from_bytes([0u8; SHA256_LEN]);
    let mut mid_bytes = [0u8; SHA256_LEN];
    mid_bytes[SHA256_LEN - 1] = 1;
    let mid = Sha256Hash::from(mid_bytes);
    let high = Sha256Hash::from_bytes([0xFF; SHA256_LEN]);

    assert!(low < mid);
    assert!(mid < high);

    let set: BTreeSet<_> = [high, low, mid].into_iter().collect();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![low, mid, high]);
}

#[test]
fn default_is_empty_digest() {
    assert_eq!(Sha256Hash::default(), Sha256Hash::EMPTY);
}

const SHA1_ABC_HEX: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

#[test]
fn sha1_computes_known_digests() {
    assert_eq!(Sha1Hash::compute(b""), Sha1Hash::EMPTY);
    assert_eq!(
        Sha1Hash::EMPTY.to_string(),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
    assert_eq!(Sha1Hash::compute(b"abc").to_string(), SHA1_ABC_HEX);
    assert_eq!(Sha1Hash::default(), Sha1Hash::EMPTY);
}

#[test]
fn sha1_parses_and_formats_hex() {
    let expected = Sha1Hash::compute(b"abc");
    assert_eq!(Sha1Hash::parse(SHA1_ABC_HEX).unwrap(), expected);
    assert_eq!(SHA1_ABC_HEX.to_uppercase().parse::<Sha1Hash>().unwrap(), expected);
    assert_eq!(Sha1Hash::parse(&format!("\t{SHA1_ABC_HEX} ")).unwrap(), expected);

    let text = expected.to_string();
    assert_eq!(text.len(), SHA1_HEX_LEN);
    assert_eq!(format!("{expected:x}"), text);
    assert_eq!(format!("{expected:?}"), format!("Sha1Hash({text})"));
}

#[test]
fn sha1_rejects_sha256_sized_input() {
    let err = Sha1Hash::parse(ABC_HEX).unwrap_err();
    assert!(err.to_string().contains("got 64"), "{err}");
    assert!(Sha1Hash::parse(&SHA1_ABC_HEX[..39]).is_err());
    assert!(Sha1Hash::parse(&format!("z{}", &SHA1_ABC_HEX[1..])).is_err());

    let digest = Sha256Hash::compute(b"abc");
    let err = Sha1Hash::try_from_slice(digest.as_ref()).unwrap_err();
    assert!(err.to_string().contains("got 32"), "{err}");

    let h = Sha1Hash::compute(b"slice");
    assert_eq!(Sha1Hash::try_from(&h.as_bytes()[..]).unwrap(), h);
}

#[test]
fn sha1_orders_by_digest_bytes() {
    let low = Sha1Hash::from_bytes([0u8; SHA1_LEN]);
    let mut mid_bytes = [0u8; SHA1_LEN];
    mid_bytes[0] = 1;
    let mid = Sha1Hash::from(mid_bytes);
    let high = Sha1Hash::from_bytes([0xFF; SHA1_LEN]);

    let set: BTreeSet<_> = [mid, high, low].into_iter().collect();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![low, mid, high]);
}
