//! Property-based checks for the bit, union and hashing laws.

use proptest::prelude::*;

use clay_rs::bits::{BitOps, FloorLog2, soft};
use clay_rs::blit::{Blit16, Blit32, Blit64};
use clay_rs::buffer::{self, ArrayComparer, BufferComparer, DEFAULT_HASH_CODE_FIDELITY};
use clay_rs::hash::{ByteHashCode, FnvHashCode};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn insert_bit_round_trips(x in any::<u64>(), offset in 0u32..64, on in any::<bool>()) {
        let mut y = x;
        let prev = y.insert_bit(offset, on);
        prop_assert_eq!(prev, x.extract_bit(offset));
        prop_assert_eq!(y.extract_bit(offset), on);
        y.insert_bit(offset, prev);
        prop_assert_eq!(y, x);
    }

    #[test]
    fn complement_bit_twice_is_identity(x in any::<u32>(), offset in 0u32..40) {
        let mut y = x;
        y.complement_bit(offset);
        y.complement_bit(offset);
        prop_assert_eq!(y, x);
    }

    #[test]
    fn rotate_right_then_left_is_identity(x in any::<u64>(), k in any::<i32>()) {
        prop_assert_eq!(x.rotate_bits_right(k).rotate_bits_left(k), x);
        prop_assert_eq!((x as u8).rotate_bits_left(k).rotate_bits_right(k), x as u8);
    }

    #[test]
    fn pop_count_of_complement_fills_width(x in any::<u64>()) {
        prop_assert_eq!(x.pop_count() + (!x).pop_count(), 64);
        let n = x as u16;
        prop_assert_eq!(n.pop_count() + (!n).pop_count(), 16);
    }

    #[test]
    fn leading_count_is_trailing_count_of_reverse(
        x in any::<u32>(),
        shift in 0u32..32,
        on in any::<bool>(),
    ) {
        let v = x >> shift;
        prop_assert_eq!(v.leading_count(on), v.reverse_bits().trailing_count(on));
        prop_assert_eq!(soft::leading_count(u64::from(v), 32, on), v.leading_count(on));
    }

    #[test]
    fn floor_log2_brackets_positive_values(n in 1u64..) {
        let k = n.floor_log2().unwrap();
        prop_assert!(1u128 << k <= u128::from(n));
        prop_assert!(u128::from(n) < 1u128 << (k + 1));
        prop_assert_eq!(soft::floor_log2(n), k);
    }

    #[test]
    fn floor_log2_rejects_non_positive(n in i64::MIN..=0) {
        prop_assert!(n.floor_log2().is_err());
        prop_assert!((n as i32).min(0).floor_log2().is_err());
    }

    #[test]
    fn blit_views_agree(x in any::<u64>()) {
        let w = Blit64::from_unsigned(x);
        prop_assert_eq!(w.bytes(), x.to_le_bytes());
        prop_assert_eq!(w.signed(), x as i64);
        prop_assert_eq!(w.lo().unsigned(), x as u32);
        prop_assert_eq!(w.hi().unsigned(), (x >> 32) as u32);

        let mut n = Blit32::zero();
        n.set_signed(x as i32);
        prop_assert_eq!(n.unsigned(), x as u32);

        let mut s = Blit16::zero();
        s.set_byte(1, (x >> 8) as u8);
        s.set_byte(0, x as u8);
        prop_assert_eq!(s.unsigned(), x as u16);
    }

    #[test]
    fn byte_hash_streaming_matches_bulk(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        let mut hc = ByteHashCode::new();
        for &b in &data {
            hc.add(b);
        }
        prop_assert_eq!(hc.to_hash_code(), ByteHashCode::combine(&data));
    }

    #[test]
    fn fnv_combine2_swaps_only_when_equal(a in any::<i32>(), b in any::<i32>()) {
        let ab = FnvHashCode::combine2(a, b);
        let ba = FnvHashCode::combine2(b, a);
        prop_assert_eq!(ab == ba, a == b);
    }

    #[test]
    fn equal_buffers_hash_equal(data in proptest::collection::vec(any::<u8>(), 0..1200)) {
        let copy = data.clone();
        let cmp = ArrayComparer::new();
        prop_assert!(cmp.equals(Some(data.as_slice()), Some(copy.as_slice())).unwrap());
        prop_assert_eq!(
            cmp.hash_code(Some(data.as_slice())).unwrap(),
            cmp.hash_code(Some(copy.as_slice())).unwrap()
        );
        prop_assert_eq!(buffer::compare(&data, &copy), std::cmp::Ordering::Equal);
    }

    #[test]
    fn tail_past_fidelity_does_not_affect_hash(
        head in proptest::collection::vec(any::<u8>(), DEFAULT_HASH_CODE_FIDELITY),
        tail_a in proptest::collection::vec(any::<u8>(), 1..64),
        seed in any::<u8>(),
    ) {
        let tail_b: Vec<u8> = tail_a.iter().map(|b| b.wrapping_add(seed)).collect();
        let a = [head.as_slice(), tail_a.as_slice()].concat();
        let b = [head.as_slice(), tail_b.as_slice()].concat();
        prop_assert_eq!(
            buffer::hash_code(&a, DEFAULT_HASH_CODE_FIDELITY),
            buffer::hash_code(&b, DEFAULT_HASH_CODE_FIDELITY)
        );
    }
}
