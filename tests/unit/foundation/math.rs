use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"reelkit");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_u8(b'r');
    b.write_bytes(b"eelkit");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn str_hash_is_length_prefixed() {
    let mut a = Fnv1a64::new_default();
    a.write_str("ab");
    a.write_str("c");
    let mut b = Fnv1a64::new_default();
    b.write_str("a");
    b.write_str("bc");
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn signed_zero_hashes_equal() {
    let mut a = Fnv1a64::new_default();
    a.write_f64(0.0);
    let mut b = Fnv1a64::new_default();
    b.write_f64(-0.0);
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn unit_f64_stays_below_one() {
    assert_eq!(unit_f64(0), 0.0);
    assert!(unit_f64(u64::MAX) < 1.0);
    for i in 0..1000u64 {
        let v = unit_f64(mix64(i));
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn wrap_handles_negative_and_boundary() {
    assert_eq!(wrap(1930.0, 1920.0), 10.0);
    assert_eq!(wrap(-10.0, 1920.0), 1910.0);
    assert_eq!(wrap(1920.0, 1920.0), 0.0);
    assert_eq!(wrap(-1e-18, 1920.0), 0.0);
}
