use bignum::mpi::{exp_mod, mod_mpi, mul_mpi, read_string, MontgomeryCache, Mpi};

fn from_hex(s: &str) -> Mpi {
    let mut x = Mpi::new();
    read_string(&mut x, 16, s).unwrap();
    x
}

fn from_dec(s: &str) -> Mpi {
    let mut x = Mpi::new();
    read_string(&mut x, 10, s).unwrap();
    x
}

#[test]
fn exp_mod_matches_repeated_multiplication() {
    let a = Mpi::from_u64(7);
    let n = Mpi::from_u64(101);
    let e = Mpi::from_u64(5);

    let mut expected = Mpi::from_u64(1);
    for _ in 0..5 {
        let mut tmp = Mpi::new();
        mul_mpi(&mut tmp, &expected, &a).unwrap();
        let mut reduced = Mpi::new();
        mod_mpi(&mut reduced, &tmp, &n).unwrap();
        expected = reduced;
    }

    let mut actual = Mpi::new();
    exp_mod(&mut actual, &a, &e, &n, None).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn fermat_little_theorem_holds_for_small_prime_modulus() {
    let p = Mpi::from_u64(61);
    let a = Mpi::from_u64(17);
    let mut e = p.clone();
    bignum::mpi::sub_int(&mut e, &e.clone(), 1).unwrap();

    let mut result = Mpi::new();
    exp_mod(&mut result, &a, &e, &p, None).unwrap();
    assert_eq!(result, Mpi::from_u64(1));
}

#[test]
fn exp_mod_zero_exponent_yields_one_even_for_zero_base() {
    let mut result = Mpi::new();
    exp_mod(&mut result, &Mpi::zero(), &Mpi::zero(), &Mpi::from_u64(97), None).unwrap();
    assert_eq!(result, Mpi::from_u64(1));
}

#[test]
fn cache_reuse_produces_identical_results_to_uncached_calls() {
    let n = from_hex("C7970CEEDCC3B0754490201A7AA613C7767");
    let a1 = from_hex("DEADBEEF");
    let a2 = from_hex("CAFEBABE");
    let e = from_hex("10001");

    let mut cache = MontgomeryCache::new();

    let mut cached1 = Mpi::new();
    exp_mod(&mut cached1, &a1, &e, &n, Some(&mut cache)).unwrap();
    let mut cached2 = Mpi::new();
    exp_mod(&mut cached2, &a2, &e, &n, Some(&mut cache)).unwrap();

    let mut uncached1 = Mpi::new();
    exp_mod(&mut uncached1, &a1, &e, &n, None).unwrap();
    let mut uncached2 = Mpi::new();
    exp_mod(&mut uncached2, &a2, &e, &n, None).unwrap();

    assert_eq!(cached1, uncached1);
    assert_eq!(cached2, uncached2);
}

#[test]
fn exp_mod_multi_limb_modulus_matches_independently_known_power() {
    // n = 2^128 - 159: a two-limb modulus whose top 64-bit limb is
    // all ones, the case that forces the post-loop Montgomery
    // accumulator past what fits in `n`'s own limb width.
    let n = from_dec("340282366920938463463374607431768211297");
    let a = Mpi::from_u64(2);
    let e = Mpi::from_u64(100);

    // 2^100 is far smaller than n, so the expected residue is simply
    // 2^100 itself, a value fixed independently of this crate.
    let expected = from_dec("1267650600228229401496703205376");

    let mut result = Mpi::new();
    exp_mod(&mut result, &a, &e, &n, None).unwrap();
    assert_eq!(result, expected);
}

#[test]
fn exp_mod_rejects_even_modulus() {
    let mut result = Mpi::new();
    let err = exp_mod(
        &mut result,
        &Mpi::from_u64(3),
        &Mpi::from_u64(4),
        &Mpi::from_u64(10),
        None,
    );
    assert!(err.is_err());
}
