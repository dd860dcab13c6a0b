use bignum::mpi::{gcd, inv_mod, mod_mpi, mul_mpi, read_string, Mpi};

fn from_hex(s: &str) -> Mpi {
    let mut x = Mpi::new();
    read_string(&mut x, 16, s).unwrap();
    x
}

#[test]
fn gcd_of_coprime_values_is_one() {
    let a = Mpi::from_u64(35);
    let b = Mpi::from_u64(64);
    let mut g = Mpi::new();
    gcd(&mut g, &a, &b).unwrap();
    assert_eq!(g, Mpi::from_u64(1));
}

#[test]
fn gcd_pulls_out_common_factor() {
    let a = Mpi::from_u64(462);
    let b = Mpi::from_u64(1071);
    let mut g = Mpi::new();
    gcd(&mut g, &a, &b).unwrap();
    assert_eq!(g, Mpi::from_u64(21));
}

#[test]
fn gcd_is_symmetric_and_handles_zero() {
    let a = Mpi::from_u64(0);
    let b = Mpi::from_u64(17);
    let mut g1 = Mpi::new();
    gcd(&mut g1, &a, &b).unwrap();
    let mut g2 = Mpi::new();
    gcd(&mut g2, &b, &a).unwrap();
    assert_eq!(g1, g2);
    assert_eq!(g1, Mpi::from_u64(17));
}

#[test]
fn inv_mod_satisfies_a_times_inverse_eq_one() {
    let a = Mpi::from_u64(3);
    let n = Mpi::from_u64(11);

    let mut inv = Mpi::new();
    inv_mod(&mut inv, &a, &n).unwrap();

    let mut product = Mpi::new();
    mul_mpi(&mut product, &a, &inv).unwrap();
    let mut reduced = Mpi::new();
    mod_mpi(&mut reduced, &product, &n).unwrap();

    assert_eq!(reduced, Mpi::from_u64(1));
}

#[test]
fn inv_mod_holds_for_large_rsa_like_modulus() {
    let a = from_hex("10001");
    let n = from_hex("C7970CEEDCC3B0754490201A7AA613C7767");

    let mut inv = Mpi::new();
    inv_mod(&mut inv, &a, &n).unwrap();

    let mut product = Mpi::new();
    mul_mpi(&mut product, &a, &inv).unwrap();
    let mut reduced = Mpi::new();
    mod_mpi(&mut reduced, &product, &n).unwrap();

    assert_eq!(reduced, Mpi::from_u64(1));
}

#[test]
fn inv_mod_rejects_non_coprime_inputs() {
    let a = Mpi::from_u64(6);
    let n = Mpi::from_u64(9);
    let mut inv = Mpi::new();
    assert!(inv_mod(&mut inv, &a, &n).is_err());
}
