use num_bigint::BigInt;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use triple_ecc::{
    CURVE_COUNT, CurveId, EccError, KeyPair, Point, Session, SessionConfig, SessionState,
    TripleCurveCipher, mod_inverse,
};

fn dec(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 10).unwrap()
}

/// Known secp256k1 multiples of G
fn secp256k1_multiple(k: u32) -> Point {
    let (x, y) = match k {
        2 => (
            "89565891926547004231252920425935692360644145829622209833684329913297188986597",
            "12158399299693830322967808612713398636155367887041628176798871954788371653930",
        ),
        3 => (
            "112711660439710606056748659173929673102114977341539408544630613555209775888121",
            "25583027980570883691656905877401976406448868254816295069919888960541586679410",
        ),
        _ => unreachable!("no vector for {}", k),
    };
    Point::Affine { x: dec(x), y: dec(y) }
}

#[test]
fn test_curve_a_doubling_matches_known_vector() {
    let curve = CurveId::A.curve();
    let g = curve.base_point();

    let two_g = curve.scalar_mul(&BigInt::from(2), g).unwrap();
    assert_eq!(two_g, curve.add(g, g));
    assert_eq!(two_g, secp256k1_multiple(2));

    let three_g = curve.scalar_mul(&BigInt::from(3), g).unwrap();
    assert_eq!(three_g, curve.add(&two_g, g));
    assert_eq!(three_g, secp256k1_multiple(3));
}

#[test]
fn test_curve_c_doubling_matches_known_vector() {
    let curve = CurveId::C.curve();
    let two_g = curve.double(curve.base_point());
    assert_eq!(
        two_g,
        Point::Affine {
            x: dec("11838696407187388799350957250141035264678915751356546206913969278886"),
            y: dec("2966624012289393637077209076615926844583158638456025172915528198331"),
        }
    );
}

#[test]
fn test_group_identity_on_all_curves() {
    for id in CurveId::ALL {
        let curve = id.curve();
        let g = curve.base_point();
        assert_eq!(&curve.add(g, &Point::Infinity), g);
        assert_eq!(&curve.add(&Point::Infinity, g), g);
        assert_eq!(curve.add(g, &curve.negate(g)), Point::Infinity);
    }
}

#[test]
fn test_scalar_linearity_on_all_curves() {
    for id in CurveId::ALL {
        let curve = id.curve();
        let g = curve.base_point();
        for (k1, k2) in [(0u32, 5u32), (3, 4), (7, 9), (16, 17)] {
            let lhs = curve.scalar_mul(&BigInt::from(k1 + k2), g).unwrap();
            let rhs = curve.add(
                &curve.scalar_mul(&BigInt::from(k1), g).unwrap(),
                &curve.scalar_mul(&BigInt::from(k2), g).unwrap(),
            );
            assert_eq!(lhs, rhs, "{}: {} + {}", id, k1, k2);
        }
    }
}

#[test]
fn test_scalar_as_large_as_modulus() {
    for id in CurveId::ALL {
        let curve = id.curve();
        let g = curve.base_point();
        let k = curve.modulus() - BigInt::from(1);
        let point = curve.scalar_mul(&k, g).unwrap();
        assert!(curve.contains(&point), "{}", id);
    }
}

#[test]
fn test_division_by_zero_boundary() {
    for id in CurveId::ALL {
        let p = id.curve().modulus();
        assert_eq!(mod_inverse(&BigInt::from(0), p), Err(EccError::DivisionByZero));
        assert_eq!(mod_inverse(p, p), Err(EccError::DivisionByZero));

        let k = p - BigInt::from(2);
        let inv = mod_inverse(&k, p).unwrap();
        assert_eq!((k * inv) % p, BigInt::from(1));
    }
}

#[test]
fn test_single_character_with_private_key_two() {
    // Curve A keyed with priv = 2, the other curves with fresh keys
    let cipher = TripleCurveCipher::standard();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut keys = cipher.generate_keypairs(&mut rng).unwrap();
    keys[0] = KeyPair::from_private(CurveId::A.curve(), BigInt::from(2)).unwrap();

    let publics = keys.clone().map(|k| k.public_key().clone());
    let privates = keys.clone().map(|k| k.private_key().clone());

    let ciphertext = cipher.encrypt("A", &publics, &mut rng).unwrap();
    let plaintexts = cipher.decrypt(&ciphertext, &privates).unwrap();
    assert_eq!(plaintexts, ["A", "A", "A"].map(String::from));
}

#[test]
fn test_session_round_trip_mixed_text() {
    let message = "Grüße, 世界! 🦀";
    let mut session = Session::new(SessionConfig::default().with_seed(77)).unwrap();
    assert_eq!(session.decrypt(), Err(EccError::NotYetEncrypted));

    let ciphertext = session.encrypt(message).unwrap();
    for part in ciphertext.parts() {
        assert_eq!(part.len(), message.chars().count());
    }

    let plaintexts = session.decrypt().unwrap();
    for plaintext in plaintexts {
        assert_eq!(plaintext, message);
    }
    assert_eq!(session.state(), SessionState::Decrypted);
}

#[test]
fn test_parallel_and_sequential_agree_for_same_seed() {
    let message = "parallel";
    let mut parallel = Session::new(SessionConfig::default().with_seed(5)).unwrap();
    let mut sequential =
        Session::new(SessionConfig::default().with_seed(5).with_parallel(false)).unwrap();

    assert!(parallel.cipher().is_parallel());
    assert!(!sequential.cipher().is_parallel());
    assert_eq!(
        parallel.encrypt(message).unwrap(),
        sequential.encrypt(message).unwrap()
    );
    assert_eq!(parallel.decrypt().unwrap(), sequential.decrypt().unwrap());
}

#[test]
fn test_fresh_nonces_per_encryption() {
    let mut session = Session::new(SessionConfig::default().with_seed(8)).unwrap();
    let first = session.encrypt("aa").unwrap().clone();
    let second = session.encrypt("aa").unwrap().clone();
    assert_ne!(first, second);

    // same character twice in one message still gets two different nonces
    let part = &first.parts()[0];
    assert_ne!(part.ephemeral_points()[0], part.ephemeral_points()[1]);
}

#[test]
fn test_cross_key_mismatch() {
    let cipher = TripleCurveCipher::standard();
    let alice = cipher
        .generate_keypairs(&mut ChaCha20Rng::seed_from_u64(1))
        .unwrap();
    let mallory = cipher
        .generate_keypairs(&mut ChaCha20Rng::seed_from_u64(2))
        .unwrap();

    let publics = alice.clone().map(|k| k.public_key().clone());
    let ciphertext = cipher
        .encrypt("attack at dawn", &publics, &mut ChaCha20Rng::seed_from_u64(3))
        .unwrap();

    let wrong: [BigInt; CURVE_COUNT] = mallory.map(|k| k.private_key().clone());
    let plaintexts = cipher.decrypt(&ciphertext, &wrong).unwrap();
    for plaintext in &plaintexts {
        assert_ne!(plaintext, "attack at dawn");
        assert_eq!(plaintext.chars().count(), "attack at dawn".len());
    }
}

#[test]
fn test_empty_message_rejected_by_session() {
    let mut session = Session::new(SessionConfig::default().with_seed(1)).unwrap();
    assert_eq!(session.encrypt("").unwrap_err(), EccError::EmptyInput);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_compare_security_leaves_message_alone() {
    let config = SessionConfig::default().with_seed(12).with_benchmark_runs(2);
    let mut session = Session::new(config).unwrap();
    session.encrypt("hi").unwrap();
    let before = session.ciphertext().cloned();

    let report = session.compare_security("hi").unwrap();
    assert_eq!(report.runs, 2);
    assert_eq!(report.message_chars, 2);
    assert_eq!(session.state(), SessionState::Encrypted);
    assert_eq!(session.ciphertext().cloned(), before);
}
