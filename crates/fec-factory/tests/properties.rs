use proptest::prelude::*;

use fec_factory::prelude::*;
use fec_factory::tools::math::is_power_of_2_minus_1;

fn arb_bch_params() -> impl Strategy<Value = BchEncoderParams> {
    (2u32..=12, 1usize..=8, 1usize..=16, any::<u64>(), any::<bool>()).prop_map(
        |(m, t, n_frames, seed, systematic)| {
            let n = (1usize << m) - 1;
            let mut p = BchEncoderParams::default();
            p.encoder.n_cw = n;
            p.encoder.k = (n / 2).max(1);
            p.encoder.rate = p.encoder.k as f32 / n as f32;
            p.encoder.n_frames = n_frames;
            p.encoder.seed = seed >> 1;
            p.encoder.systematic = systematic;
            p.t = t;
            p
        },
    )
}

fn arb_frozenbits_params() -> impl Strategy<Value = FrozenbitsMkParams> {
    (
        1u32..=12,
        prop::option::of(1u32..=64),
        prop_oneof![Just("FILE"), Just("BEC")],
    )
        .prop_map(|(m, sigma_eighths, kind)| {
            let mut p = FrozenbitsMkParams::default();
            p.n_cw = 1 << m;
            p.k = p.n_cw / 2;
            p.sigma = sigma_eighths.map(|s| f64::from(s) / 8.0);
            p.kind = kind.to_string();
            p
        })
}

proptest! {
    #[test]
    fn prop_power_of_2_minus_1_iff(n in 0i64..(1 << 40)) {
        prop_assert_eq!(is_power_of_2_minus_1(n), (n as u64 + 1).is_power_of_two());
    }

    #[test]
    fn prop_bch_store_accepts_cw_size_iff_power_of_2_minus_1(n in 1i64..5000) {
        let mut p = BchEncoderParams::default();
        let mut args = ArgumentMap::new();
        p.get_description(&mut args);
        args.set("K", "1");
        args.set("N", n.to_string());
        let stored = p.store(&args);
        prop_assert_eq!(stored.is_ok(), (n + 1).count_ones() == 1);
    }

    #[test]
    fn prop_bch_defaults_store_unchanged(p in arb_bch_params()) {
        let mut args = ArgumentMap::new();
        p.get_description(&mut args);
        prop_assert!(args.check_defaults().is_ok());
        args.set_defaults();
        let mut q = p.clone();
        q.store(&args).unwrap();
        prop_assert_eq!(q, p);
    }

    #[test]
    fn prop_frozenbits_defaults_store_unchanged(p in arb_frozenbits_params()) {
        let mut args = ArgumentMap::new();
        p.get_description(&mut args);
        args.set_defaults();
        let mut q = p.clone();
        q.store(&args).unwrap();
        prop_assert_eq!(q, p);
    }

    #[test]
    fn prop_clone_is_independent(p in arb_bch_params(), k in 1usize..100, t in 1usize..10) {
        let original = p.clone();
        let mut copy = p.clone();
        copy.encoder.k = k;
        copy.t = t;
        copy.encoder.kind.push('X');
        prop_assert_eq!(&p, &original);
        prop_assert_ne!(&copy, &original);
    }
}
