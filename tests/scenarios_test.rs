//! This test suite exercises the public interface on the documented usage scenarios
//! and on the general properties of the numbers.

use astro_magnitude::{
    ctx, Context, Error, Magnitude, ADD_EXPONENT_GAP, EXPONENT_MAX, INF, MAX, MIN, NAN, ONE, ZERO,
};
use rand::random;

fn random_magnitude(exp_from: u64, exp_to: u64) -> Magnitude {
    let m = 1.0 + 9.0 * random::<f64>();
    let m = if random::<bool>() { m } else { -m };
    Magnitude::new(m, exp_from + random::<u64>() % (exp_to - exp_from + 1))
}

#[test]
fn scenarios() {
    let n = Magnitude::parse("1.23456789e123456789").unwrap();
    assert_eq!(n.to_string_with_precision(2), "1.23e123456789");

    let n = Magnitude::parse("-1.23456789e123456789").unwrap();
    assert_eq!(n.to_string_with_precision(2), "-1.24e123456789");

    let n = Magnitude::from(100) + Magnitude::from(10);
    assert!(n == Magnitude::from(110));
    assert_eq!(n.to_string(), "110");

    assert_eq!(Magnitude::from(100).to_string(), "100");
    assert_eq!(Magnitude::from(10).to_string(), "10");
    assert_eq!(Magnitude::from(0).to_string(), "0");

    assert!((Magnitude::from(10) / Magnitude::from(0)).is_nan());
    assert!((MAX / ZERO).is_nan());
    assert!((ZERO / ZERO).is_nan());

    let n = Magnitude::from(27).root(3).unwrap();
    assert!((n.to_f64() - 3.0).abs() < 1e-12);

    let l = Magnitude::from(12345).log10().unwrap();
    assert!((l - 4.09149).abs() < 1e-5);
    let l = Magnitude::parse("1.234e1000").unwrap().log10().unwrap();
    assert!((l - 1000.0913).abs() < 1e-4);

    assert!(MAX + ONE == MAX);
    assert!(MIN - ONE == MIN);
    assert!(INF + INF == INF);
    assert!((NAN + NAN).is_nan());
    let nan = NAN;
    assert!(nan != NAN);

    let pretty = Magnitude::from(123456789).to_pretty_string(&Context::default());
    assert_eq!(pretty, "123,456,789");

    assert!(Magnitude::from(16).pow(2).unwrap() == 256);
    assert!(Magnitude::from(64).sqrt().unwrap() == 8);
    assert!(Magnitude::from(42).pow(2).unwrap().sqrt().unwrap() == 42);
    assert!(Magnitude::from(10).pow(6).unwrap() == Magnitude::new(1.0, 6));

    assert_eq!(ZERO.pow(-1).unwrap_err(), Error::NegativePowerOfZero);
    assert_eq!(Magnitude::from(-4).sqrt().unwrap_err(), Error::EvenRootOfNegative);
    assert_eq!(ONE.root(0).unwrap_err(), Error::ZeroRoot);
    assert_eq!(Magnitude::parse("gold").unwrap_err(), Error::InvalidNumber);
}

#[test]
fn formatting() {
    let n = Magnitude::from(987654321);
    assert_eq!(n.to_string(), "987654321");
    assert_eq!(n.serialize(), "987654321");
    assert_eq!(Magnitude::from(9876543210i64).to_string(), "9.87e9");
    assert_eq!(Magnitude::from(9876543210i64).serialize(), "9.876543210e9");

    let ctx = ctx::with_max_digits(15);
    assert_eq!(Magnitude::from(9876543210i64).format(&ctx), "9876543210");
    assert_eq!(Magnitude::from(9876543210i64).to_pretty_string(&ctx), "9,876,543,210");

    let ctx = ctx::with_precision(5);
    assert_eq!(Magnitude::new(1.23456789, 50).format(&ctx), "1.23456e50");
    assert_eq!(format!("{:.5}", Magnitude::new(1.23456789, 50)), "1.23456e50");
    assert_eq!(format!("{}", Magnitude::new(-1.23456789, 50)), "-1.24e50");

    // flooring never yields a two-digit mantissa
    assert_eq!(MAX.to_string_with_precision(2), format!("9.99e{}", EXPONENT_MAX));
    assert_eq!(MIN.to_string_with_precision(3), format!("-9.999e{}", EXPONENT_MAX));
    assert_eq!(Magnitude::new(-9.9999, 20).to_string(), "-9.99e20");

    assert_eq!(INF.to_string(), "inf");
    assert_eq!((-INF).to_string(), "-inf");
    assert_eq!(NAN.to_string(), "nan");
}

#[test]
fn round_trip() {
    for _ in 0..10000 {
        let i = random::<i64>() % 1_000_000_000;
        let n = Magnitude::from(i);
        assert_eq!(n.to_string().parse::<Magnitude>().unwrap(), n);
        assert_eq!(Magnitude::parse(&n.serialize()).unwrap(), n);
        assert_eq!(n.to_number(), Some(i));
    }

    for _ in 0..10000 {
        // scientific notation starts at the default digit budget
        let n = random_magnitude(9, 1_000_000);
        let p = Magnitude::parse(&n.serialize()).unwrap();
        assert_eq!(p.exponent(), n.exponent());
        assert!((p.mantissa() - n.mantissa()).abs() < 1e-8);
        // the serialized mantissa is floored
        assert!(p <= n);
    }
}

#[test]
fn properties() {
    for _ in 0..10000 {
        let a = random_magnitude(0, 100);
        let b = random_magnitude(0, 100);
        let c = random_magnitude(0, 100);

        // normalization
        for n in [a, a + b, a * b, a / b, a - b] {
            let mut m = n;
            m.normalize();
            assert_eq!(m.mantissa(), n.mantissa());
            assert_eq!(m.exponent(), n.exponent());
            assert!(n.is_zero() || (n.mantissa().abs() >= 1.0 && n.mantissa().abs() < 10.0));
            if n.is_zero() {
                assert_eq!(n.exponent(), 0);
            }
        }

        // comparison is antisymmetric and transitive
        let ab = a.cmp(&b).unwrap();
        assert_eq!(ab, -b.cmp(&a).unwrap());
        if a <= b && b <= c {
            assert!(a <= c);
        }
        if a >= b && b >= c {
            assert!(a >= c);
        }
        assert!(a.max(&b) >= a.min(&b));

        // additive dominance
        let small = Magnitude::new(a.mantissa(), a.exponent() % 10);
        let gap = ADD_EXPONENT_GAP + 1 + random::<u64>() % 50;
        let big = Magnitude::new(b.mantissa(), small.exponent() + gap);
        assert_eq!(big + small, big);
        assert_eq!(small + big, big);
        assert_eq!(big - small, big);

        // opposite numbers cancel
        assert!((a + (-a)).is_zero());
        assert!((a - a).is_zero());
    }

    // sub-unity collapse
    for _ in 0..1000 {
        let f = random::<f64>();
        assert!(Magnitude::from(f).is_zero());
        assert!(Magnitude::from(-f).is_zero());
        assert!(Magnitude::parse(&format!("{}", f)).unwrap().is_zero());
        assert!((ONE / Magnitude::from(2 + random::<u32>() % 1000)).is_zero());
    }
}

#[test]
fn saturation() {
    let big = Magnitude::new(5.0, EXPONENT_MAX);
    assert!(big * 2 == MAX);
    assert!(big * -2 == MIN);
    assert!(big + big == MAX);
    assert!(-big - big == MIN);
    assert!(MAX.pow(2).unwrap() == MAX);
    assert!(Magnitude::parse("1e100000000000000000000").unwrap() == MAX);
    assert!(Magnitude::parse("-1e100000000000000000000").unwrap() == MIN);

    assert!(MIN < -big && -big < big && big < MAX);
    assert!(-INF < MIN && MAX < INF);
    assert_eq!(MAX.to_number(), None);
    assert_eq!(MAX.to_f64(), f64::INFINITY);
    assert!(MAX.log10().is_some());
    assert!(INF.log10().is_none());
    assert!(ZERO.log10().is_none());
}
