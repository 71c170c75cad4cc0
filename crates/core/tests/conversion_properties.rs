//! Conversion properties checked over every scale pair
//!
//! Covers self-conversion identity, Celsius-hub consistency, absolute-zero
//! agreement and the water fixed points.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempconv_core::{AnyTemperature, Celsius, Delisle, Fahrenheit, Kelvin, Rankine, Reaumur};
use tempconv_core::{Scale, Temperature};

const SAMPLES: usize = 500;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Random physical magnitude on `scale`
fn sample(rng: &mut StdRng, scale: Scale) -> f64 {
    let zero = scale.absolute_zero();
    match scale {
        Scale::Delisle => rng.random_range(zero - 3000.0..=zero),
        _ => rng.random_range(zero..=zero + 3000.0),
    }
}

/// Ordered pairs with a dedicated formula; everything else routes through Celsius
fn has_direct_formula(from: Scale, to: Scale) -> bool {
    use Scale::{Celsius as C, Fahrenheit as F, Kelvin as K, Rankine as R};
    from == C
        || to == C
        || matches!((from, to), (F, K | R) | (K, R) | (R, F | K))
}

#[test]
fn test_self_conversion_returns_exact_magnitude() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(0x7e3f);

    for scale in Scale::ALL {
        for _ in 0..SAMPLES {
            let value = sample(&mut rng, scale);
            let t = AnyTemperature::new(scale, value).unwrap();
            let t = t.as_dyn();
            let same = match scale {
                Scale::Celsius => t.to_celsius().value(),
                Scale::Fahrenheit => t.to_fahrenheit().value(),
                Scale::Kelvin => t.to_kelvin().value(),
                Scale::Rankine => t.to_rankine().value(),
                Scale::Reaumur => t.to_reaumur().value(),
                Scale::Delisle => t.to_delisle().value(),
            };
            assert_eq!(same.to_bits(), value.to_bits(), "{scale} drifted for {value}");
        }
    }
}

#[test]
fn test_indirect_pairs_match_two_hops_through_celsius() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(0xc0ffee);

    for from in Scale::ALL {
        for to in Scale::ALL {
            if from == to || has_direct_formula(from, to) {
                continue;
            }
            for _ in 0..SAMPLES {
                let t = AnyTemperature::new(from, sample(&mut rng, from)).unwrap();
                let direct = t.convert_to(to).magnitude();
                let via_hub = t.convert_to(Scale::Celsius).convert_to(to).magnitude();
                assert_eq!(direct, via_hub, "{from} -> {to} diverged from the hub route");
            }
        }
    }
}

#[test]
fn test_direct_formulas_agree_with_hub() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(42);

    for from in Scale::ALL {
        for to in Scale::ALL {
            if from == to || !has_direct_formula(from, to) {
                continue;
            }
            for _ in 0..SAMPLES {
                let t = AnyTemperature::new(from, sample(&mut rng, from)).unwrap();
                let direct = t.convert_to(to).magnitude();
                let via_hub = t.convert_to(Scale::Celsius).convert_to(to).magnitude();
                assert_abs_diff_eq!(direct, via_hub, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_absolute_zero_agrees_across_scales() {
    init_tracing();
    let zero = Celsius::new(-273.15).unwrap();

    assert_abs_diff_eq!(zero.to_fahrenheit().value(), -459.67, epsilon = 0.01);
    assert_abs_diff_eq!(zero.to_kelvin().value(), 0.0, epsilon = 0.01);
    assert_abs_diff_eq!(zero.to_rankine().value(), 0.0, epsilon = 0.01);
    assert_abs_diff_eq!(zero.to_reaumur().value(), -218.52, epsilon = 0.01);
    assert_abs_diff_eq!(zero.to_delisle().value(), 559.725, epsilon = 0.01);
}

#[test]
fn test_absolute_zero_agrees_from_every_source() {
    init_tracing();
    for from in Scale::ALL {
        let t = AnyTemperature::new(from, from.absolute_zero()).unwrap();
        for to in Scale::ALL {
            assert_abs_diff_eq!(
                t.convert_to(to).magnitude(),
                to.absolute_zero(),
                epsilon = 0.01
            );
        }
    }
}

#[test]
fn test_water_fixed_points() {
    init_tracing();
    let freezing = Celsius::new(0.0).unwrap();
    assert_eq!(freezing.to_fahrenheit().format(), "32.00°F");
    assert_eq!(freezing.to_kelvin().format(), "273.15K");
    assert_eq!(freezing.to_rankine().format(), "491.67°R");
    assert_eq!(freezing.to_reaumur().format(), "0.00°Re");
    assert_eq!(freezing.to_delisle().format(), "150.00°De");

    let boiling = Celsius::new(100.0).unwrap();
    assert_eq!(boiling.to_fahrenheit().format(), "212.00°F");
    assert_eq!(boiling.to_kelvin().format(), "373.15K");
    assert_eq!(boiling.to_rankine().format(), "671.67°R");
    assert_eq!(boiling.to_reaumur().format(), "80.00°Re");
    assert_eq!(boiling.to_delisle().format(), "0.00°De");
}

#[test]
fn test_polymorphic_access() {
    init_tracing();
    let values: [Box<dyn Temperature>; 6] = [
        Box::new(Celsius::new(100.0).unwrap()),
        Box::new(Fahrenheit::new(212.0).unwrap()),
        Box::new(Kelvin::new(373.15).unwrap()),
        Box::new(Rankine::new(671.67).unwrap()),
        Box::new(Reaumur::new(80.0).unwrap()),
        Box::new(Delisle::new(0.0).unwrap()),
    ];

    for (t, scale) in values.iter().zip(Scale::ALL) {
        assert_eq!(t.scale_name(), scale.name());
        assert_abs_diff_eq!(t.to_celsius().value(), 100.0, epsilon = 1e-9);
        assert_eq!(t.to_fahrenheit().format(), "212.00°F");
    }
}
