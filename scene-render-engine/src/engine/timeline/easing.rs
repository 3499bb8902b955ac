use constants::timeline::Ease;

/// Map linear tween progress to eased progress. Input is clamped to [0, 1].
pub fn ease(curve: Ease, t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    match curve {
        Ease::Linear => t,
        // Cubic in-out.
        Ease::Power2InOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
        // Quintic in.
        Ease::Power4In => t.powi(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Ease; 3] = [Ease::Linear, Ease::Power2InOut, Ease::Power4In];

    #[test]
    fn test_curves_pin_endpoints() {
        for curve in CURVES {
            assert_eq!(ease(curve, 0.0), 0.0, "{curve:?}");
            assert!((ease(curve, 1.0) - 1.0).abs() < 1e-6, "{curve:?}");
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for curve in CURVES {
            let mut previous = ease(curve, 0.0);
            for step in 1..=100 {
                let value = ease(curve, step as f32 / 100.0);
                assert!(value >= previous, "{curve:?} decreases at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_in_out_is_symmetric_about_midpoint() {
        assert!((ease(Ease::Power2InOut, 0.5) - 0.5).abs() < 1e-6);
        for step in 0..=10 {
            let t = step as f32 / 20.0;
            let mirrored = 1.0 - ease(Ease::Power2InOut, 1.0 - t);
            assert!((ease(Ease::Power2InOut, t) - mirrored).abs() < 1e-5);
        }
    }

    #[test]
    fn test_power4_in_starts_slowly() {
        assert!((ease(Ease::Power4In, 0.5) - 0.03125).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(ease(Ease::Power2InOut, -3.0), 0.0);
        assert!((ease(Ease::Power4In, 7.0) - 1.0).abs() < 1e-6);
        assert_eq!(ease(Ease::Linear, f32::NAN), 0.0);
    }
}
