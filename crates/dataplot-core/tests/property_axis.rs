// File: crates/dataplot-core/tests/property_axis.rs
// Purpose: Property checks for scale conversion and tick generation across random ranges.

use dataplot_core::{Axis, HeuristicTextMeasure, Orientation};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn sized_axis(orientation: Orientation, min: f64, span: f64, size: f64) -> Axis {
    let mut axis = Axis::new(orientation);
    axis.set_limit(min, min + span).expect("valid limit");
    axis.calculate_label_size(&HeuristicTextMeasure).expect("measure");
    axis.set_size(size).expect("size");
    axis
}

proptest! {
    #[test]
    fn endpoints_map_to_pixel_extremes(
        orientation in orientation(),
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        size in 0.0f64..4096.0,
    ) {
        let axis = sized_axis(orientation, min, span, size);
        let (lo, hi) = axis.limit();
        let (at_min, at_max) = (axis.convert_to_scale(lo), axis.convert_to_scale(hi));
        match orientation {
            Orientation::Horizontal => {
                prop_assert_eq!(at_min, 0.0);
                prop_assert_eq!(at_max, axis.size());
            }
            Orientation::Vertical => {
                prop_assert_eq!(at_min, axis.size());
                prop_assert_eq!(at_max, 0.0);
            }
        }
    }

    #[test]
    fn conversion_is_affine(
        orientation in orientation(),
        min in -1_000.0f64..1_000.0,
        span in 0.01f64..1_000.0,
        size in 1.0f64..4096.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let axis = sized_axis(orientation, min, span, size);
        let (va, vb) = (min + a * span, min + b * span);
        let mid = axis.convert_to_scale((va + vb) / 2.0);
        let avg = (axis.convert_to_scale(va) + axis.convert_to_scale(vb)) / 2.0;
        prop_assert!((mid - avg).abs() <= 1e-6 * size.max(1.0));
    }

    #[test]
    fn spacing_covers_the_spread(
        orientation in orientation(),
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        size in 0.0f64..8192.0,
    ) {
        let axis = sized_axis(orientation, min, span, size);
        prop_assert!(axis.tick_count() >= 2);
        let covered = axis.tick_value_spacing() * (axis.tick_count() - 1) as f64;
        prop_assert!((covered - axis.spread()).abs() <= 1e-9 * axis.spread().abs().max(1.0));
    }

    #[test]
    fn ticks_sit_on_converted_values(
        orientation in orientation(),
        min in -10_000.0f64..10_000.0,
        span in 0.01f64..10_000.0,
        size in 0.0f64..2048.0,
    ) {
        let mut axis = sized_axis(orientation, min, span, size);
        axis.prerender_ticks(&HeuristicTextMeasure).expect("ticks");
        prop_assert_eq!(axis.ticks().len(), axis.tick_count());
        for (i, tick) in axis.ticks().iter().enumerate() {
            let value = min + i as f64 * axis.tick_value_spacing();
            prop_assert_eq!(tick.position, axis.convert_to_scale(value));
            prop_assert_eq!(&tick.label, &format!("{value:.1}"));
        }
    }

    #[test]
    fn layout_pass_is_idempotent(
        orientation in orientation(),
        min in -10_000.0f64..10_000.0,
        span in 0.01f64..10_000.0,
        size in 0.0f64..2048.0,
    ) {
        let mut axis = sized_axis(orientation, min, span, size);
        axis.prerender_ticks(&HeuristicTextMeasure).expect("ticks");
        let first = axis.ticks().to_vec();

        axis.calculate_label_size(&HeuristicTextMeasure).expect("measure");
        axis.set_size(size).expect("size");
        axis.prerender_ticks(&HeuristicTextMeasure).expect("ticks");
        prop_assert_eq!(first, axis.ticks().to_vec());
    }

    #[test]
    fn zero_spread_never_yields_nan_spacing(value in -1_000_000.0f64..1_000_000.0) {
        let mut axis = Axis::horizontal();
        prop_assert!(axis.set_limit(value, value).is_err());
        axis.set_size(500.0).expect("size");
        prop_assert!(axis.tick_value_spacing().is_finite());
    }
}
