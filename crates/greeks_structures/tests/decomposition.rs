//! Structure-level invariants over randomized market parameters.
//!
//! 1. **Decomposition**: every structure attribute equals the weighted
//!    sum of its legs' attributes, exactly
//! 2. **Direction**: short is the exact negation of long
//! 3. **Static no-arbitrage shapes**: vertical spreads stay inside
//!    their payoff bounds, butterflies stay non-negative

use greeks_core::traits::OptionAttributes;
use greeks_core::types::{Attribute, Direction};
use greeks_models::{EquityCall, EquityParams, EquityPut};
use greeks_structures::{Butterfly, IronCondor, Straddle, Strangle};
use proptest::prelude::*;

fn market_params() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        10.0..200.0_f64, // spot
        0.05..3.0_f64,   // expiry
        -0.05..0.10_f64, // rate
        0.05..0.80_f64,  // volatility
        0.0..0.10_f64,   // dividend yield
    )
}

fn call(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> EquityCall<f64> {
    EquityCall::new(EquityParams::new(s, k, t, r, sigma, q).unwrap())
}

fn put(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> EquityPut<f64> {
    EquityPut::new(EquityParams::new(s, k, t, r, sigma, q).unwrap())
}

proptest! {
    #[test]
    fn prop_straddle_decomposes((s, t, r, sigma, q) in market_params(), k in 10.0..200.0_f64) {
        let straddle = Straddle::new(s, k, t, r, sigma, q, Direction::Long).unwrap();
        for attr in Attribute::ALL {
            let expected = put(s, k, t, r, sigma, q).attribute(attr)
                + call(s, k, t, r, sigma, q).attribute(attr);
            prop_assert_eq!(straddle.attribute(attr), expected);
        }
    }

    #[test]
    fn prop_strangle_short_negates_long((s, t, r, sigma, q) in market_params()) {
        let long = Strangle::new(s, 50.0, 60.0, t, r, sigma, q, Direction::Long).unwrap();
        let short = Strangle::new(s, 50.0, 60.0, t, r, sigma, q, Direction::Short).unwrap();
        for attr in Attribute::ALL {
            prop_assert_eq!(short.attribute(attr), -long.attribute(attr));
        }
    }

    #[test]
    fn prop_butterfly_price_non_negative((s, t, r, sigma, q) in market_params()) {
        // Long butterfly value is a second difference of a convex curve
        let fly = Butterfly::new(s, 50.0, 55.0, 60.0, t, r, sigma, q, Direction::Long).unwrap();
        // Slack covers the erf-polynomial error in the leg prices
        prop_assert!(fly.price() > -1e-3);
    }

    #[test]
    fn prop_bull_spread_within_bounds((s, t, r, sigma, q) in market_params()) {
        let spread =
            greeks_structures::BullSpread::new(s, 50.0, 60.0, t, r, sigma, q).unwrap();
        let cap = (-r * t).exp() * 10.0;
        prop_assert!(spread.price() > -1e-3);
        prop_assert!(spread.price() < cap + 1e-3);
    }

    #[test]
    fn prop_iron_condor_decomposes((s, t, r, sigma, q) in market_params()) {
        let condor =
            IronCondor::new(s, 40.0, 45.0, 60.0, 65.0, t, r, sigma, q, Direction::Long).unwrap();
        for attr in [Attribute::Price, Attribute::Delta, Attribute::Vega, Attribute::Theta] {
            let expected = -put(s, 40.0, t, r, sigma, q).attribute(attr)
                + put(s, 45.0, t, r, sigma, q).attribute(attr)
                + call(s, 60.0, t, r, sigma, q).attribute(attr)
                - call(s, 65.0, t, r, sigma, q).attribute(attr);
            prop_assert_eq!(condor.attribute(attr), expected);
        }
    }
}

/// An iron butterfly built at the condor's collapsed body strikes must
/// match the condor formula with K2 = K3.
#[test]
fn test_iron_butterfly_is_degenerate_condor() {
    let (s, t, r, sigma, q) = (55.0_f64, 1.0, 0.0025, 0.15, 0.0);
    let fly = greeks_structures::IronButterfly::new(
        s,
        50.0,
        55.0,
        60.0,
        t,
        r,
        sigma,
        q,
        Direction::Long,
    )
    .unwrap();

    let expected = -put(s, 50.0, t, r, sigma, q).price() + put(s, 55.0, t, r, sigma, q).price()
        + call(s, 55.0, t, r, sigma, q).price()
        - call(s, 60.0, t, r, sigma, q).price();
    assert_eq!(fly.price(), expected);
}
