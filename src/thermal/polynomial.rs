// ABOUTME: Sixth-order UTCI offset polynomial over (air temp, wind, radiant excess, humidity)
// ABOUTME: Direct port of the 210-coefficient operational approximation (version a 0.002)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! The UTCI regression polynomial.
//!
//! The Universal Thermal Climate Index is defined by a full human thermo-
//! physiological model; the operational form everyone actually ships is a
//! sixth-order polynomial fit published alongside it. This module is that
//! fit, coefficient for coefficient, in its canonical term ordering: powers
//! of air temperature first, then wind blocks, then radiant-excess blocks,
//! then vapor-pressure blocks.
//!
//! Callers are responsible for clamping inputs to the fitted domain before
//! evaluating; outside it the polynomial diverges fast and means nothing.

/// UTCI minus air temperature, in °C.
///
/// * `ta` - air temperature, °C
/// * `va` - wind speed at 10 m, m/s
/// * `d_tmrt` - mean radiant temperature minus air temperature, K
/// * `pa` - water vapor pressure, kPa
#[allow(clippy::unreadable_literal)]
#[rustfmt::skip]
pub fn utci_offset_c(ta: f64, va: f64, d_tmrt: f64, pa: f64) -> f64 {
    let ta2 = ta * ta;
    let ta3 = ta2 * ta;
    let ta4 = ta3 * ta;
    let ta5 = ta4 * ta;
    let ta6 = ta5 * ta;
    let va2 = va * va;
    let va3 = va2 * va;
    let va4 = va3 * va;
    let va5 = va4 * va;
    let va6 = va5 * va;
    let d = d_tmrt;
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;
    let d6 = d5 * d;
    let pa2 = pa * pa;
    let pa3 = pa2 * pa;
    let pa4 = pa3 * pa;
    let pa5 = pa4 * pa;
    let pa6 = pa5 * pa;

    let mut offset = 0.0;

    // Dry-air block: temperature and wind only.
    offset += 6.07562052e-1
        - 2.27712343e-2 * ta
        + 8.06470249e-4 * ta2
        - 1.54271372e-6 * ta3
        - 3.24651735e-6 * ta4
        + 7.32602852e-8 * ta5
        + 1.35959073e-9 * ta6
        - 2.25836520e0 * va
        + 8.80326035e-2 * ta * va
        + 2.16844454e-3 * ta2 * va
        - 1.53347087e-5 * ta3 * va
        - 5.72983704e-7 * ta4 * va
        - 2.55090145e-9 * ta5 * va
        - 7.51269505e-1 * va2
        - 4.08350271e-3 * ta * va2
        - 5.21670675e-5 * ta2 * va2
        + 1.94544667e-6 * ta3 * va2
        + 1.14099531e-8 * ta4 * va2
        + 1.58137256e-1 * va3
        - 6.57263143e-5 * ta * va3
        + 2.22697524e-7 * ta2 * va3
        - 4.16117031e-8 * ta3 * va3
        - 1.27762753e-2 * va4
        + 9.66891875e-6 * ta * va4
        + 2.52785852e-9 * ta2 * va4
        + 4.56306672e-4 * va5
        - 1.74202546e-7 * ta * va5
        - 5.91491269e-6 * va6;

    // Radiant excess, first order.
    offset += 3.98374029e-1 * d
        + 1.83945314e-4 * ta * d
        - 1.73754510e-4 * ta2 * d
        - 7.60781159e-7 * ta3 * d
        + 3.77830287e-8 * ta4 * d
        + 5.43079673e-10 * ta5 * d
        - 2.00518269e-2 * va * d
        + 8.92859837e-4 * ta * va * d
        + 3.45433048e-6 * ta2 * va * d
        - 3.77925774e-7 * ta3 * va * d
        - 1.69699377e-9 * ta4 * va * d
        + 1.69992415e-4 * va2 * d
        - 4.99204314e-5 * ta * va2 * d
        + 2.47417178e-7 * ta2 * va2 * d
        + 1.07596466e-8 * ta3 * va2 * d
        + 8.49242932e-5 * va3 * d
        + 1.35191328e-6 * ta * va3 * d
        - 6.21531254e-9 * ta2 * va3 * d
        - 4.99410301e-6 * va4 * d
        - 1.89489258e-8 * ta * va4 * d
        + 8.15300114e-8 * va5 * d;

    // Radiant excess, second order.
    offset += 7.55043090e-4 * d2
        - 5.65095215e-5 * ta * d2
        - 4.52166564e-7 * ta2 * d2
        + 2.46688878e-8 * ta3 * d2
        + 2.42674348e-10 * ta4 * d2
        + 1.54547250e-4 * va * d2
        + 5.24110970e-6 * ta * va * d2
        - 8.75874982e-8 * ta2 * va * d2
        - 1.50743064e-9 * ta3 * va * d2
        - 1.56236307e-5 * va2 * d2
        - 1.33895614e-7 * ta * va2 * d2
        + 2.49709824e-9 * ta2 * va2 * d2
        + 6.51711721e-7 * va3 * d2
        + 1.94960053e-9 * ta * va3 * d2
        - 1.00361113e-8 * va4 * d2;

    // Radiant excess, third through sixth order.
    offset += -1.21206673e-5 * d3
        - 2.18203660e-7 * ta * d3
        + 7.51269482e-9 * ta2 * d3
        + 9.79063848e-11 * ta3 * d3
        + 1.25006734e-6 * va * d3
        - 1.81584736e-9 * ta * va * d3
        - 3.52197671e-10 * ta2 * va * d3
        - 3.36514630e-8 * va2 * d3
        + 1.35908359e-10 * ta * va2 * d3
        + 4.17032620e-10 * va3 * d3
        - 1.30369025e-9 * d4
        + 4.13908461e-10 * ta * d4
        + 9.22652254e-12 * ta2 * d4
        - 5.08220384e-9 * va * d4
        - 2.24730961e-11 * ta * va * d4
        + 1.17139133e-10 * va2 * d4
        + 6.62154879e-10 * d5
        + 4.03863260e-13 * ta * d5
        + 1.95087203e-12 * va * d5
        - 4.73602469e-12 * d6;

    // Humidity, first order.
    offset += 5.12733497e0 * pa
        - 3.12788561e-1 * ta * pa
        - 1.96701861e-2 * ta2 * pa
        + 9.99690870e-4 * ta3 * pa
        + 9.51738512e-6 * ta4 * pa
        - 4.66426341e-7 * ta5 * pa
        + 5.48050612e-1 * va * pa
        - 3.30552823e-3 * ta * va * pa
        - 1.64119440e-3 * ta2 * va * pa
        - 5.16670694e-6 * ta3 * va * pa
        + 9.52692432e-7 * ta4 * va * pa
        - 4.29223622e-2 * va2 * pa
        + 5.00845667e-3 * ta * va2 * pa
        + 1.00601257e-6 * ta2 * va2 * pa
        - 1.81748644e-6 * ta3 * va2 * pa
        - 1.25813502e-3 * va3 * pa
        - 1.79330391e-4 * ta * va3 * pa
        + 2.34994441e-6 * ta2 * va3 * pa
        + 1.29735808e-4 * va4 * pa
        + 1.29064870e-6 * ta * va4 * pa
        - 2.28558686e-6 * va5 * pa
        - 3.69476348e-2 * d * pa
        + 1.62325322e-3 * ta * d * pa
        - 3.14279680e-5 * ta2 * d * pa
        + 2.59835559e-6 * ta3 * d * pa
        - 4.77136523e-8 * ta4 * d * pa
        + 8.64203390e-3 * va * d * pa
        - 6.87405181e-4 * ta * va * d * pa
        - 9.13863872e-6 * ta2 * va * d * pa
        + 5.15916806e-7 * ta3 * va * d * pa
        - 3.59217476e-5 * va2 * d * pa
        + 3.28696511e-5 * ta * va2 * d * pa
        - 7.10542454e-7 * ta2 * va2 * d * pa
        - 1.24382300e-5 * va3 * d * pa
        - 7.38584400e-9 * ta * va3 * d * pa
        + 2.20609296e-7 * va4 * d * pa
        - 7.32469180e-4 * d2 * pa
        - 1.87381964e-5 * ta * d2 * pa
        + 4.80925239e-6 * ta2 * d2 * pa
        - 8.75492040e-8 * ta3 * d2 * pa
        + 2.77862930e-5 * va * d2 * pa
        - 5.06004592e-6 * ta * va * d2 * pa
        + 1.14325367e-7 * ta2 * va * d2 * pa
        + 2.53016723e-6 * va2 * d2 * pa
        - 1.72857035e-8 * ta * va2 * d2 * pa
        - 3.95079398e-8 * va3 * d2 * pa
        - 3.59413173e-7 * d3 * pa
        + 7.04388046e-7 * ta * d3 * pa
        - 1.89309167e-8 * ta2 * d3 * pa
        - 4.79768731e-7 * va * d3 * pa
        + 7.96079978e-9 * ta * va * d3 * pa
        + 1.62897058e-9 * va2 * d3 * pa
        + 3.94367674e-8 * d4 * pa
        - 1.18566247e-9 * ta * d4 * pa
        + 3.34678041e-10 * va * d4 * pa
        - 1.15606447e-10 * d5 * pa;

    // Humidity, second order.
    offset += -2.80626406e0 * pa2
        + 5.48712484e-1 * ta * pa2
        - 3.99428410e-3 * ta2 * pa2
        - 9.54009191e-4 * ta3 * pa2
        + 1.93090978e-5 * ta4 * pa2
        - 3.08806365e-1 * va * pa2
        + 1.16952364e-2 * ta * va * pa2
        + 4.95271903e-4 * ta2 * va * pa2
        - 1.90710882e-5 * ta3 * va * pa2
        + 2.10787756e-3 * va2 * pa2
        - 6.98445738e-4 * ta * va2 * pa2
        + 2.30109073e-5 * ta2 * va2 * pa2
        + 4.17856590e-4 * va3 * pa2
        - 1.27043871e-5 * ta * va3 * pa2
        - 3.04620472e-6 * va4 * pa2
        + 5.14507424e-2 * d * pa2
        - 4.32510997e-3 * ta * d * pa2
        + 8.99281156e-5 * ta2 * d * pa2
        - 7.14663943e-7 * ta3 * d * pa2
        - 2.66016305e-4 * va * d * pa2
        + 2.63789586e-4 * ta * va * d * pa2
        - 7.01199003e-6 * ta2 * va * d * pa2
        - 1.06823306e-4 * va2 * d * pa2
        + 3.61341136e-6 * ta * va2 * d * pa2
        + 2.29748967e-7 * va3 * d * pa2
        + 3.04788893e-4 * d2 * pa2
        - 6.42070836e-5 * ta * d2 * pa2
        + 1.16257971e-6 * ta2 * d2 * pa2
        + 7.68023384e-6 * va * d2 * pa2
        - 5.47446896e-7 * ta * va * d2 * pa2
        - 3.59937910e-8 * va2 * d2 * pa2
        - 4.36497725e-6 * d3 * pa2
        + 1.68737969e-7 * ta * d3 * pa2
        + 2.67489271e-8 * va * d3 * pa2
        + 3.23926897e-9 * d4 * pa2;

    // Humidity, third order.
    offset += -3.53874123e-2 * pa3
        - 2.21201190e-1 * ta * pa3
        + 1.55126038e-2 * ta2 * pa3
        - 2.63917279e-4 * ta3 * pa3
        + 4.53433455e-2 * va * pa3
        - 4.32943862e-3 * ta * va * pa3
        + 1.45389826e-4 * ta2 * va * pa3
        + 2.17508610e-4 * va2 * pa3
        - 6.66724702e-5 * ta * va2 * pa3
        + 3.33217140e-5 * va3 * pa3
        - 2.26921615e-3 * d * pa3
        + 3.80261982e-4 * ta * d * pa3
        - 5.45314314e-9 * ta2 * d * pa3
        - 7.96355448e-4 * va * d * pa3
        + 2.53458034e-5 * ta * va * d * pa3
        - 6.31223658e-6 * va2 * d * pa3
        + 3.02122035e-4 * d2 * pa3
        - 4.77403547e-6 * ta * d2 * pa3
        + 1.73825715e-6 * va * d2 * pa3
        - 4.09087898e-7 * d3 * pa3;

    // Humidity, fourth through sixth order.
    offset += 6.14155345e-1 * pa4
        - 6.16755931e-2 * ta * pa4
        + 1.33374846e-3 * ta2 * pa4
        + 3.55375387e-3 * va * pa4
        - 5.13027851e-4 * ta * va * pa4
        + 1.02449757e-4 * va2 * pa4
        - 1.48526421e-3 * d * pa4
        - 4.11469183e-5 * ta * d * pa4
        - 6.80434415e-6 * va * d * pa4
        - 9.77675906e-6 * d2 * pa4
        + 8.82773108e-2 * pa5
        - 3.01859306e-3 * ta * pa5
        + 1.04452989e-3 * va * pa5
        + 2.47090539e-4 * d * pa5
        + 1.48348065e-3 * pa6;

    offset
}
