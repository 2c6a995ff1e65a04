use crate::{OhmError, OhmResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    if a == b {
        // covers matching infinities
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> OhmResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(OhmError::NonFinite { what, value: v })
    }
}

/// Accept a resistance in ohms: finite and `>= 0`. Zero is an ideal short.
pub fn ensure_resistance(ohms: Real) -> OhmResult<Real> {
    let ohms = ensure_finite(ohms, "resistance")?;
    if ohms < 0.0 {
        return Err(OhmError::Negative {
            what: "resistance",
            value: ohms,
        });
    }
    Ok(ohms)
}

/// Series combination: plain sum.
pub fn series<I>(resistances: I) -> Real
where
    I: IntoIterator<Item = Real>,
{
    resistances.into_iter().sum()
}

/// Series combination that rejects an overflowing sum.
///
/// Every member may be a valid finite resistance while their sum is not
/// representable.
pub fn checked_series<I>(resistances: I) -> OhmResult<Real>
where
    I: IntoIterator<Item = Real>,
{
    ensure_finite(series(resistances), "series resistance")
}

/// Parallel (harmonic) combination `1 / Σ 1/r_i`.
///
/// Any zero member shorts the whole group, so the result is zero without
/// taking a reciprocal. An empty group conducts nothing and yields infinity.
pub fn parallel<I>(resistances: I) -> Real
where
    I: IntoIterator<Item = Real>,
{
    let mut conductance = 0.0;
    for r in resistances {
        if r == 0.0 {
            return 0.0;
        }
        conductance += r.recip();
    }
    conductance.recip()
}
