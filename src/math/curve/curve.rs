/// A real function of one real variable.
///
/// Implementations may return NaN or an infinity outside their domain; callers
/// treat such values as evaluation failures and never panic on them.
pub trait Curve {
    fn value(&self, x: f64) -> f64;
}

/// Adapts a plain closure to [`Curve`].
#[cfg(test)]
pub(crate) struct FnCurve<F> {
    function: F
}

#[cfg(test)]
impl<F> FnCurve<F> where
    F: Fn(f64) -> f64 {
    pub(crate) fn new(function: F) -> FnCurve<F> {
        FnCurve { function }
    }
}

#[cfg(test)]
impl<F> Curve for FnCurve<F> where
    F: Fn(f64) -> f64 {
    fn value(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}
