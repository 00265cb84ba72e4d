/// A trait for random sources that yield uniform draws from the unit
/// interval.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// Implementations return an `f64` in `[0.0, 1.0)`; every integer draw in
/// this crate is derived from it by scaling and flooring.
///
/// # Example
/// ```
/// use sortilege::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn next_unit(&mut self) -> f64 {
///         0.25
///     }
/// }
///
/// let mut rng = FixedRand;
/// assert_eq!(rng.next_unit(), 0.25);
/// ```
pub trait RandSource {
    /// Returns a uniformly distributed `f64` in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;
}
