//! Standard normal draw capability used by curve evolution.

/// Source of independent standard normal draws.
///
/// Curve evolution takes the source as an explicit argument, so callers
/// control seeding and every path can own its own instance.
///
/// # Examples
///
/// ```rust
/// use lmm_simulation::rng::{NormalSource, ScriptedNormals};
///
/// let mut source = ScriptedNormals::new(vec![0.5, -1.0]);
/// assert_eq!(source.next_pair(), (0.5, -1.0));
/// ```
pub trait NormalSource {
    /// Draw one standard normal variate.
    fn next_normal(&mut self) -> f64;

    /// Draw two independent standard normal variates, in order.
    #[inline]
    fn next_pair(&mut self) -> (f64, f64) {
        let z0 = self.next_normal();
        let z1 = self.next_normal();
        (z0, z1)
    }
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        (**self).next_normal()
    }
}

/// Replays a fixed sequence of draws.
///
/// Lets callers supply their own Brownian increments, e.g. to keep several
/// evolution steps on one correlated path, or to pin draws in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedNormals {
    draws: Vec<f64>,
    position: usize,
}

impl ScriptedNormals {
    /// Creates a source replaying `draws` in order.
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, position: 0 }
    }

    /// Number of draws consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Number of draws left.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.position
    }
}

impl NormalSource for ScriptedNormals {
    /// # Panics
    ///
    /// Panics when the script is exhausted.
    fn next_normal(&mut self) -> f64 {
        let Some(&z) = self.draws.get(self.position) else {
            panic!(
                "ScriptedNormals exhausted after {} draws",
                self.draws.len()
            );
        };
        self.position += 1;
        z
    }
}
