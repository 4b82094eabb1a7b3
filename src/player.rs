use rand::rngs::SmallRng;

use crate::common::Coordinate;

/// Interface implemented by the two targeting strategies.
pub trait Player {
    /// Choose the next square to fire at.
    ///
    /// The coordinate is not validated here; the turn loop reports firing
    /// errors and asks again.
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coordinate>;
}
