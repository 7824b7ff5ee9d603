//! The simulation's single seedable random source.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Random number generator owned by the ecosystem and lent to entity operations.
pub type SimRng = Xoshiro256StarStar;

/// Creates the simulation generator.
///
/// With `Some(seed)` the whole run is reproducible; with `None` the generator is
/// seeded from the thread-local entropy source.
pub fn seeded(seed: Option<u64>) -> SimRng {
    match seed {
        Some(seed) => SimRng::seed_from_u64(seed),
        None => SimRng::from_rng(&mut rand::rng()),
    }
}
