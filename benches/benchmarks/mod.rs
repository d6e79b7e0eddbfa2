use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

pub mod decoder;
pub mod encoder;
pub mod table_building;

/// Size of the message used to bench.
const MESSAGE_LENGTH: usize = 500_000;

/// Maximum value that the zipfian distribution can output.
const MAXIMUM_SYMBOL: u64 = 1 << 16;

/// The radix used by the benches.
const RADIX: usize = 4;

pub fn get_message() -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0);
    let distribution = Zipf::new(MAXIMUM_SYMBOL, 1.0).unwrap();
    let mut message = Vec::with_capacity(MESSAGE_LENGTH);

    for _ in 0..MESSAGE_LENGTH {
        message.push(distribution.sample(&mut rng) as u64);
    }
    message
}
