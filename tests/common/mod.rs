/*
 * Utility functions and consts used by the tests.
 *
 */

use nary_huffman::Decoder;
use rand::prelude::{Distribution, SmallRng};
use rand::SeedableRng;
use rand_distr::Zipf;

/// Size of the random messages used to test.
#[allow(dead_code)]
pub const MESSAGE_LENGTH: usize = 10_000;

/// Maximum value that the zipfian distribution can output.
#[allow(dead_code)]
const MAXIMUM_SYMBOL: u64 = 1 << 10;

#[allow(dead_code)]
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Creates a decoder over the given alphabet of characters, registering the given codes in order.
#[allow(dead_code)]
pub fn char_decoder(alphabet: &str, codes: &[(char, &str)]) -> Decoder<char, char> {
    let mut decoder = Decoder::new(chars(alphabet)).unwrap();
    for (symbol, codeword) in codes {
        decoder.add_code(*symbol, &chars(codeword)).unwrap();
    }
    decoder
}

/// Creates a message of [`MESSAGE_LENGTH`] symbols sampled from a Zipfian distribution that
/// can output values up to [`MAXIMUM_SYMBOL`].
#[allow(dead_code)]
pub fn get_zipfian_message(seed: u64, exponent: f64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let distribution = Zipf::new(MAXIMUM_SYMBOL, exponent).unwrap();
    let mut message = Vec::with_capacity(MESSAGE_LENGTH);

    for _ in 0..MESSAGE_LENGTH {
        message.push(distribution.sample(&mut rng) as u64);
    }
    message
}
