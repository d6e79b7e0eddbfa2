use std::ops::Neg;

/// Returns the entropy of the distribution `distr`, measured in digits of the given `radix`:
/// ```text
/// entropy(P) = - ∑ p(x) * log_radix(p(x))
/// ```
///
/// With a radix smaller than two the entropy is measured in bits.
pub fn entropy(distr: &[usize], radix: usize) -> f64 {
    let total_freq = distr.iter().sum::<usize>() as f64;
    let mut entropy = 0.0;

    for freq in distr {
        if *freq == 0 {
            continue;
        }
        let pr = *freq as f64 / total_freq;
        entropy += pr * f64::log2(pr);
    }

    match radix {
        0 | 1 => entropy.neg(),
        _ => entropy.neg() / (radix as f64).log2(),
    }
}

/// Returns the mean codeword length, each length weighted by the frequency of its symbol.
///
/// `lengths` and `freqs` are matched by index.
pub fn expected_length(lengths: &[usize], freqs: &[usize]) -> f64 {
    assert_eq!(lengths.len(), freqs.len(), "Lengths and frequencies must have same length!");

    let total_freq = freqs.iter().sum::<usize>();
    if total_freq == 0 {
        return 0.0;
    }

    let weighted = lengths
        .iter()
        .zip(freqs)
        .map(|(length, freq)| length * freq)
        .sum::<usize>();

    weighted as f64 / total_freq as f64
}

/// Returns the Kraft sum of a code with the given codeword lengths:
/// ```text
/// kraft(L) = ∑ radix^(-l)
/// ```
/// A prefix-free code always has a sum of at most 1, and exactly 1 when its tree is complete.
pub fn kraft_sum(lengths: &[usize], radix: usize) -> f64 {
    lengths
        .iter()
        .map(|length| (radix as f64).powi(-(*length as i32)))
        .sum()
}
