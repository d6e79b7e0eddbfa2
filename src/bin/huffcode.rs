use anyhow::{ensure, Result};
use clap::Parser;
use itertools::Itertools;
use log::info;
use nary_huffman::utils::{entropy, expected_length, kraft_sum};
use nary_huffman::{PrefixCodec, DEFAULT_RADIX};

#[derive(Parser, Debug)]
#[command(about = "Builds the radix-n Huffman code of a message and round-trips it", long_about = None)]
struct Args {
    /// The message to encode.
    message: String,

    /// The number of digits the codewords are written with.
    #[clap(short, long, default_value_t = DEFAULT_RADIX)]
    radix: usize,

    /// Separator printed between the digits of the encoded message.
    #[clap(short, long, default_value = "")]
    separator: String,
}

pub fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let args = Args::parse();
    let message = args.message.chars().collect::<Vec<char>>();

    let codec = PrefixCodec::from_message(args.radix, &message)?;
    let encoded = codec.encode(&message)?;
    let decoded = codec.decode(&encoded)?;

    ensure!(decoded == message, "Decoded message differs from the original one");

    println!("{}", codec.decoder());
    println!("{}", encoded.iter().join(&args.separator));
    println!("{}", decoded.iter().collect::<String>());

    let lengths = codec.table().codeword_lengths();
    let freqs = codec
        .table()
        .iter()
        .map(|(symbol, _)| message.iter().filter(|c| *c == symbol).count())
        .collect::<Vec<usize>>();

    info!(
        "{} symbols -> {} digits | entropy {:.3} | expected length {:.3} | kraft sum {:.3} | complete: {}",
        message.len(),
        encoded.len(),
        entropy(&freqs, args.radix),
        expected_length(&lengths, &freqs),
        kraft_sum(&lengths, args.radix),
        codec.decoder().is_code_complete(),
    );

    Ok(())
}
