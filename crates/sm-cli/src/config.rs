use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use sm_matrix::{padded_dimension, Buffer, StrassenMultiplier};

use crate::flags::DebugFlags;

fn flags_help() -> String {
    format!("debug flags:\n{}", DebugFlags::legend())
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Multiply two square integer matrices with Strassen's algorithm",
    long_about = None,
    allow_negative_numbers = true,
    after_help = flags_help()
)]
pub struct Args {
    /// Debug bitmask (see below); 0 prints only the diagonal of the product
    pub debug: u32,

    /// Dimension of both input matrices
    pub dimension: usize,

    /// File of 2*DIMENSION^2 integers, one per line; with RANDOM, the cutoff
    pub input: String,

    /// Block size at or below which the naive multiply is used
    #[arg(short, long)]
    pub cutoff: Option<usize>,

    /// Seed for random matrices (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Where the input matrices come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Random { seed: Option<u64> },
    File(PathBuf),
}

/// Everything one run of the driver needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dimension: usize,
    pub cutoff: usize,
    pub source: InputSource,
    pub flags: DebugFlags,
}

impl RunConfig {
    /// Validate parsed arguments.
    ///
    /// Rejects a zero dimension, and any dimension whose padded buffers would
    /// not be addressable.
    ///
    /// In RANDOM mode the INPUT argument is read as the cutoff, clamped to at
    /// least 1. Otherwise it is the path of the entries file and the cutoff
    /// defaults to [`StrassenMultiplier::DEFAULT_CUTOFF`]. `--cutoff` wins in
    /// both modes.
    pub fn from_args(args: &Args) -> Result<RunConfig> {
        if args.dimension == 0 {
            bail!("dimension must be at least 1");
        }

        let flags = DebugFlags::from_bits(args.debug);
        let (source, input_cutoff) = if flags.contains(DebugFlags::RANDOM) {
            let cutoff: i64 = args
                .input
                .trim()
                .parse()
                .with_context(|| format!("invalid cutoff {:?}", args.input))?;
            (
                InputSource::Random { seed: args.seed },
                usize::try_from(cutoff.max(1)).unwrap_or(usize::MAX),
            )
        } else {
            (
                InputSource::File(PathBuf::from(&args.input)),
                StrassenMultiplier::DEFAULT_CUTOFF,
            )
        };

        let cutoff = args.cutoff.unwrap_or(input_cutoff).max(1);
        Buffer::cell_count(padded_dimension(args.dimension, cutoff))
            .with_context(|| format!("dimension {} is too large", args.dimension))?;

        Ok(RunConfig {
            dimension: args.dimension,
            cutoff,
            source,
            flags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("strassen").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_random_mode_reads_cutoff() {
        let config = RunConfig::from_args(&parse(&["1", "64", "16"])).unwrap();
        assert_eq!(config.cutoff, 16);
        assert_eq!(config.dimension, 64);
        assert_eq!(config.source, InputSource::Random { seed: None });
    }

    #[test]
    fn test_random_mode_clamps_cutoff() {
        let config = RunConfig::from_args(&parse(&["1", "8", "-3"])).unwrap();
        assert_eq!(config.cutoff, 1);
        let config = RunConfig::from_args(&parse(&["1", "8", "0"])).unwrap();
        assert_eq!(config.cutoff, 1);
    }

    #[test]
    fn test_random_mode_bad_cutoff() {
        assert!(RunConfig::from_args(&parse(&["1", "8", "abc"])).is_err());
    }

    #[test]
    fn test_file_mode_defaults() {
        let config = RunConfig::from_args(&parse(&["4", "3", "input.txt"])).unwrap();
        assert_eq!(config.cutoff, 32);
        assert_eq!(config.source, InputSource::File(PathBuf::from("input.txt")));
        assert!(config.flags.contains(DebugFlags::VERIFY));
    }

    #[test]
    fn test_cutoff_option_overrides() {
        let config =
            RunConfig::from_args(&parse(&["0", "3", "input.txt", "--cutoff", "2"])).unwrap();
        assert_eq!(config.cutoff, 2);
        let config =
            RunConfig::from_args(&parse(&["1", "3", "9", "-c", "4", "-s", "11"])).unwrap();
        assert_eq!(config.cutoff, 4);
        assert_eq!(config.source, InputSource::Random { seed: Some(11) });
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(RunConfig::from_args(&parse(&["1", "0", "4"])).is_err());
    }

    #[test]
    fn test_oversized_dimension_rejected() {
        let huge = (1usize << (usize::BITS / 2)).to_string();
        let err = RunConfig::from_args(&parse(&["1", huge.as_str(), "4"])).unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(RunConfig::from_args(&parse(&["0", huge.as_str(), "input.txt"])).is_err());
    }

    #[test]
    fn test_missing_arguments() {
        assert!(Args::try_parse_from(["strassen", "1", "4"]).is_err());
        assert!(Args::try_parse_from(["strassen", "1", "-4", "2"]).is_err());
    }
}
