use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};

/// Upper bound on `--count`, to keep a typo from filling the disk.
pub const MAX_COUNT: usize = 1 << 30;

/// Command line arguments for the `xorand` binary.
///
/// Every global option can also be set through the environment (or a `.env`
/// file). Output goes to stdout; logs go to stderr.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "xorand",
    version,
    about = "Generate seedable pseudo-random numbers and bytes"
)]
pub struct CliArgs {
    /// Engine used to generate the stream.
    ///
    /// Environment variable: `XORAND_ENGINE`
    #[arg(long, global = true, env = "XORAND_ENGINE", value_enum, default_value_t = EngineKind::Xoshiro256)]
    pub engine: EngineKind,

    /// Comma separated seed words, decimal or `0x` hex.
    ///
    /// The number of words must match the engine: 2 for `xorshift128`, 4 for
    /// `xoshiro256`, 1 for `mt64`. Without a seed the generator is seeded from
    /// operating system entropy and the output is not reproducible.
    ///
    /// Environment variable: `XORAND_SEED`
    #[arg(long, global = true, env = "XORAND_SEED")]
    pub seed: Option<String>,

    /// Number of values to print (number of bytes for `bytes`).
    ///
    /// Environment variable: `XORAND_COUNT`
    #[arg(short = 'n', long, global = true, env = "XORAND_COUNT", default_value_t = 1)]
    pub count: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Random bytes.
    Bytes {
        /// Output encoding.
        #[arg(long, value_enum, default_value_t = ByteFormat::Hex)]
        format: ByteFormat,
    },

    /// Integers in `[min, max]`, one per line.
    Int {
        #[arg(long, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, allow_hyphen_values = true)]
        max: i64,
    },

    /// Floats in `[min, max)`, one per line.
    Float {
        #[arg(long, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, allow_hyphen_values = true)]
        max: f64,
    },

    /// Doubles in `[0, 1)`, one per line.
    Double,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// xorshift128+, 128-bit state.
    #[value(name = "xorshift128")]
    Xorshift128,
    /// xoshiro256**, 256-bit state.
    #[value(name = "xoshiro256")]
    Xoshiro256,
    /// 64-bit Mersenne Twister.
    #[value(name = "mt64")]
    Mt64,
}

impl EngineKind {
    /// Number of `u64` words in this engine's seed.
    pub const fn seed_words(self) -> usize {
        match self {
            Self::Xorshift128 => 2,
            Self::Xoshiro256 => 4,
            Self::Mt64 => 1,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteFormat {
    /// Lowercase hex on a single line.
    Hex,
    /// Unencoded bytes.
    Raw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub engine: EngineKind,
    pub seed: Option<Vec<u64>>,
    pub count: usize,
    pub command: Command,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("XORAND_COUNT must be greater than 0");
        }

        if args.count > MAX_COUNT {
            bail!(
                "XORAND_COUNT ({}) exceeds the maximum of {}",
                args.count,
                MAX_COUNT
            );
        }

        match args.command {
            Command::Int { min, max } if max < min => {
                bail!("--max ({max}) must be greater than or equal to --min ({min})")
            }
            Command::Float { min, max } if !min.is_finite() || !max.is_finite() => {
                bail!("--min and --max must be finite")
            }
            Command::Float { min, max } if max < min => {
                bail!("--max ({max}) must be greater than or equal to --min ({min})")
            }
            _ => {}
        }

        let seed = args
            .seed
            .as_deref()
            .map(|raw| parse_seed(raw, args.engine))
            .transpose()?;

        Ok(Self {
            engine: args.engine,
            seed,
            count: args.count,
            command: args.command,
        })
    }
}

fn parse_seed(raw: &str, engine: EngineKind) -> anyhow::Result<Vec<u64>> {
    let words = raw
        .split(',')
        .map(|word| parse_word(word.trim()))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if words.len() != engine.seed_words() {
        bail!(
            "XORAND_SEED has {} words but {:?} takes {}",
            words.len(),
            engine,
            engine.seed_words()
        );
    }

    Ok(words)
}

fn parse_word(word: &str) -> anyhow::Result<u64> {
    let parsed = match word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => word.replace('_', "").parse(),
    };
    parsed.with_context(|| format!("invalid seed word {word:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> anyhow::Result<Config> {
        let args = CliArgs::try_parse_from(core::iter::once("xorand").chain(args.iter().copied()))?;
        Config::try_from(args)
    }

    #[test]
    fn defaults() {
        let config = config(&["double"]).unwrap();
        assert_eq!(config.engine, EngineKind::Xoshiro256);
        assert_eq!(config.seed, None);
        assert_eq!(config.count, 1);
        assert_eq!(config.command, Command::Double);
    }

    #[test]
    fn parses_mixed_seed_words() {
        let config = config(&[
            "--engine",
            "xorshift128",
            "--seed",
            "0x1111_1111_1111_1111, 42",
            "bytes",
        ])
        .unwrap();
        assert_eq!(config.seed, Some(vec![0x1111_1111_1111_1111, 42]));
        assert_eq!(
            config.command,
            Command::Bytes {
                format: ByteFormat::Hex
            }
        );
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let config = config(&["int", "--min", "-5", "--max", "5", "-n", "3", "--engine", "mt64"])
            .unwrap();
        assert_eq!(config.engine, EngineKind::Mt64);
        assert_eq!(config.count, 3);
        assert_eq!(config.command, Command::Int { min: -5, max: 5 });
    }

    #[test]
    fn seed_length_must_match_the_engine() {
        let err = config(&["--seed", "1,2", "double"]).unwrap_err();
        assert!(err.to_string().contains("takes 4"), "{err}");

        assert!(config(&["--engine", "mt64", "--seed", "5489", "double"]).is_ok());
    }

    #[test]
    fn rejects_bad_seed_words() {
        let err = config(&["--engine", "mt64", "--seed", "0xZZ", "double"]).unwrap_err();
        assert!(err.to_string().contains("invalid seed word"), "{err}");
    }

    #[test]
    fn rejects_invalid_ranges_and_counts() {
        assert!(config(&["int", "--min", "2", "--max", "1"]).is_err());
        assert!(config(&["float", "--min", "0", "--max", "inf"]).is_err());
        assert!(config(&["float", "--min", "1", "--max", "0.5"]).is_err());
        assert!(config(&["-n", "0", "double"]).is_err());
        assert!(config(&["int", "--min", "3", "--max", "3"]).is_ok());
    }
}
