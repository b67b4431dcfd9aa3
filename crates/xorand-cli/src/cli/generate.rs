use super::config::{ByteFormat, Command, Config, EngineKind};
use std::io::Write;
use xorand::{Engine, Mt19937_64, Random, Xorshift128Plus, Xoshiro256StarStar};

/// Writes the output requested by `config` to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    match config.engine {
        EngineKind::Xorshift128 => emit(build::<Xorshift128Plus>(config), config, out),
        EngineKind::Xoshiro256 => emit(build::<Xoshiro256StarStar>(config), config, out),
        EngineKind::Mt64 => emit(build::<Mt19937_64>(config), config, out),
    }
}

fn build<E: Engine>(config: &Config) -> Random<E> {
    let rng = match &config.seed {
        Some(words) => {
            let mut seed = E::Seed::default();
            for (slot, word) in seed.as_mut().iter_mut().zip(words) {
                *slot = *word;
            }
            Random::from_seed(seed)
        }
        None => Random::new(),
    };

    tracing::debug!(engine = ?config.engine, status = %rng.seed_status(), "generator ready");
    if rng.seed_status().is_degraded() {
        tracing::warn!("output is seeded from the clock only");
    }

    rng
}

fn emit<E: Engine, W: Write>(mut rng: Random<E>, config: &Config, out: &mut W) -> anyhow::Result<()> {
    match config.command {
        Command::Bytes { format } => {
            let bytes = rng.generate_bytes(config.count);
            match format {
                ByteFormat::Hex => {
                    for b in &bytes {
                        write!(out, "{b:02x}")?;
                    }
                    writeln!(out)?;
                }
                ByteFormat::Raw => out.write_all(&bytes)?,
            }
        }
        Command::Int { min, max } => {
            for _ in 0..config.count {
                writeln!(out, "{}", rng.try_next(min, max)?)?;
            }
        }
        Command::Float { min, max } => {
            for _ in 0..config.count {
                writeln!(out, "{}", rng.try_next(min, max)?)?;
            }
        }
        Command::Double => {
            for _ in 0..config.count {
                writeln!(out, "{}", rng.next_double())?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
