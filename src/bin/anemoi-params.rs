use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anemoi_params::presets::{FieldPreset, BN254_SCALAR};
use anemoi_params::{
    generate_input_record, parse_biguint, InputRecord, InverseExponentModulus, ParamsConfig,
};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::OsRng;

/// Generates and checks Anemoi public parameters and round constants.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a parameter set and a random state and write them as JSON
    Generate {
        #[command(flatten)]
        field: FieldArgs,

        /// Seed for the state sampler; the OS generator is used when absent
        #[arg(long)]
        seed: Option<u64>,

        /// Output file, `-` for stdout
        #[arg(long, default_value = "input.json")]
        out: PathBuf,
    },
    /// Check a JSON record against the parameters it should have been built from
    Verify {
        /// Record to check
        input: PathBuf,

        #[command(flatten)]
        field: FieldArgs,
    },
}

#[derive(Args, Debug)]
struct FieldArgs {
    /// Named prime field
    #[arg(long, conflicts_with = "modulus", default_value = BN254_SCALAR.name)]
    preset: String,

    /// Prime field modulus, decimal or 0x-prefixed hex
    #[arg(long)]
    modulus: Option<String>,

    /// Known prime factors of q - 1, comma separated
    #[arg(long, value_delimiter = ',', requires = "modulus")]
    factors: Vec<String>,

    /// S-box exponent (3, 5, 7 or 11)
    #[arg(long, default_value_t = 5)]
    alpha: u32,

    /// Number of state columns (1, 2, 3, 4, 6 or 8)
    #[arg(long, default_value_t = 1)]
    inputs: usize,

    /// Modulus used to invert the S-box exponent
    #[arg(long, value_enum, default_value_t = InverseExponent::Field)]
    inverse_exponent: InverseExponent,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InverseExponent {
    /// alpha^-1 mod q
    Field,
    /// alpha^-1 mod (q - 1)
    GroupOrder,
}

impl From<InverseExponent> for InverseExponentModulus {
    fn from(value: InverseExponent) -> Self {
        match value {
            InverseExponent::Field => InverseExponentModulus::FieldModulus,
            InverseExponent::GroupOrder => InverseExponentModulus::GroupOrder,
        }
    }
}

impl FieldArgs {
    fn config(&self) -> Result<ParamsConfig> {
        let config = match &self.modulus {
            Some(modulus) => {
                let factors = self
                    .factors
                    .iter()
                    .map(|f| parse_biguint(f))
                    .collect::<Result<Vec<_>, _>>()
                    .context("parsing --factors")?;
                ParamsConfig::new(
                    parse_biguint(modulus).context("parsing --modulus")?,
                    self.alpha,
                    self.inputs,
                )
                .with_q_minus_one_factors(factors)
            }
            None => {
                let Some(preset) = FieldPreset::by_name(&self.preset) else {
                    bail!("unknown preset {:?}", self.preset);
                };
                ParamsConfig::from_preset(preset, self.alpha, self.inputs)?
            }
        };

        Ok(config.with_inverse_exponent(self.inverse_exponent.into()))
    }
}

fn generate(field: &FieldArgs, seed: Option<u64>, out: &Path) -> Result<()> {
    let config = field.config()?;
    let record = match seed {
        Some(seed) => generate_input_record(&config, &mut StdRng::seed_from_u64(seed)),
        None => generate_input_record(&config, &mut OsRng),
    }
    .context("generating parameters")?;

    let json = record.to_json_pretty()?;
    if out.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
    } else {
        fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
        info!("parameters written to {}", out.display());
    }

    Ok(())
}

fn verify(input: &Path, field: &FieldArgs) -> Result<()> {
    let config = field.config()?;
    let json = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let record = InputRecord::from_json(&json).context("parsing record")?;

    record
        .verify(&config)
        .with_context(|| format!("verifying {}", input.display()))?;
    println!("{}: ok", input.display());

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Generate { field, seed, out } => generate(field, *seed, out),
        Command::Verify { input, field } => verify(input, field),
    }
}
