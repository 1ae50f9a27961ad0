use clap::Parser;

use qmc5883l::config::Config;
use qmc5883l::sensors::mag::{Mode, OutputDataRate, OverSampling, Range};

/// Lecture périodique d'un magnétomètre QMC5883L
#[derive(Debug, Parser, Clone)]
#[command(version, about)]
pub struct Cli {
    /// Numéro du bus I2C (/dev/i2c-N), 0 = défaut
    #[arg(long, env = "QMC5883L_BUS", default_value_t = 1)]
    pub bus: u8,

    /// Adresse 7 bits du capteur (décimal ou 0x..), 0 = défaut
    #[arg(long, env = "QMC5883L_ADDRESS", default_value = "0x0d", value_parser = parse_address)]
    pub address: u16,

    #[arg(long, env = "QMC5883L_MODE", value_enum, default_value_t = Mode::Continuous)]
    pub mode: Mode,

    #[arg(long, env = "QMC5883L_RATE", value_enum, default_value_t = OutputDataRate::Hz200)]
    pub rate: OutputDataRate,

    #[arg(long, env = "QMC5883L_RANGE", value_enum, default_value_t = Range::Gauss8)]
    pub range: Range,

    #[arg(long, env = "QMC5883L_OSR", value_enum, default_value_t = OverSampling::Osr512)]
    pub osr: OverSampling,

    /// Période d'échantillonnage en millisecondes
    #[arg(long, env = "QMC5883L_INTERVAL_MS", default_value_t = 100)]
    pub interval_ms: u64,

    /// Plus de traces
    #[arg(short, long, env = "QMC5883L_VERBOSE")]
    pub verbose: bool,
}

fn parse_address(value: &str) -> Result<u16, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse::<u16>(),
    }
    .map_err(|e| format!("adresse invalide '{}': {}", value, e))?;

    if parsed > 0x7f {
        return Err(format!("adresse {:#04x} hors plage 7 bits", parsed));
    }

    Ok(parsed)
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            bus: cli.bus,
            address: cli.address,
            mode: cli.mode,
            output_data_rate: cli.rate,
            range: cli.range,
            oversampling: cli.osr,
            interval_ms: cli.interval_ms,
            verbose: cli.verbose,
        }
        .normalized()
    }
}
