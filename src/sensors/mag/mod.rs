use std::fmt;

use clap::ValueEnum;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod qmc5883l;
pub mod reader;
pub mod registry;

pub use error::{InitializationError, SampleError};
pub use qmc5883l::QMC5883L;

/// Mode de fonctionnement (Control 1, bit 0)
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Standby = 0x00,
    Continuous = 0x01,
}

/// Fréquence de sortie (Control 1, bits 2-3)
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputDataRate {
    #[value(name = "10hz")]
    Hz10 = 0x00,
    #[value(name = "50hz")]
    Hz50 = 0x04,
    #[value(name = "100hz")]
    Hz100 = 0x08,
    #[value(name = "200hz")]
    Hz200 = 0x0C,
}

/// Pleine échelle (Control 1, bits 4-5)
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Range {
    /// Environnement magnétiquement propre
    #[value(name = "2g")]
    Gauss2 = 0x00,
    /// Champs forts
    #[value(name = "8g")]
    Gauss8 = 0x10,
}

/// Over Sample Rate (Control 1, bits 6-7): 512 = moins de bruit, 64 = moins de consommation
/// http://wiki.sunfounder.cc/images/7/72/QMC5883L-Datasheet-1.0.pdf (Page 17)
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum OverSampling {
    #[value(name = "512")]
    Osr512 = 0x00,
    #[value(name = "256")]
    Osr256 = 0x40,
    #[value(name = "128")]
    Osr128 = 0x80,
    #[value(name = "64")]
    Osr64 = 0xC0,
}

/// Assemble l'octet de Control 1. Les champs sont indépendants, toute
/// combinaison est écrite telle quelle.
pub fn control1(mode: Mode, odr: OutputDataRate, range: Range, osr: OverSampling) -> u8 {
    mode as u8 | odr as u8 | range as u8 | osr as u8
}

/// Configuration active sur le capteur
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub bus_id: u8,
    pub address: u16,
    pub mode: Mode,
    pub output_data_rate: OutputDataRate,
    pub range: Range,
    pub oversampling: OverSampling,
}

impl DriverConfig {
    /// Valeurs appliquées après le reset
    pub fn new(bus_id: u8, address: u16) -> Self {
        DriverConfig {
            bus_id,
            address,
            mode: Mode::Continuous,
            output_data_rate: OutputDataRate::Hz10,
            range: Range::Gauss2,
            oversampling: OverSampling::Osr512,
        }
    }
}

/// Bits du registre de status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub overflow: bool,
    pub data_ready: bool,
    pub data_skipped: bool,
}

/// Issue d'une lecture, par ordre de priorité
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusOutcome {
    Overflow,
    Ready,
    Skipped,
    NoneReady,
}

impl From<u8> for StatusFlags {
    fn from(status: u8) -> Self {
        StatusFlags {
            overflow: status & registry::QMC5883L_STATUS_OVL == registry::QMC5883L_STATUS_OVL,
            data_ready: status & registry::QMC5883L_STATUS_DRDY == registry::QMC5883L_STATUS_DRDY,
            data_skipped: status & registry::QMC5883L_STATUS_DOR == registry::QMC5883L_STATUS_DOR,
        }
    }
}

impl StatusFlags {
    /// Le matériel peut lever plusieurs bits à la fois:
    /// saturation > données prêtes > données sautées.
    pub fn outcome(&self) -> StatusOutcome {
        match (self.overflow, self.data_ready, self.data_skipped) {
            (true, _, _) => StatusOutcome::Overflow,
            (false, true, _) => StatusOutcome::Ready,
            (false, false, true) => StatusOutcome::Skipped,
            (false, false, false) => StatusOutcome::NoneReady,
        }
    }
}

/// Mesure brute des 3 axes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    /// Norme du champ, en unités brutes
    pub fn magnitude(&self) -> f32 {
        Vector3::new(self.x as f32, self.y as f32, self.z as f32).norm()
    }
}

impl From<RawSample> for Vector3<i16> {
    fn from(sample: RawSample) -> Self {
        Vector3::new(sample.x, sample.y, sample.z)
    }
}

impl fmt::Display for RawSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} y={} z={}", self.x, self.y, self.z)
    }
}

/// Complément à 2 d'une valeur sur deux octets
pub fn complement2(val: u16) -> i16 {
    if val >= 0x8000 {
        (val as i32 - 0x10000) as i16
    } else {
        val as i16
    }
}
