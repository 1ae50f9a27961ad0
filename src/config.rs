use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sensors::mag::registry;
use crate::sensors::mag::{Mode, OutputDataRate, OverSampling, Range};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub bus: u8,
    pub address: u16,
    pub mode: Mode,
    pub output_data_rate: OutputDataRate,
    pub range: Range,
    pub oversampling: OverSampling,
    pub interval_ms: u64,
    pub verbose: bool,
}

impl Config {
    pub fn new() -> Self {
        let config = Config {
            bus: registry::QMC5883L_DEFAULT_BUS,
            address: registry::QMC5883L_MAG_ADDR,
            mode: Mode::Continuous,
            output_data_rate: OutputDataRate::Hz200,
            range: Range::Gauss8,
            oversampling: OverSampling::Osr512,
            interval_ms: 100,
            verbose: false,
        };

        config
    }

    /// Bus ou adresse à 0 = valeur par défaut
    pub fn normalized(mut self) -> Self {
        if self.bus == 0 {
            self.bus = registry::QMC5883L_DEFAULT_BUS;
        }
        if self.address == 0 {
            self.address = registry::QMC5883L_MAG_ADDR;
        }
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
