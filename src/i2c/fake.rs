use rand::Rng;

use super::{BusError, I2CBus};
use crate::sensors::mag::registry;

/// Faux QMC5883L pour tourner sans matériel.
///
/// Le status est presque toujours "données prêtes", avec de temps en temps
/// une saturation ou une mesure sautée pour exercer les autres branches.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeBus;

impl FakeBus {
    pub fn new() -> Self {
        FakeBus
    }
}

impl I2CBus for FakeBus {
    fn ecriture_word(&self, _command: u8, _data: u8) -> Result<(), BusError> {
        Ok(())
    }

    fn lecture_word(&self, command: u8) -> Result<u8, BusError> {
        let mut rng = rand::thread_rng();

        let value = match command {
            registry::QMC5883L_STATUS => {
                let roll: u8 = rng.gen_range(0..100);
                match roll {
                    0..=1 => registry::QMC5883L_STATUS_OVL,
                    2..=4 => registry::QMC5883L_STATUS_DOR,
                    5..=9 => 0x00,
                    _ => registry::QMC5883L_STATUS_DRDY,
                }
            }
            registry::QMC5883L_CHIP_ID => 0xff,
            _ => rng.gen(),
        };

        Ok(value)
    }

    fn lecture_dword_le(&self, _command: u8) -> Result<u16, BusError> {
        Ok(rand::thread_rng().gen())
    }
}
