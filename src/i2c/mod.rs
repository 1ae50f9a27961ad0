#[cfg(feature = "real-sensors")]
use rppal::i2c::I2c;

#[cfg(feature = "fake-sensors")]
pub mod fake;

#[cfg(test)]
pub(crate) mod mock;

/// Erreur de transport sur le bus I2C
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    #[cfg(feature = "real-sensors")]
    #[error("Erreur I2C: {0}")]
    I2c(#[from] rppal::i2c::Error),

    #[error("Pas d'acquittement (NACK) sur le registre {0:#04x}")]
    Nack(u8),

    #[error("Délai dépassé sur le registre {0:#04x}")]
    Timeout(u8),
}

/// Accès registre par registre à un périphérique déjà adressé sur le bus.
pub trait I2CBus {
    /// Ecrit un octet (word) dans un registre 8 bits
    fn ecriture_word(&self, command: u8, data: u8) -> Result<(), BusError>;

    /// Lecture d'un octet (word) dans un registre 8 bits
    fn lecture_word(&self, command: u8) -> Result<u8, BusError>;

    /// Lecture de 2 octets (dword) stockés LSB puis MSB
    fn lecture_dword_le(&self, command: u8) -> Result<u16, BusError>;
}

#[cfg(feature = "real-sensors")]
impl I2CBus for I2c {
    fn ecriture_word(&self, command: u8, data: u8) -> Result<(), BusError> {
        self.block_write(command, &[data])?;
        Ok(())
    }

    fn lecture_word(&self, command: u8) -> Result<u8, BusError> {
        let mut buffer = [0u8; 1];
        self.block_read(command, &mut buffer)?;
        Ok(buffer[0])
    }

    fn lecture_dword_le(&self, command: u8) -> Result<u16, BusError> {
        let mut buffer = [0u8; 2];
        self.block_read(command, &mut buffer)?;
        Ok(u16::from_le_bytes(buffer))
    }
}

/// Ouvre /dev/i2c-<bus> et fixe l'adresse du périphérique.
#[cfg(feature = "real-sensors")]
pub fn open(bus: u8, address: u16) -> Result<I2c, BusError> {
    let mut i2c = I2c::with_bus(bus)?;
    i2c.set_slave_address(address)?;
    log::debug!("[I2C] Bus {} ouvert, périphérique {:#04x}", bus, address);
    Ok(i2c)
}
