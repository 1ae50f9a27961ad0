use crate::i2c::BusError;

/// La séquence de reset / configuration par défaut a échoué: le capteur est
/// dans un état inconnu, il faut recréer le driver.
#[derive(Debug, thiserror::Error)]
pub enum InitializationError {
    #[error("[QMC5883L] Ecriture de la période SET/RESET impossible: {0}")]
    SetResetPeriod(#[source] BusError),

    #[error("[QMC5883L] Soft reset impossible: {0}")]
    SoftReset(#[source] BusError),

    #[error("[QMC5883L] Configuration par défaut impossible: {0}")]
    DefaultConfiguration(#[source] BusError),
}

impl InitializationError {
    pub fn bus_error(&self) -> &BusError {
        match self {
            InitializationError::SetResetPeriod(e)
            | InitializationError::SoftReset(e)
            | InitializationError::DefaultConfiguration(e) => e,
        }
    }
}

/// Conseil donné lorsque le capteur sature en pleine échelle 2 Gauss
pub const RANGE_HINT: &str = "Passer en pleine échelle 8 Gauss.";

fn hint_suffix(range_hint: &Option<&'static str>) -> String {
    match range_hint {
        Some(hint) => format!(" {}", hint),
        None => String::new(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("Saturation du capteur magnétique.{}", hint_suffix(.range_hint))]
    Overflow { range_hint: Option<&'static str> },

    #[error("Mesure sautée avant lecture")]
    DataSkipped,

    #[error("Erreur de bus pendant la lecture: {0}")]
    Bus(#[from] BusError),
}
