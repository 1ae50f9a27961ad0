use crate::i2c::{BusError, I2CBus};
use crate::sensors::mag::error::{InitializationError, SampleError, RANGE_HINT};
use crate::sensors::mag::registry;
use crate::sensors::mag::{
    complement2, control1, DriverConfig, Mode, OutputDataRate, OverSampling, Range, RawSample,
    StatusFlags, StatusOutcome,
};

/// Driver du magnétomètre 3 axes QMC5883L
/// http://wiki.sunfounder.cc/images/7/72/QMC5883L-Datasheet-1.0.pdf
///
/// Le bus doit déjà être ouvert et adressé sur le capteur. Aucun verrou
/// interne: la séquence status -> axes ne doit pas être entrecoupée par un
/// autre appelant.
pub struct QMC5883L<B> {
    bus: B,
    config: DriverConfig,
}

impl<B: I2CBus> QMC5883L<B> {
    /// Constructeur: période SET/RESET, soft reset puis configuration par défaut
    /// (continu, 10Hz, 2G, OSR 512).
    pub fn new(bus: B, bus_id: u8, address: u16) -> Result<Self, InitializationError> {
        log::info!("[QMC5883L] Initialisation (bus {}, adresse {:#04x}) ...", bus_id, address);

        bus.ecriture_word(registry::QMC5883L_SETRESET, registry::QMC5883L_SETRESET_PERIOD)
            .map_err(InitializationError::SetResetPeriod)?;

        bus.ecriture_word(registry::QMC5883L_CONTROL2, registry::QMC5883L_CONTROL2_SOFT_RST)
            .map_err(InitializationError::SoftReset)?;

        let defaults = DriverConfig::new(bus_id, address);
        let mut mag = Self { bus, config: defaults };
        mag.configure(
            defaults.mode,
            defaults.output_data_rate,
            defaults.range,
            defaults.oversampling,
        )
        .map_err(InitializationError::DefaultConfiguration)?;

        log::info!("[QMC5883L] Fin d'initialisation.");
        Ok(mag)
    }

    /// Ecrit Control 1. La configuration mémorisée ne change qu'une fois
    /// l'écriture acquittée.
    pub fn configure(
        &mut self,
        mode: Mode,
        odr: OutputDataRate,
        range: Range,
        osr: OverSampling,
    ) -> Result<(), BusError> {
        let value = control1(mode, odr, range, osr);
        log::debug!("[QMC5883L] Control 1 <- {:#04x}", value);
        self.bus.ecriture_word(registry::QMC5883L_CONTROL1, value)?;

        self.config.mode = mode;
        self.config.output_data_rate = odr;
        self.config.range = range;
        self.config.oversampling = osr;
        Ok(())
    }

    /// Active la broche d'interruption et/ou le roll-over du pointeur (Control 2)
    pub fn configure_interrupt(&self, interrupt_enable: bool, pointer_rollover: bool) -> Result<(), BusError> {
        let mut value = 0u8;
        if interrupt_enable {
            value |= registry::QMC5883L_CONTROL2_INT_ENB;
        }
        if pointer_rollover {
            value |= registry::QMC5883L_CONTROL2_ROL_PNT;
        }

        log::debug!("[QMC5883L] Control 2 <- {:#04x}", value);
        self.bus.ecriture_word(registry::QMC5883L_CONTROL2, value)
    }

    /// Configuration actuellement active sur le capteur
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Rend le bus à l'appelant (la fermeture reste à sa charge)
    pub fn release(self) -> B {
        self.bus
    }

    /// Lecture d'un registre 8 bits
    pub fn read_register(&self, register: u8) -> Result<u8, BusError> {
        self.bus.lecture_word(register)
    }

    /// Lecture d'une valeur signée stockée LSB puis MSB
    pub fn read_word(&self, register: u8) -> Result<i16, BusError> {
        let val = self.bus.lecture_dword_le(register)?;
        Ok(complement2(val))
    }

    /// Récupére le "Chip ID"
    pub fn chip_id(&self) -> Result<u8, BusError> {
        self.read_register(registry::QMC5883L_CHIP_ID)
    }

    /// Température brute (non calibrée)
    pub fn read_temperature_raw(&self) -> Result<i16, BusError> {
        self.read_word(registry::QMC5883L_T_L)
    }

    /// Lecture et décodage du registre de status
    pub fn read_status(&self) -> Result<StatusFlags, BusError> {
        let status = self.read_register(registry::QMC5883L_STATUS)?;
        Ok(StatusFlags::from(status))
    }

    /// Récupére les 3 axes si le status l'autorise.
    ///
    /// Sans nouvelle mesure depuis la dernière lecture, renvoie (0, 0, 0).
    /// Une erreur de bus sur un axe interrompt la lecture: aucune mesure
    /// partielle n'est renvoyée.
    pub fn read_sample(&self) -> Result<RawSample, SampleError> {
        let status = self.read_status()?;

        match status.outcome() {
            StatusOutcome::Overflow => {
                let range_hint = match self.config.range {
                    Range::Gauss2 => Some(RANGE_HINT),
                    Range::Gauss8 => None,
                };
                Err(SampleError::Overflow { range_hint })
            }

            StatusOutcome::Ready => {
                let x = self.read_word(registry::QMC5883L_X_L)?;
                let y = self.read_word(registry::QMC5883L_Y_L)?;
                let z = self.read_word(registry::QMC5883L_Z_L)?;
                Ok(RawSample { x, y, z })
            }

            StatusOutcome::Skipped => {
                // Lecture obligatoire pour libérer les registres de sortie
                if let Err(e) = self.read_temperature_raw() {
                    log::debug!("[QMC5883L] Lecture de purge ignorée: {}", e);
                }
                Err(SampleError::DataSkipped)
            }

            StatusOutcome::NoneReady => Ok(RawSample::default()),
        }
    }
}
