// Adresse par défaut et bus
pub const QMC5883L_DEFAULT_BUS: u8 = 1;
pub const QMC5883L_MAG_ADDR: u16 = 0x0D;

// Sorties (LSB puis MSB)
pub const QMC5883L_X_L: u8 = 0x00;
pub const QMC5883L_Y_L: u8 = 0x02;
pub const QMC5883L_Z_L: u8 = 0x04;
pub const QMC5883L_T_L: u8 = 0x07;

pub const QMC5883L_STATUS: u8 = 0x06;
pub const QMC5883L_CONTROL1: u8 = 0x09;
pub const QMC5883L_CONTROL2: u8 = 0x0A;
pub const QMC5883L_SETRESET: u8 = 0x0B;
pub const QMC5883L_CHIP_ID: u8 = 0x0D;

// Status 1
pub const QMC5883L_STATUS_DRDY: u8 = 0x01;
pub const QMC5883L_STATUS_OVL: u8 = 0x02;
pub const QMC5883L_STATUS_DOR: u8 = 0x04;

// Control 2
pub const QMC5883L_CONTROL2_INT_ENB: u8 = 0x01;
pub const QMC5883L_CONTROL2_ROL_PNT: u8 = 0x40;
pub const QMC5883L_CONTROL2_SOFT_RST: u8 = 0x80;

/// Valeur recommandée par la datasheet pour la période SET/RESET
pub const QMC5883L_SETRESET_PERIOD: u8 = 0x01;
