//! Driver du magnétomètre QMC5883L sur bus I2C.

pub mod config;
pub mod i2c;
pub mod sensors;
