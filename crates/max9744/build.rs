// Build script: bakes the board's I2C pin assignment into the driver.
//
// Override per board at build time:
//   MAX9744_I2C_SCL_GPIO=19 MAX9744_I2C_SDA_GPIO=18 cargo build ...
#![allow(clippy::panic, clippy::expect_used)]

use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_SCL_GPIO: u8 = 22;
const DEFAULT_SDA_GPIO: u8 = 21;

fn gpio_from_env(var: &str, default: u8) -> u8 {
    println!("cargo:rerun-if-env-changed={var}");
    match env::var(var) {
        Ok(raw) => match raw.trim().parse::<u8>() {
            Ok(pin) => pin,
            Err(_) => panic!("{var} must be a GPIO number in 0..=255, got {raw:?}"),
        },
        Err(env::VarError::NotPresent) => default,
        Err(env::VarError::NotUnicode(_)) => panic!("{var} is not valid UTF-8"),
    }
}

fn main() {
    let scl = gpio_from_env("MAX9744_I2C_SCL_GPIO", DEFAULT_SCL_GPIO);
    let sda = gpio_from_env("MAX9744_I2C_SDA_GPIO", DEFAULT_SDA_GPIO);
    if scl == sda {
        panic!("MAX9744_I2C_SCL_GPIO and MAX9744_I2C_SDA_GPIO must differ (both {scl})");
    }

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    let pins = format!(
        "/// GPIO driving the I2C clock line (`MAX9744_I2C_SCL_GPIO`).\n\
         pub const SCL_GPIO: u8 = {scl};\n\
         /// GPIO driving the I2C data line (`MAX9744_I2C_SDA_GPIO`).\n\
         pub const SDA_GPIO: u8 = {sda};\n"
    );
    fs::write(out.join("pins.rs"), pins).expect("failed to write pins.rs");

    println!("cargo:rerun-if-changed=build.rs");
}
