// Load-time error conditions. Misbehaving game code is normal operation and
// never surfaces here: invalid opcodes execute as no-ops, out-of-range ROM
// reads return 0, and save file I/O failures are logged and ignored.
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ROM image is shorter than the 0x0150 byte header area.
    RomTooSmall(usize),
    // ROM image does not match the size its header declares.
    RomSizeMismatch { declared: usize, actual: usize },
    // Mapper id at 0x0147 is outside the supported set (None/MBC1/MBC3).
    UnsupportedMapper(u8),
    // Boot ROM must be exactly 256 bytes.
    BootRomSize(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::RomTooSmall(len) => {
                write!(f, "rom is {} bytes, missing the 0100-014f header area", len)
            }
            Error::RomSizeMismatch { declared, actual } => {
                write!(f, "rom header declares {} bytes but image holds {}", declared, actual)
            }
            Error::UnsupportedMapper(id) => write!(f, "mapper id {:#04x} is not supported", id),
            Error::BootRomSize(len) => write!(f, "boot rom must be 256 bytes, got {}", len),
        }
    }
}

impl std::error::Error for Error {}
