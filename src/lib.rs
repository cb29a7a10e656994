//! # a6syx
//!
//! `a6syx` lets a patch librarian talk to the Alesis Andromeda A6 over
//! MIDI System Exclusive messages: detecting the device, requesting and
//! recognizing program dumps, moving them between bank slots, reading
//! and changing patch names, and fingerprinting patch contents.
//!
//! Every function here is a pure mapping from bytes to bytes. Sending and
//! receiving the messages is left to the host.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use lazy_static::lazy_static;

pub mod adaptation;
pub mod address;
pub mod classify;
pub mod codec;
pub mod error;
pub mod patch;
pub mod request;

pub use adaptation::{Adaptation, AndromedaA6, DEVICE_NAME};
pub use address::{BankSlot, PATCH_COUNT, friendly_bank_name, friendly_program_name};
pub use classify::{MessageKind, BankDumpCompletion, AnyProgramDump, CountedProgramDumps, classify};
pub use codec::{RollingPacked, pack_8to7, unpack_7to8};
pub use error::{Error, Result};
pub use patch::{Fingerprint, calculate_fingerprint, name_from_dump, number_from_dump, rename_patch};
pub use request::{bank_dump_request, convert_to_program_dump, device_inquiry, program_dump_request};

/// System Exclusive message initiator.
pub const INITIATOR: u8 = 0xf0;

/// System Exclusive message terminator.
pub const TERMINATOR: u8 = 0xf7;

/// Development/non-commercial SysEx manufacturer ID.
pub const DEVELOPMENT: u8 = 0x7d;

/// Universal non-real-time SysEx message indicator.
pub const NON_REAL_TIME: u8 = 0x7e;

/// Universal real-time SysEx message indicator.
pub const REAL_TIME: u8 = 0x7f;

/// Extended manufacturer ID of Alesis.
pub const ALESIS_ID: [u8; 3] = [0x00, 0x00, 0x0e];

/// MIDI manufacturer. The ID is either a single byte for standard IDs,
/// three bytes for extended IDs, or Development (non-commercial).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Manufacturer {
    Standard(u8),
    Extended([u8; 3]),
    Development,
}

impl Manufacturer {
    /// Gets the manufacturer of a manufacturer-specific message.
    /// Universal messages and truncated data have none.
    pub fn from_message(message: &[u8]) -> Option<Self> {
        match message {
            [INITIATOR, NON_REAL_TIME, ..] | [INITIATOR, REAL_TIME, ..] => None,
            [INITIATOR, DEVELOPMENT, ..] => Some(Manufacturer::Development),
            [INITIATOR, 0x00, b1, b2, ..] => Some(Manufacturer::Extended([0x00, *b1, *b2])),
            [INITIATOR, b, ..] if *b != 0x00 => Some(Manufacturer::Standard(*b)),
            _ => None,
        }
    }

    /// Gets the manufacturer System Exclusive bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Manufacturer::Development => vec![DEVELOPMENT],
            Manufacturer::Standard(b) => vec![*b],
            Manufacturer::Extended(bs) => bs.to_vec(),
        }
    }

    /// Gets the manufacturer SysEx bytes as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.to_bytes())
    }

    /// Gets the name of this manufacturer.
    pub fn name(&self) -> String {
        if *self == Manufacturer::Development {
            return "Development / Non-commercial".to_string()
        }

        match MANUFACTURER_NAMES.get(&*self.to_hex()) {
            Some(n) => n.to_string(),
            None => "Unknown manufacturer".to_string(),
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

lazy_static! {
    // Makers whose gear tends to share a librarian setup with an A6.
    static ref MANUFACTURER_NAMES: HashMap<&'static str, &'static str> = {
        HashMap::from([
            ("01", "Sequential Circuits"),
            ("04", "Moog Music"),
            ("07", "Kurzweil / Young Chang"),
            ("0F", "Ensoniq"),
            ("10", "Oberheim / Gibson Labs"),
            ("18", "E-mu"),
            ("33", "Clavia Digital Instruments"),
            ("3E", "Waldorf Electronics GmbH"),
            ("00000E", "Alesis Studio Electronics"),
            ("002029", "Focusrite/Novation"),
            ("40", "Kawai Musical Instruments MFG. CO. Ltd"),
            ("41", "Roland Corporation"),
            ("42", "Korg Inc."),
            ("43", "Yamaha"),
            ("47", "Akai Electric Co. Ltd."),
        ])
    };
}

/// Returns the number of System Exclusive messages in `data`,
/// based on the count of terminator bytes.
pub fn message_count(data: &[u8]) -> usize {
    data.iter().filter(|&n| *n == TERMINATOR).count()
}

/// Splits `data` after each terminator byte, keeping it.
pub fn split_messages(data: &[u8]) -> Vec<Vec<u8>> {
    data.split_inclusive(|&n| n == TERMINATOR)
        .map(|part| part.to_vec())
        .collect()
}

/// Reads a whole `.syx` file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}
