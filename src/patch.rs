//! Reading and changing the contents of A6 program dumps.

use std::fmt;
use log::{debug, warn};

use crate::address::BankSlot;
use crate::classify::{classify, is_single_program_dump, BANK_OFFSET, PROGRAM_OFFSET, PAYLOAD_OFFSET};
use crate::codec::{pack_8to7, unpack_7to8};
use crate::error::{Error, Result};

/// Offset of the patch name in the unpacked payload.
pub const NAME_OFFSET: usize = 2;

/// Length of the patch name in bytes, one byte per character.
pub const NAME_LENGTH: usize = 16;

const NAME_END: usize = NAME_OFFSET + NAME_LENGTH;

/// A borrowed single program dump.
#[derive(Copy, Clone, Debug)]
pub struct ProgramDump<'a> {
    data: &'a [u8],
}

impl<'a> ProgramDump<'a> {
    /// Checks that `message` is a single program dump.
    /// `operation` names the caller in the error.
    pub fn new(message: &'a [u8], operation: &'static str) -> Result<Self> {
        if is_single_program_dump(message) {
            Ok(ProgramDump { data: message })
        }
        else {
            let kind = classify(message);
            warn!("{} got {}", operation, kind);
            Err(Error::UnsupportedInput { operation, kind })
        }
    }

    /// Address bytes of the dump, as sent by the device.
    /// These are not checked against the bank count.
    pub fn slot(&self) -> BankSlot {
        BankSlot { bank: self.data[BANK_OFFSET], program: self.data[PROGRAM_OFFSET] }
    }

    /// Packed payload between the address and the terminator.
    pub fn payload(&self) -> &'a [u8] {
        &self.data[PAYLOAD_OFFSET..self.data.len() - 1]
    }

    /// Unpacked payload.
    pub fn decoded(&self) -> Vec<u8> {
        unpack_7to8(self.payload())
    }
}

fn name_range(decoded: &[u8]) -> std::ops::Range<usize> {
    NAME_OFFSET.min(decoded.len())..NAME_END.min(decoded.len())
}

/// Gets the patch name stored in a program dump.
pub fn name_from_dump(message: &[u8]) -> Result<String> {
    let dump = ProgramDump::new(message, "name_from_dump")?;
    let decoded = dump.decoded();
    Ok(decoded[name_range(&decoded)].iter().map(|&b| b as char).collect())
}

/// Gets the linear patch number a program dump is addressed to.
pub fn number_from_dump(message: &[u8]) -> Result<usize> {
    let dump = ProgramDump::new(message, "number_from_dump")?;
    Ok(dump.slot().index())
}

/// Makes a copy of a program dump carrying a new name.
///
/// Names longer than 16 characters are cut, shorter ones are padded with
/// spaces. Characters outside Latin-1 become '?'.
pub fn rename_patch(message: &[u8], name: &str) -> Result<Vec<u8>> {
    let dump = ProgramDump::new(message, "rename_patch")?;
    let mut decoded = dump.decoded();

    let mut bytes = name.chars()
        .map(|c| if (c as u32) <= 0xff { c as u8 } else { b'?' })
        .chain(std::iter::repeat(b' '));
    let range = name_range(&decoded);
    for b in &mut decoded[range] {
        if let Some(n) = bytes.next() {
            *b = n;
        }
    }

    let mut payload = pack_8to7(&decoded);
    let original = dump.payload();
    if payload.len() < original.len() {
        // keep the trailing byte the unpacking never reads
        payload.extend(&original[payload.len()..]);
    }
    payload.truncate(original.len());

    let mut result = message[..PAYLOAD_OFFSET].to_vec();
    result.extend(payload);
    result.push(message[message.len() - 1]);
    debug!("renamed {:?} to {:?}", dump.slot(), name);
    Ok(result)
}

/// Each program dump of a bank dump holds exactly one patch.
pub fn extract_patches_from_bank(message: &[u8]) -> Vec<Vec<u8>> {
    if is_single_program_dump(message) {
        vec![message.to_vec()]
    }
    else {
        Vec::new()
    }
}

/// MD5 digest identifying a patch by its content.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fingerprint(pub [u8; 16]);

impl Fingerprint {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<md5::Digest> for Fingerprint {
    fn from(digest: md5::Digest) -> Self {
        Fingerprint(digest.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Computes the fingerprint of a message.
///
/// For program dumps the name is blanked out before hashing, so a renamed
/// patch keeps its fingerprint. Anything else is hashed as is.
pub fn calculate_fingerprint(message: &[u8]) -> Fingerprint {
    if is_single_program_dump(message) {
        let mut decoded = ProgramDump { data: message }.decoded();
        let range = name_range(&decoded);
        decoded[range].fill(0);
        md5::compute(&decoded).into()
    }
    else {
        md5::compute(message).into()
    }
}
