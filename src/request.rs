//! Outbound messages for the A6.

use log::warn;

use crate::{INITIATOR, TERMINATOR, NON_REAL_TIME, REAL_TIME, ALESIS_ID};
use crate::address::{BankSlot, BANK_COUNT};
use crate::classify::{
    classify, is_single_program_dump,
    A6_MODEL, BANK_DUMP_REQUEST, PROGRAM_DUMP_REQUEST, BANK_OFFSET, PROGRAM_OFFSET,
};
use crate::error::{Error, Result};

/// How long the host should wait for an inquiry reply, in milliseconds.
pub const DEVICE_DETECT_WAIT_MS: u64 = 500;

fn a6_message(kind: u8, body: &[u8]) -> Vec<u8> {
    let mut result = vec![INITIATOR];
    result.extend(ALESIS_ID);
    result.extend([A6_MODEL, kind]);
    result.extend(body);
    result.push(TERMINATOR);
    result
}

/// Universal Device Inquiry, sent to all channels.
pub fn device_inquiry() -> Vec<u8> {
    vec![INITIATOR, NON_REAL_TIME, REAL_TIME, 0x06, 0x01, TERMINATOR]
}

/// Asks for the program with the linear number `index`.
pub fn program_dump_request(index: usize) -> Vec<u8> {
    a6_message(PROGRAM_DUMP_REQUEST, &BankSlot::from_index(index).to_bytes())
}

/// Asks for all 128 programs of `bank`. The reply is a stream of program dumps.
pub fn bank_dump_request(bank: u8) -> Vec<u8> {
    assert!((bank as usize) < BANK_COUNT, "bank {} out of range", bank);
    a6_message(BANK_DUMP_REQUEST, &[bank])
}

/// Re-addresses a single program dump to the patch number `index`.
///
/// Only the bank and program bytes change. Any other kind of message is
/// rejected, since the A6 has no other dump that could be converted.
pub fn convert_to_program_dump(message: &[u8], index: usize) -> Result<Vec<u8>> {
    if !is_single_program_dump(message) {
        let kind = classify(message);
        warn!("cannot convert {} to a program dump", kind);
        return Err(Error::UnsupportedInput { operation: "convert_to_program_dump", kind });
    }

    let slot = BankSlot::from_index(index);
    let mut result = message.to_vec();
    result[BANK_OFFSET] = slot.bank;
    result[PROGRAM_OFFSET] = slot.program;
    Ok(result)
}
