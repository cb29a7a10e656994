//! Recognizing A6 messages by their fixed header bytes.

use std::fmt;
use log::debug;

use crate::{INITIATOR, TERMINATOR, NON_REAL_TIME, REAL_TIME, ALESIS_ID};
use crate::address::PROGRAMS_PER_BANK;

/// Model byte of the Andromeda A6, following the Alesis manufacturer ID.
pub const A6_MODEL: u8 = 0x1d;

/// Message type byte of a single program dump.
pub const PROGRAM_DUMP: u8 = 0x00;

/// Message type byte of a program dump request.
pub const PROGRAM_DUMP_REQUEST: u8 = 0x01;

/// Message type byte of a bank dump request.
pub const BANK_DUMP_REQUEST: u8 = 0x0a;

/// Header of a single program dump: initiator, Alesis ID, model, type.
pub const PROGRAM_DUMP_HEADER: [u8; 6] = [
    INITIATOR, ALESIS_ID[0], ALESIS_ID[1], ALESIS_ID[2], A6_MODEL, PROGRAM_DUMP,
];

/// Offset of the bank byte in a program dump.
pub const BANK_OFFSET: usize = 6;

/// Offset of the program byte in a program dump.
pub const PROGRAM_OFFSET: usize = 7;

/// Offset of the packed payload in a program dump.
pub const PAYLOAD_OFFSET: usize = 8;

/// Start of a Universal Device Inquiry reply from an A6: general information,
/// identity reply, Alesis ID, A6 family and member codes.
pub const DEVICE_INQUIRY_REPLY_PREFIX: [u8; 12] = [
    INITIATOR, NON_REAL_TIME, REAL_TIME, 0x06, 0x02,
    ALESIS_ID[0], ALESIS_ID[1], ALESIS_ID[2],
    A6_MODEL, 0x00,
    0x00, 0x00,
];

/// The channel reported for any valid inquiry reply.
/// The A6 answers the same on every channel.
pub const REPLY_CHANNEL: u8 = 0;

/// What kind of A6 message a byte sequence is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MessageKind {
    DeviceInquiryReply,
    SingleProgramDump,
    Unknown,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            MessageKind::DeviceInquiryReply => "device inquiry reply",
            MessageKind::SingleProgramDump => "single program dump",
            MessageKind::Unknown => "unknown message",
        })
    }
}

/// Classifies a message from its header bytes.
pub fn classify(message: &[u8]) -> MessageKind {
    let kind = if is_single_program_dump(message) {
        MessageKind::SingleProgramDump
    }
    else if is_device_inquiry_reply(message) {
        MessageKind::DeviceInquiryReply
    }
    else {
        MessageKind::Unknown
    };
    debug!("{} bytes classified as {}", message.len(), kind);
    kind
}

/// Checks for the reply to a Universal Device Inquiry.
pub fn is_device_inquiry_reply(message: &[u8]) -> bool {
    message.len() > DEVICE_INQUIRY_REPLY_PREFIX.len()
        && message.starts_with(&DEVICE_INQUIRY_REPLY_PREFIX)
}

/// Gets the channel the device answered on, if `message` is an inquiry reply.
pub fn channel_if_valid_device_response(message: &[u8]) -> Option<u8> {
    if is_device_inquiry_reply(message) {
        Some(REPLY_CHANNEL)
    }
    else {
        None
    }
}

/// Checks for a single program dump. The message must be long enough
/// to hold the address bytes and end with the terminator.
pub fn is_single_program_dump(message: &[u8]) -> bool {
    message.len() > PAYLOAD_OFFSET
        && message.starts_with(&PROGRAM_DUMP_HEADER)
        && message[message.len() - 1] == TERMINATOR
}

/// A bank dump on the A6 is a stream of single program dumps.
pub fn is_part_of_bank_dump(message: &[u8]) -> bool {
    is_single_program_dump(message)
}

/// Decides when enough messages of a requested bank dump have arrived.
pub trait BankDumpCompletion {
    fn is_finished(&self, messages: &[Vec<u8>]) -> bool;
}

/// Finished as soon as any program of the bank has arrived.
/// This is how the A6 adaptation has always behaved.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct AnyProgramDump;

impl BankDumpCompletion for AnyProgramDump {
    fn is_finished(&self, messages: &[Vec<u8>]) -> bool {
        messages.iter().any(|m| is_part_of_bank_dump(m))
    }
}

/// Finished when `expected` program dumps have arrived.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CountedProgramDumps {
    pub expected: usize,
}

impl Default for CountedProgramDumps {
    fn default() -> Self {
        CountedProgramDumps { expected: PROGRAMS_PER_BANK }
    }
}

impl BankDumpCompletion for CountedProgramDumps {
    fn is_finished(&self, messages: &[Vec<u8>]) -> bool {
        let count = messages.iter().filter(|m| is_part_of_bank_dump(m)).count();
        debug!("bank dump has {} of {} programs", count, self.expected);
        count >= self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_program_dump(bank: u8, program: u8) -> Vec<u8> {
        let mut data = PROGRAM_DUMP_HEADER.to_vec();
        data.extend([bank, program, 0x26, 0x15, 0x08, TERMINATOR]);
        data
    }

    fn make_inquiry_reply() -> Vec<u8> {
        let mut data = DEVICE_INQUIRY_REPLY_PREFIX.to_vec();
        data.extend([0x02, 0x00, 0x00, 0x00, TERMINATOR]);
        data
    }

    #[test]
    fn program_dump_is_recognized() {
        let data = make_program_dump(0, 5);
        assert!(is_single_program_dump(&data));
        assert!(is_part_of_bank_dump(&data));
        assert_eq!(classify(&data), MessageKind::SingleProgramDump);
    }

    #[test]
    fn program_dump_needs_address_and_terminator() {
        let mut data = PROGRAM_DUMP_HEADER.to_vec();
        data.extend([0x00, TERMINATOR]);
        assert!(!is_single_program_dump(&data));

        let mut unterminated = make_program_dump(1, 2);
        unterminated.pop();
        assert!(!is_single_program_dump(&unterminated));
    }

    #[test]
    fn other_type_byte_is_not_a_program_dump() {
        let mut data = make_program_dump(0, 0);
        data[5] = BANK_DUMP_REQUEST;
        assert_eq!(classify(&data), MessageKind::Unknown);
    }

    #[test]
    fn inquiry_reply_is_recognized() {
        let data = make_inquiry_reply();
        assert_eq!(classify(&data), MessageKind::DeviceInquiryReply);
        assert_eq!(channel_if_valid_device_response(&data), Some(REPLY_CHANNEL));
    }

    #[test]
    fn bare_inquiry_prefix_is_not_a_reply() {
        assert_eq!(channel_if_valid_device_response(&DEVICE_INQUIRY_REPLY_PREFIX), None);
    }

    #[test]
    fn foreign_inquiry_reply_is_ignored() {
        let mut data = make_inquiry_reply();
        data[8] = 0x1c;
        assert_eq!(channel_if_valid_device_response(&data), None);
        assert_eq!(classify(&data), MessageKind::Unknown);
    }

    #[test]
    fn any_program_dump_finishes_bank() {
        let strategy = AnyProgramDump;
        assert!(!strategy.is_finished(&[]));
        assert!(!strategy.is_finished(&[make_inquiry_reply()]));
        assert!(strategy.is_finished(&[make_inquiry_reply(), make_program_dump(3, 0)]));
    }

    #[test]
    fn counted_program_dumps_wait_for_whole_bank() {
        let strategy = CountedProgramDumps::default();
        let mut messages: Vec<Vec<u8>> = (0..127).map(|p| make_program_dump(0, p)).collect();
        messages.push(make_inquiry_reply());
        assert!(!strategy.is_finished(&messages));
        messages.push(make_program_dump(0, 127));
        assert!(strategy.is_finished(&messages));
    }
}
