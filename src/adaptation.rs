//! The entry points a librarian host calls for a synthesizer,
//! and their implementation for the Andromeda A6.

use crate::address::{self, BANK_COUNT, PROGRAMS_PER_BANK};
use crate::classify::{self, AnyProgramDump, BankDumpCompletion};
use crate::error::Result;
use crate::patch::{self, Fingerprint};
use crate::request::{self, DEVICE_DETECT_WAIT_MS};

/// Device name reported to the host.
pub const DEVICE_NAME: &str = "Alesis Andromeda A6";

/// What a librarian host needs from a synthesizer adaptation.
/// Patch numbers are linear, from zero to banks times programs per bank.
pub trait Adaptation {
    fn name(&self) -> &str;

    // Detection
    fn create_device_detect_message(&self, channel: u8) -> Vec<u8>;
    fn device_detect_wait_ms(&self) -> u64;
    /// False if the device answers detection the same way on every channel.
    fn needs_channel_specific_detection(&self) -> bool;
    fn channel_if_valid_device_response(&self, message: &[u8]) -> Option<u8>;

    // Geometry
    fn number_of_banks(&self) -> usize;
    fn number_of_patches_per_bank(&self) -> usize;
    fn friendly_bank_name(&self, bank: usize) -> String;
    fn friendly_program_name(&self, index: usize) -> String;

    // Single programs
    fn create_program_dump_request(&self, channel: u8, index: usize) -> Vec<u8>;
    fn is_single_program_dump(&self, message: &[u8]) -> bool;
    fn convert_to_program_dump(&self, channel: u8, message: &[u8], index: usize) -> Result<Vec<u8>>;
    fn number_from_dump(&self, message: &[u8]) -> Result<usize>;

    // Banks
    fn create_bank_dump_request(&self, channel: u8, bank: u8) -> Vec<u8>;
    fn is_part_of_bank_dump(&self, message: &[u8]) -> bool;
    fn is_bank_dump_finished(&self, messages: &[Vec<u8>]) -> bool;
    fn extract_patches_from_bank(&self, message: &[u8]) -> Vec<Vec<u8>>;

    // Patch contents
    fn name_from_dump(&self, message: &[u8]) -> Result<String>;
    fn rename_patch(&self, message: &[u8], name: &str) -> Result<Vec<u8>>;
    fn calculate_fingerprint(&self, message: &[u8]) -> Fingerprint;
}

/// Adaptation for the Alesis Andromeda A6.
///
/// The only configurable part is how a bank dump is judged complete.
/// The default finishes on the first program dump received.
#[derive(Clone, Debug, Default)]
pub struct AndromedaA6<C: BankDumpCompletion = AnyProgramDump> {
    completion: C,
}

impl AndromedaA6 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: BankDumpCompletion> AndromedaA6<C> {
    /// Makes an adaptation using `completion` for bank dumps.
    pub fn with_completion(completion: C) -> Self {
        AndromedaA6 { completion }
    }
}

// The A6 ignores the MIDI channel for sysex, so `channel` goes unused.
impl<C: BankDumpCompletion> Adaptation for AndromedaA6<C> {
    fn name(&self) -> &str {
        DEVICE_NAME
    }

    fn create_device_detect_message(&self, _channel: u8) -> Vec<u8> {
        request::device_inquiry()
    }

    fn device_detect_wait_ms(&self) -> u64 {
        DEVICE_DETECT_WAIT_MS
    }

    fn needs_channel_specific_detection(&self) -> bool {
        false
    }

    fn channel_if_valid_device_response(&self, message: &[u8]) -> Option<u8> {
        classify::channel_if_valid_device_response(message)
    }

    fn number_of_banks(&self) -> usize {
        BANK_COUNT
    }

    fn number_of_patches_per_bank(&self) -> usize {
        PROGRAMS_PER_BANK
    }

    fn friendly_bank_name(&self, bank: usize) -> String {
        address::friendly_bank_name(bank).to_string()
    }

    fn friendly_program_name(&self, index: usize) -> String {
        address::friendly_program_name(index)
    }

    fn create_program_dump_request(&self, _channel: u8, index: usize) -> Vec<u8> {
        request::program_dump_request(index)
    }

    fn is_single_program_dump(&self, message: &[u8]) -> bool {
        classify::is_single_program_dump(message)
    }

    fn convert_to_program_dump(&self, _channel: u8, message: &[u8], index: usize) -> Result<Vec<u8>> {
        request::convert_to_program_dump(message, index)
    }

    fn number_from_dump(&self, message: &[u8]) -> Result<usize> {
        patch::number_from_dump(message)
    }

    fn create_bank_dump_request(&self, _channel: u8, bank: u8) -> Vec<u8> {
        request::bank_dump_request(bank)
    }

    fn is_part_of_bank_dump(&self, message: &[u8]) -> bool {
        classify::is_part_of_bank_dump(message)
    }

    fn is_bank_dump_finished(&self, messages: &[Vec<u8>]) -> bool {
        self.completion.is_finished(messages)
    }

    fn extract_patches_from_bank(&self, message: &[u8]) -> Vec<Vec<u8>> {
        patch::extract_patches_from_bank(message)
    }

    fn name_from_dump(&self, message: &[u8]) -> Result<String> {
        patch::name_from_dump(message)
    }

    fn rename_patch(&self, message: &[u8], name: &str) -> Result<Vec<u8>> {
        patch::rename_patch(message, name)
    }

    fn calculate_fingerprint(&self, message: &[u8]) -> Fingerprint {
        patch::calculate_fingerprint(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::CountedProgramDumps;
    use crate::error::Error;

    fn make_bank(bank: u8) -> Vec<Vec<u8>> {
        (0..PROGRAMS_PER_BANK as u8)
            .map(|program| vec![0xf0, 0x00, 0x00, 0x0e, 0x1d, 0x00, bank, program, 0x00, 0x00, 0xf7])
            .collect()
    }

    #[test]
    fn detection() {
        let a6 = AndromedaA6::new();
        assert_eq!(a6.name(), "Alesis Andromeda A6");
        assert!(!a6.needs_channel_specific_detection());
        assert_eq!(a6.create_device_detect_message(5), a6.create_device_detect_message(0));
        assert_eq!(a6.device_detect_wait_ms(), 500);

        let reply = [0xf0, 0x7e, 0x7f, 0x06, 0x02, 0x00, 0x00, 0x0e, 0x1d, 0x00, 0x00, 0x00, 0x25, 0xf7];
        assert_eq!(a6.channel_if_valid_device_response(&reply), Some(0));
        assert_eq!(a6.channel_if_valid_device_response(&reply[..12]), None);
    }

    #[test]
    fn geometry() {
        let a6 = AndromedaA6::new();
        assert_eq!(a6.number_of_banks() * a6.number_of_patches_per_bank(), 2048);
        assert_eq!(a6.friendly_bank_name(0), "User");
        assert_eq!(a6.friendly_program_name(129), "Preset1 001");
    }

    #[test]
    fn request_and_readdress() {
        let a6 = AndromedaA6::new();
        assert_eq!(a6.create_program_dump_request(0, 257)[6..8], [2, 1]);

        let bank = make_bank(0);
        let moved = a6.convert_to_program_dump(0, &bank[5], 300).unwrap();
        assert!(a6.is_single_program_dump(&moved));
        assert_eq!(a6.number_from_dump(&moved).unwrap(), 300);

        let inquiry = a6.create_device_detect_message(0);
        assert!(matches!(a6.convert_to_program_dump(0, &inquiry, 0), Err(Error::UnsupportedInput { .. })));
        assert!(a6.name_from_dump(&inquiry).is_err());
    }

    #[test]
    fn default_bank_completion() {
        let a6 = AndromedaA6::new();
        let bank = make_bank(2);
        assert_eq!(a6.create_bank_dump_request(0, 2), vec![0xf0, 0x00, 0x00, 0x0e, 0x1d, 0x0a, 0x02, 0xf7]);
        assert!(bank.iter().all(|m| a6.is_part_of_bank_dump(m)));
        assert!(!a6.is_bank_dump_finished(&[]));
        assert!(a6.is_bank_dump_finished(&bank[..1]));
    }

    #[test]
    fn counted_bank_completion() {
        let a6 = AndromedaA6::with_completion(CountedProgramDumps::default());
        let bank = make_bank(2);
        assert!(!a6.is_bank_dump_finished(&bank[..1]));
        assert!(!a6.is_bank_dump_finished(&bank[..127]));
        assert!(a6.is_bank_dump_finished(&bank));

        let patches: Vec<Vec<u8>> = bank.iter().flat_map(|m| a6.extract_patches_from_bank(m)).collect();
        assert_eq!(patches, bank);
    }
}
