//! Translation between linear patch numbers and A6 bank/program addresses.

use std::fmt;

/// Number of banks: User, two Preset banks and thirteen card banks.
pub const BANK_COUNT: usize = 16;

/// Number of programs in each bank.
pub const PROGRAMS_PER_BANK: usize = 128;

/// Number of addressable patches.
pub const PATCH_COUNT: usize = BANK_COUNT * PROGRAMS_PER_BANK;

static BANK_NAMES: [&str; BANK_COUNT] = [
    "User", "Preset1", "Preset2",
    "Card 1", "Card 2", "Card 3", "Card 4", "Card 5", "Card 6", "Card 7",
    "Card 8", "Card 9", "Card 10", "Card 11", "Card 12", "Card 13",
];

/// Physical address of a program on the device.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BankSlot {
    pub bank: u8,
    pub program: u8,
}

impl BankSlot {
    /// Makes a new address. Panics if either part is outside the device geometry.
    pub fn new(bank: u8, program: u8) -> Self {
        assert!((bank as usize) < BANK_COUNT, "bank {} out of range", bank);
        assert!((program as usize) < PROGRAMS_PER_BANK, "program {} out of range", program);
        BankSlot { bank, program }
    }

    /// Gets the address of the patch with the linear number `index`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < PATCH_COUNT, "patch number {} out of range", index);
        BankSlot {
            bank: (index / PROGRAMS_PER_BANK) as u8,
            program: (index % PROGRAMS_PER_BANK) as u8,
        }
    }

    /// Gets the linear patch number of this address.
    pub fn index(&self) -> usize {
        self.bank as usize * PROGRAMS_PER_BANK + self.program as usize
    }

    /// Address bytes as they appear in requests and dumps.
    pub fn to_bytes(&self) -> [u8; 2] {
        [self.bank, self.program]
    }
}

impl fmt::Display for BankSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:03}", friendly_bank_name(self.bank as usize), self.program)
    }
}

/// Display name of a bank, as printed on the A6 front panel.
pub fn friendly_bank_name(bank: usize) -> &'static str {
    BANK_NAMES[bank]
}

/// Display name of a patch, for example "Preset1 000".
pub fn friendly_program_name(index: usize) -> String {
    BankSlot::from_index(index).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_bank_name() {
        assert_eq!(friendly_bank_name(4), "Card 2");
    }

    #[test]
    fn last_bank_name() {
        assert_eq!(friendly_bank_name(BANK_COUNT - 1), "Card 13");
    }

    #[test]
    #[should_panic]
    fn bank_name_out_of_range() {
        friendly_bank_name(BANK_COUNT);
    }

    #[test]
    fn first_preset_program_name() {
        assert_eq!(friendly_program_name(128), "Preset1 000");
    }

    #[test]
    fn program_name_padding() {
        assert_eq!(friendly_program_name(7), "User 007");
        assert_eq!(friendly_program_name(PATCH_COUNT - 1), "Card 13 127");
    }

    #[test]
    fn address_of_index() {
        assert_eq!(BankSlot::from_index(257), BankSlot::new(2, 1));
        assert_eq!(BankSlot::from_index(257).to_bytes(), [2, 1]);
    }

    #[test]
    fn address_round_trip() {
        for index in 0..PATCH_COUNT {
            let slot = BankSlot::from_index(index);
            assert_eq!(slot.index(), index);
            assert_eq!(BankSlot::from_index(slot.index()), slot);
        }
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        BankSlot::from_index(PATCH_COUNT);
    }

    #[test]
    #[should_panic]
    fn program_out_of_range() {
        BankSlot::new(0, 128);
    }
}
