//! Rolling 7-bit packing used by the A6 program dumps.
//!
//! The A6 spreads each 8-bit byte over two neighbouring 7-bit data bytes.
//! A phase counter running from 0 to 6 says how many bits of the current
//! wire byte were already used by the previous 8-bit byte. After seven
//! bytes the phase wraps and the wire byte in between holds nothing new,
//! so eight wire bytes carry seven 8-bit bytes.

use bit::BitIndex;
use log::debug;

/// Number of 8-bit bytes in one full group.
pub const GROUP_SIZE: usize = 7;

/// Position of the rolling window: the wire byte it starts at
/// and how many low bits of that byte belong to the previous value.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
struct Window {
    cursor: usize,
    phase: usize,
}

impl Window {
    fn advance(self) -> Self {
        let phase = (self.phase + 1) % GROUP_SIZE;
        let cursor = if phase == 0 {
            self.cursor + 2  // skip the byte that only held high bits
        }
        else {
            self.cursor + 1
        };
        Window { cursor, phase }
    }
}

/// Decodes rolling 7-bit wire data into 8-bit bytes.
///
/// A trailing wire byte that does not complete a pair is dropped.
pub fn unpack_7to8(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() * GROUP_SIZE / 8 + 1);
    let mut window = Window::default();

    while window.cursor + 1 < data.len() {
        let r = window.phase;
        let low = data[window.cursor].bit_range(r..7);
        let high = data[window.cursor + 1].bit_range(0..r + 1);
        result.push(low | (high << (7 - r)));
        window = window.advance();
    }

    debug!("unpacked {} wire bytes into {} bytes", data.len(), result.len());
    result
}

/// Encodes 8-bit bytes into rolling 7-bit wire data. Inverse of [`unpack_7to8`].
pub fn pack_8to7(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(packed_len(data.len()));
    let mut window = Window::default();

    for &b in data {
        let r = window.phase;
        if result.len() == window.cursor {
            result.push(0);
        }
        result[window.cursor] |= b.bit_range(0..7 - r) << r;
        result.push(b.bit_range(7 - r..8));
        window = window.advance();
    }

    debug!("packed {} bytes into {} wire bytes", data.len(), result.len());
    result
}

/// Number of wire bytes that `count` 8-bit bytes pack into.
pub fn packed_len(count: usize) -> usize {
    let tail = count % GROUP_SIZE;
    (count / GROUP_SIZE) * 8 + if tail == 0 { 0 } else { tail + 1 }
}

/// Rolling 7-bit format of SysEx data used by Alesis.
pub trait RollingPacked {
    fn packed(&self) -> Vec<u8>;
    fn unpacked(&self) -> Vec<u8>;
}

impl RollingPacked for [u8] {
    /// Returns these bytes in the rolling 7-bit format.
    fn packed(&self) -> Vec<u8> {
        pack_8to7(self)
    }

    /// Unpacks previously packed wire bytes.
    fn unpacked(&self) -> Vec<u8> {
        unpack_7to8(self)
    }
}
