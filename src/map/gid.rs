//! Global tile id decoding.
//!
//! A gid packs a 1-based global tile id with mirroring flags in its top
//! bits: bit 31 is horizontal flip, bit 30 vertical flip. Gid 0 is an empty
//! cell. Bit 29 (diagonal flip in common map formats) is not supported: the
//! decoder reports it but never clears it out of the index, so callers can
//! refuse the cell instead of drawing the wrong tile.

/// Horizontal-flip flag (bit 31).
pub const FLIP_HORIZONTAL: u32 = 0x8000_0000;
/// Vertical-flip flag (bit 30).
pub const FLIP_VERTICAL: u32 = 0x4000_0000;
/// Diagonal-flip flag (bit 29). Recognized, unsupported.
pub const FLIP_DIAGONAL: u32 = 0x2000_0000;

const FLAG_MASK: u32 = FLIP_HORIZONTAL | FLIP_VERTICAL;

/// A gid split into its tile index and mirroring flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedGid {
    /// 1-based global tile id with the supported flags stripped. Zero for
    /// an empty cell. Still carries bit 29 when `diagonal` is set.
    pub index: u32,
    pub flip_h: bool,
    pub flip_v: bool,
    /// True when the unsupported diagonal bit is present; the cell must be
    /// skipped rather than drawn with a wrong index.
    pub diagonal: bool,
}

/// Split a raw gid into index and flip flags.
pub fn decode(gid: u32) -> DecodedGid {
    DecodedGid {
        index: gid & !FLAG_MASK,
        flip_h: gid & FLIP_HORIZONTAL != 0,
        flip_v: gid & FLIP_VERTICAL != 0,
        diagonal: gid & FLIP_DIAGONAL != 0,
    }
}
