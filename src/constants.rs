//! Grid constants and the H3 index bit layout.

// H3 grid system constants

/// Maximum H3 resolution; H3 has 16 resolutions, numbered 0 through 15.
pub const MAX_H3_RES: i32 = 15;
/// The number of H3 base cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// The number of pentagons per resolution.
pub const NUM_PENTAGONS: i32 = 12;
/// Aperture of the hierarchy: every hexagon has seven children.
pub const APERTURE: i64 = 7;

/// Number of faces (edges) of a hexagonal cell. Faces are numbered 1 through 6.
pub const NUM_HEX_FACES: u8 = 6;

// H3 index bit layout constants

/// The bit offset of the mode in an H3 index.
pub const H3_MODE_OFFSET: u8 = 59;
/// The bit offset of the base cell in an H3 index.
pub const H3_BC_OFFSET: u8 = 45;
/// The bit offset of the resolution in an H3 index.
pub const H3_RES_OFFSET: u8 = 52;
/// The bit offset of the reserved bits in an H3 index.
pub const H3_RESERVED_OFFSET: u8 = 56;
/// The number of bits in a single H3 resolution digit.
pub const H3_PER_DIGIT_OFFSET: u8 = 3;

// Masks for H3 index manipulation
/// 1 in the highest bit, 0's everywhere else.
pub const H3_HIGH_BIT_MASK: u64 = 1u64 << 63;
/// 1's in the 4 mode bits, 0's everywhere else.
pub const H3_MODE_MASK: u64 = 0b1111u64 << H3_MODE_OFFSET;
/// 0's in the 4 mode bits, 1's everywhere else.
pub const H3_MODE_MASK_NEGATIVE: u64 = !H3_MODE_MASK;
/// 1's in the 7 base cell bits, 0's everywhere else.
pub const H3_BC_MASK: u64 = 0b111_1111u64 << H3_BC_OFFSET;
/// 0's in the 7 base cell bits, 1's everywhere else.
pub const H3_BC_MASK_NEGATIVE: u64 = !H3_BC_MASK;
/// 1's in the 4 resolution bits, 0's everywhere else.
pub const H3_RES_MASK: u64 = 0b1111u64 << H3_RES_OFFSET;
/// 0's in the 4 resolution bits, 1's everywhere else.
pub const H3_RES_MASK_NEGATIVE: u64 = !H3_RES_MASK;
/// 1's in the 3 reserved bits, 0's everywhere else.
pub const H3_RESERVED_MASK: u64 = 0b111u64 << H3_RESERVED_OFFSET;
/// 1's in the 3 bits of a single H3 digit.
pub const H3_DIGIT_MASK: u64 = 0b111u64;
/// 1's in all 45 digit bits.
pub const H3_DIGITS_MASK: u64 = (1u64 << 45) - 1;

/// Mode for H3 cell indexes.
pub const H3_CELL_MODE: u8 = 1;

/// H3 index with mode 0, res 0, base cell 0, and 7 for all index digits.
/// Used to initialize the creation of an H3 cell index.
pub const H3_INIT: u64 = H3_DIGITS_MASK;
