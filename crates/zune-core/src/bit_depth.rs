/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth and byte order information

/// The image bit depth.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Images with such bit depth use [`u8`] to store
    /// pixels and use the whole range from 0-255.
    ///
    /// All QuickDraw direct pixel formats are widened or
    /// narrowed to this depth on output.
    Eight,
    /// Bit depth information is unknown
    #[default]
    Unknown
}

impl BitDepth {
    /// Get the max value supported by the bit depth
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Eight => (1 << 8) - 1,
            Self::Unknown => 0
        }
    }
}

/// Byte endianness of multi-byte values
///
/// QuickDraw resources are big endian, so readers treat
/// [`ByteEndian::BE`] as the default and swap bytes on
/// little endian hosts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ByteEndian {
    /// Little endian byte-order
    LE,
    /// Big endian byte-order
    #[default]
    BE
}
