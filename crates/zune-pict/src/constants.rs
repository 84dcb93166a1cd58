/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms)]

/// Version opcode (`0x0011`) followed by version 2 (`0x02FF`)
pub const PICT_V2_MAGIC: u32 = 0x0011_02FF;

/// The legacy 16 bit picture size precedes the frame, it is never trusted
pub const PICT_SIZE_FIELD_LEN: usize = 2;

/// High word of the extended (`HeaderOp`) version 2 header
pub const EXTENDED_HEADER_VERSION: u32 = 0xFFFE;

/// Rows with at most this many bytes are stored without PackBits
pub const PACK_BITS_THRESHOLD: usize = 4;

/// Rows wider than this store their packed length in two bytes instead of one
pub const WIDE_ROW_BYTES: usize = 250;

/// Size of a region with only a bounding rect, point data follows it
pub const REGION_HEADER_LEN: u16 = 10;

/// The subset of PICT opcodes needed to read a version 2 picture
/// holding direct bits.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u16)]
pub enum Opcode {
    Nop = 0x0000,
    ClipRegion = 0x0001,
    DefHilite = 0x001E,
    DirectBitsRect = 0x009A,
    LongComment = 0x00A1,
    OpEndPic = 0x00FF,
    HeaderOp = 0x0C00
}

impl Opcode {
    pub fn from_int(int: u16) -> Option<Opcode> {
        match int {
            0x0000 => Some(Self::Nop),
            0x0001 => Some(Self::ClipRegion),
            0x001E => Some(Self::DefHilite),
            0x009A => Some(Self::DirectBitsRect),
            0x00A1 => Some(Self::LongComment),
            0x00FF => Some(Self::OpEndPic),
            0x0C00 => Some(Self::HeaderOp),
            _ => None
        }
    }
}

/// How direct pixel data of a PixMap is packed
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PackType {
    /// 16 bit pixels, PackBits runs of words
    RGB555 = 3,
    /// 8 bits per component stored as one plane per component,
    /// PackBits runs of bytes
    Planar = 4
}

impl PackType {
    pub fn from_int(int: i16) -> Option<PackType> {
        match int {
            3 => Some(Self::RGB555),
            4 => Some(Self::Planar),
            _ => None
        }
    }

    /// Size of a single PackBits element for this pack type
    pub const fn element_size(self) -> usize {
        match self {
            Self::RGB555 => 2,
            Self::Planar => 1
        }
    }
}

/// The classic Color QuickDraw pixel formats, keyed by pixel size
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelFormat {
    /// 1 bit indexed
    Monochrome = 0x01,
    /// 2 bit indexed
    Indexed2 = 0x02,
    /// 4 bit indexed
    Indexed4 = 0x04,
    /// 8 bit indexed
    Indexed8 = 0x08,
    /// 16 bit big endian RGB 555
    RGB555 = 0x10,
    /// 24 bit RGB
    RGB24 = 0x18,
    /// 32 bit ARGB
    ARGB32 = 0x20
}

impl PixelFormat {
    pub fn from_pixel_size(int: i16) -> Option<PixelFormat> {
        match int {
            0x01 => Some(Self::Monochrome),
            0x02 => Some(Self::Indexed2),
            0x04 => Some(Self::Indexed4),
            0x08 => Some(Self::Indexed8),
            0x10 => Some(Self::RGB555),
            0x18 => Some(Self::RGB24),
            0x20 => Some(Self::ARGB32),
            _ => None
        }
    }

    pub const fn is_indexed(self) -> bool {
        matches!(
            self,
            Self::Monochrome | Self::Indexed2 | Self::Indexed4 | Self::Indexed8
        )
    }
}
