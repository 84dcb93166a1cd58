/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_core::bytestream::ZByteIoError;

use crate::constants::PICT_V2_MAGIC;

/// Errors that can occur while decoding QuickDraw resources
///
/// Any of these aborts the decode, no partially decoded
/// color table, pixmap or picture is handed out.
#[non_exhaustive]
pub enum PictDecodeErrors {
    /// A field could not be fully read before the data ran out,
    /// the argument names the field
    TruncatedInput(&'static str),
    /// The picture header is malformed, e.g a non positive resolution ratio
    InvalidHeader(&'static str),
    /// The version 2 magic did not match, only raised in strict mode
    WrongMagicBytes(u32),
    /// A specific opcode was required but another one was found
    UnexpectedOpcode { expected: u16, found: u16 },
    /// An opcode whose payload we do not know how to skip
    UnsupportedOpcode(u16),
    /// A pixmap pack type other than 3 or 4
    UnsupportedPixelFormat(i16),
    /// The direct bits source rect has a negative width or height
    NegativeDimensions(i32, i32),
    /// Too large dimensions for a given width or height,
    /// supported then found
    LargeDimensions(usize, usize),
    /// Generic message
    Generic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for PictDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TruncatedInput(field) => {
                writeln!(f, "Truncated input, could not read the {field}")
            }
            Self::InvalidHeader(reason) => {
                writeln!(f, "Invalid PICT header: {reason}")
            }
            Self::WrongMagicBytes(bytes) => {
                writeln!(
                    f,
                    "Expected {:?} but found {:?}, not a version 2 PICT",
                    PICT_V2_MAGIC.to_be_bytes(),
                    bytes.to_be_bytes()
                )
            }
            Self::UnexpectedOpcode { expected, found } => {
                writeln!(f, "Expected opcode {expected:#06x} but found {found:#06x}")
            }
            Self::UnsupportedOpcode(opcode) => {
                writeln!(f, "Unsupported PICT opcode {opcode:#06x}")
            }
            Self::UnsupportedPixelFormat(pack_type) => {
                writeln!(
                    f,
                    "Unsupported PixMap pack type {pack_type}, supported pack types are 3 and 4"
                )
            }
            Self::NegativeDimensions(width, height) => {
                writeln!(f, "Negative image dimensions {width}x{height}")
            }
            Self::LargeDimensions(supported, found) => {
                writeln!(
                    f,
                    "Too large dimensions, supported {supported} but found {found}"
                )
            }
            Self::Generic(reason) => {
                writeln!(f, "{reason}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err:?}")
            }
        }
    }
}

impl Display for PictDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PictDecodeErrors {}

impl From<&'static str> for PictDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

impl From<ZByteIoError> for PictDecodeErrors {
    fn from(r: ZByteIoError) -> Self {
        match r {
            ZByteIoError::NotEnoughBytes(_, _) => Self::TruncatedInput("data, unexpected end of input"),
            r => Self::IoErrors(r)
        }
    }
}

/// Attach the name of the field being read to a short read
pub(crate) trait ReadContext<V> {
    fn context(self, field: &'static str) -> Result<V, PictDecodeErrors>;
}

impl<V> ReadContext<V> for Result<V, ZByteIoError> {
    #[inline]
    fn context(self, field: &'static str) -> Result<V, PictDecodeErrors> {
        self.map_err(|e| match e {
            ZByteIoError::NotEnoughBytes(_, _) => PictDecodeErrors::TruncatedInput(field),
            e => PictDecodeErrors::IoErrors(e)
        })
    }
}
