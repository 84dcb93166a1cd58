/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use crate::bit_depth::ByteEndian;
use crate::bytestream::ZByteReaderTrait;

pub(crate) mod zcursor;

/// Enumeration of possible methods to seek within an I/O object.
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library but
/// it's here to allow this to work in no-std crates
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum ZSeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset relative to the last byte of the object,
    /// i.e the new position is `size - 1 - offset`.
    ///
    /// This is one less than what [SeekFrom::End](std::io::SeekFrom::End)
    /// would give, and is kept that way since resource readers depend on it.
    End(i64),

    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of an object, the position is then
    /// clamped to the end, but it's an error to seek before byte 0.
    Current(i64)
}

pub enum ZByteIoError {
    TryFromIntError(core::num::TryFromIntError),
    // requested, read
    NotEnoughBytes(usize, usize),
    Generic(&'static str),
    SeekError(&'static str)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
            ZByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

impl From<core::num::TryFromIntError> for ZByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ZByteIoError::TryFromIntError(value)
    }
}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// A fixed size value that can be pulled out of a byte stream
/// by [`ZReader::read_elements`].
///
/// Multi-byte elements honour the [`ByteEndian`] passed to the read.
pub trait ReadableElement: Copy {
    /// Size of a single element in bytes
    const SIZE: usize;

    /// Build the element from exactly `SIZE` bytes
    fn from_bytes(bytes: &[u8], endian: ByteEndian) -> Self;
}

macro_rules! readable_element {
    ($($int_type:tt),*) => {
        $(
            impl ReadableElement for $int_type {
                const SIZE: usize = core::mem::size_of::<$int_type>();

                #[inline(always)]
                fn from_bytes(bytes: &[u8], endian: ByteEndian) -> Self {
                    let mut space = [0; core::mem::size_of::<$int_type>()];
                    space.copy_from_slice(&bytes[..Self::SIZE]);

                    match endian {
                        ByteEndian::BE => $int_type::from_be_bytes(space),
                        ByteEndian::LE => $int_type::from_le_bytes(space)
                    }
                }
            }
        )*
    };
}

readable_element!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Number of fractional bits in a QuickDraw `Fixed` value
const FIXED_SHIFT: u32 = 16;

pub struct ZReader<T: ZByteReaderTrait> {
    inner: T
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<u64, ZByteIoError> {
        let num = i64::try_from(num)?;
        self.inner.z_seek(ZSeekFrom::Current(num))
    }

    #[inline(always)]
    pub fn seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        self.inner.z_seek(from)
    }

    #[inline]
    pub fn set_position(&mut self, position: usize) -> Result<(), ZByteIoError> {
        self.seek(ZSeekFrom::Start(position as u64))?;

        Ok(())
    }

    /// Round the position up to the next multiple of `alignment`
    ///
    /// QuickDraw opcodes are word aligned, hence PICT readers call this
    /// with `2` before every opcode.
    pub fn align(&mut self, alignment: usize) -> Result<u64, ZByteIoError> {
        let position = self.position()?;
        let remainder = position % (alignment as u64);

        if remainder == 0 {
            return Ok(position);
        }
        self.skip((alignment as u64 - remainder) as usize)
    }

    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ZByteIoError> {
        self.inner.is_eof()
    }

    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, ZByteIoError> {
        self.inner.z_position()
    }

    #[inline(always)]
    pub fn size(&mut self) -> Result<u64, ZByteIoError> {
        self.inner.z_size()
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        self.inner.read_bytes(buf)
    }

    /// Read up to `out.len()` elements of type `E`, converting each
    /// from `endian` byte order.
    ///
    /// Reading stops early at end of data, so callers must compare the
    /// returned count against what they asked for. A trailing partial
    /// element is neither counted nor consumed.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of complete elements read
    /// - `Err()`: An error from the underlying source other than running out of bytes
    pub fn read_elements<E: ReadableElement>(
        &mut self, out: &mut [E], endian: ByteEndian
    ) -> Result<usize, ZByteIoError> {
        // largest element is 8 bytes
        let mut space = [0_u8; 8];
        let mut count = 0;

        for item in out.iter_mut() {
            match self.inner.read_exact_bytes(&mut space[..E::SIZE]) {
                Ok(()) => {
                    *item = E::from_bytes(&space[..E::SIZE], endian);
                    count += 1;
                }
                Err(ZByteIoError::NotEnoughBytes(_, _)) => break,
                Err(e) => return Err(e)
            }
        }
        Ok(count)
    }

    /// Read up to `out.len()` big endian 16.16 fixed point numbers,
    /// storing them as floating point values.
    ///
    /// Like [`read_elements`](Self::read_elements), returns the number of values read.
    pub fn read_fixed(&mut self, out: &mut [f64]) -> Result<usize, ZByteIoError> {
        let mut count = 0;

        for item in out.iter_mut() {
            let mut raw = [0_i32];

            if self.read_elements(&mut raw, ByteEndian::BE)? != 1 {
                break;
            }
            *item = fixed_to_f64(raw[0]);
            count += 1;
        }
        Ok(count)
    }

    /// Read a single big endian 16.16 fixed point number
    ///
    /// Returning an error if the underlying buffer cannot support a 4 byte read.
    ///
    /// ```
    /// use zune_core::bytestream::{ZCursor, ZReader};
    ///
    /// let mut reader = ZReader::new(ZCursor::new([0x00_u8, 0x00, 0x80, 0x00]));
    /// assert_eq!(reader.get_fixed_be_err().unwrap(), 0.5);
    /// ```
    pub fn get_fixed_be_err(&mut self) -> Result<f64, ZByteIoError> {
        Ok(fixed_to_f64(self.get_i32_be_err()?))
    }

    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        let mut buf = [0];
        self.inner.read_exact_bytes(&mut buf)?;
        Ok(buf[0])
    }
}

#[inline]
fn fixed_to_f64(value: i32) -> f64 {
    f64::from(value) / f64::from(1_u32 << FIXED_SHIFT)
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$name3:tt,$int_type:tt) => {
        impl<T:ZByteReaderTrait> ZReader<T>
        {
            #[inline(always)]
            fn $name(&mut self, mode: ByteEndian) -> Result<$int_type, ZByteIoError>
            {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                self.inner.read_exact_bytes(&mut space)?;

                match mode {
                    ByteEndian::BE => Ok($int_type::from_be_bytes(space)),
                    ByteEndian::LE => Ok($int_type::from_le_bytes(space))
                }
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name2(&mut self) -> Result<$int_type, ZByteIoError>
            {
                self.$name(ByteEndian::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name3(&mut self) -> Result<$int_type, ZByteIoError>
            {
                self.$name(ByteEndian::LE)
            }
        }
    };
}

get_single_type!(get_u16_inner_or_die, get_u16_be_err, get_u16_le_err, u16);
get_single_type!(get_i16_inner_or_die, get_i16_be_err, get_i16_le_err, i16);
get_single_type!(get_u32_inner_or_die, get_u32_be_err, get_u32_le_err, u32);
get_single_type!(get_i32_inner_or_die, get_i32_be_err, get_i32_le_err, i32);

#[cfg(test)]
mod tests {
    use crate::bit_depth::ByteEndian;
    use crate::bytestream::{ZCursor, ZReader, ZSeekFrom};

    #[test]
    fn test_read_elements_swaps_by_default() {
        let mut reader = ZReader::new(ZCursor::new([0x12_u8, 0x34, 0x56, 0x78]));
        let mut out = [0_u16; 2];

        assert_eq!(reader.read_elements(&mut out, ByteEndian::BE).unwrap(), 2);
        assert_eq!(out, [0x1234, 0x5678]);
    }

    #[test]
    fn test_read_elements_opt_out_of_swap() {
        let mut reader = ZReader::new(ZCursor::new([0x12_u8, 0x34, 0x56, 0x78]));
        let mut out = [0_u32; 1];

        assert_eq!(reader.read_elements(&mut out, ByteEndian::LE).unwrap(), 1);
        assert_eq!(out[0], 0x7856_3412);
    }

    #[test]
    fn test_read_elements_stops_early() {
        let mut reader = ZReader::new(ZCursor::new([0_u8, 1, 0, 2, 0]));
        let mut out = [0_i16; 4];

        assert_eq!(reader.read_elements(&mut out, ByteEndian::BE).unwrap(), 2);
        assert_eq!(&out[..2], &[1, 2]);
        // the dangling byte stays unread
        assert_eq!(reader.position().unwrap(), 4);
    }

    #[test]
    fn test_read_fixed() {
        let mut reader = ZReader::new(ZCursor::new([
            0x00_u8, 0x01, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x48, 0x00, 0x00
        ]));
        let mut out = [0.0; 3];

        assert_eq!(reader.read_fixed(&mut out).unwrap(), 3);
        assert_eq!(out, [1.0, 0.5, 72.0]);
    }

    #[test]
    fn test_read_fixed_negative() {
        let mut reader = ZReader::new(ZCursor::new([0xFF_u8, 0xFF, 0x00, 0x00]));
        assert_eq!(reader.get_fixed_be_err().unwrap(), -1.0);
    }

    #[test]
    fn test_align() {
        let mut reader = ZReader::new(ZCursor::new([0_u8; 8]));
        reader.skip(3).unwrap();
        assert_eq!(reader.align(2).unwrap(), 4);
        // already aligned, nothing moves
        assert_eq!(reader.align(2).unwrap(), 4);
    }

    #[test]
    fn test_seek_from_end_is_relative_to_last_byte() {
        let mut reader = ZReader::new(ZCursor::new([0_u8; 10]));
        assert_eq!(reader.seek(ZSeekFrom::End(0)).unwrap(), 9);
        assert_eq!(reader.seek(ZSeekFrom::End(4)).unwrap(), 5);
    }
}
