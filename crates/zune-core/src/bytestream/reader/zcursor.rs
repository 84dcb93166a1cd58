/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZSeekFrom};

/// An in-memory byte source.
///
/// Wraps anything that can be viewed as a byte slice together with a read
/// position, the position never goes past the end of the slice.
///
/// # Example
/// ```
/// use zune_core::bytestream::{ZCursor, ZReader};
///
/// let mut reader = ZReader::new(ZCursor::new([0x00_u8, 0x11, 0x02, 0xFF]));
/// assert_eq!(reader.get_u32_be_err().unwrap(), 0x001102FF);
/// assert!(reader.eof().unwrap());
/// ```
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }

    /// Return a reference to the wrapped buffer
    pub fn inner(&self) -> &T {
        &self.stream
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.stream.as_ref().len()
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position)
    }

    /// Move to an absolute position, erroring on negative positions and
    /// clamping positions past the end
    fn move_to(&mut self, new_position: i64) -> Result<u64, ZByteIoError> {
        if new_position < 0 {
            return Err(ZByteIoError::SeekError("Cannot seek before the start of the buffer"));
        }
        let new_position = usize::try_from(new_position)?;

        self.position = new_position.min(self.len());

        Ok(self.position as u64)
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let remaining = self.remaining();

        if remaining < buf.len() {
            // not all bytes can be read, leave the position untouched
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), remaining));
        }
        let end = self.position + buf.len();

        buf.copy_from_slice(&self.stream.as_ref()[self.position..end]);
        self.position = end;

        Ok(())
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let bytes_read = buf.len().min(self.remaining());
        let end = self.position + bytes_read;

        buf[..bytes_read].copy_from_slice(&self.stream.as_ref()[self.position..end]);
        self.position = end;

        Ok(bytes_read)
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        match from {
            ZSeekFrom::Start(position) => {
                let position = i64::try_from(position)?;
                self.move_to(position)
            }
            ZSeekFrom::End(offset) => {
                let size = i64::try_from(self.len())?;
                let position = (size - 1)
                    .checked_sub(offset)
                    .ok_or(ZByteIoError::SeekError("Seek position overflowed"))?;
                self.move_to(position)
            }
            ZSeekFrom::Current(offset) => {
                let current = i64::try_from(self.position)?;
                let position = current
                    .checked_add(offset)
                    .ok_or(ZByteIoError::SeekError("Seek position overflowed"))?;
                self.move_to(position)
            }
        }
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ZByteIoError> {
        Ok(self.position >= self.len())
    }

    #[inline(always)]
    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        Ok(self.position as u64)
    }

    #[inline(always)]
    fn z_size(&mut self) -> Result<u64, ZByteIoError> {
        Ok(self.len() as u64)
    }
}
