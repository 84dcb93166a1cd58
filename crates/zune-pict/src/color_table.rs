/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Indexed color tables (`clut` resources)

use alloc::vec::Vec;

use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::log::trace;

use crate::errors::{PictDecodeErrors, ReadContext};

/// A color with 16 bits per channel
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RGBColor {
    pub red:   u16,
    pub green: u16,
    pub blue:  u16
}

impl RGBColor {
    /// Narrow the color to 8 bits per channel by keeping the high byte
    pub const fn to_rgb8(self) -> [u8; 3] {
        [
            (self.red >> 8) as u8,
            (self.green >> 8) as u8,
            (self.blue >> 8) as u8
        ]
    }
}

/// A single color table entry
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ColorSpec {
    /// The pixel value this entry stands for
    pub value: u16,
    pub rgb:   RGBColor
}

/// A parsed color table
///
/// `size` holds the entry count minus one, exactly as stored,
/// `entries` always holds `size + 1` items in file order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColorTable {
    pub seed:    u32,
    pub flags:   u16,
    pub size:    u16,
    pub entries: Vec<ColorSpec>
}

impl ColorTable {
    /// Parse a color table from the current position of `stream`
    ///
    /// # Example
    /// ```
    /// use zune_core::bytestream::{ZCursor, ZReader};
    /// use zune_pict::ColorTable;
    ///
    /// // seed, flags, size = 0, then one entry: black
    /// let data = [0_u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    /// let table = ColorTable::parse(&mut ZReader::new(ZCursor::new(&data))).unwrap();
    /// assert_eq!(table.entries.len(), 1);
    /// ```
    pub fn parse<T: ZByteReaderTrait>(
        stream: &mut ZReader<T>
    ) -> Result<ColorTable, PictDecodeErrors> {
        let seed = stream.get_u32_be_err().context("color table seed")?;
        let flags = stream.get_u16_be_err().context("color table flags")?;
        let size = stream.get_u16_be_err().context("color table size")?;

        trace!("Color table seed: {seed:#010x}, flags: {flags:#06x}, entries: {}", usize::from(size) + 1);

        let entries = (0..=size)
            .map(|_| ColorSpec::parse(stream))
            .collect::<Result<Vec<ColorSpec>, PictDecodeErrors>>()?;

        Ok(ColorTable {
            seed,
            flags,
            size,
            entries
        })
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry stored in slot `index`
    pub fn get(&self, index: usize) -> Option<&ColorSpec> {
        self.entries.get(index)
    }
}

impl ColorSpec {
    fn parse<T: ZByteReaderTrait>(stream: &mut ZReader<T>) -> Result<ColorSpec, PictDecodeErrors> {
        let value = stream
            .get_u16_be_err()
            .context("color table entry (pixel value)")?;
        let red = stream
            .get_u16_be_err()
            .context("color table entry (red value)")?;
        let green = stream
            .get_u16_be_err()
            .context("color table entry (green value)")?;
        let blue = stream
            .get_u16_be_err()
            .context("color table entry (blue value)")?;

        Ok(ColorSpec {
            value,
            rgb: RGBColor { red, green, blue }
        })
    }
}
