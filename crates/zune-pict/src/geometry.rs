/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! QuickDraw rectangles
//!
//! Neither rect enforces `right >= left` or `bottom >= top`, so widths and
//! heights of malformed data may be zero or negative and callers have to
//! check them.

use zune_core::bit_depth::ByteEndian;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};

use crate::errors::{PictDecodeErrors, ReadContext};

/// An integer rectangle
///
/// Coordinates are 16 bit on disk but kept in an `i32` so that
/// rects built from an origin and a size cannot overflow.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rect {
    pub top:    i32,
    pub left:   i32,
    pub bottom: i32,
    pub right:  i32
}

impl Rect {
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Rect {
        Rect {
            top,
            left,
            bottom,
            right
        }
    }

    /// Build a rect from an origin and a size
    pub const fn from_origin_size(y: i32, x: i32, height: i32, width: i32) -> Rect {
        Rect::new(y, x, y + height, x + width)
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Read a rect stored as four big endian words, `top, left, bottom, right`
    pub fn parse<T: ZByteReaderTrait>(
        stream: &mut ZReader<T>, field: &'static str
    ) -> Result<Rect, PictDecodeErrors> {
        let [top, left, bottom, right] = read_words(stream, field)?;

        Ok(Rect::new(top, left, bottom, right))
    }

    /// Read a rect stored as `y, x, height, width`, as direct bits
    /// opcodes store their source and destination rects
    pub fn parse_origin_size<T: ZByteReaderTrait>(
        stream: &mut ZReader<T>, field: &'static str
    ) -> Result<Rect, PictDecodeErrors> {
        let [y, x, height, width] = read_words(stream, field)?;

        Ok(Rect::from_origin_size(y, x, height, width))
    }
}

fn read_words<T: ZByteReaderTrait>(
    stream: &mut ZReader<T>, field: &'static str
) -> Result<[i32; 4], PictDecodeErrors> {
    let mut words = [0_i16; 4];

    if stream.read_elements(&mut words, ByteEndian::BE).context(field)? != 4 {
        return Err(PictDecodeErrors::TruncatedInput(field));
    }
    Ok(words.map(i32::from))
}

/// A rectangle with 16.16 fixed point coordinates
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedRect {
    pub left:   f64,
    pub top:    f64,
    pub right:  f64,
    pub bottom: f64
}

impl FixedRect {
    /// Read four fixed point numbers, stored `left, top, right, bottom`
    pub fn parse<T: ZByteReaderTrait>(
        stream: &mut ZReader<T>, field: &'static str
    ) -> Result<FixedRect, PictDecodeErrors> {
        let mut values = [0.0; 4];

        if stream.read_fixed(&mut values).context(field)? != 4 {
            return Err(PictDecodeErrors::TruncatedInput(field));
        }
        let [left, top, right, bottom] = values;

        Ok(FixedRect {
            left,
            top,
            right,
            bottom
        })
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}
