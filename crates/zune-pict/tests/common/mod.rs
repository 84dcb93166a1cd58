/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Builders for small in-memory pictures
#![allow(dead_code)]

pub const END_OF_PICTURE: u16 = 0x00FF;

/// Big endian byte writer
#[derive(Default)]
pub struct PictWriter {
    bytes: Vec<u8>
}

impl PictWriter {
    pub fn new() -> PictWriter {
        PictWriter::default()
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.bytes.push(value);
        self
    }

    pub fn u16(&mut self, value: u16) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn i16(&mut self, value: i16) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u32(&mut self, value: u32) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn i32(&mut self, value: i32) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// A 16.16 fixed point number
    pub fn fixed(&mut self, value: f64) -> &mut Self {
        self.i32((value * 65536.0) as i32)
    }

    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Pad to an even offset and write `opcode`
    pub fn opcode(&mut self, opcode: u16) -> &mut Self {
        if self.bytes.len() % 2 == 1 {
            self.bytes.push(0);
        }
        self.u16(opcode)
    }

    /// Write four words, as both rect layouts are stored
    pub fn words(&mut self, words: [i16; 4]) -> &mut Self {
        for word in words {
            self.i16(word);
        }
        self
    }

    pub fn finish(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Size field, frame and magic, up to and including the header opcode
fn preamble(frame: [i16; 4]) -> PictWriter {
    let mut writer = PictWriter::new();

    writer
        .u16(0)
        .words(frame)
        .u32(0x0011_02FF)
        .opcode(0x0C00);
    writer
}

/// A standard version 2 header
///
/// `bounds` is the fixed point bounding rect, `left, top, right, bottom`
pub fn standard_header(frame: [i16; 4], bounds: [f64; 4]) -> PictWriter {
    let mut writer = preamble(frame);

    writer.u32(0xFFFF_FFFF);
    for value in bounds {
        writer.fixed(value);
    }
    writer.u32(0);
    writer
}

/// An extended version 2 header with a 72 dpi resolution
///
/// `source` is stored `top, left, bottom, right`
pub fn extended_header(frame: [i16; 4], source: [i16; 4]) -> PictWriter {
    let mut writer = preamble(frame);

    writer
        .u32(0xFFFE_0000)
        .fixed(72.0)
        .fixed(72.0)
        .words(source)
        .u32(0);
    writer
}

/// A header whose content is drawn 1:1 into `frame`
pub fn unscaled_header(frame: [i16; 4]) -> PictWriter {
    let [top, left, bottom, right] = frame.map(f64::from);
    standard_header(frame, [left, top, right, bottom])
}

/// The PixMap fields tests care about
#[derive(Copy, Clone)]
pub struct PixMapFields {
    pub row_bytes:  u16,
    /// `top, left, bottom, right`
    pub bounds:     [i16; 4],
    pub pack_type:  i16,
    pub pixel_size: i16,
    pub cmp_count:  i16,
    pub cmp_size:   i16
}

impl PixMapFields {
    /// 16 bit pixels, PackBits runs of words
    pub fn rgb555(width: i16, height: i16, row_bytes: u16) -> PixMapFields {
        PixMapFields {
            row_bytes,
            bounds: [0, 0, height, width],
            pack_type: 3,
            pixel_size: 16,
            cmp_count: 3,
            cmp_size: 5
        }
    }

    /// 8 bit planes, PackBits runs of bytes
    pub fn planar(width: i16, height: i16, components: i16) -> PixMapFields {
        PixMapFields {
            row_bytes: (width * components) as u16,
            bounds: [0, 0, height, width],
            pack_type: 4,
            pixel_size: 32,
            cmp_count: components,
            cmp_size: 8
        }
    }
}

/// Write the 50 byte PixMap record
pub fn pixmap(writer: &mut PictWriter, fields: PixMapFields) {
    writer
        .u32(0x0000_00FF)
        .u16(fields.row_bytes | 0x8000)
        .words(fields.bounds)
        .i16(0)
        .i16(fields.pack_type)
        .i32(0)
        .fixed(72.0)
        .fixed(72.0)
        .i16(16)
        .i16(fields.pixel_size)
        .i16(fields.cmp_count)
        .i16(fields.cmp_size)
        .u32(0)
        .u32(0)
        .u32(0);
}

/// Write a direct bits opcode up to its first scanline
///
/// Source and destination both cover the PixMap bounds.
pub fn direct_bits(writer: &mut PictWriter, fields: PixMapFields) {
    let [top, left, bottom, right] = fields.bounds;
    let origin_size = [top, left, bottom - top, right - left];

    writer.opcode(0x009A);
    pixmap(writer, fields);
    writer.words(origin_size).words(origin_size).u16(0);
}
