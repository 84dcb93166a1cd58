/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PixMap descriptors
//!
//! A PixMap describes the geometry, depth and packing of a block of pixels.
//! It has no variable length fields, so parsing always consumes 50 bytes.

use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;

use crate::constants::{PackType, PixelFormat};
use crate::errors::{PictDecodeErrors, ReadContext};
use crate::geometry::Rect;

/// The top bit of `row_bytes` flags a PixMap (as opposed to a BitMap),
/// it is not part of the byte count
const ROW_BYTES_MASK: u16 = 0x7FFF;

/// A parsed PixMap descriptor
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PixMap {
    /// Address of the pixels in the original memory image, never used
    pub base_addr:    u32,
    /// Bytes per row with the PixMap flag bit already cleared
    pub row_bytes:    u16,
    pub bounds:       Rect,
    pub version:      i16,
    /// 0 is unpacked, 3 and 4 are the direct formats this crate decodes
    pub pack_type:    i16,
    pub pack_size:    i32,
    /// Horizontal resolution in pixels per inch
    pub h_res:        f64,
    /// Vertical resolution in pixels per inch
    pub v_res:        f64,
    pub pixel_type:   i16,
    /// Bits per pixel
    pub pixel_size:   i16,
    /// Components per pixel, 3 for RGB and 4 for ARGB
    pub cmp_count:    i16,
    /// Bits per component
    pub cmp_size:     i16,
    /// Four character code, informational
    pub pixel_format: u32,
    /// Handle to a color table in the original memory image, never followed
    pub pm_table:     u32,
    /// Handle to extension data in the original memory image, never followed
    pub pm_extension: u32
}

impl PixMap {
    /// Parse a PixMap from the current position of `stream`
    pub fn parse<T: ZByteReaderTrait>(stream: &mut ZReader<T>) -> Result<PixMap, PictDecodeErrors> {
        let base_addr = stream.get_u32_be_err().context("pixmap base address")?;
        let row_bytes = stream.get_u16_be_err().context("pixmap row bytes")? & ROW_BYTES_MASK;
        let bounds = Rect::parse(stream, "pixmap bounds")?;
        let version = stream.get_i16_be_err().context("pixmap version")?;
        let pack_type = stream.get_i16_be_err().context("pixmap pack type")?;
        let pack_size = stream.get_i32_be_err().context("pixmap pack size")?;
        let h_res = stream
            .get_fixed_be_err()
            .context("pixmap horizontal resolution")?;
        let v_res = stream
            .get_fixed_be_err()
            .context("pixmap vertical resolution")?;
        let pixel_type = stream.get_i16_be_err().context("pixmap pixel type")?;
        let pixel_size = stream.get_i16_be_err().context("pixmap pixel size")?;
        let cmp_count = stream.get_i16_be_err().context("pixmap component count")?;
        let cmp_size = stream.get_i16_be_err().context("pixmap component size")?;
        let pixel_format = stream.get_u32_be_err().context("pixmap pixel format")?;
        let pm_table = stream.get_u32_be_err().context("pixmap color table handle")?;
        let pm_extension = stream.get_u32_be_err().context("pixmap extension")?;

        trace!("PixMap bounds: {:?}", bounds);
        trace!("PixMap row bytes: {row_bytes}, pack type: {pack_type}");
        trace!("PixMap pixel size: {pixel_size}, components: {cmp_count}x{cmp_size}");

        Ok(PixMap {
            base_addr,
            row_bytes,
            bounds,
            version,
            pack_type,
            pack_size,
            h_res,
            v_res,
            pixel_type,
            pixel_size,
            cmp_count,
            cmp_size,
            pixel_format,
            pm_table,
            pm_extension
        })
    }

    /// The pack type if it is one this crate can decode
    pub fn packing(&self) -> Option<PackType> {
        PackType::from_int(self.pack_type)
    }

    /// The QuickDraw pixel format implied by the pixel size
    pub fn format(&self) -> Option<PixelFormat> {
        PixelFormat::from_pixel_size(self.pixel_size)
    }

    /// The colorspace pixels are stored in, before conversion to RGBA
    ///
    /// Indexed and unknown layouts report [`ColorSpace::Unknown`]
    pub fn colorspace(&self) -> ColorSpace {
        match self.format() {
            Some(format) if format.is_indexed() => ColorSpace::Unknown,
            Some(_) if self.cmp_count == 3 => ColorSpace::RGB,
            Some(_) if self.cmp_count == 4 => ColorSpace::ARGB,
            _ => ColorSpace::Unknown
        }
    }
}
