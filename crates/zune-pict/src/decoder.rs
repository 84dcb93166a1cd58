/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A version 2 PICT reader.
//!
//! A PICT is a stream of QuickDraw drawing opcodes. We only understand the
//! handful of opcodes a picture wrapping a single direct bits image needs,
//! the header, clip regions, comments and `DirectBitsRect` itself, and
//! reconstruct the pixels of the latter as RGBA.
//!
//! Opcodes whose payload we don't know can't be skipped since their length
//! depends on the opcode, so they stop decoding with an error.
use alloc::vec;
use alloc::vec::Vec;

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::constants::{
    Opcode, PackType, EXTENDED_HEADER_VERSION, PACK_BITS_THRESHOLD, PICT_SIZE_FIELD_LEN,
    PICT_V2_MAGIC, REGION_HEADER_LEN, WIDE_ROW_BYTES
};
use crate::errors::{PictDecodeErrors, ReadContext};
use crate::geometry::{FixedRect, Rect};
use crate::packbits::decode_packbits;
use crate::picture::Picture;
use crate::pixmap::PixMap;

/// Probe some bytes to see
/// if they consist of a version 2 PICT
///
/// This expects the picture to start with its size field,
/// i.e without the 512 byte file header.
pub fn probe_pict(bytes: &[u8]) -> bool {
    // skip size  -> 2
    // skip frame -> 8
    let magic = PICT_V2_MAGIC.to_be_bytes();
    let header_op = (Opcode::HeaderOp as u16).to_be_bytes();

    bytes.get(10..14) == Some(&magic[..]) && bytes.get(14..16) == Some(&header_op[..])
}

/// A version 2 PICT decoder.
///
/// # Usage
/// ```no_run
/// use zune_core::bytestream::ZCursor;
/// use zune_pict::PICTDecoder;
///
/// fn main() -> Result<(), zune_pict::PictDecodeErrors> {
///     let mut decoder = PICTDecoder::new(ZCursor::new(b"PICT"));
///     let picture = decoder.decode()?;
///
///     let (w, h) = picture.dimensions();
///     println!("{}x{} pixels, {} bytes", w, h, picture.surface().len());
///     Ok(())
/// }
/// ```
pub struct PICTDecoder<T>
where
    T: ZByteReaderTrait
{
    stream:         ZReader<T>,
    options:        DecoderOptions,
    decoded_header: bool,
    decoded:        bool,
    picture:        Picture
}

impl<T> PICTDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new decoder that reads a version 2 PICT
    /// from `data`
    pub fn new(data: T) -> PICTDecoder<T> {
        Self::new_with_options(data, DecoderOptions::default())
    }

    /// Creates a new decoder with options that influence decoding routines
    ///
    /// # Arguments
    /// - data: Data source
    /// - options: Custom options for the decoder
    pub fn new_with_options(data: T, options: DecoderOptions) -> PICTDecoder<T> {
        PICTDecoder {
            stream: ZReader::new(data),
            options,
            decoded_header: false,
            decoded: false,
            picture: Picture::default()
        }
    }

    /// Decode the picture header
    ///
    /// This reads the frame and works out the ratios that convert picture
    /// coordinates into frame pixels. Both version 2 header layouts are
    /// understood, the standard one with a fixed point bounding rect and
    /// the extended one with resolutions and an integer source rect.
    pub fn decode_headers(&mut self) -> Result<(), PictDecodeErrors> {
        if self.decoded_header {
            return Ok(());
        }
        self.stream.set_position(PICT_SIZE_FIELD_LEN)?;

        let frame = Rect::parse(&mut self.stream, "picture frame")?;

        let magic = self.stream.get_u32_be_err().context("version magic")?;

        if magic != PICT_V2_MAGIC {
            if self.options.get_strict_mode() {
                return Err(PictDecodeErrors::WrongMagicBytes(magic));
            }
            warn!("Expected version 2 magic {PICT_V2_MAGIC:#010x} but found {magic:#010x}, continuing");
        }

        // The header opcode must come first, it only appears once
        let opcode = self.read_opcode()?;

        if opcode != Opcode::HeaderOp as u16 {
            return Err(PictDecodeErrors::UnexpectedOpcode {
                expected: Opcode::HeaderOp as u16,
                found:    opcode
            });
        }

        let version = self.stream.get_u32_be_err().context("header version")?;

        let (x_ratio, y_ratio) = if (version >> 16) != EXTENDED_HEADER_VERSION {
            let bounds = FixedRect::parse(&mut self.stream, "fixed point bounding rect")?;

            trace!("Standard header, bounds: {:?}", bounds);

            (
                f64::from(frame.width()) / bounds.width(),
                f64::from(frame.height()) / bounds.height()
            )
        } else {
            // horizontal and vertical resolution
            self.stream.skip(8)?;

            let source = Rect::parse(&mut self.stream, "extended header source rect")?;

            trace!("Extended header, source rect: {:?}", source);

            (
                f64::from(frame.width()) / f64::from(source.width()),
                f64::from(frame.height()) / f64::from(source.height())
            )
        };

        if !is_valid_ratio(x_ratio) || !is_valid_ratio(y_ratio) {
            return Err(PictDecodeErrors::InvalidHeader(
                "content ratio is not a positive number"
            ));
        }
        // reserved
        self.stream.skip(4)?;

        trace!("Picture frame: {:?}", frame);
        trace!("Picture ratios: {x_ratio}x{y_ratio}");

        self.picture.frame = frame;
        self.picture.x_ratio = x_ratio;
        self.picture.y_ratio = y_ratio;
        self.decoded_header = true;

        Ok(())
    }

    /// Decode the picture
    ///
    /// Runs the opcode stream until its end opcode or the end of data,
    /// whichever comes first.
    ///
    /// The decoder is single use, a second call returns an error.
    pub fn decode(&mut self) -> Result<Picture, PictDecodeErrors> {
        if self.decoded {
            return Err(PictDecodeErrors::Generic("Picture already decoded"));
        }
        self.decode_headers()?;
        self.decoded = true;

        while !self.stream.eof()? {
            let opcode = self.read_opcode()?;

            trace!("Opcode: {opcode:#06x}");

            match Opcode::from_int(opcode) {
                Some(Opcode::OpEndPic) => break,
                Some(Opcode::ClipRegion) => self.read_clip_region()?,
                Some(Opcode::LongComment) => self.read_long_comment()?,
                Some(Opcode::DirectBitsRect) => self.read_direct_bits_rect()?,
                Some(Opcode::Nop | Opcode::DefHilite | Opcode::HeaderOp) => {}
                None => return Err(PictDecodeErrors::UnsupportedOpcode(opcode))
            }
        }

        Ok(core::mem::take(&mut self.picture))
    }

    /// Opcodes always start at an even offset
    fn read_opcode(&mut self) -> Result<u16, PictDecodeErrors> {
        self.stream.align(2)?;
        self.stream.get_u16_be_err().context("opcode")
    }

    fn read_clip_region(&mut self) -> Result<(), PictDecodeErrors> {
        let size = self.stream.get_u16_be_err().context("clip region size")?;
        let rect = Rect::parse(&mut self.stream, "clip region rect")?;

        let (x_ratio, y_ratio) = (self.picture.x_ratio, self.picture.y_ratio);

        let clip_rect = Rect::new(
            scale(rect.top, y_ratio),
            scale(rect.left, x_ratio),
            scale(rect.bottom, y_ratio),
            scale(rect.right, x_ratio)
        );
        // whatever follows the bounding rect is point data, two words per point
        let points = usize::from(size.saturating_sub(REGION_HEADER_LEN)) / 4;
        self.stream.skip(points * 4)?;

        trace!("Clip rect: {:?}", clip_rect);

        self.picture.clip_rect = Some(clip_rect);

        Ok(())
    }

    fn read_long_comment(&mut self) -> Result<(), PictDecodeErrors> {
        // comment kind
        self.stream.skip(2)?;

        let length = self.stream.get_u16_be_err().context("long comment length")?;
        self.stream.skip(usize::from(length))?;

        Ok(())
    }

    fn read_direct_bits_rect(&mut self) -> Result<(), PictDecodeErrors> {
        let pixmap = PixMap::parse(&mut self.stream)?;

        let source_rect = Rect::parse_origin_size(&mut self.stream, "direct bits source rect")?;
        // only the source rect decides what is read
        let _destination_rect =
            Rect::parse_origin_size(&mut self.stream, "direct bits destination rect")?;
        // transfer mode
        self.stream.skip(2)?;

        trace!("Direct bits source: {:?}", source_rect);
        trace!("Direct bits destination: {:?}", _destination_rect);

        let pack_type = pixmap
            .packing()
            .ok_or(PictDecodeErrors::UnsupportedPixelFormat(pixmap.pack_type))?;

        let (width, height) = (source_rect.width(), source_rect.height());

        if width < 0 || height < 0 {
            return Err(PictDecodeErrors::NegativeDimensions(width, height));
        }
        let (width, height) = (width as usize, height as usize);

        if width > self.options.get_max_width() {
            return Err(PictDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PictDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }

        let pixels = self.read_scanlines(&pixmap, pack_type, width, height)?;
        let surface = expand_to_rgba(pack_type, &pixels);

        self.picture.surface = surface;
        self.picture.width = width;
        self.picture.height = height;
        self.picture.pixmap = Some(pixmap);

        Ok(())
    }

    /// Read `height` scanlines, returning one packed `u32` per pixel
    ///
    /// 16 bit pixels keep their word as is, planar pixels become `0xAARRGGBB`.
    fn read_scanlines(
        &mut self, pixmap: &PixMap, pack_type: PackType, width: usize, height: usize
    ) -> Result<Vec<u32>, PictDecodeErrors> {
        let row_bytes = usize::from(pixmap.row_bytes);
        // planes are laid one after the other, each as wide as the bounds
        let plane_width = pixmap.bounds.width().max(0) as usize;
        let planes = if pixmap.cmp_count == 3 { 3 } else { 4 };

        // bytes the pixel conversion reads, shorter rows are zero padded
        let needed = match pack_type {
            PackType::RGB555 => 2 * width,
            PackType::Planar => (planes - 1) * plane_width + width
        };

        // smallest a stored row can be, raw bytes or the packed length prefix
        let min_row_bytes = if row_bytes <= PACK_BITS_THRESHOLD {
            row_bytes
        } else if row_bytes > WIDE_ROW_BYTES {
            2
        } else {
            1
        };

        if width > 0 && height > 0 {
            if min_row_bytes == 0 {
                return Err(PictDecodeErrors::TruncatedInput(
                    "scanline pixel data, rows hold no bytes"
                ));
            }
            let remaining = self.stream.size()?.saturating_sub(self.stream.position()?);

            if (height as u64).saturating_mul(min_row_bytes as u64) > remaining {
                return Err(PictDecodeErrors::TruncatedInput(
                    "scanline pixel data, too few bytes for all rows"
                ));
            }
        }

        let mut packed = Vec::new();
        let mut raw = Vec::new();
        let mut pixels = Vec::with_capacity(width * height);

        for _ in 0..height {
            if row_bytes <= PACK_BITS_THRESHOLD {
                // too small to be worth compressing
                raw.clear();
                raw.resize(row_bytes, 0);
                self.stream
                    .read_exact_bytes(&mut raw)
                    .context("scanline pixel data")?;
            } else {
                let packed_length = if row_bytes > WIDE_ROW_BYTES {
                    usize::from(self.stream.get_u16_be_err().context("packed scanline length")?)
                } else {
                    usize::from(self.stream.get_u8_err().context("packed scanline length")?)
                };
                packed.resize(packed_length, 0);
                self.stream
                    .read_exact_bytes(&mut packed)
                    .context("packed scanline data")?;

                decode_packbits(&packed, pack_type.element_size(), &mut raw);
            }
            if raw.len() < needed {
                raw.resize(needed, 0);
            }

            match pack_type {
                PackType::RGB555 => {
                    pixels.extend(
                        raw[..2 * width]
                            .chunks_exact(2)
                            .map(|word| u32::from(u16::from_be_bytes([word[0], word[1]])))
                    );
                }
                PackType::Planar if planes == 3 => {
                    let (red, green, blue) = (0, plane_width, 2 * plane_width);

                    pixels.extend((0..width).map(|x| {
                        0xFF00_0000
                            | u32::from(raw[red + x]) << 16
                            | u32::from(raw[green + x]) << 8
                            | u32::from(raw[blue + x])
                    }));
                }
                PackType::Planar => {
                    let (alpha, red, green, blue) =
                        (0, plane_width, 2 * plane_width, 3 * plane_width);

                    pixels.extend((0..width).map(|x| {
                        u32::from(raw[alpha + x]) << 24
                            | u32::from(raw[red + x]) << 16
                            | u32::from(raw[green + x]) << 8
                            | u32::from(raw[blue + x])
                    }));
                }
            }
        }
        Ok(pixels)
    }

    /// Get the picture frame or None if the
    /// headers haven't been decoded
    pub const fn frame(&self) -> Option<Rect> {
        if self.decoded_header {
            return Some(self.picture.frame);
        }
        None
    }

    /// Get the horizontal and vertical content ratios or None
    /// if the headers haven't been decoded
    pub const fn ratios(&self) -> Option<(f64, f64)> {
        if self.decoded_header {
            return Some((self.picture.x_ratio, self.picture.y_ratio));
        }
        None
    }

    /// Get the frame width and height respectively or None if the
    /// headers haven't been decoded
    ///
    /// The pixels of a direct bits opcode may cover a different area,
    /// see [`Picture::dimensions`]
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.frame().map(|frame| {
            (
                frame.width().max(0) as usize,
                frame.height().max(0) as usize
            )
        })
    }

    /// Get the colorspace of decoded pixels
    ///
    /// This is always RGBA
    pub const fn colorspace(&self) -> ColorSpace {
        ColorSpace::RGBA
    }

    /// Get the bit depth of decoded pixels
    ///
    /// This is always eight bits
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Get the options this decoder was created with
    pub const fn options(&self) -> &DecoderOptions {
        &self.options
    }
}

fn is_valid_ratio(ratio: f64) -> bool {
    ratio.is_finite() && ratio > 0.0
}

fn scale(coordinate: i32, ratio: f64) -> i32 {
    (f64::from(coordinate) / ratio) as i32
}

/// Turn packed pixels into RGBA bytes
fn expand_to_rgba(pack_type: PackType, pixels: &[u32]) -> Vec<u8> {
    let mut output = vec![0; pixels.len() * 4];

    match pack_type {
        PackType::RGB555 => {
            for (pixel, rgba) in pixels.iter().zip(output.chunks_exact_mut(4)) {
                rgba[0] = ((pixel & 0x1F) << 3) as u8;
                rgba[1] = (((pixel >> 5) & 0x1F) << 3) as u8;
                rgba[2] = (((pixel >> 10) & 0x1F) << 3) as u8;
                rgba[3] = u8::MAX;
            }
        }
        PackType::Planar => {
            for (pixel, rgba) in pixels.iter().zip(output.chunks_exact_mut(4)) {
                let [a, r, g, b] = pixel.to_be_bytes();
                rgba.copy_from_slice(&[r, g, b, a]);
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use crate::constants::PackType;
    use crate::decoder::{expand_to_rgba, probe_pict};

    #[test]
    fn test_expand_rgb555() {
        // red field is the low five bits
        let rgba = expand_to_rgba(PackType::RGB555, &[0x001F, 0x03E0, 0x7C00]);

        assert_eq!(
            rgba,
            [0xF8, 0, 0, 0xFF, 0, 0xF8, 0, 0xFF, 0, 0, 0xF8, 0xFF]
        );
    }

    #[test]
    fn test_expand_planar() {
        let rgba = expand_to_rgba(PackType::Planar, &[0x80112233]);
        assert_eq!(rgba, [0x11, 0x22, 0x33, 0x80]);
    }

    #[test]
    fn test_probe() {
        let mut data = [0_u8; 16];
        data[10..14].copy_from_slice(&[0x00, 0x11, 0x02, 0xFF]);
        data[14..16].copy_from_slice(&[0x0C, 0x00]);

        assert!(probe_pict(&data));
        assert!(!probe_pict(&data[..15]));

        data[11] = 0x12;
        assert!(!probe_pict(&data));
    }
}
