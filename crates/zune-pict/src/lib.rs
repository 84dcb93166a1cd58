/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A classic Macintosh QuickDraw picture decoder
//!
//! This crate reads version 2 PICT pictures wrapping a single block of
//! direct pixels, the kind screenshots and clipboard images were stored as,
//! together with the PixMap and color table records they are built from.
//!
//! ## What it supports
//! - Standard and extended version 2 headers
//! - `DirectBitsRect` with 16 bit (pack type 3) and 24/32 bit planar
//!   (pack type 4) pixels, PackBits compressed or not
//! - Clip regions and long comments, the former are reduced to their
//!   bounding box
//!
//! Anything else, vector drawing, text, indexed pixels and QuickTime
//! payloads among them, is reported as an unsupported opcode.
//!
//! Pixels are always returned as RGBA with 8 bits per channel.
//!
//! # Example
//! - Reading a picture
//! ```no_run
//! use zune_core::bytestream::ZCursor;
//! use zune_pict::{PICTDecoder, PictDecodeErrors};
//!
//! fn main() -> Result<(), PictDecodeErrors> {
//!     // the 512 byte file header has to be stripped first
//!     let mut decoder = PICTDecoder::new(ZCursor::new(&[]));
//!     let picture = decoder.decode()?;
//!
//!     let (width, height) = picture.dimensions();
//!     assert_eq!(picture.surface().len(), width * height * 4);
//!     Ok(())
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;
pub extern crate zune_core;

pub use color_table::{ColorSpec, ColorTable, RGBColor};
pub use constants::{Opcode, PackType, PixelFormat};
pub use decoder::{probe_pict, PICTDecoder};
pub use errors::PictDecodeErrors;
pub use geometry::{FixedRect, Rect};
pub use packbits::decode_packbits;
pub use picture::Picture;
pub use pixmap::PixMap;

pub mod color_table;
mod constants;
pub mod decoder;
pub mod errors;
pub mod geometry;
pub mod packbits;
mod picture;
pub mod pixmap;
