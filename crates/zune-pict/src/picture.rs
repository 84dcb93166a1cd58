/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use crate::geometry::Rect;
use crate::pixmap::PixMap;

/// A decoded version 2 picture
///
/// Holds the header information together with the pixels of the
/// last direct bits opcode, stored as RGBA with 8 bits per channel.
/// A picture without direct bits has an empty surface.
#[derive(Clone, Debug, Default)]
pub struct Picture {
    pub(crate) frame:     Rect,
    pub(crate) x_ratio:   f64,
    pub(crate) y_ratio:   f64,
    pub(crate) clip_rect: Option<Rect>,
    pub(crate) pixmap:    Option<PixMap>,
    pub(crate) surface:   Vec<u8>,
    pub(crate) width:     usize,
    pub(crate) height:    usize
}

impl Picture {
    /// The nominal bounding box of the picture
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Scale converting horizontal picture coordinates to frame pixels
    pub const fn x_ratio(&self) -> f64 {
        self.x_ratio
    }

    /// Scale converting vertical picture coordinates to frame pixels
    pub const fn y_ratio(&self) -> f64 {
        self.y_ratio
    }

    /// The last clip region bounding box, scaled to frame pixels
    pub const fn clip_rect(&self) -> Option<Rect> {
        self.clip_rect
    }

    /// The PixMap of the last direct bits opcode
    pub fn pixmap(&self) -> Option<&PixMap> {
        self.pixmap.as_ref()
    }

    /// RGBA pixels, `width * height * 4` bytes
    pub fn surface(&self) -> &[u8] {
        &self.surface
    }

    /// Take ownership of the RGBA pixels
    pub fn into_surface(self) -> Vec<u8> {
        self.surface
    }

    /// Length of the surface in bytes
    pub fn size(&self) -> usize {
        self.surface.len()
    }

    /// Width and height of the surface
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn has_surface(&self) -> bool {
        !self.surface.is_empty()
    }
}
