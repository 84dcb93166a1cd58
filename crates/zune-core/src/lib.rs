/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides a set of core routines shared
//! by the decoders under the `zune` umbrella
//!
//! It currently contains
//!
//! - A bytestream reader with endian aware, fixed point and element-counted reads
//! - Colorspace and bit depth information shared by images
//! - Image decoder options
//! - Logging macros that compile to nothing unless the `log` feature is enabled
//!
//! This library is `#[no_std]` with `alloc` feature needed for defining `Vec`
//! which we need for storing decoded  bytes.
//!
//!
//! # Features
//!  - `std`: Enables std only facilities, e.g `std::error::Error` implementations.
//!
//!  - `log`: Routes the [`log`] module macros to the `log` crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
pub mod serde;
