/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct for which all implemented
//! decoders get shared options for decoding
//!
//! All supported options are put into one DecoderOptions to allow for global configurations
//! options i.e the same  `DecoderOption` can be reused for all other decoders
//!
pub use decoder::DecoderOptions;

mod decoder;
