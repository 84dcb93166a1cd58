/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader.
//!
//! QuickDraw resources are read through [`ZReader`], which wraps any
//! [`ZByteReaderTrait`] source, [`ZCursor`] being the in-memory one.
//! The reader supports typed element reads with an explicit byte order,
//! 16.16 fixed point reads, seeking and end-of-data checks.
pub use reader::zcursor::ZCursor;
pub use reader::{ReadableElement, ZByteIoError, ZReader, ZSeekFrom};
pub use traits::ZByteReaderTrait;

mod reader;
mod traits;
