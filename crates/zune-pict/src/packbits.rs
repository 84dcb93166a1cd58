/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PackBits run length decoding
//!
//! Each run starts with a control byte `n`
//! - `0..=127`: copy the next `n + 1` elements literally
//! - `128..=255`: repeat the next element `257 - n` times
//!
//! An element is one byte for planar pixel data and two bytes for
//! 16 bit pixels. Nothing in the stream says how long the decoded data
//! is, so we make one pass to size the output and a second to fill it.

use alloc::vec::Vec;

/// Decoded length of a run introduced by `control`, in elements
#[inline(always)]
const fn run_length(control: u8) -> usize {
    if control < 128 {
        control as usize + 1
    } else {
        257 - control as usize
    }
}

/// Return how many bytes `packed` decodes to
pub fn packbits_decoded_size(packed: &[u8], element_size: usize) -> usize {
    let mut position = 0;
    let mut size = 0;

    while position < packed.len() {
        let control = packed[position];
        let run = run_length(control) * element_size;

        position += 1;

        if control < 128 {
            position += run;
        } else {
            position += element_size;
        }
        size += run;
    }
    size
}

/// Decode PackBits compressed `packed` data into `out`
///
/// `out` is cleared and resized to the decoded length, its
/// allocation is reused across calls.
///
/// Runs that claim more bytes than `packed` holds are cut short and
/// the rest of their output is left zeroed, the format has no way of
/// telling a truncated stream apart from a valid one.
///
/// # Returns
/// The number of decoded bytes, i.e `out.len()`
pub fn decode_packbits(packed: &[u8], element_size: usize, out: &mut Vec<u8>) -> usize {
    let size = packbits_decoded_size(packed, element_size);

    out.clear();
    out.resize(size, 0);

    if element_size == 0 {
        return 0;
    }

    let mut position = 0;
    let mut out_position = 0;

    while position < packed.len() {
        let control = packed[position];
        let run = run_length(control) * element_size;

        position += 1;

        if control < 128 {
            // literal run
            let available = run.min(packed.len().saturating_sub(position));

            out[out_position..out_position + available]
                .copy_from_slice(&packed[position..position + available]);

            position += run;
        } else {
            // repeated run
            let Some(element) = packed.get(position..position + element_size) else {
                break;
            };
            for chunk in out[out_position..out_position + run].chunks_exact_mut(element_size) {
                chunk.copy_from_slice(element);
            }
            position += element_size;
        }
        out_position += run;
    }
    size
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::packbits::{decode_packbits, packbits_decoded_size};

    #[test]
    fn test_literal_run() {
        let mut out = Vec::new();
        let size = decode_packbits(&[0x02, 0xAA, 0xBB, 0xCC], 1, &mut out);

        assert_eq!(size, 3);
        assert_eq!(out, [0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_repeat_run() {
        let mut out = Vec::new();
        let size = decode_packbits(&[0xFE, 0x7F], 1, &mut out);

        assert_eq!(size, 3);
        assert_eq!(out, [0x7F, 0x7F, 0x7F]);
    }

    #[test]
    fn test_word_runs() {
        // two literal words, then one word repeated 4 times
        let packed = [0x01, 0x12, 0x34, 0x56, 0x78, 0xFD, 0x7F, 0xFF];
        let mut out = Vec::new();

        assert_eq!(packbits_decoded_size(&packed, 2), 12);
        assert_eq!(decode_packbits(&packed, 2, &mut out), 12);
        assert_eq!(
            out,
            [0x12, 0x34, 0x56, 0x78, 0x7F, 0xFF, 0x7F, 0xFF, 0x7F, 0xFF, 0x7F, 0xFF]
        );
    }

    #[test]
    fn test_longest_runs() {
        // 0x7F is a 128 element literal, 0x80 repeats 129 times
        let mut packed = vec![0x7F];
        packed.extend((0..128).map(|x| x as u8));
        packed.extend([0x80, 0x55]);

        let mut out = Vec::new();
        assert_eq!(decode_packbits(&packed, 1, &mut out), 128 + 129);
        assert_eq!(out[127], 127);
        assert!(out[128..].iter().all(|x| *x == 0x55));
    }

    #[test]
    fn test_reuses_buffer() {
        let mut out = vec![9; 32];
        let capacity = out.capacity();

        decode_packbits(&[0xFD, 0x01], 1, &mut out);

        assert_eq!(out, [1, 1, 1, 1]);
        assert_eq!(out.capacity(), capacity);
    }

    #[test]
    fn test_truncated_literal_is_zero_filled() {
        let mut out = Vec::new();
        let size = decode_packbits(&[0x03, 0xAA, 0xBB], 1, &mut out);

        assert_eq!(size, 4);
        assert_eq!(out, [0xAA, 0xBB, 0x00, 0x00]);
    }

    #[test]
    fn test_truncated_word_literal() {
        let mut out = Vec::new();
        let size = decode_packbits(&[0x01, 0x11], 2, &mut out);

        assert_eq!(size, 4);
        assert_eq!(out, [0x11, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_missing_repeat_element() {
        let mut out = Vec::new();
        let size = decode_packbits(&[0xFF], 1, &mut out);

        assert_eq!(size, 2);
        assert_eq!(out, [0x00, 0x00]);
    }
}
