#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_pict::zune_core::bytestream::ZCursor;
    use zune_pict::zune_core::options::DecoderOptions;

    // keep allocations of hostile inputs small
    let options = DecoderOptions::default()
        .set_max_width(1024)
        .set_max_height(1024);

    let mut decoder = zune_pict::PICTDecoder::new_with_options(ZCursor::new(data), options);
    let _ = decoder.decode();

    let _ = zune_pict::ColorTable::parse(&mut zune_pict::zune_core::bytestream::ZReader::new(
        ZCursor::new(data)
    ));
});
