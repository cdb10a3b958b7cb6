#![no_main]

use byteview::ByteView;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&[u8], u8)| {
    let (data, delim) = input;
    let original = ByteView::new(data);

    let mut view = original;
    let prefix = view.chop_by_byte(delim);
    match original.index_of(delim) {
        Some(i) => {
            assert_eq!(i, prefix.len());
            let rebuilt = [prefix.as_bytes(), &[delim][..], view.as_bytes()].concat();
            assert_eq!(data, rebuilt.as_slice());
        }
        None => {
            assert_eq!(original, prefix);
            assert!(view.is_empty());
        }
    }

    let mut probe = original;
    match probe.try_chop_by_byte(delim) {
        Some(p) => {
            assert_eq!(prefix, p);
            assert_eq!(view, probe);
        }
        None => assert_eq!(original, probe),
    }
});
