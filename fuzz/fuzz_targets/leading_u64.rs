#![no_main]

use byteview::ByteView;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let view = ByteView::new(data);
    let digits = view.take_while(|b| b.is_ascii_digit());

    let mut rest = view;
    let value = rest.chop_leading_u64();
    assert_eq!(view.leading_u64(), value);
    assert_eq!(view.len() - digits.len(), rest.len());
    assert!(!rest.first().is_some_and(|b| b.is_ascii_digit()));

    // every run of at most 19 digits fits in u64, so str::parse must agree
    if !digits.is_empty() && digits.len() <= 19 {
        let parsed: u64 = digits.to_str().unwrap().parse().unwrap();
        assert_eq!(parsed, value);
    }
});
