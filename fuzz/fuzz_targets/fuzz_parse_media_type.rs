#![no_main]

use libfuzzer_sys::fuzz_target;
use mediatype::MediaType;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that parses must survive a render/parse cycle unchanged.
        if let Ok(mt) = MediaType::parse(s) {
            let rendered = mt.to_string();
            let back = MediaType::parse(&rendered)
                .unwrap_or_else(|e| panic!("{:?} rendered as {:?}: {}", s, rendered, e));
            assert!(mt.eq_strict(&back), "{:?} rendered as {:?}", s, rendered);
        }
    }
});
