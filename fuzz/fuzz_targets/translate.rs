#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(parsed) = mathsharp_read_xmcd::parse(s) {
            // Either a complete unit or an error, never a panic
            if let Ok(emitted) = mathsharp_write_csharp::emit(&parsed.value) {
                let cs = String::from_utf8_lossy(&emitted.value);
                assert!(cs.ends_with("    }\n}\n"), "unit not closed");
            }
        }
    }
});
