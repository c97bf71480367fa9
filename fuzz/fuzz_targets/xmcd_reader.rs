#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Reader should never panic, and every node but the root has a parent
        if let Ok(result) = mathsharp_read_xmcd::parse(s) {
            let doc = result.value;
            assert!(doc.root().parent().is_none());
            for node in doc.root().descendants() {
                assert!(node.parent().is_some());
            }
            let _ = mathsharp_read_xmcd::binary::collect(&doc);
        }
    }
});
