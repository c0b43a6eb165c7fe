#![no_main]

use libfuzzer_sys::fuzz_target;
use reflection_core::paths::shorten_type_path;
use reflection_core::slicing::Anchors;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let short = shorten_type_path(s);
        // Shortening only ever removes path qualifiers
        assert!(short.len() <= s.len());

        // Anchors discovered from arbitrary text must slice their own source back to the needle
        if let Some((rendered, needle)) = s.split_once('\u{0}') {
            if let Some(anchors) = Anchors::discover(rendered, needle) {
                assert_eq!(anchors.slice(rendered), Some(needle));
            }
        }
    }
});
