#![no_main]

use std::sync::OnceLock;

use civic_assistant::{build_grounding_context, local_fallback};
use civic_directory::WardDirectory;
use libfuzzer_sys::fuzz_target;

static DIRECTORY: OnceLock<WardDirectory> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let directory = DIRECTORY.get_or_init(|| {
        WardDirectory::embedded().expect("embedded ward data must validate")
    });
    let (district_id, message) = match data.split_first() {
        Some((selector, rest)) if selector % 2 == 0 => {
            (Some(i64::from(*selector) - 64), String::from_utf8_lossy(rest))
        }
        Some((_, rest)) => (None, String::from_utf8_lossy(rest)),
        None => (None, String::from_utf8_lossy(data)),
    };

    let answer = local_fallback(directory, &message, district_id);
    assert!(!answer.trim().is_empty());

    let context = build_grounding_context(directory, district_id);
    assert!(!context.trim().is_empty());
});
