#![no_main]

use std::sync::OnceLock;

use civic_directory::WardDirectory;
use libfuzzer_sys::fuzz_target;

static DIRECTORY: OnceLock<WardDirectory> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let directory = DIRECTORY.get_or_init(|| {
        WardDirectory::embedded().expect("embedded ward data must validate")
    });
    let query = String::from_utf8_lossy(data);
    let lowered = query.to_lowercase();

    let matches = directory.search(&query);
    let mut previous = 0;
    for record in &matches {
        assert!(record.id > previous, "search must preserve table order");
        previous = record.id;
        assert!(
            record.representative_name.to_lowercase().contains(&lowered)
                || record
                    .neighborhoods
                    .iter()
                    .any(|neighborhood| neighborhood.to_lowercase().contains(&lowered))
                || record.id.to_string() == query
        );
        let display = directory.to_display_record(record);
        assert_eq!(display.id, record.id);
    }
    if query.is_empty() {
        assert_eq!(matches.len(), directory.len());
    }
});
