#![no_main]

use libfuzzer_sys::fuzz_target;
use localetypes::MemoryHost;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        // Arbitrary host options must be accepted or rejected, never panic
        let host = MemoryHost::new();
        host.insert_file("/p/locales/en.yaml", "greeting: hi\n");
        let _ = localetypes::check(&value, Some(&host));
    }
});
