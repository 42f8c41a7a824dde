#![no_main]

use libfuzzer_sys::fuzz_target;
use localetypes::domain::entities::LocaleEntry;
use localetypes::domain::ports::{CodeGenerator, LocaleParser};
use localetypes::domain::value_objects::{GenerationMode, LocaleName};
use localetypes::infrastructure::{TypeScriptGenerator, YamlLocaleParser};
use localetypes::Target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and generating from arbitrary locale files must never panic
        if let Ok(tree) = YamlLocaleParser.parse(content) {
            let entries = [LocaleEntry::new(LocaleName::new("en"), tree)];
            let _ = TypeScriptGenerator.generate(&entries, Target::Type, &GenerationMode::Normal);
            let _ = TypeScriptGenerator.generate(&entries, Target::Runtime, &GenerationMode::Normal);
        }
    }
});
