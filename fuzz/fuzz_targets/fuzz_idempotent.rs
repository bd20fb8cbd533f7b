#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(once) = jsonnorm::normalize_json_string(Some(s)) {
            match jsonnorm::normalize_json_string(Some(&once)) {
                Ok(twice) => {
                    if once != twice {
                        panic!(
                            "Not idempotent!\nInput: {}\nOnce: {}\nTwice: {}",
                            s, once, twice
                        );
                    }
                }
                Err(e) if !once.is_empty() => {
                    panic!(
                        "Normalized output failed to parse!\nInput: {}\nOutput: {}\nError: {}",
                        s, once, e
                    );
                }
                Err(_) => {}
            }
        }
    }
});
