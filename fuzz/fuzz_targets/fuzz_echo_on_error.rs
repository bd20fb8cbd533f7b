#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (text, err) = jsonnorm::normalize_or_echo(Some(s));
        match err {
            Some(_) => {
                if text != s {
                    panic!("Error path did not echo input!\nInput: {:?}\nReturned: {:?}", s, text);
                }
            }
            None => {
                if serde_json::from_str::<serde_json::Value>(s).is_err() && !s.is_empty() {
                    panic!("Accepted input serde_json rejects: {:?}", s);
                }
            }
        }
    }
});
