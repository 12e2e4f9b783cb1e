#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let report = isikukood::code_report(s);
        if let Ok(parsed) = isikukood::parse_code(s) {
            assert!(report.is_empty());
            let code = isikukood::encode(parsed.gender, parsed.birthdate, parsed.order_number)
                .expect("parsed fields re-encode");
            assert_eq!(code, s);
        }
        let _ = isikukood::birthdate_from_code(s);
        let _ = isikukood::ordernumber_from_code(s);
    }
});
