#![no_main]

use libfuzzer_sys::fuzz_target;
use cstrbuf::{CStrBuf, CStrBufError, foreign};

fuzz_target!(|data: Vec<u8>| {
    let first_nul = data.iter().position(|&b| b == 0);

    match CStrBuf::<u8>::try_new(&data) {
        Ok(buf) => {
            // Verify: only null-free input is accepted
            assert!(first_nul.is_none());

            // Verify: layout is payload + single terminator
            assert_eq!(buf.len(), data.len() + 1);
            assert!(buf.is_terminated());
            assert_eq!(buf.to_bytes(), data.as_slice());

            // Verify: pointer walk sees the whole payload
            let walked = buf.with_ptr(|ptr| unsafe { foreign::strlen(ptr) });
            assert_eq!(walked, data.len());

            // Verify: text view agrees with std's decoding
            if let Ok(s) = std::str::from_utf8(&data) {
                assert_eq!(buf.to_str(), Ok(s));
            }
            assert_eq!(buf.to_string_lossy(), String::from_utf8_lossy(&data));

            // Verify: bytes hand-off keeps the payload
            assert_eq!(buf.into_bytes().as_ref(), data.as_slice());
        }
        Err(err) => {
            // Verify: rejection points at the first null
            assert_eq!(
                err,
                CStrBufError::EmbeddedNull {
                    position: first_nul.expect("rejected input must contain a null"),
                }
            );
        }
    }

    // Signed units must store the same bit patterns
    if let Ok(signed) = CStrBuf::<i8>::try_new(&data) {
        assert_eq!(signed.to_bytes(), data.as_slice());
    }
});
