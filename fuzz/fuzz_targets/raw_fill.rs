#![no_main]

use libfuzzer_sys::fuzz_target;
use cstrbuf::{CStrBuf, CStrBufError};

fuzz_target!(|data: Vec<u8>| {
    let Ok(mut buf) = CStrBuf::<u8>::try_with_len(data.len()) else {
        assert!(data.is_empty());
        return;
    };

    // Simulate a foreign writer that may or may not terminate
    buf.as_units_mut().copy_from_slice(&data);

    match data.iter().position(|&b| b == 0) {
        Some(end) => {
            // Verify: readers stop at the first null and never fail
            assert_eq!(buf.as_c_str().unwrap().to_bytes(), &data[..end]);
            let _ = buf.to_string_lossy();
        }
        None => {
            assert_eq!(buf.to_str(), Err(CStrBufError::NotTerminated));
        }
    }

    // Verify: terminating always yields a readable string
    buf.terminate();
    assert!(buf.is_terminated());
    assert!(buf.as_c_str().is_ok());
    assert_eq!(buf.to_bytes().len(), data.len() - 1);
});
