// Integration tests for the CStrBuf public API
// Tests cover: construction, text/byte/pointer views, raw buffers, threading

use std::ffi::{CStr, c_char};

use cstrbuf::{CStrBuf, CStrBufError, foreign};

const MIXED: &str = "hello\n\tworld 😊!";

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_hello_scenario() {
    let buf = CStrBuf::<u8>::new("hello");

    assert_eq!(buf.len(), 6);
    assert_eq!(buf.as_units(), &[104, 101, 108, 108, 111, 0]);
    assert_eq!(buf.to_string_lossy(), "hello");
}

#[test]
fn test_empty_scenario() {
    let buf = CStrBuf::<u8>::new("");

    assert_eq!(buf.len(), 1);
    assert_eq!(buf.as_units(), &[0]);
    assert_eq!(buf.to_string_lossy(), "");
    assert!(buf.to_bytes().is_empty());
}

#[test]
fn test_embedded_null_scenario() {
    let result = CStrBuf::<u8>::try_new("a\0b");

    assert_eq!(result, Err(CStrBufError::EmbeddedNull { position: 1 }));
}

#[test]
fn test_embedded_null_strict_panics() {
    let result = std::panic::catch_unwind(|| CStrBuf::<i8>::new("a\0b"));
    assert!(result.is_err(), "strict constructor must panic on a null");
}

#[test]
fn test_raw_allocation_scenario() {
    let buf = CStrBuf::<u8>::with_len(5);
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.content_len(), 4);
}

#[test]
fn test_raw_allocation_rejects_zero_and_negative() {
    assert_eq!(
        CStrBuf::<u8>::try_with_len(0usize),
        Err(CStrBufError::InvalidLength)
    );
    assert_eq!(
        CStrBuf::<u8>::try_with_len(-1i32),
        Err(CStrBufError::InvalidLength)
    );

    let result = std::panic::catch_unwind(|| CStrBuf::<u8>::with_len(0));
    assert!(result.is_err(), "with_len(0) must panic");
}

#[test]
fn test_raw_allocation_accepts_any_integer_type() {
    assert_eq!(CStrBuf::<u8>::with_len(3u8).len(), 3);
    assert_eq!(CStrBuf::<u8>::with_len(3i64).len(), 3);
    assert_eq!(CStrBuf::<i8>::with_len(3usize).len(), 3);
}

// ============================================================================
// Text and Byte Views
// ============================================================================

#[test]
fn test_text_roundtrip_mixed_content() {
    for s in ["", "a", MIXED, "\x01\x02\x7f", "日本語", "tab\there"] {
        let buf = CStrBuf::<u8>::new(s);
        assert_eq!(buf.to_string_lossy(), s);
        assert_eq!(buf.to_str(), Ok(s));
        assert_eq!(buf.len(), s.len() + 1);
        assert_eq!(buf.as_units().last(), Some(&0));
    }
}

#[test]
fn test_signed_units_match_unsigned() {
    let unsigned = CStrBuf::<u8>::new(MIXED);
    let signed = CStrBuf::<i8>::new(MIXED);

    assert_eq!(unsigned.as_bytes_with_nul(), signed.as_bytes_with_nul());
    assert_eq!(signed.to_string_lossy(), MIXED);
}

#[test]
fn test_to_bytes_aliases_storage() {
    let mut buf = CStrBuf::<u8>::new(MIXED);
    assert_eq!(buf.to_bytes(), MIXED.as_bytes());
    assert_eq!(buf.to_bytes().as_ptr(), buf.as_ptr());

    buf.to_bytes_mut()[0] = b'J';
    assert_eq!(buf.as_units()[0], b'J');
    assert!(buf.to_string_lossy().starts_with("Jello"));
}

#[test]
fn test_display() {
    let buf: CStrBuf<c_char> = "display me".parse().unwrap();
    assert_eq!(format!("[{}]", buf), "[display me]");
}

// ============================================================================
// Foreign Pointer View
// ============================================================================

#[test]
fn test_pointer_walk_reproduces_text() {
    let buf = CStrBuf::<c_char>::new(MIXED);
    let pinned = buf.pin();

    // SAFETY: `buf` is pinned for the rest of the test.
    unsafe {
        assert!(foreign::eq_str(pinned.as_ptr(), MIXED));
        assert_eq!(foreign::strlen(pinned.as_ptr()), MIXED.len());
        assert_eq!(CStr::from_ptr(pinned.as_ptr()).to_str(), Ok(MIXED));
    }
}

#[test]
fn test_foreign_writer_fills_raw_buffer() {
    let mut buf = CStrBuf::<c_char>::with_len(16);

    buf.with_mut_ptr(|ptr, cap| {
        let msg = b"from C";
        assert!(msg.len() < cap);
        // SAFETY: `cap` units are writable and the message plus its
        // terminator fits.
        unsafe {
            std::ptr::copy_nonoverlapping(msg.as_ptr().cast::<c_char>(), ptr, msg.len());
            *ptr.add(msg.len()) = 0;
        }
    });
    buf.terminate();

    assert_eq!(buf.to_str(), Ok("from C"));
    assert_eq!(buf.as_c_str().unwrap(), c"from C");
}

#[test]
fn test_unterminated_raw_buffer_is_reported() {
    let mut buf = CStrBuf::<u8>::with_len(4);
    buf.as_units_mut().copy_from_slice(b"full");

    assert!(!buf.is_terminated());
    assert_eq!(buf.to_str(), Err(CStrBufError::NotTerminated));

    let result = std::panic::catch_unwind(|| buf.to_string_lossy().into_owned());
    assert!(result.is_err(), "lossy read of unterminated buffer must panic");
}

// ============================================================================
// Ownership and Threads
// ============================================================================

#[test]
fn test_buffer_moves_across_threads() {
    let buf = CStrBuf::<u8>::new("sent");
    let handle = std::thread::spawn(move || buf.to_string_lossy().into_owned());
    assert_eq!(handle.join().unwrap(), "sent");
}

#[test]
fn test_shared_reads_across_threads() {
    let buf = CStrBuf::<u8>::new(MIXED);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(buf.to_str(), Ok(MIXED)));
        }
    });
}

#[cfg(feature = "bytes")]
#[test]
fn test_into_bytes_is_zero_copy() {
    let buf = CStrBuf::<u8>::new(MIXED);
    let ptr = buf.as_ptr();

    let bytes = buf.into_bytes();
    assert_eq!(bytes.as_ref(), MIXED.as_bytes());
    assert_eq!(bytes.as_ptr(), ptr);
}
