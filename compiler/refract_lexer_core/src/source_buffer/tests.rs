use super::*;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn sentinel_follows_source() {
    let buf = SourceBuffer::new("analyzer");
    assert_eq!(buf.len(), 8);
    assert_eq!(buf.as_bytes(), b"analyzer");
    assert_eq!(buf.as_sentinel_bytes()[8], 0);
}

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 63, 64, 65, 128, 1000] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        let total = buf.as_sentinel_bytes().len();
        assert_eq!(total % CACHE_LINE, 0, "length {total} for source of {len}");
        assert!(total > len, "no room for sentinel at {len}");
    }
}

#[test]
fn padding_is_zero() {
    let buf = SourceBuffer::new("let");
    assert!(buf.as_sentinel_bytes()[3..].iter().all(|&b| b == 0));
}

#[test]
fn multibyte_source_kept_intact() {
    let source = "\"señal\"";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}
