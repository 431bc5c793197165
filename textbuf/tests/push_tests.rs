use textbuf::{ByteBuf, TextBufError};

#[test]
fn test_push_until_full() {
    let capacity = 8;
    let mut buf = ByteBuf::new(capacity).unwrap();

    // Unlike write, push may use every slot
    for i in 0..capacity {
        buf.push(b'a' + i as u8).unwrap();
    }
    assert!(buf.is_full());
    assert_eq!(buf.as_text(), b"abcdefgh");
}

#[test]
fn test_push_on_full_buffer_fails() {
    let mut buf = ByteBuf::new(4).unwrap();
    for _ in 0..4 {
        buf.push(b'x').unwrap();
    }

    let err = buf.push(b'y').unwrap_err();
    assert_eq!(
        err,
        TextBufError::Overflow {
            requested: 1,
            available: 0,
        }
    );
}

#[test]
fn test_failed_push_leaves_contents_unchanged() {
    let mut buf = ByteBuf::new(3).unwrap();
    buf.push(b'a').unwrap();
    buf.push(b'b').unwrap();
    buf.push(b'c').unwrap();

    assert!(buf.push(b'd').is_err());
    assert_eq!(buf.as_text(), b"abc");
    assert_eq!(buf.len(), 3);
}

#[test]
fn test_push_after_clear() {
    let mut buf = ByteBuf::new(2).unwrap();
    buf.push(b'a').unwrap();
    buf.push(b'b').unwrap();
    buf.clear();

    buf.push(b'z').unwrap();
    assert_eq!(buf.as_text(), b"z");
}

#[test]
fn test_push_after_write() {
    let mut buf = ByteBuf::new(8).unwrap();
    buf.write(b"abc").unwrap();

    buf.push(b'd').unwrap();
    assert_eq!(buf.as_text(), b"abcd");
}

#[test]
fn test_available_tracks_pushes() {
    let mut buf = ByteBuf::new(4).unwrap();
    assert_eq!(buf.available(), 4);

    buf.push(b'a').unwrap();
    assert_eq!(buf.available(), 3);

    buf.clear();
    assert_eq!(buf.available(), 4);
}
