use crate::StaticRing;
use std::io::{ErrorKind, Read, Write};

#[test]
fn io_roundtrip() {
    let mut rb = StaticRing::<16>::default();
    let (mut tx, mut rx) = rb.split_ref();

    assert_eq!(tx.write(b"abcdef").unwrap(), 6);

    let mut out = [0u8; 4];
    assert_eq!(rx.read(&mut out).unwrap(), 4);
    assert_eq!(&out, b"abcd");
    assert_eq!(rx.read(&mut out).unwrap(), 2);
    assert_eq!(&out[..2], b"ef");
}

#[test]
fn io_would_block() {
    let mut rb = StaticRing::<4>::default();
    let (mut tx, mut rx) = rb.split_ref();

    let mut out = [0u8; 4];
    assert_eq!(rx.read(&mut out).unwrap_err().kind(), ErrorKind::WouldBlock);

    assert_eq!(tx.write(&[1, 2, 3, 4]).unwrap(), 3);
    assert_eq!(tx.write(&[5]).unwrap_err().kind(), ErrorKind::WouldBlock);
}
