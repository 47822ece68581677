extern crate std;

use super::{SerialHw, SerialPort};
use core::cell::{Cell, RefCell};
use std::{collections::VecDeque, vec::Vec};

struct MockHw {
    tx_irq: Cell<bool>,
    rx_irq: Cell<bool>,
    idle: Cell<bool>,
    wire: RefCell<Vec<u8>>,
    incoming: RefCell<VecDeque<u8>>,
}

impl MockHw {
    fn new() -> Self {
        Self {
            tx_irq: Cell::new(false),
            rx_irq: Cell::new(false),
            idle: Cell::new(true),
            wire: RefCell::new(Vec::new()),
            incoming: RefCell::new(VecDeque::new()),
        }
    }
}

impl SerialHw for MockHw {
    fn set_tx_irq(&self, enabled: bool) {
        self.tx_irq.set(enabled);
    }
    fn set_rx_irq(&self, enabled: bool) {
        self.rx_irq.set(enabled);
    }
    fn tx_idle(&self) -> bool {
        self.idle.get()
    }
    fn clear_rx_ready(&self) {
        self.incoming.borrow_mut().pop_front();
    }
    fn write_byte(&self, byte: u8) {
        self.wire.borrow_mut().push(byte);
    }
    fn read_byte(&self) -> u8 {
        self.incoming.borrow_mut().pop_front().unwrap_or(0)
    }
}

fn port() -> SerialPort<[u8; 16], MockHw> {
    SerialPort::new(MockHw::new(), [0; 16], [0; 16])
}

#[test]
fn starts_unbound() {
    let mut port = port();
    let (mut host, mut irq) = port.split();

    assert_eq!(host.send(b"hi"), 0);
    assert_eq!(host.unsent_len(), 0);

    // a byte arriving before start_rx is dropped and recorded
    irq.on_interrupt(false, true);
    assert!(host.take_rx_fault());
}

#[test]
fn send_drains_through_interrupt() {
    let mut port = port();
    port.start_tx(3);
    {
        let (mut host, mut irq) = port.split();
        assert_eq!(host.send(b"abc"), 3);
        assert_eq!(host.unsent_len(), 3);

        for _ in 0..4 {
            irq.on_interrupt(true, false);
        }
        assert_eq!(host.unsent_len(), 0);
    }

    let hw = port.hw();
    assert_eq!(hw.wire.borrow().as_slice(), b"abc");
    assert!(!hw.tx_irq.get());
}

#[test]
fn send_backpressure() {
    let mut port = port();
    port.start_tx(3);
    let (mut host, _irq) = port.split();

    assert_eq!(host.send(&[9; 10]), 7);
    assert_eq!(host.send(&[9; 10]), 0);
}

#[test]
fn receive_path_with_overflow() {
    let mut port = port();
    port.start_rx(3);
    {
        let (mut host, mut irq) = port.split();

        for byte in 1..=8u8 {
            irq.hw.incoming.borrow_mut().push_back(byte);
            irq.on_interrupt(false, true);
        }
        assert_eq!(host.unread_len(), 7);
        assert!(host.take_rx_fault());
        assert!(!host.take_rx_fault());

        let mut out = [0u8; 16];
        assert_eq!(host.receive(&mut out), 7);
        assert_eq!(&out[..7], &[1, 2, 3, 4, 5, 6, 7]);
    }
    assert!(port.hw().rx_irq.get());
}

#[test]
fn loopback() {
    let mut port = port();
    port.start_tx(2);
    port.start_rx(2);
    let (mut host, mut irq) = port.split();

    let msg = b"ok!";
    assert_eq!(host.send(msg), 3);

    for _ in 0..4 {
        irq.on_interrupt(true, false);
        let echoed = irq.hw.wire.borrow_mut().pop();
        if let Some(byte) = echoed {
            irq.hw.incoming.borrow_mut().push_back(byte);
            irq.on_interrupt(false, true);
        }
    }

    let mut out = [0u8; 4];
    assert_eq!(host.receive(&mut out), 3);
    assert_eq!(&out[..3], msg);
}

#[test]
fn clear_tx_stops_transmission() {
    let mut port = port();
    port.start_tx(3);
    {
        let (mut host, _irq) = port.split();
        assert_eq!(host.send(b"hello"), 5);
    }

    assert!(!port.clear_tx());
    assert!(!port.hw().tx_irq.get());

    let (host, _irq) = port.split();
    assert_eq!(host.unsent_len(), 0);
}
