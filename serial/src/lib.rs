//! Full-duplex, interrupt-driven serial transport built from two
//! [`circbuf`] ring buffers.
//!
//! The hardware side is injected through the [`SerialHw`] capability trait:
//! this crate owns the buffering and the interrupt protocol (drain one byte
//! per transmit-empty interrupt, store one byte per receive interrupt) and
//! never touches registers itself, so it runs against a mock in unit tests
//! as well as against a real peripheral. Clock, pin and baud-rate setup
//! stay with the platform code implementing [`SerialHw`].
//!
//! Both directions start unbound ("not started yet"): every send is
//! rejected and no reception happens until [`SerialPort::start_tx`] /
//! [`SerialPort::start_rx`] arm them.

#![no_std]

use circbuf::{storage::Container, traits::*, Reader, RingBuffer, Writer};

/// Hardware capability injected by the target platform.
///
/// Methods take `&self`: a register block is shared between the host
/// context and the interrupt handler, and implementations are expected to
/// be cheap volatile accesses.
pub trait SerialHw {
    /// Enable or disable the transmit-register-empty interrupt.
    fn set_tx_irq(&self, enabled: bool);
    /// Enable or disable the receive-ready interrupt.
    fn set_rx_irq(&self, enabled: bool);
    /// Whether the transmitter has finished its current frame.
    fn tx_idle(&self) -> bool;
    /// Discard a stale received frame, if any.
    fn clear_rx_ready(&self);
    /// Write one byte to the data register.
    fn write_byte(&self, byte: u8);
    /// Read one byte from the data register.
    fn read_byte(&self) -> u8;
}

/// Full-duplex serial endpoint: transmit and receive rings plus the
/// injected hardware capability.
pub struct SerialPort<C: Container, D: SerialHw> {
    hw: D,
    tx: RingBuffer<C>,
    rx: RingBuffer<C>,
}

impl<C: Container, D: SerialHw> SerialPort<C, D> {
    /// Takes ownership of the device and the two backing stores. Both
    /// rings start unbound; nothing moves until `start_tx`/`start_rx`.
    pub fn new(hw: D, tx_storage: C, rx_storage: C) -> Self {
        Self {
            hw,
            tx: RingBuffer::new(tx_storage, 0),
            rx: RingBuffer::new(rx_storage, 0),
        }
    }

    /// Arms the transmit direction with capacity `2^exponent` over the
    /// storage it holds. The transmit interrupt stays off until there is
    /// data to send.
    ///
    /// # Panics
    ///
    /// If `exponent > 16` or the storage is shorter than the capacity.
    pub fn start_tx(&mut self, exponent: u8) {
        self.hw.set_tx_irq(false);
        self.tx.reset(exponent);
    }

    /// Arms the receive direction with capacity `2^exponent`, dropping any
    /// stale frame before enabling the receive interrupt.
    ///
    /// # Panics
    ///
    /// If `exponent > 16` or the storage is shorter than the capacity.
    pub fn start_rx(&mut self, exponent: u8) {
        self.hw.set_rx_irq(false);
        self.rx.reset(exponent);
        self.hw.clear_rx_ready();
        self.hw.set_rx_irq(true);
    }

    /// Discards unsent bytes and the transmit fault flag, reporting
    /// whether a fault had been recorded. Transmission stops until the
    /// next [`send`](Host::send).
    pub fn clear_tx(&mut self) -> bool {
        self.hw.set_tx_irq(false);
        self.tx.check_fault(true)
    }

    /// Discards unread received bytes and the receive fault flag,
    /// reporting whether a fault had been recorded.
    pub fn clear_rx(&mut self) -> bool {
        self.rx.check_fault(true)
    }

    pub fn hw(&self) -> &D {
        &self.hw
    }

    /// Splits into the host-side handle and the interrupt-side handle.
    ///
    /// The [`Irq`] half is meant to be driven from the interrupt handler,
    /// the [`Host`] half from the main context; each owns exactly one
    /// cursor of each ring.
    pub fn split(&mut self) -> (Host<'_, C, D>, Irq<'_, C, D>) {
        let hw = &self.hw;
        let (tx_writer, tx_reader) = self.tx.split_ref();
        let (rx_writer, rx_reader) = self.rx.split_ref();
        (
            Host {
                hw,
                tx: tx_writer,
                rx: rx_reader,
            },
            Irq {
                hw,
                tx: tx_reader,
                rx: rx_writer,
            },
        )
    }
}

/// Main-context handle: queues outgoing data, collects received data.
pub struct Host<'a, C: Container, D: SerialHw> {
    hw: &'a D,
    tx: Writer<&'a RingBuffer<C>>,
    rx: Reader<&'a RingBuffer<C>>,
}

impl<C: Container, D: SerialHw> Host<'_, C, D> {
    /// Queues bytes for transmission and kicks the transmit interrupt when
    /// the line is idle.
    ///
    /// Returns how many bytes fit into the transmit ring; a short count is
    /// back-pressure, retry with the remainder later.
    pub fn send(&mut self, data: &[u8]) -> usize {
        let sent = self.tx.push_slice(data);
        if self.hw.tx_idle() {
            self.hw.set_tx_irq(true);
        }
        sent
    }

    /// Moves received bytes into `data`, returning the actual count.
    pub fn receive(&mut self, data: &mut [u8]) -> usize {
        self.rx.pop_slice(data)
    }

    /// Bytes queued but not yet pushed out by the transmit interrupt.
    pub fn unsent_len(&self) -> usize {
        self.tx.unread_len()
    }

    /// Received bytes not yet collected.
    pub fn unread_len(&self) -> usize {
        self.rx.unread_len()
    }

    /// Whether the receive interrupt dropped data since the last check.
    pub fn take_rx_fault(&mut self) -> bool {
        self.rx.check_fault(false)
    }
}

/// Interrupt-context handle.
pub struct Irq<'a, C: Container, D: SerialHw> {
    hw: &'a D,
    tx: Reader<&'a RingBuffer<C>>,
    rx: Writer<&'a RingBuffer<C>>,
}

impl<C: Container, D: SerialHw> Irq<'_, C, D> {
    /// Interrupt service entry. `tx_ready` and `rx_ready` are the device's
    /// transmit-empty and receive-ready conditions for this interrupt.
    ///
    /// Feeds one byte to the transmitter, or stops the transmit interrupt
    /// once the ring runs dry; stores one received byte, where an overflow
    /// raises the sticky receive fault and the byte is lost.
    pub fn on_interrupt(&mut self, tx_ready: bool, rx_ready: bool) {
        if tx_ready {
            match self.tx.try_pop() {
                Some(byte) => self.hw.write_byte(byte),
                None => self.hw.set_tx_irq(false),
            }
        }
        if rx_ready {
            let _ = self.rx.try_push(self.hw.read_byte());
        }
    }
}

#[cfg(test)]
mod tests;
