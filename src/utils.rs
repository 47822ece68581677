use crate::ring::MAX_EXPONENT;

/// Capacity mask for binding `2^exponent` bytes over `storage_len` bytes of
/// backing storage. Panics on contract violations.
pub(crate) fn capacity_mask(storage_len: usize, exponent: u8) -> u16 {
    assert!(
        exponent <= MAX_EXPONENT,
        "capacity exponent {exponent} exceeds {MAX_EXPONENT}"
    );
    if exponent == 0 {
        return 0;
    }
    let capacity = 1usize << exponent;
    assert!(
        storage_len >= capacity,
        "storage holds {storage_len} bytes, capacity 2^{exponent} needs {capacity}"
    );
    (capacity - 1) as u16
}

/// Exponent for a storage length that is itself the capacity.
pub(crate) fn exponent_of(len: usize) -> u8 {
    assert!(
        len <= 1 << MAX_EXPONENT && (len == 0 || len.is_power_of_two()),
        "length {len} is not a power of two up to 65536"
    );
    if len == 0 {
        0
    } else {
        len.trailing_zeros() as u8
    }
}
