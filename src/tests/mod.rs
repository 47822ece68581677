#[cfg(feature = "std")]
mod read_write;
