use pretty_assertions::assert_eq;

use simplerisc_core::common::error::MemError;
use simplerisc_core::core::memory::Memory;

const SIZE: usize = 256;

#[test]
fn store_then_load() {
    let mut mem = Memory::new(SIZE);
    mem.store(0x10, -123_456).unwrap();
    assert_eq!(mem.load(0x10).unwrap(), -123_456);
    assert_eq!(mem.fetch(0x10).unwrap(), -123_456i32 as u32);
}

#[test]
fn words_are_little_endian() {
    let mut mem = Memory::new(SIZE);
    mem.load_words(0, &[0x1122_3344, 0x5566_7788]).unwrap();
    assert_eq!(mem.fetch(0).unwrap(), 0x1122_3344);
    assert_eq!(mem.fetch(4).unwrap(), 0x5566_7788);
}

#[test]
fn rejects_unaligned_access() {
    let mut mem = Memory::new(SIZE);
    assert_eq!(mem.load(2), Err(MemError::Unaligned { addr: 2 }));
    assert_eq!(mem.store(7, 1), Err(MemError::Unaligned { addr: 7 }));
    assert_eq!(mem.fetch(u32::MAX), Err(MemError::Unaligned { addr: u32::MAX }));
}

#[test]
fn rejects_out_of_bounds_access() {
    let mut mem = Memory::new(SIZE);
    assert!(mem.load(SIZE as u32 - 4).is_ok());
    assert_eq!(
        mem.load(SIZE as u32),
        Err(MemError::OutOfBounds { addr: SIZE as u32, size: SIZE })
    );
    assert_eq!(
        mem.store(0xFFFF_FFFC, 1),
        Err(MemError::OutOfBounds { addr: 0xFFFF_FFFC, size: SIZE })
    );
}

#[test]
fn oversized_image_writes_nothing() {
    let mut mem = Memory::new(16);
    let image = [1, 2, 3, 4, 5];
    assert!(mem.load_words(0, &image).is_err());
    assert_eq!(mem, Memory::new(16));
}

#[test]
fn empty_image_is_accepted() {
    let mut mem = Memory::new(16);
    assert!(mem.load_words(0, &[]).is_ok());
}
