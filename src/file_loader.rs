use crate::state::memory::Memory;
use crate::Swap16;
use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{self, BufReader, Read};

/// Loads one origin-prefixed, big-endian program image into memory.
pub(crate) fn load_image(path: &str, memory: &mut Memory) -> io::Result<()> {
    read_image(BufReader::new(File::open(path)?), memory)
}

/// The first word of an image is the address it loads at; the words that
/// follow are stored contiguously from there. Image words are big-endian,
/// so each one is byte-swapped into host order as it is read. Reading stops
/// silently at end of file or at the top of memory.
fn read_image<R: Read>(mut reader: R, memory: &mut Memory) -> io::Result<()> {
    let origin = match reader.read_u16::<LittleEndian>() {
        Ok(origin) => origin.swap16(),
        Err(ref e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
        Err(e) => return Err(e),
    };

    let mut address = origin;
    loop {
        match reader.read_u16::<LittleEndian>() {
            Ok(word) => {
                memory.write(address, word.swap16());
                address = match address.checked_add(1) {
                    Some(address) => address,
                    None => break,
                };
            }
            Err(ref e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn places_words_at_the_origin() {
        let mut memory = Memory::new();

        read_image(
            Cursor::new(vec![0x30, 0x00, 0xF0, 0x25, 0x00, 0x48]),
            &mut memory,
        )
        .unwrap();

        assert_eq!(memory.read(0x3000), 0xF025);
        assert_eq!(memory.read(0x3001), 0x0048);
        assert_eq!(memory.read(0x2FFF), 0);
        assert_eq!(memory.read(0x3002), 0);
    }

    #[test]
    fn tolerates_a_truncated_trailing_byte() {
        let mut memory = Memory::new();

        read_image(Cursor::new(vec![0x30, 0x00, 0x12, 0x34, 0x56]), &mut memory).unwrap();

        assert_eq!(memory.read(0x3000), 0x1234);
        assert_eq!(memory.read(0x3001), 0);
    }

    #[test]
    fn an_empty_file_loads_nothing() {
        let mut memory = Memory::new();

        read_image(Cursor::new(Vec::new()), &mut memory).unwrap();

        assert_eq!(memory.read(0x3000), 0);
    }

    #[test]
    fn later_images_overwrite_earlier_ones() {
        let mut memory = Memory::new();

        read_image(
            Cursor::new(vec![0x30, 0x00, 0x11, 0x11, 0x22, 0x22]),
            &mut memory,
        )
        .unwrap();
        read_image(Cursor::new(vec![0x30, 0x01, 0x33, 0x33]), &mut memory).unwrap();

        assert_eq!(memory.read(0x3000), 0x1111);
        assert_eq!(memory.read(0x3001), 0x3333);
    }

    #[test]
    fn clamps_at_the_top_of_memory() {
        let mut memory = Memory::new();

        read_image(
            Cursor::new(vec![0xFF, 0xFF, 0xAB, 0xCD, 0x12, 0x34]),
            &mut memory,
        )
        .unwrap();

        assert_eq!(memory.read(0xFFFF), 0xABCD);
        // The word past the top of memory is dropped, not wrapped to 0x0000.
        assert_eq!(memory.read(0x0000), 0);
    }
}
