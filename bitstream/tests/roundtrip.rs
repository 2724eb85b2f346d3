use bitstream::{BitReader, BitWriter};

#[test]
fn writer_and_reader_agree_on_positions() {
    let mut buf = [0u8; 8];
    let mut writer = BitWriter::new(&mut buf);
    writer.write_bits_lsb(0b101, 3);
    writer.write_bits_lsb(0xAB, 8);
    let end = writer.position();
    assert_eq!(end, 11);

    let mut reader = BitReader::new(&buf);
    assert_eq!(reader.read_bits_lsb(3), 0b101);
    assert_eq!(reader.read_bits_lsb(8), 0xAB);
    assert_eq!(reader.position(), end);
}

#[test]
fn resume_writing_at_saved_position() {
    let mut buf = [0u8; 4];
    let saved = {
        let mut writer = BitWriter::new(&mut buf);
        writer.write_bits_lsb(0x3, 2);
        writer.position()
    };
    let mut writer = BitWriter::at(&mut buf, saved);
    writer.write_bits_lsb(0x3F, 6);

    let mut reader = BitReader::new(&buf);
    assert_eq!(reader.read_bits_lsb(8), 0xFF);
}

#[test]
fn peek_and_restore() {
    let buf = [0b1100_0011u8, 0x7E];
    let mut reader = BitReader::new(&buf);
    let saved = reader.position();
    let first = reader.read_bits_lsb(12);
    reader.set_position(saved);
    assert_eq!(reader.read_bits_lsb(12), first);
}
