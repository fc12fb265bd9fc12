use clap::{value_t, App, Arg};
use memmap::Mmap;
use std::convert::TryFrom;
use std::fs::File;
use std::process;
use zip32::{Error, LittleEndianU32, Signature};

// Offset of the CRC32 field within a record; the compressed and uncompressed
// sizes follow as the next two u32 fields.
const LFH_CRC32_OFFSET: usize = 14;
const CDH_CRC32_OFFSET: usize = 16;

fn print_fields(bytes: &[u8], record: usize, crc_offset: usize) {
    let crc = LittleEndianU32::from_bytes(bytes, record + crc_offset);
    let compressed = LittleEndianU32::from_bytes(bytes, record + crc_offset + 4);
    let uncompressed = LittleEndianU32::from_bytes(bytes, record + crc_offset + 8);
    match (crc, compressed, uncompressed) {
        (Ok(crc), Ok(compressed), Ok(uncompressed)) => println!(
            "    crc32={:#010x} compressed={} uncompressed={}",
            crc.value(),
            compressed.value(),
            uncompressed.value()
        ),
        _ => println!("    truncated record"),
    }
}

fn scan(path: &str) -> Result<(), Error> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(());
    }
    let bytes = unsafe { Mmap::map(&file)? };
    for offset in 0..bytes.len() {
        let word = match LittleEndianU32::from_bytes(&bytes, offset) {
            Ok(word) => word,
            Err(_) => break, // fewer than 4 bytes left
        };
        let signature = match Signature::try_from(word.value()) {
            Ok(s) => s,
            Err(_) => continue,
        };
        println!("{:#010x}: {:?}", offset, signature);
        match signature {
            Signature::LocalFileHeader => print_fields(&bytes, offset, LFH_CRC32_OFFSET),
            Signature::CentralDirectoryHeader => print_fields(&bytes, offset, CDH_CRC32_OFFSET),
            _ => {}
        }
    }
    Ok(())
}

fn main() {
    let opts = App::new("zip32scan")
        .arg(Arg::with_name("archive").takes_value(true).required(true))
        .get_matches();
    let archive = value_t!(opts.value_of("archive"), String).unwrap();
    if let Err(e) = scan(&archive) {
        eprintln!("zip32scan: {}: {}", archive, e);
        process::exit(1);
    }
}
