use num_enum::TryFromPrimitive;

/// Record signatures of the PKZIP on-disk format, as decoded from the first
/// little-endian u32 of each record.
#[derive(Debug, Eq, PartialEq, TryFromPrimitive)]
#[repr(u32)]
pub enum Signature {
    LocalFileHeader = 0x0403_4b50,
    DataDescriptor = 0x0807_4b50,
    CentralDirectoryHeader = 0x0201_4b50,
    EndOfCentralDirectory = 0x0605_4b50,

    // ZIP64 records
    Zip64EndOfCentralDirectory = 0x0606_4b50,
    Zip64EndOfCentralDirectoryLocator = 0x0706_4b50,
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use crate::endianness::LittleEndianU32;
    use std::convert::{TryFrom, TryInto};

    #[test]
    fn signature_from_primitive() {
        assert_eq!(0x0403_4b50u32.try_into(), Ok(Signature::LocalFileHeader));
    }

    #[test]
    fn unknown_primitive_is_rejected() {
        let sig: Result<Signature, _> = 0xdead_beefu32.try_into();
        assert!(sig.is_err());
    }

    #[test]
    fn classify_decoded_header_word() {
        let mut header = [0u8; 30];
        LittleEndianU32::from_value(0x0403_4b50)
            .write_into(&mut header, 0)
            .unwrap();
        let word = LittleEndianU32::from_bytes(&header, 0).unwrap();
        assert_eq!(
            Signature::try_from(word.value()),
            Ok(Signature::LocalFileHeader)
        );
    }
}
