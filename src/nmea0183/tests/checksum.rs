use nom::{Err, IResult, error::ErrorKind};

use crate::{
    ChecksumMode, Decoder, Error, checksum, format_checksum, frame_sentence,
    nmea0183::transmitted_checksum,
};

const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

#[test]
fn test_checksum_xor() {
    assert_eq!(checksum("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,"), 0x47);
    assert_eq!(
        checksum("GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W"),
        0x6A
    );
    assert_eq!(checksum("A"), 0x41);
    assert_eq!(checksum("AA"), 0);
    assert_eq!(checksum(&b"GP"[..]), b'G' ^ b'P');
}

#[test]
fn test_format_checksum() {
    assert_eq!(format_checksum(0), "00");
    assert_eq!(format_checksum(0x0F), "0F");
    assert_eq!(format_checksum(0xFF), "FF");
}

#[test]
fn test_frame_sentence() {
    let content = "GPRMC,235959,V,,,,,,,311299,,,N";
    assert_eq!(frame_sentence(content), "$GPRMC,235959,V,,,,,,,311299,,,N*53");
}

#[test]
fn test_transmitted_checksum() {
    let res: IResult<_, _> = transmitted_checksum("47");
    assert_eq!(res, Ok(("", 0x47)));

    let res: IResult<_, _> = transmitted_checksum("6a");
    assert_eq!(res, Ok(("", 0x6A)));

    let res: IResult<_, _> = transmitted_checksum("4");
    assert!(matches!(res, Err(Err::Error(e)) if e.code == ErrorKind::Eof));

    let res: IResult<_, _> = transmitted_checksum("473");
    assert!(matches!(res, Err(Err::Error(e)) if e.code == ErrorKind::Count));

    let res: IResult<_, _> = transmitted_checksum("4z");
    assert!(matches!(res, Err(Err::Error(e)) if e.code == ErrorKind::IsA));
}

#[test]
fn test_validation() {
    let decoder = Decoder::new().checksum_mode(ChecksumMode::Validate);
    assert!(decoder.decode(GGA).is_ok());

    let lowercase = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6a";
    assert!(decoder.decode(lowercase).is_ok());

    let corrupt = GGA.replace("545.4", "545.5");
    assert_eq!(
        decoder.decode(&corrupt),
        Err(Error::ChecksumMismatch {
            expected: 0x46,
            found: Some(0x47)
        })
    );

    for cc in ["", "4", "473", "ZZ", "4z"] {
        let malformed = GGA.replace("*47", &format!("*{cc}"));
        assert_eq!(
            decoder.decode(&malformed),
            Err(Error::ChecksumMismatch {
                expected: 0x47,
                found: None
            }),
            "Failed: {cc:?}"
        );
    }

    // a single digit is rejected even when it matches the value
    let content = "GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,10,M,46.9,M,,,M";
    assert_eq!(checksum(content), 0x09);
    assert!(decoder.decode(&format!("${content}*09")).is_ok());
    assert_eq!(
        decoder.decode(&format!("${content}*9")),
        Err(Error::ChecksumMismatch {
            expected: 0x09,
            found: None
        })
    );
}

#[test]
fn test_validation_skipped() {
    let decoder = Decoder::new();
    assert_eq!(decoder.checksum_mode, ChecksumMode::Ignore);

    let corrupt = GGA.replace("545.4", "545.5");
    assert!(decoder.decode(&corrupt).is_ok());
    assert!(decoder.decode(&GGA.replace("*47", "*zz")).is_ok());
    assert!(decoder.decode(&GGA.replace("*47", "*")).is_ok());
}

#[test]
fn test_checksum_mode_from_bool() {
    assert_eq!(ChecksumMode::from(true), ChecksumMode::Validate);
    assert_eq!(ChecksumMode::from(false), ChecksumMode::Ignore);
    assert_eq!(ChecksumMode::default(), ChecksumMode::Ignore);
}
