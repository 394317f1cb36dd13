use nmea0183_codec::{
    ChecksumMode, Decoder, EncodeOptions, Encoder, Error, FaaMode, FixedClock, Hemisphere,
    Packet, SentenceType, Status, TrackPosition, decode,
};
use time::{Date, Month, OffsetDateTime, Time};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn timestamp(year: i32, month: Month, day: u8, time: Time) -> OffsetDateTime {
    Date::from_calendar_date(year, month, day)
        .unwrap()
        .with_time(time)
        .assume_utc()
}

fn new_york() -> TrackPosition {
    TrackPosition {
        latitude: 40.7831,
        longitude: -73.9712,
        altitude: 10.0,
        speed: 72.0,
        heading: 90.0,
        timestamp: None,
    }
}

fn encoder() -> Encoder<FixedClock> {
    Encoder::with_clock(FixedClock(timestamp(
        2024,
        Month::May,
        17,
        Time::from_hms_milli(14, 3, 27, 481).unwrap(),
    )))
}

#[test]
fn test_decode_gga() {
    init_logger();

    let packet = decode(
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
        false,
    )
    .unwrap();

    assert_eq!(packet.sentence_type(), SentenceType::Gga);
    assert_eq!(packet.talker_id(), "GP");

    let gga = packet.as_gga().unwrap();
    assert!((gga.latitude - 48.1173).abs() < 1e-4);
    assert!((gga.longitude - 11.5167).abs() < 1e-4);
    assert_eq!(gga.altitude_meters, 545.4);
    assert_eq!(gga.satellites_in_view, Some(8));
    assert_eq!(gga.geoidal_separation, 46.9);
    assert_eq!(gga.differential_age, None);
    assert_eq!(gga.differential_ref_stn, None);
    assert_eq!(
        gga.fix_time.map(|fix_time| fix_time.time()),
        Time::from_hms(12, 35, 19).ok()
    );
}

#[test]
fn test_decode_rmc() {
    init_logger();

    let packet = decode(
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
        true,
    )
    .unwrap();

    let Packet::Rmc(rmc) = packet else {
        panic!("expected an RMC packet");
    };
    assert_eq!(rmc.status(), Some(Status::Valid));
    assert!((rmc.speed_knots - 22.4).abs() < 1e-9);
    assert!((rmc.track_true - 84.4).abs() < 1e-9);
    assert_eq!(rmc.variation_pole, Some(Hemisphere::West));
    assert_eq!(
        rmc.datetime,
        Some(timestamp(
            2094,
            Month::March,
            23,
            Time::from_hms(12, 35, 19).unwrap()
        ))
    );
}

#[test]
fn test_decode_void_rmc() {
    init_logger();

    let packet = decode("$GPRMC,235959,V,,,,,,,311299,,,N*53", true).unwrap();
    let rmc = packet.as_rmc().unwrap();

    assert_eq!(rmc.status(), Some(Status::Invalid));
    assert!(rmc.latitude.is_nan());
    assert!(rmc.longitude.is_nan());
    assert!(rmc.speed_knots.is_nan());
    assert!(rmc.track_true.is_nan());
    assert_eq!(rmc.faa_mode(), Some(FaaMode::DataNotValid));
}

#[test]
fn test_decode_keeps_unknown_indicators() {
    init_logger();

    let packet = decode(
        "$GPRMC,123519,X,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,Q*00",
        false,
    )
    .unwrap();
    let rmc = packet.as_rmc().unwrap();

    assert_eq!(rmc.status, Some('X'));
    assert_eq!(rmc.status(), None);
    assert_eq!(rmc.faa_mode, Some('Q'));
    assert_eq!(rmc.faa_mode(), None);
    assert_eq!(rmc.variation_pole, Some(Hemisphere::West));
}

#[test]
fn test_decode_errors() {
    init_logger();

    assert_eq!(
        decode("GPGGA,123519,4807.038,N*47", false),
        Err(Error::InvalidFrame)
    );
    assert_eq!(
        decode("$GPGGA,123519,4807.038,N", false),
        Err(Error::InvalidFrame)
    );
    assert_eq!(
        decode("$GPGSV,3,1,11,01,65,123,45*48", true),
        Err(Error::UnsupportedSentenceType("GSV"))
    );
    assert_eq!(
        decode(
            "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*00",
            true
        ),
        Err(Error::ChecksumMismatch {
            expected: 0x6A,
            found: Some(0x00)
        })
    );
}

#[test]
fn test_gga_round_trip() {
    init_logger();

    let sentence = encoder().encode_gga(&new_york(), &EncodeOptions::default());
    let packet = decode(&sentence, true).unwrap();
    let gga = packet.as_gga().unwrap();

    assert!((gga.latitude - 40.7831).abs() < 1e-4, "{sentence}");
    assert!((gga.longitude + 73.9712).abs() < 1e-4, "{sentence}");
    assert!((gga.altitude_meters - 10.0).abs() < 0.05, "{sentence}");
    assert_eq!(gga.fix_type, Some(1));
    assert_eq!(gga.satellites_in_view, Some(8));
    assert_eq!(gga.horizontal_dilution, 0.9);
}

#[test]
fn test_rmc_round_trip() {
    init_logger();

    let sentence = encoder().encode_rmc(&new_york(), &EncodeOptions::default());
    let packet = decode(&sentence, true).unwrap();
    let rmc = packet.as_rmc().unwrap();

    assert!((rmc.latitude - 40.7831).abs() < 1e-4, "{sentence}");
    assert!((rmc.longitude + 73.9712).abs() < 1e-4, "{sentence}");
    assert!((rmc.speed_knots - 72.0 * 1.94384).abs() < 0.05, "{sentence}");
    assert!((rmc.track_true - 90.0).abs() < 0.05, "{sentence}");
    assert_eq!(rmc.status(), Some(Status::Valid));
    assert_eq!(rmc.faa_mode(), Some(FaaMode::Autonomous));
    assert_eq!(
        rmc.datetime,
        Some(timestamp(
            2024,
            Month::May,
            17,
            Time::from_hms(14, 3, 27).unwrap()
        ))
    );
}

#[test]
fn test_round_trip_at_the_pole() {
    init_logger();

    let position = TrackPosition {
        latitude: 90.0,
        longitude: 0.0,
        ..new_york()
    };

    let sentence = encoder().encode_gga(&position, &EncodeOptions::default());
    assert!(sentence.contains(",9000.0000,N,00000.0000,E,"), "{sentence}");

    let packet = decode(&sentence, true).unwrap();
    assert!((packet.latitude() - 90.0).abs() < 1e-9);
    assert!(packet.longitude().abs() < 1e-9);
}

#[test]
fn test_include_ms() {
    init_logger();

    let options = EncodeOptions {
        include_ms: true,
        ..Default::default()
    };

    for sentence in [
        encoder().encode_gga(&new_york(), &options),
        encoder().encode_rmc(&new_york(), &options),
    ] {
        let time_field = sentence.split(',').nth(1).unwrap();
        assert_eq!(time_field, "140327.481", "{sentence}");
    }

    for sentence in [
        encoder().encode_gga(&new_york(), &EncodeOptions::default()),
        encoder().encode_rmc(&new_york(), &EncodeOptions::default()),
    ] {
        let time_field = sentence.split(',').nth(1).unwrap();
        assert_eq!(time_field, "140327", "{sentence}");
    }
}

#[test]
fn test_corrupted_byte_fails_validation() {
    init_logger();

    let sentence = encoder().encode_rmc(&new_york(), &EncodeOptions::default());
    let star = sentence.rfind('*').unwrap();
    let decoder = Decoder::new().checksum_mode(ChecksumMode::Validate);

    assert!(decoder.decode(&sentence).is_ok());

    for index in 1..star {
        let mut bytes = sentence.clone().into_bytes();
        // flipping a low bit keeps the byte ASCII and changes the XOR
        bytes[index] ^= 0x01;
        let corrupted = String::from_utf8(bytes).unwrap();

        assert!(
            decoder.decode(&corrupted).is_err(),
            "corrupted byte {index} was accepted: {corrupted}"
        );
    }
}

#[test]
fn test_decoder_clock_dates_gga() {
    init_logger();

    let clock = FixedClock(timestamp(2030, Month::December, 31, Time::MIDNIGHT));
    let decoder = Decoder::new().clock(clock);

    let packet = decoder
        .decode("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")
        .unwrap();

    assert_eq!(
        packet.as_gga().unwrap().fix_time,
        Some(timestamp(
            2030,
            Month::December,
            31,
            Time::from_hms(12, 35, 19).unwrap()
        ))
    );
}
