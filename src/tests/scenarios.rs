use crate::{
    Cardinal, ChecksumMode, ParseError, SentenceType, ValidationError, checksum,
    format_checksum, free, get_type, parse,
    framing::DATA_OFFSET,
    sentences::{Quality, Sentence},
};

const GGA: &[u8] = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
const RMC: &[u8] = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
const GLL: &[u8] = b"$GPGLL,4916.45,N,12311.12,W,225444,A*31\r\n";
const GST: &[u8] = b"$GPGST,172814.0,0.006,0.023,0.020,273.6,0.023,0.020,0.031*6A\r\n";
const VTG: &[u8] = b"$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n";

/// Frames `content` with `$`, a correct checksum and CRLF.
fn framed(content: &str) -> Vec<u8> {
    format!("${content}*{}\r\n", format_checksum(checksum(content))).into_bytes()
}

#[test]
fn test_gga_happy_path() {
    let record = parse(GGA, ChecksumMode::Optional).unwrap();

    assert_eq!(record.kind, SentenceType::GGA);
    assert_eq!(record.errors, 0);

    let Sentence::GGA(gga) = &record.sentence else {
        panic!("unexpected record {:?}", record.sentence);
    };

    assert_eq!(gga.time.time, time::Time::from_hms(12, 35, 19).ok());
    assert_eq!(gga.latitude.degrees, 48);
    assert!((gga.latitude.minutes - 7.038).abs() < 1e-3);
    assert_eq!(gga.latitude.cardinal, Cardinal::North);
    assert_eq!(gga.longitude.degrees, 11);
    assert!((gga.longitude.minutes - 31.0).abs() < 1e-3);
    assert_eq!(gga.longitude.cardinal, Cardinal::East);
    assert_eq!(gga.fix_quality, Some(Quality::GPSFix));
    assert_eq!(gga.fix_quality.map(|quality| quality as u8), Some(1));
    assert_eq!(gga.satellites, Some(8));
    assert_eq!(gga.hdop, Some(0.9));
    assert_eq!(gga.altitude, Some(545.4));
    assert_eq!(gga.altitude_unit, Some('M'));
    assert_eq!(gga.undulation, Some(46.9));
    assert_eq!(gga.undulation_unit, Some('M'));
    assert_eq!(gga.dgps_age, None);
    assert_eq!(gga.dgps_station, None);

    free(record);
}

#[test]
fn test_bad_checksum_is_rejected() {
    let mut corrupt = GGA.to_vec();
    let star = corrupt.len() - 5;
    corrupt[star + 2] = b'8';

    assert!(matches!(
        parse(&corrupt, ChecksumMode::Optional),
        Err(ParseError::Invalid(ValidationError::BadChecksum { .. }))
    ));
    assert!(parse(&corrupt, ChecksumMode::Ignore).is_ok());
}

#[test]
fn test_unknown_talker() {
    let sentence = framed("XXGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,");

    assert_eq!(get_type(&sentence), SentenceType::Unknown);
    assert_eq!(
        parse(&sentence, ChecksumMode::Optional),
        Err(ParseError::UnknownType)
    );
}

#[test]
fn test_unknown_type_word() {
    let sentence = framed("GPZDA,123519,23,03,1994,00,00");
    assert_eq!(
        parse(&sentence, ChecksumMode::Optional),
        Err(ParseError::UnknownType)
    );
}

#[test]
fn test_rmc_with_empty_variation() {
    let sentence = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,,*11\r\n";
    let record = parse(sentence, ChecksumMode::Required).unwrap();

    assert_eq!(record.kind, SentenceType::RMC);
    assert_eq!(record.errors, 0);

    let Sentence::RMC(rmc) = &record.sentence else {
        panic!("unexpected record {:?}", record.sentence);
    };
    assert_eq!(rmc.magnetic_variation, None);
    assert_eq!(rmc.variation_direction, Cardinal::Unknown);

    let date = rmc.time.date.unwrap();
    assert_eq!(date.day(), 23);
    assert_eq!(u8::from(date.month()) - 1, 2);
    assert_eq!(date.year() - 1900, 94);
}

#[test]
fn test_rmc_full() {
    let record = parse(RMC, ChecksumMode::Required).unwrap();
    assert_eq!(record.errors, 0);

    let Sentence::RMC(rmc) = &record.sentence else {
        panic!("unexpected record {:?}", record.sentence);
    };
    assert!(rmc.valid);
    assert_eq!(rmc.speed, Some(22.4));
    assert_eq!(rmc.track, Some(84.4));
    assert_eq!(rmc.magnetic_variation, Some(3.1));
    assert_eq!(rmc.variation_direction, Cardinal::West);
    assert!(rmc.time.datetime().is_some());
}

#[test]
fn test_bad_field_is_counted() {
    let sentence = framed("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,54X.4,M,46.9,M,,");
    let record = parse(&sentence, ChecksumMode::Required).unwrap();

    assert_eq!(record.errors, 1);

    let Sentence::GGA(gga) = &record.sentence else {
        panic!("unexpected record {:?}", record.sentence);
    };
    assert_eq!(gga.altitude, None);
    assert_eq!(gga.satellites, Some(8));
    assert_eq!(gga.undulation, Some(46.9));
}

#[test]
fn test_every_failed_field_is_counted() {
    let sentence = framed("GPGGA,1X3519,48O7.038,Q,01131.000,E,9,08,0.9,545.4,M,46.9,M,,");
    let record = parse(&sentence, ChecksumMode::Required).unwrap();

    assert_eq!(record.errors, 4);
}

#[test]
fn test_all_empty_fields() {
    let record = parse(b"$GPGGA,,,,,,,,,,,,,,\r\n", ChecksumMode::Optional).unwrap();

    assert_eq!(record.kind, SentenceType::GGA);
    assert_eq!(record.errors, 0);
    assert_eq!(record.sentence, Sentence::GGA(Default::default()));
}

#[test]
fn test_short_sentence_has_defaults() {
    let sentence = framed("GPGLL,4916.45,N");
    let record = parse(&sentence, ChecksumMode::Required).unwrap();

    let Sentence::GLL(gll) = &record.sentence else {
        panic!("unexpected record {:?}", record.sentence);
    };
    assert_eq!(gll.latitude.degrees, 49);
    assert_eq!(gll.longitude, Default::default());
    assert_eq!(gll.time.time, None);
    assert!(!gll.valid);
}

#[test]
fn test_builtin_sentences() {
    let cases = [
        (GGA, SentenceType::GGA),
        (RMC, SentenceType::RMC),
        (GLL, SentenceType::GLL),
        (GST, SentenceType::GST),
        (VTG, SentenceType::VTG),
    ];

    for (sentence, kind) in cases {
        let record = parse(sentence, ChecksumMode::Required).unwrap();
        assert_eq!(record.kind, kind);
        assert_eq!(record.sentence.kind(), kind);
        assert_eq!(record.errors, 0, "{:?}", String::from_utf8_lossy(sentence));
    }
}

#[test]
fn test_other_talkers() {
    for talker in ["GN", "GL", "GA", "GB"] {
        let sentence = framed(&format!("{talker}VTG,054.7,T,034.4,M,005.5,N,010.2,K"));
        let record = parse(&sentence, ChecksumMode::Required).unwrap();
        assert_eq!(record.kind, SentenceType::VTG);
    }
}

#[test]
fn test_missing_checksum() {
    let sentence = b"$GPGLL,4916.45,N,12311.12,W,225444,A\r\n";

    assert!(parse(sentence, ChecksumMode::Optional).is_ok());
    assert_eq!(
        parse(sentence, ChecksumMode::Required),
        Err(ParseError::Invalid(ValidationError::MissingChecksum))
    );
}

#[test]
fn test_validation_precedes_classification() {
    assert_eq!(
        parse(b"$XXGGA,1\n", ChecksumMode::Optional),
        Err(ParseError::Invalid(ValidationError::BadTermination))
    );
    assert_eq!(
        parse(b"$GPGGA", ChecksumMode::Optional),
        Err(ParseError::Invalid(ValidationError::TooShort))
    );
}

#[test]
fn test_invalid_character_offset_is_absolute() {
    assert_eq!(
        parse(b"$GPGGA,1,2,\x01\r\n", ChecksumMode::Optional),
        Err(ParseError::Invalid(ValidationError::InvalidCharacter {
            offset: DATA_OFFSET + 4
        }))
    );
}

#[test]
fn test_positions_keep_fractional_minutes() {
    let record = parse(GLL, ChecksumMode::Required).unwrap();

    let Sentence::GLL(gll) = &record.sentence else {
        panic!("unexpected record {:?}", record.sentence);
    };
    assert!((gll.latitude.minutes - 16.45).abs() < 1e-9);
    assert!((gll.longitude.minutes - 11.12).abs() < 1e-9);
    assert!((gll.latitude.to_degrees() - (49.0 + 16.45 / 60.0)).abs() < 1e-9);
}

#[test]
fn test_checksum_helpers() {
    assert_eq!(checksum("GPGGA,123456,data"), 0x41);
    assert_eq!(checksum("GPGGA,1,2"), 0x55);
    assert_eq!(checksum("GPGGA,data"), 0x6A);
    assert_eq!(framed("GPGGA,1,2"), b"$GPGGA,1,2*55\r\n");
}
