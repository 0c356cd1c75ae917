//! Round-trip matrix over the composite objects, plus concrete byte-layout
//! scenarios pinning the wire format.

use geopack_storable::geo::{
    CacheContainer, CacheType, FieldNote, FieldNoteImage, Geocache, GeocacheLog, GeoStyle,
    IconStyle, LabelStyle, LineStyle, Location, LogType, Parameter, Point, PolyStyle, TileRequest,
    TileResponse, TileResult, Track,
};
use geopack_storable::{Storable, StorableDecoder, StorableEncoder};

// ---------------------------------------------------------------------------
// Round-trip matrix
// ---------------------------------------------------------------------------

fn sample_style() -> GeoStyle {
    GeoStyle {
        name: "trail".into(),
        icon: Some(IconStyle {
            icon_url: "file://cache.png".into(),
            color: 0x7F33CC33,
            scale: 0.8,
        }),
        line: Some(LineStyle {
            color: 0xC0FF0000u32 as i32,
            width: 4.5,
        }),
        polygon: Some(PolyStyle {
            color: 0x20FFFF00,
            fill: true,
            outline: false,
        }),
        label: Some(LabelStyle {
            color: 0xFF000000u32 as i32,
            scale: 1.2,
        }),
    }
}

fn sample_geocache() -> Geocache {
    Geocache {
        code: "GC8K2PQ".into(),
        name: "Old quarry".into(),
        owner: "mallory".into(),
        cache_type: CacheType::Mystery,
        container: CacheContainer::Small,
        difficulty: 3.5,
        terrain: 2.0,
        found: false,
        hidden_time: 1_500_000_000_000,
        logs: vec![
            GeocacheLog {
                id: 1,
                log_type: LogType::Found,
                author: "carol".into(),
                date: 1_600_000_000_000,
                text: "Nice container!".into(),
                finds_count: 3200,
            },
            GeocacheLog {
                id: 2,
                log_type: LogType::NotFound,
                author: "dave".into(),
                date: 1_600_100_000_000,
                text: "Searched for an hour.".into(),
                finds_count: 57,
            },
        ],
        hint: "magnetic".into(),
    }
}

#[test]
fn roundtrip_full_point_graph() {
    let mut point = Point::new("Test", Location::new(50.1, 15.2));
    point.id = 1234;
    point.description = "A point with everything attached.".into();
    point.params.push(Parameter::new(1, "hello"));
    point.params.push(Parameter::new(2, "wörld"));
    point.style = Some(sample_style());
    point.geocache = Some(sample_geocache());

    let bytes = point.encode();
    let back = Point::decode(&bytes).unwrap();
    assert_eq!(back, point);
}

#[test]
fn roundtrip_track_with_many_locations() {
    // Large enough to force the writer past its initial capacity.
    let mut track = Track::new("Ridge traverse");
    track.id = 77;
    track.style = Some(sample_style());
    track.tags = vec!["alpine".into(), "exposed".into()];
    for i in 0..200 {
        let mut loc = Location::new(46.0 + i as f64 * 1e-4, 8.0 + i as f64 * 2e-4);
        loc.time = 1_700_000_000_000 + i * 1000;
        loc.altitude = Some(2500.0 + i as f64);
        track.locations.push(loc);
    }

    let bytes = track.encode();
    assert!(bytes.len() > 256);
    let back = Track::decode(&bytes).unwrap();
    assert_eq!(back, track);
}

#[test]
fn roundtrip_tile_pair() {
    let req = TileRequest {
        map_id: "topo-v4".into(),
        zoom: 12,
        x: 2217,
        y: 1403,
        locale: "de".into(),
    };
    assert_eq!(TileRequest::decode(&req.encode()).unwrap(), req);

    let resp = TileResponse {
        result: TileResult::Ok,
        image: (0..1024).map(|i| (i % 251) as u8).collect(),
    };
    assert_eq!(TileResponse::decode(&resp.encode()).unwrap(), resp);
}

#[test]
fn roundtrip_field_note() {
    let note = FieldNote {
        cache_code: "GC8K2PQ".into(),
        log_type: LogType::NeedsMaintenance,
        time: 1_710_000_000_000,
        note: "Logbook is soaked.".into(),
        favorite: false,
        logged: true,
        images: vec![
            FieldNoteImage {
                caption: "logbook".into(),
                data: vec![0xFF, 0xD8, 0xFF, 0xE0],
            },
            FieldNoteImage {
                caption: String::new(),
                data: Vec::new(),
            },
        ],
    };
    assert_eq!(FieldNote::decode(&note.encode()).unwrap(), note);
}

#[test]
fn roundtrip_defaults() {
    // Every composite must survive a round trip in its reset state.
    assert_eq!(
        Location::decode(&Location::default().encode()).unwrap(),
        Location::default()
    );
    assert_eq!(
        Point::decode(&Point::default().encode()).unwrap(),
        Point::default()
    );
    assert_eq!(
        Track::decode(&Track::default().encode()).unwrap(),
        Track::default()
    );
    assert_eq!(
        GeoStyle::decode(&GeoStyle::default().encode()).unwrap(),
        GeoStyle::default()
    );
    assert_eq!(
        Geocache::decode(&Geocache::default().encode()).unwrap(),
        Geocache::default()
    );
    assert_eq!(
        FieldNote::decode(&FieldNote::default().encode()).unwrap(),
        FieldNote::default()
    );
    assert_eq!(
        TileRequest::decode(&TileRequest::default().encode()).unwrap(),
        TileRequest::default()
    );
    assert_eq!(
        TileResponse::decode(&TileResponse::default().encode()).unwrap(),
        TileResponse::default()
    );
}

// ---------------------------------------------------------------------------
// Concrete byte-layout scenarios
// ---------------------------------------------------------------------------

#[test]
fn point_concrete_byte_layout() {
    let mut point = Point::new("Test", Location::new(50.1, 15.2));
    point.params.push(Parameter::new(1, "hello"));
    let bytes = point.encode();

    // Location body (version 2): time + lat + lon + four absent flags.
    let location_body = 8 + 8 + 8 + 4;
    let location_envelope = 4 + 4 + location_body;
    // Parameter body: id + ("hello" length prefix + bytes).
    let parameter_envelope = 4 + 4 + (4 + (4 + 5));
    // Point body (version 2): id, "Test", location, params list,
    // two absent presence flags, empty description.
    let point_body =
        8 + (4 + 4) + location_envelope + (4 + parameter_envelope) + 1 + 1 + 4;
    assert_eq!(bytes.len(), 4 + 4 + point_body);

    let back = Point::decode(&bytes).unwrap();
    assert_eq!(back.name, "Test");
    assert_eq!(back.location.latitude, 50.1);
    assert_eq!(back.location.longitude, 15.2);
    assert_eq!(back.param(1), Some("hello"));
}

#[test]
fn empty_list_is_four_zero_bytes() {
    let mut enc = StorableEncoder::new();
    enc.write_list::<Point>(&[]);
    let bytes = enc.flush();
    assert_eq!(bytes, vec![0, 0, 0, 0]);

    let mut dec = StorableDecoder::new(&bytes);
    let list: Vec<Point> = dec.read_list().unwrap();
    assert!(list.is_empty());
}

#[test]
fn string_length_counts_utf8_bytes_not_chars() {
    let mut enc = StorableEncoder::new();
    enc.write_string("héllo");
    let bytes = enc.flush();
    // "héllo" is 5 characters but 6 UTF-8 bytes.
    assert_eq!(bytes.len(), 4 + 6);
    assert_eq!(&bytes[0..4], &[0, 0, 0, 6]);

    let mut dec = StorableDecoder::new(&bytes);
    assert_eq!(dec.read_string().unwrap(), "héllo");
}

#[test]
fn booleans_are_single_canonical_bytes() {
    let mut enc = StorableEncoder::new();
    enc.write_bool(false);
    enc.write_bool(true);
    let bytes = enc.flush();
    assert_eq!(bytes, vec![0x00, 0x01]);
}
