use super::{Track, TrackTags, round_up_seconds, sort_by_disc_track};
use crate::error::Error;
use std::time::Duration;

fn t(name: &str, disc: Option<u32>, track: Option<u32>) -> Track {
    Track::from_parts(
        format!("/books/{name}.m4a"),
        Duration::from_secs(60),
        TrackTags {
            title: Some(name.into()),
            album: Some("Album".into()),
            artist: Some("Author".into()),
            disc,
            track,
        },
    )
}

fn titles(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.title().unwrap()).collect()
}

#[test]
fn duration_always_rounds_up() {
    assert_eq!(round_up_seconds(Duration::from_secs(10)), 11);
    assert_eq!(round_up_seconds(Duration::from_millis(10_400)), 11);
    assert_eq!(round_up_seconds(Duration::from_millis(10_999)), 11);
    assert_eq!(round_up_seconds(Duration::ZERO), 1);
}

#[test]
fn from_parts_stores_rounded_duration() {
    let track = Track::from_parts("/a.m4a", Duration::from_secs_f64(10.0), TrackTags::default());
    assert_eq!(track.duration(), 11);
}

#[test]
fn sorts_by_disc_then_track() {
    let tracks = vec![
        t("d2t1", Some(2), Some(1)),
        t("d1t10", Some(1), Some(10)),
        t("d1t2", Some(1), Some(2)),
        t("d2t3", Some(2), Some(3)),
        t("d1t1", Some(1), Some(1)),
    ];

    let sorted = sort_by_disc_track(tracks).unwrap();
    assert_eq!(titles(&sorted), vec!["d1t1", "d1t2", "d1t10", "d2t1", "d2t3"]);
}

#[test]
fn equal_keys_keep_input_order() {
    let tracks = vec![
        t("second", Some(1), Some(2)),
        t("first-a", Some(1), Some(1)),
        t("first-b", Some(1), Some(1)),
    ];

    let sorted = sort_by_disc_track(tracks).unwrap();
    assert_eq!(titles(&sorted), vec!["first-a", "first-b", "second"]);
}

#[test]
fn missing_sort_key_fails_the_whole_sort() {
    let tracks = vec![t("ok", Some(1), Some(1)), t("no-disc", None, Some(2))];

    match sort_by_disc_track(tracks).unwrap_err() {
        Error::MissingTag { path, tag } => {
            assert_eq!(tag, "disc number");
            assert!(path.ends_with("no-disc.m4a"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_text_tags_fail_on_access_only() {
    let track = Track::from_parts(
        "/books/bare.m4a",
        Duration::from_secs(5),
        TrackTags {
            title: Some("Bare".into()),
            disc: Some(1),
            track: Some(1),
            ..TrackTags::default()
        },
    );

    assert_eq!(track.title().unwrap(), "Bare");
    assert_eq!(track.disc_track().unwrap(), (1, 1));
    assert!(matches!(track.album(), Err(Error::MissingTag { tag: "album", .. })));
    assert!(matches!(track.artist(), Err(Error::MissingTag { tag: "artist", .. })));
}

#[test]
fn open_reads_tags_and_rounds_duration_up() {
    let dir = tempfile::tempdir().unwrap();
    let path = crate::testing::write_tagged_wav(&dir.path().join("03.wav"), 2, "Chapter Three", 1, 3);

    let track = Track::open(&path).unwrap();

    assert_eq!(track.path(), path.as_path());
    assert_eq!(track.title().unwrap(), "Chapter Three");
    assert_eq!(track.album().unwrap(), "The Book");
    assert_eq!(track.artist().unwrap(), "The Author");
    assert_eq!(track.disc_track().unwrap(), (1, 3));
    // Exactly two seconds of audio still reports three.
    assert_eq!(track.duration(), 3);
}

#[test]
fn open_untagged_file_reports_missing_tags_on_access() {
    let dir = tempfile::tempdir().unwrap();
    let path = crate::testing::write_wav(&dir.path().join("bare.wav"), 1);

    let track = Track::open(&path).unwrap();

    assert_eq!(track.duration(), 2);
    assert!(matches!(track.title(), Err(Error::MissingTag { tag: "title", .. })));
    assert!(matches!(
        track.disc_track(),
        Err(Error::MissingTag { tag: "disc number", .. })
    ));
}
