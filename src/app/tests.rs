use super::*;
use crate::archive::{Album, MemoryBackend, StorageBackend, Track};
use crate::config::Settings;
use crate::session::SessionState;
use crate::session::fake::FakeMedia;

fn track(id: &str, title: &str) -> Track {
    Track::new(id, title, format!("https://example.com/{id}.mp3"))
}

fn album(id: &str, tracks: Vec<Track>) -> Album {
    Album {
        id: id.into(),
        title: format!("Album {id}"),
        description: String::new(),
        story: String::new(),
        cover_image: "cover.jpg".into(),
        release_date: "2024".into(),
        tracks,
    }
}

/// App over an in-memory backend seeded with `albums`, with the marker
/// guard disabled so navigation tests are deterministic.
fn app_with(albums: &[Album]) -> App<FakeMedia, MemoryBackend> {
    let mut settings = Settings::default();
    settings.navigation.guard_window_ms = 0;

    let mut backend = MemoryBackend::new();
    backend
        .set(&settings.storage.key, &serde_json::to_string(albums).unwrap())
        .unwrap();

    App::new(backend, FakeMedia::new(), settings)
}

fn two_albums() -> Vec<Album> {
    vec![
        album("a1", vec![track("t1", "One"), track("t2", "Two")]),
        album("a2", vec![track("t3", "Three")]),
    ]
}

#[test]
fn play_validates_membership_at_set_time() {
    let mut app = app_with(&two_albums());

    assert!(app.play("a1", "t2"));
    assert_eq!(app.selection.current_album(), Some("a1"));
    assert_eq!(app.session.current_track_id(), Some("t2"));

    // track from the other album: no selection or session change
    assert!(!app.play("a1", "t3"));
    assert!(!app.play("missing", "t1"));
    assert_eq!(app.session.current_track_id(), Some("t2"));
}

#[test]
fn deleting_the_open_album_clears_selection_and_stops_playback() {
    let mut app = app_with(&two_albums());
    app.play("a1", "t1");

    assert!(app.delete_album("a1").unwrap());
    assert_eq!(app.selection.current_album(), None);
    assert_eq!(app.selection.marker(), None);
    assert_eq!(app.session.state(), &SessionState::Idle);
    assert_eq!(app.session.current_track_id(), None);
}

#[test]
fn deleting_another_album_leaves_selection_and_playback_alone() {
    let mut app = app_with(&two_albums());
    app.play("a1", "t1");

    assert!(app.delete_album("a2").unwrap());
    assert_eq!(app.selection.current_album(), Some("a1"));
    assert_eq!(app.session.current_track_id(), Some("t1"));
    assert!(app.delete_album("a2").is_ok_and(|deleted| !deleted));
}

#[test]
fn update_that_drops_the_playing_track_stops_the_session() {
    let mut app = app_with(&two_albums());
    app.play("a1", "t2");

    // replacement album keeps t1 but drops the playing t2
    let replacement = album("a1", vec![track("t1", "One")]);
    assert!(app.update_album("a1", replacement).unwrap());
    assert_eq!(app.session.state(), &SessionState::Idle);
    assert_eq!(app.session.current_track_id(), None);
}

#[test]
fn update_that_keeps_the_playing_track_does_not_interrupt() {
    let mut app = app_with(&two_albums());
    app.play("a1", "t2");

    let replacement = album("a1", vec![track("t2", "Two, renamed")]);
    assert!(app.update_album("a1", replacement).unwrap());
    assert_eq!(app.session.current_track_id(), Some("t2"));
    assert_ne!(app.session.state(), &SessionState::Idle);
}

#[test]
fn gallery_collapses_to_eight_tracks_until_expanded() {
    let tracks: Vec<Track> = (1..=10).map(|i| track(&format!("t{i}"), "Song")).collect();
    let app = app_with(&[album("big", tracks)]);
    let big = app.store.album("big").unwrap().clone();

    let collapsed = app.visible_tracks(&big, false);
    assert_eq!(collapsed.len(), 8);
    assert_eq!(collapsed[0].id, "t1");
    assert_eq!(collapsed[7].id, "t8");

    let expanded = app.visible_tracks(&big, true);
    assert_eq!(expanded.len(), 10);
    assert_eq!(expanded[9].id, "t10");

    // collapsing again returns to the same prefix, original order intact
    assert_eq!(app.visible_tracks(&big, false).len(), 8);
}

#[test]
fn import_rejects_malformed_payloads_without_side_effects() {
    let mut app = app_with(&two_albums());
    app.play("a1", "t1");
    let before = app.store.serialize().unwrap();

    assert!(app.import("{\"no\": \"array\"}").is_err());
    assert_eq!(app.store.serialize().unwrap(), before);
    assert_eq!(app.selection.current_album(), Some("a1"));
    assert_eq!(app.session.current_track_id(), Some("t1"));
}

#[test]
fn import_clears_navigation_for_albums_that_disappeared() {
    let mut app = app_with(&two_albums());
    app.play("a1", "t1");

    let replacement = serde_json::to_string(&[album("fresh", vec![])]).unwrap();
    app.import(&replacement).unwrap();

    assert_eq!(app.store.albums().len(), 1);
    assert_eq!(app.selection.current_album(), None);
    assert_eq!(app.session.state(), &SessionState::Idle);
}

#[test]
fn import_keeps_navigation_when_the_open_album_survives() {
    let mut app = app_with(&two_albums());
    app.play("a1", "t1");

    let replacement = serde_json::to_string(&two_albums()).unwrap();
    app.import(&replacement).unwrap();
    assert_eq!(app.selection.current_album(), Some("a1"));
    assert_eq!(app.session.current_track_id(), Some("t1"));
}

#[test]
fn deep_links_open_known_albums_and_ignore_the_rest() {
    let mut app = app_with(&two_albums());

    assert!(app.open_deep_link("#album-a2"));
    assert_eq!(app.selection.current_album(), Some("a2"));

    assert!(!app.open_deep_link("#album-missing"));
    assert!(!app.open_deep_link("nonsense"));
    assert_eq!(app.selection.current_album(), Some("a2"));
}

#[test]
fn export_filename_embeds_a_date() {
    let app = app_with(&[]);
    let name = app.export_filename();
    assert!(name.starts_with("archive_"));
    assert!(name.ends_with(".json"));
}

#[test]
fn close_album_clears_selection() {
    let mut app = app_with(&two_albums());
    app.open_album("a1");
    app.close_album();
    assert_eq!(app.selection.current_album(), None);
}
