//! Built-in catalog used when no persisted archive exists (first run) or the
//! persisted snapshot fails to parse.

use super::model::{Album, Archive, Track};

pub(super) fn default_catalog() -> Archive {
    vec![Album {
        id: "default-first-light".to_string(),
        title: "First Light".to_string(),
        description: "A starter album to show the gallery around.".to_string(),
        story: "Two sketches recorded in a winter kitchen, kept here so the \
                shelves are never empty on first run."
            .to_string(),
        cover_image: "covers/first-light.jpg".to_string(),
        release_date: "2024".to_string(),
        tracks: vec![
            Track {
                duration: "3:41".to_string(),
                genre: "sketch".to_string(),
                ..Track::new(
                    "default-first-light-1",
                    "Kettle Drone",
                    "https://drive.google.com/file/d/1aA2bB3cC4dD5eE6fF7gG8hH9iJ0k/view",
                )
            },
            Track {
                duration: "2:58".to_string(),
                genre: "sketch".to_string(),
                ..Track::new(
                    "default-first-light-2",
                    "Window Frost",
                    "https://drive.google.com/file/d/1LmN4oP5qR6sT7uV8wX9yZ0aB1cD2/view",
                )
            },
        ],
    }]
}
