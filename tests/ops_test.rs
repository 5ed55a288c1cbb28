// Tests for the per-note operations

use std::collections::HashMap;

use bulkops_wasm::ops::{
    colour_note_from_graph, unpack_note_reading, ColourStatus, NoteData, NoteFields, OpCounts,
    UnpackStatus,
};
use bulkops_wasm::settings::{PitchSettings, UnpackSettings};

const IKU_GRAPH: &str = concat!(
    "<svg class=\"pitch\" width=\"102px\" height=\"75px\" viewBox=\"0 0 102 75\">",
    "<circle r=\"5\" cx=\"16\" cy=\"30\" style=\"opacity:1;fill:#000;\"></circle>",
    "<circle r=\"5\" cx=\"51\" cy=\"5\" style=\"opacity:1;fill:#000;\"></circle>",
    "<circle r=\"5\" cx=\"86\" cy=\"5\" style=\"opacity:1;fill:#000;\"></circle>",
    "<circle r=\"3.25\" cx=\"86\" cy=\"5\" style=\"opacity:1;fill:#fff;\"></circle>",
    "</svg>"
);

fn make_note(fields: &[(&str, &str)]) -> NoteData {
    NoteData {
        fields: fields
            .iter()
            .map(|&(name, value)| (name.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>(),
        tags: Vec::new(),
    }
}

fn reading_with_graph() -> String {
    format!("いく<!-- accent_start --><br><hr><br>{}<!-- accent_end -->", IKU_GRAPH)
}

#[test]
fn test_heiban_note_gets_the_heiban_colour() {
    let mut note = make_note(&[("Reading", &reading_with_graph()), ("Word", "いく")]);
    let settings = PitchSettings {
        fields_tocolour: vec!["Word".to_string()],
        ..PitchSettings::default()
    };

    let status = colour_note_from_graph(&mut note, &settings);

    assert_eq!(status, ColourStatus::Edited);
    assert_eq!(
        note.field("Word"),
        Some("<font color=\"#a4a4ff\">いく</font>"),
        "word field takes the heiban colour"
    );
    assert!(note.tags.is_empty(), "edited notes are not tagged");
}

#[test]
fn test_colouring_skips_empty_fields() {
    let mut note = make_note(&[("Reading", &reading_with_graph()), ("Word", "")]);
    let settings = PitchSettings {
        fields_tocolour: vec!["Word".to_string()],
        ..PitchSettings::default()
    };

    assert_eq!(colour_note_from_graph(&mut note, &settings), ColourStatus::Edited);
    assert_eq!(note.field("Word"), Some(""), "empty fields stay empty");
}

#[test]
fn test_note_without_reading_field_fails_and_is_tagged() {
    let mut note = make_note(&[("Word", "いく")]);
    let settings = PitchSettings::default();

    assert_eq!(colour_note_from_graph(&mut note, &settings), ColourStatus::NoFields);
    assert_eq!(note.tags, vec!["bulkops::failed-pitch".to_string()]);
}

#[test]
fn test_note_without_an_output_field_fails() {
    let mut note = make_note(&[("Reading", &reading_with_graph())]);
    let settings = PitchSettings {
        fields_tocolour: vec!["Word".to_string()],
        ..PitchSettings::default()
    };

    assert_eq!(colour_note_from_graph(&mut note, &settings), ColourStatus::NoFields);
}

#[test]
fn test_note_without_a_graph_fails_and_is_tagged() {
    let mut note = make_note(&[("Reading", "いく")]);
    let settings = PitchSettings::default();

    assert_eq!(colour_note_from_graph(&mut note, &settings), ColourStatus::NoGraph);
    assert_eq!(note.tags, vec!["bulkops::failed-pitch".to_string()]);
}

#[test]
fn test_empty_fail_tag_disables_tagging() {
    let mut note = make_note(&[("Reading", "いく")]);
    let settings = PitchSettings {
        tag_fail: String::new(),
        ..PitchSettings::default()
    };

    assert_eq!(colour_note_from_graph(&mut note, &settings), ColourStatus::NoGraph);
    assert!(note.tags.is_empty());
}

#[test]
fn test_unpack_moves_reading_and_trims_meaning() {
    let mut note = make_note(&[
        ("Meaning", "たる【足る】 ★★★★<br><br>1. to be sufficient"),
        ("Reading", ""),
    ]);
    let settings = UnpackSettings::default();

    let status = unpack_note_reading(&mut note, &settings);

    assert_eq!(status, UnpackStatus::Edited);
    assert_eq!(note.field("Reading"), Some("たる"));
    assert_eq!(note.field("Meaning"), Some("1. to be sufficient"));
}

#[test]
fn test_unpack_without_a_matching_grammar_fails_and_is_tagged() {
    let mut note = make_note(&[("Meaning", "★★★<br>meaning"), ("Reading", "")]);
    let settings = UnpackSettings::default();

    assert_eq!(unpack_note_reading(&mut note, &settings), UnpackStatus::NoReading);
    assert_eq!(note.field("Meaning"), Some("★★★<br>meaning"), "content untouched");
    assert_eq!(note.tags, vec!["bulkops::failed-unpack".to_string()]);
}

#[test]
fn test_unpack_without_fields_fails() {
    let mut note = make_note(&[("Front", "たる")]);
    let settings = UnpackSettings::default();

    assert_eq!(unpack_note_reading(&mut note, &settings), UnpackStatus::NoFields);
}

#[test]
fn test_counts_tally_per_status() {
    let mut counts = OpCounts::default();
    counts.record_colour(ColourStatus::Edited);
    counts.record_colour(ColourStatus::NoGraph);
    counts.record_unpack(UnpackStatus::NoReading);
    counts.record_unpack(UnpackStatus::NoFields);

    assert_eq!(counts.total, 4);
    assert_eq!(counts.edited, 1);
    assert_eq!(counts.no_graph, 1);
    assert_eq!(counts.no_reading, 1);
    assert_eq!(counts.no_fields, 1);
}
