use std::path::Path;

use batch_renamer::prelude::*;

fn job() -> RenameJobBuilder {
    RenameJob::builder(Path::new("/tmp/source"))
}

fn renamed(filename: &str, job: &RenameJob) -> String {
    match compute_name(filename, job) {
        RuleDecision::Rename(name) => name,
        RuleDecision::Skip => panic!("expected a rename decision for '{filename}'"),
    }
}

#[test]
fn test_length_first_ordering() {
    // "ea" must be consumed before "e" even though the caller lists "e" first
    let job = job().find_strings(["e", "ea"]).replace_with("X").build();

    assert_eq!(renamed("tea.png", &job), "T_tX.png");
}

#[test]
fn test_substitution_idempotence() {
    let job = job().find_strings(["draft_"]).replace_with("").build();

    let first = renamed("draft_shot.dat", &job);
    assert_eq!(first, "shot.dat");

    // Once no find-string remains as a substring, re-running is a no-op
    assert_eq!(renamed(&first, &job), first);
}

#[test]
fn test_maya_scene_rule() {
    let job = job().prefix("FINAL_").build();

    assert_eq!(renamed("scene.ma", &job), "FINAL_scene.ma");
}

#[test]
fn test_text_file_rule_ignores_prefix_and_suffix() {
    let job = job().prefix("FINAL_").suffix("_v2").build();

    assert_eq!(renamed("readme.txt", &job), "NOTE_readme_TEMP.txt");
}

#[test]
fn test_texture_rule() {
    let job = job().build();

    assert_eq!(renamed("icon.png", &job), "T_icon.png");
}

#[test]
fn test_unlisted_extension_only_substitutes() {
    let job = job()
        .find_strings(["_old"])
        .replace_with("")
        .prefix("FINAL_")
        .build();

    // Prefix belongs to the Maya policy; other extensions keep the
    // substituted name unmodified
    assert_eq!(renamed("track_old.wav", &job), "track.wav");
}

#[test]
fn test_filter_skips_unlisted_extensions() {
    let job = job().filetypes(["txt"]).build();

    assert_eq!(compute_name("b.png", &job), RuleDecision::Skip);
    assert_eq!(
        compute_name("a.txt", &job),
        RuleDecision::Rename("NOTE_a_TEMP.txt".to_string())
    );
}

#[test]
fn test_filter_treats_missing_extension_as_empty() {
    let job = job().filetypes(["txt"]).build();

    assert_eq!(compute_name("README", &job), RuleDecision::Skip);
}
