use std::fs::{self, OpenOptions};
use std::io::Write;

use platformer::logging;

#[test]
fn second_init_keeps_existing_log() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("platformer-{}.log", std::process::id()));
    let other = dir.join(format!("platformer-{}-other.log", std::process::id()));

    logging::init(&path).expect("first init");
    let mut file = OpenOptions::new().append(true).open(&path).expect("open log");
    writeln!(file, "earlier line").expect("write");

    logging::init(&path).expect("second init");
    logging::init(&other).expect("third init");

    let contents = fs::read_to_string(&path).expect("read log");
    assert!(contents.contains("earlier line"));
    assert!(!other.exists());

    let _ = fs::remove_file(&path);
}
