//! End-to-end tests for the console sink: formatting, routing, muting.

mod common;

use common::capture_sink;
use glyph_log::{
    ColorMap, ConsoleOptions, Level, Logger, Metadata, Sink, Timestamp,
};

fn plain_options() -> ConsoleOptions {
    ConsoleOptions::new().with_timestamp(Timestamp::Disabled)
}

#[test]
fn test_every_level_produces_exactly_one_line() {
    let (sink, out, err) = capture_sink(plain_options());
    let logger = Logger::builder().sink(sink).build();

    logger.debug("d", None);
    logger.verbose("v", None);
    logger.info("i", None);
    logger.success("s", None);
    logger.warn("w", None);
    logger.error("e", None);

    // debug, warn, error on stderr; verbose, info, success on stdout.
    assert_eq!(out.contents().lines().count(), 3);
    assert_eq!(err.contents().lines().count(), 3);
}

#[test]
fn test_silent_suppresses_all_levels() {
    let (sink, out, err) = capture_sink(plain_options().with_silent(true));
    let logger = Logger::builder().sink(sink).build();

    for level in Level::ALL {
        assert!(logger.log(level, "should not appear", None));
    }
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn test_stream_routing_matrix() {
    for (level, debug_stdout, expect_stderr) in [
        (Level::Warn, false, true),
        (Level::Warn, true, true),
        (Level::Error, false, true),
        (Level::Error, true, true),
        (Level::Debug, false, true),
        (Level::Debug, true, false),
        (Level::Verbose, false, false),
        (Level::Info, false, false),
        (Level::Success, false, false),
    ] {
        let (sink, out, err) = capture_sink(plain_options().with_debug_stdout(debug_stdout));
        sink.log(&glyph_log::Record::new(level, "routed"));
        if expect_stderr {
            assert!(out.is_empty(), "{level} with debug_stdout={debug_stdout}");
            assert!(err.contents().contains("routed"));
        } else {
            assert!(err.is_empty(), "{level} with debug_stdout={debug_stdout}");
            assert!(out.contents().contains("routed"));
        }
    }
}

#[test]
fn test_error_stack_replaces_message_body() {
    let (sink, _out, err) = capture_sink(plain_options());
    let logger = Logger::builder().sink(sink).build();

    logger.error(
        "unreachable message",
        Metadata::new().with_stack(vec!["a", "b"]),
    );
    let output = err.contents();
    assert!(output.contains("a\nb"));
    assert!(!output.contains("unreachable message"));
}

#[test]
fn test_transport_and_record_labels_both_appear() {
    let (sink, out, _err) = capture_sink(plain_options().with_label("svc"));
    let logger = Logger::builder().sink(sink).build();

    logger.info("ready", Metadata::new().with_label("db"));
    let line = out.contents();
    let svc = line.find("[svc]").expect("transport label missing");
    let db = line.find("[db]").expect("record label missing");
    assert!(svc < db, "transport label must come first: {line}");
}

#[test]
fn test_unconfigured_level_symbol_stays_raw() {
    let colors = ColorMap::new().with("error", |s| format!("\x1b[31m{s}\x1b[0m"));
    let (sink, out, err) = capture_sink(plain_options().with_colors(colors));

    sink.log(&glyph_log::Record::new(Level::Error, "red"));
    sink.log(&glyph_log::Record::new(Level::Success, "plain"));

    assert!(err.contents().contains("\x1b[31m"));
    assert!(!out.contents().contains('\x1b'));
    assert!(out.contents().contains(Level::Success.symbol()));
}

#[test]
fn test_year_timestamp_with_gray_colorizer() {
    let colors = ColorMap::new().with("gray", |s| format!("<gray>{s}</gray>"));
    let (sink, out, _err) = capture_sink(
        ConsoleOptions::new()
            .with_timestamp("yyyy")
            .with_colors(colors),
    );
    sink.log(&glyph_log::Record::new(Level::Info, "dated"));

    let line = out.contents();
    let year = line
        .strip_prefix("<gray>")
        .and_then(|rest| rest.split("</gray>").next())
        .expect("gray wrapper missing");
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_year_timestamp_without_gray_colorizer() {
    let (sink, out, _err) = capture_sink(ConsoleOptions::new().with_timestamp("yyyy"));
    sink.log(&glyph_log::Record::new(Level::Info, "dated"));

    let year: String = out.contents().chars().take(4).collect();
    assert!(year.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_completion_always_reported_for_all_inputs() {
    let (sink, _out, _err) = capture_sink(plain_options());
    let logger = Logger::builder().sink(sink).build();

    assert!(logger.info("", None));
    assert!(logger.error("", Metadata::new().with_stack("trace")));
    assert!(logger.debug("x".repeat(4096), None));
    assert!(logger.warn("unicode ✓ ✖", Metadata::new().with_label("läbel")));
}

#[test]
fn test_rapid_fire_output_stays_line_atomic() {
    let (sink, out, _err) = capture_sink(plain_options());
    let logger = Logger::builder().sink(sink).build();

    for i in 0..200 {
        logger.info(format!("message {i}"), None);
    }
    let contents = out.contents();
    assert_eq!(contents.lines().count(), 200);
    for (i, line) in contents.lines().enumerate() {
        assert!(
            line.ends_with(&format!("message {i}")),
            "line {i} was mangled: {line:?}"
        );
    }
}
