//! The codec front end and its injected trace sink.

use std::cell::RefCell;

use fieldjson::{json_struct, Codec, Reflect, TraceSink};

#[derive(Default)]
struct Record {
	p1: i32,
	p2: String,
}

json_struct!(Record { required p1, optional p2 });

#[derive(Default)]
struct MemSink {
	lines: RefCell<Vec<String>>,
}

impl TraceSink for MemSink {
	fn append(&self, line: &str) {
		self.lines.borrow_mut().push(line.to_owned());
	}
}

#[test]
fn successful_decodes_leave_the_sink_silent() {
	let sink = MemSink::default();
	let codec = Codec::with_trace(&sink);

	let mut record = Record::default();
	codec.from_json(&mut record, r#"{"p1":5,"p2":"x"}"#).expect("valid input");

	assert_eq!(record.p1, 5);
	assert!(sink.lines.borrow().is_empty());
}

#[test]
fn failed_decodes_report_one_line_with_the_path() {
	let sink = MemSink::default();
	let codec = Codec::with_trace(&sink);

	let mut record = Record::default();
	let err = codec.from_json(&mut record, r#"{"p2":"x"}"#).expect_err("p1 missing");
	assert_eq!(err.to_string(), "missing mandatory field $.p1");

	let lines = sink.lines.borrow();
	assert_eq!(lines.len(), 1);
	assert_eq!(lines[0], "json decode failed: missing mandatory field $.p1");
}

#[test]
fn the_sink_never_changes_outcomes() {
	let sink = MemSink::default();
	let traced = Codec::with_trace(&sink);
	let silent = Codec::new();

	let mut one = Record::default();
	let mut two = Record::default();
	let text = r#"{"p1":"#;

	assert!(traced.from_json(&mut one, text).is_err());
	assert!(silent.from_json(&mut two, text).is_err());
	assert_eq!(sink.lines.borrow().len(), 1);
}

#[test]
fn encode_goes_through_the_front_end_unchanged() {
	let codec = Codec::new();
	let mut record = Record::default();
	record.p1 = 3;
	record.p2 = "tag".to_owned();

	assert_eq!(codec.to_json(&record), record.to_json());
}
