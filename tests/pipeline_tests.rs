mod common;
use chrono::NaiveDate;
use common::{rec, setup_test_store, table};
use rtimeline::chart::{ChartOptions, TimelineChart};
use rtimeline::core::form::RecordForm;
use rtimeline::core::query::{axis_order, filter, matches_identity, query};
use rtimeline::core::repository::EventRepository;
use rtimeline::errors::AppError;
use rtimeline::models::Table;
use rtimeline::store::RecordStore;
use serde_json::Value;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

fn sample() -> Table {
    table(&[
        ("Ada", "1842-10-01", "1843-09-01"),
        ("ada lovelace", "1815-12-10", "1815-12-10"),
        ("Babbage", "1822-06-14", "1822-06-14"),
        ("Babbage", "1834-01-01", "1871-10-18"),
        ("Turing", "1936-01-01", "1843-09-01"),
        ("", "1900-01-01", "1900-06-01"),
        ("ADA", "1830-01-01", "1843-09-01"),
    ])
}

fn chart_json(rows: &[rtimeline::models::TimelineRow]) -> Value {
    let spec = TimelineChart::from_rows(rows, &ChartOptions::default());
    serde_json::from_str(&spec.to_json().expect("json")).expect("valid json")
}

#[test]
fn test_filter_is_case_insensitive_substring() {
    let t = sample();

    for search in ["", "ada", "ADA", "bab", "lace", "zzz", " "] {
        let out = query(&t, search).expect("query");
        let expected: Vec<usize> = t
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.sole.to_lowercase().contains(&search.to_lowercase()))
            .map(|(i, _)| i)
            .collect();

        let mut got: Vec<usize> = out.iter().map(|r| r.position).collect();
        got.sort();
        assert_eq!(got, expected, "search '{search}'");
        assert!(out.iter().all(|r| matches_identity(&r.sole, search)));
        assert_eq!(out.len(), filter(&t, search).len());
    }
}

#[test]
fn test_empty_search_matches_empty_identity() {
    let t = sample();
    let out = query(&t, "").expect("query");
    assert_eq!(out.len(), t.len());
    assert!(out.iter().any(|r| r.sole.is_empty()));
}

#[test]
fn test_sort_is_non_decreasing_and_stable() {
    let t = sample();
    let out = query(&t, "").expect("query");

    for pair in out.windows(2) {
        assert!(pair[0].finish <= pair[1].finish);
        if pair[0].finish == pair[1].finish {
            assert!(pair[0].position < pair[1].position, "ties keep table order");
        }
    }

    // the three rows finishing 1843-09-01 stay in table order: 0, 4, 6
    let ties: Vec<usize> = out
        .iter()
        .filter(|r| r.finish == d("1843-09-01"))
        .map(|r| r.position)
        .collect();
    assert_eq!(ties, vec![0, 4, 6]);
}

#[test]
fn test_milestone_classification() {
    let out = query(&sample(), "").expect("query");
    for r in &out {
        assert_eq!(r.is_milestone, r.start == r.finish);
    }
    assert_eq!(out.iter().filter(|r| r.is_milestone).count(), 2);
}

#[test]
fn test_milestone_compares_dates_not_text() {
    let t = table(&[("A", "2020-01-05", "05-January-2020")]);
    let out = query(&t, "").expect("query");
    assert!(out[0].is_milestone);
}

#[test]
fn test_finish_max_is_per_identity_in_filtered_set() {
    let t = sample();
    let out = query(&t, "").expect("query");

    for r in &out {
        let expected = out
            .iter()
            .filter(|o| o.sole == r.sole)
            .map(|o| o.finish)
            .max()
            .expect("group not empty");
        assert_eq!(r.finish_max, expected);
    }

    let babbage = out.iter().find(|r| r.sole == "Babbage").expect("babbage");
    assert_eq!(babbage.finish_max, d("1871-10-18"));

    // identity match is exact for grouping: "Ada" and "ADA" are distinct groups
    let ada_upper = out.iter().find(|r| r.sole == "ADA").expect("ADA");
    assert_eq!(ada_upper.finish_max, d("1843-09-01"));
}

#[test]
fn test_unparseable_finish_is_reported() {
    let t = table(&[
        ("A", "2020-01-01", "2020-01-02"),
        ("B", "2020-01-01", "someday"),
    ]);

    match query(&t, "") {
        Err(AppError::InvalidStoredDate { row, column, value }) => {
            assert_eq!(row, 2);
            assert_eq!(column, "Finish");
            assert_eq!(value, "someday");
        }
        other => panic!("expected InvalidStoredDate, got {:?}", other),
    }

    // the bad row is outside the filter: no error
    assert_eq!(query(&t, "a").expect("query").len(), 1);
}

#[test]
fn test_same_day_times_are_not_a_milestone() {
    let t = table(&[
        ("A", "2020-01-01 10:00:00", "2020-01-01 18:00:00"),
        ("A", "2020-01-02 09:00:00", "2020-01-02 09:00:00"),
        ("A", "2020-01-03", "2020-01-03 00:00:00"),
    ]);
    let out = query(&t, "").expect("query");

    let flags: Vec<bool> = out.iter().map(|r| r.is_milestone).collect();
    assert_eq!(flags, vec![false, true, true]);
    assert_eq!(out[0].start, out[0].finish);
}

#[test]
fn test_finish_time_breaks_same_day_order() {
    let t = table(&[
        ("A", "2020-01-01", "2020-01-01 18:00:00"),
        ("B", "2020-01-01", "2020-01-01 09:00:00"),
    ]);
    let out = query(&t, "").expect("query");

    let order: Vec<&str> = out.iter().map(|r| r.sole.as_str()).collect();
    assert_eq!(order, vec!["B", "A"]);
}

#[test]
fn test_scenario_a_empty_store() {
    let path = setup_test_store("scenario_a");
    let t = RecordStore::new(&path).load().expect("load");

    assert_eq!(t.len(), 0);
    assert_eq!(
        std::fs::read_to_string(&path).expect("read").trim_end(),
        "Sole,Start,Finish,Event,Key Point"
    );
}

#[test]
fn test_scenario_b_append_milestone() {
    let path = setup_test_store("scenario_b");
    let mut repo = EventRepository::open(RecordStore::new(&path)).expect("open");

    let form = RecordForm {
        sole: "A".into(),
        start: "2020-01-01".into(),
        finish: "2020-01-01".into(),
        event: "X".into(),
        key_point: "Y".into(),
    };
    let validated = form.validate().expect("valid form");
    repo.append(validated.record).expect("append");

    let persisted = RecordStore::new(&path).load().expect("load");
    assert_eq!(persisted.len(), 1);

    let out = query(&persisted, "").expect("query");
    assert_eq!(out.len(), 1);
    assert!(out[0].is_milestone);
    assert_eq!(out[0].event, "X");
    assert_eq!(out[0].key_point, "Y");
}

#[test]
fn test_scenario_c_axis_order_by_max_finish() {
    let t = table(&[
        ("A", "2020-06-01", "2021-01-01"),
        ("B", "2019-01-01", "2020-01-01"),
    ]);
    let out = query(&t, "").expect("query");

    assert_eq!(axis_order(&out), vec!["B".to_string(), "A".to_string()]);

    let json = chart_json(&out);
    for layer in json["layer"].as_array().expect("layers") {
        let sort = &layer["encoding"]["y"]["sort"];
        assert_eq!(sort["field"], "Finish_max");
        assert_eq!(sort["order"], "ascending");
    }

    let values = json["data"]["values"].as_array().expect("values");
    let a = values.iter().find(|v| v["Sole"] == "A").expect("A");
    let b = values.iter().find(|v| v["Sole"] == "B").expect("B");
    assert!(b["Finish_max"].as_str() < a["Finish_max"].as_str());
}

#[test]
fn test_axis_order_uses_group_max_not_first_row() {
    let t = table(&[
        ("A", "2020-01-01", "2020-01-01"),
        ("B", "2020-01-01", "2020-06-01"),
        ("A", "2020-01-01", "2021-01-01"),
    ]);
    let out = query(&t, "").expect("query");
    assert_eq!(axis_order(&out), vec!["B".to_string(), "A".to_string()]);
}

#[test]
fn test_scenario_d_no_match_gives_empty_chart() {
    let out = query(&sample(), "zzz").expect("query");
    assert!(out.is_empty());

    let json = chart_json(&out);
    assert_eq!(json["data"]["values"].as_array().map(|v| v.len()), Some(0));
    assert_eq!(json["layer"].as_array().map(|v| v.len()), Some(2));

    let html = TimelineChart::from_rows(&out, &ChartOptions::default())
        .to_html("Modern History Timeline")
        .expect("html");
    assert!(html.contains(r##"vegaEmbed("#timeline", "##));
    assert!(html.contains(r#"<div id="timeline"></div>"#));
}

#[test]
fn test_scenario_e_reversed_event_is_kept() {
    let form = RecordForm {
        sole: "R".into(),
        start: "2020-02-01".into(),
        finish: "2020-01-01".into(),
        ..Default::default()
    };
    let validated = form.validate().expect("reversed dates are accepted");
    assert!(validated.is_reversed());

    let t = Table::default().appended(validated.record);
    let out = query(&t, "").expect("query");

    assert_eq!(out.len(), 1);
    assert!(out[0].is_reversed());
    assert!(!out[0].is_milestone);
    // not swapped
    assert_eq!(out[0].start, d("2020-02-01"));
    assert_eq!(out[0].finish, d("2020-01-01"));

    let json = chart_json(&out);
    assert_eq!(json["data"]["values"][0]["Start"], "2020-02-01T00:00:00");
    assert_eq!(json["data"]["values"][0]["Finish"], "2020-01-01T00:00:00");
}

#[test]
fn test_form_rejects_missing_and_bad_dates() {
    let missing = RecordForm {
        sole: "A".into(),
        finish: "2020-01-01".into(),
        ..Default::default()
    };
    match missing.validate() {
        Err(AppError::Validation { field, .. }) => assert_eq!(field, "start"),
        other => panic!("expected validation error, got {:?}", other),
    }

    let bad = RecordForm {
        sole: "A".into(),
        start: "2020-01-01".into(),
        finish: "2020-13-45".into(),
        ..Default::default()
    };
    match bad.validate() {
        Err(AppError::Validation { field, message }) => {
            assert_eq!(field, "finish");
            assert!(message.contains("2020-13-45"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_form_normalizes_dates_and_allows_empty_identity() {
    let form = RecordForm {
        sole: "".into(),
        start: "05-March-1991".into(),
        finish: "06/03/1991".into(),
        ..Default::default()
    };
    let v = form.validate().expect("valid");

    assert_eq!(v.record.sole, "");
    assert_eq!(v.record.start, "1991-03-05");
    assert_eq!(v.record.finish, "1991-03-06");
}

#[test]
fn test_chart_layers_marks_and_tooltips() {
    let t = table(&[
        ("A", "2020-01-01", "2020-03-01"),
        ("A", "2020-05-05", "2020-05-05"),
    ]);
    let out = query(&t, "").expect("query");
    let json = chart_json(&out);

    assert_eq!(json["width"], "container");
    assert_eq!(json["config"]["axis"]["labelFontSize"], 12);

    let bars = &json["layer"][0];
    assert_eq!(bars["mark"]["type"], "bar");
    assert_eq!(bars["transform"][0]["filter"], "datum.IsMilestone == false");
    assert_eq!(bars["encoding"]["x"]["field"], "Start");
    assert_eq!(bars["encoding"]["x"]["axis"]["format"], "%d-%B-%Y");
    assert_eq!(bars["encoding"]["x2"]["field"], "Finish");
    assert_eq!(bars["encoding"]["y"]["title"], "Identity");
    assert!(bars["encoding"]["color"]["legend"].is_null());
    assert_eq!(bars["encoding"]["tooltip"].as_array().map(|t| t.len()), Some(5));
    assert_eq!(bars["params"][0]["bind"], "scales");

    let diamonds = &json["layer"][1];
    assert_eq!(diamonds["mark"]["type"], "point");
    assert_eq!(diamonds["mark"]["shape"], "diamond");
    assert_eq!(diamonds["mark"]["filled"], true);
    assert_eq!(diamonds["mark"]["size"], 300);
    assert_eq!(diamonds["transform"][0]["filter"], "datum.IsMilestone == true");
    assert!(diamonds["encoding"].get("x2").is_none());
    let tips = diamonds["encoding"]["tooltip"].as_array().expect("tooltip");
    assert_eq!(tips.len(), 4);
    assert_eq!(tips[1]["title"], "On");
    assert_eq!(tips[1]["format"], "%d-%B-%Y");

    let values = json["data"]["values"].as_array().expect("values");
    assert_eq!(values[0]["IsMilestone"], false);
    assert_eq!(values[1]["IsMilestone"], true);
    assert_eq!(values[1]["Key Point"], "");
}

#[test]
fn test_html_escapes_script_terminator_and_title() {
    let t = Table::new(vec![rtimeline::models::EventRecord::new(
        "A",
        "2020-01-01",
        "2020-01-02",
        "</script><b>",
        "",
    )]);
    let out = query(&t, "").expect("query");
    let html = TimelineChart::from_rows(&out, &ChartOptions::default())
        .to_html("<Title & Co>")
        .expect("html");

    assert!(!html.contains("</script><b>"));
    assert!(html.contains("<\\/script><b>"));
    assert!(html.contains("&lt;Title &amp; Co&gt;"));
}

#[test]
fn test_record_helper_round_trips_through_table() {
    let r = rec("X", "2020-01-01", "2020-01-02");
    let t = Table::default().appended(r.clone());
    assert_eq!(t.rows(), &[r]);
}
