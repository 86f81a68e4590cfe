// tests/extract_page.rs
//
// Page-load behaviour against real HTML fixtures.

use colors_saved::{
    ColorRecord, Error, ExtractOptions, HtmlDocument, MemoryDocument, OutputField, Page, PageState, Row,
};

fn page_with_rows(rows: &[[&str; 6]]) -> String {
    let mut body = String::new();
    for r in rows {
        body.push_str("<tr>");
        for c in r {
            body.push_str(&format!("<td>{c}</td>"));
        }
        body.push_str("</tr>\n");
    }
    format!(
        "<!DOCTYPE html>\n<html><head><script src=\"script.js\"></script></head><body>\n\
         <table>\n<thead><tr><th>#</th><th>Name</th><th>Code</th><th>R</th><th>G</th><th>B</th></tr></thead>\n\
         <tbody id=\"default\">\n{body}</tbody>\n</table>\n\
         <textarea id=\"output\"></textarea>\n</body></html>"
    )
}

fn load(html: String, opts: ExtractOptions) -> (Result<Option<colors_saved::Summary>, Error>, HtmlDocument) {
    let mut page = Page::new(HtmlDocument::new(html), opts);
    let res = page.on_load();
    (res, page.into_document())
}

#[test]
fn concrete_red_row() {
    let (res, doc) = load(page_with_rows(&[["1", "Red", "#FF0000", "255", "0", "0"]]), ExtractOptions::default());
    res.unwrap();
    assert_eq!(
        doc.read_output("output").unwrap(),
        r##"[{"name":"red","color":"#FF0000","rgb":["255","0","0"]}]"##
    );
}

#[test]
fn commented_markup_is_not_record_text() {
    let html = page_with_rows(&[["1", "Red<!-- legacy: crimson -->", "#FF0000", "255", "0", "0"]])
        .replace("<tbody id=\"default\">\n", "<tbody id=\"default\">\n<!-- <tr><td>old</td></tr> -->\n");
    let (res, _) = load(html, ExtractOptions::default());
    let summary = res.unwrap().unwrap();
    assert_eq!(summary.records, vec![ColorRecord::new("Red", "#FF0000", ["255", "0", "0"])]);
    assert!(summary.skipped.is_empty());
}

#[test]
fn n_rows_in_table_order() {
    let rows = [
        ["1", "Red", "#FF0000", "255", "0", "0"],
        ["2", "Blue", "#0000FF", "0", "0", "255"],
        ["3", "Amber", "#FFBF00", "255", "191", "0"],
        ["4", "Azure", "#007FFF", "0", "127", "255"],
    ];
    let (res, doc) = load(page_with_rows(&rows), ExtractOptions::default());
    let summary = res.unwrap().unwrap();

    let parsed: Vec<ColorRecord> = serde_json::from_str(&doc.read_output("output").unwrap()).unwrap();
    assert_eq!(parsed.len(), rows.len());
    let names: Vec<_> = parsed.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["red", "blue", "amber", "azure"]);
    assert_eq!(parsed, summary.records);
}

#[test]
fn zero_rows_gives_empty_array() {
    let (res, doc) = load(page_with_rows(&[]), ExtractOptions::default());
    assert!(res.unwrap().unwrap().records.is_empty());
    assert_eq!(doc.read_output("output").unwrap(), "[]");
}

#[test]
fn output_round_trips_through_json() {
    let (res, _) = load(
        page_with_rows(&[["", "Olive Drab", "#6B8E23", "107", "142", "35"]]),
        ExtractOptions::default(),
    );
    let json = res.unwrap().unwrap().json;
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), json);
    assert_eq!(value[0]["rgb"][1], "142");
}

#[test]
fn two_loads_of_same_page_are_identical() {
    let html = page_with_rows(&[
        ["1", "Red", "#FF0000", "255", "0", "0"],
        ["2", "Blue", "#0000FF", "0", "0", "255"],
    ]);
    let (_, a) = load(html.clone(), ExtractOptions::default());
    let (_, b) = load(html, ExtractOptions::default());
    assert_eq!(a.read_output("output").unwrap(), b.read_output("output").unwrap());
    assert_eq!(a.html(), b.html());
}

#[test]
fn rerun_on_filled_page_is_byte_identical() {
    let html = page_with_rows(&[["1", "Teal", "#008080", "0", "128", "128"]]);
    let mut doc = HtmlDocument::new(html);
    let first = colors_saved::run(&mut doc, &ExtractOptions::default()).unwrap().json;
    let after_first = doc.html().to_string();
    let second = colors_saved::run(&mut doc, &ExtractOptions::default()).unwrap().json;
    assert_eq!(first, second);
    assert_eq!(doc.html(), after_first);
}

#[test]
fn short_row_skipped_by_default() {
    let html = page_with_rows(&[["1", "Red", "#FF0000", "255", "0", "0"]])
        .replace("</tbody>", "<tr><td>2</td><td>Half</td><td>#808080</td><td>128</td></tr></tbody>");
    let (res, doc) = load(html, ExtractOptions::default());
    let summary = res.unwrap().unwrap();
    assert_eq!(summary.skipped, [(1, 4)]);
    let parsed: Vec<ColorRecord> = serde_json::from_str(&doc.read_output("output").unwrap()).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].name, "red");
}

#[test]
fn short_row_fails_when_strict() {
    let html = page_with_rows(&[["1", "Red", "#FF0000", "255", "0", "0"]])
        .replace("</tbody>", "<tr><td>2</td><td>Half</td><td>#808080</td><td>128</td></tr></tbody>");
    let (res, doc) = load(html, ExtractOptions::default().strict());
    assert!(matches!(res, Err(Error::MalformedRow { index: 1, cells: 4, expected: 6 })));
    assert_eq!(doc.read_output("output").unwrap(), "");
}

#[test]
fn missing_table_fails_fast() {
    let html = page_with_rows(&[]).replace("id=\"default\"", "id=\"other\"");
    let (res, doc) = load(html, ExtractOptions::default());
    assert!(matches!(res, Err(Error::MissingElement { ref id }) if id == "default"));
    assert_eq!(doc.read_output("output").unwrap(), "");
}

#[test]
fn missing_output_fails_fast() {
    let html = page_with_rows(&[["1", "Red", "#FF0000", "255", "0", "0"]])
        .replace("<textarea id=\"output\"></textarea>", "");
    let (res, _) = load(html, ExtractOptions::default());
    assert!(matches!(res, Err(Error::MissingElement { ref id }) if id == "output"));
}

#[test]
fn header_rows_outside_the_container_are_ignored() {
    // the <thead> row has "Name" in cell 1; it must not show up
    let (res, _) = load(page_with_rows(&[["1", "Lime", "#00FF00", "0", "255", "0"]]), ExtractOptions::default());
    let summary = res.unwrap().unwrap();
    assert_eq!(summary.records.len(), 1);
    assert_eq!(summary.records[0].name, "lime");
}

#[test]
fn page_fires_once() {
    let mut page = Page::new(
        HtmlDocument::new(page_with_rows(&[["1", "Red", "#FF0000", "255", "0", "0"]])),
        ExtractOptions::default(),
    );
    assert!(page.on_load().unwrap().is_some());
    let html = page.document().html().to_string();
    assert!(page.on_load().unwrap().is_none());
    assert_eq!(page.state(), PageState::Done);
    assert_eq!(page.document().html(), html);
}

#[test]
fn synthetic_document_same_result_as_html() {
    let cells = ["1", "Red", "#FF0000", "255", "0", "0"];
    let mut mem = MemoryDocument::new()
        .with_table("default", [cells.into_iter().collect::<Row>()])
        .with_field("output");
    let from_mem = colors_saved::run(&mut mem, &ExtractOptions::default()).unwrap().json;

    let (res, _) = load(page_with_rows(&[cells]), ExtractOptions::default());
    assert_eq!(res.unwrap().unwrap().json, from_mem);
}
