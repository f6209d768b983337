use markdown_sitegen_engine::{
    BlockKind, ConvertError, HtmlError, InlineError, convert_document, extract_title,
    markdown_to_html_node, segment,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("simple_paragraph")]
#[case("headings")]
#[case("lists")]
#[case("quote_and_code")]
#[case("links_and_images")]
fn fixture_renders(#[case] name: &str) {
    assert_fixture(name);
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let html = convert_document(&md).unwrap();
    assert!(html.starts_with("<div>") && html.ends_with("</div>"));

    insta::assert_snapshot!(name, html);
}

#[test]
fn title_and_bold_paragraph() {
    let html = convert_document("# Title\n\nHello **world**").unwrap();
    assert_eq!(html, "<div><h1>Title</h1><p>Hello <b>world</b></p></div>");
}

#[rstest]
#[case("")]
#[case("   \n\n\t\n")]
fn empty_document_fails(#[case] md: &str) {
    assert!(segment(md).is_empty());
    assert_eq!(
        convert_document(md),
        Err(ConvertError::Html(HtmlError::EmptyChildren {
            tag: "div".to_string()
        }))
    );
}

#[test]
fn unterminated_span_aborts_whole_document() {
    assert_eq!(
        convert_document("# Fine\n\nnot _fine"),
        Err(ConvertError::Inline(InlineError::UnterminatedInlineSpan {
            delimiter: "_"
        }))
    );
}

#[test]
fn empty_link_target_aborts_conversion() {
    assert_eq!(
        convert_document("[nowhere]()"),
        Err(ConvertError::Inline(InlineError::MissingLinkTarget {
            text: "nowhere".to_string()
        }))
    );
}

#[test]
fn html_in_text_is_passed_through() {
    let html = convert_document("a <br> b").unwrap();
    assert_eq!(html, "<div><p>a <br> b</p></div>");
}

#[test]
fn tree_root_is_div() {
    let node = markdown_to_html_node("para").unwrap();
    assert_eq!(node.tag(), Some("div"));
}

#[test]
fn title_is_independent_of_conversion() {
    let md = "intro\n\n# Real Title\n\n# ignored";
    assert_eq!(extract_title(md).unwrap(), "Real Title");
    assert_eq!(
        segment(md).iter().map(|b| b.kind).collect::<Vec<_>>(),
        vec![
            BlockKind::Paragraph,
            BlockKind::Heading { level: 1 },
            BlockKind::Heading { level: 1 },
        ]
    );
}

/// Converting independent documents from several threads needs no locking.
#[test]
fn documents_convert_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || convert_document(&format!("# Page {i}\n\n**{i}**"))))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap().unwrap(),
            format!("<div><h1>Page {i}</h1><p><b>{i}</b></p></div>")
        );
    }
}
