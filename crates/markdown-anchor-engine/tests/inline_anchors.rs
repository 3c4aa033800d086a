use markdown_anchor_engine::{
    Config, InlineEngine, InlineNode, LinkAnchor, ParseOutcome, RecognizerConfig, RecognizerId,
    Span, anchors,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parse(engine: &InlineEngine, text: &str) -> Vec<InlineNode> {
    engine.parse(text, Span::new(0, text.len()))
}

#[rstest]
#[case::open_close(r#"<a name="x">content</a>"#, Some("x"), 23)]
#[case::self_closing(r#"<a name="x"/>"#, Some("x"), 13)]
#[case::no_name_attribute(r#"<a notaname="x"></a>"#, None, 20)]
fn recognizes_anchor(#[case] text: &str, #[case] link: Option<&str>, #[case] end: usize) {
    match LinkAnchor::parse(text, 0, text.len()) {
        ParseOutcome::Matched { span, consumed } => {
            assert_eq!(span.link(), link);
            assert_eq!(span.raw(), text);
            assert_eq!(consumed, Span::new(0, end));
        }
        ParseOutcome::NoMatch => panic!("expected a match for {text:?}"),
    }
}

#[rstest]
#[case::nested(r#"<a name="x"><a name="y"></a>"#)]
#[case::truncated("<a ")]
#[case::plain("no anchor here")]
fn declines(#[case] text: &str) {
    assert_eq!(LinkAnchor::parse(text, 0, text.len()), ParseOutcome::NoMatch);
}

#[test]
fn default_engine_routes_angle_bracket() {
    let engine = InlineEngine::default();
    assert_eq!(
        engine.trip_table().recognizers_for('<'),
        &[RecognizerId::LinkAnchor]
    );
}

#[test]
fn engine_collects_link_targets() {
    let engine = InlineEngine::default();
    let text = r#"<a name="intro"></a> Intro text. <a name="usage"/> Usage."#;
    let nodes = parse(&engine, text);

    let targets: Vec<_> = anchors(&nodes)
        .map(|(sp, a)| (sp, a.link().map(str::to_owned)))
        .collect();
    assert_eq!(
        targets,
        vec![
            (Span::new(0, 21), Some("intro".to_string())),
            (Span::new(33, 51), Some("usage".to_string())),
        ]
    );

    // Lossless: node spans tile the input
    let rebuilt: String = nodes
        .iter()
        .map(|n| {
            let sp = n.span();
            &text[sp.start..sp.end]
        })
        .collect();
    assert_eq!(rebuilt, text);
}

#[test]
fn engine_respects_disabled_recognizer() {
    let config = Config {
        recognizers: RecognizerConfig {
            link_anchors: false,
        },
    };
    let engine = InlineEngine::new(&config.recognizers);
    let text = r#"<a name="x"/>"#;
    assert_eq!(parse(&engine, text), vec![InlineNode::Text(Span::new(0, 13))]);
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(InlineEngine::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let text = format!(r#"item {i} <a name="n{i}"/>"#);
                let nodes = engine.parse(&text, Span::new(0, text.len()));
                anchors(&nodes)
                    .filter_map(|(_, a)| a.link().map(str::to_owned))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), vec![format!("n{i}")]);
    }
}
