// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{parse_graphml, ParseDiagnostics};
use crate::model::TagKind;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
<comments>
  first comment line
  second   comment line
</comments>
<graph edgedefault="undirected">
<node id="1" x="10" y="20" weight="5" />
<node id="2"/>
<edge source="1" target="2" weight="3.7" />
</graph>
</graphml>
"#;

#[test]
fn parse_graphml_collects_comments_and_records() {
    let parsed = parse_graphml(SAMPLE);

    assert_eq!(parsed.comments, ["first comment line", "second   comment line"]);
    assert_eq!(parsed.records.len(), 3);

    let first = &parsed.records[0];
    assert_eq!(first.kind(), TagKind::Node);
    assert_eq!(first.get("id"), Some("1"));
    assert_eq!(first.get("x"), Some("10"));
    assert_eq!(first.get("y"), Some("20"));
    assert_eq!(first.get("weight"), Some("5"));

    let second = &parsed.records[1];
    assert_eq!(second.get("id"), Some("2"));
    assert_eq!(second.attributes().len(), 1);

    let edge = &parsed.records[2];
    assert_eq!(edge.kind(), TagKind::Edge);
    assert_eq!(edge.get("source"), Some("1"));
    assert_eq!(edge.get("target"), Some("2"));
    assert_eq!(edge.get("weight"), Some("3.7"));

    // `</graph>` and `</graphml>` are not records.
    assert_eq!(
        parsed.diagnostics,
        ParseDiagnostics {
            ignored_lines: 2,
            ..ParseDiagnostics::default()
        }
    );
}

#[test]
fn parse_graphml_without_comment_block_has_no_comments() {
    let parsed = parse_graphml("<graph>\n<node id=\"1\"/>\n</graph>\n");

    assert!(parsed.comments.is_empty());
    assert!(!parsed.diagnostics.unterminated_comments);
    assert_eq!(parsed.records.len(), 1);
}

#[test]
fn parse_graphml_keeps_comments_when_close_marker_is_missing() {
    let input = "<comments>\nalpha\n\nbeta\n";

    let parsed = parse_graphml(input);

    assert_eq!(parsed.comments, ["alpha", "", "beta"]);
    assert!(parsed.diagnostics.unterminated_comments);
    assert!(parsed.records.is_empty());
}

#[test]
fn parse_graphml_ignores_tags_before_the_graph_marker() {
    let input = "<node id=\"9\"/>\n<graph>\n<node id=\"1\"/>\n";

    let parsed = parse_graphml(input);

    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.records[0].get("id"), Some("1"));
}

#[test]
fn parse_graphml_without_graph_marker_yields_no_records() {
    let parsed = parse_graphml("<node id=\"1\"/>\n<edge source=\"1\" target=\"2\"/>\n");

    assert!(parsed.records.is_empty());
    assert_eq!(parsed.diagnostics, ParseDiagnostics::default());
}

#[test]
fn parse_graphml_of_empty_input_is_empty() {
    let parsed = parse_graphml("");

    assert!(parsed.comments.is_empty());
    assert!(parsed.records.is_empty());
}

#[test]
fn parse_graphml_drops_malformed_tokens_and_empty_values() {
    let input = "<graph>\n<node id=\"4\" stray weight=\"\" x= y=\"7\" />\n";

    let parsed = parse_graphml(input);

    let node = &parsed.records[0];
    assert_eq!(node.get("id"), Some("4"));
    assert_eq!(node.get("y"), Some("7"));
    assert_eq!(node.get("weight"), None);
    assert_eq!(node.get("x"), None);
    assert_eq!(parsed.diagnostics.malformed_tokens, 1);
    assert_eq!(parsed.diagnostics.empty_values, 2);
}

#[rstest]
#[case::plain("id=12", Some("12"))]
#[case::quoted("id=\"12\"", Some("12"))]
#[case::doubly_quoted("id=\"\"12\"\"", Some("12"))]
#[case::second_equals_truncates("id=12=13", Some("12"))]
fn parse_graphml_reads_attribute_values(#[case] token: &str, #[case] expected: Option<&str>) {
    let input = format!("<graph>\n<node {token}/>\n");

    let parsed = parse_graphml(&input);

    assert_eq!(parsed.records[0].get("id"), expected);
}

#[test]
fn parse_graphml_skips_blank_lines_and_unrelated_tags() {
    let input = "<graph>\n\n   \n<key id=\"d0\"/>\n<edge source=\"1\" target=\"2\"/>\n";

    let parsed = parse_graphml(input);

    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.records[0].kind(), TagKind::Edge);
    assert_eq!(parsed.diagnostics.ignored_lines, 1);
}

#[test]
fn into_tagged_graph_separates_nodes_and_edges() {
    let (graph, diagnostics) = parse_graphml(SAMPLE).into_tagged_graph();

    assert_eq!(graph.comments().len(), 2);
    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(diagnostics.ignored_lines, 2);
}
