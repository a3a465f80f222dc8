//! End-to-end conversion tests over the whole core pipeline.
//!
//! Editor trees go through [`encode`] and come back through [`decode`]; the
//! emitted JSON is pinned with inline snapshots.

use insta::assert_snapshot;

use crate::decode::decode;
use crate::encode::encode;
use crate::error::DecodeError;
use crate::label::render_label;
use crate::tag::{TagAttrs, TagKind};
use crate::tree::EditorNode;

fn score(name: &str, objective: &str) -> EditorNode {
    TagAttrs::Score {
        name: name.into(),
        objective: objective.into(),
    }
    .into()
}

fn selector(selector: &str) -> EditorNode {
    TagAttrs::Selector {
        selector: selector.into(),
    }
    .into()
}

fn encode_json(nodes: &[EditorNode]) -> String {
    encode(nodes).to_pretty_json()
}

/// Decode then encode, the way the editor reloads pasted JSON.
fn reencode(input: &str) -> String {
    let nodes = decode(input).expect("decode failed");
    encode_json(&nodes)
}

// === Encoding ===

#[test]
fn test_encode_text_and_score() {
    let output = encode_json(&[EditorNode::text("Hello "), score("@p", "coins")]);
    assert_snapshot!(output, @r#"
    {
      "rawtext": [
        {
          "text": "Hello "
        },
        {
          "score": {
            "name": "@p",
            "objective": "coins"
          }
        }
      ]
    }
    "#);
}

#[test]
fn test_encode_paragraphs() {
    let output = encode_json(&[
        EditorNode::block([EditorNode::text("Line one")]),
        EditorNode::block([EditorNode::text("Line two")]),
    ]);
    assert_snapshot!(output, @r#"
    {
      "rawtext": [
        {
          "text": "Line one\nLine two"
        }
      ]
    }
    "#);
}

#[test]
fn test_encode_nbsp_after_tag() {
    let output = encode_json(&[
        selector("@a[tag=vip]"),
        EditorNode::text("\u{a0}is here"),
    ]);
    assert_snapshot!(output, @r#"
    {
      "rawtext": [
        {
          "selector": "@a[tag=vip]"
        },
        {
          "text": " is here"
        }
      ]
    }
    "#);
}

#[test]
fn test_encode_conditional_sentinel() {
    let output = encode_json(&[TagAttrs::Conditional {
        condition: r#"{"selector":"@p[tag=admin]"}"#.into(),
        then: r#"[{"text":"Welcome, admin"}]"#.into(),
    }
    .into()]);
    assert_snapshot!(output, @r#"
    {
      "rawtext": [
        {
          "translate": "%%2",
          "with": {
            "rawtext": [
              {
                "selector": "@p[tag=admin]"
              },
              {
                "rawtext": [
                  {
                    "text": "Welcome, admin"
                  }
                ]
              }
            ]
          }
        }
      ]
    }
    "#);
}

#[test]
fn test_encode_broken_attributes_degrade() {
    let output = encode_json(&[
        TagAttrs::Translate {
            translate: "welcome.msg".into(),
            with: "not valid json".into(),
        }
        .into(),
        TagAttrs::Conditional {
            condition: "{".into(),
            then: "[]".into(),
        }
        .into(),
        TagAttrs::Unknown {
            kind: "sparkle".into(),
        }
        .into(),
    ]);
    assert_snapshot!(output, @r#"
    {
      "rawtext": [
        {
          "translate": "welcome.msg",
          "with": []
        },
        {
          "text": "[conditional parse error]"
        }
      ]
    }
    "#);
}

#[test]
fn test_encode_empty_surface() {
    assert_snapshot!(encode_json(&[]), @r#"
    {
      "rawtext": []
    }
    "#);
}

// === Decoding ===

#[test]
fn test_decode_mixed_document() {
    let nodes = decode(
        r#"{"rawtext":[
            {"text":"Hi "},
            {"selector":"@p"},
            {"text":", you have "},
            {"score":{"name":"@p","objective":"coins"}},
            {"translate":"item.apple.name","with":["x"]}
        ]}"#,
    )
    .unwrap();

    let labels: Vec<String> = nodes
        .iter()
        .map(|node| match node {
            EditorNode::Tag(attrs) => render_label(attrs),
            EditorNode::Text(text) => text.clone(),
            other => format!("{other:?}"),
        })
        .collect();
    assert_eq!(
        labels,
        vec![
            "Hi ",
            "[@p]",
            ", you have ",
            "[@p:coins]",
            "[t:item.apple.name]"
        ]
    );
}

#[test]
fn test_decode_conditional_becomes_conditional_tag() {
    let nodes = decode(
        r#"{"rawtext":[{"translate":"%%2","with":{"rawtext":[{"score":{"name":"@p","objective":"x"}},{"rawtext":[{"text":"ok"}]}]}}]}"#,
    )
    .unwrap();
    assert_eq!(nodes.len(), 1);
    let attrs = nodes[0].as_tag().unwrap();
    assert_eq!(attrs.kind(), Some(TagKind::Conditional));
    assert_eq!(render_label(attrs), "[IF score THEN ...]");
}

#[test]
fn test_decode_rejects_without_output() {
    assert!(matches!(decode("   "), Err(DecodeError::EmptyInput)));
    assert!(matches!(decode("{not json"), Err(DecodeError::InvalidJson(_))));
    assert!(matches!(
        decode(r#"{"text":"hi"}"#),
        Err(DecodeError::MissingRawtext)
    ));
    assert!(matches!(
        decode(r#"{"rawtext":{"text":"hi"}}"#),
        Err(DecodeError::RawtextNotArray { found: "object" })
    ));
}

#[test]
fn test_decode_error_messages() {
    let err = decode(r#"{"foo":1}"#).unwrap_err();
    assert_snapshot!(err.to_string(), @"invalid RawJSON format: requires a 'rawtext' array");
    let err = decode("").unwrap_err();
    assert_snapshot!(err.to_string(), @"no JSON input provided");
}

// === Round trips ===

#[test]
fn test_round_trip_canonical_documents() {
    let documents = [
        r#"{"rawtext":[{"text":"plain"}]}"#,
        r#"{"rawtext":[{"text":"Hello "},{"score":{"name":"@p","objective":"coins"}},{"text":"!"}]}"#,
        r#"{"rawtext":[{"selector":"@a[tag=vip,hasitem=[{item=apple},{item=stick,quantity=2..}]]"}]}"#,
        r#"{"rawtext":[{"translate":"chat.type.text","with":["a","b"]}]}"#,
        r#"{"rawtext":[{"translate":"%%2","with":{"rawtext":[{"selector":"@p"},{"rawtext":[{"text":"yes"}]}]}}]}"#,
        r#"{"rawtext":[{"text":"one\ntwo"},{"selector":"@s"}]}"#,
        r#"{"rawtext":[{"translate":"chat.msg","with":{"rawtext":[{"text":"Steve"}]}}]}"#,
        r#"{"rawtext":[{"translate":"%%2","with":{"rawtext":[{"text":"only one"}]}}]}"#,
    ];

    for document in documents {
        let expected: serde_json::Value = serde_json::from_str(document).unwrap();
        let actual: serde_json::Value = serde_json::from_str(&reencode(document)).unwrap();
        assert_eq!(actual, expected, "round trip changed {document}");
    }
}

#[test]
fn test_round_trip_merges_split_text() {
    let output = reencode(r#"{"rawtext":[{"text":"a"},{"text":""},{"text":"b"}]}"#);
    assert_snapshot!(output, @r#"
    {
      "rawtext": [
        {
          "text": "ab"
        }
      ]
    }
    "#);
}

#[test]
fn test_reencode_is_idempotent() {
    let input = r#"{"rawtext":[{"text":"x"},{"text":"y"},{"selector":"@e[type=cow]"},{"translate":"k"}]}"#;
    let once = reencode(input);
    let twice = reencode(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_default_tags_encode() {
    let nodes: Vec<EditorNode> = TagKind::ALL
        .iter()
        .map(|kind| TagAttrs::default_for(*kind).into())
        .collect();
    let output = encode_json(&nodes);
    assert_snapshot!(output, @r#"
    {
      "rawtext": [
        {
          "score": {
            "name": "@p",
            "objective": "score"
          }
        },
        {
          "selector": "@p"
        },
        {
          "translate": "key.example",
          "with": [
            {
              "text": "example"
            }
          ]
        },
        {
          "translate": "%%2",
          "with": {
            "rawtext": [
              {
                "selector": "@p"
              },
              {
                "rawtext": [
                  {
                    "text": "Success!"
                  }
                ]
              }
            ]
          }
        }
      ]
    }
    "#);
}
