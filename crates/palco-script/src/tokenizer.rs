//! Script tokenizer.
//!
//! Splits a scene's raw text into line units, extracting embedded
//! directives and an optional leading speaker label from each.
//! Tokenization is pure and total: malformed directive syntax simply fails
//! to match and stays in the line as literal text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::directive::{Conditional, Directive, StagePosition};

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(SCENE_START|SHOW|HIDE|IA_CONTEXT|IA_PROMPT|IF|ELSE|ENDIF)(?::([^}]*))?\}\}")
        .expect("directive pattern is valid")
});

static SPEAKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\p{L}][\p{L} ]*):\s*(.*)$").expect("speaker pattern is valid"));

/// One tokenized script line.
///
/// A line is either a control line (`conditional` set, never displayed) or
/// a content line (speaker/text/directives meaningful), never both roles in
/// the filtered output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedLine {
    /// Speaker label, when the line starts with `NAME:`.
    pub speaker: Option<String>,
    /// Display text with all matched directives removed.
    pub text: String,
    /// Stage directives extracted from the line, in authored order.
    pub directives: Vec<Directive>,
    /// Conditional directive, when the line is a control line. When a line
    /// carries several conditionals the last one wins.
    pub conditional: Option<Conditional>,
}

/// Tokenizes raw scene text into an ordered list of parsed lines.
///
/// Lines are delimited by `'\n'`; blank and whitespace-only segments are
/// discarded.
#[must_use]
pub fn tokenize(raw: &str) -> Vec<ParsedLine> {
    raw.lines()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_segment)
        .collect()
}

enum Extracted {
    Stage(Directive),
    Control(Conditional),
    /// The tag matched but its arguments are unusable; the whole match
    /// stays in the line as literal text.
    Malformed,
}

fn parse_segment(segment: &str) -> ParsedLine {
    let mut line = ParsedLine::default();
    let mut residual = String::with_capacity(segment.len());
    let mut cursor = 0;

    for caps in DIRECTIVE.captures_iter(segment) {
        let matched = caps.get(0).expect("capture group 0 always matches");
        let kind = &caps[1];
        let args = caps.get(2).map(|m| m.as_str().trim());

        match extract(kind, args) {
            Extracted::Stage(directive) => line.directives.push(directive),
            Extracted::Control(conditional) => line.conditional = Some(conditional),
            Extracted::Malformed => continue,
        }

        residual.push_str(&segment[cursor..matched.start()]);
        cursor = matched.end();
    }
    residual.push_str(&segment[cursor..]);

    let residual = residual.trim();
    if let Some(caps) = SPEAKER.captures(residual) {
        line.speaker = Some(caps[1].trim().to_owned());
        line.text = caps[2].to_owned();
    } else {
        line.text = residual.to_owned();
    }
    line
}

fn extract(kind: &str, args: Option<&str>) -> Extracted {
    match kind {
        "ELSE" => Extracted::Control(Conditional::Else),
        "ENDIF" => Extracted::Control(Conditional::Endif),
        "IF" => match args.and_then(|a| a.split_once('=')) {
            Some((variable, value)) if !variable.trim().is_empty() => {
                Extracted::Control(Conditional::If {
                    variable: variable.trim().to_owned(),
                    value: value.trim().to_owned(),
                })
            }
            _ => Extracted::Malformed,
        },
        // All remaining tags require arguments.
        _ => match args.filter(|a| !a.is_empty()) {
            None => Extracted::Malformed,
            Some(args) => match kind {
                "SCENE_START" | "SHOW" => match split_actor(args) {
                    None => Extracted::Malformed,
                    Some((actor, position)) if kind == "SHOW" => {
                        Extracted::Stage(Directive::Show { actor, position })
                    }
                    Some((actor, position)) => {
                        Extracted::Stage(Directive::SceneStart { actor, position })
                    }
                },
                "HIDE" => match split_actor(args) {
                    None => Extracted::Malformed,
                    Some((actor, _)) => Extracted::Stage(Directive::Hide { actor }),
                },
                _ => Extracted::Stage(Directive::Opaque {
                    kind: kind.to_owned(),
                    args: args.to_owned(),
                }),
            },
        },
    }
}

/// Splits `actor@position` arguments; the position defaults to center when
/// absent. An empty actor id is malformed.
fn split_actor(args: &str) -> Option<(String, StagePosition)> {
    let (actor, position) = match args.split_once('@') {
        Some((actor, position)) => (actor.trim(), StagePosition::parse(position)),
        None => (args.trim(), StagePosition::Center),
    };
    if actor.is_empty() {
        return None;
    }
    Some((actor.to_owned(), position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_has_no_speaker() {
        let lines = tokenize("The lecture hall falls silent.");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].speaker, None);
        assert_eq!(lines[0].text, "The lecture hall falls silent.");
    }

    #[test]
    fn test_speaker_label_is_split_from_text() {
        let lines = tokenize("MANUELA: Bos días a todos.");
        assert_eq!(lines[0].speaker.as_deref(), Some("MANUELA"));
        assert_eq!(lines[0].text, "Bos días a todos.");
    }

    #[test]
    fn test_speaker_label_allows_spaces_and_accents() {
        let lines = tokenize("DONA ÁNXELA: Xa chegou.");
        assert_eq!(lines[0].speaker.as_deref(), Some("DONA ÁNXELA"));
        assert_eq!(lines[0].text, "Xa chegou.");
    }

    #[test]
    fn test_blank_and_whitespace_segments_are_dropped() {
        let lines = tokenize("first\n\n   \nsecond\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "first");
        assert_eq!(lines[1].text, "second");
    }

    #[test]
    fn test_show_directive_is_extracted_and_removed_from_text() {
        let lines = tokenize("{{SHOW: ana@left}}ANA: Hello.");
        assert_eq!(
            lines[0].directives,
            vec![Directive::Show {
                actor: "ana".to_owned(),
                position: StagePosition::Left,
            }]
        );
        assert_eq!(lines[0].speaker.as_deref(), Some("ANA"));
        assert_eq!(lines[0].text, "Hello.");
    }

    #[test]
    fn test_position_defaults_to_center_when_absent() {
        let lines = tokenize("{{SHOW: ana}}");
        assert_eq!(
            lines[0].directives,
            vec![Directive::Show {
                actor: "ana".to_owned(),
                position: StagePosition::Center,
            }]
        );
    }

    #[test]
    fn test_multiple_stage_directives_on_one_line_keep_order() {
        let lines = tokenize("{{SCENE_START: ana@left}}{{SHOW: bea@right}}{{HIDE: ana}}");
        assert_eq!(
            lines[0].directives,
            vec![
                Directive::SceneStart {
                    actor: "ana".to_owned(),
                    position: StagePosition::Left,
                },
                Directive::Show {
                    actor: "bea".to_owned(),
                    position: StagePosition::Right,
                },
                Directive::Hide {
                    actor: "ana".to_owned(),
                },
            ]
        );
        assert_eq!(lines[0].text, "");
    }

    #[test]
    fn test_if_directive_splits_on_first_equals() {
        let lines = tokenize("{{IF: mood=a=b}}");
        assert_eq!(
            lines[0].conditional,
            Some(Conditional::If {
                variable: "mood".to_owned(),
                value: "a=b".to_owned(),
            })
        );
    }

    #[test]
    fn test_else_and_endif_need_no_arguments() {
        let lines = tokenize("{{ELSE}}\n{{ENDIF}}");
        assert_eq!(lines[0].conditional, Some(Conditional::Else));
        assert_eq!(lines[1].conditional, Some(Conditional::Endif));
    }

    #[test]
    fn test_last_conditional_on_a_line_wins() {
        let lines = tokenize("{{IF: a=1}}{{ELSE}}");
        assert_eq!(lines[0].conditional, Some(Conditional::Else));
    }

    #[test]
    fn test_show_without_arguments_stays_literal() {
        let lines = tokenize("{{SHOW}} remains");
        assert!(lines[0].directives.is_empty());
        assert_eq!(lines[0].text, "{{SHOW}} remains");
    }

    #[test]
    fn test_if_without_equals_stays_literal() {
        let lines = tokenize("{{IF: mood}}");
        assert_eq!(lines[0].conditional, None);
        assert_eq!(lines[0].text, "{{IF: mood}}");
    }

    #[test]
    fn test_unknown_tag_stays_literal() {
        let lines = tokenize("{{EXPLODE: now}}");
        assert!(lines[0].directives.is_empty());
        assert_eq!(lines[0].text, "{{EXPLODE: now}}");
    }

    #[test]
    fn test_opaque_hooks_pass_through_unparsed() {
        let lines = tokenize("{{IA_PROMPT: improvise a protest chant}}");
        assert_eq!(
            lines[0].directives,
            vec![Directive::Opaque {
                kind: "IA_PROMPT".to_owned(),
                args: "improvise a protest chant".to_owned(),
            }]
        );
    }

    #[test]
    fn test_tokenization_is_deterministic() {
        let raw = "{{SHOW: ana@left}}ANA: Hi.\n{{IF: mood=happy}}\nANA: Great.\n{{ENDIF}}";
        assert_eq!(tokenize(raw), tokenize(raw));
    }
}
