//! Splits a generated reading into its interpretation and advice sections.
//!
//! The model is asked to answer under two numbered headings, but nothing
//! guarantees it will. When the advice heading is missing or appears more
//! than once, the whole text becomes the interpretation and a fixed advice
//! string is used instead. Parsing never fails.

use super::prompt::{
    ADVICE_HEADING, ADVICE_LENGTH_HINT, INTERPRETATION_HEADING, INTERPRETATION_LENGTH_HINT,
};

pub const DEFAULT_ADVICE: &str =
    "카드가 전하는 메시지에 귀 기울이며, 당신의 직관을 믿고 한 걸음씩 나아가 보세요.";

pub fn parse(raw: &str) -> (String, String) {
    let parts: Vec<&str> = raw.split(ADVICE_HEADING).collect();

    match parts.as_slice() {
        [interpretation, advice] => {
            let interpretation = interpretation
                .replace(INTERPRETATION_HEADING, "")
                .replace(INTERPRETATION_LENGTH_HINT, "");
            let advice = advice.replace(ADVICE_LENGTH_HINT, "");

            (clean_section(&interpretation), clean_section(&advice))
        }
        _ => (raw.trim().to_string(), DEFAULT_ADVICE.to_string()),
    }
}

fn clean_section(section: &str) -> String {
    section
        .trim_matches(|c: char| c == ':' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_inline_sections() {
        let (interpretation, advice) =
            parse("1. 카드 해석: 새로운 시작이 보입니다. 2. 실천 조언: advice text");

        assert_eq!(interpretation, "새로운 시작이 보입니다.");
        assert_eq!(advice, "advice text");
    }

    #[test]
    fn test_parse_strips_length_hints() {
        let raw = "1. 카드 해석 (200-300자): 태양 카드는 밝은 기운을 전합니다.\n\n2. 실천 조언 (100-150자): 오늘은 먼저 웃어 보세요.\n";
        let (interpretation, advice) = parse(raw);

        assert_eq!(interpretation, "태양 카드는 밝은 기운을 전합니다.");
        assert_eq!(advice, "오늘은 먼저 웃어 보세요.");
    }

    #[test]
    fn test_parse_without_interpretation_heading() {
        let (interpretation, advice) = parse("카드가 변화를 말합니다.\n2. 실천 조언:\n천천히 준비하세요.");

        assert_eq!(interpretation, "카드가 변화를 말합니다.");
        assert_eq!(advice, "천천히 준비하세요.");
    }

    #[test]
    fn test_parse_missing_marker_uses_default_advice() {
        let raw = "  헤딩 없이 자유롭게 쓴 해석입니다.  ";
        let first = parse(raw);
        let second = parse(raw);

        assert_eq!(first.0, "헤딩 없이 자유롭게 쓴 해석입니다.");
        assert_eq!(first.1, DEFAULT_ADVICE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_repeated_marker_uses_default_advice() {
        let raw = "1. 카드 해석: a 2. 실천 조언: b 2. 실천 조언: c";
        let (interpretation, advice) = parse(raw);

        assert_eq!(interpretation, raw);
        assert_eq!(advice, DEFAULT_ADVICE);
    }

    #[test]
    fn test_parse_empty_text() {
        assert_eq!(parse(""), (String::new(), DEFAULT_ADVICE.to_string()));
    }
}
