use super::cards;

pub const ONE_CARD_SPREAD: &str = "원 카드 리딩 (오늘의 메시지)";
pub const THREE_CARD_SPREAD: &str = "쓰리 카드 리딩 (과거-현재-미래)";

pub const TAROT_READER_SYSTEM_PROMPT: &str = "당신은 따뜻하고 신비로운 분위기의 타로 리더입니다.
항상 한국어로, 질문자의 마음을 헤아리며 부드럽고 희망적인 어조로 이야기합니다.
카드의 키워드를 바탕으로 해석하되, 단정적인 예언보다는 질문자가 스스로 길을 찾을 수 있도록 돕는 통찰을 전합니다.";

pub const FOLLOWUP_SYSTEM_PROMPT: &str = "당신은 따뜻하고 신비로운 분위기의 타로 리더입니다.
질문자는 이미 카드 리딩을 받았고, 같은 카드를 바탕으로 추가 질문을 하고 있습니다.
이전에 뽑힌 카드의 의미를 이어받아 한국어로 간결하고 다정하게 답변합니다.";

/// Section headings the interpretation template asks the model to use.
pub const INTERPRETATION_HEADING: &str = "1. 카드 해석";
pub const ADVICE_HEADING: &str = "2. 실천 조언";
pub const INTERPRETATION_LENGTH_HINT: &str = "(200-300자)";
pub const ADVICE_LENGTH_HINT: &str = "(100-150자)";

/// One `"<name>: <kw1>, <kw2>, ..."` line per known card, in input order.
pub fn build_keyword_block<S: AsRef<str>>(cards: &[S]) -> String {
    cards
        .iter()
        .filter_map(|card| {
            let name = card.as_ref();
            cards::lookup(name).map(|keywords| format!("{}: {}", name, keywords.join(", ")))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only a single card counts as a one-card reading; every other count is
/// labelled as the three-card spread.
pub fn spread_type<S>(cards: &[S]) -> &'static str {
    if cards.len() == 1 {
        ONE_CARD_SPREAD
    } else {
        THREE_CARD_SPREAD
    }
}

pub fn build_interpretation_prompt<S: AsRef<str>>(question: &str, cards: &[S]) -> String {
    let user_prompt = format!(
        r#"## 리딩 정보
- 스프레드: {spread_type}
- 질문: {question}

## 뽑힌 카드와 키워드
{card_info}

## 답변 형식
다음 형식을 지켜 답변해주세요.
{INTERPRETATION_HEADING} {INTERPRETATION_LENGTH_HINT}: 카드의 의미를 질문과 연결하여 해석합니다.
{ADVICE_HEADING} {ADVICE_LENGTH_HINT}: 지금 바로 실천할 수 있는 조언을 전합니다.

이제 타로 리더로서 답변을 시작하세요."#,
        spread_type = spread_type(cards),
        card_info = build_keyword_block(cards),
    );

    format!("{TAROT_READER_SYSTEM_PROMPT}\n\n{user_prompt}")
}

pub fn build_followup_prompt<S: AsRef<str>>(question: &str, cards: &[S]) -> String {
    let cards_str = cards
        .iter()
        .map(|card| card.as_ref())
        .collect::<Vec<_>>()
        .join(", ");

    let user_prompt = format!(
        r#"## 이전에 뽑힌 카드
{cards_str}

## 추가 질문
{question}

위 카드의 흐름을 바탕으로 3-4문장으로 답변해주세요."#
    );

    format!("{FOLLOWUP_SYSTEM_PROMPT}\n\n{user_prompt}")
}
