/// Major Arcana in order, with the keywords fed to the model.
static CARD_MEANINGS: &[(&str, &[&str])] = &[
    ("바보", &["새로운 시작", "순수함", "모험"]),
    ("마법사", &["창조", "의지", "기술"]),
    ("여사제", &["직관", "신비", "무의식"]),
    ("여황제", &["풍요", "양육", "창조성"]),
    ("황제", &["권위", "구조", "안정"]),
    ("교황", &["전통", "지혜", "영적 지도"]),
    ("연인", &["사랑", "선택", "조화"]),
    ("전차", &["승리", "의지", "전진"]),
    ("힘", &["용기", "인내", "자제력"]),
    ("은둔자", &["성찰", "고독", "내면의 지혜"]),
    ("운명의 수레바퀴", &["변화", "운명", "순환"]),
    ("정의", &["공정", "진실", "균형"]),
    ("매달린 사람", &["희생", "새로운 관점", "정체"]),
    ("죽음", &["변화", "종결", "재탄생"]),
    ("절제", &["균형", "조화", "인내"]),
    ("악마", &["속박", "유혹", "물질"]),
    ("탑", &["파괴", "계시", "해방"]),
    ("별", &["희망", "영감", "치유"]),
    ("달", &["환상", "불안", "무의식"]),
    ("태양", &["성공", "기쁨", "긍정"]),
    ("심판", &["깨달음", "재생", "결정"]),
    ("세계", &["완성", "성취", "통합"]),
];

pub fn lookup(card_name: &str) -> Option<&'static [&'static str]> {
    CARD_MEANINGS
        .iter()
        .find(|(name, _)| *name == card_name)
        .map(|(_, keywords)| *keywords)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    CARD_MEANINGS.iter().map(|(name, _)| *name)
}
