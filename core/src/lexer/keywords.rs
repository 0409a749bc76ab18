use phf::phf_map;

use super::token::TokenKind;

/// Reserved words in both scripts. Each Latin spelling sits next to its Japanese twin.
static RESERVED: phf::Map<&'static str, TokenKind> = phf_map! {
    "module" => TokenKind::Module,
    "モジュール" => TokenKind::Module,
    "import" => TokenKind::Import,
    "インポート" => TokenKind::Import,
    "let" => TokenKind::Let,
    "宣言" => TokenKind::Let,
    "const" => TokenKind::Const,
    "定数" => TokenKind::Const,
    "nil" => TokenKind::Nil,
    "無" => TokenKind::Nil,
    "true" => TokenKind::Boolean,
    "本当" => TokenKind::Boolean,
    "false" => TokenKind::Boolean,
    "嘘" => TokenKind::Boolean,
    "if" => TokenKind::If,
    "もし" => TokenKind::If,
    "while" => TokenKind::While,
    "繰り返す" => TokenKind::While,
    "func" => TokenKind::Func,
    "関数" => TokenKind::Func,
};

/// Look up an identifier-shaped spelling in the reserved-word table.
pub fn lookup(text: &str) -> Option<TokenKind> {
    RESERVED.get(text).copied()
}

/// Every reserved spelling, sorted.
pub fn reserved_words() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = RESERVED.keys().copied().collect();
    words.sort_unstable();
    words
}
