//! Dart language rules used by the generator.

/// Words that cannot be used as a member name in generated code.
///
/// Reserved words, built-in identifiers and the async-context keywords.
/// Built-in identifiers are technically allowed as field names, but they
/// confuse readers and some analyzers, so they are avoided too.
pub const RESERVED_WORDS: &[&str] = &[
    // reserved words
    "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
    "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void",
    "while", "with",
    // async contexts
    "await", "yield",
    // built-in identifiers
    "abstract", "as", "covariant", "deferred", "dynamic", "export", "extension", "external",
    "factory", "Function", "get", "implements", "import", "interface", "late", "library",
    "mixin", "operator", "part", "required", "set", "static", "typedef",
    // inherited from Object; a static member may not share their names
    "hashCode", "noSuchMethod", "runtimeType", "toString",
];

/// Check whether `word` is a Dart reserved word, built-in identifier or
/// `Object` member.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Check that `s` is a usable Dart identifier.
///
/// Identifiers start with a letter, `_` or `$`, continue with letters,
/// digits, `_` or `$`, and must not be a reserved word.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    !is_reserved(s)
}

/// Render `value` as a single-quoted Dart string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Make `text` safe to place after `///` on a single line.
pub fn comment_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
