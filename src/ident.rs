use std::sync::OnceLock;

use regex::Regex;

static IDENT: OnceLock<Regex> = OnceLock::new();

fn ident_re() -> &'static Regex {
    IDENT.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"))
}

/// True when `name` is a valid module identifier: non-empty, no leading
/// digit, ASCII alphanumerics and underscore only.
pub fn is_valid(name: &str) -> bool {
    ident_re().is_match(name)
}

/// Derive the PascalCase class name: each underscore-delimited word with its
/// first letter uppercased, concatenated (`my_cool_module` -> `MyCoolModule`).
pub fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
