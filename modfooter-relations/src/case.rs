//! Identifier case conversion.
//!
//! Content types arrive in whatever case the schema author chose
//! (`BlogPost`, `blog_post`, `blog-post`). Words are split on any
//! non-alphanumeric character, on lower-to-upper transitions, between
//! letters and digits, and at the end of an uppercase run followed by a
//! lowercase letter (`XMLHttp` → `XML`, `Http`).

/// Splits an identifier into words.
pub fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_alphabetic() != c.is_alphabetic())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(char::is_lowercase));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `BlogPost` → `blog_post`. This is the registry key convention.
pub fn snake_case(input: &str) -> String {
    join_lower(input, "_")
}

/// `blog_post` → `blog-post`.
pub fn kebab_case(input: &str) -> String {
    join_lower(input, "-")
}

/// `blog_post` → `Blog Post`. Only the first letter of each word is
/// touched, so acronyms survive (`XMLHttp` → `XML Http`).
pub fn start_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_lower(input: &str, sep: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}
