//! Identifier case transforms.
//!
//! A single raw definition name (`MACAddress`, `some_value`, `IPv6Address`)
//! is spelled four ways in generated bindings: UpperCamel for types,
//! lowerCamel for members, snake_case for namespaces, and SCREAMING_SNAKE
//! for registry argument names. The lowerCamel transform is acronym-aware so
//! that names led by an all-caps run are not corrupted (`MACAddress` must
//! become `macAddress`, not `mACAddress`).
//!
//! All functions here are pure and total; empty input is rejected upstream
//! when the owning element is constructed.

/// Convert a raw name to UpperCamelCase.
///
/// Each underscore-delimited segment has its first letter capitalized and
/// the segments are concatenated: `some_value` → `SomeValue`. Segments that
/// already carry internal capitals keep them: `MACAddress` → `MACAddress`.
pub fn upper_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Convert a raw name to lowerCamelCase.
///
/// Starts from [`upper_camel`] and then decases the leading run:
/// 1. an all-uppercase name is lowercased entirely (`ABC` → `abc`);
/// 2. a run of two or more capitals followed by one lowercase letter and a
///    digit is a version tag and lowercases as a unit (`IPv6Address` →
///    `ipv6Address`);
/// 3. a run of two or more capitals otherwise lowercases all but its last
///    letter, which starts the next word (`MACAddress` → `macAddress`);
/// 4. anything else lowercases only the first letter (`Foo` → `foo`).
pub fn lower_camel(name: &str) -> String {
    decase(&upper_camel(name))
}

fn decase(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();

    let has_upper = chars.iter().any(|c| c.is_ascii_uppercase());
    let has_lower = chars.iter().any(|c| c.is_ascii_lowercase());
    if has_upper && !has_lower {
        return name.to_ascii_lowercase();
    }

    let run = chars
        .iter()
        .take_while(|c| c.is_ascii_uppercase())
        .count();

    if run >= 2 {
        // Version-tag pattern: capitals, one lowercase letter, then a digit.
        if chars.get(run).is_some_and(|c| c.is_ascii_lowercase())
            && chars.get(run + 1).is_some_and(|c| c.is_ascii_digit())
        {
            let mut out: String = chars[..=run].iter().collect::<String>().to_ascii_lowercase();
            out.extend(&chars[run + 1..]);
            return out;
        }
        // Acronym prefix: the run's last capital starts the next word.
        let mut out: String = chars[..run - 1]
            .iter()
            .collect::<String>()
            .to_ascii_lowercase();
        out.extend(&chars[run - 1..]);
        return out;
    }

    let mut out = String::with_capacity(name.len());
    let mut iter = chars.into_iter();
    if let Some(first) = iter.next() {
        out.extend(first.to_lowercase());
    }
    out.extend(iter);
    out
}

/// Convert a raw name to snake_case by camel-hump splitting.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or digit, or that precedes a lowercase letter while
/// following another uppercase letter; the result is lowercased. Computed
/// directly from the raw name so the lowerCamel acronym heuristics cannot
/// leak into the underscore forms.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower);
            if boundary && prev != '_' {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Convert a raw name to SCREAMING_SNAKE_CASE.
pub fn screaming_snake_case(name: &str) -> String {
    snake_case(name).to_ascii_uppercase()
}
