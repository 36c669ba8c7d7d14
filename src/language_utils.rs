use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for canonicalizing language identifiers
///
/// Upstream profile and job records carry languages as free text: ISO 639-1
/// codes ("es"), ISO 639-2 codes ("spa"), or English names ("Spanish",
/// "spanish"). The match engine compares language names exactly, so callers
/// canonicalize at the ingestion boundary with these helpers before scoring.
/// Resolve a language identifier to the isolang entry it names
fn resolve_language(input: &str) -> Option<Language> {
    let normalized = input.trim().to_lowercase();

    // ISO 639-1 (2-letter) code
    if normalized.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized) {
            return Some(lang);
        }
    }

    // ISO 639-2/T (3-letter) code
    if normalized.len() == 3 {
        if let Some(lang) = Language::from_639_3(&normalized) {
            return Some(lang);
        }

        // ISO 639-2/B codes that differ from ISO 639-2/T
        let part2t = match normalized.as_str() {
            "fre" => "fra", // French
            "ger" => "deu", // German
            "dut" => "nld", // Dutch
            "gre" => "ell", // Greek
            "chi" => "zho", // Chinese
            "cze" => "ces", // Czech
            "ice" => "isl", // Icelandic
            "alb" => "sqi", // Albanian
            "arm" => "hye", // Armenian
            "baq" => "eus", // Basque
            "bur" => "mya", // Burmese
            "per" => "fas", // Persian
            "geo" => "kat", // Georgian
            "may" => "msa", // Malay
            "mac" => "mkd", // Macedonian
            "rum" => "ron", // Romanian
            "slo" => "slk", // Slovak
            "wel" => "cym", // Welsh
            _ => return None,
        };
        return Language::from_639_3(part2t);
    }

    // English language name, case-insensitive
    Language::from_name(&capitalize_first(&normalized))
}

/// Get the canonical English display name for a language identifier
///
/// Accepts ISO 639-1 codes, ISO 639-2 codes (both T and B variants), or
/// English language names in any casing.
pub fn canonical_language_name(input: &str) -> Result<String> {
    resolve_language(input)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unrecognized language identifier: {}", input))
}

/// Check if two language identifiers name the same language
///
/// Compares canonical forms when both identifiers are recognized; falls back
/// to exact string comparison otherwise, so the function is total over
/// free-text entries the canonicalizer does not know.
pub fn language_names_match(a: &str, b: &str) -> bool {
    match (resolve_language(a), resolve_language(b)) {
        (Some(lang_a), Some(lang_b)) => lang_a == lang_b,
        _ => a == b,
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
