use regex::Regex;
use shared_types::{MAX_INSTALLMENTS, MIN_INSTALLMENTS};

/// Spelled-out Portuguese numbers accepted as installment counts
const NUMBER_WORDS: &[(&str, u32)] = &[
    ("duas", 2),
    ("dois", 2),
    ("três", 3),
    ("tres", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
    ("dez", 10),
    ("onze", 11),
    ("doze", 12),
];

pub fn word_to_number(word: &str) -> Option<u32> {
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| *n)
}

pub struct InstallmentPattern {
    pub name: &'static str,
    pub regex: Regex,
    pub count_group: usize,
}

impl InstallmentPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        let words = NUMBER_WORDS
            .iter()
            .map(|(w, _)| *w)
            .collect::<Vec<_>>()
            .join("|");

        Self {
            name,
            regex: Regex::new(&pattern.replace("{WORDS}", &words))
                .expect("installment pattern must compile"),
            count_group: 1,
        }
    }

    /// Raw count captured by this pattern, digits or spelled out
    pub fn count(&self, text: &str) -> Option<u32> {
        let captures = self.regex.captures(text)?;
        let raw = captures.get(self.count_group)?.as_str();
        raw.parse().ok().or_else(|| word_to_number(raw))
    }
}

pub struct InstallmentDetector {
    patterns: Vec<InstallmentPattern>,
}

impl InstallmentDetector {
    pub fn new() -> Self {
        Self {
            patterns: create_installment_patterns(),
        }
    }

    /// Installment count in [2, 12] mentioned in lower-cased `text`.
    ///
    /// A pattern whose count falls outside the range does not stop the
    /// search; the next pattern is tried.
    pub fn detect(&self, text: &str) -> Option<u32> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .count(text)
                .filter(|n| (MIN_INSTALLMENTS..=MAX_INSTALLMENTS).contains(n))
        })
    }
}

impl Default for InstallmentDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn create_installment_patterns() -> Vec<InstallmentPattern> {
    vec![
        // "3x", "em 3 vezes", "2 parcelas"
        InstallmentPattern::new("numeric_times", r"(?:em\s+)?(\d+)\s*(?:x\b|vezes\b|parcelas?\b)"),
        InstallmentPattern::new("installed_in", r"parcelad[oa]s?\s+(?:em\s+)?(\d+)"),
        InstallmentPattern::new("divided_in", r"dividid[oa]s?\s+(?:em\s+)?(\d+)"),
        InstallmentPattern::new("numeric_times_of", r"(\d+)\s*(?:x|vezes)\s+(?:de|sem\s+juros)"),
        InstallmentPattern::new("numeric_single_vez", r"(\d+)\s*vez\b"),
        InstallmentPattern::new("numeric_parts", r"em\s+(\d+)\s*partes?\b"),

        // "em duas vezes", "três parcelas", "parcelado em doze"
        InstallmentPattern::new("spelled_in_times", r"em\s+\b({WORDS})\s+(?:vezes|parcelas?|partes?)\b"),
        InstallmentPattern::new("spelled_times", r"\b({WORDS})\s+(?:vezes|parcelas?)\b"),
        InstallmentPattern::new("spelled_installed_in", r"parcelad[oa]s?\s+em\s+({WORDS})\b"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_forms() {
        let detector = InstallmentDetector::new();
        assert_eq!(detector.detect("notebook por 1200 em 3x"), Some(3));
        assert_eq!(detector.detect("tv em 10 vezes"), Some(10));
        assert_eq!(detector.detect("2 parcelas de 50"), Some(2));
        assert_eq!(detector.detect("sofá parcelado em 4"), Some(4));
        assert_eq!(detector.detect("conta dividida em 5"), Some(5));
        assert_eq!(detector.detect("pagar em 6 partes"), Some(6));
    }

    #[test]
    fn test_spelled_out_numbers() {
        let detector = InstallmentDetector::new();
        let words = [
            "duas", "três", "quatro", "cinco", "seis", "sete", "oito", "nove", "dez", "onze",
            "doze",
        ];

        for (i, word) in words.iter().enumerate() {
            let expected = i as u32 + 2;
            assert_eq!(detector.detect(&format!("{} vezes", word)), Some(expected));
            assert_eq!(detector.detect(&format!("{} parcelas", word)), Some(expected));
        }

        assert_eq!(detector.detect("200 reais no mercado em três vezes"), Some(3));
        assert_eq!(detector.detect("parcelado em dois"), Some(2));
        assert_eq!(detector.detect("em tres vezes"), Some(3));
    }

    #[test]
    fn test_out_of_range_counts() {
        let detector = InstallmentDetector::new();
        assert_eq!(detector.detect("treze vezes"), None);
        assert_eq!(detector.detect("1x no débito"), None);
        assert_eq!(detector.detect("em 24x"), None);
        assert_eq!(detector.detect("dezoito vezes"), None);
    }

    #[test]
    fn test_out_of_range_falls_through() {
        let detector = InstallmentDetector::new();
        // 18x is ignored, the spelled-out count still applies
        assert_eq!(detector.detect("18x? não, em duas vezes"), Some(2));
    }

    #[test]
    fn test_no_installments() {
        let detector = InstallmentDetector::new();
        assert_eq!(detector.detect("gastei 50 no mercado"), None);
        assert_eq!(detector.detect("recebi 2500 de salário"), None);
        assert_eq!(detector.detect("comprei 2 xícaras"), None);
    }

    #[test]
    fn test_word_to_number() {
        assert_eq!(word_to_number("dois"), Some(2));
        assert_eq!(word_to_number("doze"), Some(12));
        assert_eq!(word_to_number("treze"), None);
    }
}
