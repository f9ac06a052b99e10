use regex::Regex;

/// Decimal with an optional `,` or `.` fraction
const NUMBER: &str = r"(\d+(?:[,.]\d+)?)";

pub struct AmountPattern {
    pub name: &'static str,
    pub regex: Regex,
    /// Group holding "N" in "N vezes de X"; the result is N * X
    pub count_group: Option<usize>,
    pub value_group: usize,
}

impl AmountPattern {
    fn new(name: &'static str, pattern: &str, count_group: Option<usize>, value_group: usize) -> Self {
        Self {
            name,
            regex: Regex::new(&pattern.replace("{NUMBER}", NUMBER))
                .expect("amount pattern must compile"),
            count_group,
            value_group,
        }
    }

    /// Amount found by this pattern, only when finite and strictly positive
    pub fn extract(&self, text: &str) -> Option<f64> {
        let captures = self.regex.captures(text)?;

        let value = parse_decimal(captures.get(self.value_group)?.as_str())?;

        let amount = match self.count_group {
            Some(group) => {
                let count: u32 = captures.get(group)?.as_str().parse().ok()?;
                value * f64::from(count)
            }
            None => value,
        };

        (amount.is_finite() && amount > 0.0).then_some(amount)
    }
}

/// Comma is a decimal separator, never a thousands separator
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replacen(',', ".", 1).parse().ok()
}

pub struct AmountExtractor {
    patterns: Vec<AmountPattern>,
}

impl AmountExtractor {
    pub fn new() -> Self {
        Self {
            patterns: create_amount_patterns(),
        }
    }

    /// Total amount mentioned in lower-cased `text`, or 0 when nothing usable matched
    pub fn extract(&self, text: &str) -> f64 {
        self.extract_with_pattern(text)
            .map(|(amount, _)| amount)
            .unwrap_or(0.0)
    }

    pub fn extract_with_pattern(&self, text: &str) -> Option<(f64, &'static str)> {
        self.patterns
            .iter()
            .find_map(|p| p.extract(text).map(|amount| (amount, p.name)))
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn create_amount_patterns() -> Vec<AmountPattern> {
    vec![
        // "N x de R$ X" style installment values, total is N * X
        AmountPattern::new(
            "installments_of_value",
            r"(\d+)\s*(?:x|vezes|parcelas?)\s+de\s+(?:r\$\s*)?{NUMBER}",
            Some(1),
            2,
        ),
        AmountPattern::new(
            "installments_value",
            r"(\d+)\s*(?:x|vezes|parcelas?)\s+(?:r\$\s*)?{NUMBER}",
            Some(1),
            2,
        ),
        AmountPattern::new(
            "in_installments_of_value",
            r"em\s+(\d+)\s*(?:x|vezes|parcelas?)\s+de\s+(?:r\$\s*)?{NUMBER}",
            Some(1),
            2,
        ),

        // Single amounts
        AmountPattern::new("currency_prefix", r"r\$\s*{NUMBER}", None, 1),
        AmountPattern::new(
            "currency_suffix",
            r"{NUMBER}\s*(?:reais|real|r\$|rs\b)",
            None,
            1,
        ),
        AmountPattern::new(
            "verb_amount",
            r"(?:gastei|paguei|recebi|ganhei|custou|comprei|vendi)\s+(?:r\$\s*)?{NUMBER}",
            None,
            1,
        ),
        AmountPattern::new(
            "value_of",
            r"(?:valor|preço|preco)\s+(?:de\s+)?(?:r\$\s*)?{NUMBER}",
            None,
            1,
        ),
        AmountPattern::new(
            "slang",
            r"{NUMBER}\s*(?:contos?|paus?|pratas?|dinheiro)",
            None,
            1,
        ),

        // Last resort: any number
        AmountPattern::new("bare_number", r"{NUMBER}", None, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_prefix_with_comma_and_dot() {
        let extractor = AmountExtractor::new();
        assert_eq!(extractor.extract("r$ 50,00 no mercado"), 50.0);
        assert_eq!(extractor.extract("r$ 50.5 no mercado"), 50.5);
        assert_eq!(extractor.extract("paguei r$100"), 100.0);
    }

    #[test]
    fn test_installment_value_is_multiplied() {
        let extractor = AmountExtractor::new();
        assert_eq!(extractor.extract("3x de r$ 100"), 300.0);
        assert_eq!(extractor.extract("comprei em 4 vezes de 25,50"), 102.0);
        assert_eq!(extractor.extract("1x de r$ 80"), 80.0);
        assert_eq!(
            extractor.extract_with_pattern("12 parcelas de r$ 10").map(|(_, name)| name),
            Some("installments_of_value")
        );
    }

    #[test]
    fn test_single_amount_forms() {
        let extractor = AmountExtractor::new();
        assert_eq!(extractor.extract("200 reais no mercado"), 200.0);
        assert_eq!(extractor.extract("gastei 35 no uber"), 35.0);
        assert_eq!(extractor.extract("valor de 89,90 da conta"), 89.9);
        assert_eq!(extractor.extract("emprestei 50 contos"), 50.0);
        assert_eq!(extractor.extract("notebook por 1200 em 3x"), 1200.0);
    }

    #[test]
    fn test_priority_order() {
        let extractor = AmountExtractor::new();
        // "R$" wins over an earlier bare number
        assert_eq!(
            extractor.extract_with_pattern("dia 5 paguei r$ 40"),
            Some((40.0, "currency_prefix"))
        );
    }

    #[test]
    fn test_zero_and_missing_amounts() {
        let extractor = AmountExtractor::new();
        assert_eq!(extractor.extract("oi"), 0.0);
        assert_eq!(extractor.extract("comprei pão"), 0.0);
        assert_eq!(extractor.extract("0 reais"), 0.0);
    }

    #[test]
    fn test_amount_too_large_for_f64() {
        let extractor = AmountExtractor::new();
        let text = format!("paguei r$ 1{}", "0".repeat(400));
        assert_eq!(extractor.extract(&text), 0.0);

        // the product overflows, the plain "r$ V" reading still fits
        let text = format!("3x de r$ 1{}", "0".repeat(308));
        assert_eq!(
            extractor.extract_with_pattern(&text).map(|(_, name)| name),
            Some("currency_prefix")
        );
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("50,00"), Some(50.0));
        assert_eq!(parse_decimal("7.25"), Some(7.25));
        assert_eq!(parse_decimal("abc"), None);
    }
}
