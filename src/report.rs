//! Two-phase dump of a parsed card collection.

use crate::core::CardParsed;
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

/// Returns the full-name field of a card, if any.
fn full_name(card: &CardParsed) -> Option<&str> {
    card.json.get("FN").and_then(Value::as_str)
}

/// Writes every card to `out`, one JSON object per line.
///
/// Cards without a full name come first, in parse order (the parser drops
/// such cards, so this set is normally empty). The rest follow sorted
/// ascending by their uppercased full name; the sort is stable, so cards
/// with equal names keep their relative parse order.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report(cards: &[CardParsed], out: &mut dyn Write) -> Result<()> {
    for card in cards.iter().filter(|c| full_name(c).is_none()) {
        writeln!(out, "{}", card.json)?;
    }

    let mut named: Vec<&CardParsed> = cards.iter().filter(|c| full_name(c).is_some()).collect();
    named.sort_by_key(|c| full_name(c).unwrap_or_default().to_uppercase());
    for card in named {
        writeln!(out, "{}", card.json)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(fields: Value) -> CardParsed {
        let text = fields
            .get("FN")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        CardParsed {
            parser: "galaxy_vcf",
            kind: "contact",
            text,
            json: fields,
        }
    }

    fn reported_names(cards: &[CardParsed]) -> Vec<String> {
        let mut out = Vec::new();
        write_report(cards, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| {
                let v: Value = serde_json::from_str(line).unwrap();
                v.get("FN")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let cards = vec![
            card(json!({"FN": "bob"})),
            card(json!({"FN": "Alice"})),
            card(json!({"FN": "charlie"})),
        ];
        assert_eq!(reported_names(&cards), ["Alice", "bob", "charlie"]);
    }

    #[test]
    fn test_equal_names_keep_parse_order() {
        let cards = vec![
            card(json!({"FN": "sam", "ORG": "first"})),
            card(json!({"FN": "SAM", "ORG": "second"})),
        ];

        let mut out = Vec::new();
        write_report(&cards, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("first"));
        assert!(lines[1].contains("second"));
    }

    #[test]
    fn test_nameless_cards_come_first() {
        let cards = vec![
            card(json!({"FN": "Alice"})),
            card(json!({"ORG": "nameless"})),
        ];
        assert_eq!(reported_names(&cards), ["", "Alice"]);
    }

    #[test]
    fn test_one_json_object_per_line() {
        let cards = vec![card(json!({"FN": "Alice", "TEL;CELL": "555-123-4567"}))];
        let mut out = Vec::new();
        write_report(&cards, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let v: Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(v.get("TEL;CELL").and_then(Value::as_str), Some("555-123-4567"));
    }
}
