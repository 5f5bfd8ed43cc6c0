/// Splits a camelCase identifier into capitalized, space separated words:
/// `"codeStructureReview"` becomes `"Code Structure Review"`.
pub fn camel_case_to_title(identifier: &str) -> String {
    let mut title = String::with_capacity(identifier.len() + 4);

    for (index, ch) in identifier.chars().enumerate() {
        if index == 0 {
            title.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            title.push(' ');
            title.push(ch);
        } else {
            title.push(ch);
        }
    }

    title
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case() {
        assert_eq!(camel_case_to_title("errorDetection"), "Error Detection");
        assert_eq!(camel_case_to_title("performanceSuggestions"), "Performance Suggestions");
    }

    #[test]
    fn handles_single_word_and_empty() {
        assert_eq!(camel_case_to_title("summary"), "Summary");
        assert_eq!(camel_case_to_title(""), "");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank("  \n\t"));
        assert!(!is_blank(" x "));
    }
}
