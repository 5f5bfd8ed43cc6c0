use proptest::prelude::*;
use code_forensics::services::normalizer::{is_substantively_different, normalize};

#[test]
fn reformatting_is_not_a_change() {
    let original = "fn main() {\n    run();\n}\n";
    let reformatted = "fn main() {\r\n\r\n  run();   \r\n}";
    assert!(!is_substantively_different(original, reformatted));
    assert!(is_substantively_different(original, "fn main() {\n    run(1);\n}\n"));
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "[ a-z\\t\\r\\n]{0,64}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn line_endings_do_not_matter(lines in prop::collection::vec("[a-z ]{0,8}", 0..8)) {
        prop_assert_eq!(normalize(&lines.join("\r\n")), normalize(&lines.join("\n")));
    }

    #[test]
    fn normalized_lines_have_no_padding(text in "[ a-z\\t\\n]{0,64}") {
        for line in normalize(&text).split('\n').filter(|line| !line.is_empty()) {
            prop_assert_eq!(line.trim(), line);
        }
    }
}
