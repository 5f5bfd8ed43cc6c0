pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const CONFIG_DIR_NAME: &str = "code-forensics";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_ARCHIVE_NAME: &str = "project.zip";
pub const FIXED_ARCHIVE_PREFIX: &str = "fixed-";
pub const SUMMARY_ARCHIVE_PREFIX: &str = "summary-";
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// File suffixes treated as text when extracting an uploaded archive.
pub const TEXT_FILE_EXTENSIONS: &[&str] = &[
    ".txt", ".js", ".jsx", ".ts", ".tsx", ".html", ".css", ".json", ".md", ".xml", ".yaml", ".yml",
    ".py", ".java", ".c", ".cpp", ".h", ".cs", ".go", ".rs", ".php", ".rb", ".sh",
];

pub fn is_text_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    TEXT_FILE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
