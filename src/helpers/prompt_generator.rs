use crate::constants::prompts::{
    ANALYSIS_CLOSING, ANALYSIS_PREAMBLE, CHAT_INTRODUCTION, CHAT_TASK, FIX_INSTRUCTIONS, NO_ISSUE_CONTEXT,
};
use crate::enums::analysis_facet::AnalysisFacet;
use crate::structs::source_file::SourceFile;

const FILE_SEPARATOR: &str = "\n---\n";

/// Renders files as labeled, fenced blocks in input order. Content is
/// copied verbatim.
pub fn format_files(files: &[SourceFile]) -> String {
    files
        .iter()
        .map(|file| format!("\n/* FILE: {} */\n```\n{}\n```\n", file.name, file.content))
        .collect::<Vec<_>>()
        .join(FILE_SEPARATOR)
}

pub fn focus_instruction(facets: &[AnalysisFacet]) -> String {
    let labels = facets.iter().map(AnalysisFacet::label).collect::<Vec<_>>();
    format!(
        "Your forensic review must focus exclusively on the following areas: **{}**. Do not analyze any other aspects.",
        labels.join(", ")
    )
}

fn analysis_issue_context(issue_description: &str) -> String {
    let issue = issue_description.trim();
    if issue.is_empty() {
        NO_ISSUE_CONTEXT.to_string()
    } else {
        format!(
            "The user is specifically struggling with the following issue: \"{}\" Please pay special attention to this problem in your analysis.",
            issue
        )
    }
}

/// `facets` is expected in canonical order.
pub fn generate_analysis_prompt(files: &[SourceFile], issue_description: &str, facets: &[AnalysisFacet]) -> String {
    format!(
        "{}\n{}\n{}\n{}\n\nProject Code:\n{}",
        ANALYSIS_PREAMBLE,
        focus_instruction(facets),
        analysis_issue_context(issue_description),
        ANALYSIS_CLOSING,
        format_files(files)
    )
}

pub fn generate_fix_prompt(files: &[SourceFile], report_json: &str) -> String {
    format!(
        "{}\n\n**Analysis Report:**\n```json\n{}\n```\n\n**Original Project Code:**\n{}",
        FIX_INSTRUCTIONS,
        report_json,
        format_files(files)
    )
}

pub fn generate_chat_seed_prompt(files: &[SourceFile], issue_description: &str) -> String {
    let issue = issue_description.trim();
    let intro = if issue.is_empty() {
        format!("{} {}", CHAT_INTRODUCTION, CHAT_TASK)
    } else {
        format!(
            "{} The user's primary problem is: \"{}\". Keep this in mind during the conversation. {}",
            CHAT_INTRODUCTION, issue, CHAT_TASK
        )
    };

    format!("{}\n\nHere is the project code for context:\n{}", intro, format_files(files))
}
