use std::fmt::Write;
use crate::enums::analysis_facet::AnalysisFacet;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::best_practice::BestPractice;
use crate::structs::detected_error::DetectedError;
use crate::structs::performance_suggestion::PerformanceSuggestion;
use crate::structs::source_file::SourceFile;

pub struct ReportPrinter;

impl ReportPrinter {

    pub fn print_analysis_report(report: &AnalysisResult) {
        println!("{}", Self::render_analysis_report(report));
    }

    pub fn render_analysis_report(report: &AnalysisResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "🔍 FORENSIC ANALYSIS REPORT");
        let _ = writeln!(out, "===========================");
        let _ = writeln!(out, "{}", report.overall_summary);

        for facet in AnalysisFacet::ALL {
            let _ = writeln!(out, "\n{} {}", Self::facet_icon(facet), facet.label().to_uppercase());
            if !report.is_analyzed(facet) {
                let _ = writeln!(out, "  (not analyzed)");
                continue;
            }

            match facet {
                AnalysisFacet::ErrorDetection => {
                    Self::render_list(&mut out, report.error_detection.as_deref(), Self::render_error);
                }
                AnalysisFacet::PerformanceSuggestions => {
                    Self::render_list(&mut out, report.performance_suggestions.as_deref(), Self::render_suggestion);
                }
                AnalysisFacet::BestPractices => {
                    Self::render_list(&mut out, report.best_practices.as_deref(), Self::render_practice);
                }
                AnalysisFacet::CodeStructureReview => {
                    let review = report.code_structure_review.as_deref().unwrap_or_default();
                    let _ = writeln!(out, "  {}", review.replace('\n', "\n  "));
                }
            }
        }

        out
    }

    pub fn print_fix_summary(changed_files: &[SourceFile]) {
        if changed_files.is_empty() {
            println!("\n✨ Analysis complete. The AI found no necessary code changes. A summary report will be saved.");
            return;
        }

        println!("\n✨ Success! {} file(s) have been modified:", changed_files.len());
        for file in changed_files {
            println!("    📝 {}", file.name);
        }
    }

    fn facet_icon(facet: AnalysisFacet) -> &'static str {
        match facet {
            AnalysisFacet::ErrorDetection => "🐞",
            AnalysisFacet::PerformanceSuggestions => "⚡",
            AnalysisFacet::BestPractices => "📐",
            AnalysisFacet::CodeStructureReview => "🏗️",
        }
    }

    fn render_list<T>(out: &mut String, items: Option<&[T]>, render: fn(&mut String, &T)) {
        match items {
            Some(items) if !items.is_empty() => items.iter().for_each(|item| render(out, item)),
            _ => {
                let _ = writeln!(out, "  (none found)");
            }
        }
    }

    fn render_error(out: &mut String, error: &DetectedError) {
        let location = match error.line {
            Some(line) => format!("{}:{}", error.file, line),
            None => error.file.clone(),
        };
        let _ = writeln!(out, "  {} [{}] {}: {}", error.severity.emoji(), error.severity, location, error.description);
    }

    fn render_suggestion(out: &mut String, suggestion: &PerformanceSuggestion) {
        let _ = writeln!(out, "  🚀 {}: {}", suggestion.file, suggestion.suggestion);
        let _ = writeln!(out, "      📈 {}", suggestion.rationale);
    }

    fn render_practice(out: &mut String, practice: &BestPractice) {
        let _ = writeln!(out, "  ✔️ {}: {}", practice.area, practice.recommendation);
    }
}
