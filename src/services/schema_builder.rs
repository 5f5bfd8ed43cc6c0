use crate::enums::analysis_facet::AnalysisFacet;
use crate::enums::severity::Severity;
use crate::structs::schema_node::SchemaNode;

pub const OVERALL_SUMMARY_KEY: &str = "overallSummary";
pub const FILES_KEY: &str = "files";

fn overall_summary_schema() -> SchemaNode {
    SchemaNode::string(
        "A high-level, 2-3 sentence summary of the overall code quality, structure, and potential based on the requested analysis types.",
    )
}

fn severity_schema() -> SchemaNode {
    let values = Severity::ALL.iter().map(Severity::as_str).collect::<Vec<_>>();
    SchemaNode::string_enum("Severity of the error: Critical, High, Medium, or Low.", &values)
}

/// Fixed shape of one facet's field in the analysis response.
pub fn facet_schema(facet: AnalysisFacet) -> SchemaNode {
    match facet {
        AnalysisFacet::CodeStructureReview => SchemaNode::string(
            "A detailed analysis of the project's structure, architecture, and modularity. Comment on separation of concerns and maintainability.",
        ),
        AnalysisFacet::ErrorDetection => SchemaNode::array(
            "A list of identified bugs, logical errors, or potential runtime issues.",
            SchemaNode::object(
                vec![
                    ("file", SchemaNode::string("The full path of the file with the error.")),
                    ("line", SchemaNode::integer("The approximate line number of the error.")),
                    ("description", SchemaNode::string("A clear description of the error and its potential impact.")),
                    ("severity", severity_schema()),
                ],
                &["file", "description", "severity"],
            ),
        ),
        AnalysisFacet::PerformanceSuggestions => SchemaNode::array(
            "A list of suggestions to improve performance.",
            SchemaNode::object(
                vec![
                    ("file", SchemaNode::string("The file where the suggestion applies.")),
                    ("suggestion", SchemaNode::string("The specific optimization suggestion.")),
                    ("rationale", SchemaNode::string("Why this change would improve performance.")),
                ],
                &["file", "suggestion", "rationale"],
            ),
        ),
        AnalysisFacet::BestPractices => SchemaNode::array(
            "Recommendations for adhering to modern development best practices.",
            SchemaNode::object(
                vec![
                    ("area", SchemaNode::string("The area of best practice (e.g., 'Security', 'Readability', 'Accessibility').")),
                    ("recommendation", SchemaNode::string("The specific recommendation.")),
                ],
                &["area", "recommendation"],
            ),
        ),
    }
}

/// Response schema for an analysis restricted to `facets`.
///
/// `overallSummary` is always present and required; each requested facet
/// adds one field, listed in canonical order. Unrequested facets are absent.
pub fn analysis_schema(facets: &[AnalysisFacet]) -> SchemaNode {
    let facets = AnalysisFacet::canonicalize(facets);

    let mut fields = vec![(OVERALL_SUMMARY_KEY, overall_summary_schema())];
    let mut required = vec![OVERALL_SUMMARY_KEY];
    for facet in &facets {
        fields.push((facet.key(), facet_schema(*facet)));
        required.push(facet.key());
    }

    SchemaNode::object(fields, &required)
}

pub fn fix_schema() -> SchemaNode {
    SchemaNode::object(
        vec![(
            FILES_KEY,
            SchemaNode::array(
                "An array of files containing the complete, corrected code. Only include files that were modified.",
                SchemaNode::object(
                    vec![
                        ("name", SchemaNode::string("The full path of the file.")),
                        ("content", SchemaNode::string("The complete and corrected content of the file.")),
                    ],
                    &["name", "content"],
                ),
            ),
        )],
        &[FILES_KEY],
    )
}
