pub const ANALYSIS_PREAMBLE: &str = "Analyze the following project files for a comprehensive forensic review.";

pub const ANALYSIS_CLOSING: &str = r#"- Provide an overall summary based on your focused analysis.
Your response must be in JSON format conforming to the provided schema."#;

pub const NO_ISSUE_CONTEXT: &str = "The user has not provided a specific issue.";

pub const FIX_INSTRUCTIONS: &str = r#"You are an expert software engineer tasked with fixing a codebase. You will be given the original project files and a forensic analysis report detailing errors, performance issues, and best practice violations. Your task is to rewrite the necessary files to apply all the suggested fixes.

**Instructions:**
1. Thoroughly review the analysis report and the provided code.
2. Apply the fixes from the report directly into the code. This includes correcting bugs, implementing performance suggestions, and adhering to best practices.
3. Return the **full, complete content** of every file that you modify.
4. If a file does not require any changes based on the report, do **not** include it in your response.
5. Your response must be a JSON object conforming to the provided schema, containing an array of the modified file objects.

**Important:** Ensure your changes are strictly for the better. Do not introduce new bugs, break existing functionality, or make purely cosmetic changes (like re-indenting). Your goal is to improve the code's quality and correctness based *only* on the analysis report."#;

pub const CHAT_INTRODUCTION: &str = "You are an expert software development assistant. The user has provided you with their project code.";

pub const CHAT_TASK: &str = "Your task is to answer their questions about this code, help diagnose issues, and suggest improvements. You have already performed an initial analysis. Now, engage in a conversation to provide further assistance.";

pub const CHAT_ACKNOWLEDGEMENT: &str = "Understood. I have received the project files and am ready to assist you with your questions about the code.";

pub const CHAT_GREETING: &str = "I have reviewed the code based on your selections. I'm ready to help. What would you like to discuss?";

pub const NO_CHANGES_SUMMARY: &str = "AI analysis run successfully. No code modifications were required as the existing code aligns with the suggestions.";
