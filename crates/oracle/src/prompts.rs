//! Prompt construction for the four oracle modes.
//!
//! Each builder returns the system prompt (and where relevant the user
//! message) sent to the inference service. Context is scoped deliberately:
//! the opening prompt gets only a truncated resume prefix, dialogue prompts
//! get the transcript but no resume text at all, and only the rescore and
//! bulk prompts carry the full document.

use visaprep_core::assessment::CriterionVerdict;
use visaprep_core::chat::{ChallengeSession, ChatTurn};
use visaprep_core::guidance;

/// Resume prefix cap for the opening prompt. The full text is not needed to
/// explain a criterion and sending it wastes context budget.
pub const RESUME_CONTEXT_CHARS: usize = 2_000;

/// Truncate text to at most `max_chars` characters, respecting char
/// boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

fn status_label(met: bool) -> &'static str {
    if met {
        "MET"
    } else {
        "NOT MET"
    }
}

/// System prompt for the bulk 8-criterion initial assessment.
pub fn assess_all_system() -> String {
    let mut criteria_block = String::new();
    for (i, c) in visaprep_core::criteria::catalog().iter().enumerate() {
        let regulatory = guidance::regulatory_language(c.name, c.description);
        criteria_block.push_str(&format!(
            "{}. {}: \"{}\"\n",
            i + 1,
            c.name.to_uppercase(),
            regulatory
        ));
    }

    format!(
        r#"You are an O-1A visa criteria analyst. Your task is to analyze a resume and determine which of the 8 O-1A visa criteria the candidate may meet based on the evidence in their resume.

The O-1A visa requires demonstrating extraordinary ability. A beneficiary must satisfy at least 3 of 8 evidentiary criteria.

For each criterion, you must:
1. Determine if there is clear, specific evidence in the resume that supports this criterion
2. If met, quote or summarize the specific evidence from the resume
3. Provide brief reasoning for your assessment

Be CONSERVATIVE in your assessment. Only mark a criterion as "met" if there is clear, explicit evidence in the resume. Do not infer or assume qualifications that are not stated.

The 8 O-1A criteria (with exact USCIS regulatory language):

{criteria_block}
Respond with a JSON object in this exact format:
{{
  "criteria": [
    {{
      "name": "Awards",
      "description": "Nationally or internationally recognized prizes or awards for excellence in the field of endeavor",
      "met": true or false,
      "evidence": "Specific evidence from resume or null if not met",
      "reasoning": "Brief explanation of why criterion is/isn't met"
    }},
    ... (all 8 criteria in order)
  ]
}}"#
    )
}

/// User message for the bulk assessment: the full extracted text.
pub fn assess_all_user(document_text: &str) -> String {
    format!("Analyze this resume against the O-1A criteria:\n\n{document_text}")
}

/// System prompt for the opening challenge message.
pub fn opening_system(verdict: &CriterionVerdict) -> String {
    let status = status_label(verdict.met);
    let regulatory = guidance::regulatory_language(&verdict.name, &verdict.description);
    let reasoning = verdict.reasoning.as_deref().unwrap_or("None");

    format!(
        r#"You are a friendly O-1A visa advisor having a casual conversation.

CRITERION: "{name}"
USCIS DEFINITION: "{regulatory}"

CURRENT STATUS: {status}
REASONING: {reasoning}

Respond with JSON in this exact format:
{{
  "message": "Your first message (under 50 words). One sentence about what this criterion looks for. One sentence about why it's {status}. One conversational question to explore evidence.",
  "suggestions": ["Short question 1?", "Short question 2?", "Short question 3?"]
}}

MESSAGE GUIDELINES:
- Write like you're texting a friend - casual, warm, direct
- No markdown, bullet points, or formal greetings

SUGGESTIONS GUIDELINES (these are things the USER might ask YOU):
- 2-3 short questions (under 8 words each)
- Written from the user's perspective, as if they're asking you
- Specific to the "{name}" criterion and their {status} status
- Examples: "How can I improve my score?", "What evidence are you looking for?", "Does my conference presentation count?""#,
        name = verdict.name,
    )
}

/// User message for the opening prompt: truncated resume prefix.
pub fn opening_user(document_text: &str) -> String {
    format!(
        "Resume context:\n{}",
        truncate_chars(document_text, RESUME_CONTEXT_CHARS)
    )
}

/// System prompt for mid-dialogue responses. The full transcript is sent as
/// chat history; resume text is intentionally absent.
pub fn dialogue_system(verdict: &CriterionVerdict) -> String {
    let status = status_label(verdict.met);
    let details = guidance::format_guidance(&verdict.name, &verdict.description);

    format!(
        r#"You are a friendly O-1A visa advisor chatting casually. Keep responses SHORT (2-3 sentences max).

CRITERION: "{name}"
CURRENT STATUS: {status}

USCIS GUIDANCE (for your reference, don't dump this on the user):
{details}

Respond with JSON in this exact format:
{{
  "message": "Your response (2-3 sentences max)",
  "suggestions": ["Short question 1?", "Short question 2?", "Short question 3?"]
}}

MESSAGE STYLE:
- Casual, like texting a knowledgeable friend
- Ask ONE follow-up question at a time
- When they share something relevant, acknowledge it briefly and dig deeper for specifics (names, numbers, dates, impact)
- After a few good exchanges, mention they can request a rescore if they feel ready

SUGGESTIONS (things the USER might ask YOU next):
- 2-3 short questions (under 8 words each)
- Written from the user's perspective
- Relevant to what was just discussed"#,
        name = verdict.name,
    )
}

/// System prompt for rescoring one criterion from resume plus transcript.
pub fn rescore_system(verdict: &CriterionVerdict) -> String {
    let details = guidance::format_guidance(&verdict.name, &verdict.description);
    let evidence = verdict.evidence.as_deref().unwrap_or("None");
    let reasoning = verdict.reasoning.as_deref().unwrap_or("None");

    format!(
        r#"You are an O-1A visa criteria analyst. Re-evaluate the "{name}" criterion based on the original resume AND the additional information gathered in the interview.

## EXACT USCIS GUIDANCE FOR THIS CRITERION

{details}

## ORIGINAL ASSESSMENT

- Met: {met}
- Evidence: {evidence}
- Reasoning: {reasoning}

## YOUR TASK

Analyze the interview transcript below alongside the resume. Consider ALL evidence from BOTH sources.

Be rigorous but fair:
- Only mark as "met" if there is clear evidence meeting USCIS evidentiary standards
- Never infer or assume qualifications that are not stated
- If the interview revealed qualifying evidence not in the resume, factor that in
- Explain your reasoning clearly, referencing specific evidence

Respond with a JSON object:
{{
  "met": true or false,
  "evidence": "Combined evidence from resume and interview that supports this criterion, or null if not met",
  "reasoning": "Clear explanation of why this criterion is or isn't met based on USCIS standards"
}}"#,
        name = verdict.name,
        met = verdict.met,
    )
}

/// User message for the rescore prompt: full untruncated resume plus the
/// flattened role-prefixed transcript.
pub fn rescore_user(document_text: &str, transcript: &[ChatTurn]) -> String {
    let session = ChallengeSession {
        criterion_name: String::new(),
        messages: transcript.to_vec(),
    };
    format!(
        "## RESUME\n\n{document_text}\n\n---\n\n## INTERVIEW TRANSCRIPT\n\n{}\n\n---\n\nPlease provide your updated assessment.",
        session.transcript_text()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
