//! Structured USCIS Policy Manual guidance for each criterion.
//!
//! Each bundle carries the exact regulatory language plus the evaluator
//! checklist, qualifying and disqualifying examples, and special notes used
//! to build oracle prompts. Lookups by unknown name degrade to the plain
//! criterion description and never fail.

use crate::criteria;

/// Reference bundle for one criterion. Empty slices mean the section is not
/// applicable to that criterion.
#[derive(Debug, Clone, Copy)]
pub struct CriterionGuidance {
    /// Verbatim regulatory language from 8 CFR 214.2(o)(3)(iii).
    pub regulatory_language: &'static str,
    /// What USCIS evaluates when weighing evidence.
    pub evaluates: &'static [&'static str],
    /// Examples of qualifying evidence.
    pub examples: &'static [&'static str],
    /// Key considerations adjudicators apply.
    pub considerations: &'static [&'static str],
    /// Evidence that does not qualify.
    pub does_not_qualify: &'static [&'static str],
    /// Important notes.
    pub notes: &'static [&'static str],
    /// What makes a role critical or essential (Critical Employment only).
    pub critical_or_essential: &'static [&'static str],
    /// What makes an organization distinguished (Critical Employment only).
    pub distinguished_reputation: &'static [&'static str],
}

const EMPTY: &[&str] = &[];

const AWARDS: CriterionGuidance = CriterionGuidance {
    regulatory_language: "Documentation of the beneficiary's receipt of nationally or internationally recognized prizes or awards for excellence in the field of endeavor.",
    evaluates: &[
        "Whether the person was the recipient of prizes or awards in the field of endeavor",
        "Whether the award is a nationally or internationally recognized prize or award for excellence",
    ],
    examples: &[
        "Awards from well-known national institutions and well-known professional associations",
        "Certain doctoral dissertation awards and scholarships",
        "Certain awards recognizing presentations at nationally or internationally recognized conferences",
    ],
    considerations: &[
        "The criteria used to grant the awards or prizes",
        "The national or international significance of the awards or prizes in the field",
        "The number of awardees or prize recipients",
        "Limitations on eligible competitors",
    ],
    does_not_qualify: EMPTY,
    notes: &[
        "A person may rely on a team award, provided the person is one of the recipients",
        "This criterion does not require an award to have the same prestige as a Nobel Prize",
        "An award available only to persons within a single locality, employer, or school may have little national/international recognition",
        "An award open to members of a well-known national institution (including R1 or R2 doctoral universities) may be nationally recognized",
    ],
    critical_or_essential: EMPTY,
    distinguished_reputation: EMPTY,
};

const MEMBERSHIP: CriterionGuidance = CriterionGuidance {
    regulatory_language: "Documentation of the beneficiary's membership in associations in the field for which classification is sought, which require outstanding achievements of their members, as judged by recognized national or international experts in their disciplines or fields.",
    evaluates: &[
        "Whether the association requires that members have outstanding achievements in the field as judged by recognized experts",
    ],
    examples: &[
        "Membership in certain professional associations",
        "Fellowships with certain organizations or institutions",
        "IEEE Fellow level membership (requires 'accomplishments that have contributed importantly to the advancement or application of engineering, science and technology')",
        "AAAI Fellow membership (based on 'significant, sustained contributions' to AI, judged by current fellows)",
    ],
    considerations: EMPTY,
    does_not_qualify: &[
        "Membership based solely on a level of education or years of experience",
        "Membership based on payment of a fee or subscribing to publications",
        "Membership based on a requirement for employment (such as union membership)",
    ],
    notes: EMPTY,
    critical_or_essential: EMPTY,
    distinguished_reputation: EMPTY,
};

const PUBLISHED_MATERIAL: CriterionGuidance = CriterionGuidance {
    regulatory_language: "Published material in professional or major trade publications or major media about the beneficiary, relating to the beneficiary's work in the field for which classification is sought. This evidence must include the title, date, and author of such published material and any necessary translation.",
    evaluates: &[
        "Whether the published material was related to the person and their specific work",
        "Whether the publication qualifies as a professional publication, major trade publication, or major media",
    ],
    examples: &[
        "Professional or major print publications (newspaper articles, journal articles, books, textbooks) regarding the beneficiary and their work",
        "Professional or major online publications regarding the beneficiary and their work",
        "Transcript of professional or major audio or video coverage of the beneficiary and their work",
    ],
    considerations: &[
        "Published material that includes only a brief citation or passing reference is NOT sufficient",
        "The beneficiary need not be the only subject; material covering a broader topic but including substantial discussion of the beneficiary's work qualifies",
        "Material focusing on work by a team qualifies if it mentions the beneficiary or documents their significant role",
        "Relevant factors include intended audience and relative circulation, readership, or viewership",
    ],
    does_not_qualify: EMPTY,
    notes: EMPTY,
    critical_or_essential: EMPTY,
    distinguished_reputation: EMPTY,
};

const JUDGING: CriterionGuidance = CriterionGuidance {
    regulatory_language: "Evidence of the beneficiary's participation on a panel, or individually, as a judge of the work of others in the same or in an allied field of specialization for which classification is sought.",
    evaluates: &[
        "Whether the person has acted as the judge of the work of others in the same or an allied field",
    ],
    examples: &[
        "Reviewer of abstracts or papers submitted for presentation at scholarly conferences",
        "Peer reviewer for scholarly publications",
        "Member of doctoral dissertation committees",
        "Peer reviewer for government research funding programs",
    ],
    considerations: &[
        "Must show actual participation in judging, not just invitations",
        "Example: A copy of a request from a journal to do a review, accompanied by evidence confirming the review was completed",
    ],
    does_not_qualify: EMPTY,
    notes: EMPTY,
    critical_or_essential: EMPTY,
    distinguished_reputation: EMPTY,
};

const ORIGINAL_CONTRIBUTIONS: CriterionGuidance = CriterionGuidance {
    regulatory_language: "Evidence of the beneficiary's original scientific, scholarly, or business-related contributions of major significance in the field.",
    evaluates: &[
        "Whether the person has made original contributions in the field",
        "Whether the original contributions are of major significance to the field",
    ],
    examples: &[
        "Published materials about the significance of the beneficiary's original work",
        "Testimonials, letters, and affidavits about the beneficiary's original work and its significance",
        "Documentation that the work was cited at a level indicative of major significance",
        "Documentation that the work was published in a scholarly journal of distinguished reputation",
        "Patents or licenses deriving from the beneficiary's work",
        "Evidence of commercial use of the beneficiary's work (e.g., commercialization of a research innovation)",
        "Contributions to repositories of software, data, designs, protocols, or other technical resources with evidence of significant impact",
    ],
    considerations: &[
        "Evidence that work was funded, patented, or published does NOT alone establish major significance",
        "Published research that has provoked widespread commentary and high citations may be probative",
        "A patented technology that has attracted significant attention or commercialization may establish significance",
        "Detailed letters from experts explaining the nature and significance are valuable",
    ],
    does_not_qualify: EMPTY,
    notes: EMPTY,
    critical_or_essential: EMPTY,
    distinguished_reputation: EMPTY,
};

const SCHOLARLY_ARTICLES: CriterionGuidance = CriterionGuidance {
    regulatory_language: "Evidence of the beneficiary's authorship of scholarly articles in the field, in professional journals, or other major media.",
    evaluates: &[
        "Whether the person has authored scholarly articles in the field",
        "Whether the publication qualifies as professional, major trade, or major media",
    ],
    examples: &[
        "Publications in professionally-relevant journals",
        "Published conference presentations at nationally or internationally recognized conferences",
    ],
    considerations: &[
        "The beneficiary must be a listed author but need not be the sole or first author",
        "A petitioner need NOT provide evidence that the work has been cited to meet this criterion",
        "Articles must be scholarly: reporting on original research, experimentation, or philosophical discourse",
        "Generally peer-reviewed with footnotes, endnotes, or bibliography",
        "In non-academic arenas, should be written for learned persons in that field",
    ],
    does_not_qualify: EMPTY,
    notes: EMPTY,
    critical_or_essential: EMPTY,
    distinguished_reputation: EMPTY,
};

const CRITICAL_EMPLOYMENT: CriterionGuidance = CriterionGuidance {
    regulatory_language: "Evidence that the beneficiary has been employed in a critical or essential capacity for organizations and establishments that have a distinguished reputation.",
    evaluates: &[
        "Whether the person has performed in a leading or critical role for an organization or establishment",
        "Whether the organization or establishment has a distinguished reputation",
    ],
    examples: &[
        "Faculty or research position for a distinguished academic department or program",
        "Research position for a distinguished non-academic institution, government entity, or company",
        "Principal or named investigator for a department that received a merit-based government award (e.g., SBIR grant)",
        "Member of a key committee or high-performing team within a distinguished organization",
        "Founder or co-founder of, or contributor of IP to, a startup business with a distinguished reputation",
        "Critical or essential supporting role for a distinguished organization",
    ],
    considerations: EMPTY,
    does_not_qualify: EMPTY,
    notes: EMPTY,
    critical_or_essential: &[
        "Critical role: contributed in a way of significant importance to the organization's activities",
        "Essential role: role is or was integral to the entity",
        "A leadership role often qualifies as critical or essential",
        "It is the duties and performance, not the title, that determines if the role is critical",
    ],
    distinguished_reputation: &[
        "Scale of customer base, longevity, or relevant media coverage",
        "For academic departments: national rankings and receipt of government research grants",
        "For startups: evidence of significant funding from government entities, venture capital, angel investors",
    ],
};

const HIGH_SALARY: CriterionGuidance = CriterionGuidance {
    regulatory_language: "Evidence that the beneficiary has either commanded a high salary or will command a high salary or other remuneration for services as evidenced by contracts or other reliable evidence.",
    evaluates: &[
        "Whether the person has commanded or will command a high salary or other remuneration",
    ],
    examples: &[
        "Tax returns, pay statements, or other evidence of past salary",
        "Contract, job offer letter, or other evidence of prospective salary",
        "Comparative wage or remuneration data for the beneficiary's field (e.g., compensation surveys)",
    ],
    considerations: &[
        "The burden is on the petitioner to provide evidence that compensation is high relative to others in the field",
        "Helpful resources: U.S. Bureau of Labor Statistics wage data, Department of Labor's Career One Stop",
        "For persons working outside the U.S.: evaluate based on wage statistics for that locality",
        "For entrepreneurs/founders: evidence of significant funding may help evaluate credibility of prospective salary evidence",
    ],
    does_not_qualify: EMPTY,
    notes: EMPTY,
    critical_or_essential: EMPTY,
    distinguished_reputation: EMPTY,
};

/// Look up the guidance bundle for a criterion name.
pub fn guidance(name: &str) -> Option<&'static CriterionGuidance> {
    match name {
        criteria::CRITERION_AWARDS => Some(&AWARDS),
        criteria::CRITERION_MEMBERSHIP => Some(&MEMBERSHIP),
        criteria::CRITERION_PUBLISHED_MATERIAL => Some(&PUBLISHED_MATERIAL),
        criteria::CRITERION_JUDGING => Some(&JUDGING),
        criteria::CRITERION_ORIGINAL_CONTRIBUTIONS => Some(&ORIGINAL_CONTRIBUTIONS),
        criteria::CRITERION_SCHOLARLY_ARTICLES => Some(&SCHOLARLY_ARTICLES),
        criteria::CRITERION_CRITICAL_EMPLOYMENT => Some(&CRITICAL_EMPLOYMENT),
        criteria::CRITERION_HIGH_SALARY => Some(&HIGH_SALARY),
        _ => None,
    }
}

/// Verbatim regulatory language for a criterion, falling back to the given
/// description when the name has no guidance entry.
pub fn regulatory_language<'a>(name: &str, fallback_description: &'a str) -> &'a str {
    match guidance(name) {
        Some(g) => g.regulatory_language,
        None => fallback_description,
    }
}

/// Render the full guidance bundle as a readable text block for oracle
/// prompts. Unknown names degrade to the plain description.
pub fn format_guidance(name: &str, fallback_description: &str) -> String {
    let Some(g) = guidance(name) else {
        return fallback_description.to_string();
    };

    let mut sections = Vec::new();
    sections.push(format!(
        "**USCIS Regulatory Language:**\n\"{}\"",
        g.regulatory_language
    ));
    push_section(&mut sections, "What USCIS Evaluates", g.evaluates);
    push_section(&mut sections, "Examples of Qualifying Evidence", g.examples);
    push_section(&mut sections, "Key Considerations", g.considerations);
    push_section(&mut sections, "What Does NOT Qualify", g.does_not_qualify);
    push_section(&mut sections, "Important Notes", g.notes);
    push_section(
        &mut sections,
        "What Makes a Role Critical/Essential",
        g.critical_or_essential,
    );
    push_section(
        &mut sections,
        "What Makes an Organization Distinguished",
        g.distinguished_reputation,
    );

    sections.join("\n\n")
}

fn push_section(sections: &mut Vec<String>, title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    let body: Vec<String> = items.iter().map(|item| format!("- {item}")).collect();
    sections.push(format!("**{title}:**\n{}", body.join("\n")));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CRITERION_NAMES;

    #[test]
    fn every_catalog_entry_has_guidance() {
        for name in CRITERION_NAMES {
            assert!(guidance(name).is_some(), "missing guidance for {name}");
        }
    }

    #[test]
    fn unknown_name_has_no_guidance() {
        assert!(guidance("Patents").is_none());
    }

    #[test]
    fn regulatory_language_falls_back_to_description() {
        let text = regulatory_language("Patents", "plain description");
        assert_eq!(text, "plain description");
    }

    #[test]
    fn format_guidance_includes_regulatory_language() {
        let text = format_guidance("Awards", "fallback");
        assert!(text.contains("USCIS Regulatory Language"));
        assert!(text.contains("nationally or internationally recognized prizes"));
    }

    #[test]
    fn format_guidance_skips_empty_sections() {
        // Awards has no does-not-qualify section.
        let text = format_guidance("Awards", "fallback");
        assert!(!text.contains("What Does NOT Qualify"));
        // Membership does.
        let text = format_guidance("Membership", "fallback");
        assert!(text.contains("What Does NOT Qualify"));
    }

    #[test]
    fn format_guidance_unknown_name_is_plain_description() {
        assert_eq!(format_guidance("Patents", "fallback"), "fallback");
    }
}
