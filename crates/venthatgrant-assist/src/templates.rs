//! Canned assistant output.
//!
//! Each builder returns markdown. Titles are interpolated verbatim.

use venthatgrant_core::models::critique::CritiqueType;

/// Marker that opens the block appended by optimization.
pub const OPTIMIZED_MARKER: &str = "[AI OPTIMIZED CONTENT]";

const OPTIMIZED_BODY: &str = "This proposal has been enhanced to highlight key strengths and \
align with grant requirements. The methodology section has been expanded to demonstrate \
feasibility, and impact statements have been strengthened with quantifiable metrics.";

pub fn proposal_title(grant_title: &str) -> String {
    format!("Proposal for {grant_title}")
}

pub fn proposal_draft(grant_title: &str) -> String {
    format!(
        "# Research Proposal: {grant_title}

## Project Summary
This proposal addresses the key challenges outlined in the grant, focusing on innovative \
approaches to tackle [specific problem]. Our research team brings extensive experience in \
[relevant field] with a proven track record of successful outcomes.

## Objectives
1. Develop a comprehensive framework for [specific area]
2. Implement and test new methodologies for [specific process]
3. Evaluate outcomes against established benchmarks
4. Disseminate findings through peer-reviewed publications

## Methodology
Our approach combines quantitative and qualitative methods, utilizing [specific techniques] to \
ensure robust data collection and analysis. The project will be conducted in three phases over \
[timeframe].

## Expected Outcomes
- New insights into [specific area]
- Practical tools for [specific application]
- Recommendations for policy and practice
- Foundation for future research initiatives

## Budget Justification
The requested funding will support essential personnel, equipment, and operational costs \
necessary to achieve the project objectives within the proposed timeframe."
    )
}

/// `content` followed by a blank line and the optimization block.
pub fn optimized(content: &str) -> String {
    format!("{content}\n\n{OPTIMIZED_MARKER}\n{OPTIMIZED_BODY}")
}

pub fn progress_report(proposal_title: &str) -> String {
    format!(
        "# Progress Report for \"{proposal_title}\"

## Summary of Activities
- Research conducted according to timeline
- Data collection completed
- Preliminary analysis shows promising results

## Challenges Encountered
- Minor delays due to resource availability
- Adapted methodology to address unexpected findings

## Next Steps
- Complete statistical analysis
- Prepare draft of findings
- Schedule stakeholder presentation

## Budget Status
- 65% of allocated funds utilized
- On track with projected spending"
    )
}

pub fn critique(kind: CritiqueType) -> &'static str {
    match kind {
        CritiqueType::Strength => {
            "## Research Methodology\nYour proposed methodology demonstrates a strong \
understanding of the field. The mixed-methods approach will provide both quantitative and \
qualitative insights.\n\n## Literature Review\nExcellent integration of current research with \
clear connection to your proposed work."
        }
        CritiqueType::Weakness => {
            "## Impact Statement\nThe impact section lacks specific, measurable outcomes. \
Consider adding quantifiable metrics to demonstrate the potential effect of your research.\n\n\
## Timeline\nThe project timeline appears optimistic given the scope of work. Consider \
building in additional buffer time for unexpected delays."
        }
        CritiqueType::Suggestion => {
            "## Budget Justification\nStrengthen your budget justification by providing more \
detailed breakdowns of costs and explaining why each expense is necessary for project \
success.\n\n## Evaluation Plan\nConsider adding a more robust evaluation framework that \
includes both formative and summative assessment methods."
        }
    }
}
