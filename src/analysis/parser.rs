//! Structured parsing of the model's free-text analysis
//!
//! Converts the raw reply into the three labeled buckets. The model is
//! instructed to answer with Condition / Concerns / Recommendations
//! headings, but replies drift, so parsing is heading detection first with
//! two fallbacks behind it. Kept behind a narrow interface so the strategy
//! can be replaced wholesale, e.g. by structured output mode.

/// Section buckets recovered from the reply. `None`/empty buckets are
/// filled with defaults downstream.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedSections {
    pub condition: Option<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Condition,
    Concerns,
    Recommendations,
}

/// Heading keywords in fixed match order; the first keyword that matches a
/// line's start wins and later sections never re-test the same line.
const SECTION_KEYWORDS: [(Section, &[&str]); 3] = [
    (Section::Condition, &["condition"]),
    (Section::Concerns, &["concerns", "issue"]),
    (Section::Recommendations, &["recommend", "suggest"]),
];

const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Parse the raw reply text into section buckets.
pub fn parse(text: &str) -> ParsedSections {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut sections = ParsedSections::default();
    let mut current: Option<Section> = None;

    'lines: for line in &lines {
        let lower = line.to_lowercase();

        for (section, keywords) in SECTION_KEYWORDS {
            if keywords.iter().any(|kw| lower.starts_with(kw)) {
                current = Some(section);
                // Inline content after the heading colon belongs to the
                // section, e.g. "Condition: Dry skin".
                if let Some((_, rest)) = line.split_once(':') {
                    let rest = rest.trim();
                    if !rest.is_empty() {
                        assign(&mut sections, section, rest);
                    }
                }
                continue 'lines;
            }
        }

        if let Some(section) = current {
            let content = strip_bullet(line);
            if !content.is_empty() {
                assign(&mut sections, section, content);
            }
        }
    }

    if sections.condition.is_none()
        && sections.concerns.is_empty()
        && sections.recommendations.is_empty()
    {
        positional_fallback(&lines, &mut sections);
    }
    keyword_fallback(&lines, &mut sections);

    sections
}

fn assign(sections: &mut ParsedSections, section: Section, content: &str) {
    match section {
        // The condition bucket is single-valued; later lines are dropped.
        Section::Condition => {
            if sections.condition.is_none() {
                sections.condition = Some(content.to_string());
            }
        }
        Section::Concerns => sections.concerns.push(content.to_string()),
        Section::Recommendations => sections.recommendations.push(content.to_string()),
    }
}

fn strip_bullet(line: &str) -> &str {
    match line.strip_prefix(&BULLET_MARKERS[..]) {
        Some(rest) => rest.trim(),
        None => line,
    }
}

/// No heading matched anywhere: split the lines into three contiguous
/// groups by count (remainder to the last group) and treat them as
/// condition, concerns, recommendations in that order.
fn positional_fallback(lines: &[&str], sections: &mut ParsedSections) {
    if lines.is_empty() {
        return;
    }
    tracing::warn!("No section headings found, falling back to positional split");

    let third = lines.len() / 3;
    let (head, rest) = lines.split_at(third);
    let (mid, tail) = rest.split_at(third);

    if !head.is_empty() {
        sections.condition = Some(head.join(" "));
    }
    if !mid.is_empty() {
        sections.concerns = vec![mid.join(" ")];
    }
    if !tail.is_empty() {
        sections.recommendations = vec![tail.join(" ")];
    }
}

/// Some buckets filled but not all: for each empty bucket, take the first
/// line mentioning its keyword anywhere, minus any heading prefix.
fn keyword_fallback(lines: &[&str], sections: &mut ParsedSections) {
    let filled = usize::from(sections.condition.is_some())
        + usize::from(!sections.concerns.is_empty())
        + usize::from(!sections.recommendations.is_empty());
    if filled == 0 || filled == 3 {
        return;
    }

    if sections.condition.is_none() {
        sections.condition = find_line_with_keyword(lines, "condition");
    }
    if sections.concerns.is_empty() {
        if let Some(found) = find_line_with_keyword(lines, "concern") {
            sections.concerns = vec![found];
        }
    }
    if sections.recommendations.is_empty() {
        if let Some(found) = find_line_with_keyword(lines, "recommend") {
            sections.recommendations = vec![found];
        }
    }
}

fn find_line_with_keyword(lines: &[&str], keyword: &str) -> Option<String> {
    let line = lines
        .iter()
        .copied()
        .find(|line| line.to_lowercase().contains(keyword))?;
    let content = match line.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => line,
    };
    let content = strip_bullet(content);
    (!content.is_empty()).then(|| content.to_string())
}
