use crate::syntax::{Selector, Stylesheet, parse_declarations};
use std::cmp::Ordering::Equal;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
struct Specificity(u16, u16, u16); // (id, class, type)

struct Candidate {
    property: String,
    value: String,
    specificity: Specificity,
    order: u32,
}

/// The parts of an element that selectors can see.
#[derive(Clone, Copy, Debug)]
pub struct SelectorSubject<'a> {
    pub tag: &'a str,
    pub id: Option<&'a str>,
    pub classes: &'a [String],
}

fn specificity_of(selector: &Selector) -> Specificity {
    Specificity(
        u16::from(selector.id.is_some()),
        selector.classes.len().min(u16::MAX as usize) as u16,
        u16::from(selector.tag.is_some()),
    )
}

// Check if an element matches a selector
fn matches_selector(subject: &SelectorSubject<'_>, selector: &Selector) -> bool {
    if let Some(tag) = &selector.tag {
        if !subject.tag.eq_ignore_ascii_case(tag) {
            return false;
        }
    }
    if let Some(want) = &selector.id {
        if subject.id != Some(want.as_str()) {
            return false;
        }
    }
    selector
        .classes
        .iter()
        .all(|want| subject.classes.iter().any(|c| c == want))
}

/// Resolve the winning declaration per property for one element.
///
/// Order of precedence: inline `style=""` beats any selector; otherwise higher
/// specificity wins, then later source order. Each `sheet` is applied in the
/// order given, so a user-agent sheet should come first.
pub fn cascade_declarations(
    subject: &SelectorSubject<'_>,
    sheets: &[&Stylesheet],
    inline_style: Option<&str>,
) -> Vec<(String, String)> {
    let mut candidates: Vec<Candidate> = Vec::new();

    if let Some(inline) = inline_style {
        let declarations = parse_declarations(inline);
        let inline_spec = Specificity(u16::MAX, 0, 0);
        let inline_order = u32::MAX;
        candidates.extend(declarations.into_iter().map(|d| Candidate {
            property: d.name,
            value: d.value,
            specificity: inline_spec,
            order: inline_order,
        }));
    }

    let mut order: u32 = 0;
    for sheet in sheets {
        for rule in &sheet.rules {
            let mut matched_specificity: Option<Specificity> = None;
            for selector in &rule.selectors {
                if matches_selector(subject, selector) {
                    let specificity = specificity_of(selector);
                    matched_specificity =
                        Some(matched_specificity.map_or(specificity, |cur| cur.max(specificity)));
                }
            }
            if let Some(specificity) = matched_specificity {
                candidates.extend(rule.declarations.iter().map(|declaration| Candidate {
                    property: declaration.name.clone(),
                    value: declaration.value.clone(),
                    specificity,
                    order,
                }));
            }
            order = order.saturating_add(1);
        }
    }

    // resolve winners per property
    candidates.sort_by(|a, b| match a.property.cmp(&b.property) {
        Equal => match a.specificity.cmp(&b.specificity) {
            Equal => a.order.cmp(&b.order),
            other => other,
        },
        other => other,
    });

    let mut out = Vec::new();
    let mut i = 0;
    while i < candidates.len() {
        let candidate_property = &candidates[i].property;
        let mut j = i;
        while j + 1 < candidates.len() && candidates[j + 1].property == *candidate_property {
            j += 1;
        }
        let winner = &candidates[j];
        out.push((winner.property.clone(), winner.value.clone()));
        i = j + 1;
    }
    out
}
