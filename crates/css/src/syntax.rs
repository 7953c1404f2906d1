// A single CSS property: "color: red"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

// Set of selectors and declarations
#[derive(Clone, Debug)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

/// A compound selector such as `textarea#notes.wide`.
///
/// All parts are optional; a selector with none of them is `*`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    pub fn is_universal(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty()
    }
}

// A full stylesheet: multiple rules, in source order
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

// input: "textarea, #id { padding: 2px; } .wide { width: 400px; }"
// output: Stylesheet { rules: vec![Rule{ selectors: ..., declarations: ...}, ...] }
pub fn parse_stylesheet(input: &str) -> Stylesheet {
    let input = strip_comments(input);
    let mut rules = Vec::new();
    for block in input.split('}') {
        if let Some((selector_str, declaration_str)) = block.split_once('{') {
            let selectors = selector_str
                .split(',')
                .filter_map(parse_selector_one)
                .collect::<Vec<_>>();
            if selectors.is_empty() {
                continue;
            }
            let declarations = parse_declarations(declaration_str);
            if declarations.is_empty() {
                continue;
            }
            rules.push(Rule {
                selectors,
                declarations,
            });
        }
    }
    Stylesheet { rules }
}

// input: "padding: 2px; line-height: 20px;"
// output: vec![Declaration { name: "padding", value: "2px" }, ...]
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    input
        .split(';')
        .filter_map(|pair| {
            let (n, v) = pair.split_once(':')?;
            let name = n.trim().to_ascii_lowercase();
            if name.is_empty() {
                return None;
            }
            let value = v.trim().to_string();
            if value.is_empty() {
                return None;
            }
            Some(Declaration { name, value })
        })
        .collect()
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

// input: "*", "textarea", "#id", ".a.b", "textarea#id.wide"
// Descendant/child combinators are not supported; such selectors are dropped.
fn parse_selector_one(s: &str) -> Option<Selector> {
    let s = s.trim();
    if s.is_empty() || s.contains(|c: char| c.is_whitespace() || c == '>' || c == '+') {
        return None;
    }
    if s == "*" {
        return Some(Selector::default());
    }

    let mut selector = Selector::default();
    let mut rest = s;

    let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
    let tag = &rest[..tag_end];
    if !tag.is_empty() && tag != "*" {
        if !is_ident(tag) {
            return None;
        }
        selector.tag = Some(tag.to_ascii_lowercase());
    }
    rest = &rest[tag_end..];

    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let name = &body[..end];
        if !is_ident(name) {
            return None;
        }
        match marker {
            '#' => selector.id = Some(name.to_string()),
            _ => selector.classes.push(name.to_string()),
        }
        rest = &body[end..];
    }

    Some(selector)
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_selectors() {
        let sheet = parse_stylesheet("textarea#notes.wide.tall { padding: 1px }");
        assert_eq!(sheet.rules.len(), 1);
        let sel = &sheet.rules[0].selectors[0];
        assert_eq!(sel.tag.as_deref(), Some("textarea"));
        assert_eq!(sel.id.as_deref(), Some("notes"));
        assert_eq!(sel.classes, vec!["wide".to_string(), "tall".to_string()]);
    }

    #[test]
    fn skips_comments_and_unsupported_selectors() {
        let sheet = parse_stylesheet(
            "/* ua */ div textarea { padding: 1px } * { line-height: 20px } /* tail",
        );
        assert_eq!(sheet.rules.len(), 1);
        assert!(sheet.rules[0].selectors[0].is_universal());
        assert_eq!(
            sheet.rules[0].declarations,
            vec![Declaration {
                name: "line-height".to_string(),
                value: "20px".to_string()
            }]
        );
    }

    #[test]
    fn declarations_lowercase_names_and_drop_empty_values() {
        let decls = parse_declarations("Padding-Top: 3px; color: ; :x; width:10px");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].name, "padding-top");
        assert_eq!(decls[1].value, "10px");
    }
}
