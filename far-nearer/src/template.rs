use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use svg::parser::Event;

use crate::error::{GenerateError, Result};

const DEFAULT_EXTENSION: &str = "svg";

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bCOLOR_[0-9]+\b").unwrap());

// e.g. `rect` / `fill` / `COLOR_1`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenReference {
    pub element: String,
    pub attribute: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    text: String,
}

impl Template {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Template> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GenerateError::ReadTemplate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Template::from_text(path, text))
    }

    pub fn from_text<P: Into<PathBuf>>(path: P, text: String) -> Template {
        Template {
            path: path.into(),
            text,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn extension(&self) -> &str {
        self.path
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or(DEFAULT_EXTENSION)
    }

    pub fn token_count(&self, token: &str) -> usize {
        self.text.matches(token).count()
    }

    pub fn render<S: AsRef<str>>(&self, replacements: &[(&str, S)]) -> String {
        replacements
            .iter()
            .fold(self.text.clone(), |text, (token, color)| {
                text.replace(*token, color.as_ref())
            })
    }

    pub fn missing_tokens<'a>(&self, tokens: &[&'a str]) -> Vec<&'a str> {
        tokens
            .iter()
            .copied()
            .filter(|token| !self.text.contains(*token))
            .collect()
    }

    pub fn unknown_tokens(&self, tokens: &[&str]) -> Vec<String> {
        TOKEN_PATTERN
            .find_iter(&self.text)
            .map(|m| m.as_str())
            .filter(|found| !tokens.contains(found))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // Stops at the first parse error.
    pub fn references(&self, tokens: &[&str]) -> Vec<TokenReference> {
        let parser = match svg::read(&self.text) {
            Ok(parser) => parser,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "could not parse template: {}", err);
                return Vec::new();
            }
        };

        let mut references = Vec::new();
        for event in parser {
            match event {
                Event::Tag(element, _, attributes) => {
                    for (attribute, value) in attributes.iter() {
                        for token in tokens.iter().filter(|token| value.contains(**token)) {
                            references.push(TokenReference {
                                element: element.to_string(),
                                attribute: attribute.to_string(),
                                token: token.to_string(),
                            });
                        }
                    }
                }
                Event::Error(err) => {
                    tracing::warn!(path = %self.path.display(), "template is not well-formed SVG: {}", err);
                    break;
                }
                _ => {}
            }
        }
        references.sort();
        references
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::TOKENS;

    const SHAPES: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
<rect fill="COLOR_1" stroke="COLOR_2" width="10" height="10" />
<circle fill="COLOR_3" stroke="COLOR_1" r="4" cx="5" cy="5" />
<path style="fill:COLOR_1" d="M0 0L10 10" />
</svg>
"#;

    fn shapes() -> Template {
        Template::from_text("far nearer_template.svg", SHAPES.to_string())
    }

    #[test]
    fn test_render() {
        let template = shapes();
        assert_eq!(3, template.token_count("COLOR_1"));
        assert_eq!(1, template.token_count("COLOR_2"));
        assert_eq!(1, template.token_count("COLOR_3"));

        let out = template.render(&[
            ("COLOR_1", "#ffccfb"),
            ("COLOR_2", "#ffc7dc"),
            ("COLOR_3", "#ffffff"),
        ]);
        for token in TOKENS {
            assert!(!out.contains(token));
        }
        assert_eq!(3, out.matches("#ffccfb").count());
        assert_eq!(1, out.matches("#ffc7dc").count());
        assert_eq!(1, out.matches("#ffffff").count());
        // the template itself is untouched
        assert_eq!(SHAPES, template.text());
    }

    #[test]
    fn test_render_leaves_rest_alone() {
        let template = Template::from_text(
            "t.svg",
            r#"<rect fill="COLOR_1" stroke="COLOR_2" /><circle fill="COLOR_3" />"#.to_string(),
        );
        let out = template.render(&[("COLOR_1", "a"), ("COLOR_2", "b"), ("COLOR_3", "c")]);
        assert_eq!(r#"<rect fill="a" stroke="b" /><circle fill="c" />"#, out);
    }

    #[test]
    fn test_extension() {
        assert_eq!("svg", shapes().extension());
        assert_eq!(
            "xml",
            Template::from_text("art/template.xml", String::new()).extension()
        );
        assert_eq!(
            "svg",
            Template::from_text("template", String::new()).extension()
        );
    }

    #[test]
    fn test_missing_and_unknown_tokens() {
        let template = Template::from_text(
            "t.svg",
            r#"<rect fill="COLOR_1" /><rect fill="COLOR_4" /><rect fill="COLOR_4" stroke="COLOR_12" />"#
                .to_string(),
        );
        assert_eq!(vec!["COLOR_2", "COLOR_3"], template.missing_tokens(&TOKENS));
        assert_eq!(vec!["COLOR_12", "COLOR_4"], template.unknown_tokens(&TOKENS));

        assert!(shapes().missing_tokens(&TOKENS).is_empty());
        assert!(shapes().unknown_tokens(&TOKENS).is_empty());
    }

    #[test]
    fn test_references() {
        let references = shapes().references(&TOKENS);
        let found: Vec<(&str, &str, &str)> = references
            .iter()
            .map(|r| (r.element.as_str(), r.attribute.as_str(), r.token.as_str()))
            .collect();
        assert_eq!(
            vec![
                ("circle", "fill", "COLOR_3"),
                ("circle", "stroke", "COLOR_1"),
                ("path", "style", "COLOR_1"),
                ("rect", "fill", "COLOR_1"),
                ("rect", "stroke", "COLOR_2"),
            ],
            found
        );
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.svg");
        match Template::load(&path) {
            Err(GenerateError::ReadTemplate { path: p, .. }) => assert_eq!(path, p),
            other => panic!("expected ReadTemplate, got {:?}", other),
        }
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("far nearer_template.svg");
        fs::write(&path, SHAPES).unwrap();
        let template = Template::load(&path).unwrap();
        assert_eq!(SHAPES, template.text());
        assert_eq!(path, template.path());
    }
}
