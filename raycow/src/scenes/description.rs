use std::fmt;

use crate::geometry::vector3::Vector3;
use super::provider::SceneError;

/// One `keyword token token ...` line of a scene file.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    keyword: String,
    tokens: Vec<String>,
    line: usize,
}

impl Directive {

    pub fn new(keyword: &str, tokens: Vec<String>, line: usize) -> Self {
        Self {
            keyword: keyword.to_string(),
            tokens,
            line,
        }
    }

    pub fn from_numbers(keyword: &str, numbers: &[f64]) -> Self {
        Self::new(keyword, numbers.iter().map(|v| v.to_string()).collect(), 0)
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn tokens(&self) -> &Vec<String> {
        &self.tokens
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn error(&self, description: &str) -> SceneError {
        SceneError::InvalidDirective {
            line: self.line,
            description: format!("{}: {}", self.keyword, description),
        }
    }

    pub fn expect_tokens(&self, expected: usize) -> Result<(), SceneError> {
        if self.tokens.len() != expected {
            return Err(self.error(&format!("expected {} values, got {}", expected, self.tokens.len())));
        }

        Ok(())
    }

    pub fn number(&self, index: usize) -> Result<f64, SceneError> {
        let token = self.tokens.get(index)
            .ok_or_else(|| self.error(&format!("missing value #{}", index + 1)))?;

        let value: f64 = token.parse()
            .map_err(|err| self.error(&format!("failed to parse \"{}\" as a number: {}", token, err)))?;

        if !value.is_finite() {
            return Err(self.error(&format!("value should be finite, got {}", token)));
        }

        Ok(value)
    }

    /// All tokens as numbers, checking the count first.
    pub fn numbers(&self, expected: usize) -> Result<Vec<f64>, SceneError> {
        self.expect_tokens(expected)?;
        (0..expected).map(|i| self.number(i)).collect()
    }

    pub fn vector_at(&self, index: usize) -> Result<Vector3, SceneError> {
        Ok(Vector3::new(self.number(index)?, self.number(index + 1)?, self.number(index + 2)?))
    }

    pub fn vector(&self) -> Result<Vector3, SceneError> {
        self.expect_tokens(3)?;
        self.vector_at(0)
    }

    pub fn dimension(&self, index: usize) -> Result<usize, SceneError> {
        let token = self.tokens.get(index)
            .ok_or_else(|| self.error(&format!("missing value #{}", index + 1)))?;

        match token.parse::<i64>() {
            Ok(v) if v > 0 => Ok(v as usize),
            Ok(v) => Err(self.error(&format!("dimensions must be positive, got {}", v))),
            Err(err) => Err(self.error(&format!("failed to parse \"{}\" as an integer: {}", token, err))),
        }
    }
}

impl fmt::Display for Directive {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword)?;
        for token in &self.tokens {
            write!(f, " {}", token)?;
        }

        Ok(())
    }
}

/// Scene file split into directives, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDescription {
    directives: Vec<Directive>,
}

impl SceneDescription {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Self {
        let mut description = Self::new();

        for (index, line) in text.lines().enumerate() {
            let mut parts = line.split(|c: char| c == ' ' || c == '\t').filter(|v| !v.is_empty());

            let keyword = match parts.next() {
                Some(v) => v,
                None => continue,
            };
            if keyword.starts_with('#') {
                continue;
            }

            let tokens = parts.map(|v| v.trim_end_matches('\r').to_string())
                .filter(|v| !v.is_empty())
                .collect();
            description.push(Directive::new(keyword.trim_end_matches('\r'), tokens, index + 1));
        }

        description
    }

    pub fn push(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    /// First directive with the keyword.
    pub fn find(&self, keyword: &str) -> Option<&Directive> {
        self.directives.iter().find(|v| v.keyword == keyword)
    }

    pub fn require(&self, keyword: &str) -> Result<&Directive, SceneError> {
        self.find(keyword).ok_or_else(|| SceneError::MissingDirective {
            name: keyword.to_string(),
        })
    }
}

impl fmt::Display for SceneDescription {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for directive in &self.directives {
            writeln!(f, "{}", directive)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = "# camera\neye 0 0 5\n\n\tviewdir  0 0 -1\nimsize\t640 480\r\n#sphere 1 2 3 4\n";

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let description = SceneDescription::parse(SCENE);
        let keywords: Vec<&str> = description.directives().iter().map(|v| v.keyword()).collect();

        assert_eq!(keywords, vec!["eye", "viewdir", "imsize"]);
    }

    #[test]
    fn test_tokens_and_line_numbers() {
        let description = SceneDescription::parse(SCENE);
        let imsize = description.require("imsize").unwrap();

        assert_eq!(imsize.tokens(), &vec!["640".to_string(), "480".to_string()]);
        assert_eq!(imsize.line(), 5);
        assert_eq!(imsize.dimension(0).unwrap(), 640);
        assert_eq!(description.require("viewdir").unwrap().vector().unwrap(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_missing_directive() {
        let description = SceneDescription::parse(SCENE);
        match description.require("fovv") {
            Err(SceneError::MissingDirective { name }) => assert_eq!(name, "fovv"),
            other => panic!("expected missing directive error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_numbers() {
        let description = SceneDescription::parse("eye 0 zero 5\nimsize 10 -2\nbkgcolor 1 1");

        let err = description.require("eye").unwrap().vector().unwrap_err();
        assert!(format!("{}", err).starts_with("Invalid directive on line 1: eye: failed to parse \"zero\""));

        let err = description.require("imsize").unwrap().dimension(1).unwrap_err();
        assert_eq!(format!("{}", err), "Invalid directive on line 2: imsize: dimensions must be positive, got -2");

        let err = description.require("bkgcolor").unwrap().vector().unwrap_err();
        assert_eq!(format!("{}", err), "Invalid directive on line 3: bkgcolor: expected 3 values, got 2");
    }

    #[test]
    fn test_display_round_trip() {
        let description = SceneDescription::parse("imsize 64 48\nbkgcolor 0.1 0.25 1\n# comment\nsphere 0 0 -3 1.5\n");
        let reparsed = SceneDescription::parse(&description.to_string());

        assert_eq!(description.to_string(), "imsize 64 48\nbkgcolor 0.1 0.25 1\nsphere 0 0 -3 1.5\n");
        let tokens = |d: &SceneDescription| d.directives().iter().map(|v| v.tokens().clone()).collect::<Vec<_>>();
        assert_eq!(tokens(&reparsed), tokens(&description));
    }
}
