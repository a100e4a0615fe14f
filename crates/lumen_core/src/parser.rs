//! Scene file parser.
//!
//! The scene format is line oriented: each line starts with a directive
//! keyword followed by whitespace-separated fields in a fixed order.
//!
//! # Supported Syntax
//!
//! - `NEAR <n>`
//! - `LEFT <l>`, `RIGHT <r>`, `BOTTOM <b>`, `TOP <t>`
//! - `RES <x> <y>`
//! - `SPHERE <name> <pos x> <pos y> <pos z> <scl x> <scl y> <scl z> <r> <g> <b> <Ka> <Kd> <Ks> <Kr> <n>`
//! - `LIGHT <name> <pos x> <pos y> <pos z> <Ir> <Ig> <Ib>`
//! - `BACK <r> <g> <b>`
//! - `AMBIENT <Ir> <Ig> <Ib>`
//! - `OUTPUT <name>`
//!
//! Blank lines and `#` comments are skipped. Unknown keywords are skipped
//! with a warning.

use std::str::{FromStr, SplitWhitespace};

use lumen_math::DVec3;
use thiserror::Error;

use crate::scene::{Color, Light, Material, Sphere};

/// Errors that can occur during scene parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Line {line}: {keyword} is missing field <{field}>")]
    MissingField {
        line: usize,
        keyword: &'static str,
        field: &'static str,
    },

    #[error("Line {line}: invalid value '{value}' for <{field}>")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: unexpected trailing field '{value}' after {keyword}")]
    TrailingField {
        line: usize,
        keyword: &'static str,
        value: String,
    },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// One parsed line of a scene file.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Near(f64),
    Left(f64),
    Right(f64),
    Bottom(f64),
    Top(f64),
    Res(u32, u32),
    Sphere(Sphere),
    Light(Light),
    Back(Color),
    Ambient(Color),
    Output(String),
}

/// Cursor over the fields of a single directive line.
struct Fields<'a> {
    tokens: SplitWhitespace<'a>,
    keyword: &'static str,
    line: usize,
}

impl<'a> Fields<'a> {
    fn new(tokens: SplitWhitespace<'a>, keyword: &'static str, line: usize) -> Self {
        Self {
            tokens,
            keyword,
            line,
        }
    }

    fn word(&mut self, field: &'static str) -> ParseResult<&'a str> {
        self.tokens.next().ok_or(ParseError::MissingField {
            line: self.line,
            keyword: self.keyword,
            field,
        })
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> ParseResult<T> {
        let word = self.word(field)?;
        word.parse::<T>().map_err(|_| ParseError::InvalidNumber {
            line: self.line,
            field,
            value: word.to_string(),
        })
    }

    fn vec3(&mut self, fields: [&'static str; 3]) -> ParseResult<DVec3> {
        let x = self.number(fields[0])?;
        let y = self.number(fields[1])?;
        let z = self.number(fields[2])?;
        Ok(DVec3::new(x, y, z))
    }

    /// Reject anything left on the line.
    fn finish(mut self) -> ParseResult<()> {
        match self.tokens.next() {
            Some(extra) => Err(ParseError::TrailingField {
                line: self.line,
                keyword: self.keyword,
                value: extra.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Scene file parser.
pub struct SceneParser<'a> {
    content: &'a str,
}

impl<'a> SceneParser<'a> {
    /// Create a new parser from file contents.
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Parse every line and return the directives in file order.
    pub fn parse(&self) -> ParseResult<Vec<Directive>> {
        let mut directives = Vec::new();

        for (index, raw) in self.content.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some(directive) = Self::parse_line(trimmed, line)? {
                directives.push(directive);
            }
        }

        Ok(directives)
    }

    /// Parse one non-empty line. Returns `None` for unknown keywords.
    fn parse_line(text: &str, line: usize) -> ParseResult<Option<Directive>> {
        let mut tokens = text.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };

        let directive = match keyword {
            "NEAR" => {
                let mut f = Fields::new(tokens, "NEAR", line);
                let n = f.number("n")?;
                f.finish()?;
                Directive::Near(n)
            }
            "LEFT" => {
                let mut f = Fields::new(tokens, "LEFT", line);
                let l = f.number("l")?;
                f.finish()?;
                Directive::Left(l)
            }
            "RIGHT" => {
                let mut f = Fields::new(tokens, "RIGHT", line);
                let r = f.number("r")?;
                f.finish()?;
                Directive::Right(r)
            }
            "BOTTOM" => {
                let mut f = Fields::new(tokens, "BOTTOM", line);
                let b = f.number("b")?;
                f.finish()?;
                Directive::Bottom(b)
            }
            "TOP" => {
                let mut f = Fields::new(tokens, "TOP", line);
                let t = f.number("t")?;
                f.finish()?;
                Directive::Top(t)
            }
            "RES" => {
                let mut f = Fields::new(tokens, "RES", line);
                let x = f.number("x")?;
                let y = f.number("y")?;
                f.finish()?;
                Directive::Res(x, y)
            }
            "SPHERE" => Directive::Sphere(Self::parse_sphere(Fields::new(tokens, "SPHERE", line))?),
            "LIGHT" => Directive::Light(Self::parse_light(Fields::new(tokens, "LIGHT", line))?),
            "BACK" => {
                let mut f = Fields::new(tokens, "BACK", line);
                let color = f.vec3(["r", "g", "b"])?;
                f.finish()?;
                Directive::Back(color)
            }
            "AMBIENT" => {
                let mut f = Fields::new(tokens, "AMBIENT", line);
                let intensity = f.vec3(["Ir", "Ig", "Ib"])?;
                f.finish()?;
                Directive::Ambient(intensity)
            }
            "OUTPUT" => {
                let mut f = Fields::new(tokens, "OUTPUT", line);
                let name = f.word("name")?.to_string();
                f.finish()?;
                Directive::Output(name)
            }
            other => {
                log::warn!("Line {}: skipping unknown directive '{}'", line, other);
                return Ok(None);
            }
        };

        Ok(Some(directive))
    }

    fn parse_sphere(mut f: Fields<'_>) -> ParseResult<Sphere> {
        let name = f.word("name")?;
        let position = f.vec3(["pos x", "pos y", "pos z"])?;
        let scale = f.vec3(["scl x", "scl y", "scl z"])?;
        let color = f.vec3(["r", "g", "b"])?;
        let material = Material {
            color,
            ka: f.number("Ka")?,
            kd: f.number("Kd")?,
            ks: f.number("Ks")?,
            kr: f.number("Kr")?,
            shininess: f.number("n")?,
        };
        f.finish()?;

        Ok(Sphere::new(name, position, scale, material))
    }

    fn parse_light(mut f: Fields<'_>) -> ParseResult<Light> {
        let name = f.word("name")?;
        let position = f.vec3(["pos x", "pos y", "pos z"])?;
        let intensity = f.vec3(["Ir", "Ig", "Ib"])?;
        f.finish()?;

        Ok(Light::new(name, position, intensity))
    }
}

/// Parse scene file contents and return the directives in file order.
pub fn parse_scene(content: &str) -> ParseResult<Vec<Directive>> {
    SceneParser::new(content).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        let src = "NEAR 1\nLEFT -1\nRIGHT 1\nBOTTOM -1\nTOP 1\nRES 600 400\n";
        let directives = parse_scene(src).unwrap();
        assert_eq!(
            directives,
            vec![
                Directive::Near(1.0),
                Directive::Left(-1.0),
                Directive::Right(1.0),
                Directive::Bottom(-1.0),
                Directive::Top(1.0),
                Directive::Res(600, 400),
            ]
        );
    }

    #[test]
    fn test_parse_sphere() {
        let src = "SPHERE s1 0 0 -10 2 4 2 0.5 0 0 1 1 0.9 0 50";
        let directives = parse_scene(src).unwrap();
        assert_eq!(directives.len(), 1);

        if let Directive::Sphere(sphere) = &directives[0] {
            assert_eq!(sphere.name, "s1");
            assert_eq!(sphere.position, DVec3::new(0.0, 0.0, -10.0));
            assert_eq!(sphere.scale, DVec3::new(2.0, 4.0, 2.0));
            assert_eq!(sphere.material.color, Color::new(0.5, 0.0, 0.0));
            assert_eq!(sphere.material.ka, 1.0);
            assert_eq!(sphere.material.kd, 1.0);
            assert_eq!(sphere.material.ks, 0.9);
            assert_eq!(sphere.material.kr, 0.0);
            assert_eq!(sphere.material.shininess, 50);
        } else {
            panic!("Expected Sphere directive");
        }
    }

    #[test]
    fn test_parse_light_and_colors() {
        let src = "LIGHT l1 0 0 0 0.3 0.3 0.3\nBACK 1 1 1\nAMBIENT 0.2 0.2 0.2\nOUTPUT out.ppm";
        let directives = parse_scene(src).unwrap();

        assert_eq!(
            directives[0],
            Directive::Light(Light::new("l1", DVec3::ZERO, Color::splat(0.3)))
        );
        assert_eq!(directives[1], Directive::Back(Color::ONE));
        assert_eq!(directives[2], Directive::Ambient(Color::splat(0.2)));
        assert_eq!(directives[3], Directive::Output("out.ppm".to_string()));
    }

    #[test]
    fn test_skips_comments_blanks_and_unknown() {
        let src = "# a comment\n\n   \nFOG 0.5\nNEAR 2\n";
        let directives = parse_scene(src).unwrap();
        assert_eq!(directives, vec![Directive::Near(2.0)]);
    }

    #[test]
    fn test_tabs_and_extra_spaces() {
        let directives = parse_scene("RES\t10   20").unwrap();
        assert_eq!(directives, vec![Directive::Res(10, 20)]);
    }

    #[test]
    fn test_missing_field_reports_line() {
        let err = parse_scene("NEAR 1\nRES 10\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingField {
                line: 2,
                keyword: "RES",
                field: "y",
            }
        );
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_scene("LIGHT l1 0 zero 0 1 1 1").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber { line: 1, field: "pos y", .. }
        ));

        // Negative resolutions never reach the scene
        let err = parse_scene("RES -5 10").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { field: "x", .. }));
    }

    #[test]
    fn test_trailing_field() {
        let err = parse_scene("BACK 1 1 1 1").unwrap_err();
        assert!(matches!(
            err,
            ParseError::TrailingField { keyword: "BACK", .. }
        ));
    }
}
