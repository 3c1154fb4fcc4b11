use std::str::FromStr;

use crate::error::{LoadError, Result};
use crate::material::Material;
use crate::vec3::Vec3;

/// Whitespace separated tokens. A token starting with `#` drops the rest of its line.
pub struct Tokens<'a> {
    lines: std::str::Lines<'a>,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            words: "".split_whitespace(),
        }
    }

    pub fn expect(&mut self, what: &'static str) -> Result<&'a str> {
        self.next().ok_or(LoadError::UnexpectedEof(what))
    }

    pub fn parse<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        let token = self.expect(what)?;
        token.parse().map_err(|_| LoadError::InvalidNumber {
            token: token.to_string(),
            expected: what,
        })
    }

    pub fn vec3(&mut self, what: &'static str) -> Result<Vec3<f64>> {
        Ok(Vec3::new(self.parse(what)?, self.parse(what)?, self.parse(what)?))
    }

    /// `ambient diffuse specular shininess mirror`
    pub fn material(&mut self) -> Result<Material> {
        Ok(Material {
            ambient: self.vec3("material ambient")?,
            diffuse: self.vec3("material diffuse")?,
            specular: self.vec3("material specular")?,
            shininess: self.parse("material shininess")?,
            mirror: self.parse("material mirror")?,
        })
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.words.next() {
                Some(word) if word.starts_with('#') => {
                    self.words = "".split_whitespace();
                }
                Some(word) => return Some(word),
                None => self.words = self.lines.next()?.split_whitespace(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_run_to_end_of_line() {
        let tokens: Vec<_> = Tokens::new("a b # c d\n\n  e #f\n#g\nh").collect();
        assert_eq!(vec!["a", "b", "e", "h"], tokens);
    }

    #[test]
    fn reads_material_block() {
        let mut tokens = Tokens::new("0.1 0.1 0.1  0.5 0.6 0.7  1 1 1  50 0.25");
        let material = tokens.material().unwrap();

        assert_eq!(Vec3::new(0.5, 0.6, 0.7), material.diffuse);
        assert_eq!(50.0, material.shininess);
        assert_eq!(0.25, material.mirror);
    }

    #[test]
    fn reports_bad_numbers_and_eof() {
        let mut tokens = Tokens::new("1 x");
        assert_eq!(1.0, tokens.parse::<f64>("radius").unwrap());
        assert!(matches!(tokens.parse::<f64>("radius"), Err(LoadError::InvalidNumber { .. })));
        assert!(matches!(tokens.parse::<f64>("radius"), Err(LoadError::UnexpectedEof("radius"))));
    }
}
