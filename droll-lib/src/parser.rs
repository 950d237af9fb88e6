use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "droll.pest"]
pub struct Parser;

impl Parser {
    /// Split a term around its `d` separator, into the count and sides literals
    pub fn split_term(term: &str) -> Option<(&str, &str)> {
        let pair = <Self as pest::Parser<Rule>>::parse(Rule::term, term)
            .ok()?
            .next()?;
        let mut count = None;
        let mut sides = None;
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::count => count = Some(inner.as_str()),
                Rule::sides => sides = Some(inner.as_str()),
                _ => (),
            }
        }
        Some((count?, sides?))
    }
}
