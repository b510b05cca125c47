use super::*;

pub const FACTS: [&str; 4] = [
  "Dogs are (usually) better than cats",
  "Brooklyn 99 is a great TV show",
  "Milk is underrated",
  "I'm a ravenclaw",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fact(&'static str);

impl Fact {
  pub fn random(rng: &mut impl Rng) -> Self {
    Self(FACTS[rng.gen_range(0..FACTS.len())])
  }

  pub fn text(self) -> &'static str {
    self.0
  }
}

/// Replaces the text of the fact container with a random fact.
pub fn display_fact(dom: &impl Dom, rng: &mut impl Rng) -> Result {
  dom.set_text(element::FACT_CONTAINER, Fact::random(rng).text())
}
