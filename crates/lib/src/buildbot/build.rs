use super::Builder;

/// One numbered build of a [`Builder`].
#[derive(Clone, Copy)]
pub struct Build<'a> {
  builder: &'a Builder<'a>,
  number: i64,
}

impl<'a> Build<'a> {
  pub(super) fn new(builder: &'a Builder<'a>, number: i64) -> Self {
    Self { builder, number }
  }

  pub fn builder(&self) -> &Builder<'a> {
    self.builder
  }

  pub fn number(&self) -> i64 {
    self.number
  }

  pub fn results_url(&self) -> String {
    format!("{}/{}", self.builder.results_url(), self.number)
  }
}

#[cfg(test)]
mod tests {
  use super::super::BuildBot;

  #[test]
  fn results_url_appends_number() {
    let bot = BuildBot::new();
    let builder = bot.builder_with_name("Linux");
    for number in [0, 1, 42, -7, i64::MAX, i64::MIN] {
      let build = builder.build(number);
      assert_eq!(build.number(), number);
      assert_eq!(build.builder().name(), "Linux");
      assert_eq!(build.results_url(), format!("{}/{}", builder.results_url(), number));
    }
  }

  #[test]
  fn results_url_literal() {
    let bot = BuildBot::new();
    assert_eq!(
      bot.builder_with_name("Mac").build(123).results_url(),
      "http://example.com/builders/Mac/results/123"
    );
  }
}
