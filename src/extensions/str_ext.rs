pub trait UpperFirst {
    /// Returns a copy with only the first character converted to upper case.
    fn upper_first(&self) -> String;
}

impl UpperFirst for str {
    fn upper_first(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("catalog", "Catalog")]
    #[case("Basket", "Basket")]
    #[case("productLists", "ProductLists")]
    #[case("1stock", "1stock")]
    fn upper_first(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(input.upper_first(), expected);
    }
}
