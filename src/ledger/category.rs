use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four tracked expense buckets.
///
/// The declaration order is load-bearing: the summary sheet writes one row
/// per category in this order and the embedded pie chart addresses those
/// rows by position, not by name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    FixedExpenses,
    Card1,
    Card2,
    Card3,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::FixedExpenses,
        Category::Card1,
        Category::Card2,
        Category::Card3,
    ];

    /// Display name, identical to the worksheet name in the monthly workbook.
    pub fn name(&self) -> &'static str {
        match self {
            Category::FixedExpenses => "Despesas Fixas",
            Category::Card1 => "Cartão 1",
            Category::Card2 => "Cartão 2",
            Category::Card3 => "Cartão 3",
        }
    }

    /// Header of the label column in this category's worksheet.
    pub fn label_header(&self) -> &'static str {
        match self {
            Category::FixedExpenses => "Despesa",
            _ => "Compra",
        }
    }

    /// Noun used when prompting for a new entry in this category.
    pub fn entry_noun(&self) -> &'static str {
        match self {
            Category::FixedExpenses => "Despesa fixa",
            Category::Card1 => "Compra no Cartão 1",
            Category::Card2 => "Compra no Cartão 2",
            Category::Card3 => "Compra no Cartão 3",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_preserves_summary_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["Despesas Fixas", "Cartão 1", "Cartão 2", "Cartão 3"]
        );
    }

    #[test]
    fn fixed_expenses_use_their_own_label_header() {
        assert_eq!(Category::FixedExpenses.label_header(), "Despesa");
        assert_eq!(Category::Card2.label_header(), "Compra");
    }
}
