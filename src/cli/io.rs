use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::output;
use crate::cli::session::EntryPrompt;
use crate::errors::Result;
use crate::ledger::Category;

const MENU: &str = "
    [1] Para Contas Fixas
    [2] Para Cartão 1
    [3] Para Cartão 2
    [4] Para Cartão 3
    [0] Sair";

/// Terminal-backed prompt source using dialoguer inputs.
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn text(&self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryPrompt for DialoguerPrompt {
    fn menu_choice(&mut self) -> Result<String> {
        output::info(MENU);
        self.text("Escolha uma opção")
    }

    fn label(&mut self, category: Category) -> Result<String> {
        self.text(&format!("{} (ou 'sair')", category.entry_noun()))
    }

    fn amount(&mut self) -> Result<String> {
        self.text("Valor: R$")
    }

    fn date(&mut self) -> Result<String> {
        self.text("Data da compra (dd/mm/aaaa)")
    }

    fn income(&mut self, which: u8) -> Result<String> {
        self.text(&format!("Digite a receita mensal {} (R$)", which))
    }

    fn notify_invalid_choice(&mut self, raw: &str) {
        output::warning(format!("Opção inválida `{}`. Tente novamente.", raw));
    }
}
