// src/ui/console_backend.rs - permukaan terminal berbasis dialoguer

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use console::{Term, style};
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::form::fields::{Field, FieldKind};

use super::{Dialog, DialogIcon, FormAction, FormBackend};

pub struct ConsoleBackend {
    term: Term,
    theme: ColorfulTheme,
}

impl ConsoleBackend {
    pub fn new() -> Self {
        Self { term: Term::stdout(), theme: ColorfulTheme::default() }
    }

    /// Select dengan placeholder di baris pertama; memilih placeholder
    /// berarti belum memilih apa-apa (nilai kosong).
    fn select(
        &self,
        label: &str,
        placeholder: &str,
        options: &[&str],
        current: &str,
    ) -> Result<String> {
        let mut items = vec![placeholder];
        items.extend_from_slice(options);
        let default = options
            .iter()
            .position(|option| *option == current)
            .map(|i| i + 1)
            .unwrap_or(0);

        let chosen = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(&items)
            .default(default)
            .interact()?;

        if chosen == 0 { Ok(String::new()) } else { Ok(items[chosen].to_string()) }
    }

    fn paint(&self, icon: DialogIcon, line: String) -> String {
        match icon {
            DialogIcon::Success => style(line).green().to_string(),
            DialogIcon::Error => style(line).red().to_string(),
        }
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBackend for ConsoleBackend {
    fn intro(&mut self, title: &str) -> Result<()> {
        self.term.write_line(&format!(
            "{} {} {}",
            style("Web Programming Lampung").cyan().bold(),
            style("X").dim(),
            style("Masterof Website").cyan().bold(),
        ))?;
        self.term.write_line("")?;
        self.term.write_line(&style(title).bold().to_string())?;
        self.term
            .write_line(&style("* Pastikan semua tidak ada yang kosong").dim().to_string())?;
        self.term.write_line("")?;
        Ok(())
    }

    fn input(&mut self, field: &Field, initial: &str) -> Result<String> {
        let value = match &field.kind {
            FieldKind::Select { placeholder, options } => {
                self.select(field.label, placeholder, options, initial)?
            }
            FieldKind::Date => Input::<String>::with_theme(&self.theme)
                .with_prompt(field.label)
                .with_initial_text(initial)
                .allow_empty(true)
                .validate_with(|input: &String| {
                    let v = input.trim();
                    if v.is_empty() || NaiveDate::parse_from_str(v, "%Y-%m-%d").is_ok() {
                        Ok(())
                    } else {
                        Err("Format tanggal: YYYY-MM-DD")
                    }
                })
                .interact_text()?,
            FieldKind::Number => Input::<String>::with_theme(&self.theme)
                .with_prompt(field.label)
                .with_initial_text(initial)
                .allow_empty(true)
                .validate_with(|input: &String| {
                    if input.trim().chars().all(|c| c.is_ascii_digit()) {
                        Ok(())
                    } else {
                        Err("Hanya angka")
                    }
                })
                .interact_text()?,
            FieldKind::Text | FieldKind::TextArea => Input::<String>::with_theme(&self.theme)
                .with_prompt(field.label)
                .with_initial_text(initial)
                .allow_empty(true)
                .interact_text()?,
        };
        Ok(value)
    }

    fn action(&mut self) -> Result<FormAction> {
        let chosen = Select::with_theme(&self.theme)
            .items(&["Daftar Sekarang", "Reset"])
            .default(0)
            .interact()?;
        Ok(if chosen == 0 { FormAction::Submit } else { FormAction::Reset })
    }

    fn show_errors(
        &mut self,
        fields: &[Field],
        errors: &BTreeMap<&'static str, String>,
    ) -> Result<()> {
        self.term.write_line("")?;
        for field in fields {
            if let Some(message) = errors.get(field.key) {
                self.term.write_line(&format!(
                    "  {}: {}",
                    style(field.label).bold(),
                    style(message).red(),
                ))?;
            }
        }
        self.term.write_line("")?;
        Ok(())
    }

    fn dialog(&mut self, dialog: &Dialog) -> Result<()> {
        let button = format!("[ {} ]", dialog.confirm_label);
        let inner = dialog
            .title
            .chars()
            .count()
            .max(dialog.text.chars().count())
            .max(button.chars().count());

        self.term.write_line("")?;
        self.term
            .write_line(&self.paint(dialog.icon, format!("┌{}┐", "─".repeat(inner + 2))))?;
        self.term
            .write_line(&self.paint(dialog.icon, format!("│ {:<inner$} │", dialog.title)))?;
        self.term
            .write_line(&self.paint(dialog.icon, format!("│ {:<inner$} │", dialog.text)))?;
        self.term
            .write_line(&self.paint(dialog.icon, format!("│ {:<inner$} │", button)))?;
        self.term
            .write_line(&self.paint(dialog.icon, format!("└{}┘", "─".repeat(inner + 2))))?;

        // tunggu Enter sebagai konfirmasi
        self.term.read_line()?;
        Ok(())
    }
}
