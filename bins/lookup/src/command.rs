//! Command parsing and rendering for the lookup CLI.

use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use coinage_core::{
    Currency, find_by_code, find_by_symbol, find_unique_by_symbol, list_all, list_unique_symbols,
    validate,
};
use coinage_shared::OutputFormat;
use serde::Serialize;

/// Currency lookups over the built-in catalog.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "coinage")]
pub struct Cli {
    /// Lookup to run.
    #[command(subcommand)]
    pub command: Command,

    /// Render JSON regardless of the configured output format
    #[arg(long, global = true)]
    pub json: bool,
}

impl Cli {
    /// Output format after applying `--json` over the configured one.
    pub fn output(&self, configured: OutputFormat) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            configured
        }
    }
}

/// A lookup to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a currency by code (case-insensitive)
    Code {
        /// Currency code, e.g. USD
        code: String,
    },
    /// Check whether a code is known
    Validate {
        /// Currency code, e.g. usd
        code: String,
    },
    /// List every currency using a symbol
    Symbol {
        /// Exact symbol, e.g. $
        symbol: String,
    },
    /// Look up the currency a symbol identifies alone
    Unique {
        /// Exact symbol, e.g. €
        symbol: String,
    },
    /// Dump every currency
    List,
    /// Dump the unique-symbol index
    UniqueSymbols,
}

#[derive(Serialize)]
struct Validation<'a> {
    code: &'a str,
    valid: bool,
}

impl Command {
    /// Runs the lookup and renders the result.
    ///
    /// Catalog misses are returned as `CatalogError` inside the `anyhow` error.
    pub fn run(&self, output: OutputFormat) -> anyhow::Result<String> {
        match self {
            Self::Code { code } => render_one(find_by_code(code)?, output),
            Self::Validate { code } => {
                let valid = validate(code);
                match output {
                    OutputFormat::Text => Ok(valid.to_string()),
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&Validation {
                        code,
                        valid,
                    })?),
                }
            }
            Self::Symbol { symbol } => render_many(&find_by_symbol(symbol), output),
            Self::Unique { symbol } => render_one(find_unique_by_symbol(symbol)?, output),
            Self::List => render_many(&list_all().values().copied().collect::<Vec<_>>(), output),
            Self::UniqueSymbols => render_index(list_unique_symbols(), output),
        }
    }
}

fn text_line(currency: &Currency) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        currency.code, currency.symbol, currency.minor_units, currency.name
    )
}

fn render_one(currency: &Currency, output: OutputFormat) -> anyhow::Result<String> {
    match output {
        OutputFormat::Text => Ok(text_line(currency)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(currency)?),
    }
}

fn render_many(currencies: &[&Currency], output: OutputFormat) -> anyhow::Result<String> {
    match output {
        OutputFormat::Text => Ok(currencies
            .iter()
            .copied()
            .map(text_line)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(currencies)?),
    }
}

fn render_index(
    index: &BTreeMap<&'static str, &'static Currency>,
    output: OutputFormat,
) -> anyhow::Result<String> {
    match output {
        OutputFormat::Text => Ok(index
            .iter()
            .map(|(symbol, currency)| format!("{symbol}\t{}", currency.code))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(index)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use coinage_core::{CatalogError, Lookup};
    use rstest::rstest;

    fn code(code: &str) -> Command {
        Command::Code { code: code.into() }
    }

    #[rstest]
    #[case(&["coinage", "code", "usd"], code("usd"))]
    #[case(&["coinage", "validate", "XYZ"], Command::Validate { code: "XYZ".into() })]
    #[case(&["coinage", "symbol", "$"], Command::Symbol { symbol: "$".into() })]
    #[case(&["coinage", "unique", "€"], Command::Unique { symbol: "€".into() })]
    #[case(&["coinage", "list"], Command::List)]
    #[case(&["coinage", "unique-symbols"], Command::UniqueSymbols)]
    fn test_parse(#[case] raw: &[&str], #[case] expected: Command) {
        let cli = Cli::try_parse_from(raw.iter().copied()).unwrap();
        assert_eq!(cli.command, expected);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_requires_command() {
        assert!(Cli::try_parse_from(["coinage"]).is_err());
    }

    #[rstest]
    #[case(&["coinage", "convert", "USD"], ErrorKind::InvalidSubcommand)]
    #[case(&["coinage", "code"], ErrorKind::MissingRequiredArgument)]
    #[case(&["coinage", "list", "extra"], ErrorKind::UnknownArgument)]
    fn test_parse_errors(#[case] raw: &[&str], #[case] kind: ErrorKind) {
        let err = Cli::try_parse_from(raw.iter().copied()).unwrap_err();
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_json_flag_overrides_config() {
        let cli = Cli::try_parse_from(["coinage", "list", "--json"]).unwrap();
        assert_eq!(cli.output(OutputFormat::Text), OutputFormat::Json);

        let cli = Cli::try_parse_from(["coinage", "list"]).unwrap();
        assert_eq!(cli.output(OutputFormat::Text), OutputFormat::Text);
        assert_eq!(cli.output(OutputFormat::Json), OutputFormat::Json);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_code_text() {
        let rendered = code("eur").run(OutputFormat::Text).unwrap();
        assert_eq!(rendered, "EUR\t€\t2\tEuro");
    }

    #[test]
    fn test_run_code_json() {
        let rendered = code("JPY").run(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["code"], "JPY");
        assert_eq!(value["symbol"], "¥");
        assert_eq!(value["minor_units"], 0);
    }

    #[test]
    fn test_run_code_not_found() {
        let err = code("xyz").run(OutputFormat::Text).unwrap_err();
        let err = err.downcast::<CatalogError>().unwrap();
        assert_eq!(err.lookup(), Lookup::Code);
        assert_eq!(err.key(), "xyz");
    }

    #[rstest]
    #[case("USD", "true")]
    #[case("xyz", "false")]
    fn test_run_validate(#[case] code: &str, #[case] expected: &str) {
        let rendered = Command::Validate { code: code.into() }
            .run(OutputFormat::Text)
            .unwrap();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_run_symbol_lists_every_match() {
        let rendered = Command::Symbol { symbol: "¥".into() }
            .run(OutputFormat::Text)
            .unwrap();
        assert_eq!(
            rendered,
            "CNY\t¥\t2\tChinese Yuan\nJPY\t¥\t0\tJapanese Yen"
        );

        let none = Command::Symbol { symbol: "¤".into() }
            .run(OutputFormat::Json)
            .unwrap();
        assert_eq!(none, "[]");
    }

    #[test]
    fn test_run_unique_shared_symbol_fails() {
        let err = Command::Unique { symbol: "¥".into() }
            .run(OutputFormat::Text)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>().map(CatalogError::lookup),
            Some(Lookup::UniqueSymbol)
        );
    }

    #[test]
    fn test_run_unique_symbols_json() {
        let rendered = Command::UniqueSymbols.run(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 99);
        assert_eq!(value["€"]["code"], "EUR");
    }

    #[test]
    fn test_run_list_text() {
        let rendered = Command::List.run(OutputFormat::Text).unwrap();
        assert_eq!(rendered.lines().count(), 160);
        assert!(rendered.starts_with("AED\t"));
    }
}
