use std::io::{self, Write};

use anyhow::{Context as AnyhowContext, Result};
use rand::Rng;
use serde::Serialize;

use super::CommandRunner;
use crate::cli::QuoteCmd;
use crate::context::Context;
use crate::rest::Envelope;
use crate::store::{query, QuoteStore, QuoteView};
use crate::types::{parse_quote_id, CategorySummary, QuoteError, QuoteRecord};

impl CommandRunner for QuoteCmd {
    fn run(&self, ctx: &Context, store: &QuoteStore) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut rng = ctx.rng();
        self.run_to(ctx, store, &mut rng, &mut out)
    }
}

impl QuoteCmd {
    pub fn run_to<R: Rng + ?Sized>(
        &self,
        ctx: &Context,
        store: &QuoteStore,
        rng: &mut R,
        out: &mut dyn Write,
    ) -> Result<()> {
        match self {
            QuoteCmd::List {
                category,
                search,
                shuffle,
                limit,
            } => {
                let mut view = match search {
                    Some(term) => QuoteView::new(store.search(term)),
                    None => store.view(),
                };
                if let Some(category) = category {
                    view = view.in_category(category);
                }
                if *shuffle {
                    view = QuoteView::new(store.shuffle(view.quotes(), rng));
                }
                if let Some(n) = limit.or(ctx.default_limit) {
                    view = view.limit(n);
                }
                print_quotes(ctx, store, view.into_quotes(), out)
            }
            QuoteCmd::Get { id } => {
                let id = parse_quote_id(id)?;
                let quote = store.get_by_id(id)?.clone();
                print_quotes(ctx, store, vec![quote], out)
            }
            QuoteCmd::Random { count, category } => {
                let pool = match category {
                    Some(category) => QuoteView::new(store.list_by_category(category)),
                    None => store.view(),
                };
                let quotes = match count {
                    Some(n) => query::sample(pool.quotes(), *n, rng),
                    None => {
                        let quote = query::pick_one(pool.quotes(), rng).cloned().ok_or_else(|| {
                            match category {
                                Some(category) => {
                                    QuoteError::NotFound(format!("category {}", category))
                                }
                                None => QuoteError::EmptyCatalog,
                            }
                        })?;
                        vec![quote]
                    }
                };
                print_quotes(ctx, store, quotes, out)
            }
            QuoteCmd::PerCategory => {
                let quotes = store.random_one_per_category(rng);
                print_quotes(ctx, store, quotes, out)
            }
            QuoteCmd::Categories => {
                let categories = store.list_categories();
                if ctx.json {
                    return print_json(&Envelope::new(categories, store.len()), out);
                }
                for CategorySummary { name, count } in categories {
                    writeln!(out, "{} ({})", name, count)?;
                }
                Ok(())
            }
        }
    }
}

fn print_quotes(
    ctx: &Context,
    store: &QuoteStore,
    quotes: Vec<QuoteRecord>,
    out: &mut dyn Write,
) -> Result<()> {
    if ctx.json {
        return print_json(&Envelope::new(quotes, store.len()), out);
    }
    if quotes.is_empty() {
        writeln!(out, "No quotes found.")?;
        return Ok(());
    }
    for quote in &quotes {
        writeln!(out, "{}", render(quote))?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("encoding JSON output")?;
    writeln!(out)?;
    Ok(())
}

fn render(quote: &QuoteRecord) -> String {
    match &quote.category {
        Some(category) => format!(
            "#{} \"{}\" - {} [{}]",
            quote.id, quote.text, quote.author, category
        ),
        None => format!("#{} \"{}\" - {}", quote.id, quote.text, quote.author),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSource;
    use crate::cli::Cli;
    use clap::Parser;
    use rand::{rngs::StdRng, SeedableRng};

    fn ctx(args: &[&str]) -> Context {
        let mut argv = vec!["quotebook"];
        argv.extend_from_slice(args);
        Context::from_cli(&Cli::try_parse_from(argv).unwrap())
    }

    fn run(cmd: QuoteCmd, ctx: &Context) -> Result<String> {
        let store = QuoteStore::new(CatalogSource::Embedded.load().unwrap());
        let mut rng = StdRng::seed_from_u64(17);
        let mut out = Vec::new();
        cmd.run_to(ctx, &store, &mut rng, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn list_renders_one_line_per_quote() {
        let output = run(
            QuoteCmd::List {
                category: Some("life".into()),
                search: None,
                shuffle: false,
                limit: Some(2),
            },
            &ctx(&[]),
        )
        .unwrap();
        assert_eq!(
            output,
            "#16 \"Life is what happens to you while you're busy making other plans.\" - John Lennon [life]\n\
             #17 \"You only live once, but if you do it right, once is enough.\" - Mae West [life]\n"
        );
    }

    #[test]
    fn list_reports_empty_results() {
        let output = run(
            QuoteCmd::List {
                category: None,
                search: Some("zzz".into()),
                shuffle: true,
                limit: None,
            },
            &ctx(&[]),
        )
        .unwrap();
        assert_eq!(output, "No quotes found.\n");
    }

    #[test]
    fn list_search_matches_author_within_category() {
        let output = run(
            QuoteCmd::List {
                category: Some("HUMOR".into()),
                search: Some("einstein".into()),
                shuffle: false,
                limit: None,
            },
            &ctx(&[]),
        )
        .unwrap();
        let ids: Vec<&str> = output
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(ids, vec!["#21"]);
    }

    #[test]
    fn list_uses_default_limit() {
        let output = run(
            QuoteCmd::List {
                category: None,
                search: None,
                shuffle: false,
                limit: None,
            },
            &ctx(&["--default-limit", "3"]),
        )
        .unwrap();
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn get_prints_json_envelope() {
        let output = run(QuoteCmd::Get { id: "9".into() }, &ctx(&["--json"])).unwrap();
        let envelope: Envelope<QuoteRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(envelope.count, 1);
        assert_eq!(envelope.data[0].author, "Nelson Mandela");
    }

    #[test]
    fn get_surfaces_lookup_errors() {
        let err = run(QuoteCmd::Get { id: "99".into() }, &ctx(&[])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QuoteError>(),
            Some(QuoteError::NotFound(_))
        ));

        let err = run(QuoteCmd::Get { id: "-1".into() }, &ctx(&[])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QuoteError>(),
            Some(QuoteError::InvalidArgument(_))
        ));
    }

    #[test]
    fn random_with_count_draws_distinct_quotes_from_category() {
        let output = run(
            QuoteCmd::Random {
                count: Some(3),
                category: Some("humor".into()),
            },
            &ctx(&["--json"]),
        )
        .unwrap();
        let envelope: Envelope<QuoteRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(envelope.count, 3);
        assert!(envelope
            .data
            .iter()
            .all(|q| q.category.as_deref() == Some("humor")));
    }

    #[test]
    fn random_from_unknown_category_is_not_found() {
        let err = run(
            QuoteCmd::Random {
                count: None,
                category: Some("poetry".into()),
            },
            &ctx(&[]),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QuoteError>(),
            Some(QuoteError::NotFound(_))
        ));
    }

    #[test]
    fn per_category_prints_five_lines() {
        let output = run(QuoteCmd::PerCategory, &ctx(&[])).unwrap();
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn categories_lists_counts() {
        let output = run(QuoteCmd::Categories, &ctx(&[])).unwrap();
        assert_eq!(
            output,
            "wisdom (5)\ninspiration (5)\nsuccess (5)\nlife (5)\nhumor (5)\n"
        );
    }
}
