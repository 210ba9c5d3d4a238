use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum QuoteCmd {
    #[command(
        about = "List quotes",
        long_about = "List quotes in catalog order, optionally narrowed to a category and a search term, shuffled, and truncated."
    )]
    List {
        #[arg(long, value_name = "NAME", help = "Only quotes in this category")]
        category: Option<String>,
        #[arg(long, value_name = "TERM", help = "Case-insensitive match on text, author or category")]
        search: Option<String>,
        #[arg(long, default_value_t = false, help = "Shuffle the result")]
        shuffle: bool,
        #[arg(long, value_name = "N", help = "Show at most N quotes")]
        limit: Option<usize>,
    },
    #[command(about = "Show a quote by id")]
    Get {
        #[arg(value_name = "ID", allow_hyphen_values = true)]
        id: String,
    },
    #[command(
        about = "Draw random quotes",
        long_about = "Draw one random quote, or COUNT distinct quotes, from the whole catalog or from one category."
    )]
    Random {
        #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
        count: Option<i64>,
        #[arg(long, value_name = "NAME")]
        category: Option<String>,
    },
    #[command(about = "Draw one random quote from every category")]
    PerCategory,
    #[command(about = "List categories with their quote counts")]
    Categories,
}
