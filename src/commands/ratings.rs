use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::rating::RatingBucket;
use anyhow::Result;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, Color, Table};

pub const HELPFUL_LINKS: [(&str, &str); 4] = [
    ("Codeforces Home", "https://codeforces.com"),
    ("Problemset", "https://codeforces.com/problemset"),
    ("Contests", "https://codeforces.com/contests"),
    ("Ratings", "https://codeforces.com/ratings"),
];

fn table_color(bucket: RatingBucket) -> Color {
    match bucket.terminal_color() {
        colored::Color::BrightBlack => Color::DarkGrey,
        colored::Color::Green => Color::Green,
        colored::Color::Cyan => Color::Cyan,
        colored::Color::Blue => Color::Blue,
        colored::Color::Magenta => Color::Magenta,
        colored::Color::Red => Color::Red,
        colored::Color::BrightYellow => Color::Yellow,
        colored::Color::TrueColor { r, g, b } => Color::Rgb { r, g, b },
        _ => Color::Reset,
    }
}

pub fn legend_table(formatting: FormattingConfig) -> Table {
    let colored = formatting.use_color();
    let mut table = Table::new();
    table
        .load_preset(if colored { UTF8_FULL } else { ASCII_FULL })
        .set_header(vec!["Title", "Rating", "Class"]);
    if colored {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    for bucket in RatingBucket::ALL {
        let mut title = Cell::new(bucket.title());
        if colored {
            title = title.fg(table_color(bucket));
        }
        table.add_row(vec![
            title,
            Cell::new(bucket.range_label()),
            Cell::new(bucket.bucket_class()),
        ]);
    }
    table
}

pub fn render_ratings(formatting: FormattingConfig) -> String {
    let formatter = ColoredFormatter::new(formatting);
    let mut out = String::new();
    out.push_str(&formatter.header("Codeforces Rating System"));
    out.push('\n');
    out.push_str(&legend_table(formatting).to_string());
    out.push_str("\n\n");
    out.push_str(&formatter.header("Helpful Links"));
    out.push('\n');
    for (label, url) in HELPFUL_LINKS {
        out.push_str(&format!("  {:<16} {}\n", label, formatter.link(url)));
    }
    out
}

pub fn print_ratings(plain: bool) -> Result<()> {
    let formatting = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    print!("{}", render_ratings(formatting));
    Ok(())
}
