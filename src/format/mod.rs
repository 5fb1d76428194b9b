//! Output formatting for search results (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::paapi::models::ProductSummary;

/// Formats product summaries for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats multiple products.
    pub fn format_products(&self, products: &[ProductSummary]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    // JSON formatting

    fn json_products(&self, products: &[ProductSummary]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_products(&self, products: &[ProductSummary]) -> String {
        let asin_width = 10;
        let price_width = 12;
        let rating_width = 8;
        let reviews_width = 8;
        let title_width = 50;

        let mut lines = Vec::new();

        // Header
        lines.push(format!(
            "{:<asin_width$}  {:<price_width$}  {:<rating_width$}  {:<reviews_width$}  {}",
            "ASIN", "Price", "Rating", "Reviews", "Title"
        ));
        lines.push(format!(
            "{:-<asin_width$}  {:-<price_width$}  {:-<rating_width$}  {:-<reviews_width$}  {:-<title_width$}",
            "", "", "", "", ""
        ));

        // Rows
        for product in products {
            let price_str = product
                .price
                .as_ref()
                .map(|p| p.display.clone())
                .unwrap_or_else(|| "N/A".to_string());

            let rating_str = match product.rating {
                Some(stars) => format!("{:.1}", stars),
                None => "N/A".to_string(),
            };

            let reviews_str = match product.total_reviews {
                Some(count) => count.to_string(),
                None => "N/A".to_string(),
            };

            let title = Self::truncate(&product.title, title_width);

            lines.push(format!(
                "{:<asin_width$}  {:>price_width$}  {:>rating_width$}  {:>reviews_width$}  {}",
                product.asin, price_str, rating_str, reviews_str, title
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_products(&self, products: &[ProductSummary]) -> String {
        let mut lines = Vec::new();

        lines.push("| ASIN | Price | Rating | Reviews | Title |".to_string());
        lines.push("|------|-------|--------|---------|-------|".to_string());

        for product in products {
            let price_str = product
                .price
                .as_ref()
                .map(|p| p.display.clone())
                .unwrap_or_else(|| "N/A".to_string());

            let rating_str = match product.rating {
                Some(stars) => format!("{:.1}", stars),
                None => "N/A".to_string(),
            };

            let reviews_str = match product.total_reviews {
                Some(count) => count.to_string(),
                None => "N/A".to_string(),
            };

            let title = Self::truncate(&product.title, 40).replace('|', "\\|");

            let title_cell = match &product.detail_page_url {
                Some(url) => format!("[{}]({})", title, url),
                None => title,
            };

            lines.push(format!(
                "| {} | {} | {} | {} | {} |",
                product.asin, price_str, rating_str, reviews_str, title_cell
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "asin,title,price,amount,currency,rating,reviews,image_url,url".to_string()
    }

    fn csv_products(&self, products: &[ProductSummary]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            let price =
                product.price.as_ref().map(|p| Self::csv_escape(&p.display)).unwrap_or_default();

            let amount = product
                .price
                .as_ref()
                .and_then(|p| p.amount.map(|a| a.to_string()))
                .unwrap_or_default();

            let currency =
                product.price.as_ref().and_then(|p| p.currency.clone()).unwrap_or_default();

            let rating = product.rating.map(|r| r.to_string()).unwrap_or_default();
            let reviews = product.total_reviews.map(|r| r.to_string()).unwrap_or_default();

            let title = Self::csv_escape(&product.title);
            let image_url = product.image_url.clone().unwrap_or_default();
            let url = product.detail_page_url.clone().unwrap_or_default();

            lines.push(format!(
                "{},{},{},{},{},{},{},{},{}",
                product.asin, title, price, amount, currency, rating, reviews, image_url, url
            ));
        }

        lines.join("\n")
    }

    /// Shortens a title to at most `max_chars` characters, never splitting
    /// inside a multibyte character.
    fn truncate(title: &str, max_chars: usize) -> String {
        if title.chars().count() > max_chars {
            let mut shortened: String = title.chars().take(max_chars - 3).collect();
            shortened.push_str("...");
            shortened
        } else {
            title.to_string()
        }
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
