use crate::application::session::CartView;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct LineRow<'a> {
    product: u32,
    name: &'a str,
    category: &'a str,
    unit_price: String,
    quantity: u32,
    line_total: String,
}

#[derive(Serialize)]
struct SummaryRow {
    subtotal: String,
    tax: String,
    shipping: String,
    total: String,
}

#[derive(Serialize)]
struct RecommendationRow<'a> {
    product: u32,
    name: &'a str,
    category: &'a str,
    price: String,
}

/// Writes a cart view as three CSV sections separated by a blank line.
///
/// Sections are the cart lines, the order summary and the recommendations, each
/// with its own header. Amounts are written with two decimal places.
pub struct CartReportWriter<W: Write> {
    out: W,
}

impl<W: Write> CartReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_view(&mut self, view: &CartView) -> Result<()> {
        self.write_section(
            &["product", "name", "category", "unit_price", "quantity", "line_total"],
            view.items.iter().map(|item| LineRow {
                product: item.id().0,
                name: item.product.name(),
                category: item.product.category(),
                unit_price: item.product.price().to_string(),
                quantity: item.quantity(),
                line_total: item.line_total().to_string(),
            }),
        )?;
        writeln!(self.out)?;

        let summary = &view.summary;
        self.write_section(
            &["subtotal", "tax", "shipping", "total"],
            std::iter::once(SummaryRow {
                subtotal: summary.subtotal.to_string(),
                tax: summary.tax.to_string(),
                shipping: summary.shipping.to_string(),
                total: summary.total.to_string(),
            }),
        )?;
        writeln!(self.out)?;

        self.write_section(
            &["product", "name", "category", "price"],
            view.recommendations.iter().map(|product| RecommendationRow {
                product: product.id().0,
                name: product.name(),
                category: product.category(),
                price: product.price().to_string(),
            }),
        )?;
        self.out.flush()?;
        Ok(())
    }

    // Headers are written explicitly so that empty sections still get one.
    fn write_section<T: Serialize>(
        &mut self,
        header: &[&str],
        rows: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.out);
        writer.write_record(header)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
