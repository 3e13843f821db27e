use crate::domain::catalog::Catalog;
use crate::domain::product::Product;
use crate::error::{CartError, Result};
use csv::StringRecord;
use std::io::Read;

/// Reads catalog products from a CSV source.
///
/// Expects an `id, name, price, category, description, image` header; the last
/// two columns may be empty or missing. Every row is validated on the way in.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn products(mut self) -> impl Iterator<Item = Result<Product>> {
        let (headers, header_error) = match self.reader.headers() {
            Ok(headers) => (headers.clone(), None),
            Err(e) => (StringRecord::new(), Some(CartError::from(e))),
        };

        header_error
            .map(Err)
            .into_iter()
            .chain(self.reader.into_records().map(move |result| -> Result<Product> {
                let mut record = result?;
                // Short rows leave the optional trailing columns empty
                while record.len() < headers.len() {
                    record.push_field("");
                }
                Ok(record.deserialize(Some(&headers))?)
            }))
    }

    /// Reads the whole source into a `Catalog`.
    ///
    /// Unlike cart commands, a single bad catalog row fails the whole load.
    pub fn into_catalog(self) -> Result<Catalog> {
        let products = self.products().collect::<Result<Vec<_>>>()?;
        tracing::debug!(products = products.len(), "Catalog loaded");
        Catalog::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_builds_catalog() {
        let data = "id, name, price, category, description, image\n\
                    1, Wireless Headphones, 89.99, audio, Over-ear, /img/1.jpg\n\
                    2, Desk Lamp, 24.50, home";
        let catalog = CatalogReader::new(data.as_bytes()).into_catalog().unwrap();

        assert_eq!(catalog.len(), 2);
        let lamp = catalog.get(ProductId(2)).unwrap();
        assert_eq!(lamp.price().value(), dec!(24.50));
        assert_eq!(lamp.description(), "");
    }

    #[test]
    fn test_reader_accepts_rows_without_optional_columns() {
        let data = "id, name, price, category, description, image\n\
                    1, Audio Cable, 15.00, audio\n\
                    2, Desk Lamp, 24.50, home, LED\n\
                    3, Yoga Mat, 0.01, sports, , /img/3.jpg";
        let catalog = CatalogReader::new(data.as_bytes()).into_catalog().unwrap();

        assert_eq!(catalog.len(), 3);
        let cable = catalog.get(ProductId(1)).unwrap();
        assert_eq!(cable.category(), "audio");
        assert_eq!(cable.description(), "");
        assert_eq!(cable.image(), "");
        assert_eq!(catalog.get(ProductId(2)).unwrap().description(), "LED");
        assert_eq!(catalog.get(ProductId(3)).unwrap().image(), "/img/3.jpg");
    }

    #[test]
    fn test_reader_rejects_rows_missing_required_columns() {
        let data = "id, name, price, category, description, image\n1, Audio Cable, 15.00";
        assert!(CatalogReader::new(data.as_bytes()).into_catalog().is_err());
    }

    #[test]
    fn test_reader_rejects_invalid_rows() {
        let negative = "id, name, price, category\n1, Lamp, -3, home";
        assert!(CatalogReader::new(negative.as_bytes()).into_catalog().is_err());

        let duplicate = "id, name, price, category\n1, Lamp, 3, home\n1, Rug, 30, home";
        assert!(matches!(
            CatalogReader::new(duplicate.as_bytes()).into_catalog(),
            Err(CartError::ValidationError(_))
        ));
    }
}
