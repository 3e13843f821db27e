use crate::domain::command::CartCommand;
use crate::error::{CartError, Result};
use std::io::Read;

/// Reads scripted cart commands from a CSV source.
///
/// Expects an `action, product, quantity` header. Whitespace is trimmed and
/// short rows (e.g. `clear` with no trailing fields) are accepted.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes commands.
    ///
    /// A malformed row yields an error for that row only; iteration continues
    /// with the next one.
    pub fn commands(self) -> impl Iterator<Item = Result<CartCommand>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CartError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductId;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, product, quantity\nadd, 1,\nupdate, 1, 3\nremove, 2,\nclear";
        let reader = CommandReader::new(data.as_bytes());
        let results: Vec<Result<CartCommand>> = reader.commands().collect();

        assert_eq!(results.len(), 4);
        assert_eq!(
            results[0].as_ref().unwrap(),
            &CartCommand::add(ProductId(1))
        );
        assert_eq!(
            results[1].as_ref().unwrap(),
            &CartCommand::update(ProductId(1), 3)
        );
        assert_eq!(results[3].as_ref().unwrap(), &CartCommand::clear());
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "action, product, quantity\nbuy, 1, 1\nadd, one, \nadd, 2, ";
        let reader = CommandReader::new(data.as_bytes());
        let results: Vec<Result<CartCommand>> = reader.commands().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_err());
        assert_eq!(
            results[2].as_ref().unwrap(),
            &CartCommand::add(ProductId(2))
        );
    }
}
