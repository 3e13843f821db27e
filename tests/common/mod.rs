#![allow(dead_code)]

use rand::Rng;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const CATALOG_FIXTURE: &str = "tests/fixtures/catalog.csv";

/// Number of products in the catalog fixture.
pub const CATALOG_SIZE: u32 = 9;

/// Writes a command script with the given rows under the standard header.
pub fn commands_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action, product, quantity").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Writes `rows` random commands against the catalog fixture.
pub fn generate_commands(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["action", "product", "quantity"])?;

    let mut rng = rand::thread_rng();
    for _ in 0..rows {
        let product = rng.gen_range(1..=CATALOG_SIZE).to_string();
        match rng.gen_range(0..100) {
            0..=59 => wtr.write_record(["add", product.as_str(), ""])?,
            60..=79 => {
                let quantity = rng.gen_range(-1..=5).to_string();
                wtr.write_record(["update", product.as_str(), quantity.as_str()])?
            }
            80..=98 => wtr.write_record(["remove", product.as_str(), ""])?,
            _ => wtr.write_record(["clear", "", ""])?,
        }
    }

    wtr.flush()?;
    Ok(())
}
