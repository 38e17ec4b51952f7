//! Rule events emitted on rayon workers stay inside the `validate` span.

mod common;

use std::io::Write;
use std::sync::{Arc, Mutex};

use common::{clean_rows, codes, dataset};
use tracing_subscriber::fmt::MakeWriter;
use wdpa_model::SchemaVariant;
use wdpa_validate::{Catalog, ValidationConfig, Validator};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("poisoned log buffer"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn rule_events_carry_the_validate_span() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    // Rayon workers only see a global subscriber.
    tracing::subscriber::set_global_default(subscriber).expect("global subscriber");

    let catalog =
        Catalog::resolve(SchemaVariant::Polygon, &ValidationConfig::default()).expect("catalog");
    let codes = codes();
    let data = dataset(SchemaVariant::Polygon, &clean_rows(4));
    let report = Validator::new(&catalog)
        .with_reference_codes(&codes)
        .validate(&data);
    assert!(report.is_clean());

    let output = String::from_utf8(captured.0.lock().expect("log buffer").clone())
        .expect("utf8 log output");
    let rule_lines: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("rule evaluated"))
        .collect();
    assert_eq!(rule_lines.len(), catalog.len());
    assert!(
        rule_lines.iter().all(|line| line.contains("validate{")),
        "rule events outside the validate span:\n{output}"
    );
}
