use std::io::Write;

use serde::Serialize;

use crate::error::CliError;

/// Write `value` as JSON followed by a newline.
pub fn render<T: Serialize>(
    writer: &mut impl Write,
    value: &T,
    pretty: bool,
) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixerio_core::LatestRates;
    use std::collections::BTreeMap;

    #[test]
    fn compact_output_is_a_single_line() {
        let latest = LatestRates {
            base: String::from("USD"),
            rates: BTreeMap::from([(String::from("EUR"), 0.9)]),
            ..LatestRates::default()
        };

        let mut buffer = Vec::new();
        render(&mut buffer, &latest, false).expect("render");
        let text = String::from_utf8(buffer).expect("utf8");

        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(r#""rates":{"EUR":0.9}"#));
    }

    #[test]
    fn pretty_output_is_indented() {
        let latest = LatestRates::default();
        let mut buffer = Vec::new();
        render(&mut buffer, &latest, true).expect("render");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.lines().count() > 1);
        assert!(text.contains("\n  \"base\""));
    }
}
