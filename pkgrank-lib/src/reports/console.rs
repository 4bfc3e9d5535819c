use super::{ReportablePackage, common};
use crate::Result;
use crate::scoring::Dimension;
use core::fmt::Write;
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

const NOT_COMPUTED: &str = "not computed";

pub fn generate<W: Write>(
    packages: &[ReportablePackage],
    use_colors: bool,
    qualification_threshold: f64,
    decimal_places: usize,
    writer: &mut W,
) -> Result<()> {
    let max_label_len = Dimension::iter().map(|d| d.to_string().len()).max().unwrap_or(0);

    for (index, package) in packages.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
            writeln!(writer, "═══════════════════════════════════════")?;
            writeln!(writer)?;
        }

        let status = if package.qualified { "QUALIFIED" } else { "DISQUALIFIED" };
        let status = if use_colors {
            if package.qualified {
                status.green().bold().to_string()
            } else {
                status.red().bold().to_string()
            }
        } else {
            status.to_string()
        };

        if use_colors {
            writeln!(writer, "{} is {status}", package.url.bold())?;
        } else {
            writeln!(writer, "{} is {status}", package.url)?;
        }

        for dimension in Dimension::iter() {
            let label = dimension.to_string();
            let value = common::format_dimension(&package.score, dimension, decimal_places);

            let rendered = match (value, package.score.get(dimension)) {
                (Some(text), Some(raw)) if use_colors && dimension.is_component() => {
                    if raw >= qualification_threshold {
                        text.green().to_string()
                    } else {
                        text.red().to_string()
                    }
                }
                (Some(text), _) => text,
                (None, _) if use_colors => NOT_COMPUTED.dimmed().to_string(),
                (None, _) => NOT_COMPUTED.to_string(),
            };

            writeln!(writer, "  {label:<max_label_len$} : {rendered}")?;
        }
    }

    Ok(())
}
