use super::{ReportablePackage, common};
use crate::Result;
use crate::scoring::Dimension;
use core::fmt::Write;
use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::{EnumCount, IntoEnumIterator};

/// One output record, serialized with a fixed field order.
struct ScoreRecord<'a> {
    package: &'a ReportablePackage,
    decimal_places: usize,
}

impl Serialize for ScoreRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + Dimension::COUNT))?;
        map.serialize_entry("URL", self.package.url.as_ref())?;
        for dimension in Dimension::iter() {
            map.serialize_entry(
                dimension.field_name(),
                &common::format_dimension(&self.package.score, dimension, self.decimal_places),
            )?;
        }
        map.end()
    }
}

/// Write one compact JSON record per line.
pub fn generate_lines<W: Write>(packages: &[ReportablePackage], decimal_places: usize, writer: &mut W) -> Result<()> {
    for package in packages {
        let record = ScoreRecord { package, decimal_places };
        writeln!(writer, "{}", serde_json::to_string(&record)?)?;
    }

    Ok(())
}

/// Write all records as a pretty-printed JSON array.
pub fn generate<W: Write>(packages: &[ReportablePackage], decimal_places: usize, writer: &mut W) -> Result<()> {
    let records: Vec<_> = packages.iter().map(|package| ScoreRecord { package, decimal_places }).collect();
    writeln!(writer, "{}", serde_json::to_string_pretty(&records)?)?;
    Ok(())
}
