use strum::{Display, EnumCount, EnumIter};

/// The quality dimensions reported for a package, in output order.
///
/// `Version` and `CodeReview` are part of the output record but are not
/// produced by any metric provider yet; they are always reported as not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display)]
pub enum Dimension {
    #[strum(to_string = "Net score")]
    NetScore,

    #[strum(to_string = "Ramp-up")]
    RampUp,

    #[strum(to_string = "Correctness")]
    Correctness,

    #[strum(to_string = "Bus factor")]
    BusFactor,

    #[strum(to_string = "License")]
    License,

    #[strum(to_string = "Responsive maintainer")]
    ResponsiveMaintainer,

    #[strum(to_string = "Version pinning")]
    Version,

    #[strum(to_string = "Code review")]
    CodeReview,
}

impl Dimension {
    /// Field name used in JSON score records.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::NetScore => "NET_SCORE",
            Self::RampUp => "RAMP_UP_SCORE",
            Self::Correctness => "CORRECTNESS_SCORE",
            Self::BusFactor => "BUS_FACTOR_SCORE",
            Self::License => "LICENSE_SCORE",
            Self::ResponsiveMaintainer => "RESPONSIVE_MAINTAINER_SCORE",
            Self::Version => "VERSION_SCORE",
            Self::CodeReview => "CODE_REVIEWED_PERCENTAGE",
        }
    }

    /// Whether the scoring engine produces a value for this dimension.
    #[must_use]
    pub const fn is_computed(self) -> bool {
        !matches!(self, Self::Version | Self::CodeReview)
    }

    /// Whether this dimension is one of the averaged components (everything but the net score).
    #[must_use]
    pub const fn is_component(self) -> bool {
        !matches!(self, Self::NetScore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_field_names_are_unique() {
        let names: HashSet<_> = Dimension::iter().map(Dimension::field_name).collect();
        assert_eq!(names.len(), Dimension::COUNT);
    }

    #[test]
    fn test_output_order_starts_with_net_score() {
        let order: Vec<_> = Dimension::iter().map(Dimension::field_name).collect();
        assert_eq!(
            order,
            [
                "NET_SCORE",
                "RAMP_UP_SCORE",
                "CORRECTNESS_SCORE",
                "BUS_FACTOR_SCORE",
                "LICENSE_SCORE",
                "RESPONSIVE_MAINTAINER_SCORE",
                "VERSION_SCORE",
                "CODE_REVIEWED_PERCENTAGE",
            ]
        );
    }

    #[test]
    fn test_uncomputed_dimensions() {
        let uncomputed: Vec<_> = Dimension::iter().filter(|d| !d.is_computed()).collect();
        assert_eq!(uncomputed, [Dimension::Version, Dimension::CodeReview]);
    }

    #[test]
    fn test_five_computed_components() {
        assert_eq!(Dimension::iter().filter(|d| d.is_component() && d.is_computed()).count(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::ResponsiveMaintainer.to_string(), "Responsive maintainer");
        assert_eq!(Dimension::NetScore.to_string(), "Net score");
    }
}
