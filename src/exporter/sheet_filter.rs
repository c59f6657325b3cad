use crate::config::SheetConfig;
use std::collections::HashSet;

/// How a sheet filter ruled on one sheet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetDecision {
    Export,
    NotIncluded,
    Excluded,
}

/// Include/exclude filtering over sheet names.
///
/// An empty include set means every sheet is considered; the exclude set is
/// applied after the include set, so a name present in both is excluded.
#[derive(Debug, Clone, Default)]
pub struct SheetFilter {
    include: HashSet<String>,
    exclude: HashSet<String>,
}

impl SheetFilter {
    pub fn new(config: &SheetConfig) -> Self {
        Self {
            include: config.include.iter().cloned().collect(),
            exclude: config.exclude.iter().cloned().collect(),
        }
    }

    pub fn decide(&self, sheet_name: &str) -> SheetDecision {
        if !self.include.is_empty() && !self.include.contains(sheet_name) {
            return SheetDecision::NotIncluded;
        }
        if self.exclude.contains(sheet_name) {
            return SheetDecision::Excluded;
        }
        SheetDecision::Export
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(include: &[&str], exclude: &[&str]) -> SheetFilter {
        SheetFilter::new(&SheetConfig {
            include: include.iter().map(|s| s.to_string()).collect(),
            exclude: exclude.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_empty_filter_exports_everything() {
        let filter = filter(&[], &[]);
        assert_eq!(filter.decide("Sheet1"), SheetDecision::Export);
        assert_eq!(filter.decide(""), SheetDecision::Export);
    }

    #[test]
    fn test_include_list_restricts() {
        let filter = filter(&["A", "B"], &[]);
        assert_eq!(filter.decide("A"), SheetDecision::Export);
        assert_eq!(filter.decide("B"), SheetDecision::Export);
        assert_eq!(filter.decide("C"), SheetDecision::NotIncluded);
    }

    #[test]
    fn test_exclude_list_skips() {
        let filter = filter(&[], &["Scratch"]);
        assert_eq!(filter.decide("Scratch"), SheetDecision::Excluded);
        assert_eq!(filter.decide("Data"), SheetDecision::Export);
    }

    #[test]
    fn test_exclude_overrides_include() {
        let filter = filter(&["A", "B"], &["B"]);
        assert_eq!(filter.decide("A"), SheetDecision::Export);
        assert_eq!(filter.decide("B"), SheetDecision::Excluded);
        assert_eq!(filter.decide("C"), SheetDecision::NotIncluded);
    }

    #[test]
    fn test_names_match_exactly() {
        let filter = filter(&["Data"], &[]);
        assert_eq!(filter.decide("data"), SheetDecision::NotIncluded);
        assert_eq!(filter.decide("Data "), SheetDecision::NotIncluded);
    }
}
