//! Marine band derived from the GIS areas.

use std::collections::BTreeSet;

use super::offending_ids;
use crate::config::MarineBands;

/// Band of a marine ratio; `None` when the ratio is not a number.
pub fn band(ratio: f64, bands: &MarineBands) -> Option<u8> {
    if !ratio.is_finite() {
        return None;
    }
    if ratio <= bands.terrestrial_max {
        Some(0)
    } else if ratio >= bands.marine_min {
        Some(2)
    } else {
        Some(1)
    }
}

/// Records whose declared `MARINE` differs from the derived band.
///
/// The ratio is kept in a local buffer; a record whose ratio cannot be
/// computed or whose declaration is null is reported.
pub fn misclassified(
    ids: &[String],
    declared: &[Option<String>],
    marine_area: &[Option<f64>],
    total_area: &[Option<f64>],
    bands: &MarineBands,
) -> BTreeSet<String> {
    let derived: Vec<Option<u8>> = marine_area
        .iter()
        .zip(total_area)
        .map(|(marine, total)| match (marine, total) {
            (Some(marine), Some(total)) => band(marine / total, bands),
            _ => None,
        })
        .collect();
    offending_ids(ids, |idx| match (&declared[idx], derived[idx]) {
        (Some(declared), Some(band)) => *declared != band.to_string(),
        _ => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let bands = MarineBands::default();
        assert_eq!(band(0.0, &bands), Some(0));
        assert_eq!(band(0.1, &bands), Some(0));
        assert_eq!(band(0.10001, &bands), Some(1));
        assert_eq!(band(0.89999, &bands), Some(1));
        assert_eq!(band(0.9, &bands), Some(2));
        assert_eq!(band(1.0, &bands), Some(2));
        assert_eq!(band(f64::NAN, &bands), None);
        assert_eq!(band(f64::INFINITY, &bands), None);
    }

    #[test]
    fn zero_total_area_is_reported() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let declared = vec![Some("0".to_string()), Some("0".to_string())];
        let offenders = misclassified(
            &ids,
            &declared,
            &[Some(0.0), Some(0.0)],
            &[Some(10.0), Some(0.0)],
            &MarineBands::default(),
        );
        assert_eq!(offenders, BTreeSet::from(["b".to_string()]));
    }
}
